use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            scroll: ScrollConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Scroll animation settings, applied to every navigation request unless
/// overridden per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Pixel adjustment subtracted from the computed target position
    /// (e.g., to clear a fixed header)
    #[serde(default)]
    pub offset: f64,
    /// Animation duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Interpolation curve
    #[serde(default)]
    pub easing: EasingKind,
    /// Requested behavior; informational, the engine always self-animates
    #[serde(default)]
    pub behavior: ScrollBehavior,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            offset: 0.0,
            duration_ms: default_duration_ms(),
            easing: EasingKind::default(),
            behavior: ScrollBehavior::default(),
        }
    }
}

impl ScrollConfig {
    /// Animation duration as a `Duration`
    #[inline]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds (frame interval for the animation loop)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// How long a one-shot section reveal stays highlighted, in milliseconds
    #[serde(default = "default_reveal_duration")]
    pub reveal_duration_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            reveal_duration_ms: default_reveal_duration(),
        }
    }
}

/// Easing curve selection for scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingKind {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

/// Native scroll behavior flag of the host viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Auto,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_duration_ms() -> u64 {
    1000
}

fn default_tick_rate() -> u64 {
    16 // ~60fps
}

fn default_reveal_duration() -> u64 {
    600
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/glider/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("glider")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.scroll.offset, 0.0);
        assert_eq!(config.scroll.duration_ms, 1000);
        assert_eq!(config.scroll.easing, EasingKind::EaseInOut);
        assert_eq!(config.scroll.behavior, ScrollBehavior::Smooth);
        assert_eq!(config.ui.tick_rate_ms, 16);
    }

    #[test]
    fn test_easing_kind_from_toml() {
        let config: ScrollConfig = toml::from_str(
            r#"
            duration_ms = 250
            easing = "ease-out"
            behavior = "auto"
            "#,
        )
        .unwrap();
        assert_eq!(config.duration(), Duration::from_millis(250));
        assert_eq!(config.easing, EasingKind::EaseOut);
        assert_eq!(config.behavior, ScrollBehavior::Auto);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [scroll]
            offset = 4.0
            "#,
        )
        .unwrap();
        assert_eq!(config.scroll.offset, 4.0);
        assert_eq!(config.scroll.duration_ms, 1000);
        assert_eq!(config.scroll.easing, EasingKind::EaseInOut);
    }
}
