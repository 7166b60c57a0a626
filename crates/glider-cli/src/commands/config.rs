use anyhow::Result;

use glider_core::AppConfig;

/// Print the effective configuration as TOML
pub fn show(config: &AppConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config)?;
    println!("# {}", AppConfig::config_path().display());
    print!("{rendered}");
    Ok(())
}

/// Write the default configuration file, refusing to overwrite
pub fn init() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        anyhow::bail!("config already exists at {}", path.display());
    }
    AppConfig::default().save()?;
    println!("Wrote {}", path.display());
    Ok(())
}
