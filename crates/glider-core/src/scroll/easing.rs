//! Pure easing functions for scroll animations
//!
//! Each curve maps normalized progress [0, 1] to eased progress [0, 1].

use crate::config::EasingKind;

impl EasingKind {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]; out-of-range input is clamped
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingKind::Linear => t,
            EasingKind::EaseIn => cubic_ease_in(t),
            EasingKind::EaseOut => cubic_ease_out(t),
            EasingKind::EaseInOut => cubic_ease_in_out(t),
        }
    }
}

/// Cubic ease-in: f(t) = t³
#[inline]
fn cubic_ease_in(t: f64) -> f64 {
    t * t * t
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Cubic ease-in-out: f(t) = 4t³ for t < 0.5, 1 - (-2t+2)³/2 otherwise
#[inline]
fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingKind; 4] = [
        EasingKind::Linear,
        EasingKind::EaseIn,
        EasingKind::EaseOut,
        EasingKind::EaseInOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!((easing.apply(0.0)).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_continuous_at_midpoint() {
        // Both branches must agree at t = 0.5
        let below = 4.0 * 0.5f64.powi(3);
        let above = 1.0 - (-2.0 * 0.5 + 2.0f64).powi(3) / 2.0;
        assert!((below - 0.5).abs() < 1e-12);
        assert!((above - 0.5).abs() < 1e-12);
        assert!((EasingKind::EaseInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_spot_values() {
        assert!((EasingKind::Linear.apply(0.25) - 0.25).abs() < 1e-12);
        assert!((EasingKind::EaseIn.apply(0.5) - 0.125).abs() < 1e-12);
        assert!((EasingKind::EaseOut.apply(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), easing.apply(0.0));
            assert_eq!(easing.apply(1.5), easing.apply(1.0));
        }
    }
}
