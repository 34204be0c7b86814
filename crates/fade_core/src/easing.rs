//! Easing curves for gradient opacity falloff
//!
//! Robert Penner's easing equations, keyed by the names used in utility
//! class names (`ease-in-cubic`, `linear`, ...). Every curve maps `0.0` to
//! `0.0` and `1.0` to `1.0` and is monotonic in between.

use std::fmt;

use tracing::debug;

/// Named easing curve used to shape the opacity falloff of a fade
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
}

impl Easing {
    /// Every supported curve, in registration order
    pub const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
    ];

    /// Look up a curve by its class-name key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|easing| easing.key() == key)
    }

    /// Look up a curve by key, falling back to the default curve
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            debug!("unknown easing '{}', using {}", key, Easing::default());
            Easing::default()
        })
    }

    /// Stable key used in class names and `--fade-easing`
    pub fn key(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInQuad => "ease-in-quad",
            Easing::EaseOutQuad => "ease-out-quad",
            Easing::EaseInOutQuad => "ease-in-out-quad",
            Easing::EaseInCubic => "ease-in-cubic",
            Easing::EaseOutCubic => "ease-out-cubic",
            Easing::EaseInOutCubic => "ease-in-out-cubic",
            Easing::EaseInQuart => "ease-in-quart",
            Easing::EaseOutQuart => "ease-out-quart",
            Easing::EaseInOutQuart => "ease-in-out-quart",
        }
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::EaseInQuad => "Ease In Quad",
            Easing::EaseOutQuad => "Ease Out Quad",
            Easing::EaseInOutQuad => "Ease In Out Quad",
            Easing::EaseInCubic => "Ease In Cubic",
            Easing::EaseOutCubic => "Ease Out Cubic",
            Easing::EaseInOutCubic => "Ease In Out Cubic",
            Easing::EaseInQuart => "Ease In Quart",
            Easing::EaseOutQuart => "Ease Out Quart",
            Easing::EaseInOutQuart => "Ease In Out Quart",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Easing::default()
    }

    /// Apply easing to a normalized value
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInQuart => t * t * t * t,
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in Easing::ALL {
            assert!(easing.apply(0.0).abs() < 1e-9, "{} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{} at 1", easing);
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in Easing::ALL {
            let mut prev = 0.0;
            for i in 0..=100 {
                let value = easing.apply(i as f64 / 100.0);
                assert!(value + 1e-12 >= prev, "{} decreases at {}", easing, i);
                prev = value;
            }
        }
    }

    #[test]
    fn test_curve_shapes() {
        assert!((Easing::Linear.apply(0.5) - 0.5).abs() < 0.001);
        assert!(Easing::EaseInCubic.apply(0.5) < 0.5);
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
        assert!((Easing::EaseInOutQuart.apply(0.5) - 0.5).abs() < 0.001);
        assert!((Easing::EaseOutCubic.apply(0.2) - 0.488).abs() < 0.001);
    }

    #[test]
    fn test_keys_round_trip() {
        for easing in Easing::ALL {
            assert_eq!(Easing::from_key(easing.key()), Some(easing));
        }
        assert_eq!(Easing::from_key("ease-out"), None);
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(Easing::resolve("bogus"), Easing::EaseOutCubic);
        assert_eq!(Easing::resolve("linear"), Easing::Linear);
        assert!(Easing::default().is_default());
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Easing::EaseInQuad.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseInQuad.apply(2.0), 1.0);
    }
}
