//! Gradient stop generation
//!
//! Turns a step count, a direction flag and an easing curve into an ordered
//! list of `(position, opacity)` stops. The precomputed [`table`](crate::table)
//! is used verbatim for the default easing; every other combination is
//! synthesized by sampling the curve.
//!
//! # Example
//!
//! ```rust
//! use fade_core::stops::{generate, gradient_stops};
//! use fade_core::Easing;
//!
//! let stops = generate(6, false, Easing::EaseOutCubic);
//! assert_eq!(stops.len(), 6);
//!
//! let css = gradient_stops(2, false, Easing::Linear);
//! assert_eq!(
//!     css,
//!     "oklch(from var(--fade-oklch) l c h / 1.00) 0%, \
//!      oklch(from var(--fade-oklch) l c h / 0.00) 100%"
//! );
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::easing::Easing;
use crate::table;

/// Step count used when none is requested
pub const DEFAULT_STEPS: u32 = 6;

/// Color function prefix for stops that take their color from `--fade-oklch`
pub const OKLCH_PREFIX: &str = "oklch(from var(--fade-oklch) l c h / ";

/// A single gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient line, in percent (0-100)
    pub position: f64,
    /// Alpha of the fade color at this position (0-1)
    pub opacity: f64,
}

impl GradientStop {
    pub fn new(position: f64, opacity: f64) -> Self {
        Self {
            position: round2(position),
            opacity: round2(opacity),
        }
    }

    /// Render as `<prefix><opacity>) <position>%`
    ///
    /// The prefix is an open color function taking the opacity as its last
    /// argument, e.g. [`OKLCH_PREFIX`] or `hsla(0, 0%, 100%,`.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{}{}) {}%",
            prefix,
            format_opacity(self.opacity),
            format_position(self.position)
        )
    }
}

/// Generate the stops for a fade
///
/// `reverse` fades from transparent at 0% to opaque at 100%. A step count of
/// zero yields no stops.
pub fn generate(steps: u32, reverse: bool, easing: Easing) -> Vec<GradientStop> {
    if steps == 0 {
        return Vec::new();
    }

    let profile = table::lookup(steps);

    if let (Some(profile), true) = (profile, easing.is_default()) {
        let count = profile.opacities.len();
        return profile
            .positions
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                let opacity = if reverse {
                    profile.opacities[count - 1 - i]
                } else {
                    profile.opacities[i]
                };
                GradientStop::new(position, opacity)
            })
            .collect();
    }

    let positions: Vec<f64> = match profile {
        Some(profile) => profile.positions.to_vec(),
        None => {
            debug!("no stop profile for {} steps, spacing evenly", steps);
            (0..=steps)
                .map(|i| i as f64 / steps as f64 * 100.0)
                .collect()
        }
    };

    positions
        .into_iter()
        .map(|position| {
            let eased = easing.apply(position / 100.0);
            let opacity = if reverse { eased } else { 1.0 - eased };
            GradientStop::new(position, opacity)
        })
        .collect()
}

/// Generate stops for an easing given by key, falling back to the default
pub fn generate_named(steps: u32, reverse: bool, easing: &str) -> Vec<GradientStop> {
    generate(steps, reverse, Easing::resolve(easing))
}

/// Join stops into a `linear-gradient()` argument list
pub fn join_stops(stops: &[GradientStop], prefix: &str) -> String {
    stops
        .iter()
        .map(|stop| stop.format(prefix))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate and format the stops for a fade colored by `--fade-oklch`
pub fn gradient_stops(steps: u32, reverse: bool, easing: Easing) -> String {
    join_stops(&generate(steps, reverse, easing), OKLCH_PREFIX)
}

/// Round to two decimal places, half-up on the exact binary value
///
/// Matches `Number.prototype.toFixed(2)`: `0.995` is stored as
/// `0.99499999...` and rounds down to `0.99`.
pub fn round2(value: f64) -> f64 {
    let rounded = Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|exact| exact.to_f64())
        .unwrap_or(value);
    // Avoid emitting "-0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Opacity with exactly two decimals (`0.51`, `1.00`)
pub fn format_opacity(opacity: f64) -> String {
    format!("{:.2}", round2(opacity))
}

/// Position rounded to two decimals without trailing zeros (`20`, `16.67`)
pub fn format_position(position: f64) -> String {
    format!("{}", round2(position))
}

/// Memoizes generated stops by `(steps, reverse, easing)`
///
/// Generation is pure, so a cache can be shared freely between threads.
#[derive(Debug, Default)]
pub struct StopCache {
    entries: Mutex<FxHashMap<(u32, bool, Easing), Arc<[GradientStop]>>>,
}

impl StopCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stops for a fade, generating them on first use
    pub fn get(&self, steps: u32, reverse: bool, easing: Easing) -> Arc<[GradientStop]> {
        let key = (steps, reverse, easing);
        let mut entries = self.lock();
        if let Some(stops) = entries.get(&key) {
            trace!("stop cache hit: {:?}", key);
            return Arc::clone(stops);
        }
        let stops: Arc<[GradientStop]> = generate(steps, reverse, easing).into();
        entries.insert(key, Arc::clone(&stops));
        stops
    }

    /// Get the formatted `--fade-oklch` stop list for a fade
    pub fn gradient_stops(&self, steps: u32, reverse: bool, easing: Easing) -> String {
        join_stops(&self.get(steps, reverse, easing), OKLCH_PREFIX)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<(u32, bool, Easing), Arc<[GradientStop]>>> {
        // Entries are immutable once inserted, so a poisoned map is still valid
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
