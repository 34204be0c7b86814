//! Utility class name resolution
//!
//! Maps a `(color, direction, steps, easing)` selection to the smallest set
//! of utility classes that renders it. Default values contribute no class:
//!
//! | steps == 6 | default easing | class                   |
//! |------------|----------------|-------------------------|
//! | yes        | yes            | (none)                  |
//! | yes        | no             | `fade-<easing>-6`       |
//! | no         | yes            | `fade-<steps>`          |
//! | no         | no             | `fade-<easing>-<steps>` |
//!
//! # Example
//!
//! ```rust
//! use fade_core::classes::fade_class;
//! use fade_core::Easing;
//!
//! assert_eq!(fade_class("blue", "b", 6, Easing::EaseOutCubic), "fade-from-blue-500 fade-to-b");
//! assert_eq!(
//!     fade_class("blue", "b", 12, Easing::Linear),
//!     "fade-from-blue-500 fade-to-b fade-linear-12"
//! );
//! ```

use tracing::debug;

use crate::direction::Direction;
use crate::easing::Easing;
use crate::stops::DEFAULT_STEPS;
use crate::table::{MAX_STEPS, MIN_STEPS};

/// Color families offered by the playground, each resolved at shade 500
pub const COLORS: [&str; 18] = [
    "red", "orange", "amber", "yellow", "lime", "green", "emerald", "teal", "cyan", "sky", "blue",
    "indigo", "violet", "purple", "fuchsia", "pink", "rose", "slate",
];

/// Colors that resolve to their own name rather than a `-500` shade
const BARE_COLORS: [&str; 3] = ["slate-900", "black", "white"];

/// Step counts offered as presets
pub const STEP_PRESETS: [u32; 8] = [2, 4, 6, 8, 12, 16, 20, 24];

/// Class used when a color is not recognized
pub const DEFAULT_COLOR_CLASS: &str = "fade-from-blue-500";

/// `fade-from-*` class for a playground color
pub fn color_class(color: &str) -> String {
    if COLORS.contains(&color) {
        format!("fade-from-{}-500", color)
    } else if BARE_COLORS.contains(&color) {
        format!("fade-from-{}", color)
    } else {
        debug!("unknown color '{}', using {}", color, DEFAULT_COLOR_CLASS);
        DEFAULT_COLOR_CLASS.to_string()
    }
}

/// `fade-to-*` class for a direction token, defaulting to `fade-to-b`
pub fn direction_class(direction: &str) -> String {
    format!("fade-to-{}", Direction::resolve(direction).token())
}

/// `fade-<steps>` for non-default step counts within range
pub fn step_class(steps: u32) -> Option<String> {
    if steps == DEFAULT_STEPS || !(MIN_STEPS..=MAX_STEPS).contains(&steps) {
        return None;
    }
    Some(format!("fade-{}", steps))
}

/// Single class covering both the step count and the easing
pub fn step_easing_class(steps: u32, easing: Easing) -> Option<String> {
    match (steps == DEFAULT_STEPS, easing.is_default()) {
        (true, true) => None,
        (true, false) => Some(format!("fade-{}-{}", easing.key(), DEFAULT_STEPS)),
        (false, true) => step_class(steps),
        (false, false) => Some(format!("fade-{}-{}", easing.key(), steps)),
    }
}

/// Resolve a selection to its classes, in color, direction, step order
pub fn resolve_classes(color: &str, direction: &str, steps: u32, easing: Easing) -> Vec<String> {
    // slate only reads well at 900 once the step count changes
    let color = if color == "slate" && steps != DEFAULT_STEPS {
        "slate-900"
    } else {
        color
    };

    let mut classes = vec![color_class(color), direction_class(direction)];
    classes.extend(step_easing_class(steps, easing));
    classes
}

/// Space separated form of [`resolve_classes`]
pub fn fade_class(color: &str, direction: &str, steps: u32, easing: Easing) -> String {
    resolve_classes(color, direction, steps, easing).join(" ")
}

/// Plain Tailwind gradient for the same color and direction, used to
/// compare against the eased fade
pub fn simple_gradient_class(color: &str, direction: &str) -> String {
    let direction = Direction::resolve(direction);
    let color = match color {
        "white" | "black" => color.to_string(),
        _ => format!("{}-500", color),
    };
    format!(
        "bg-gradient-to-{} from-{}/100 to-{}/0",
        direction.token(),
        color,
        color
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsing_table() {
        assert_eq!(
            resolve_classes("blue", "b", 6, Easing::EaseOutCubic),
            vec!["fade-from-blue-500", "fade-to-b"]
        );
        assert_eq!(
            resolve_classes("blue", "b", 6, Easing::Linear),
            vec!["fade-from-blue-500", "fade-to-b", "fade-linear-6"]
        );
        assert_eq!(
            resolve_classes("blue", "b", 12, Easing::EaseOutCubic),
            vec!["fade-from-blue-500", "fade-to-b", "fade-12"]
        );
        assert_eq!(
            resolve_classes("blue", "b", 12, Easing::Linear),
            vec!["fade-from-blue-500", "fade-to-b", "fade-linear-12"]
        );
    }

    #[test]
    fn test_direction_always_emitted() {
        for dir in Direction::ALL {
            let classes = resolve_classes("red", dir.token(), 6, Easing::default());
            assert_eq!(classes[1], format!("fade-to-{}", dir.token()));
        }
        assert_eq!(direction_class("sideways"), "fade-to-b");
    }

    #[test]
    fn test_color_fallbacks() {
        assert_eq!(color_class("teal"), "fade-from-teal-500");
        assert_eq!(color_class("black"), "fade-from-black");
        assert_eq!(color_class("slate-900"), "fade-from-slate-900");
        assert_eq!(color_class("chartreuse"), DEFAULT_COLOR_CLASS);
    }

    #[test]
    fn test_slate_switches_shade_off_default_steps() {
        assert_eq!(
            fade_class("slate", "t", 6, Easing::default()),
            "fade-from-slate-500 fade-to-t"
        );
        assert_eq!(
            fade_class("slate", "t", 16, Easing::default()),
            "fade-from-slate-900 fade-to-t fade-16"
        );
        assert_eq!(
            fade_class("slate", "t", 16, Easing::EaseInQuart),
            "fade-from-slate-900 fade-to-t fade-ease-in-quart-16"
        );
    }

    #[test]
    fn test_step_class_bounds() {
        assert_eq!(step_class(6), None);
        assert_eq!(step_class(1), None);
        assert_eq!(step_class(25), None);
        assert_eq!(step_class(2).as_deref(), Some("fade-2"));
        assert_eq!(step_class(24).as_deref(), Some("fade-24"));
    }

    #[test]
    fn test_simple_gradient_class() {
        assert_eq!(
            simple_gradient_class("white", "t"),
            "bg-gradient-to-t from-white/100 to-white/0"
        );
        assert_eq!(
            simple_gradient_class("purple", "nowhere"),
            "bg-gradient-to-b from-purple-500/100 to-purple-500/0"
        );
    }
}
