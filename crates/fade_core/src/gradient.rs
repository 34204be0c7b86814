//! A complete fade selection

use crate::classes;
use crate::direction::Direction;
use crate::easing::Easing;
use crate::palette::{ColorToken, FlatPalette};
use crate::stops::{self, GradientStop, DEFAULT_STEPS, OKLCH_PREFIX};
use crate::style::{
    linear_gradient, style_map, StyleMap, BACKGROUND_IMAGE, BACKGROUND_REPEAT, FADE_ANGLE,
    FADE_EASING, FADE_OKLCH,
};

/// One fade request: color, direction, smoothness and curve
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    pub color: String,
    pub direction: Direction,
    pub steps: u32,
    pub easing: Easing,
    pub reverse: bool,
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self {
            color: "blue".to_string(),
            direction: Direction::default(),
            steps: DEFAULT_STEPS,
            easing: Easing::default(),
            reverse: false,
        }
    }
}

impl GradientSpec {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Default::default()
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn stops(&self) -> Vec<GradientStop> {
        stops::generate(self.steps, self.reverse, self.easing)
    }

    /// Utility classes that render this fade
    pub fn classes(&self) -> Vec<String> {
        classes::resolve_classes(
            &self.color,
            self.direction.token(),
            self.steps,
            self.easing,
        )
    }

    /// Standalone `background-image` value with the angle inlined
    ///
    /// The stops still read their color from `--fade-oklch`. Returns an
    /// empty string when there are no stops.
    pub fn background_image(&self) -> String {
        let stops = self.stops();
        if stops.is_empty() {
            return String::new();
        }
        format!(
            "linear-gradient({}, {})",
            self.direction.css_angle(),
            stops::join_stops(&stops, OKLCH_PREFIX)
        )
    }

    /// Inline declarations for this fade, without any utility class
    ///
    /// The color is looked up in `palette` first and otherwise used as a
    /// literal color value.
    pub fn styles(&self, palette: &FlatPalette) -> StyleMap {
        let token = ColorToken::parse(&self.color, palette);
        let color = token.value(palette).unwrap_or(&self.color).to_string();
        let image = linear_gradient(&stops::join_stops(&self.stops(), OKLCH_PREFIX));

        style_map([
            (FADE_ANGLE, self.direction.css_angle()),
            (FADE_OKLCH, color),
            (FADE_EASING, self.easing.key().to_string()),
            (BACKGROUND_IMAGE, image),
            (BACKGROUND_REPEAT, "no-repeat".to_string()),
        ])
    }
}
