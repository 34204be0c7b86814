//! Literal overlay gradients
//!
//! Renders a complete, self-contained `linear-gradient()` for a white or
//! black overlay, with the angle and color inlined. This is the snippet a
//! user copies when they do not use the utility classes.

use std::fmt;

use crate::direction::Direction;
use crate::easing::Easing;
use crate::stops::{self, GradientStop};
use crate::table;

/// Overlay color of a literal gradient
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    White,
    Black,
}

impl Overlay {
    /// Parse `white` or `black`; anything else is white
    pub fn resolve(name: &str) -> Self {
        match name {
            "black" => Overlay::Black,
            _ => Overlay::White,
        }
    }

    /// Open `hsla(` prefix awaiting the alpha channel
    pub fn hsla_prefix(&self) -> &'static str {
        match self {
            Overlay::White => "hsla(0, 0%, 100%,",
            Overlay::Black => "hsla(0, 0%, 0%,",
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overlay::White => f.write_str("white"),
            Overlay::Black => f.write_str("black"),
        }
    }
}

/// Owned stop positions and opacities for one step count
#[derive(Clone, Debug, PartialEq)]
pub struct GradientData {
    pub positions: Vec<f64>,
    pub opacities: Vec<f64>,
}

impl From<&table::StepProfile> for GradientData {
    fn from(profile: &table::StepProfile) -> Self {
        Self {
            positions: profile.positions.to_vec(),
            opacities: profile.opacities.to_vec(),
        }
    }
}

impl From<&[GradientStop]> for GradientData {
    fn from(stops: &[GradientStop]) -> Self {
        Self {
            positions: stops.iter().map(|s| s.position).collect(),
            opacities: stops.iter().map(|s| s.opacity).collect(),
        }
    }
}

/// Stop data for a step count: the precomputed profile when there is one,
/// otherwise an evenly spaced ease-out-cubic falloff
pub fn gradient_data(steps: u32) -> GradientData {
    match table::lookup(steps) {
        Some(profile) => profile.into(),
        None => stops::generate(steps, false, Easing::default())
            .as_slice()
            .into(),
    }
}

/// Multi-line literal gradient for an overlay
///
/// ```rust
/// use fade_core::overlay::{generate_css, Overlay};
/// use fade_core::Direction;
///
/// assert_eq!(
///     generate_css(Overlay::Black, Direction::Top, 2),
///     "linear-gradient(\n  0deg,\n    hsla(0, 0%, 0%,1.00) 0%,\n    hsla(0, 0%, 0%,0.00) 100%\n)"
/// );
/// ```
pub fn generate_css(overlay: Overlay, direction: Direction, steps: u32) -> String {
    let prefix = overlay.hsla_prefix();
    let stops = stops::generate(steps, false, Easing::default())
        .iter()
        .map(|stop| format!("    {}", stop.format(prefix)))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("linear-gradient(\n  {}deg,\n{}\n)", direction.angle(), stops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_white() {
        let css = generate_css(Overlay::White, Direction::Bottom, 6);
        let lines: Vec<_> = css.lines().collect();
        assert_eq!(lines[0], "linear-gradient(");
        assert_eq!(lines[1], "  180deg,");
        assert_eq!(lines[2], "    hsla(0, 0%, 100%,1.00) 0%,");
        assert_eq!(lines[3], "    hsla(0, 0%, 100%,0.51) 20%,");
        assert_eq!(lines[7], "    hsla(0, 0%, 100%,0.00) 100%");
        assert_eq!(lines[8], ")");
    }

    #[test]
    fn test_unknown_inputs_fall_back() {
        assert_eq!(Overlay::resolve("magenta"), Overlay::White);
        assert_eq!(Overlay::resolve("magenta").to_string(), "white");
        assert_eq!(Overlay::resolve("black").to_string(), "black");
        assert_eq!(
            generate_css(Overlay::resolve("magenta"), Direction::resolve("?"), 3),
            generate_css(Overlay::White, Direction::Bottom, 3)
        );
    }

    #[test]
    fn test_gradient_data() {
        let data = gradient_data(4);
        assert_eq!(data.positions, vec![0.0, 33.0, 67.0, 100.0]);
        assert_eq!(data.opacities, vec![1.0, 0.3, 0.04, 0.0]);

        let synthesized = gradient_data(40);
        assert_eq!(synthesized.positions.len(), 41);
        assert_eq!(synthesized.positions[1], 2.5);
        assert_eq!(synthesized.opacities[0], 1.0);
        assert_eq!(synthesized.opacities[40], 0.0);
    }
}
