//! Fade directions and their gradient angles

use std::fmt;

use tracing::debug;

/// Direction a fade runs towards
///
/// Angles follow CSS `linear-gradient()`: 0deg points to the top and the
/// angle grows clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
        Direction::TopLeft,
        Direction::TopRight,
        Direction::BottomLeft,
        Direction::BottomRight,
    ];

    /// Parse a direction token (`t`, `br`, ...)
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.token() == token)
    }

    /// Parse a direction token, falling back to [`Direction::Bottom`]
    pub fn resolve(token: &str) -> Self {
        Self::from_token(token).unwrap_or_else(|| {
            debug!("unknown direction '{}', using b", token);
            Direction::default()
        })
    }

    pub fn token(&self) -> &'static str {
        match self {
            Direction::Top => "t",
            Direction::Bottom => "b",
            Direction::Left => "l",
            Direction::Right => "r",
            Direction::TopLeft => "tl",
            Direction::TopRight => "tr",
            Direction::BottomLeft => "bl",
            Direction::BottomRight => "br",
        }
    }

    /// Gradient angle in degrees
    pub fn angle(&self) -> u32 {
        match self {
            Direction::Top => 0,
            Direction::Right => 90,
            Direction::BottomRight => 135,
            Direction::Bottom => 180,
            Direction::BottomLeft => 225,
            Direction::Left => 270,
            Direction::TopLeft => 315,
            Direction::TopRight => 45,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Top => "Top",
            Direction::Bottom => "Bottom",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::TopLeft => "Top Left",
            Direction::TopRight => "Top Right",
            Direction::BottomLeft => "Bottom Left",
            Direction::BottomRight => "Bottom Right",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Direction::Top => "↑",
            Direction::Bottom => "↓",
            Direction::Left => "←",
            Direction::Right => "→",
            Direction::TopLeft => "↖",
            Direction::TopRight => "↗",
            Direction::BottomLeft => "↙",
            Direction::BottomRight => "↘",
        }
    }

    /// `--fade-angle` value, e.g. `135deg`
    pub fn css_angle(&self) -> String {
        format!("{}deg", self.angle())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
