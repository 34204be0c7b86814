//! Style declarations emitted for utility classes

use indexmap::IndexMap;

/// Flat, ordered map of CSS property name to value
pub type StyleMap = IndexMap<String, String>;

pub const FADE_ANGLE: &str = "--fade-angle";
pub const FADE_OKLCH: &str = "--fade-oklch";
pub const FADE_EASING: &str = "--fade-easing";
pub const BACKGROUND_IMAGE: &str = "background-image";
pub const BACKGROUND_REPEAT: &str = "background-repeat";

/// `--fade-oklch` used by the bare `fade` class
pub const DEFAULT_FADE_COLOR: &str = "var(--color-background, white)";

/// Wrap a stop list into the angle-driven `linear-gradient()`
///
/// An empty stop list clears the image instead of emitting an invalid
/// gradient.
pub fn linear_gradient(stops: &str) -> String {
    if stops.is_empty() {
        return String::new();
    }
    format!("linear-gradient(var({}, 0deg), {})", FADE_ANGLE, stops)
}

/// Same as [`linear_gradient`], marked `!important` so it wins over the
/// gradient set by color utilities
pub fn linear_gradient_important(stops: &str) -> String {
    if stops.is_empty() {
        return String::new();
    }
    format!("{} !important", linear_gradient(stops))
}

/// Build a [`StyleMap`] from literal pairs
pub fn style_map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> StyleMap
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_gradient() {
        assert_eq!(
            linear_gradient("red 0%, blue 100%"),
            "linear-gradient(var(--fade-angle, 0deg), red 0%, blue 100%)"
        );
        assert!(linear_gradient_important("red 0%").ends_with(") !important"));
    }

    #[test]
    fn test_empty_stops_clear_the_image() {
        assert_eq!(linear_gradient(""), "");
        assert_eq!(linear_gradient_important(""), "");
    }

    #[test]
    fn test_style_map_keeps_order() {
        let map = style_map([(BACKGROUND_REPEAT, "no-repeat"), (FADE_ANGLE, "0deg")]);
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["background-repeat", "--fade-angle"]);
    }
}
