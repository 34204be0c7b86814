//! Utility class generation for a CSS framework plugin host
//!
//! [`FadePlugin`] precomputes every fade utility from a [`FadeConfig`] and
//! hands them to a [`UtilityRegistry`]. The registry is implemented by an
//! adapter for the build tool in use; the core never emits CSS rules itself
//! (see [`Stylesheet`](crate::Stylesheet) for a self-contained adapter).
//!
//! Utilities, in registration order:
//!
//! - `fade-to-<dir>` and the legacy `fade-<dir>`: `--fade-angle`
//! - `fade-ease-<easing>` (dynamic): default step count with another curve
//! - `fade`: the base gradient colored by the page background
//! - `fade-from-<color>` / `fade-to-<color>`: one pair per palette color
//! - `fade-<steps>` (dynamic): another step count with the default curve
//! - `fade-<easing>-<steps>`: every curve and step combination

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::FadeConfig;
use crate::direction::Direction;
use crate::easing::Easing;
use crate::palette::FlatPalette;
use crate::stops::StopCache;
use crate::style::{
    linear_gradient, linear_gradient_important, style_map, StyleMap, BACKGROUND_IMAGE,
    BACKGROUND_REPEAT, DEFAULT_FADE_COLOR, FADE_ANGLE, FADE_EASING, FADE_OKLCH,
};
use crate::table::{MAX_STEPS, MIN_STEPS};

/// Computes the styles for one value of a dynamic utility
pub type ResolveFn = Arc<dyn Fn(&str) -> StyleMap + Send + Sync>;

/// Value names accepted by a dynamic utility, mapped to the value handed
/// to its resolver
pub type ValueDomain = IndexMap<String, String>;

/// Receives utilities from [`FadePlugin::submit`]
pub trait UtilityRegistry {
    /// Register a class with fixed declarations
    fn register_static(&mut self, name: &str, styles: StyleMap);

    /// Register a family of classes `<prefix>-<value>` computed on demand
    fn register_dynamic(&mut self, prefix: &str, values: &ValueDomain, resolver: ResolveFn);
}

/// A utility whose styles depend on the value in its class name
#[derive(Clone)]
pub struct DynamicUtility {
    pub prefix: String,
    pub values: ValueDomain,
    pub resolver: ResolveFn,
}

impl DynamicUtility {
    pub fn resolve(&self, value: &str) -> StyleMap {
        (self.resolver)(value)
    }
}

impl std::fmt::Debug for DynamicUtility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicUtility")
            .field("prefix", &self.prefix)
            .field("values", &self.values.len())
            .finish_non_exhaustive()
    }
}

/// One registration handed to the host
#[derive(Clone, Debug)]
pub enum Utility {
    Static { name: String, styles: StyleMap },
    Dynamic(DynamicUtility),
}

/// Every fade utility for one configuration
#[derive(Clone, Debug)]
pub struct FadePlugin {
    steps: u32,
    utilities: Vec<Utility>,
}

impl FadePlugin {
    /// Precompute all utilities for `config`
    pub fn new(config: &FadeConfig) -> Self {
        let steps = config.steps();
        let cache = Arc::new(StopCache::new());
        let palette = config.colors.flatten();

        let mut utilities = Vec::new();
        push_static(&mut utilities, direction_utilities());
        utilities.push(Utility::Dynamic(easing_matcher(steps, Arc::clone(&cache))));
        utilities.push(Utility::Static {
            name: "fade".to_string(),
            styles: base_utility(steps, &cache),
        });
        push_static(&mut utilities, color_utilities(&palette, steps, &cache));
        utilities.push(Utility::Dynamic(step_matcher(Arc::clone(&cache))));
        push_static(&mut utilities, easing_step_utilities(&cache));

        debug!(
            "built fade plugin: {} utilities, {} stop lists, {} colors",
            utilities.len(),
            cache.len(),
            palette.len()
        );

        Self { steps, utilities }
    }

    /// Default step count the utilities were built with
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn utilities(&self) -> &[Utility] {
        &self.utilities
    }

    /// Find a static utility by class name
    pub fn get(&self, name: &str) -> Option<&StyleMap> {
        self.utilities.iter().find_map(|utility| match utility {
            Utility::Static { name: n, styles } if n == name => Some(styles),
            _ => None,
        })
    }

    /// Find a dynamic utility by prefix
    pub fn dynamic(&self, prefix: &str) -> Option<&DynamicUtility> {
        self.utilities.iter().find_map(|utility| match utility {
            Utility::Dynamic(dynamic) if dynamic.prefix == prefix => Some(dynamic),
            _ => None,
        })
    }

    /// Hand every utility to `registry`, in order
    pub fn submit<R: UtilityRegistry + ?Sized>(&self, registry: &mut R) {
        for utility in &self.utilities {
            match utility {
                Utility::Static { name, styles } => registry.register_static(name, styles.clone()),
                Utility::Dynamic(dynamic) => registry.register_dynamic(
                    &dynamic.prefix,
                    &dynamic.values,
                    Arc::clone(&dynamic.resolver),
                ),
            }
        }
    }
}

fn push_static(utilities: &mut Vec<Utility>, entries: IndexMap<String, StyleMap>) {
    utilities.extend(
        entries
            .into_iter()
            .map(|(name, styles)| Utility::Static { name, styles }),
    );
}

/// `fade-to-<dir>` angle utilities plus their legacy `fade-<dir>` aliases
pub fn direction_utilities() -> IndexMap<String, StyleMap> {
    let current = Direction::ALL
        .iter()
        .map(|dir| (format!("fade-to-{}", dir.token()), *dir));
    let legacy = Direction::ALL
        .iter()
        .map(|dir| (format!("fade-{}", dir.token()), *dir));

    current
        .chain(legacy)
        .map(|(name, dir)| (name, style_map([(FADE_ANGLE, dir.css_angle())])))
        .collect()
}

/// The bare `fade` class
pub fn base_utility(steps: u32, cache: &StopCache) -> StyleMap {
    let stops = cache.gradient_stops(steps, false, Easing::default());
    style_map([
        (FADE_OKLCH, DEFAULT_FADE_COLOR.to_string()),
        (FADE_EASING, Easing::default().key().to_string()),
        (BACKGROUND_IMAGE, linear_gradient(&stops)),
        (BACKGROUND_REPEAT, "no-repeat".to_string()),
    ])
}

/// `fade-from-<color>` and `fade-to-<color>` for each palette entry
pub fn color_utilities(
    palette: &FlatPalette,
    steps: u32,
    cache: &StopCache,
) -> IndexMap<String, StyleMap> {
    let from = linear_gradient(&cache.gradient_stops(steps, false, Easing::default()));
    let to = linear_gradient(&cache.gradient_stops(steps, true, Easing::default()));

    let mut utilities = IndexMap::with_capacity(palette.len() * 2);
    for (path, value) in palette {
        for (name, image) in [
            (format!("fade-from-{}", path), &from),
            (format!("fade-to-{}", path), &to),
        ] {
            utilities.insert(
                name,
                style_map([
                    (FADE_OKLCH, value.clone()),
                    (FADE_EASING, Easing::default().key().to_string()),
                    (BACKGROUND_IMAGE, image.clone()),
                    (BACKGROUND_REPEAT, "no-repeat".to_string()),
                ]),
            );
        }
    }
    utilities
}

/// Styles for `fade-<value>`
///
/// Non-numeric values and step counts below 1 clear the background image.
pub fn step_utility(value: &str, cache: &StopCache) -> StyleMap {
    let steps = parse_step_value(value).and_then(|n| u32::try_from(n).ok());
    match steps {
        Some(steps) if steps >= 1 => {
            let stops = cache.gradient_stops(steps, false, Easing::default());
            style_map([(BACKGROUND_IMAGE, linear_gradient_important(&stops))])
        }
        _ => {
            debug!("invalid step value '{}', clearing background", value);
            style_map([(BACKGROUND_IMAGE, "")])
        }
    }
}

/// Styles for `fade-ease-<value>`; unknown curves produce no styles
pub fn easing_utility(value: &str, steps: u32, cache: &StopCache) -> StyleMap {
    let Some(easing) = Easing::from_key(value) else {
        debug!("unknown easing '{}' for fade-ease", value);
        return StyleMap::new();
    };
    let stops = cache.gradient_stops(steps, false, easing);
    style_map([
        (FADE_EASING, easing.key().to_string()),
        (BACKGROUND_IMAGE, linear_gradient_important(&stops)),
    ])
}

/// `fade-<easing>-<steps>` for every curve and every table step count
pub fn easing_step_utilities(cache: &StopCache) -> IndexMap<String, StyleMap> {
    let mut utilities = IndexMap::new();
    for easing in Easing::ALL {
        for steps in MIN_STEPS..=MAX_STEPS {
            let stops = cache.gradient_stops(steps, false, easing);
            utilities.insert(
                format!("fade-{}-{}", easing.key(), steps),
                style_map([(BACKGROUND_IMAGE, linear_gradient_important(&stops))]),
            );
        }
    }
    utilities
}

fn step_matcher(cache: Arc<StopCache>) -> DynamicUtility {
    let values = (MIN_STEPS..=MAX_STEPS)
        .map(|steps| (steps.to_string(), steps.to_string()))
        .collect();
    DynamicUtility {
        prefix: "fade".to_string(),
        values,
        resolver: Arc::new(move |value: &str| step_utility(value, &cache)),
    }
}

fn easing_matcher(steps: u32, cache: Arc<StopCache>) -> DynamicUtility {
    let values = Easing::ALL
        .iter()
        .map(|easing| (easing.key().to_string(), easing.key().to_string()))
        .collect();
    DynamicUtility {
        prefix: "fade-ease".to_string(),
        values,
        resolver: Arc::new(move |value: &str| easing_utility(value, steps, &cache)),
    }
}

/// Leading integer of a class value (`"12"`, `" 8px"`), like `parseInt`
fn parse_step_value(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::stops::gradient_stops;

    #[derive(Default)]
    struct Recorder {
        statics: Vec<String>,
        dynamics: Vec<(String, usize)>,
    }

    impl UtilityRegistry for Recorder {
        fn register_static(&mut self, name: &str, _styles: StyleMap) {
            self.statics.push(name.to_string());
        }

        fn register_dynamic(&mut self, prefix: &str, values: &ValueDomain, _resolver: ResolveFn) {
            self.dynamics.push((prefix.to_string(), values.len()));
        }
    }

    #[test]
    fn test_registration_counts() {
        let plugin = FadePlugin::new(&FadeConfig::default());
        let mut recorder = Recorder::default();
        plugin.submit(&mut recorder);

        // 16 direction classes, the base class, 21 colors x 2, 10 x 23 combinations
        assert_eq!(recorder.statics.len(), 16 + 1 + 42 + 230);
        assert_eq!(
            recorder.dynamics,
            vec![("fade-ease".to_string(), 10), ("fade".to_string(), 23)]
        );
        assert_eq!(recorder.statics[0], "fade-to-t");
        assert_eq!(recorder.statics[16], "fade");
    }

    #[test]
    fn test_direction_utilities() {
        let utilities = direction_utilities();
        assert_eq!(utilities.len(), 16);
        assert_eq!(utilities["fade-to-br"][FADE_ANGLE], "135deg");
        assert_eq!(utilities["fade-l"][FADE_ANGLE], "270deg");
    }

    #[test]
    fn test_base_utility() {
        let styles = base_utility(6, &StopCache::new());
        assert_eq!(styles[FADE_OKLCH], "var(--color-background, white)");
        assert_eq!(styles[FADE_EASING], "ease-out-cubic");
        assert_eq!(styles[BACKGROUND_REPEAT], "no-repeat");
        assert_eq!(
            styles[BACKGROUND_IMAGE],
            format!(
                "linear-gradient(var(--fade-angle, 0deg), {})",
                gradient_stops(6, false, Easing::default())
            )
        );
    }

    #[test]
    fn test_color_utilities_fade_both_ways() {
        let mut palette = Palette::new();
        palette.insert_shade("sky", "500", "oklch(68.5% 0.169 237.323)");
        let utilities = color_utilities(&palette.flatten(), 6, &StopCache::new());

        let from = &utilities["fade-from-sky-500"];
        let to = &utilities["fade-to-sky-500"];
        assert_eq!(from[FADE_OKLCH], "oklch(68.5% 0.169 237.323)");
        assert!(from[BACKGROUND_IMAGE].contains("/ 1.00) 0%"));
        assert!(to[BACKGROUND_IMAGE].contains("/ 0.00) 0%"));
        assert!(to[BACKGROUND_IMAGE].ends_with("/ 1.00) 100%)"));
    }

    #[test]
    fn test_step_utility() {
        let cache = StopCache::new();
        let styles = step_utility("12", &cache);
        assert!(styles[BACKGROUND_IMAGE].ends_with(") !important"));
        assert_eq!(styles.len(), 1);

        assert_eq!(step_utility("abc", &cache)[BACKGROUND_IMAGE], "");
        assert_eq!(step_utility("0", &cache)[BACKGROUND_IMAGE], "");
        assert_eq!(step_utility("-4", &cache)[BACKGROUND_IMAGE], "");
        assert_eq!(step_utility("8px", &cache), step_utility("8", &cache));
    }

    #[test]
    fn test_easing_utility() {
        let cache = StopCache::new();
        let styles = easing_utility("linear", 6, &cache);
        assert_eq!(styles[FADE_EASING], "linear");
        assert!(styles[BACKGROUND_IMAGE].contains(&gradient_stops(6, false, Easing::Linear)));

        assert!(easing_utility("bogus", 6, &cache).is_empty());
    }

    #[test]
    fn test_easing_step_cross_product() {
        let utilities = easing_step_utilities(&StopCache::new());
        assert_eq!(utilities.len(), 230);
        assert!(utilities.contains_key("fade-linear-2"));
        assert!(utilities.contains_key("fade-ease-in-out-quart-24"));
        assert!(!utilities.contains_key("fade-linear-25"));
    }

    #[test]
    fn test_configured_steps() {
        let plugin = FadePlugin::new(&FadeConfig::default().with_steps(12));
        assert_eq!(plugin.steps(), 12);
        let base = plugin.get("fade").unwrap();
        assert!(base[BACKGROUND_IMAGE].contains(&gradient_stops(12, false, Easing::default())));

        let ease = plugin.dynamic("fade-ease").unwrap().resolve("ease-in-quad");
        assert!(ease[BACKGROUND_IMAGE].contains(&gradient_stops(12, false, Easing::EaseInQuad)));
    }

    #[test]
    fn test_zero_default_steps_clear_images() {
        let plugin = FadePlugin::new(&FadeConfig::default().with_steps(0));
        assert_eq!(plugin.get("fade").unwrap()[BACKGROUND_IMAGE], "");
        assert_eq!(plugin.get("fade-from-blue-500").unwrap()[BACKGROUND_IMAGE], "");
        assert_eq!(plugin.get("fade-to-black").unwrap()[BACKGROUND_IMAGE], "");

        let ease = plugin.dynamic("fade-ease").unwrap().resolve("linear");
        assert_eq!(ease[BACKGROUND_IMAGE], "");
        assert_eq!(ease[FADE_EASING], "linear");
    }

    #[test]
    fn test_parse_step_value() {
        assert_eq!(parse_step_value("16"), Some(16));
        assert_eq!(parse_step_value(" 3rem"), Some(3));
        assert_eq!(parse_step_value("-2"), Some(-2));
        assert_eq!(parse_step_value("x2"), None);
        assert_eq!(parse_step_value(""), None);
    }
}
