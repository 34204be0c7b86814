//! Stand-alone stylesheet adapter
//!
//! Collects utilities from a [`FadePlugin`](crate::FadePlugin) and renders
//! them as plain CSS rules, expanding each dynamic utility over its value
//! domain. Useful where no CSS framework host is available.
//!
//! ```rust
//! use fade_core::{FadeConfig, FadePlugin, Stylesheet};
//!
//! let plugin = FadePlugin::new(&FadeConfig::default());
//! let mut stylesheet = Stylesheet::new();
//! plugin.submit(&mut stylesheet);
//!
//! assert!(stylesheet.contains("fade-12"));
//! assert!(stylesheet.to_css().contains(".fade-to-t {\n  --fade-angle: 0deg;\n}"));
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::style::StyleMap;
use crate::utilities::{ResolveFn, UtilityRegistry, ValueDomain};

/// Ordered set of class rules
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    rules: IndexMap<String, StyleMap>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Class name to declarations, in registration order
    pub fn rules(&self) -> &IndexMap<String, StyleMap> {
        &self.rules
    }

    pub fn get(&self, class: &str) -> Option<&StyleMap> {
        self.rules.get(class)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.rules.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Add declarations to a class, overriding earlier values
    pub fn merge(&mut self, class: &str, styles: StyleMap) {
        self.rules
            .entry(class.to_string())
            .or_default()
            .extend(styles);
    }

    /// Render every rule; declarations with empty values are skipped
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl UtilityRegistry for Stylesheet {
    fn register_static(&mut self, name: &str, styles: StyleMap) {
        self.merge(name, styles);
    }

    fn register_dynamic(&mut self, prefix: &str, values: &ValueDomain, resolver: ResolveFn) {
        for (name, value) in values {
            let styles = resolver(value.as_str());
            if styles.is_empty() {
                continue;
            }
            self.merge(&format!("{}-{}", prefix, name), styles);
        }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (class, styles) in &self.rules {
            let declarations: Vec<_> = styles.iter().filter(|(_, v)| !v.is_empty()).collect();
            if declarations.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;

            writeln!(f, ".{} {{", escape_class(class))?;
            for (property, value) in declarations {
                writeln!(f, "  {}: {};", property, value)?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

/// Escape characters that are not valid in a bare class selector
fn escape_class(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len());
    for (i, c) in class.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            // A leading digit needs a code point escape: `\32 xl`
            escaped.push_str(&format!("\\3{} ", c));
            continue;
        }
        let valid = c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii();
        if !valid {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::style_map;
    use crate::{FadeConfig, FadePlugin};
    use std::sync::Arc;

    #[test]
    fn test_render_rules() {
        let mut stylesheet = Stylesheet::new();
        stylesheet.register_static("fade-to-r", style_map([("--fade-angle", "90deg")]));
        stylesheet.register_static(
            "fade-x",
            style_map([("background-image", ""), ("opacity", "1")]),
        );

        assert_eq!(
            stylesheet.to_css(),
            ".fade-to-r {\n  --fade-angle: 90deg;\n}\n\n.fade-x {\n  opacity: 1;\n}\n"
        );
    }

    #[test]
    fn test_dynamic_expansion_skips_empty() {
        let mut values = ValueDomain::new();
        values.insert("on".to_string(), "1".to_string());
        values.insert("off".to_string(), "0".to_string());

        let resolver: ResolveFn = Arc::new(|value: &str| {
            if value == "1" {
                style_map([("opacity", "1")])
            } else {
                StyleMap::new()
            }
        });

        let mut stylesheet = Stylesheet::new();
        stylesheet.register_dynamic("glow", &values, resolver);
        assert!(stylesheet.contains("glow-on"));
        assert!(!stylesheet.contains("glow-off"));
    }

    #[test]
    fn test_merge_overrides() {
        let mut stylesheet = Stylesheet::new();
        stylesheet.merge("a", style_map([("x", "1"), ("y", "2")]));
        stylesheet.merge("a", style_map([("y", "3")]));
        let rule = stylesheet.get("a").unwrap();
        assert_eq!(rule["x"], "1");
        assert_eq!(rule["y"], "3");
    }

    #[test]
    fn test_full_plugin_stylesheet() {
        let plugin = FadePlugin::new(&FadeConfig::default());
        let mut stylesheet = Stylesheet::new();
        plugin.submit(&mut stylesheet);

        // 16 directions, fade-ease-* x10, fade, 42 colors, fade-2..24, 230 combinations
        assert_eq!(stylesheet.len(), 16 + 10 + 1 + 42 + 23 + 230);
        assert!(stylesheet.contains("fade-ease-linear"));
        assert!(stylesheet.contains("fade-from-slate-900"));

        let css = stylesheet.to_css();
        assert!(css.contains(".fade-ease-in-cubic-7 {"));
        assert!(css.contains("background-repeat: no-repeat;"));
    }

    #[test]
    fn test_escape_class() {
        assert_eq!(escape_class("fade-blue-500"), "fade-blue-500");
        assert_eq!(escape_class("fade-gray-0.5"), "fade-gray-0\\.5");
        assert_eq!(escape_class("2xl"), "\\32 xl");
    }
}
