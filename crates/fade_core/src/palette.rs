//! Color palette input
//!
//! The palette is supplied by the caller as an arbitrarily nested mapping,
//! the same shape as a Tailwind `theme.colors` object:
//!
//! ```toml
//! black = "#000"
//! blue = { 500 = "oklch(62.3% 0.214 259.815)", 900 = "oklch(37.9% 0.146 265.522)" }
//! ```
//!
//! Utilities only ever see the flattened form, `"blue-500" -> value`.

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::Deserialize;

/// Flattened palette: `"family-shade"` to concrete color value
pub type FlatPalette = IndexMap<String, String>;

/// One node of a nested palette
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PaletteEntry {
    /// A concrete color value
    Color(String),
    /// A nested group of entries
    Group(IndexMap<String, PaletteEntry>),
    /// Anything else (numbers, booleans, arrays) is ignored
    Other(IgnoredAny),
}

/// Nested color palette
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: IndexMap<String, PaletteEntry>,
}

/// The 500 shade of each playground color family (Tailwind v4 values)
const BUILTIN_FAMILIES: [(&str, &str); 18] = [
    ("red", "oklch(63.7% 0.237 25.331)"),
    ("orange", "oklch(70.5% 0.213 47.604)"),
    ("amber", "oklch(76.9% 0.188 70.08)"),
    ("yellow", "oklch(79.5% 0.184 86.047)"),
    ("lime", "oklch(76.8% 0.233 130.85)"),
    ("green", "oklch(72.3% 0.219 149.579)"),
    ("emerald", "oklch(69.6% 0.17 162.48)"),
    ("teal", "oklch(70.4% 0.14 182.503)"),
    ("cyan", "oklch(71.5% 0.143 215.221)"),
    ("sky", "oklch(68.5% 0.169 237.323)"),
    ("blue", "oklch(62.3% 0.214 259.815)"),
    ("indigo", "oklch(58.5% 0.233 277.117)"),
    ("violet", "oklch(60.6% 0.25 292.717)"),
    ("purple", "oklch(62.7% 0.265 303.9)"),
    ("fuchsia", "oklch(66.7% 0.295 322.15)"),
    ("pink", "oklch(65.6% 0.241 354.308)"),
    ("rose", "oklch(64.5% 0.246 16.439)"),
    ("slate", "oklch(55.4% 0.046 257.417)"),
];

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette covering every color the playground resolver can emit
    pub fn builtin() -> Self {
        let mut palette = Self::new();
        palette.insert("black", "#000");
        palette.insert("white", "#fff");
        for (family, value) in BUILTIN_FAMILIES {
            palette.insert_shade(family, "500", value);
        }
        palette.insert_shade("slate", "900", "oklch(20.8% 0.042 265.755)");
        palette
    }

    /// Insert a top-level color
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(name.into(), PaletteEntry::Color(value.into()));
    }

    /// Insert a shade into a color family, creating the family if needed
    pub fn insert_shade(
        &mut self,
        family: impl Into<String>,
        shade: impl Into<String>,
        value: impl Into<String>,
    ) {
        let entry = self
            .entries
            .entry(family.into())
            .or_insert_with(|| PaletteEntry::Group(IndexMap::new()));

        if !matches!(entry, PaletteEntry::Group(_)) {
            *entry = PaletteEntry::Group(IndexMap::new());
        }
        if let PaletteEntry::Group(shades) = entry {
            shades.insert(shade.into(), PaletteEntry::Color(value.into()));
        }
    }

    /// Flatten into `"segment-segment" -> value` pairs
    pub fn flatten(&self) -> FlatPalette {
        let mut flat = FlatPalette::new();
        flatten_into(&self.entries, "", &mut flat);
        flat
    }
}

fn flatten_into(entries: &IndexMap<String, PaletteEntry>, prefix: &str, out: &mut FlatPalette) {
    for (key, entry) in entries {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}-{}", prefix, key)
        };

        match entry {
            PaletteEntry::Color(value) => {
                out.insert(path, value.clone());
            }
            PaletteEntry::Group(group) => flatten_into(group, &path, out),
            PaletteEntry::Other(_) => {}
        }
    }
}

/// A color given either by palette path or as a literal value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorToken {
    /// Palette path such as `blue-500`
    Named(String),
    /// Literal color value such as `oklch(70% 0.1 200)`
    Raw(String),
}

impl ColorToken {
    /// Classify `input` against a flattened palette
    pub fn parse(input: &str, palette: &FlatPalette) -> Self {
        if palette.contains_key(input) {
            ColorToken::Named(input.to_string())
        } else {
            ColorToken::Raw(input.to_string())
        }
    }

    /// Concrete color value for `--fade-oklch`
    pub fn value<'a>(&'a self, palette: &'a FlatPalette) -> Option<&'a str> {
        match self {
            ColorToken::Named(path) => palette.get(path).map(String::as_str),
            ColorToken::Raw(value) => Some(value),
        }
    }
}
