//! Fade configuration (`fade.toml`)
//!
//! ```toml
//! [fade]
//! steps = 6
//!
//! [colors]
//! black = "#000"
//! blue = { 500 = "oklch(62.3% 0.214 259.815)" }
//! ```
//!
//! Both sections are optional. Without `[colors]` the built-in palette is
//! used.

use serde::Deserialize;

use crate::error::{FadeError, Result};
use crate::palette::Palette;
use crate::stops::DEFAULT_STEPS;

/// Top-level configuration passed to [`FadePlugin`](crate::FadePlugin)
#[derive(Clone, Debug, Deserialize)]
pub struct FadeConfig {
    #[serde(default)]
    pub fade: FadeSettings,
    #[serde(default = "Palette::builtin")]
    pub colors: Palette,
}

/// Defaults for the base and color utilities
#[derive(Clone, Debug, Deserialize)]
pub struct FadeSettings {
    /// Step count used by `fade`, `fade-from-*`, `fade-to-*` and `fade-ease-*`
    #[serde(default = "default_steps")]
    pub steps: u32,
}

fn default_steps() -> u32 {
    DEFAULT_STEPS
}

impl Default for FadeSettings {
    fn default() -> Self {
        Self {
            steps: default_steps(),
        }
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            fade: FadeSettings::default(),
            colors: Palette::builtin(),
        }
    }
}

impl FadeConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FadeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.fade.steps = steps;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.colors = palette;
        self
    }

    pub fn steps(&self) -> u32 {
        self.fade.steps
    }

    pub fn validate(&self) -> Result<()> {
        if self.fade.steps == 0 {
            return Err(FadeError::InvalidSteps(self.fade.steps));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FadeConfig::from_toml_str("").unwrap();
        assert_eq!(config.steps(), 6);
        assert_eq!(config.colors.flatten().len(), 21);
    }

    #[test]
    fn test_custom_config() {
        let config = FadeConfig::from_toml_str(
            r##"
            [fade]
            steps = 12

            [colors]
            ink = { 950 = "#0b0b10" }
            "##,
        )
        .unwrap();

        assert_eq!(config.steps(), 12);
        let flat = config.colors.flatten();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["ink-950"], "#0b0b10");
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = FadeConfig::from_toml_str("[fade]\nsteps = 0\n").unwrap_err();
        assert!(matches!(err, FadeError::InvalidSteps(0)));
    }

    #[test]
    fn test_malformed_config() {
        let err = FadeConfig::from_toml_str("[fade]\nsteps = \"many\"\n").unwrap_err();
        assert!(matches!(err, FadeError::Config(_)));
        assert!(err.to_string().starts_with("Config parsing failed"));
    }
}
