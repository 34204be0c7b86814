//! Fade configuration file handling
//!
//! The CLI looks for `fade.toml` in the source directory. Without one the
//! built-in defaults are used (6 steps, built-in palette).

use anyhow::{Context, Result};
use fade_core::FadeConfig;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Name of the configuration file
pub const CONFIG_FILE: &str = "fade.toml";

/// Load configuration from a directory, falling back to defaults
pub fn load_from_dir(path: &Path) -> Result<FadeConfig> {
    if !path.is_dir() {
        anyhow::bail!("{} is not a directory", path.display());
    }

    let config_path = path.join(CONFIG_FILE);
    if !config_path.exists() {
        info!(
            "No {} found in {}, using built-in defaults",
            CONFIG_FILE,
            path.display()
        );
        return Ok(FadeConfig::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config = FadeConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    debug!(
        "Loaded {} (steps: {}, colors: {})",
        config_path.display(),
        config.steps(),
        config.colors.flatten().len()
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fade-cli-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = scratch_dir("defaults");
        let config = load_from_dir(&dir).unwrap();
        assert_eq!(config.steps(), 6);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_loads_file() {
        let dir = scratch_dir("custom");
        fs::write(dir.join(CONFIG_FILE), "[fade]\nsteps = 16\n").unwrap();
        let config = load_from_dir(&dir).unwrap();
        assert_eq!(config.steps(), 16);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = scratch_dir("broken");
        fs::write(dir.join(CONFIG_FILE), "[fade\n").unwrap();
        let err = load_from_dir(&dir).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE));
        fs::remove_dir_all(dir).unwrap();
    }
}
