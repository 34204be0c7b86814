//! Error types for fade_core

use thiserror::Error;

/// Errors raised while loading fade configuration
///
/// Gradient generation and class resolution never fail; they fall back to
/// defaults instead.
#[derive(Error, Debug)]
pub enum FadeError {
    /// The configuration file is not valid TOML or has the wrong shape
    #[error("Config parsing failed: {0}")]
    Config(#[from] toml::de::Error),

    /// The configured default step count cannot produce a gradient
    #[error("Invalid default step count: {0} (must be at least 1)")]
    InvalidSteps(u32),
}

/// Result type for fade_core operations
pub type Result<T> = std::result::Result<T, FadeError>;
