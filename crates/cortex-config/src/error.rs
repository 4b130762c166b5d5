//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// The requested profile has no entry in the profiles file.
    #[error("Profile '{name}' not found; run `cortex login` to configure it")]
    ProfileNotFound { name: String },

    /// The profile exists but lacks a required field.
    #[error("Profile '{name}' has no {field}; run `cortex login` to configure it")]
    IncompleteProfile { name: String, field: &'static str },

    /// Neither `CORTEX_CONFIG` nor a platform config directory is available.
    #[error("cannot determine the profiles file location; set CORTEX_CONFIG")]
    NoConfigPath,

    /// Reading or writing the profiles file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The profiles file is not valid TOML for the expected shape.
    #[error("invalid profiles file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The updated profiles could not be encoded.
    #[error("failed to encode profiles file: {0}")]
    Encode(#[from] toml::ser::Error),
}
