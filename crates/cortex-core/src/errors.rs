//! Cross-cutting error types.
//!
//! Transport and configuration errors live in their own crates
//! (`ClientError`, `ConfigError`); everything converges on `anyhow` in
//! `cortex-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation before being sent anywhere.
    #[error("Validation error: {0}")]
    Validation(String),
}
