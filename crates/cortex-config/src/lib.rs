//! # cortex-config
//!
//! Layered profile configuration for the Cortex CLI using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CORTEX_*` prefix, `__` as separator)
//! 2. The profiles file (`$CORTEX_CONFIG`, else `~/.config/cortex/config.toml`)
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CORTEX_PROFILES__DEFAULT__TOKEN` -> `profiles.default.token`
//! and `CORTEX_CURRENT_PROFILE` -> `current_profile`.
//!
//! # Usage
//!
//! ```no_run
//! use cortex_config::CortexConfig;
//!
//! let config = CortexConfig::load().expect("config");
//! let profile = config.profile(Some("staging")).expect("profile");
//! println!("{} -> {}", profile.name, profile.url);
//! ```

mod error;
mod profiles;
mod store;

pub use error::ConfigError;
pub use profiles::{DEFAULT_PROFILE, ProfileEntry};
pub use store::save_profile;

use std::collections::BTreeMap;
use std::path::PathBuf;

use cortex_core::Profile;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the profiles file location.
pub const CONFIG_PATH_ENV: &str = "CORTEX_CONFIG";

// `CORTEX_*` variables consumed elsewhere; kept out of the extracted config.
const NON_CONFIG_ENV_KEYS: &[&str] = &["config", "log", "password", "profile"];

fn default_profile_name() -> String {
    DEFAULT_PROFILE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CortexConfig {
    /// Profile used when `--profile` is not given.
    #[serde(default = "default_profile_name")]
    pub current_profile: String,

    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileEntry>,
}

impl Default for CortexConfig {
    fn default() -> Self {
        Self {
            current_profile: default_profile_name(),
            profiles: BTreeMap::new(),
        }
    }
}

impl CortexConfig {
    /// Load configuration from the profiles file and environment variables.
    ///
    /// Does NOT read `.env`; the binary loads it before parsing arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain against the default profiles file.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_from(Self::config_path().as_deref())
    }

    /// Build the figment provider chain against an explicit profiles file.
    ///
    /// Public so tests can point at a sandboxed file.
    #[must_use]
    pub fn figment_from(path: Option<&std::path::Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment.merge(
            Env::prefixed("CORTEX_")
                .ignore(NON_CONFIG_ENV_KEYS)
                .split("__"),
        )
    }

    /// Location of the profiles file.
    ///
    /// `$CORTEX_CONFIG` wins; otherwise `<config dir>/cortex/config.toml`.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::config_dir().map(|dir| dir.join("cortex").join("config.toml"))
    }

    /// Resolve a profile by name.
    ///
    /// Falls back to `current_profile` when `name` is `None` or empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ProfileNotFound`] for an unknown name and
    /// [`ConfigError::IncompleteProfile`] when the url or token is missing.
    pub fn profile(&self, name: Option<&str>) -> Result<Profile, ConfigError> {
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.current_profile);

        let entry = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: name.to_string(),
            })?;

        entry.to_profile(name)
    }
}
