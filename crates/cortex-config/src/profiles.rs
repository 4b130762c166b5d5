//! Profile entries as stored in the profiles file.

use std::fmt;

use cortex_core::Profile;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Profile name used when nothing else is selected.
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileEntry {
    /// Base endpoint, e.g. `https://api.example.com`.
    #[serde(default)]
    pub url: String,

    /// Bearer token returned by `login`.
    #[serde(default)]
    pub token: String,
}

impl ProfileEntry {
    pub(crate) fn to_profile(&self, name: &str) -> Result<Profile, ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::IncompleteProfile {
                name: name.to_string(),
                field: "url",
            });
        }
        if self.token.trim().is_empty() {
            return Err(ConfigError::IncompleteProfile {
                name: name.to_string(),
                field: "token",
            });
        }
        Ok(Profile::new(name, self.url.trim(), self.token.trim()))
    }
}

impl fmt::Debug for ProfileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileEntry")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .finish()
    }
}
