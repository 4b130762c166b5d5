//! Resolved connection profile.

use std::fmt;

/// A named endpoint plus the bearer token used against it.
///
/// Loaded once per invocation and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub url: String,
    pub token: String,
}

impl Profile {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            token: token.into(),
        }
    }
}

// Tokens end up in debug logs otherwise.
impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .finish()
    }
}
