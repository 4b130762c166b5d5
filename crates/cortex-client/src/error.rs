//! Client error types.
//!
//! Non-2xx responses from resource endpoints are NOT errors; they come
//! back as [`cortex_core::Envelope::Failure`]. This type covers the
//! exceptional paths: transport failures, rejected logins, and requests
//! that could not be built.

use std::error::Error as _;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response (connect error,
    /// timeout, body read failure).
    #[error("{message}")]
    Transport {
        /// HTTP status, when the failure happened after headers arrived.
        status: Option<u16>,
        message: String,
    },

    /// The authenticate endpoint rejected the credentials.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The profile's base URL cannot be used as an API endpoint.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A resource identifier cannot be placed in a URL path.
    #[error("invalid {kind} '{value}': {reason}")]
    InvalidIdentifier {
        kind: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ClientError {
    /// Normalize a `reqwest` failure into [`ClientError::Transport`].
    ///
    /// The message carries the whole source chain, since reqwest's own
    /// display stops at "error sending request".
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_transport(error: reqwest::Error) -> Self {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        Self::Transport {
            status: error.status().map(|status| status.as_u16()),
            message,
        }
    }

    /// HTTP status carried by the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}
