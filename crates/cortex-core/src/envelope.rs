//! Uniform outcome of a resource call.
//!
//! A non-2xx response is a value, not an error: clients hand back
//! [`Envelope::Failure`] with the HTTP status and the response body so
//! command handlers can branch on success without knowing transport details.

use serde_json::Value;

/// Outcome of a single resource request.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// 2xx response; carries the parsed body (or its designated sub-field).
    Success(T),
    /// Non-2xx response.
    Failure {
        /// HTTP status code.
        status: u16,
        /// Response body: parsed JSON, raw text, or `null` when empty.
        message: Value,
    },
}

impl<T> Envelope<T> {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// HTTP status of a failed response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Success(_) => None,
            Self::Failure { status, .. } => Some(*status),
        }
    }

    /// Body of a failed response.
    #[must_use]
    pub const fn message(&self) -> Option<&Value> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message, .. } => Some(message),
        }
    }

    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    /// Transform the success payload, leaving failures untouched.
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(payload) => Envelope::Success(f(payload)),
            Self::Failure { status, message } => Envelope::Failure { status, message },
        }
    }
}

/// Render a response body for a human-readable error line.
///
/// Strings print as their raw text, `null` as an empty string, and any
/// other JSON value as compact JSON.
#[must_use]
pub fn message_text(message: &Value) -> String {
    match message {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
