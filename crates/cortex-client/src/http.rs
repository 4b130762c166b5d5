//! Shared request/response handling for resource clients.
//!
//! Centralizes client construction, body decoding, and the success/failure
//! split so individual resource modules stay focused on URL construction
//! and payload selection.

use cortex_core::Envelope;
use serde_json::Value;

use crate::error::ClientError;

const USER_AGENT: &str = concat!("cortex-cli/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for one CLI invocation.
///
/// No timeout is configured beyond reqwest's defaults.
///
/// # Errors
///
/// Returns [`ClientError::Transport`] if the TLS backend fails to initialize.
pub fn client() -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(ClientError::from_transport)
}

/// Send an authenticated request and normalize the response.
///
/// # Errors
///
/// Returns [`ClientError::Transport`] if the request cannot be sent or the
/// body cannot be read. HTTP error statuses are NOT errors.
pub async fn execute(
    request: reqwest::RequestBuilder,
    token: &str,
) -> Result<Envelope<Value>, ClientError> {
    let response = request
        .bearer_auth(token)
        .send()
        .await
        .map_err(ClientError::from_transport)?;
    into_envelope(response).await
}

/// Split a response into [`Envelope::Success`] (2xx) or
/// [`Envelope::Failure`] (anything else), carrying the decoded body.
///
/// # Errors
///
/// Returns [`ClientError::Transport`] if the body cannot be read.
pub async fn into_envelope(response: reqwest::Response) -> Result<Envelope<Value>, ClientError> {
    let status = response.status();
    let body = read_body(response).await?;

    if status.is_success() {
        Ok(Envelope::Success(body))
    } else {
        tracing::debug!(status = status.as_u16(), "request failed");
        Ok(Envelope::Failure {
            status: status.as_u16(),
            message: body,
        })
    }
}

/// Read and decode a response body.
///
/// # Errors
///
/// Returns [`ClientError::Transport`] if the body stream fails.
pub async fn read_body(response: reqwest::Response) -> Result<Value, ClientError> {
    let bytes = response
        .bytes()
        .await
        .map_err(ClientError::from_transport)?;
    Ok(decode_body(&bytes))
}

/// JSON bodies decode to their value, blank bodies to `null`, and anything
/// else to a JSON string holding the raw text.
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
