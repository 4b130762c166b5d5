//! Tenant secrets lookup.

use cortex_core::Envelope;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::ClientError;
use crate::http::execute;

/// `GET /v2/tenants/secrets/{path}`.
///
/// `path` may contain `/`; each non-empty piece becomes one escaped path
/// segment.
///
/// # Errors
///
/// Returns [`ClientError`] for an unusable base URL or path, or on network
/// failure.
pub async fn get_secret(
    http: &reqwest::Client,
    token: &str,
    base_url: &str,
    path: &str,
) -> Result<Envelope<Value>, ClientError> {
    let url = Endpoint::parse(base_url)?
        .path()
        .fixed("v2")
        .fixed("tenants")
        .fixed("secrets")
        .nested_id("secret path", path)?
        .build()?;
    tracing::debug!(path, %url, "get_secret");

    execute(http.get(url), token).await
}
