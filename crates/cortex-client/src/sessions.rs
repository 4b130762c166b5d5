//! Sessions API client.

use cortex_core::Envelope;
use serde_json::Value;

use crate::endpoint::{Endpoint, PathBuilder};
use crate::error::ClientError;
use crate::http::execute;

/// Client for `/v2/sessions`.
#[derive(Debug, Clone)]
pub struct SessionsClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl SessionsClient {
    /// Create a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the base URL is unusable or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http(crate::http::client()?, base_url)
    }

    /// Create a client sharing an existing `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL is unusable.
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http,
            endpoint: Endpoint::parse(base_url)?,
        })
    }

    fn sessions(&self) -> PathBuilder<'_> {
        self.endpoint.path().fixed("v2").fixed("sessions")
    }

    /// `GET /v2/sessions`. The payload is the `sessions` array of the body;
    /// a body without one yields an empty array.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure.
    pub async fn list_sessions(&self, token: &str) -> Result<Envelope<Value>, ClientError> {
        let url = self.sessions().build()?;
        tracing::debug!(%url, "list_sessions");

        let envelope = execute(self.http.get(url), token).await?;
        Ok(envelope.map(|mut body| match body.get_mut("sessions") {
            Some(sessions) => sessions.take(),
            None => Value::Array(Vec::new()),
        }))
    }

    /// `GET /v2/sessions/{sessionId}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for an invalid id or on network failure.
    pub async fn describe_session(
        &self,
        token: &str,
        session_id: &str,
    ) -> Result<Envelope<Value>, ClientError> {
        let url = self.sessions().id("session id", session_id)?.build()?;
        tracing::debug!(session_id, %url, "describe_session");

        execute(self.http.get(url), token).await
    }

    /// `DELETE /v2/sessions/{sessionId}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for an invalid id or on network failure.
    pub async fn delete_session(
        &self,
        token: &str,
        session_id: &str,
    ) -> Result<Envelope<Value>, ClientError> {
        let url = self.sessions().id("session id", session_id)?.build()?;
        tracing::debug!(session_id, %url, "delete_session");

        execute(self.http.delete(url), token).await
    }

    /// `POST /v2/sessions/{instanceId}/{sessionId}`.
    ///
    /// The instance id comes first in the path.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for an invalid id or on network failure.
    pub async fn add_data_to_session(
        &self,
        token: &str,
        session_id: &str,
        instance_id: &str,
    ) -> Result<Envelope<Value>, ClientError> {
        let url = self
            .sessions()
            .id("instance id", instance_id)?
            .id("session id", session_id)?
            .build()?;
        tracing::debug!(session_id, instance_id, %url, "add_data_to_session");

        execute(self.http.post(url), token).await
    }
}
