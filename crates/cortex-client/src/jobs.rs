//! Jobs API client.

use cortex_core::{Envelope, JobSpec};
use serde_json::Value;

use crate::endpoint::{Endpoint, PathBuilder};
use crate::error::ClientError;
use crate::http::execute;

/// Client for `/v2/jobs`.
#[derive(Debug, Clone)]
pub struct JobsClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl JobsClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the base URL is unusable or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http(crate::http::client()?, base_url)
    }

    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL is unusable.
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http,
            endpoint: Endpoint::parse(base_url)?,
        })
    }

    fn jobs(&self) -> PathBuilder<'_> {
        self.endpoint.path().fixed("v2").fixed("jobs")
    }

    /// `GET /v2/jobs`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure.
    pub async fn list_jobs(&self, token: &str) -> Result<Envelope<Value>, ClientError> {
        let url = self.jobs().build()?;
        tracing::debug!(%url, "list_jobs");

        execute(self.http.get(url), token).await
    }

    /// `GET /v2/jobs/{name}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for an invalid name or on network failure.
    pub async fn describe_job(
        &self,
        token: &str,
        name: &str,
    ) -> Result<Envelope<Value>, ClientError> {
        let url = self.jobs().id("job name", name)?.build()?;
        tracing::debug!(name, %url, "describe_job");

        execute(self.http.get(url), token).await
    }

    /// `GET /v2/jobs/{jobDefinition}/stats`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for an invalid name or on network failure.
    pub async fn job_status(
        &self,
        token: &str,
        job_definition: &str,
    ) -> Result<Envelope<Value>, ClientError> {
        let url = self
            .jobs()
            .id("job definition", job_definition)?
            .fixed("stats")
            .build()?;
        tracing::debug!(job_definition, %url, "job_status");

        execute(self.http.get(url), token).await
    }

    /// `POST /v2/jobs` with the definition as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure.
    pub async fn save_job(
        &self,
        token: &str,
        spec: &JobSpec,
    ) -> Result<Envelope<Value>, ClientError> {
        let url = self.jobs().build()?;
        tracing::debug!(name = %spec.name, %url, "save_job");

        execute(self.http.post(url).json(spec), token).await
    }
}
