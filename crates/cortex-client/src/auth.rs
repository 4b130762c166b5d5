//! Authentication API client.

use serde::Serialize;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::ClientError;
use crate::http::read_body;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Client for `/v2/admin/{tenantId}/users/authenticate`.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl AuthClient {
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

    /// Exchange credentials for a bearer token.
    ///
    /// Unlike the resource clients, a rejected login is an error rather than
    /// a failure envelope, and the response body is never surfaced.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthenticationFailed`] on a non-2xx response
    /// or a body without a `jwt` string, and [`ClientError::Transport`] on
    /// network failure.
    pub async fn login(
        &self,
        tenant_id: &str,
        username: &str,
        password: &str,
    ) -> Result<String, ClientError> {
        let url = self
            .endpoint
            .path()
            .fixed("v2")
            .fixed("admin")
            .id("tenant id", tenant_id)?
            .fixed("users")
            .fixed("authenticate")
            .build()?;
        tracing::debug!(username, %url, "login");

        let response = self
            .http
            .post(url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        if !response.status().is_success() {
            tracing::debug!(status = response.status().as_u16(), "login rejected");
            return Err(ClientError::AuthenticationFailed);
        }

        let body = read_body(response).await?;
        body.get("jwt")
            .and_then(Value::as_str)
            .filter(|jwt| !jwt.is_empty())
            .map(str::to_string)
            .ok_or(ClientError::AuthenticationFailed)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn login_returns_jwt() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v2/admin/acme/users/authenticate")
                    .json_body(json!({"username": "ada", "password": "pw"}));
                then.status(200).json_body(json!({"jwt": "eyJhbGciOi"}));
            })
            .await;

        let client = AuthClient::new(&server.base_url()).unwrap();
        let token = client.login("acme", "ada", "pw").await.unwrap();

        mock.assert_async().await;
        assert_eq!(token, "eyJhbGciOi");
    }

    #[tokio::test]
    async fn rejected_login_hides_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v2/admin/acme/users/authenticate");
                then.status(401)
                    .json_body(json!({"message": "bad password for ada"}));
            })
            .await;

        let client = AuthClient::new(&server.base_url()).unwrap();
        let err = client.login("acme", "ada", "wrong").await.unwrap_err();

        assert!(matches!(err, ClientError::AuthenticationFailed));
        assert_eq!(err.to_string(), "Authentication failed");
    }

    #[tokio::test]
    async fn success_without_jwt_is_authentication_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v2/admin/acme/users/authenticate");
                then.status(200).json_body(json!({"token": "elsewhere"}));
            })
            .await;

        let client = AuthClient::new(&server.base_url()).unwrap();
        let err = client.login("acme", "ada", "pw").await.unwrap_err();
        assert!(matches!(err, ClientError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        let client = AuthClient::new("http://127.0.0.1:1").unwrap();
        let err = client.login("acme", "ada", "pw").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport { .. }));
    }
}
