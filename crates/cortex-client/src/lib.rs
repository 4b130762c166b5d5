//! # cortex-client
//!
//! HTTP resource clients for the Cortex platform API.
//!
//! One client per resource, each holding a base URL and issuing exactly one
//! request per method:
//! - [`AuthClient`]: credential exchange for a bearer token
//! - [`SessionsClient`]: list, describe, delete, and add data to sessions
//! - [`JobsClient`]: list, describe, status, and save job definitions
//! - [`secrets::get_secret`]: tenant secret lookup
//!
//! Every resource method resolves to a [`cortex_core::Envelope`]: non-2xx
//! responses are values, and only transport-level problems are
//! [`ClientError`]s. No retries, no caching, no timeouts beyond reqwest's
//! defaults.

pub mod auth;
pub mod endpoint;
pub mod http;
pub mod jobs;
pub mod secrets;
pub mod sessions;

mod error;

pub use auth::AuthClient;
pub use endpoint::Endpoint;
pub use error::ClientError;
pub use jobs::JobsClient;
pub use sessions::SessionsClient;
