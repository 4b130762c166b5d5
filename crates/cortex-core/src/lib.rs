//! # cortex-core
//!
//! Shared domain types for the Cortex CLI.
//!
//! - [`Envelope`]: the uniform success/failure outcome of every resource call
//! - [`Profile`]: a named endpoint URL plus bearer token
//! - [`JobSpec`]: the job definition shape forwarded on save
//! - Cross-cutting error types

pub mod envelope;
pub mod errors;
pub mod job;
pub mod profile;

pub use envelope::{Envelope, message_text};
pub use errors::CoreError;
pub use job::JobSpec;
pub use profile::Profile;
