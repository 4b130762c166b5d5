//! `--query` expressions, evaluated with the `jmespath` crate.
//!
//! Expressions compile before any request is sent, so a malformed query
//! fails fast. Values cross into `jmespath::Variable` and back to
//! `serde_json::Value` at the edges of [`Query::evaluate`].

use std::fmt;

use jmespath::{Expression, JmespathError};
use serde_json::Value;
use thiserror::Error;

/// A query that did not compile, or failed while evaluating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid query at position {position}: {reason}")]
pub struct QueryError {
    /// Byte offset into the expression.
    pub position: usize,
    pub reason: String,
}

impl From<JmespathError> for QueryError {
    fn from(error: JmespathError) -> Self {
        Self {
            position: error.offset,
            reason: error.reason.to_string(),
        }
    }
}

/// Parse an optional `--query`; `None` or a blank expression means no query.
///
/// # Errors
///
/// Returns [`QueryError`] when the expression does not compile.
pub fn parse_optional(expression: Option<&str>) -> Result<Option<Query>, QueryError> {
    expression
        .filter(|expression| !expression.trim().is_empty())
        .map(Query::parse)
        .transpose()
}

/// Evaluate `query` against `value`, or hand `value` back untouched.
///
/// # Errors
///
/// Returns [`QueryError`] when evaluation fails, e.g. a function called with
/// an argument of the wrong type.
pub fn apply(query: Option<&Query>, value: Value) -> Result<Value, QueryError> {
    match query {
        Some(query) => query.evaluate(value),
        None => Ok(value),
    }
}

/// A compiled query.
pub struct Query {
    compiled: Expression<'static>,
}

impl Query {
    /// # Errors
    ///
    /// Returns [`QueryError`] with the offending position.
    pub fn parse(expression: &str) -> Result<Self, QueryError> {
        let compiled = jmespath::compile(expression)?;
        Ok(Self { compiled })
    }

    /// # Errors
    ///
    /// Returns [`QueryError`] when the expression fails at runtime.
    pub fn evaluate(&self, value: Value) -> Result<Value, QueryError> {
        let result = self.compiled.search(value)?;
        serde_json::to_value(&*result).map_err(|error| QueryError {
            position: 0,
            reason: error.to_string(),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.compiled.as_str()
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Query").field(&self.as_str()).finish()
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}
