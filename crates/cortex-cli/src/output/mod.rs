use cortex_client::ClientError;
use cortex_core::{Envelope, message_text};
use serde::Serialize;
use serde_json::Value;

use crate::ui;
use query::Query;

pub mod query;
pub mod table;

/// What a handler decided to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Printed to stdout.
    Success(String),
    /// Printed to stderr, red when color is enabled.
    Failure(String),
}

/// A request that did not succeed, reduced to what an error line prints.
///
/// `status` is `None` when the request failed before a response arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub status: Option<u16>,
    pub message: String,
}

impl Failure {
    /// `"{context}: {status} {message}"`, with `unknown` for a missing status.
    /// An empty message leaves no trailing separator.
    #[must_use]
    pub fn line(&self, context: &str) -> String {
        let status = self
            .status
            .map_or_else(|| String::from("unknown"), |status| status.to_string());
        join_detail(format!("{context}: {status}"), &self.message)
    }

    /// `"{context}: {message}"`, leaving the status out.
    #[must_use]
    pub fn line_without_status(&self, context: &str) -> String {
        join_detail(format!("{context}:"), &self.message)
    }
}

fn join_detail(mut head: String, message: &str) -> String {
    if !message.is_empty() {
        head.push(' ');
        head.push_str(message);
    }
    head
}

/// Result of one resource call as seen by a renderer.
pub type Outcome = Result<Value, Failure>;

/// Fold a client result into an [`Outcome`].
///
/// Failure envelopes and transport errors become [`Failure`]s; errors raised
/// before any request was sent (bad URL, bad identifier) propagate.
pub fn settle(result: Result<Envelope<Value>, ClientError>) -> anyhow::Result<Outcome> {
    match result {
        Ok(Envelope::Success(payload)) => Ok(Ok(payload)),
        Ok(Envelope::Failure { status, message }) => Ok(Err(Failure {
            status: Some(status),
            message: message_text(&message),
        })),
        Err(error @ ClientError::Transport { .. }) => {
            tracing::debug!(%error, "request failed in transport");
            Ok(Err(Failure {
                status: error.status(),
                message: error.to_string(),
            }))
        }
        Err(error) => Err(error.into()),
    }
}

/// Pretty JSON with two-space indentation.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Apply an optional query, then render as pretty JSON.
pub fn render_queried_json(value: Value, query: Option<&Query>) -> anyhow::Result<String> {
    render_json(&query::apply(query, value)?)
}

#[must_use]
pub fn paint_error(text: &str, color: bool) -> String {
    if color {
        format!("\u{1b}[31m{text}\u{1b}[0m")
    } else {
        text.to_string()
    }
}

/// Print a report to the stream it belongs on.
pub fn emit(report: &Report) {
    match report {
        Report::Success(text) => println!("{text}"),
        Report::Failure(text) => eprintln!("{}", paint_error(text, ui::prefs().color)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_render_uses_two_space_indent() {
        let out = render_json(&json!([{"name": "s1"}])).expect("render");
        assert_eq!(out, "[\n  {\n    \"name\": \"s1\"\n  }\n]");
    }

    #[test]
    fn json_render_keeps_key_order() {
        let out = render_json(&json!({"name": "s1", "createdAt": "x", "age": 1})).expect("render");
        let name = out.find("name").expect("name");
        let created = out.find("createdAt").expect("createdAt");
        let age = out.find("age").expect("age");
        assert!(name < created && created < age);
    }

    #[test]
    fn failure_line_with_status() {
        let failure = Failure {
            status: Some(500),
            message: "boom".into(),
        };
        assert_eq!(failure.line("Failed to list sessions"), "Failed to list sessions: 500 boom");
    }

    #[test]
    fn failure_line_without_status_says_unknown() {
        let failure = Failure {
            status: None,
            message: "connection refused".into(),
        };
        assert_eq!(
            failure.line("Failed to delete session"),
            "Failed to delete session: unknown connection refused"
        );
    }

    #[test]
    fn failure_line_with_empty_message_has_no_trailing_space() {
        let failure = Failure {
            status: Some(404),
            message: String::new(),
        };
        assert_eq!(failure.line("Failed to delete session"), "Failed to delete session: 404");
        assert_eq!(
            failure.line_without_status("Failed to describe session s1"),
            "Failed to describe session s1:"
        );
    }

    #[test]
    fn settle_success_keeps_payload() {
        let outcome = settle(Ok(Envelope::Success(json!([1, 2])))).expect("settle");
        assert_eq!(outcome, Ok(json!([1, 2])));
    }

    #[test]
    fn settle_failure_renders_json_message_compactly() {
        let outcome = settle(Ok(Envelope::Failure {
            status: 400,
            message: json!({"error": "bad"}),
        }))
        .expect("settle");
        assert_eq!(
            outcome,
            Err(Failure {
                status: Some(400),
                message: r#"{"error":"bad"}"#.into(),
            })
        );
    }

    #[test]
    fn settle_transport_error_becomes_failure() {
        let outcome = settle(Err(ClientError::Transport {
            status: None,
            message: "error sending request".into(),
        }))
        .expect("settle");
        assert_eq!(
            outcome,
            Err(Failure {
                status: None,
                message: "error sending request".into(),
            })
        );
    }

    #[test]
    fn settle_propagates_pre_request_errors() {
        let result = settle(Err(ClientError::InvalidIdentifier {
            kind: "session id",
            value: String::new(),
            reason: "must not be empty",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn paint_error_wraps_in_red_only_when_enabled() {
        assert_eq!(paint_error("x", false), "x");
        assert_eq!(paint_error("x", true), "\u{1b}[31mx\u{1b}[0m");
    }

    #[test]
    fn queried_json_applies_expression() {
        let query = Query::parse("a.b").expect("parse");
        let out = render_queried_json(json!({"a": {"b": 1}}), Some(&query)).expect("render");
        assert_eq!(out, "1");
    }
}
