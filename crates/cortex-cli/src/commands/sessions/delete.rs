use cortex_client::SessionsClient;
use cortex_core::Profile;

use crate::output::{Outcome, Report, settle};

pub async fn run(
    client: &SessionsClient,
    profile: &Profile,
    session_id: &str,
) -> anyhow::Result<Report> {
    let outcome = settle(client.delete_session(&profile.token, session_id).await)?;
    Ok(render(outcome))
}

#[must_use]
pub fn render(outcome: Outcome) -> Report {
    match outcome {
        Ok(_) => Report::Success("Session successfully deleted.".into()),
        Err(failure) => Report::Failure(failure.line("Failed to delete session")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::output::Failure;

    #[test]
    fn success_ignores_body() {
        assert_eq!(
            render(Ok(json!({"success": true, "anything": [1, 2]}))),
            Report::Success("Session successfully deleted.".into())
        );
        assert_eq!(
            render(Ok(serde_json::Value::Null)),
            Report::Success("Session successfully deleted.".into())
        );
    }

    #[test]
    fn failure_line() {
        let failure = Failure {
            status: Some(404),
            message: r#"{"message":"not found"}"#.into(),
        };
        assert_eq!(
            render(Err(failure)),
            Report::Failure(r#"Failed to delete session: 404 {"message":"not found"}"#.into())
        );
    }

    #[test]
    fn transport_failure_has_unknown_status() {
        let failure = Failure {
            status: None,
            message: "connection refused".into(),
        };
        assert_eq!(
            render(Err(failure)),
            Report::Failure("Failed to delete session: unknown connection refused".into())
        );
    }
}
