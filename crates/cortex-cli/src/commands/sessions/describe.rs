use cortex_client::SessionsClient;
use cortex_core::Profile;

use crate::cli::subcommands::OutputArgs;
use crate::output::query::{self, Query};
use crate::output::{Outcome, Report, render_queried_json, settle};

pub async fn run(
    client: &SessionsClient,
    profile: &Profile,
    session_id: &str,
    output: &OutputArgs,
) -> anyhow::Result<Report> {
    let query = query::parse_optional(output.query.as_deref())?;
    let outcome = settle(client.describe_session(&profile.token, session_id).await)?;
    render(outcome, session_id, query.as_ref())
}

/// Describe always prints JSON; the failure line carries the id but not the status.
pub fn render(outcome: Outcome, session_id: &str, query: Option<&Query>) -> anyhow::Result<Report> {
    match outcome {
        Ok(session) => Ok(Report::Success(render_queried_json(session, query)?)),
        Err(failure) => Ok(Report::Failure(
            failure.line_without_status(&format!("Failed to describe session {session_id}")),
        )),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::output::Failure;

    #[test]
    fn success_prints_json() {
        let session = json!({"sessionId": "abc", "ttl": 3600});
        let report = render(Ok(session), "abc", None).expect("render");
        assert_eq!(
            report,
            Report::Success("{\n  \"sessionId\": \"abc\",\n  \"ttl\": 3600\n}".into())
        );
    }

    #[test]
    fn query_selects_field() {
        let query = Query::parse("ttl").expect("parse");
        let report = render(Ok(json!({"ttl": 3600})), "abc", Some(&query)).expect("render");
        assert_eq!(report, Report::Success("3600".into()));
    }

    #[test]
    fn not_found_mentions_id_verbatim() {
        let failure = Failure {
            status: Some(404),
            message: "Session not found".into(),
        };
        let report = render(Err(failure), "no-such/id", None).expect("render");
        assert_eq!(
            report,
            Report::Failure("Failed to describe session no-such/id: Session not found".into())
        );
    }
}
