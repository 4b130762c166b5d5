use cortex_client::SessionsClient;
use cortex_core::Profile;

use crate::cli::subcommands::OutputArgs;
use crate::output::query::{self, Query};
use crate::output::table::{Column, render_spec_table};
use crate::output::{Outcome, Report, render_json, settle};

const COLUMNS: [Column; 4] = [
    Column::new("Name", "name", 50),
    Column::new("Title", "title", 25),
    Column::new("Description", "description", 50),
    Column::new("Created On", "createdAt", 26),
];

pub async fn run(
    client: &SessionsClient,
    profile: &Profile,
    output: &OutputArgs,
) -> anyhow::Result<Report> {
    let query = query::parse_optional(output.query.as_deref())?;
    let outcome = settle(client.list_sessions(&profile.token).await)?;
    render(outcome, query.as_ref(), output.json)
}

pub fn render(outcome: Outcome, query: Option<&Query>, json: bool) -> anyhow::Result<Report> {
    let sessions = match outcome {
        Ok(sessions) => query::apply(query, sessions)?,
        Err(failure) => return Ok(Report::Failure(failure.line("Failed to list sessions"))),
    };

    if json {
        Ok(Report::Success(render_json(&sessions)?))
    } else {
        Ok(Report::Success(render_spec_table(&COLUMNS, &sessions)))
    }
}
