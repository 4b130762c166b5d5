use cortex_client::JobsClient;
use cortex_core::Profile;

use crate::cli::subcommands::QueryArgs;
use crate::output::query::{self, Query};
use crate::output::{Outcome, Report, render_queried_json, settle};

pub async fn run(
    client: &JobsClient,
    profile: &Profile,
    job_definition: &str,
    output: &QueryArgs,
) -> anyhow::Result<Report> {
    let query = query::parse_optional(output.query.as_deref())?;
    let outcome = settle(client.job_status(&profile.token, job_definition).await)?;
    render(outcome, job_definition, query.as_ref())
}

pub fn render(
    outcome: Outcome,
    job_definition: &str,
    query: Option<&Query>,
) -> anyhow::Result<Report> {
    match outcome {
        Ok(stats) => Ok(Report::Success(render_queried_json(stats, query)?)),
        Err(failure) => Ok(Report::Failure(
            failure.line(&format!("Failed to get job status {job_definition}")),
        )),
    }
}
