use cortex_client::JobsClient;
use cortex_core::Profile;

use crate::cli::subcommands::QueryArgs;
use crate::output::query::{self, Query};
use crate::output::{Outcome, Report, render_queried_json, settle};

pub async fn run(
    client: &JobsClient,
    profile: &Profile,
    name: &str,
    output: &QueryArgs,
) -> anyhow::Result<Report> {
    let query = query::parse_optional(output.query.as_deref())?;
    let outcome = settle(client.describe_job(&profile.token, name).await)?;
    render(outcome, name, query.as_ref())
}

pub fn render(outcome: Outcome, name: &str, query: Option<&Query>) -> anyhow::Result<Report> {
    match outcome {
        Ok(job) => Ok(Report::Success(render_queried_json(job, query)?)),
        Err(failure) => Ok(Report::Failure(
            failure.line(&format!("Failed to describe job {name}")),
        )),
    }
}
