use cortex_client::JobsClient;
use cortex_core::Profile;
use serde_json::Value;

use crate::cli::subcommands::OutputArgs;
use crate::output::query::{self, Query};
use crate::output::table::{Column, render_spec_table};
use crate::output::{Outcome, Report, render_json, settle};

const COLUMNS: [Column; 4] = [
    Column::new("Name", "name", 50),
    Column::new("Image", "image", 50),
    Column::new("Memory", "memory", 10),
    Column::new("vCPUs", "vcpus", 10),
];

pub async fn run(
    client: &JobsClient,
    profile: &Profile,
    output: &OutputArgs,
) -> anyhow::Result<Report> {
    let query = query::parse_optional(output.query.as_deref())?;
    let outcome = settle(client.list_jobs(&profile.token).await)?;
    render(outcome, query.as_ref(), output.json)
}

pub fn render(outcome: Outcome, query: Option<&Query>, json: bool) -> anyhow::Result<Report> {
    let jobs = match outcome {
        Ok(body) => query::apply(query, job_array(body))?,
        Err(failure) => return Ok(Report::Failure(failure.line("Failed to list jobs"))),
    };

    if json {
        Ok(Report::Success(render_json(&jobs)?))
    } else {
        Ok(Report::Success(render_spec_table(&COLUMNS, &jobs)))
    }
}

/// The `jobs` array of the body, or the body itself when it already is one.
fn job_array(mut body: Value) -> Value {
    if body.is_array() {
        return body;
    }
    match body.get_mut("jobs") {
        Some(jobs) => jobs.take(),
        None => Value::Array(Vec::new()),
    }
}
