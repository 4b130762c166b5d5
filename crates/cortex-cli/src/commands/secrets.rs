use anyhow::Context;
use cortex_client::secrets::get_secret;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::SecretCommands;
use crate::output::query::{self, Query};
use crate::output::{self, Outcome, Report, render_queried_json, settle};

/// Handle `cortex secrets`.
pub async fn handle(action: &SecretCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let SecretCommands::Get { path, output } = action;

    let query = query::parse_optional(output.query.as_deref())?;
    let profile = bootstrap::load_profile(flags)?;
    let http = cortex_client::http::client().context("failed to build HTTP client")?;

    let outcome = settle(get_secret(&http, &profile.token, &profile.url, path).await)?;
    output::emit(&render(outcome, path, query.as_ref())?);
    Ok(())
}

pub fn render(outcome: Outcome, path: &str, query: Option<&Query>) -> anyhow::Result<Report> {
    match outcome {
        Ok(secret) => Ok(Report::Success(render_queried_json(secret, query)?)),
        Err(failure) => Ok(Report::Failure(
            failure.line(&format!("Failed to get secret {path}")),
        )),
    }
}
