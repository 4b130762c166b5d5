mod describe;
mod list;
mod save;
mod status;

use anyhow::Context;
use cortex_client::JobsClient;
use cortex_core::Profile;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::JobCommands;
use crate::output;

/// Handle `cortex jobs`.
pub async fn handle(action: &JobCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = match action {
        JobCommands::List { output } => {
            let (client, profile) = connect(flags)?;
            list::run(&client, &profile, output).await?
        }
        JobCommands::Describe { name, output } => {
            let (client, profile) = connect(flags)?;
            describe::run(&client, &profile, name, output).await?
        }
        JobCommands::Status {
            job_definition,
            output,
        } => {
            let (client, profile) = connect(flags)?;
            status::run(&client, &profile, job_definition, output).await?
        }
        JobCommands::Save { file } => {
            // A bad definition fails before any profile lookup.
            let spec = save::read_spec(file)?;
            let (client, profile) = connect(flags)?;
            save::run(&client, &profile, &spec).await?
        }
    };

    output::emit(&report);
    Ok(())
}

fn connect(flags: &GlobalFlags) -> anyhow::Result<(JobsClient, Profile)> {
    let profile = bootstrap::load_profile(flags)?;
    let client = JobsClient::new(&profile.url).context("failed to build jobs client")?;
    Ok((client, profile))
}
