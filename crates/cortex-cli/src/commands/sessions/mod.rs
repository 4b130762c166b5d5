mod add;
mod delete;
mod describe;
mod list;

use anyhow::Context;
use cortex_client::SessionsClient;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::output;

/// Handle `cortex sessions`.
pub async fn handle(action: &SessionCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = bootstrap::load_profile(flags)?;
    let client = SessionsClient::new(&profile.url).context("failed to build sessions client")?;

    let report = match action {
        SessionCommands::List { output } => list::run(&client, &profile, output).await?,
        SessionCommands::Describe { session_id, output } => {
            describe::run(&client, &profile, session_id, output).await?
        }
        SessionCommands::Delete { session_id } => {
            delete::run(&client, &profile, session_id).await?
        }
        SessionCommands::Add {
            session_id,
            instance_id,
        } => add::run(&client, &profile, session_id, instance_id).await?,
    };

    output::emit(&report);
    Ok(())
}
