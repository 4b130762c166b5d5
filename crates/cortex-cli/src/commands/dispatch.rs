use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Sessions { action } => commands::sessions::handle(action, flags).await,
        Commands::Jobs { action } => commands::jobs::handle(action, flags).await,
        Commands::Secrets { action } => commands::secrets::handle(action, flags).await,
        Commands::Login(args) => commands::login::handle(args, flags).await,
    }
}
