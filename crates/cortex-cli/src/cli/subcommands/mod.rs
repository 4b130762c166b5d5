pub mod jobs;
pub mod secrets;
pub mod sessions;

pub use jobs::JobCommands;
pub use secrets::SecretCommands;
pub use sessions::SessionCommands;

use clap::Args;

/// Output shaping shared by read commands.
#[derive(Clone, Debug, Default, Args)]
pub struct OutputArgs {
    /// Output results using JSON.
    #[arg(long)]
    pub json: bool,
    /// A JMESPath query used to filter the response data.
    #[arg(long)]
    pub query: Option<String>,
}

/// `--query` alone, for commands whose output is always JSON.
#[derive(Clone, Debug, Default, Args)]
pub struct QueryArgs {
    /// A JMESPath query used to filter the response data.
    #[arg(long)]
    pub query: Option<String>,
}
