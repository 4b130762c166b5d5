use clap::{Args, Subcommand};

use crate::cli::subcommands::{JobCommands, SecretCommands, SessionCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Work with sessions.
    Sessions {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Work with job definitions.
    Jobs {
        #[command(subcommand)]
        action: JobCommands,
    },
    /// Read tenant secrets.
    Secrets {
        #[command(subcommand)]
        action: SecretCommands,
    },
    /// Authenticate and store the token in a profile.
    Login(LoginArgs),
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    /// Tenant (account) identifier.
    #[arg(long)]
    pub tenant: String,
    /// User name.
    #[arg(long)]
    pub username: String,
    /// Password.
    #[arg(long, env = "CORTEX_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Base URL; defaults to the profile's stored URL.
    #[arg(long)]
    pub url: Option<String>,
}
