use clap::Subcommand;

use super::OutputArgs;

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// List running sessions.
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Describe a session (always JSON).
    Describe {
        /// Session identifier.
        session_id: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Delete a session.
    Delete {
        /// Session identifier.
        session_id: String,
    },
    /// Add data to a session.
    Add {
        /// Session identifier.
        session_id: String,
        /// Data instance to attach.
        instance_id: String,
    },
}
