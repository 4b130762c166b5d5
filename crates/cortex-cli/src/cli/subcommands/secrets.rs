use clap::Subcommand;

use super::QueryArgs;

/// Tenant secret commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SecretCommands {
    /// Read a secret (always JSON).
    Get {
        /// Secret path, e.g. `db/password`.
        path: String,
        #[command(flatten)]
        output: QueryArgs,
    },
}
