use std::path::PathBuf;

use clap::Subcommand;

use super::{OutputArgs, QueryArgs};

/// Job commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JobCommands {
    /// List job definitions.
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Describe a job definition (always JSON).
    Describe {
        /// Job name.
        name: String,
        #[command(flatten)]
        output: QueryArgs,
    },
    /// Show run statistics for a job definition (always JSON).
    Status {
        /// Job definition name.
        job_definition: String,
        #[command(flatten)]
        output: QueryArgs,
    },
    /// Save a job definition from a JSON file (`-` reads stdin).
    Save {
        /// Path to the job definition.
        file: PathBuf,
    },
}
