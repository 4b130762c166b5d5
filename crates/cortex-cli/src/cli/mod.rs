use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cortex` binary.
#[derive(Debug, Parser)]
#[command(name = "cortex", version, about = "Cortex - platform command-line client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// The profile to use
    #[arg(long, global = true, env = "CORTEX_PROFILE")]
    pub profile: Option<String>,

    /// Turn on/off color output
    #[arg(long, global = true, value_enum, default_value = "on")]
    pub color: ColorMode,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            profile: self.profile.clone(),
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
