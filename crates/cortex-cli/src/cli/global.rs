use clap::ValueEnum;

/// Color output switch, matching `--color on|off`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    On,
    Off,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub profile: Option<String>,
    pub color: ColorMode,
    pub quiet: bool,
    pub verbose: bool,
}
