use anyhow::Context;
use cortex_config::CortexConfig;
use cortex_core::Profile;

use crate::cli::GlobalFlags;

/// Load the profiles config and resolve the profile selected by `--profile`.
pub fn load_profile(flags: &GlobalFlags) -> anyhow::Result<Profile> {
    let config = CortexConfig::load().context("failed to load cortex configuration")?;
    let profile = config
        .profile(flags.profile.as_deref())
        .context("failed to resolve profile")?;

    tracing::debug!(profile = %profile.name, url = %profile.url, "profile resolved");
    Ok(profile)
}
