use anyhow::Context;
use cortex_client::AuthClient;
use cortex_config::{ConfigError, CortexConfig, ProfileEntry, save_profile};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::output::{self, Report};

/// Handle `cortex login`: exchange credentials for a token and store it.
pub async fn handle(args: &LoginArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = CortexConfig::config_path().ok_or(ConfigError::NoConfigPath)?;
    let config = CortexConfig::load().context("failed to load cortex configuration")?;

    let name = profile_name(flags.profile.as_deref(), &config);
    let url = resolve_url(args.url.as_deref(), &config, &name)?;

    let client = AuthClient::new(&url).context("failed to build auth client")?;
    let token = client
        .login(&args.tenant, &args.username, &args.password)
        .await
        .context("Login failed")?;

    save_profile(&path, &name, ProfileEntry { url, token })
        .with_context(|| format!("failed to save profile '{name}'"))?;
    tracing::debug!(profile = %name, path = %path.display(), "profile saved");

    output::emit(&Report::Success("Login successful.".into()));
    Ok(())
}

fn profile_name(flag: Option<&str>, config: &CortexConfig) -> String {
    flag.map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(&config.current_profile)
        .to_string()
}

/// `--url` wins; otherwise the URL already stored for the profile.
fn resolve_url(flag: Option<&str>, config: &CortexConfig, name: &str) -> anyhow::Result<String> {
    let stored = config.profiles.get(name).map(|entry| entry.url.as_str());

    flag.or(stored)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .with_context(|| format!("no URL known for profile '{name}'; pass --url"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config_with_default(url: &str) -> CortexConfig {
        let mut config = CortexConfig::default();
        config.profiles.insert(
            "default".into(),
            ProfileEntry {
                url: url.into(),
                token: "old".into(),
            },
        );
        config
    }

    #[test]
    fn profile_flag_overrides_current() {
        let config = CortexConfig::default();
        assert_eq!(profile_name(Some("staging"), &config), "staging");
        assert_eq!(profile_name(Some("  "), &config), "default");
        assert_eq!(profile_name(None, &config), "default");
    }

    #[test]
    fn url_flag_wins_over_stored() {
        let config = config_with_default("https://stored.example.com");
        let url = resolve_url(Some("https://flag.example.com"), &config, "default").expect("url");
        assert_eq!(url, "https://flag.example.com");
    }

    #[test]
    fn stored_url_is_reused() {
        let config = config_with_default("https://stored.example.com");
        let url = resolve_url(None, &config, "default").expect("url");
        assert_eq!(url, "https://stored.example.com");
    }

    #[test]
    fn missing_url_is_an_error() {
        let config = CortexConfig::default();
        let error = resolve_url(None, &config, "fresh").expect_err("should fail");
        assert!(error.to_string().contains("pass --url"));
    }
}
