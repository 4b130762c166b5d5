//! Profiles file persistence for `cortex login`.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::{CortexConfig, ProfileEntry};

/// Write `entry` under `name` in the profiles file and make it current.
///
/// The file is read directly rather than through figment so environment
/// overrides never end up persisted. Other profiles are preserved.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read or written,
/// [`ConfigError::Parse`] if an existing file is malformed, and
/// [`ConfigError::Encode`] if the result cannot be serialized.
pub fn save_profile(path: &Path, name: &str, entry: ProfileEntry) -> Result<(), ConfigError> {
    let mut config = if path.exists() {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<CortexConfig>(&raw)?
    } else {
        CortexConfig::default()
    };

    config.profiles.insert(name.to_string(), entry);
    config.current_profile = name.to_string();

    let encoded = toml::to_string_pretty(&config)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, encoded).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|source| {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
    }

    Ok(())
}
