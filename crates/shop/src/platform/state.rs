//! CLI state on disk.
//!
//! Everything lives in `~/.config/shopfront-cli/` (`%APPDATA%\shopfront-cli\` on Windows):
//!
//! - `settings.json` holds the [`CliSettings`] written by `shop config`
//! - `session.json` holds the session, managed by a [`FileSessionStore`]
//!
//! The directory is created on first use and, on Unix, only readable by its owner since the
//! session file contains the tokens.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shopfront_state::{FileSessionStore, StoreError};
use thiserror::Error;
use tracing::debug;

const SETTINGS_FILE: &str = "settings.json";
const SESSION_FILE: &str = "session.json";

/// Errors that can occur during state operations.
#[derive(Debug, Error)]
pub enum StateError {
    /// Config directory not found (HOME or APPDATA not set).
    #[error("Config directory not found (HOME or APPDATA environment variable not set)")]
    ConfigDirNotFound,

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file could not be read or written.
    #[error("Invalid settings file: {0}")]
    Serde(#[from] serde_json::Error),

    /// The session file could not be opened.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Settings persisted between invocations.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CliSettings {
    pub(crate) server_url: Option<String>,
}

/// Get the config directory path for the CLI.
fn get_config_dir() -> Result<PathBuf, StateError> {
    #[cfg(not(windows))]
    let base = std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"));
    #[cfg(windows)]
    let base = std::env::var_os("APPDATA").map(PathBuf::from);

    base.map(|base| base.join("shopfront-cli"))
        .ok_or(StateError::ConfigDirNotFound)
}

/// Ensure the config directory exists, creating it with restrictive permissions if needed.
fn ensure_config_dir() -> Result<PathBuf, StateError> {
    let config_dir = get_config_dir()?;

    if !config_dir.exists() {
        debug!(path = %config_dir.display(), "Creating config directory");
        std::fs::create_dir_all(&config_dir)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&config_dir, std::fs::Permissions::from_mode(0o700))?;
        }
    }

    Ok(config_dir)
}

pub(crate) fn load_settings() -> Result<CliSettings, StateError> {
    let path = get_config_dir()?.join(SETTINGS_FILE);

    match std::fs::read(&path) {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CliSettings::default()),
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn save_settings(settings: &CliSettings) -> Result<(), StateError> {
    let path = ensure_config_dir()?.join(SETTINGS_FILE);
    std::fs::write(&path, serde_json::to_vec_pretty(settings)?)?;
    debug!(path = %path.display(), "Settings saved");
    Ok(())
}

pub(crate) async fn open_session_store() -> Result<FileSessionStore, StateError> {
    let path = ensure_config_dir()?.join(SESSION_FILE);
    Ok(FileSessionStore::open(path).await?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_when_fields_missing() {
        let settings: CliSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CliSettings::default());

        let settings: CliSettings =
            serde_json::from_str(r#"{ "serverUrl": "https://shop.example.com" }"#).unwrap();
        assert_eq!(
            settings.server_url.as_deref(),
            Some("https://shop.example.com")
        );
    }
}
