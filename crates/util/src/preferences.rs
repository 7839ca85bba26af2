//! User preference persistence for the UI kit shells.
//!
//! A tiny JSON-backed store that records the user's theme choice. The file is
//! written to the standard configuration directory
//! (`~/.config/uikit/preferences.json` on most platforms). Reads and writes
//! go through an internal `Mutex`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use uikit_types::ThemeMode;

use crate::expand_tilde;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "UIKIT_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPayload {
    /// Theme selected with the toggle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Create a store at the default location, honoring `UIKIT_PREFERENCES_PATH`.
    pub fn new() -> Result<Self, PreferencesError> {
        Self::at(default_preferences_path())
    }

    /// Create a store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file. Empty for ephemeral stores.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the saved theme, if any.
    pub fn theme(&self) -> Option<ThemeMode> {
        self.lock().theme
    }

    /// Persist a new theme choice.
    pub fn set_theme(&self, theme: ThemeMode) -> Result<(), PreferencesError> {
        let mut payload = self.lock();
        payload.theme = Some(theme);
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    // The payload is plain data, so a poisoned lock still holds a usable value.
    fn lock(&self) -> MutexGuard<'_, PreferencesPayload> {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("uikit")
        .join(PREFERENCES_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let prefs = UserPreferences::at(dir.path().join("prefs.json")).expect("store");
        assert_eq!(prefs.theme(), None);
    }

    #[test]
    fn theme_round_trips_through_disk() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("prefs.json");
        let prefs = UserPreferences::at(&path).expect("store");
        prefs.set_theme(ThemeMode::Light).expect("save");

        let raw = fs::read_to_string(&path).expect("read");
        assert!(raw.contains("\"light\""));

        let reopened = UserPreferences::at(&path).expect("reopen");
        assert_eq!(reopened.theme(), Some(ThemeMode::Light));
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").expect("write");
        let prefs = UserPreferences::at(&path).expect("store");
        assert_eq!(prefs.theme(), None);
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let prefs = UserPreferences::ephemeral();
        prefs.set_theme(ThemeMode::Dark).expect("set");
        assert_eq!(prefs.theme(), Some(ThemeMode::Dark));
        assert_eq!(prefs.path(), Path::new(""));
    }

    #[test]
    fn env_override_selects_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("override.json");
        let path_str = path.to_string_lossy().to_string();
        temp_env::with_var(PREFERENCES_PATH_ENV, Some(path_str.as_str()), || {
            let prefs = UserPreferences::new().expect("store");
            assert_eq!(prefs.path(), path.as_path());
        });
    }
}
