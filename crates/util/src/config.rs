//! Startup configuration.
//!
//! The only required value is the identity provider's publishable key; the
//! application refuses to start without it. Everything else has a default.

use std::env;
use std::fmt;
use std::path::PathBuf;

use dirs_next::data_local_dir;
use thiserror::Error;
use uikit_types::ThemeMode;

use crate::expand_tilde;

/// Environment variable holding the publishable key.
pub const PUBLISHABLE_KEY_ENV: &str = "UIKIT_PUBLISHABLE_KEY";

/// Environment variable allowing callers to override the log file path.
pub const LOG_PATH_ENV: &str = "UIKIT_LOG_PATH";

const KEY_PREFIXES: [&str; 2] = ["pk_test_", "pk_live_"];

/// Error surfaced when the startup configuration is incomplete.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing publishable key (pass --publishable-key or set {PUBLISHABLE_KEY_ENV})")]
    MissingPublishableKey,
    #[error("publishable key must start with 'pk_test_' or 'pk_live_'")]
    InvalidPublishableKey,
}

/// Identity provider publishable key. Debug output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct PublishableKey(String);

impl PublishableKey {
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw.map(str::trim).filter(|value| !value.is_empty());
        let Some(value) = value else {
            return Err(ConfigError::MissingPublishableKey);
        };
        let has_prefix = KEY_PREFIXES
            .iter()
            .any(|prefix| value.strip_prefix(prefix).is_some_and(|rest| !rest.is_empty()));
        if !has_prefix {
            return Err(ConfigError::InvalidPublishableKey);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Development keys start with `pk_test_`.
    pub fn is_test(&self) -> bool {
        self.0.starts_with("pk_test_")
    }
}

impl fmt::Debug for PublishableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_test() { "pk_test_" } else { "pk_live_" };
        write!(f, "PublishableKey({prefix}<redacted>)")
    }
}

/// Resolved configuration for a TUI session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub publishable_key: PublishableKey,
    /// Path the dashboard shell opens on.
    pub initial_path: String,
    /// Theme for this session only; the persisted preference is used when `None`.
    pub theme_override: Option<ThemeMode>,
}

impl AppConfig {
    pub fn new(publishable_key: Option<&str>, initial_path: Option<&str>, theme_override: Option<ThemeMode>) -> Result<Self, ConfigError> {
        Ok(Self {
            publishable_key: PublishableKey::parse(publishable_key)?,
            initial_path: normalize_path(initial_path.unwrap_or("/")),
            theme_override,
        })
    }
}

/// Ensures a router path is absolute and non-empty.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Location of the log file: `UIKIT_LOG_PATH` or `<data_local_dir>/uikit/uikit.log`.
pub fn log_file_path() -> PathBuf {
    if let Ok(path) = env::var(LOG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("uikit")
        .join("uikit.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_key_is_rejected() {
        assert_eq!(PublishableKey::parse(None), Err(ConfigError::MissingPublishableKey));
        assert_eq!(PublishableKey::parse(Some("   ")), Err(ConfigError::MissingPublishableKey));
    }

    #[test]
    fn key_requires_known_prefix_and_body() {
        assert_eq!(PublishableKey::parse(Some("sk_test_abc")), Err(ConfigError::InvalidPublishableKey));
        assert_eq!(PublishableKey::parse(Some("pk_test_")), Err(ConfigError::InvalidPublishableKey));
        let key = PublishableKey::parse(Some(" pk_live_abc ")).expect("valid key");
        assert_eq!(key.as_str(), "pk_live_abc");
        assert!(!key.is_test());
    }

    #[test]
    fn debug_output_redacts_key() {
        let key = PublishableKey::parse(Some("pk_test_secretvalue")).expect("valid key");
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("secretvalue"));
        assert!(rendered.contains("pk_test_"));
    }

    #[test]
    fn config_defaults_to_root_path() {
        let config = AppConfig::new(Some("pk_test_abc"), None, None).expect("config");
        assert_eq!(config.initial_path, "/");
        let config = AppConfig::new(Some("pk_test_abc"), Some("dashboard/about"), Some(ThemeMode::Light)).expect("config");
        assert_eq!(config.initial_path, "/dashboard/about");
        assert_eq!(config.theme_override, Some(ThemeMode::Light));
    }

    #[test]
    fn config_fails_without_key() {
        let error = AppConfig::new(None, Some("/"), None).expect_err("missing key");
        assert_eq!(error, ConfigError::MissingPublishableKey);
        assert!(error.to_string().starts_with("Missing publishable key"));
    }

    #[test]
    fn log_path_honors_env_override() {
        temp_env::with_var(LOG_PATH_ENV, Some("/tmp/uikit-test/app.log"), || {
            assert_eq!(log_file_path(), PathBuf::from("/tmp/uikit-test/app.log"));
        });
        temp_env::with_var(LOG_PATH_ENV, Some("  "), || {
            assert!(log_file_path().ends_with("uikit/uikit.log"));
        });
    }
}
