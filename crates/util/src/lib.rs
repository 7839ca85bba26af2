//! Support code shared by the UI kit binaries: startup configuration,
//! persisted preferences, path handling and number formatting.

pub mod config;
pub mod number_format;
pub mod path_processing;
pub mod preferences;

pub use config::{AppConfig, ConfigError, LOG_PATH_ENV, PUBLISHABLE_KEY_ENV, PublishableKey, log_file_path, normalize_path};
pub use number_format::{format_inr, format_percent_change, group_indian};
pub use path_processing::expand_tilde;
pub use preferences::{PREFERENCES_PATH_ENV, PreferencesError, PreferencesPayload, UserPreferences};
