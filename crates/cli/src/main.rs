use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uikit_identity::LocalIdentityProvider;
use uikit_tui::Shell;
use uikit_types::ThemeMode;
use uikit_util::{AppConfig, PUBLISHABLE_KEY_ENV, UserPreferences, log_file_path};

/// Terminal demos for the UI kit.
#[derive(Debug, Parser)]
#[command(name = "uikit", version, about)]
struct Cli {
    /// Identity provider publishable key (pk_test_... or pk_live_...)
    #[arg(long, global = true, env = PUBLISHABLE_KEY_ENV)]
    publishable_key: Option<String>,

    /// Theme for this session; overrides the saved preference
    #[arg(long, global = true)]
    theme: Option<ThemeMode>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Routed dashboard with sign-in, gallery and command palette (default)
    Dashboard {
        /// Route to open first
        #[arg(long, default_value = "/")]
        path: String,

        /// Start with the demo account already signed in
        #[arg(long)]
        signed_in: bool,
    },
    /// Collapsible navigation rail
    Sidebar,
}

impl Cli {
    fn shell(&self) -> Shell {
        match self.command {
            Some(Command::Sidebar) => Shell::Sidebar,
            Some(Command::Dashboard { .. }) | None => Shell::Dashboard,
        }
    }

    fn initial_path(&self) -> Option<&str> {
        match &self.command {
            Some(Command::Dashboard { path, .. }) => Some(path.as_str()),
            _ => None,
        }
    }

    fn signed_in(&self) -> bool {
        matches!(self.command, Some(Command::Dashboard { signed_in: true, .. }))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // Validate before the terminal is touched so errors print normally.
    let config = AppConfig::new(cli.publishable_key.as_deref(), cli.initial_path(), cli.theme)?;
    init_tracing()?;

    let preferences = match UserPreferences::new() {
        Ok(preferences) => preferences,
        Err(error) => {
            warn!(%error, "preferences unavailable; using an in-memory store");
            UserPreferences::ephemeral()
        }
    };
    let mut identity = LocalIdentityProvider::new(config.publishable_key.as_str());
    if cli.signed_in() {
        identity = identity.signed_in();
    }

    let shell = cli.shell();
    info!(?shell, "launching");
    uikit_tui::run(shell, config, Arc::new(identity), Arc::new(preferences)).await
}

/// Sends tracing output to the log file; the terminal belongs to the UI.
fn init_tracing() -> Result<()> {
    let path = log_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        temp_env::with_var_unset(PUBLISHABLE_KEY_ENV, || Cli::try_parse_from(args).expect("parse"))
    }

    #[test]
    fn defaults_to_dashboard_shell() {
        let cli = parse(&["uikit", "--publishable-key", "pk_test_abc"]);
        assert_eq!(cli.shell(), Shell::Dashboard);
        assert_eq!(cli.initial_path(), None);
        assert!(!cli.signed_in());
    }

    #[test]
    fn dashboard_subcommand_takes_path_and_theme() {
        let cli = parse(&["uikit", "dashboard", "--path", "/dashboard/components", "--theme", "light", "--signed-in"]);
        assert_eq!(cli.initial_path(), Some("/dashboard/components"));
        assert_eq!(cli.theme, Some(ThemeMode::Light));
        assert!(cli.signed_in());
    }

    #[test]
    fn sidebar_subcommand_selects_rail() {
        let cli = parse(&["uikit", "sidebar"]);
        assert_eq!(cli.shell(), Shell::Sidebar);
    }

    #[test]
    fn publishable_key_falls_back_to_environment() {
        let cli = temp_env::with_var(PUBLISHABLE_KEY_ENV, Some("pk_live_xyz"), || {
            Cli::try_parse_from(["uikit", "sidebar"]).expect("parse")
        });
        assert_eq!(cli.publishable_key.as_deref(), Some("pk_live_xyz"));
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let cli = parse(&["uikit"]);
        let error = AppConfig::new(cli.publishable_key.as_deref(), None, None).expect_err("missing key");
        assert!(error.to_string().starts_with("Missing publishable key"));
    }

    #[test]
    fn unknown_theme_is_rejected_by_the_parser() {
        let result = temp_env::with_var_unset(PUBLISHABLE_KEY_ENV, || Cli::try_parse_from(["uikit", "--theme", "sepia"]));
        assert!(result.is_err());
    }
}
