//! # UI Kit TUI Library
//!
//! Terminal rendition of a small UI kit built on Ratatui. Two shells share
//! one theme, one widget set and one runtime:
//!
//! - **Sidebar shell**: a collapsible navigation rail whose items share a
//!   single active selection.
//! - **Dashboard shell**: a routed application with an identity guard,
//!   landing and auth pages, a dashboard layout, a component gallery, a
//!   portfolio view and a command palette on Ctrl/Super+K.
//!
//! ## Architecture
//!
//! Components keep local view state and report shared changes as `Effect`s.
//! `App::update` is the only writer of shared state (theme, session, route,
//! sidebar selection). The runtime executes effects, awaits identity calls
//! and feeds their results back as messages.

mod app;
mod cmd;
mod loading;
mod router;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use uikit_identity::IdentityProvider;
use uikit_util::{AppConfig, UserPreferences};

pub use app::Shell;

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be put into raw mode or the
/// alternate screen, or when drawing fails.
pub async fn run(
    shell: Shell,
    config: AppConfig,
    identity: Arc<dyn IdentityProvider>,
    preferences: Arc<UserPreferences>,
) -> Result<()> {
    ui::runtime::run_app(shell, config, identity, preferences).await
}
