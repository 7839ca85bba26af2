//! Shared types for the UI kit workspace.
//!
//! Everything that crosses a crate boundary lives here: navigation and
//! command entries, routes, identity/session values, the `Msg`/`Effect`
//! vocabulary used by the TUI runtime, and the small variant enums consumed
//! by the presentational widgets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod identity;
mod navigation;
mod widgets;

pub use identity::{AuthFlow, AuthOutcome, OAuthStrategy, Session, SignUpDetails, UserIdentity};
pub use navigation::{CommandEntry, NavigationItem};
pub use widgets::{AlertKind, BadgeVariant, ButtonVariant, TooltipPosition};

/// Process-wide appearance flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme mode '{0}' (expected 'dark' or 'light')")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

/// Top-level views reachable through the router.
///
/// `Dashboard`, `Components`, `Profile` and `Portfolio` sit behind the
/// authentication guard and render inside the dashboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Landing,
    SignIn,
    SignUp,
    Dashboard,
    Components,
    Profile,
    Portfolio,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Landing,
        Route::SignIn,
        Route::SignUp,
        Route::Dashboard,
        Route::Components,
        Route::Profile,
        Route::Portfolio,
    ];

    /// Canonical path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::SignIn => "/sign-in",
            Self::SignUp => "/sign-up",
            Self::Dashboard => "/dashboard",
            Self::Components => "/dashboard/components",
            Self::Profile => "/dashboard/profile",
            Self::Portfolio => "/dashboard/about",
        }
    }

    /// Matches a path against the static route table.
    ///
    /// Trailing slashes are ignored. Returns `None` for paths that the table
    /// does not declare; callers treat that as the catch-all redirect to `/`.
    pub fn match_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 { trimmed.trim_end_matches('/') } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Whether the route requires an active session.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard | Self::Components | Self::Profile | Self::Portfolio)
    }
}

/// Messages delivered to the application and its components.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Periodic UI tick (timers, animations)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Flip the application theme
    ToggleTheme,
    /// Collapse or expand the sidebar rail
    SidebarToggled,
    /// A sidebar entry was clicked
    SidebarItemSelected(String),
    /// The palette chord fired
    CommandPaletteToggled,
    /// Initial session lookup finished
    SessionLoaded(Option<Session>),
    /// A sign-in, sign-up or OAuth call returned
    AuthCompleted(AuthOutcome),
    /// The identity provider ended the session
    SignedOut,
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Navigate to a path through the router
    Navigate(String),
    /// Ask the identity provider for the current session
    LoadSession,
    /// Password sign-in
    SignIn { email: String, password: String },
    /// Account creation
    SignUp(SignUpDetails),
    /// Third-party sign-in or sign-up
    OAuth { flow: AuthFlow, strategy: OAuthStrategy },
    /// End the current session
    SignOut,
    /// Save the theme preference
    PersistTheme(ThemeMode),
    /// Feed a message back into the update loop
    SendMsg(Msg),
}

/// Result of running an [`Effect`], delivered back to the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecOutcome {
    /// Message to route through the update loop
    Message(Msg),
    /// Nothing to show; the text is written to the log
    Log(String),
}
