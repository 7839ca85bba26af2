use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of the signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserIdentity {
    /// "First Last", falling back to the email when both names are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_string() }
    }

    /// Initials used for the avatar button.
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.email.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
        } else {
            initials
        }
    }
}

/// An active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user: UserIdentity,
    /// How the session was established ("password", "oauth_google", ...)
    pub method: String,
    pub created_at: DateTime<Utc>,
}

/// Which form started an authentication call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthFlow {
    SignIn,
    SignUp,
}

impl AuthFlow {
    /// Static message shown when the call fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::SignIn => "Invalid email or password",
            Self::SignUp => "Sign up failed. Please try again.",
        }
    }

    /// Static message shown when an OAuth attempt fails.
    pub fn oauth_failure_message(self) -> &'static str {
        match self {
            Self::SignIn => "OAuth sign in failed",
            Self::SignUp => "OAuth sign up failed",
        }
    }
}

/// Supported third-party sign-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OAuthStrategy {
    Google,
    GitHub,
}

impl OAuthStrategy {
    /// Strategy identifier in the provider's vocabulary.
    pub fn strategy_id(self) -> &'static str {
        match self {
            Self::Google => "oauth_google",
            Self::GitHub => "oauth_github",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
        }
    }
}

impl fmt::Display for OAuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy_id())
    }
}

/// Fields collected by the sign-up form.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SignUpDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignUpDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpDetails")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of an authentication call, already reduced to what the UI shows.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Succeeded { flow: AuthFlow, session: Session },
    Failed { flow: AuthFlow, message: String },
}

impl AuthOutcome {
    pub fn flow(&self) -> AuthFlow {
        match self {
            Self::Succeeded { flow, .. } | Self::Failed { flow, .. } => *flow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str, email: &str) -> UserIdentity {
        UserIdentity {
            id: "user_1".into(),
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
        }
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(user("John", "Doe", "john@example.com").display_name(), "John Doe");
        assert_eq!(user("", " ", "john@example.com").display_name(), "john@example.com");
    }

    #[test]
    fn initials_use_names_then_email() {
        assert_eq!(user("john", "doe", "x@example.com").initials(), "JD");
        assert_eq!(user("", "", "zed@example.com").initials(), "Z");
    }

    #[test]
    fn sign_up_details_debug_hides_password() {
        let details = SignUpDetails {
            password: "hunter2".into(),
            ..Default::default()
        };
        let rendered = format!("{details:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn failure_messages_match_flow() {
        assert_eq!(AuthFlow::SignIn.failure_message(), "Invalid email or password");
        assert_eq!(AuthFlow::SignUp.failure_message(), "Sign up failed. Please try again.");
        assert_eq!(AuthFlow::SignUp.oauth_failure_message(), "OAuth sign up failed");
    }
}
