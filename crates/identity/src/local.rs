use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uikit_types::{OAuthStrategy, Session, SignUpDetails, UserIdentity};

use crate::{IdentityError, IdentityProvider};

/// Minimum accepted password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Simulated round-trip applied to every call so loading states are visible.
const DEFAULT_LATENCY: Duration = Duration::from_millis(350);

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

#[derive(Debug, Clone)]
struct Account {
    user: UserIdentity,
    /// `None` for accounts created through a third party; those never accept
    /// a password sign-in.
    password: Option<String>,
}

#[derive(Debug, Default)]
struct LocalState {
    /// Accounts keyed by lowercase email.
    accounts: IndexMap<String, Account>,
    session: Option<Session>,
    next_id: u64,
}

impl LocalState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}_{:04}", self.next_id)
    }

    fn start_session(&mut self, user: UserIdentity, method: &str) -> Session {
        let session = Session {
            id: self.next_id("sess"),
            user,
            method: method.to_string(),
            created_at: Utc::now(),
        };
        self.session = Some(session.clone());
        session
    }

    fn insert_account(&mut self, first_name: &str, last_name: &str, email: &str, password: Option<&str>) -> UserIdentity {
        let user = UserIdentity {
            id: self.next_id("user"),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        };
        self.accounts.insert(
            email.to_ascii_lowercase(),
            Account {
                user: user.clone(),
                password: password.map(str::to_string),
            },
        );
        user
    }
}

/// In-memory identity provider.
///
/// Seeded with `john@example.com` / `password123`. Accounts created through
/// [`IdentityProvider::sign_up`] last until the process exits.
#[derive(Debug)]
pub struct LocalIdentityProvider {
    latency: Duration,
    oauth_enabled: bool,
    state: Mutex<LocalState>,
}

impl LocalIdentityProvider {
    pub fn new(publishable_key: impl Into<String>) -> Self {
        let publishable_key = publishable_key.into();
        let mode = if publishable_key.starts_with("pk_live_") { "live" } else { "test" };
        debug!(mode, "local identity provider ready");
        let mut state = LocalState::default();
        state.insert_account("John", "Doe", "john@example.com", Some("password123"));
        Self {
            latency: DEFAULT_LATENCY,
            oauth_enabled: true,
            state: Mutex::new(state),
        }
    }

    /// Overrides the simulated round-trip.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Rejects every OAuth attempt.
    pub fn without_oauth(mut self) -> Self {
        self.oauth_enabled = false;
        self
    }

    /// Starts with an active session for the seeded account.
    pub fn signed_in(mut self) -> Self {
        let state = self.state.get_mut();
        if let Some(account) = state.accounts.get("john@example.com").cloned() {
            state.start_session(account.user, "password");
        }
        self
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn validate_sign_up(details: &SignUpDetails) -> Result<(), IdentityError> {
    if details.first_name.trim().is_empty() {
        return Err(IdentityError::MissingField("first name"));
    }
    if details.last_name.trim().is_empty() {
        return Err(IdentityError::MissingField("last name"));
    }
    let email = details.email.trim();
    if email.is_empty() {
        return Err(IdentityError::MissingField("email"));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(IdentityError::InvalidEmail(email.to_string()));
    }
    if details.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(IdentityError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    Ok(())
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn current_session(&self) -> Result<Option<Session>, IdentityError> {
        self.round_trip().await;
        Ok(self.state.lock().await.session.clone())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        self.round_trip().await;
        let mut state = self.state.lock().await;
        let account = state
            .accounts
            .get(&email.trim().to_ascii_lowercase())
            .filter(|account| account.password.as_deref() == Some(password))
            .cloned()
            .ok_or(IdentityError::InvalidCredentials)?;
        info!(user = %account.user.id, "password sign-in");
        Ok(state.start_session(account.user, "password"))
    }

    async fn sign_up(&self, details: &SignUpDetails) -> Result<Session, IdentityError> {
        self.round_trip().await;
        validate_sign_up(details)?;
        let email = details.email.trim();
        let mut state = self.state.lock().await;
        if state.accounts.contains_key(&email.to_ascii_lowercase()) {
            return Err(IdentityError::AccountExists(email.to_string()));
        }
        let user = state.insert_account(details.first_name.trim(), details.last_name.trim(), email, Some(&details.password));
        info!(user = %user.id, "account created");
        Ok(state.start_session(user, "password"))
    }

    async fn authenticate_with_oauth(&self, strategy: OAuthStrategy) -> Result<Session, IdentityError> {
        self.round_trip().await;
        if !self.oauth_enabled {
            return Err(IdentityError::OAuthUnavailable(strategy));
        }
        let email = format!("{}@oauth.example.com", strategy.strategy_id());
        let mut state = self.state.lock().await;
        let existing = state.accounts.get(&email).map(|account| account.user.clone());
        let user = match existing {
            Some(user) => user,
            None => state.insert_account(strategy.label(), "User", &email, None),
        };
        debug!(%strategy, user = %user.id, "oauth sign-in");
        Ok(state.start_session(user, strategy.strategy_id()))
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.round_trip().await;
        let mut state = self.state.lock().await;
        match state.session.take() {
            Some(session) => {
                info!(session = %session.id, "signed out");
                Ok(())
            }
            None => Err(IdentityError::NoSession),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> LocalIdentityProvider {
        LocalIdentityProvider::new("pk_test_local").with_latency(Duration::ZERO)
    }

    fn details(email: &str, password: &str) -> SignUpDetails {
        SignUpDetails {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn starts_without_a_session() {
        assert_eq!(provider().current_session().await, Ok(None));
    }

    #[tokio::test]
    async fn signed_in_builder_activates_seed_account() {
        let provider = provider().signed_in();
        let session = provider.current_session().await.expect("lookup").expect("session");
        assert_eq!(session.user.email, "john@example.com");
    }

    #[tokio::test]
    async fn sign_in_accepts_seed_account_case_insensitively() {
        let provider = provider();
        let session = provider.sign_in(" John@Example.com ", "password123").await.expect("sign in");
        assert_eq!(session.user.display_name(), "John Doe");
        assert_eq!(session.method, "password");
        assert_eq!(provider.current_session().await, Ok(Some(session)));
    }

    #[tokio::test]
    async fn sign_in_rejects_wrong_password_and_unknown_email() {
        let provider = provider();
        assert_eq!(
            provider.sign_in("john@example.com", "nope").await,
            Err(IdentityError::InvalidCredentials)
        );
        assert_eq!(
            provider.sign_in("ghost@example.com", "password123").await,
            Err(IdentityError::InvalidCredentials)
        );
        assert_eq!(provider.current_session().await, Ok(None));
    }

    #[tokio::test]
    async fn sign_up_creates_account_and_session() {
        let provider = provider();
        let session = provider.sign_up(&details("ada@example.com", "analytical")).await.expect("sign up");
        assert_eq!(session.user.first_name, "Ada");
        provider.sign_out().await.expect("sign out");
        let again = provider.sign_in("ada@example.com", "analytical").await.expect("sign in");
        assert_eq!(again.user.id, session.user.id);
        assert_ne!(again.id, session.id);
    }

    #[tokio::test]
    async fn sign_up_validates_input() {
        let provider = provider();
        assert_eq!(
            provider.sign_up(&details("not-an-email", "analytical")).await,
            Err(IdentityError::InvalidEmail("not-an-email".into()))
        );
        assert_eq!(
            provider.sign_up(&details("ada@example.com", "short")).await,
            Err(IdentityError::PasswordTooShort(MIN_PASSWORD_LEN))
        );
        let mut missing = details("ada@example.com", "analytical");
        missing.first_name.clear();
        assert_eq!(provider.sign_up(&missing).await, Err(IdentityError::MissingField("first name")));
        assert_eq!(
            provider.sign_up(&details("JOHN@example.com", "analytical")).await,
            Err(IdentityError::AccountExists("JOHN@example.com".into()))
        );
    }

    #[tokio::test]
    async fn oauth_reuses_account_per_strategy() {
        let provider = provider();
        let first = provider.authenticate_with_oauth(OAuthStrategy::GitHub).await.expect("oauth");
        let second = provider.authenticate_with_oauth(OAuthStrategy::GitHub).await.expect("oauth");
        assert_eq!(first.user.id, second.user.id);
        assert_eq!(first.method, "oauth_github");
    }

    #[tokio::test]
    async fn oauth_accounts_reject_password_sign_in() {
        let provider = provider();
        let session = provider.authenticate_with_oauth(OAuthStrategy::GitHub).await.expect("oauth");
        provider.sign_out().await.expect("sign out");
        assert_eq!(
            provider.sign_in(&session.user.email, "").await,
            Err(IdentityError::InvalidCredentials)
        );
        assert_eq!(
            provider.sign_in(&session.user.email, "anything").await,
            Err(IdentityError::InvalidCredentials)
        );
        assert_eq!(provider.current_session().await, Ok(None));
    }

    #[tokio::test]
    async fn oauth_can_be_disabled() {
        let provider = provider().without_oauth();
        assert_eq!(
            provider.authenticate_with_oauth(OAuthStrategy::Google).await,
            Err(IdentityError::OAuthUnavailable(OAuthStrategy::Google))
        );
    }

    #[tokio::test]
    async fn sign_out_without_session_is_an_error() {
        assert_eq!(provider().sign_out().await, Err(IdentityError::NoSession));
    }
}
