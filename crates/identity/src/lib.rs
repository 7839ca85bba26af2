//! Identity provider boundary.
//!
//! The UI consumes authentication as a handful of opaque calls: look up the
//! current session, sign in, sign up, sign in through a third party, and sign
//! out. [`IdentityProvider`] is that boundary. Credential storage, token
//! refresh and session validation belong to the provider, never to the UI.
//!
//! [`LocalIdentityProvider`] is an in-memory provider used by the demo shells
//! and the tests. It is seeded with one account and accepts new sign-ups for
//! the lifetime of the process.
//!
//! # Example
//!
//! ```ignore
//! use uikit_identity::{IdentityProvider, LocalIdentityProvider};
//!
//! # async fn demo() -> Result<(), uikit_identity::IdentityError> {
//! let provider = LocalIdentityProvider::new("pk_test_example");
//! let session = provider.sign_in("john@example.com", "password123").await?;
//! assert_eq!(session.user.first_name, "John");
//! # Ok(())
//! # }
//! ```

mod local;

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;
use uikit_types::{OAuthStrategy, Session, SignUpDetails};

pub use local::LocalIdentityProvider;

/// Failures reported by an identity provider.
///
/// The UI never shows these directly; it maps every failure of a flow to one
/// static message and logs the detail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("an account already exists for {0}")]
    AccountExists(String),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("{0} sign-in is not available")]
    OAuthUnavailable(OAuthStrategy),
    #[error("no active session")]
    NoSession,
}

/// Operations the UI consumes from an identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync + Debug {
    /// Resolves the provider's current session. Completing this call is what
    /// flips the UI from "loading" to "loaded".
    async fn current_session(&self) -> Result<Option<Session>, IdentityError>;

    /// Password sign-in. A successful call makes the returned session active.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    /// Creates an account and makes its session active.
    async fn sign_up(&self, details: &SignUpDetails) -> Result<Session, IdentityError>;

    /// Third-party sign-in; creates the account on first use.
    async fn authenticate_with_oauth(&self, strategy: OAuthStrategy) -> Result<Session, IdentityError>;

    /// Ends the active session.
    async fn sign_out(&self) -> Result<(), IdentityError>;
}
