//! # Effect Execution Layer
//!
//! This module is the boundary where the pure state updates of the app meet
//! side effects:
//! - Calls to the identity provider (session lookup, sign-in, sign-up,
//!   OAuth, sign-out)
//! - Writing the theme preference to disk
//!
//! ## Design
//! - [`Cmd`] is the effectful command type.
//! - [`from_effects`] translates state-driven [`Effect`]s into [`Cmd`]s.
//!   Navigation is not a command; the runtime applies it before this layer.
//! - [`run_from_effects`] executes commands. Quick ones finish inline and land
//!   in [`CommandBatch::immediate`]; identity calls are spawned and land in
//!   [`CommandBatch::pending`].
//!
//! Provider failures are logged with their detail and reach the UI only as
//! the flow's static failure message.

use std::sync::Arc;

use tokio::task::{JoinHandle, spawn};
use tracing::{debug, warn};
use uikit_identity::IdentityProvider;
use uikit_types::{AuthFlow, AuthOutcome, Effect, ExecOutcome, Msg, OAuthStrategy, SignUpDetails, ThemeMode};

use crate::app::App;

/// Side-effectful commands executed outside of pure state updates.
#[derive(Debug)]
pub enum Cmd {
    LoadSession,
    SignIn { email: String, password: String },
    SignUp(SignUpDetails),
    OAuth { flow: AuthFlow, strategy: OAuthStrategy },
    SignOut,
    PersistTheme(ThemeMode),
    /// Route a message back through the update loop.
    Dispatch(Msg),
}

/// Results of one pass over a list of effects.
#[derive(Debug, Default)]
pub struct CommandBatch {
    pub immediate: Vec<ExecOutcome>,
    pub pending: Vec<JoinHandle<ExecOutcome>>,
}

/// Convert application [`Effect`]s into [`Cmd`]s.
pub fn from_effects(effects: Vec<Effect>) -> Vec<Cmd> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::LoadSession => Some(Cmd::LoadSession),
            Effect::SignIn { email, password } => Some(Cmd::SignIn { email, password }),
            Effect::SignUp(details) => Some(Cmd::SignUp(details)),
            Effect::OAuth { flow, strategy } => Some(Cmd::OAuth { flow, strategy }),
            Effect::SignOut => Some(Cmd::SignOut),
            Effect::PersistTheme(mode) => Some(Cmd::PersistTheme(mode)),
            Effect::SendMsg(msg) => Some(Cmd::Dispatch(msg)),
            Effect::Navigate(path) => {
                debug!(path = %path, "navigation reached the command layer; ignoring");
                None
            }
        })
        .collect()
}

/// Translate effects into commands and execute them.
pub fn run_from_effects(app: &mut App, effects: Vec<Effect>) -> CommandBatch {
    run_cmds(app, from_effects(effects))
}

/// Execute commands, spawning identity calls onto the Tokio runtime.
pub fn run_cmds(app: &mut App, commands: Vec<Cmd>) -> CommandBatch {
    let mut batch = CommandBatch::default();
    for command in commands {
        let identity = Arc::clone(&app.ctx.identity);
        match command {
            Cmd::LoadSession => batch.pending.push(spawn(load_session(identity))),
            Cmd::SignIn { email, password } => batch.pending.push(spawn(async move {
                let result = identity.sign_in(&email, &password).await;
                auth_outcome(AuthFlow::SignIn, result.map_err(|error| (error, AuthFlow::SignIn.failure_message())))
            })),
            Cmd::SignUp(details) => batch.pending.push(spawn(async move {
                let result = identity.sign_up(&details).await;
                auth_outcome(AuthFlow::SignUp, result.map_err(|error| (error, AuthFlow::SignUp.failure_message())))
            })),
            Cmd::OAuth { flow, strategy } => batch.pending.push(spawn(async move {
                let result = identity.authenticate_with_oauth(strategy).await;
                auth_outcome(flow, result.map_err(|error| (error, flow.oauth_failure_message())))
            })),
            Cmd::SignOut => batch.pending.push(spawn(sign_out(identity))),
            Cmd::PersistTheme(mode) => batch.immediate.push(persist_theme(app, mode)),
            Cmd::Dispatch(msg) => batch.immediate.push(ExecOutcome::Message(msg)),
        }
    }
    batch
}

async fn load_session(identity: Arc<dyn IdentityProvider>) -> ExecOutcome {
    match identity.current_session().await {
        Ok(session) => ExecOutcome::Message(Msg::SessionLoaded(session)),
        Err(error) => {
            warn!(%error, "session lookup failed; continuing signed out");
            ExecOutcome::Message(Msg::SessionLoaded(None))
        }
    }
}

async fn sign_out(identity: Arc<dyn IdentityProvider>) -> ExecOutcome {
    match identity.sign_out().await {
        Ok(()) => ExecOutcome::Message(Msg::SignedOut),
        Err(error) => {
            warn!(%error, "sign out failed");
            ExecOutcome::Log(format!("Sign out failed: {error}"))
        }
    }
}

fn auth_outcome(
    flow: AuthFlow,
    result: Result<uikit_types::Session, (uikit_identity::IdentityError, &'static str)>,
) -> ExecOutcome {
    let outcome = match result {
        Ok(session) => AuthOutcome::Succeeded { flow, session },
        Err((error, message)) => {
            warn!(?flow, %error, "authentication failed");
            AuthOutcome::Failed {
                flow,
                message: message.to_string(),
            }
        }
    };
    ExecOutcome::Message(Msg::AuthCompleted(outcome))
}

fn persist_theme(app: &App, mode: ThemeMode) -> ExecOutcome {
    match app.ctx.preferences.set_theme(mode) {
        Ok(()) => ExecOutcome::Log(format!("Theme set to {mode:?}")),
        Err(error) => {
            warn!(%error, "failed to persist theme preference");
            ExecOutcome::Log(format!("Failed to save theme: {error}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use uikit_identity::LocalIdentityProvider;
    use uikit_util::{AppConfig, UserPreferences};

    use super::*;
    use crate::app::Shell;

    fn app_with(provider: LocalIdentityProvider) -> App {
        App::new(
            Shell::Dashboard,
            &AppConfig::new(Some("pk_test_demo"), None, None).expect("config"),
            Arc::new(provider.with_latency(Duration::ZERO)),
            Arc::new(UserPreferences::ephemeral()),
        )
    }

    async fn single_pending(batch: CommandBatch) -> ExecOutcome {
        assert!(batch.immediate.is_empty());
        let mut pending = batch.pending;
        assert_eq!(pending.len(), 1);
        pending.remove(0).await.expect("join")
    }

    #[tokio::test]
    async fn load_session_reports_provider_session() {
        let mut app = app_with(LocalIdentityProvider::new("pk_test_demo").signed_in());
        let outcome = single_pending(run_from_effects(&mut app, vec![Effect::LoadSession])).await;
        let ExecOutcome::Message(Msg::SessionLoaded(Some(session))) = outcome else {
            panic!("unexpected outcome: {outcome:?}");
        };
        assert_eq!(session.user.email, "john@example.com");
    }

    #[tokio::test]
    async fn failed_sign_in_maps_to_static_message() {
        let mut app = app_with(LocalIdentityProvider::new("pk_test_demo"));
        let effect = Effect::SignIn {
            email: "john@example.com".into(),
            password: "wrong".into(),
        };
        let outcome = single_pending(run_from_effects(&mut app, vec![effect])).await;
        assert_eq!(
            outcome,
            ExecOutcome::Message(Msg::AuthCompleted(AuthOutcome::Failed {
                flow: AuthFlow::SignIn,
                message: "Invalid email or password".into(),
            }))
        );
    }

    #[tokio::test]
    async fn oauth_failure_uses_flow_specific_message() {
        let mut app = app_with(LocalIdentityProvider::new("pk_test_demo").without_oauth());
        let effect = Effect::OAuth {
            flow: AuthFlow::SignUp,
            strategy: OAuthStrategy::GitHub,
        };
        let outcome = single_pending(run_from_effects(&mut app, vec![effect])).await;
        assert_eq!(
            outcome,
            ExecOutcome::Message(Msg::AuthCompleted(AuthOutcome::Failed {
                flow: AuthFlow::SignUp,
                message: "OAuth sign up failed".into(),
            }))
        );
    }

    #[tokio::test]
    async fn sign_out_emits_signed_out() {
        let mut app = app_with(LocalIdentityProvider::new("pk_test_demo").signed_in());
        let outcome = single_pending(run_from_effects(&mut app, vec![Effect::SignOut])).await;
        assert_eq!(outcome, ExecOutcome::Message(Msg::SignedOut));
    }

    #[tokio::test]
    async fn quick_commands_complete_inline() {
        let mut app = app_with(LocalIdentityProvider::new("pk_test_demo"));
        let batch = run_from_effects(
            &mut app,
            vec![
                Effect::PersistTheme(ThemeMode::Light),
                Effect::SendMsg(Msg::ToggleTheme),
                Effect::Navigate("/".into()),
            ],
        );
        assert!(batch.pending.is_empty());
        assert_eq!(batch.immediate.len(), 2);
        assert_eq!(batch.immediate[1], ExecOutcome::Message(Msg::ToggleTheme));
        assert_eq!(app.ctx.preferences.theme(), Some(ThemeMode::Light));
    }
}
