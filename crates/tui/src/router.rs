//! Client-side router for the dashboard shell.
//!
//! A static route table ([`Route::match_path`]) plus one guard: protected
//! routes need a loaded, signed-in session. Resolution is a pure function of
//! the path and the auth state so it can be re-run whenever either changes.

use tracing::debug;
use uikit_types::Route;

use crate::app::AuthState;

/// Path used when the guard turns a visitor away.
pub const SIGN_IN_PATH: &str = "/sign-in";
/// Landing path; also the catch-all redirect target.
pub const HOME_PATH: &str = "/";
/// Where a successful sign-in lands when no path was preserved.
pub const DEFAULT_AFTER_AUTH_PATH: &str = "/dashboard";

/// What the router decided to show for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    /// The identity provider has not reported a session yet.
    Loading(Route),
    Redirect { to: String, from: Option<String> },
}

/// Screen currently mounted by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Page(Route),
    Loading(Route),
}

impl Screen {
    pub fn route(self) -> Route {
        match self {
            Self::Page(route) | Self::Loading(route) => route,
        }
    }
}

/// Resolves `path` against the route table and the guard.
pub fn resolve(path: &str, auth: &AuthState) -> Resolution {
    let Some(route) = Route::match_path(path) else {
        return Resolution::Redirect {
            to: HOME_PATH.to_string(),
            from: None,
        };
    };
    if !route.is_protected() {
        return Resolution::Render(route);
    }
    if !auth.loaded {
        return Resolution::Loading(route);
    }
    if auth.session.is_none() {
        return Resolution::Redirect {
            to: SIGN_IN_PATH.to_string(),
            from: Some(route.path().to_string()),
        };
    }
    Resolution::Render(route)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    path: String,
    screen: Screen,
    /// Protected path the visitor asked for before being sent to sign in.
    return_to: Option<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            path: HOME_PATH.to_string(),
            screen: Screen::Page(Route::Landing),
            return_to: None,
        }
    }
}

impl Router {
    pub fn current_path(&self) -> &str {
        &self.path
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn current_route(&self) -> Route {
        self.screen.route()
    }

    pub fn return_to(&self) -> Option<&str> {
        self.return_to.as_deref()
    }

    /// Navigates to `path`, following redirects until a screen is mounted.
    ///
    /// Every redirect lands on an unprotected route, so the loop ends after
    /// at most two hops.
    pub fn navigate(&mut self, path: &str, auth: &AuthState) -> Screen {
        let mut target = path.to_string();
        loop {
            match resolve(&target, auth) {
                Resolution::Render(route) => {
                    self.path = route.path().to_string();
                    self.screen = Screen::Page(route);
                    break;
                }
                Resolution::Loading(route) => {
                    self.path = route.path().to_string();
                    self.screen = Screen::Loading(route);
                    break;
                }
                Resolution::Redirect { to, from } => {
                    debug!(from = %target, to = %to, "route redirect");
                    if from.is_some() {
                        self.return_to = from;
                    }
                    target = to;
                }
            }
        }
        self.screen
    }

    /// Re-runs the guard for the current path, e.g. once the session loads.
    pub fn refresh(&mut self, auth: &AuthState) -> Screen {
        let path = self.path.clone();
        self.navigate(&path, auth)
    }

    /// Consumes the preserved path, falling back to the dashboard.
    pub fn take_post_auth_destination(&mut self) -> String {
        self.return_to
            .take()
            .unwrap_or_else(|| DEFAULT_AFTER_AUTH_PATH.to_string())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uikit_types::{Session, UserIdentity};

    use super::*;

    fn signed_in() -> AuthState {
        AuthState {
            loaded: true,
            session: Some(Session {
                id: "sess_1".into(),
                user: UserIdentity {
                    id: "user_1".into(),
                    first_name: "John".into(),
                    last_name: "Doe".into(),
                    email: "john@example.com".into(),
                },
                method: "password".into(),
                created_at: Utc::now(),
            }),
        }
    }

    fn signed_out() -> AuthState {
        AuthState {
            loaded: true,
            session: None,
        }
    }

    #[test]
    fn unknown_paths_redirect_home() {
        assert_eq!(
            resolve("/dashboard/settings", &signed_in()),
            Resolution::Redirect {
                to: "/".into(),
                from: None
            }
        );
        let mut router = Router::default();
        assert_eq!(router.navigate("/nope", &signed_out()), Screen::Page(Route::Landing));
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn protected_route_waits_for_session_lookup() {
        assert_eq!(resolve("/dashboard", &AuthState::default()), Resolution::Loading(Route::Dashboard));
        assert_eq!(resolve("/sign-in", &AuthState::default()), Resolution::Render(Route::SignIn));
    }

    #[test]
    fn signed_out_visitor_is_sent_to_sign_in_with_path_preserved() {
        let mut router = Router::default();
        let screen = router.navigate("/dashboard/components", &signed_out());
        assert_eq!(screen, Screen::Page(Route::SignIn));
        assert_eq!(router.current_path(), "/sign-in");
        assert_eq!(router.return_to(), Some("/dashboard/components"));
        assert_eq!(router.take_post_auth_destination(), "/dashboard/components");
        assert_eq!(router.take_post_auth_destination(), "/dashboard");
    }

    #[test]
    fn signed_in_visitor_reaches_protected_routes() {
        let mut router = Router::default();
        assert_eq!(router.navigate("/dashboard/about", &signed_in()), Screen::Page(Route::Portfolio));
        assert_eq!(router.return_to(), None);
    }

    #[test]
    fn refresh_resolves_loading_screen_once_session_arrives() {
        let mut router = Router::default();
        assert_eq!(router.navigate("/dashboard/profile", &AuthState::default()), Screen::Loading(Route::Profile));
        assert_eq!(router.refresh(&signed_in()), Screen::Page(Route::Profile));

        let mut router = Router::default();
        router.navigate("/dashboard/profile", &AuthState::default());
        assert_eq!(router.refresh(&signed_out()), Screen::Page(Route::SignIn));
        assert_eq!(router.return_to(), Some("/dashboard/profile"));
    }
}
