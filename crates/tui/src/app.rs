//! Application state for both demo shells.
//!
//! [`App`] owns every piece of view state and is the single writer for the
//! shared pieces: the theme flag, the session and the route. Components read
//! it, mutate only their own local state, and report everything else back as
//! [`Msg`]s (handled by [`App::update`]) or [`Effect`]s (run by the runtime).

use std::sync::Arc;
use std::time::Instant;

use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{debug, info};
use uikit_identity::IdentityProvider;
use uikit_types::{AuthFlow, AuthOutcome, Effect, Msg, Route, ThemeMode, UserIdentity};
use uikit_util::{AppConfig, UserPreferences};

use crate::router::{HOME_PATH, Router, Screen};
use crate::ui::components::auth::AuthFormState;
use crate::ui::components::command_palette::CommandPaletteState;
use crate::ui::components::dashboard::DashboardLayoutState;
use crate::ui::components::gallery::GalleryState;
use crate::ui::components::landing::LandingState;
use crate::ui::components::portfolio::PortfolioState;
use crate::ui::components::sidebar::SidebarState;
use crate::ui::theme::{self, Theme};

/// Which demo the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shell {
    /// Collapsible navigation rail with a single active item
    Sidebar,
    /// Routed dashboard with identity, gallery and command palette
    #[default]
    Dashboard,
}

/// What the UI knows about the identity provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// The initial session lookup has completed.
    pub loaded: bool,
    pub session: Option<uikit_types::Session>,
}

/// Cross-cutting state read by every view.
#[derive(Debug)]
pub struct AppContext {
    theme_mode: ThemeMode,
    /// Palette for `theme_mode`; rebuilt on every toggle.
    pub theme: Box<dyn Theme>,
    pub auth: AuthState,
    pub identity: Arc<dyn IdentityProvider>,
    pub preferences: Arc<UserPreferences>,
}

impl AppContext {
    pub fn new(theme_mode: ThemeMode, identity: Arc<dyn IdentityProvider>, preferences: Arc<UserPreferences>) -> Self {
        Self {
            theme_mode,
            theme: theme::for_mode(theme_mode),
            auth: AuthState::default(),
            identity,
            preferences,
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        self.theme = theme::for_mode(mode);
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth.session.is_some()
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.auth.session.as_ref().map(|session| &session.user)
    }
}

#[derive(Debug)]
pub struct App {
    pub shell: Shell,
    pub ctx: AppContext,
    pub focus: Focus,
    pub router: Router,
    pub sidebar: SidebarState,
    pub palette: CommandPaletteState,
    pub landing: LandingState,
    pub sign_in: AuthFormState,
    pub sign_up: AuthFormState,
    pub dashboard: DashboardLayoutState,
    pub gallery: GalleryState,
    pub portfolio: PortfolioState,
    /// Identity calls still in flight
    pub executing: bool,
    /// Animation frame for spinners
    pub throbber_idx: usize,
    container_focus: FocusFlag,
}

impl App {
    pub fn new(
        shell: Shell,
        config: &AppConfig,
        identity: Arc<dyn IdentityProvider>,
        preferences: Arc<UserPreferences>,
    ) -> Self {
        let theme_mode = config.theme_override.or_else(|| preferences.theme()).unwrap_or_default();
        let now = Instant::now();
        let mut app = Self {
            shell,
            ctx: AppContext::new(theme_mode, identity, preferences),
            focus: Focus::default(),
            router: Router::default(),
            sidebar: SidebarState::default(),
            palette: CommandPaletteState::default(),
            landing: LandingState::default(),
            sign_in: AuthFormState::new(AuthFlow::SignIn),
            sign_up: AuthFormState::new(AuthFlow::SignUp),
            dashboard: DashboardLayoutState::default(),
            gallery: GalleryState::new(now),
            portfolio: PortfolioState::new(now),
            executing: false,
            throbber_idx: 0,
            container_focus: FocusFlag::named("app"),
        };
        if shell == Shell::Dashboard {
            app.navigate(&config.initial_path);
        }
        app.focus = FocusBuilder::build_for(&app);
        app
    }

    /// Route currently mounted in the dashboard shell.
    pub fn current_route(&self) -> Route {
        self.router.current_route()
    }

    /// Runs the router and fires on-enter hooks when the route changes.
    pub fn navigate(&mut self, path: &str) -> Screen {
        let before = self.router.screen();
        let screen = self.router.navigate(path, &self.ctx.auth);
        if screen != before {
            info!(path = %self.router.current_path(), "navigated");
            let now = Instant::now();
            match screen {
                Screen::Page(Route::Components) => self.gallery.enter(now),
                Screen::Page(Route::Portfolio) => self.portfolio.enter(now),
                _ => {}
            }
        }
        screen
    }

    pub fn form_mut(&mut self, flow: AuthFlow) -> &mut AuthFormState {
        match flow {
            AuthFlow::SignIn => &mut self.sign_in,
            AuthFlow::SignUp => &mut self.sign_up,
        }
    }

    /// Rebuilds the focus tree after a change to which controls exist and
    /// optionally moves focus to `target`.
    pub fn refocus(&mut self, target: Option<&FocusFlag>) {
        let old = std::mem::take(&mut self.focus);
        self.focus = FocusBuilder::rebuild_for(self, Some(old));
        if let Some(flag) = target {
            self.focus.focus(flag);
        }
    }

    fn set_session(&mut self, session: Option<uikit_types::Session>) {
        self.landing.set_signed_in(session.is_some());
        self.ctx.auth.session = session;
    }

    /// Whether the runtime should tick at the fast rate.
    pub fn needs_animation(&self) -> bool {
        if self.executing {
            return true;
        }
        if self.shell == Shell::Sidebar {
            return false;
        }
        match self.router.screen() {
            Screen::Loading(_) => true,
            Screen::Page(Route::Components) => self.gallery.is_animating(),
            Screen::Page(Route::Portfolio) => self.portfolio.is_animating(Instant::now()),
            Screen::Page(_) => false,
        }
    }

    /// Applies a message to shared state and returns follow-up effects.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Msg::Tick => {
                if self.needs_animation() {
                    self.throbber_idx = (self.throbber_idx + 1) % 10;
                }
                if self.current_route() == Route::Components {
                    self.gallery.tick(Instant::now());
                }
            }
            Msg::Resize(..) => {}
            Msg::ToggleTheme => {
                let mode = self.ctx.theme_mode().toggled();
                self.ctx.set_theme_mode(mode);
                effects.push(Effect::PersistTheme(mode));
            }
            Msg::SidebarToggled => match self.shell {
                Shell::Sidebar => self.sidebar.toggle_expansion(),
                Shell::Dashboard => self.dashboard.toggle_menu(),
            },
            Msg::SidebarItemSelected(label) => {
                if !self.sidebar.select_item(label) {
                    debug!(label = %label, "ignoring selection of undeclared sidebar item");
                }
            }
            Msg::CommandPaletteToggled => {
                if self.shell == Shell::Dashboard {
                    self.palette.toggle();
                }
            }
            Msg::SessionLoaded(session) => {
                self.ctx.auth.loaded = true;
                self.set_session(session.clone());
                effects.push(Effect::Navigate(self.router.current_path().to_string()));
            }
            Msg::AuthCompleted(AuthOutcome::Succeeded { flow, session }) => {
                self.ctx.auth.loaded = true;
                self.set_session(Some(session.clone()));
                self.form_mut(*flow).reset();
                effects.push(Effect::Navigate(self.router.take_post_auth_destination()));
            }
            Msg::AuthCompleted(AuthOutcome::Failed { flow, message }) => {
                self.form_mut(*flow).fail(message.clone());
            }
            Msg::SignedOut => {
                self.set_session(None);
                effects.push(Effect::Navigate(HOME_PATH.to_string()));
            }
        }
        effects
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        if self.shell == Shell::Sidebar {
            builder.widget(&self.sidebar);
            return;
        }
        if self.palette.is_open() {
            builder.widget(&self.palette);
            return;
        }
        let Screen::Page(route) = self.router.screen() else {
            return;
        };
        match route {
            Route::Landing => {
                builder.widget(&self.landing);
            }
            Route::SignIn => {
                builder.widget(&self.sign_in);
            }
            Route::SignUp => {
                builder.widget(&self.sign_up);
            }
            Route::Dashboard | Route::Profile => {
                builder.widget(&self.dashboard);
            }
            Route::Components if self.gallery.modal.is_open() => {
                builder.widget(&self.gallery);
            }
            Route::Components => {
                builder.widget(&self.dashboard);
                builder.widget(&self.gallery);
            }
            Route::Portfolio => {
                builder.widget(&self.dashboard);
                builder.widget(&self.portfolio);
            }
        }
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uikit_identity::LocalIdentityProvider;
    use uikit_types::{Session, UserIdentity};

    use super::*;

    fn config(path: &str) -> AppConfig {
        AppConfig::new(Some("pk_test_demo"), Some(path), Some(ThemeMode::Dark)).expect("config")
    }

    fn app(shell: Shell, path: &str) -> App {
        App::new(
            shell,
            &config(path),
            Arc::new(LocalIdentityProvider::new("pk_test_demo")),
            Arc::new(UserPreferences::ephemeral()),
        )
    }

    fn session() -> Session {
        Session {
            id: "sess_1".into(),
            user: UserIdentity {
                id: "user_1".into(),
                first_name: "John".into(),
                last_name: "Doe".into(),
                email: "john@example.com".into(),
            },
            method: "password".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn theme_toggle_is_the_single_writer_and_persists() {
        let mut app = app(Shell::Dashboard, "/");
        assert_eq!(app.ctx.theme_mode(), ThemeMode::Dark);
        let effects = app.update(&Msg::ToggleTheme);
        assert_eq!(app.ctx.theme_mode(), ThemeMode::Light);
        assert_eq!(app.ctx.theme.mode(), ThemeMode::Light);
        assert_eq!(effects, vec![Effect::PersistTheme(ThemeMode::Light)]);
    }

    #[test]
    fn sidebar_messages_drive_selection_state() {
        let mut app = app(Shell::Sidebar, "/");
        for label in ["Users", "Orders", "Billings"] {
            app.update(&Msg::SidebarItemSelected(label.into()));
        }
        assert_eq!(app.sidebar.active_label(), Some("Billings"));
        app.update(&Msg::SidebarItemSelected("Nope".into()));
        assert_eq!(app.sidebar.active_label(), Some("Billings"));
        app.update(&Msg::SidebarToggled);
        assert!(!app.sidebar.is_expanded());
    }

    #[test]
    fn palette_chord_message_only_applies_to_dashboard_shell() {
        let mut dashboard = app(Shell::Dashboard, "/");
        dashboard.update(&Msg::CommandPaletteToggled);
        assert!(dashboard.palette.is_open());
        let mut sidebar = app(Shell::Sidebar, "/");
        sidebar.update(&Msg::CommandPaletteToggled);
        assert!(!sidebar.palette.is_open());
    }

    #[test]
    fn protected_start_path_loads_then_redirects_and_returns_after_sign_in() {
        let mut app = app(Shell::Dashboard, "/dashboard/components");
        assert_eq!(app.router.screen(), Screen::Loading(Route::Components));
        assert!(app.needs_animation());

        let effects = app.update(&Msg::SessionLoaded(None));
        assert_eq!(effects, vec![Effect::Navigate("/dashboard/components".into())]);
        app.navigate("/dashboard/components");
        assert_eq!(app.router.screen(), Screen::Page(Route::SignIn));

        let effects = app.update(&Msg::AuthCompleted(AuthOutcome::Succeeded {
            flow: AuthFlow::SignIn,
            session: session(),
        }));
        assert_eq!(effects, vec![Effect::Navigate("/dashboard/components".into())]);
        app.navigate("/dashboard/components");
        assert_eq!(app.router.screen(), Screen::Page(Route::Components));
        assert!(app.landing.is_signed_in());
    }

    #[test]
    fn failed_auth_sets_form_error() {
        let mut app = app(Shell::Dashboard, "/sign-up");
        app.update(&Msg::AuthCompleted(AuthOutcome::Failed {
            flow: AuthFlow::SignUp,
            message: AuthFlow::SignUp.failure_message().into(),
        }));
        assert_eq!(app.sign_up.error(), Some("Sign up failed. Please try again."));
        assert_eq!(app.sign_in.error(), None);
    }

    #[test]
    fn sign_out_clears_session_and_goes_home() {
        let mut app = app(Shell::Dashboard, "/");
        app.update(&Msg::SessionLoaded(Some(session())));
        assert!(app.ctx.is_signed_in());
        assert_eq!(app.update(&Msg::SignedOut), vec![Effect::Navigate("/".into())]);
        assert!(!app.ctx.is_signed_in());
        assert_eq!(app.ctx.user(), None);
    }

    #[test]
    fn dashboard_shell_ctrl_b_toggles_menu() {
        let mut app = app(Shell::Dashboard, "/");
        app.update(&Msg::SidebarToggled);
        assert!(!app.dashboard.is_menu_open());
        assert!(app.sidebar.is_expanded());
    }
}
