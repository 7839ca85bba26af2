use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    prelude::*,
    style::Style,
    widgets::{Block, Paragraph},
};
use uikit_types::{AuthFlow, Effect, Msg, Route};

use super::components::command_palette::is_palette_chord;
use super::components::{
    AuthComponent, CommandPaletteComponent, Component, DashboardLayoutComponent, LandingComponent, SidebarShellComponent,
};
use super::theme::theme_helpers as th;
use super::utils::centered_fixed;
use super::widgets::Spinner;
use crate::app::{App, Shell};
use crate::router::Screen;

/// Root component: routes input to the mounted screen and draws the hint bar
/// and the command palette overlay.
#[derive(Debug)]
pub struct MainView {
    sidebar_shell: SidebarShellComponent,
    landing: LandingComponent,
    sign_in: AuthComponent,
    sign_up: AuthComponent,
    dashboard: DashboardLayoutComponent,
    palette: CommandPaletteComponent,
}

impl Default for MainView {
    fn default() -> Self {
        Self {
            sidebar_shell: SidebarShellComponent::default(),
            landing: LandingComponent,
            sign_in: AuthComponent::new(AuthFlow::SignIn),
            sign_up: AuthComponent::new(AuthFlow::SignUp),
            dashboard: DashboardLayoutComponent::default(),
            palette: CommandPaletteComponent,
        }
    }
}

impl MainView {
    /// Component for the mounted screen. `None` while the guard waits on the
    /// identity provider.
    fn content(&mut self, app: &App) -> Option<&mut dyn Component> {
        if app.shell == Shell::Sidebar {
            return Some(&mut self.sidebar_shell);
        }
        match app.router.screen() {
            Screen::Loading(_) => None,
            Screen::Page(Route::Landing) => Some(&mut self.landing),
            Screen::Page(Route::SignIn) => Some(&mut self.sign_in),
            Screen::Page(Route::SignUp) => Some(&mut self.sign_up),
            Screen::Page(Route::Dashboard | Route::Components | Route::Profile | Route::Portfolio) => {
                Some(&mut self.dashboard)
            }
        }
    }

    fn content_ref(&self, app: &App) -> Option<&dyn Component> {
        if app.shell == Shell::Sidebar {
            return Some(&self.sidebar_shell);
        }
        match app.router.screen() {
            Screen::Loading(_) => None,
            Screen::Page(Route::Landing) => Some(&self.landing),
            Screen::Page(Route::SignIn) => Some(&self.sign_in),
            Screen::Page(Route::SignUp) => Some(&self.sign_up),
            Screen::Page(_) => Some(&self.dashboard),
        }
    }

    /// Puts focus somewhere sensible after the focus tree lost its focused
    /// widget.
    pub fn restore_focus(&mut self, app: &mut App) {
        app.focus.first();
    }

    fn global_key(app: &App, key: KeyEvent) -> Option<Vec<Effect>> {
        if is_palette_chord(&key) {
            if app.shell == Shell::Dashboard {
                return Some(vec![Effect::SendMsg(Msg::CommandPaletteToggled)]);
            }
            return Some(Vec::new());
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') => return Some(vec![Effect::SendMsg(Msg::ToggleTheme)]),
                KeyCode::Char('b') => return Some(vec![Effect::SendMsg(Msg::SidebarToggled)]),
                _ => {}
            }
        }
        None
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        if let Some(content) = self.content(app) {
            effects.extend(content.handle_message(app, msg));
        }
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if let Some(effects) = Self::global_key(app, key) {
            return effects;
        }
        if app.palette.is_open() {
            return self.palette.handle_key_events(app, key);
        }
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                return Vec::new();
            }
            _ => {}
        }
        self.content(app)
            .map(|content| content.handle_key_events(app, key))
            .unwrap_or_default()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.palette.is_open() {
            return self.palette.handle_mouse_events(app, mouse);
        }
        self.content(app)
            .map(|content| content.handle_mouse_events(app, mouse))
            .unwrap_or_default()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let layout = self.get_preferred_layout(app, area);
        match self.content(app) {
            Some(content) => content.render(frame, layout[0], app),
            None => {
                let spinner_area = centered_fixed(16, 1, layout[0]);
                frame.render_widget(
                    Spinner::new(&*app.ctx.theme, app.throbber_idx).label("Loading..."),
                    spinner_area,
                );
            }
        }

        let hint_spans: Vec<Span> = self.get_hint_spans(app);
        let hints_widget = Paragraph::new(Line::from(hint_spans)).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, layout[1]);

        if app.palette.is_open() {
            render_overlay(frame, app);
            self.palette.render(frame, area, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];
        if app.palette.is_open() {
            hint_spans.extend(self.palette.get_hint_spans(app));
            return hint_spans;
        }
        if let Some(content) = self.content_ref(app) {
            hint_spans.extend(content.get_hint_spans(app));
        }
        hint_spans.extend(th::build_hint_spans(
            &*app.ctx.theme,
            &[(" Tab", " Focus "), (" Ctrl+T", " Theme "), (" Ctrl+C", " Quit ")],
        ));
        hint_spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Min(1),    // Main view
            Constraint::Length(1), // Hints bar
        ])
        .split(area)
        .to_vec()
    }
}

/// Dims everything under an overlay.
fn render_overlay(frame: &mut Frame, app: &App) {
    frame.render_widget(Block::default().style(app.ctx.theme.modal_background_style()).dim(), frame.area());
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{Terminal, backend::TestBackend};
    use uikit_identity::LocalIdentityProvider;
    use uikit_util::{AppConfig, UserPreferences};

    use super::*;

    fn app(shell: Shell) -> App {
        App::new(
            shell,
            &AppConfig::new(Some("pk_test_demo"), None, None).expect("config"),
            Arc::new(LocalIdentityProvider::new("pk_test_demo")),
            Arc::new(UserPreferences::ephemeral()),
        )
    }

    fn draw(view: &mut MainView, app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal.draw(|frame| view.render(frame, frame.area(), app)).expect("draw");
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn palette_chord_only_fires_in_dashboard_shell() {
        let mut view = MainView::default();
        let mut dashboard = app(Shell::Dashboard);
        assert_eq!(
            view.handle_key_events(&mut dashboard, ctrl('k')),
            vec![Effect::SendMsg(Msg::CommandPaletteToggled)]
        );
        let super_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER);
        assert_eq!(
            view.handle_key_events(&mut dashboard, super_k),
            vec![Effect::SendMsg(Msg::CommandPaletteToggled)]
        );
        let mut sidebar = app(Shell::Sidebar);
        assert!(view.handle_key_events(&mut sidebar, ctrl('k')).is_empty());
    }

    #[test]
    fn theme_and_sidebar_chords_become_messages() {
        let mut view = MainView::default();
        let mut sidebar = app(Shell::Sidebar);
        assert_eq!(view.handle_key_events(&mut sidebar, ctrl('t')), vec![Effect::SendMsg(Msg::ToggleTheme)]);
        assert_eq!(view.handle_key_events(&mut sidebar, ctrl('b')), vec![Effect::SendMsg(Msg::SidebarToggled)]);
    }

    #[test]
    fn unresolved_session_renders_spinner() {
        let mut view = MainView::default();
        let mut app = app(Shell::Dashboard);
        app.navigate("/dashboard");
        let text = draw(&mut view, &mut app);
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn open_palette_is_drawn_over_the_page() {
        let mut view = MainView::default();
        let mut app = app(Shell::Dashboard);
        view.handle_message(&mut app, Msg::SessionLoaded(None));
        view.handle_message(&mut app, Msg::CommandPaletteToggled);
        let text = draw(&mut view, &mut app);
        assert!(text.contains("Type a command or search..."));
        assert!(text.contains("All rights reserved."));
    }

    #[test]
    fn sidebar_shell_renders_rail_and_main_content() {
        let mut view = MainView::default();
        let mut app = app(Shell::Sidebar);
        let text = draw(&mut view, &mut app);
        assert!(text.contains("Main Content"));
        assert!(text.contains("Statistics"));
        assert!(text.contains("Ctrl+B"));
        assert!(text.contains("Ctrl+C"));
    }
}
