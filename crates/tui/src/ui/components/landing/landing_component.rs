use chrono::{Datelike, Local};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use uikit_types::{ButtonVariant, Effect, Msg, Route};

use super::{FEATURES, LandingControl};
use crate::app::App;
use crate::router::{DEFAULT_AFTER_AUTH_PATH, HOME_PATH, SIGN_IN_PATH};
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::widgets::Card;

const HEADLINE: &str = "Welcome to Your Modern Dashboard";
const TAGLINE: &str = "Experience the next generation of web applications with our powerful dashboard solution.";

const FOOTER_COLUMNS: [(&str, &[&str]); 4] = [
    ("Company", &["About", "Careers", "Contact"]),
    ("Resources", &["Blog", "Documentation", "Help Center"]),
    ("Legal", &["Privacy", "Terms", "Cookie Policy"]),
    ("Social", &["Twitter", "GitHub", "LinkedIn"]),
];

/// Public landing page with the top navbar and the footer.
#[derive(Debug, Default)]
pub struct LandingComponent;

impl LandingComponent {
    fn activate(app: &App, control: LandingControl) -> Vec<Effect> {
        let effect = match control {
            LandingControl::Home => Effect::Navigate(HOME_PATH.to_string()),
            LandingControl::SignIn => Effect::Navigate(SIGN_IN_PATH.to_string()),
            LandingControl::SignUp | LandingControl::GetStarted => Effect::Navigate(Route::SignUp.path().to_string()),
            LandingControl::GoToDashboard => Effect::Navigate(DEFAULT_AFTER_AUTH_PATH.to_string()),
            LandingControl::ThemeToggle => Effect::SendMsg(Msg::ToggleTheme),
            LandingControl::UserButton if app.ctx.is_signed_in() => Effect::SignOut,
            LandingControl::UserButton => return Vec::new(),
        };
        vec![effect]
    }

    fn control_label(app: &App, control: LandingControl) -> String {
        match control {
            LandingControl::Home => "Home".into(),
            LandingControl::SignIn => "Sign In".into(),
            LandingControl::SignUp => "Sign Up".into(),
            LandingControl::GoToDashboard => "Go to Dashboard".into(),
            LandingControl::ThemeToggle => if app.ctx.theme_mode().is_dark() { "☀" } else { "☾" }.into(),
            LandingControl::UserButton => app.ctx.user().map(|user| user.initials()).unwrap_or_default(),
            LandingControl::GetStarted => "Get Started →".into(),
        }
    }

    fn variant(control: LandingControl) -> ButtonVariant {
        match control {
            LandingControl::SignUp | LandingControl::GoToDashboard | LandingControl::GetStarted => ButtonVariant::Primary,
            LandingControl::SignIn => ButtonVariant::Outline,
            _ => ButtonVariant::Secondary,
        }
    }

    /// Draws the navbar and returns the area of each visible control.
    pub fn render_navbar(frame: &mut Frame, area: Rect, app: &App) -> Vec<(LandingControl, Rect)> {
        let theme = &*app.ctx.theme;
        let bar = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        let inner = bar.inner(area);
        frame.render_widget(bar, area);

        let [brand_area, controls_area] =
            Layout::horizontal([Constraint::Length(12), Constraint::Min(0)]).areas(inner);
        let brand_row = Rect::new(brand_area.x, brand_area.y + inner.height / 2, brand_area.width, 1);
        frame.render_widget(Paragraph::new("  Logo").style(theme.accent_emphasis_style()), brand_row);

        let controls: Vec<LandingControl> = app
            .landing
            .visible_controls()
            .filter(|control| *control != LandingControl::GetStarted)
            .collect();
        let labels: Vec<String> = controls.iter().map(|control| Self::control_label(app, *control)).collect();
        let widths = labels.iter().map(|label| {
            let width = u16::try_from(unicode_width::UnicodeWidthStr::width(label.as_str())).unwrap_or(0);
            Constraint::Length(width + 4)
        });
        let slots = Layout::horizontal(widths).flex(Flex::End).spacing(1).split(controls_area);

        let mut areas = Vec::with_capacity(controls.len());
        for ((control, label), slot) in controls.iter().zip(labels.iter()).zip(slots.iter()) {
            let focused = app.landing.is_focused(*control);
            if *control == LandingControl::Home {
                let mut style = theme.text_secondary_style();
                if focused {
                    style = theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED);
                }
                let row = Rect::new(slot.x, slot.y + slot.height / 2, slot.width, 1);
                frame.render_widget(Paragraph::new(label.as_str()).centered().style(style), row);
            } else {
                th::render_button(
                    frame,
                    *slot,
                    label,
                    theme,
                    th::ButtonRenderOptions::variant(Self::variant(*control), focused),
                );
            }
            areas.push((*control, *slot));
        }
        areas
    }

    fn render_hero(frame: &mut Frame, area: Rect, app: &App) -> Option<(LandingControl, Rect)> {
        let theme = &*app.ctx.theme;
        let [headline, tagline, _, button] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .flex(Flex::Center)
        .areas(area);
        frame.render_widget(
            Paragraph::new(Span::styled(HEADLINE, theme.heading_style())).centered(),
            headline,
        );
        frame.render_widget(
            Paragraph::new(TAGLINE)
                .centered()
                .wrap(Wrap { trim: true })
                .style(theme.text_secondary_style()),
            tagline,
        );
        if !LandingControl::GetStarted.is_visible(app.landing.is_signed_in()) {
            return None;
        }
        let [button] = Layout::horizontal([Constraint::Length(19)]).flex(Flex::Center).areas(button);
        let focused = app.landing.is_focused(LandingControl::GetStarted);
        let label = Self::control_label(app, LandingControl::GetStarted);
        th::render_button(
            frame,
            button,
            &label,
            theme,
            th::ButtonRenderOptions::variant(ButtonVariant::Primary, focused),
        );
        Some((LandingControl::GetStarted, button))
    }

    fn render_features(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).split(area);
        for (row_index, chunk) in FEATURES.chunks(3).enumerate() {
            let Some(row) = rows.get(row_index) else {
                break;
            };
            let cells = Layout::horizontal([Constraint::Fill(1); 3]).spacing(2).split(*row);
            for (feature, cell) in chunk.iter().zip(cells.iter()) {
                let body = Line::from(vec![
                    Span::styled(" ✔ ", theme.accent_primary_style()),
                    Span::styled(*feature, theme.text_primary_style()),
                ]);
                frame.render_widget(Card::new(theme).body(body), *cell);
            }
        }
    }

    fn render_footer(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [columns_area, copyright_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        let columns = Layout::horizontal([Constraint::Fill(1); 4]).split(columns_area);
        for ((heading, links), column) in FOOTER_COLUMNS.iter().zip(columns.iter()) {
            let mut lines = vec![Line::from(Span::styled(*heading, theme.heading_style()))];
            lines.extend(links.iter().map(|link| Line::from(Span::styled(*link, theme.text_secondary_style()))));
            frame.render_widget(Paragraph::new(lines), column.inner(ratatui::layout::Margin::new(2, 0)));
        }
        let year = Local::now().year();
        frame.render_widget(
            Paragraph::new(format!("© {year} Your Company. All rights reserved."))
                .centered()
                .style(theme.text_muted_style()),
            copyright_area,
        );
    }
}

impl Component for LandingComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Right | KeyCode::Down => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::Left | KeyCode::Up => {
                app.focus.prev();
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => app
                .landing
                .focused_control()
                .map(|control| Self::activate(app, control))
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(control) = app.landing.control_at(mouse.column, mouse.row) else {
            return Vec::new();
        };
        if let Some(flag) = app.landing.flag_for(control).cloned() {
            app.focus.focus(&flag);
        }
        Self::activate(app, control)
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let layout = self.get_preferred_layout(app, rect);
        let mut areas = Self::render_navbar(frame, layout[0], app);
        if let Some(get_started) = Self::render_hero(frame, layout[1], app) {
            areas.push(get_started);
        }
        let features_area = layout[2].inner(ratatui::layout::Margin::new(4, 0));
        Self::render_features(frame, features_area, &*app.ctx.theme);
        Self::render_footer(frame, layout[3], &*app.ctx.theme);

        app.landing.last_area = rect;
        app.landing.control_areas = areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" Enter", " Open "), (" ←/→", " Move "), (" Ctrl+T", " Theme "), (" Ctrl+K", " Commands ")],
        )
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(4), // Navbar
            Constraint::Min(9),    // Hero
            Constraint::Length(7), // Features
            Constraint::Length(6), // Footer
        ])
        .split(area)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use uikit_identity::LocalIdentityProvider;
    use uikit_types::{Session, UserIdentity};
    use uikit_util::{AppConfig, UserPreferences};

    use super::*;
    use crate::app::Shell;

    fn landing_app() -> App {
        let mut app = App::new(
            Shell::Dashboard,
            &AppConfig::new(Some("pk_test_demo"), None, None).expect("config"),
            Arc::new(LocalIdentityProvider::new("pk_test_demo")),
            Arc::new(UserPreferences::ephemeral()),
        );
        app.update(&Msg::SessionLoaded(None));
        app.navigate("/");
        app
    }

    fn session() -> Session {
        Session {
            id: "sess_1".into(),
            user: UserIdentity {
                id: "user_1".into(),
                first_name: "Jane".into(),
                last_name: "Roe".into(),
                email: "jane@example.com".into(),
            },
            method: "password".into(),
            created_at: Utc::now(),
        }
    }

    fn draw(app: &mut App) -> String {
        let mut component = LandingComponent;
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal.draw(|frame| component.render(frame, frame.area(), app)).expect("draw");
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn signed_out_landing_offers_auth_and_get_started() {
        let mut app = landing_app();
        let text = draw(&mut app);
        assert!(text.contains("Welcome to Your Modern Dashboard"));
        assert!(text.contains("Sign In"));
        assert!(text.contains("Get Started"));
        assert!(text.contains("Team Collaboration"));
        assert!(text.contains("All rights reserved."));
        let controls: Vec<LandingControl> = app.landing.control_areas.iter().map(|(c, _)| *c).collect();
        assert!(controls.contains(&LandingControl::GetStarted));
        assert!(!controls.contains(&LandingControl::UserButton));
    }

    #[test]
    fn signed_in_navbar_shows_dashboard_link_and_initials() {
        let mut app = landing_app();
        app.update(&Msg::SessionLoaded(Some(session())));
        let text = draw(&mut app);
        assert!(text.contains("Go to Dashboard"));
        assert!(text.contains("JR"));
        assert!(!text.contains("Get Started"));
    }

    #[test]
    fn clicking_controls_emits_effects() {
        let mut app = landing_app();
        draw(&mut app);
        let mut component = LandingComponent;
        let (_, area) = app
            .landing
            .control_areas
            .iter()
            .find(|(control, _)| *control == LandingControl::SignUp)
            .copied()
            .expect("sign up button");
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: area.x + 1,
            row: area.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            component.handle_mouse_events(&mut app, click),
            vec![Effect::Navigate("/sign-up".into())]
        );
    }

    #[test]
    fn user_button_signs_out_and_theme_toggle_sends_message() {
        let mut app = landing_app();
        assert_eq!(
            LandingComponent::activate(&app, LandingControl::ThemeToggle),
            vec![Effect::SendMsg(Msg::ToggleTheme)]
        );
        assert!(LandingComponent::activate(&app, LandingControl::UserButton).is_empty());
        app.update(&Msg::SessionLoaded(Some(session())));
        assert_eq!(LandingComponent::activate(&app, LandingControl::UserButton), vec![Effect::SignOut]);
    }
}
