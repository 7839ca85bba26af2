use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use uikit_types::{ButtonVariant, Effect, Msg, Route};

use super::{DashboardHomeComponent, ProfileComponent};
use crate::app::App;
use crate::ui::components::{Component, GalleryComponent, PortfolioComponent, find_target_index_by_mouse_position};
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::contains;
use crate::ui::widgets::Spinner;

const MENU_WIDTH: u16 = 28;
const HEADER_HEIGHT: u16 = 3;

/// Protected layout: closable left menu, header with the user button and
/// an outlet for the child view of the current route.
#[derive(Debug, Default)]
pub struct DashboardLayoutComponent {
    home: DashboardHomeComponent,
    gallery: GalleryComponent,
    profile: ProfileComponent,
    portfolio: PortfolioComponent,
}

impl DashboardLayoutComponent {
    fn outlet(&mut self, route: Route) -> Option<&mut dyn Component> {
        match route {
            Route::Dashboard => Some(&mut self.home),
            Route::Components => Some(&mut self.gallery),
            Route::Profile => Some(&mut self.profile),
            Route::Portfolio => Some(&mut self.portfolio),
            Route::Landing | Route::SignIn | Route::SignUp => None,
        }
    }

    /// Whether keyboard focus sits on one of the layout's own controls.
    fn owns_focus(app: &App) -> bool {
        let state = &app.dashboard;
        state.toggle_focus.get() || state.user_button_focus.get() || state.focused_index().is_some()
    }

    fn activate_focused(app: &App) -> Vec<Effect> {
        let state = &app.dashboard;
        if state.toggle_focus.get() {
            return vec![Effect::SendMsg(Msg::SidebarToggled)];
        }
        if state.user_button_focus.get() {
            return vec![Effect::SignOut];
        }
        state
            .focused_index()
            .and_then(|index| state.entries().get(index))
            .map(|entry| vec![Effect::Navigate(entry.path.to_string())])
            .unwrap_or_default()
    }

    fn render_menu(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let roles = theme.roles();
        let panel = Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        let inner = panel.inner(area);
        frame.render_widget(panel, area);

        let [header, _, items_area] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        let [title_area, toggle_area] = Layout::horizontal([Constraint::Min(0), Constraint::Length(5)]).areas(header);
        frame.render_widget(
            Paragraph::new(Span::styled("  Dashboard", theme.heading_style())),
            Rect::new(title_area.x, title_area.y + 1, title_area.width, 1),
        );
        th::render_button(
            frame,
            toggle_area,
            "✕",
            theme,
            th::ButtonRenderOptions::variant(ButtonVariant::Secondary, app.dashboard.toggle_focus.get()),
        );

        let route = app.current_route();
        let count = app.dashboard.entries().len();
        let rows = Layout::vertical(vec![Constraint::Length(1); count]).spacing(1).split(items_area);
        for (index, (entry, row)) in app.dashboard.entries().iter().zip(rows.iter()).enumerate() {
            let focused = app.dashboard.item_focus_flags.get(index).is_some_and(|flag| flag.get());
            let style = if entry.is_active(route) {
                Style::default().bg(roles.accent_subtle).fg(roles.accent_primary).add_modifier(Modifier::BOLD)
            } else if focused {
                Style::default().bg(roles.surface_muted).fg(roles.text)
            } else {
                theme.text_secondary_style()
            };
            let row = row.inner(ratatui::layout::Margin::new(1, 0));
            frame.render_widget(Block::default().style(style), row);
            let mut line = Line::from(vec![Span::raw("  "), Span::raw(entry.icon), Span::raw("  "), Span::raw(entry.label)]);
            if focused {
                line = line.patch_style(Style::default().add_modifier(Modifier::UNDERLINED));
            }
            frame.render_widget(Paragraph::new(line).style(style), row);
        }

        app.dashboard.toggle_area = toggle_area;
        app.dashboard.per_item_areas = rows.iter().map(|row| row.inner(ratatui::layout::Margin::new(1, 0))).collect();
    }

    fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let bar = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        let inner = bar.inner(area);
        frame.render_widget(bar, area);

        let [left, right] = Layout::horizontal([Constraint::Length(5), Constraint::Length(6)])
            .flex(Flex::SpaceBetween)
            .areas(inner);
        let toggle_area = if app.dashboard.is_menu_open() {
            Rect::default()
        } else {
            th::render_button(
                frame,
                left,
                "☰",
                theme,
                th::ButtonRenderOptions::new(true, app.dashboard.toggle_focus.get(), false, Borders::NONE, ButtonVariant::Secondary),
            );
            left
        };
        let initials = app.ctx.user().map(|user| user.initials()).unwrap_or_default();
        th::render_button(
            frame,
            right,
            &initials,
            theme,
            th::ButtonRenderOptions::new(
                true,
                app.dashboard.user_button_focus.get(),
                false,
                Borders::NONE,
                ButtonVariant::Primary,
            ),
        );

        if !app.dashboard.is_menu_open() {
            app.dashboard.toggle_area = toggle_area;
            app.dashboard.per_item_areas.clear();
        }
        app.dashboard.user_button_area = right;
    }
}

impl Component for DashboardLayoutComponent {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let route = app.current_route();
        self.outlet(route).map(|outlet| outlet.handle_message(app, msg)).unwrap_or_default()
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if !Self::owns_focus(app) {
            let route = app.current_route();
            return self.outlet(route).map(|outlet| outlet.handle_key_events(app, key)).unwrap_or_default();
        }
        match key.code {
            KeyCode::Down | KeyCode::Up => {
                if app.dashboard.is_menu_open()
                    && let Some(flag) = app.dashboard.cycle_focus(key.code == KeyCode::Down)
                {
                    app.focus.focus(&flag);
                }
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => Self::activate_focused(app),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let (column, row) = (mouse.column, mouse.row);
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let state = &app.dashboard;
            if contains(state.toggle_area, column, row) {
                let flag = state.toggle_focus.clone();
                app.focus.focus(&flag);
                return vec![Effect::SendMsg(Msg::SidebarToggled)];
            }
            if contains(state.user_button_area, column, row) {
                let flag = state.user_button_focus.clone();
                app.focus.focus(&flag);
                return vec![Effect::SignOut];
            }
            if let Some(index) = find_target_index_by_mouse_position(&state.last_area, &state.per_item_areas, column, row)
            {
                if let Some(flag) = state.item_focus_flags.get(index).cloned() {
                    app.focus.focus(&flag);
                }
                return app
                    .dashboard
                    .entries()
                    .get(index)
                    .map(|entry| vec![Effect::Navigate(entry.path.to_string())])
                    .unwrap_or_default();
            }
        }
        let route = app.current_route();
        self.outlet(route).map(|outlet| outlet.handle_mouse_events(app, mouse)).unwrap_or_default()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        app.dashboard.last_area = rect;
        if !app.ctx.is_signed_in() {
            let theme = &*app.ctx.theme;
            frame.render_widget(Spinner::new(theme, app.throbber_idx), rect);
            return;
        }

        let layout = self.get_preferred_layout(app, rect);
        let (menu_area, main_area) = (layout[0], layout[1]);
        if app.dashboard.is_menu_open() {
            Self::render_menu(frame, menu_area, app);
        }

        let [header_area, outlet_area] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(main_area);
        Self::render_header(frame, header_area, app);

        let route = app.current_route();
        if let Some(outlet) = self.outlet(route) {
            outlet.render(frame, outlet_area.inner(ratatui::layout::Margin::new(2, 1)), app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        if !Self::owns_focus(app) {
            let outlet: Option<&dyn Component> = match app.current_route() {
                Route::Components => Some(&self.gallery),
                Route::Portfolio => Some(&self.portfolio),
                _ => None,
            };
            if let Some(outlet) = outlet {
                return outlet.get_hint_spans(app);
            }
        }
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" Enter", " Open "), (" ↑/↓", " Menu "), (" Ctrl+B", " Menu "), (" Ctrl+K", " Commands ")],
        )
    }

    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let menu_width = if app.dashboard.is_menu_open() { MENU_WIDTH } else { 0 };
        Layout::horizontal([Constraint::Length(menu_width), Constraint::Min(0)])
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

    fn dashboard_app(path: &str) -> App {
        let mut app = App::new(
            Shell::Dashboard,
            &AppConfig::new(Some("pk_test_demo"), Some(path), None).expect("config"),
            Arc::new(LocalIdentityProvider::new("pk_test_demo")),
            Arc::new(UserPreferences::ephemeral()),
        );
        app.update(&Msg::SessionLoaded(Some(Session {
            id: "sess_1".into(),
            user: UserIdentity {
                id: "user_1".into(),
                first_name: "John".into(),
                last_name: "Doe".into(),
                email: "john@example.com".into(),
            },
            method: "oauth_google".into(),
            created_at: Utc::now(),
        })));
        app.navigate(path);
        app.focus = rat_focus::FocusBuilder::build_for(&app);
        app
    }

    fn draw(component: &mut DashboardLayoutComponent, app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).expect("terminal");
        terminal.draw(|frame| component.render(frame, frame.area(), app)).expect("draw");
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn renders_menu_header_and_outlet() {
        let mut app = dashboard_app("/dashboard/profile");
        let mut layout = DashboardLayoutComponent::default();
        let text = draw(&mut layout, &mut app);
        assert!(text.contains("Components"));
        assert!(text.contains("Settings"));
        assert!(text.contains("JD"));
        assert!(text.contains("john@example.com"));
        assert!(text.contains("Google"));
        assert_eq!(app.dashboard.per_item_areas.len(), 5);
    }

    #[test]
    fn closed_menu_hides_entries() {
        let mut app = dashboard_app("/dashboard");
        app.update(&Msg::SidebarToggled);
        let mut layout = DashboardLayoutComponent::default();
        let text = draw(&mut layout, &mut app);
        assert!(!text.contains("Components"));
        assert!(text.contains("Statistics"));
        assert!(app.dashboard.per_item_areas.is_empty());
    }

    #[test]
    fn menu_entries_navigate_and_user_button_signs_out() {
        let mut app = dashboard_app("/dashboard");
        let mut layout = DashboardLayoutComponent::default();
        draw(&mut layout, &mut app);

        let flag = app.dashboard.item_focus_flags[1].clone();
        app.focus.focus(&flag);
        let effects = layout.handle_key_events(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(effects, vec![Effect::Navigate("/dashboard/components".into())]);

        let area = app.dashboard.user_button_area;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: area.x,
            row: area.y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(layout.handle_mouse_events(&mut app, click), vec![Effect::SignOut]);
    }

    #[test]
    fn shows_spinner_without_session() {
        let mut app = dashboard_app("/dashboard");
        app.update(&Msg::SignedOut);
        let mut layout = DashboardLayoutComponent::default();
        let text = draw(&mut layout, &mut app);
        assert!(!text.contains("Statistics"));
        assert!(text.contains(Spinner::symbol(app.throbber_idx)));
    }
}
