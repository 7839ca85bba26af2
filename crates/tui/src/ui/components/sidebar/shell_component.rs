use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use uikit_types::{Effect, TooltipPosition};

use super::SidebarComponent;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::widgets::Tooltip;

/// Rail plus main content area.
#[derive(Debug, Default)]
pub struct SidebarShellComponent {
    rail: SidebarComponent,
}

impl SidebarShellComponent {
    /// Item to describe next to a collapsed rail.
    fn tooltip_target(app: &App) -> Option<usize> {
        if app.sidebar.is_expanded() {
            return None;
        }
        app.sidebar.highlighted_index()
    }
}

impl Component for SidebarShellComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        self.rail.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.rail.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let layout = self.get_preferred_layout(app, area);
        self.rail.render(frame, layout[0], app);

        let theme = &*app.ctx.theme;
        let active = app.sidebar.active_label().unwrap_or("Nothing selected");
        let main = th::block(theme, Some(" Main Content "), false);
        let inner = main.inner(layout[1]);
        frame.render_widget(main, layout[1]);
        let body = vec![
            Line::from(Span::styled(active.to_string(), theme.heading_style())),
            Line::default(),
            Line::from(Span::styled(
                "Pick an entry in the rail to make it the active one.",
                theme.text_secondary_style(),
            )),
        ];
        frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), inner.inner(ratatui::layout::Margin::new(2, 1)));

        if let Some(index) = Self::tooltip_target(app)
            && let (Some(item), Some(row)) = (app.sidebar.items().get(index), app.sidebar.per_item_areas.get(index))
        {
            let label = item.label.as_str();
            let placement = Tooltip::placement(*row, label, TooltipPosition::Right, area);
            frame.render_widget(Tooltip::new(theme, label), placement);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        self.rail.get_hint_spans(app)
    }

    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        Layout::horizontal([Constraint::Length(SidebarComponent::width(&app.sidebar)), Constraint::Min(10)])
            .split(area)
            .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{Terminal, backend::TestBackend};
    use uikit_identity::LocalIdentityProvider;
    use uikit_util::{AppConfig, UserPreferences};

    use super::*;
    use crate::app::Shell;

    fn sidebar_app() -> App {
        App::new(
            Shell::Sidebar,
            &AppConfig::new(Some("pk_test_demo"), None, None).expect("config"),
            Arc::new(LocalIdentityProvider::new("pk_test_demo")),
            Arc::new(UserPreferences::ephemeral()),
        )
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_labels_and_active_entry() {
        let mut app = sidebar_app();
        let mut shell = SidebarShellComponent::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
        terminal.draw(|frame| shell.render(frame, frame.area(), &mut app)).expect("draw");
        let text = screen_text(&terminal);
        assert!(text.contains("Statistics"));
        assert!(text.contains("John Doe"));
        assert!(text.contains("Main Content"));
        assert_eq!(app.sidebar.per_item_areas.len(), 8);
    }

    #[test]
    fn collapsed_rail_hides_labels_but_shows_tooltip_for_hovered_item() {
        let mut app = sidebar_app();
        app.sidebar.toggle_expansion();
        let mut shell = SidebarShellComponent::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
        terminal.draw(|frame| shell.render(frame, frame.area(), &mut app)).expect("draw");
        let text = screen_text(&terminal);
        assert!(!text.contains("Inventory"));
        assert!(text.contains("Dashboard"), "active item is described while collapsed");

        app.sidebar.hovered_index = Some(3);
        terminal.draw(|frame| shell.render(frame, frame.area(), &mut app)).expect("draw");
        assert!(screen_text(&terminal).contains("Inventory"));
    }
}
