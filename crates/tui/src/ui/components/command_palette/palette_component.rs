use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;
use uikit_types::{Effect, Msg};

use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::{centered_fixed, contains};

const PLACEHOLDER: &str = "Type a command or search...";
const WIDTH: u16 = 64;

/// Quick-launch overlay opened with the palette chord.
///
/// The listed commands are inert: arrows move the highlight, typing edits
/// the search text, Esc or a click outside closes the overlay.
#[derive(Debug, Default)]
pub struct CommandPaletteComponent;

impl CommandPaletteComponent {
    fn height(app: &App) -> u16 {
        let rows = u16::try_from(app.palette.visible_commands().len()).unwrap_or(u16::MAX);
        // search row + divider + list + footer + borders
        rows.saturating_add(6)
    }

    fn close() -> Vec<Effect> {
        vec![Effect::SendMsg(Msg::CommandPaletteToggled)]
    }
}

impl Component for CommandPaletteComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => return Self::close(),
            KeyCode::Down => app.palette.highlight_next(),
            KeyCode::Up => app.palette.highlight_prev(),
            _ => {
                app.palette.search_mut().handle_key(key);
            }
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if !contains(app.palette.last_area, column, row) => Self::close(),
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Moved => {
                if let Some(index) =
                    find_target_index_by_mouse_position(&app.palette.last_area, &app.palette.per_item_areas, column, row)
                {
                    app.palette.set_highlighted(index);
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let roles = theme.roles();
        let mut area = centered_fixed(WIDTH, Self::height(app), rect);
        // Sit in the upper third like a launcher rather than dead center.
        area.y = rect.y + rect.height.saturating_sub(area.height) / 4;

        frame.render_widget(Clear, area);
        let block = th::block(theme, None, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [search_area, divider_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let search = app.palette.search();
        let search_line = if search.input().is_empty() {
            Line::from(vec![
                Span::styled(" ⌕ ", theme.text_muted_style()),
                Span::styled(PLACEHOLDER, theme.text_muted_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled(" ⌕ ", theme.text_muted_style()),
                Span::styled(search.input().to_string(), theme.text_primary_style()),
            ])
        };
        frame.render_widget(Paragraph::new(search_line), search_area);
        if app.palette.search_focus.get() {
            let offset = search.cursor_columns();
            let x = (search_area.x + 3 + offset).min(search_area.right().saturating_sub(1));
            frame.set_cursor_position((x, search_area.y));
        }

        frame.render_widget(
            Block::default().borders(Borders::TOP).border_style(Style::default().fg(roles.divider)),
            divider_area,
        );

        let highlighted = app.palette.highlighted();
        let rows = Layout::vertical(vec![Constraint::Length(1); app.palette.visible_commands().len()]).split(list_area);
        for (index, (command, row)) in app.palette.visible_commands().iter().zip(rows.iter()).enumerate() {
            let style = if index == highlighted { theme.selection_style() } else { theme.text_primary_style() };
            frame.render_widget(Block::default().style(style), *row);
            let shortcut_width = u16::try_from(command.shortcut.width()).unwrap_or(0);
            let [name_area, shortcut_area] =
                Layout::horizontal([Constraint::Min(1), Constraint::Length(shortcut_width + 2)]).areas(*row);
            frame.render_widget(Paragraph::new(format!("  {}", command.name)).style(style), name_area);
            frame.render_widget(
                Paragraph::new(command.shortcut.as_str()).style(style.patch(theme.text_muted_style())),
                shortcut_area,
            );
        }

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("esc", theme.accent_emphasis_style()),
                Span::styled(" to close ", theme.text_muted_style()),
            ]))
            .right_aligned(),
            footer_area,
        );

        app.palette.last_area = area;
        app.palette.per_item_areas = rows.to_vec();
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Esc", " Close "), (" ↑/↓", " Highlight "), (" Ctrl+K", " Toggle ")])
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use uikit_identity::LocalIdentityProvider;
    use uikit_util::{AppConfig, UserPreferences};

    use super::*;
    use crate::app::Shell;

    fn app() -> App {
        let mut app = App::new(
            Shell::Dashboard,
            &AppConfig::new(Some("pk_test_demo"), None, None).expect("config"),
            Arc::new(LocalIdentityProvider::new("pk_test_demo")),
            Arc::new(UserPreferences::ephemeral()),
        );
        app.update(&Msg::CommandPaletteToggled);
        app
    }

    #[test]
    fn renders_placeholder_and_commands() {
        let mut app = app();
        let mut palette = CommandPaletteComponent;
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        terminal.draw(|frame| palette.render(frame, frame.area(), &mut app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Type a command or search..."));
        assert!(text.contains("Toggle theme"));
        assert!(text.contains("Create new..."));
        assert_eq!(app.palette.per_item_areas.len(), 4);
    }

    #[test]
    fn typing_edits_search_and_escape_closes() {
        let mut app = app();
        let mut palette = CommandPaletteComponent;
        for c in "doc".chars() {
            palette.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(app.palette.search().input(), "doc");
        palette.handle_key_events(&mut app, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(app.palette.highlighted(), 1);

        let effects = palette.handle_key_events(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(effects, vec![Effect::SendMsg(Msg::CommandPaletteToggled)]);
    }

    #[test]
    fn whitespace_search_replaces_placeholder() {
        let mut app = app();
        let mut palette = CommandPaletteComponent;
        for _ in 0..3 {
            palette.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        }
        assert_eq!(app.palette.search().input(), "   ");
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        terminal.draw(|frame| palette.render(frame, frame.area(), &mut app)).expect("draw");
        let text: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
        assert!(!text.contains(PLACEHOLDER));
    }

    #[test]
    fn click_outside_closes() {
        let mut app = app();
        app.palette.last_area = Rect::new(10, 5, 20, 8);
        let mut palette = CommandPaletteComponent;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(palette.handle_mouse_events(&mut app, click), CommandPaletteComponent::close());
    }
}
