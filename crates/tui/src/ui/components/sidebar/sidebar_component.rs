use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use uikit_types::{Effect, Msg};

use super::{SidebarItemProps, SidebarState};
use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::contains;

/// Rail width while expanded.
pub const EXPANDED_WIDTH: u16 = 26;
/// Rail width while collapsed: icon column only.
pub const COLLAPSED_WIDTH: u16 = 8;

const USER_NAME: &str = "John Doe";
const USER_EMAIL: &str = "johndoe@gmail.com";
const LOGO: &str = "◆ logoipsum";

/// One rail entry drawn from its props; knows nothing about the container.
pub struct SidebarItemView<'a> {
    props: SidebarItemProps<'a>,
    theme: &'a dyn Theme,
}

impl<'a> SidebarItemView<'a> {
    pub fn new(props: SidebarItemProps<'a>, theme: &'a dyn Theme) -> Self {
        Self { props, theme }
    }
}

impl Widget for SidebarItemView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let roles = self.theme.roles();
        let SidebarItemProps {
            item,
            is_active,
            is_expanded,
            is_focused,
        } = self.props;
        let style = if is_active {
            Style::default().bg(roles.accent_primary).fg(roles.text_on_accent)
        } else if is_focused {
            Style::default().bg(roles.surface_muted).fg(roles.text)
        } else {
            Style::default().fg(roles.text_secondary)
        };
        buf.set_style(area, style);

        let mut spans = vec![Span::raw("  "), Span::raw(item.icon.as_str())];
        if is_expanded {
            spans.push(Span::raw("  "));
            spans.push(Span::raw(item.label.as_str()));
        }
        let line = Line::from(spans).style(if is_focused { style.add_modifier(Modifier::BOLD) } else { style });
        buf.set_line(area.x, area.y, &line, area.width);

        if is_focused {
            buf.set_string(area.x, area.y, "▌", Style::default().fg(roles.focus));
        }
        if item.is_alert_flagged && area.width > 2 {
            buf.set_string(area.right() - 2, area.y, "●", Style::default().fg(roles.error));
        }
    }
}

/// The rail itself: header with logo and collapse toggle, the items, and
/// the user card.
#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    pub fn width(state: &SidebarState) -> u16 {
        if state.is_expanded() { EXPANDED_WIDTH } else { COLLAPSED_WIDTH }
    }

    fn activate_focused(app: &App) -> Vec<Effect> {
        let state = &app.sidebar;
        if state.toggle_focus.get() {
            return vec![Effect::SendMsg(Msg::SidebarToggled)];
        }
        state
            .focused_index()
            .and_then(|index| state.items().get(index))
            .map(|item| vec![Effect::SendMsg(Msg::SidebarItemSelected(item.label.clone()))])
            .unwrap_or_default()
    }

    /// One row per item, with a blank row between entries when there is room.
    fn item_rows(area: Rect, count: usize) -> Vec<Rect> {
        let count16 = u16::try_from(count).unwrap_or(u16::MAX);
        let spacing: u16 = if area.height >= count16.saturating_mul(2) { 1 } else { 0 };
        Layout::vertical(vec![Constraint::Length(1); count])
            .spacing(spacing)
            .split(area)
            .to_vec()
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, theme: &dyn Theme, expanded: bool) {
        let roles = theme.roles();
        let block = Block::default().borders(Borders::TOP).border_style(Style::default().fg(roles.divider));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let avatar_style = Style::default().bg(roles.surface_muted).fg(roles.text).add_modifier(Modifier::BOLD);
        let mut first = vec![Span::raw(" "), Span::styled(" JD ", avatar_style)];
        let mut second = vec![Span::raw(" "), Span::styled("    ", avatar_style)];
        if expanded {
            first.push(Span::styled(format!(" {USER_NAME}"), theme.heading_style()));
            second.push(Span::styled(format!(" {USER_EMAIL}"), theme.text_muted_style()));
        }
        frame.render_widget(Paragraph::new(vec![Line::from(first), Line::from(second)]), inner);
        if expanded && inner.width > 2 {
            let more = Rect::new(inner.right() - 2, inner.y, 1, 1);
            frame.render_widget(Paragraph::new("⋮").style(theme.text_muted_style()), more);
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Down => {
                if let Some(flag) = app.sidebar.cycle_focus(true) {
                    app.focus.focus(&flag);
                }
                Vec::new()
            }
            KeyCode::Up => {
                if let Some(flag) = app.sidebar.cycle_focus(false) {
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
        let hit = {
            let state = &app.sidebar;
            find_target_index_by_mouse_position(&state.last_area, &state.per_item_areas, column, row)
        };
        match mouse.kind {
            MouseEventKind::Moved => {
                app.sidebar.hovered_index = hit;
                Vec::new()
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if contains(app.sidebar.toggle_area, column, row) {
                    let flag = app.sidebar.toggle_focus.clone();
                    app.focus.focus(&flag);
                    return vec![Effect::SendMsg(Msg::SidebarToggled)];
                }
                let Some(index) = hit else {
                    return Vec::new();
                };
                if let Some(flag) = app.sidebar.item_focus_flags.get(index).cloned() {
                    app.focus.focus(&flag);
                }
                app.sidebar
                    .items()
                    .get(index)
                    .map(|item| vec![Effect::SendMsg(Msg::SidebarItemSelected(item.label.clone()))])
                    .unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let roles = theme.roles();
        let expanded = app.sidebar.is_expanded();
        let any_focused = app.sidebar.toggle_focus.get() || app.sidebar.focused_index().is_some();

        let block = th::block(theme, None, any_focused).style(Style::default().bg(roles.surface).fg(roles.text));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = self.get_preferred_layout(app, inner);
        let (header, items_area, footer) = (layout[0], layout[1], layout[2]);

        let [logo_area, toggle_area] = Layout::horizontal([Constraint::Min(0), Constraint::Length(5)]).areas(header);
        if expanded {
            let logo_row = Rect::new(logo_area.x, logo_area.y + 1, logo_area.width, 1);
            frame.render_widget(
                Paragraph::new(format!(" {LOGO}")).style(theme.accent_emphasis_style()),
                logo_row,
            );
        }
        let chevron = if expanded { "«" } else { "»" };
        th::render_button(
            frame,
            toggle_area,
            chevron,
            theme,
            th::ButtonRenderOptions::variant(uikit_types::ButtonVariant::Secondary, app.sidebar.toggle_focus.get()),
        );

        let rows = Self::item_rows(items_area, app.sidebar.items().len());
        for (props, row) in app.sidebar.item_props().into_iter().zip(rows.iter()) {
            frame.render_widget(SidebarItemView::new(props, theme), *row);
        }

        self.render_footer(frame, footer, theme, expanded);

        app.sidebar.last_area = area;
        app.sidebar.toggle_area = toggle_area;
        app.sidebar.per_item_areas = rows;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" Enter", " Select "), (" ↑/↓", " Navigate "), (" Ctrl+B", " Collapse ")],
        )
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(3), // Logo + toggle
            Constraint::Min(1),    // Items
            Constraint::Length(3), // User card
        ])
        .split(area)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use ratatui::buffer::Buffer;
    use uikit_types::NavigationItem;

    use super::*;
    use crate::ui::theme::dark::DarkTheme;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn item_view_hides_label_when_collapsed() {
        let theme = DarkTheme::default();
        let item = NavigationItem::new("◫", "Dashboard").flagged();
        let area = Rect::new(0, 0, 20, 1);

        let mut buf = Buffer::empty(area);
        let props = SidebarItemProps {
            item: &item,
            is_active: true,
            is_expanded: true,
            is_focused: false,
        };
        SidebarItemView::new(props, &theme).render(area, &mut buf);
        let text = row_text(&buf, 0);
        assert!(text.contains("Dashboard"));
        assert!(text.contains('●'));
        assert_eq!(buf[(5, 0)].bg, theme.roles().accent_primary);

        let mut buf = Buffer::empty(area);
        SidebarItemView::new(
            SidebarItemProps {
                is_expanded: false,
                is_active: false,
                ..props
            },
            &theme,
        )
        .render(area, &mut buf);
        assert!(!row_text(&buf, 0).contains("Dashboard"));
    }

    #[test]
    fn rows_use_spacing_only_when_room() {
        let tall = SidebarComponent::item_rows(Rect::new(0, 0, 10, 16), 8);
        assert_eq!(tall[1].y, 2);
        let short = SidebarComponent::item_rows(Rect::new(0, 0, 10, 9), 8);
        assert_eq!(short[1].y, 1);
    }
}
