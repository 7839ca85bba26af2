use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{Theme, theme_helpers as th};

/// Underlined tab headers. The caller owns the selected index.
pub struct TabBar<'a> {
    theme: &'a dyn Theme,
    titles: &'a [&'a str],
    selected: usize,
    focused: bool,
}

impl<'a> TabBar<'a> {
    pub fn new(theme: &'a dyn Theme, titles: &'a [&'a str], selected: usize) -> Self {
        Self {
            theme,
            titles,
            selected,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Header cells in the same order as `titles`, for mouse hit testing.
    ///
    /// Mirrors the layout of ratatui's `Tabs`: one column of padding on each
    /// side of a title and a one-column divider between headers.
    pub fn title_areas(area: Rect, titles: &[&str]) -> Vec<Rect> {
        let mut x = area.x;
        let mut areas = Vec::with_capacity(titles.len());
        for title in titles {
            let width = u16::try_from(title.width()).unwrap_or(u16::MAX).saturating_add(2);
            if x >= area.right() {
                break;
            }
            areas.push(Rect::new(x, area.y, width.min(area.right() - x), 1));
            x = x.saturating_add(width + 1);
        }
        areas
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Span<'_>> = self.titles.iter().map(|title| Span::raw(*title)).collect();
        let mut tabs = th::tabs(self.theme, titles, self.selected).divider("│");
        if self.focused {
            tabs = tabs.highlight_style(self.theme.selection_style().add_modifier(Modifier::BOLD));
        }
        tabs.render(Rect::new(area.x, area.y, area.width, area.height.min(1)), buf);
        if area.height > 1 {
            let rule = "─".repeat(usize::from(area.width));
            buf.set_line(area.x, area.y + 1, &Line::styled(rule, self.theme.border_style(false)), area.width);
        }
    }
}
