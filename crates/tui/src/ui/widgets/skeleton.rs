use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Widget},
};

use crate::ui::theme::Theme;

/// Placeholder card shown while content loads: a title bar and three text
/// bars that pulse with the animation frame.
pub struct SkeletonCard<'a> {
    theme: &'a dyn Theme,
    frame: usize,
}

impl<'a> SkeletonCard<'a> {
    pub fn new(theme: &'a dyn Theme, frame: usize) -> Self {
        Self { theme, frame }
    }
}

impl Widget for SkeletonCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let roles = self.theme.roles();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(false))
            .style(Style::default().bg(roles.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        let bright = self.frame % 10 < 5;
        let bar = Style::default().bg(if bright { roles.skeleton } else { roles.surface_muted });
        // Title bar at 75% width, then full / full / 80% body lines.
        let widths = [75u16, 100, 100, 80];
        for (row, percent) in widths.iter().enumerate() {
            let y = inner.y + u16::try_from(row * 2).unwrap_or(u16::MAX);
            if y >= inner.bottom() {
                break;
            }
            let width = inner.width.saturating_mul(*percent) / 100;
            buf.set_style(Rect::new(inner.x, y, width, 1), bar);
        }
    }
}
