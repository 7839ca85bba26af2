use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;
use uikit_types::TooltipPosition;

use crate::ui::theme::Theme;

/// Small bordered label drawn next to an anchor.
pub struct Tooltip<'a> {
    theme: &'a dyn Theme,
    text: &'a str,
}

impl<'a> Tooltip<'a> {
    pub fn new(theme: &'a dyn Theme, text: &'a str) -> Self {
        Self { theme, text }
    }

    /// Where a tooltip with `text` goes relative to `anchor`, clamped to `bounds`.
    pub fn placement(anchor: Rect, text: &str, position: TooltipPosition, bounds: Rect) -> Rect {
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX).saturating_add(4);
        let height = 3u16;
        let center_x = anchor.x + anchor.width / 2;
        let center_y = anchor.y + anchor.height / 2;
        let (x, y) = match position {
            TooltipPosition::Top => (center_x.saturating_sub(width / 2), anchor.y.saturating_sub(height)),
            TooltipPosition::Bottom => (center_x.saturating_sub(width / 2), anchor.bottom()),
            TooltipPosition::Left => (anchor.x.saturating_sub(width), center_y.saturating_sub(1)),
            TooltipPosition::Right => (anchor.right(), center_y.saturating_sub(1)),
        };
        let width = width.min(bounds.width);
        let height = height.min(bounds.height);
        let x = x.clamp(bounds.x, bounds.right().saturating_sub(width));
        let y = y.clamp(bounds.y, bounds.bottom().saturating_sub(height));
        Rect::new(x, y, width, height)
    }
}

impl Widget for Tooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let style = self.theme.selection_style();
        Paragraph::new(self.text)
            .centered()
            .style(style)
            .block(Block::bordered().border_type(BorderType::Rounded).border_style(style))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_sits_beside_anchor_and_stays_in_bounds() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(30, 10, 10, 3);
        let top = Tooltip::placement(anchor, "hint", TooltipPosition::Top, bounds);
        assert_eq!(top, Rect::new(31, 7, 8, 3));
        let bottom = Tooltip::placement(anchor, "hint", TooltipPosition::Bottom, bounds);
        assert_eq!(bottom.y, 13);
        let left = Tooltip::placement(Rect::new(2, 10, 4, 3), "hint", TooltipPosition::Left, bounds);
        assert_eq!(left.x, 0);
    }
}
