use ratatui::{buffer::Buffer, layout::Rect, text::Span, widgets::Widget};
use unicode_width::UnicodeWidthStr;
use uikit_types::BadgeVariant;

use crate::ui::theme::{Theme, theme_helpers as th};

/// Compact pill label.
pub struct Badge<'a> {
    theme: &'a dyn Theme,
    variant: BadgeVariant,
    label: &'a str,
}

impl<'a> Badge<'a> {
    pub fn new(theme: &'a dyn Theme, variant: BadgeVariant, label: &'a str) -> Self {
        Self { theme, variant, label }
    }

    /// Columns the badge occupies, padding included.
    pub fn width(&self) -> u16 {
        u16::try_from(self.label.width() + 2).unwrap_or(u16::MAX)
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(format!(" {} ", self.label), th::badge_style(self.theme, self.variant))
    }
}

impl Widget for Badge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_span(area.x, area.y, &self.span(), area.width);
    }
}
