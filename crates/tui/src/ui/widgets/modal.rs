use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::ui::theme::{Theme, theme_helpers as th};

/// Dialog frame with a title and body text. Buttons are drawn by the owner
/// into [`Modal::footer_area`] so it can track focus and hit areas.
pub struct Modal<'a> {
    theme: &'a dyn Theme,
    title: &'a str,
    body: &'a str,
}

impl<'a> Modal<'a> {
    pub fn new(theme: &'a dyn Theme, title: &'a str, body: &'a str) -> Self {
        Self { theme, title, body }
    }

    fn regions(area: Rect) -> [Rect; 2] {
        let inner = Block::bordered().inner(area);
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(inner)
    }

    /// Row reserved for the dialog's buttons.
    pub fn footer_area(area: Rect) -> Rect {
        Self::regions(area)[1]
    }
}

impl Widget for Modal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(true))
            .title(self.title)
            .title_style(self.theme.heading_style())
            .style(th::panel_style(self.theme));
        block.render(area, buf);
        let [body, _] = Self::regions(area);
        Paragraph::new(self.body)
            .wrap(Wrap { trim: true })
            .style(self.theme.text_secondary_style())
            .render(body, buf);
    }
}
