use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Text,
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::ui::theme::{Theme, theme_helpers as th};

/// Bordered surface with an optional title and free-form body.
pub struct Card<'a> {
    theme: &'a dyn Theme,
    title: Option<&'a str>,
    body: Text<'a>,
    focused: bool,
}

impl<'a> Card<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self {
            theme,
            title: None,
            body: Text::default(),
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn body(mut self, body: impl Into<Text<'a>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Area left for content once the border is drawn, for callers that
    /// render their own widgets inside the card.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }

    fn block(&self) -> Block<'a> {
        th::block(self.theme, self.title, self.focused)
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        Paragraph::new(self.body)
            .wrap(Wrap { trim: false })
            .style(th::panel_style(self.theme))
            .block(block)
            .render(area, buf);
    }
}
