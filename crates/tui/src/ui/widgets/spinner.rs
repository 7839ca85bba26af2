use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::Theme;

pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Centered throbber with an optional label.
pub struct Spinner<'a> {
    theme: &'a dyn Theme,
    frame: usize,
    label: Option<&'a str>,
}

impl<'a> Spinner<'a> {
    pub fn new(theme: &'a dyn Theme, frame: usize) -> Self {
        Self { theme, frame, label: None }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn symbol(frame: usize) -> &'static str {
        FRAMES[frame % FRAMES.len()]
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(Self::symbol(self.frame), self.theme.accent_emphasis_style())];
        if let Some(label) = self.label {
            spans.push(Span::styled(format!(" {label}"), self.theme.text_muted_style()));
        }
        let middle = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center).render(middle, buf);
    }
}
