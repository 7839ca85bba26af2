use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};
use uikit_types::AlertKind;

use crate::ui::theme::{Theme, theme_helpers as th};

/// Single-line status banner: icon plus message on a tinted surface.
pub struct Alert<'a> {
    theme: &'a dyn Theme,
    kind: AlertKind,
    message: &'a str,
}

impl<'a> Alert<'a> {
    /// Rows needed for one line of message.
    pub const HEIGHT: u16 = 3;

    pub fn new(theme: &'a dyn Theme, kind: AlertKind, message: &'a str) -> Self {
        Self { theme, kind, message }
    }
}

impl Widget for Alert<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = th::alert_style(self.theme, self.kind);
        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.kind.icon()), style),
            Span::styled(self.message, style),
        ]);
        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .style(style)
            .block(Block::bordered().border_type(BorderType::Rounded).border_style(style))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::buffer::Buffer;

    use super::*;
    use crate::ui::theme::dark::DarkTheme;

    #[test]
    fn renders_icon_and_message() {
        let theme = DarkTheme::default();
        let area = Rect::new(0, 0, 40, Alert::HEIGHT);
        let mut buf = Buffer::empty(area);
        Alert::new(&theme, AlertKind::Success, "Saved").render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("✔ Saved"), "{row}");
        assert_eq!(buf[(1, 1)].bg, theme.roles().success_surface);
    }
}
