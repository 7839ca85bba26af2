use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Block, BorderType, Paragraph},
};

use super::TextInputState;
use crate::ui::theme::{Theme, theme_helpers as th};

/// Label row plus a bordered one-line box.
pub const TEXT_FIELD_HEIGHT: u16 = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextFieldOptions<'a> {
    pub label: &'a str,
    pub placeholder: &'a str,
    /// Draw one mask glyph per character.
    pub secret: bool,
    pub focused: bool,
}

/// Draws a labelled input and places the terminal cursor when focused.
///
/// Returns the box area so callers can hit-test clicks.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    theme: &dyn Theme,
    input: &TextInputState,
    options: TextFieldOptions<'_>,
) -> Rect {
    let [label_area, box_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(options.label, theme.text_secondary_style())),
        label_area,
    );

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(options.focused));
    let inner = block.inner(box_area);
    let (text, style) = if input.input().is_empty() {
        (options.placeholder.to_string(), theme.text_muted_style())
    } else if options.secret {
        (input.masked(), th::input_style(theme, true, options.focused))
    } else {
        (input.input().to_string(), th::input_style(theme, true, options.focused))
    };
    frame.render_widget(Paragraph::new(format!(" {text}")).style(style).block(block), box_area);

    if options.focused && inner.width > 0 {
        let columns = if options.secret { input.masked_cursor_columns() } else { input.cursor_columns() };
        let x = (inner.x + 1 + columns).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
    box_area
}
