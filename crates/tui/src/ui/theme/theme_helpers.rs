use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Tabs},
};
use uikit_types::{AlertKind, BadgeVariant, ButtonVariant};

use super::roles::Theme;
use crate::ui::theme::roles::ThemeRoles;

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.heading_style()));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Build tabs with active/inactive styles.
pub fn tabs<'a, T: Theme + ?Sized>(theme: &T, titles: Vec<Span<'a>>, index: usize) -> Tabs<'a> {
    Tabs::new(titles)
        .select(index)
        .highlight_style(
            theme
                .accent_primary_style()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::UNDERLINED),
        )
        .style(theme.text_muted_style())
}

/// Style for input fields; caller sets the block border based on focus.
pub fn input_style<T: Theme + ?Sized>(theme: &T, valid: bool, focused: bool) -> Style {
    let ThemeRoles { surface, text, error, .. } = *theme.roles();
    let mut style = Style::default().bg(surface).fg(text);
    if !valid {
        style = style.fg(error);
    }
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Fill and text style for a button variant.
pub fn button_style<T: Theme + ?Sized>(theme: &T, variant: ButtonVariant, enabled: bool, selected: bool) -> Style {
    let roles = theme.roles();
    if !enabled {
        return Style::default().bg(roles.surface_muted).fg(roles.text_muted);
    }
    let style = match variant {
        ButtonVariant::Primary => Style::default()
            .bg(roles.accent_primary)
            .fg(roles.text_on_accent)
            .add_modifier(Modifier::BOLD),
        ButtonVariant::Secondary => Style::default().bg(roles.surface_muted).fg(roles.text),
        ButtonVariant::Outline => Style::default().fg(roles.accent_secondary),
    };
    if selected { style.bg(roles.selection_bg).fg(roles.selection_fg) } else { style }
}

/// Badge style per variant (tinted fill, readable text).
pub fn badge_style<T: Theme + ?Sized>(theme: &T, variant: BadgeVariant) -> Style {
    let roles = theme.roles();
    let (bg, fg) = match variant {
        BadgeVariant::Primary => (roles.info_surface, roles.info),
        BadgeVariant::Secondary => (roles.surface_muted, roles.text_secondary),
        BadgeVariant::Success => (roles.success_surface, roles.success),
        BadgeVariant::Danger => (roles.error_surface, roles.error),
        BadgeVariant::Warning => (roles.warning_surface, roles.warning),
    };
    Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
}

/// Banner style per alert kind.
pub fn alert_style<T: Theme + ?Sized>(theme: &T, kind: AlertKind) -> Style {
    let roles = theme.roles();
    let (bg, fg) = match kind {
        AlertKind::Success => (roles.success_surface, roles.success),
        AlertKind::Error => (roles.error_surface, roles.error),
        AlertKind::Warning => (roles.warning_surface, roles.warning),
        AlertKind::Info => (roles.info_surface, roles.info),
    };
    Style::default().bg(bg).fg(fg)
}

/// Build a list of hint spans: highlighted key followed by a muted description.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(key.to_string(), theme.accent_emphasis_style()));
        spans.push(Span::styled(description.to_string(), theme.text_muted_style()));
    }
    spans
}

/// Rendering switches for [`render_button`].
#[derive(Debug, Clone, Copy)]
pub struct ButtonRenderOptions {
    pub enabled: bool,
    pub focused: bool,
    pub selected: bool,
    pub borders: Borders,
    pub variant: ButtonVariant,
}

impl ButtonRenderOptions {
    pub fn new(enabled: bool, focused: bool, selected: bool, borders: Borders, variant: ButtonVariant) -> Self {
        Self {
            enabled,
            focused,
            selected,
            borders,
            variant,
        }
    }

    /// Bordered, enabled, unselected button of the given variant.
    pub fn variant(variant: ButtonVariant, focused: bool) -> Self {
        Self::new(true, focused, false, Borders::ALL, variant)
    }
}

/// Renders a standard button
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, options: ButtonRenderOptions) {
    let border_style = if options.enabled {
        theme.border_style(options.focused)
    } else {
        theme.text_muted_style()
    };

    // Borderless buttons get vertical breathing room only when a row is left
    // for the label.
    let padding = if options.borders.is_empty() && area.height >= 3 {
        Padding::vertical(1)
    } else {
        Padding::ZERO
    };

    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(
                Block::bordered()
                    .borders(options.borders)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .padding(padding),
            )
            .style(button_style(theme, options.variant, options.enabled, options.selected)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::ui::theme::DarkTheme;

    fn draw_button(height: u16, borders: Borders) -> String {
        let theme = DarkTheme::new();
        let mut terminal = Terminal::new(TestBackend::new(8, height)).expect("terminal");
        terminal
            .draw(|frame| {
                let options = ButtonRenderOptions::new(true, false, false, borders, ButtonVariant::Primary);
                render_button(frame, frame.area(), "JD", &theme, options);
            })
            .expect("draw");
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn borderless_button_keeps_label_in_short_areas() {
        assert!(draw_button(1, Borders::NONE).contains("JD"));
        assert!(draw_button(2, Borders::NONE).contains("JD"));
        assert!(draw_button(3, Borders::NONE).contains("JD"));
    }

    #[test]
    fn bordered_button_draws_label_inside_frame() {
        let text = draw_button(3, Borders::ALL);
        assert!(text.contains("JD"));
        assert!(text.contains("╭"));
    }
}
