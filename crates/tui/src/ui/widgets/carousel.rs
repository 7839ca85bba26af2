use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// One slide at a time with prev/next arrows and pagination dots.
///
/// Slides are image URLs; a terminal cannot show the picture, so the slide
/// shows its number over a tinted panel with the source as a caption.
pub struct Carousel<'a> {
    theme: &'a dyn Theme,
    slides: &'a [&'a str],
    index: usize,
    focused: bool,
}

impl<'a> Carousel<'a> {
    pub fn new(theme: &'a dyn Theme, slides: &'a [&'a str], index: usize) -> Self {
        Self {
            theme,
            slides,
            index,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Splits the widget into slide, prev arrow, next arrow and dots rows.
    fn regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let [body, dots] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
        let [prev, slide, next] =
            Layout::horizontal([Constraint::Length(3), Constraint::Min(1), Constraint::Length(3)]).areas(body);
        (slide, prev, next, dots)
    }

    pub fn prev_area(area: Rect) -> Rect {
        Self::regions(area).1
    }

    pub fn next_area(area: Rect) -> Rect {
        Self::regions(area).2
    }

    /// Cell of each pagination dot, centered under the slide.
    pub fn dot_areas(area: Rect, count: usize) -> Vec<Rect> {
        let dots = Self::regions(area).3;
        let count = u16::try_from(count).unwrap_or(u16::MAX);
        let width = count.saturating_mul(2).saturating_sub(1).min(dots.width);
        let start = dots.x + (dots.width - width) / 2;
        (0..count)
            .map(|index| Rect::new(start + index * 2, dots.y, 1, 1))
            .filter(|dot| dot.x < dots.right())
            .collect()
    }
}

impl Widget for Carousel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let roles = self.theme.roles();
        let (slide, prev, next, _) = Self::regions(area);
        let arrow = |enabled: bool| {
            if enabled {
                self.theme.accent_emphasis_style()
            } else {
                self.theme.text_muted_style()
            }
        };
        let middle = |rect: Rect| Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1);
        Paragraph::new("‹").alignment(Alignment::Center).style(arrow(self.index > 0)).render(middle(prev), buf);
        Paragraph::new("›")
            .alignment(Alignment::Center)
            .style(arrow(self.index + 1 < self.slides.len()))
            .render(middle(next), buf);

        let tints = [roles.accent_primary, roles.success, roles.accent_secondary];
        let tint = tints[self.index % tints.len()];
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(self.focused))
            .style(Style::default().bg(tint).fg(roles.text_on_accent));
        let inner = block.inner(slide);
        block.render(slide, buf);
        let caption = self.slides.get(self.index).copied().unwrap_or_default();
        let lines = vec![
            Line::from(Span::styled(
                format!("Slide {}", self.index + 1),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(caption),
        ];
        let top = inner.y + inner.height.saturating_sub(2) / 2;
        let text_area = Rect::new(inner.x, top, inner.width, inner.height.min(2));
        Paragraph::new(lines).alignment(Alignment::Center).render(text_area, buf);

        for (index, dot) in Self::dot_areas(area, self.slides.len()).into_iter().enumerate() {
            let (symbol, style) = if index == self.index {
                ("●", self.theme.accent_emphasis_style())
            } else {
                ("○", self.theme.text_muted_style())
            };
            buf.set_string(dot.x, dot.y, symbol, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_centered_and_spaced() {
        let area = Rect::new(0, 0, 21, 8);
        let dots = Carousel::dot_areas(area, 3);
        assert_eq!(dots.len(), 3);
        assert_eq!(dots[0], Rect::new(8, 7, 1, 1));
        assert_eq!(dots[2].x - dots[0].x, 4);
    }
}
