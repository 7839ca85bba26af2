use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::widgets::Card;

/// Landing view of the dashboard: a title and a "Statistics" card.
#[derive(Debug, Default)]
pub struct DashboardHomeComponent;

impl Component for DashboardHomeComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let [title_area, _, cards_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Length(7)]).areas(rect);
        frame.render_widget(Paragraph::new(Span::styled("Dashboard", theme.heading_style())), title_area);

        let [stats_area, _, _] = Layout::horizontal([Constraint::Fill(1); 3]).spacing(2).areas(cards_area);
        let greeting = app
            .ctx
            .user()
            .map(|user| format!("Signed in as {}", user.display_name()))
            .unwrap_or_default();
        let body = Line::from(Span::styled(greeting, theme.text_muted_style()));
        frame.render_widget(Card::new(theme).title(" Statistics ").body(body), stats_area);
    }
}
