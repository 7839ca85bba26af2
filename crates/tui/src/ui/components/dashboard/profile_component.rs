use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::widgets::Card;

/// Current user's name, email and sign-in method.
#[derive(Debug, Default)]
pub struct ProfileComponent;

impl ProfileComponent {
    fn method_label(method: &str) -> &str {
        match method {
            "password" => "Email and password",
            "oauth_google" => "Google",
            "oauth_github" => "GitHub",
            other => other,
        }
    }
}

impl Component for ProfileComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let [title_area, _, card_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Length(8)]).areas(rect);
        frame.render_widget(Paragraph::new(Span::styled("Profile", theme.heading_style())), title_area);

        let Some(session) = app.ctx.auth.session.as_ref() else {
            frame.render_widget(Paragraph::new("No active session").style(theme.text_muted_style()), card_area);
            return;
        };
        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<14}"), theme.text_secondary_style()),
                Span::styled(value, theme.text_primary_style()),
            ])
        };
        let body = vec![
            row("Name", session.user.display_name()),
            row("Email", session.user.email.clone()),
            row("Signed in with", Self::method_label(&session.method).to_string()),
            row("Session since", session.created_at.format("%Y-%m-%d %H:%M UTC").to_string()),
        ];
        let [card_area, _] = Layout::horizontal([Constraint::Max(64), Constraint::Min(0)]).areas(card_area);
        frame.render_widget(Card::new(theme).title(" Account ").body(body), card_area);
    }
}
