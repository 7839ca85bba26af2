use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use uikit_types::{AlertKind, AuthFlow, ButtonVariant, Effect, OAuthStrategy};

use super::{AuthControl, AuthField, AuthFormState};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::common::{TEXT_FIELD_HEIGHT, TextFieldOptions, render_text_field};
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::contains;
use crate::ui::widgets::{Alert, Card};

const CARD_WIDTH: u16 = 56;

/// Sign-in or sign-up page: a centered card with the form, OAuth buttons
/// and a link to the other flow.
#[derive(Debug)]
pub struct AuthComponent {
    flow: AuthFlow,
}

impl AuthComponent {
    pub fn new(flow: AuthFlow) -> Self {
        Self { flow }
    }

    fn form<'a>(&self, app: &'a App) -> &'a AuthFormState {
        match self.flow {
            AuthFlow::SignIn => &app.sign_in,
            AuthFlow::SignUp => &app.sign_up,
        }
    }

    /// Runs the control's action. Fields submit the form, like pressing
    /// Enter in a browser form.
    fn activate(&self, app: &mut App, control: AuthControl) -> Vec<Effect> {
        let form = app.form_mut(self.flow);
        match control {
            AuthControl::Field(_) | AuthControl::Submit => match form.submit() {
                Some(effect) => vec![effect],
                None => {
                    if let Some(missing) = form.first_missing_field()
                        && let Some(flag) = form.flag_for(AuthControl::Field(missing)).cloned()
                    {
                        app.focus.focus(&flag);
                    }
                    Vec::new()
                }
            },
            AuthControl::OAuth(strategy) => vec![form.start_oauth(strategy)],
            AuthControl::SwitchFlow => vec![Effect::Navigate(form.switch_path().to_string())],
        }
    }

    /// Rows of fields: sign-up puts first and last name side by side.
    fn field_rows(&self) -> Vec<Vec<AuthField>> {
        match self.flow {
            AuthFlow::SignIn => vec![vec![AuthField::Email], vec![AuthField::Password]],
            AuthFlow::SignUp => vec![
                vec![AuthField::FirstName, AuthField::LastName],
                vec![AuthField::Email],
                vec![AuthField::Password],
            ],
        }
    }

    fn render_divider(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        frame.render_widget(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.roles().divider)),
            Rect::new(area.x, area.y, area.width, 1),
        );
        let label = " Or continue with ";
        let width = u16::try_from(label.len()).unwrap_or(0).min(area.width);
        let [centered] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(area);
        frame.render_widget(Paragraph::new(label).style(theme.text_muted_style()), centered);
    }
}

impl Component for AuthComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let focused = self.form(app).focused_control();
        match key.code {
            KeyCode::Down => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::Up => {
                app.focus.prev();
                Vec::new()
            }
            KeyCode::Enter => focused.map(|control| self.activate(app, control)).unwrap_or_default(),
            _ => {
                if let Some(AuthControl::Field(field)) = focused {
                    app.form_mut(self.flow).input_mut(field).handle_key(key);
                }
                Vec::new()
            }
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let form = self.form(app);
        let hit = form
            .per_item_areas
            .iter()
            .position(|area| contains(*area, mouse.column, mouse.row))
            .and_then(|index| form.controls.get(index).cloned());
        let Some((control, flag)) = hit else {
            return Vec::new();
        };
        app.focus.focus(&flag);
        match control {
            AuthControl::Field(_) => Vec::new(),
            other => self.activate(app, other),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let form = self.form(app);
        let rows = self.field_rows();
        let error = form.error();

        let fields_height = TEXT_FIELD_HEIGHT * u16::try_from(rows.len()).unwrap_or(0);
        let error_height = if error.is_some() { Alert::HEIGHT } else { 0 };
        // error, fields, gap, submit, gap, divider, gap, oauth, gap, switch
        let body_height = error_height + fields_height + 1 + 3 + 1 + 1 + 1 + 3 + 1 + 1;
        let card_height = body_height + 2;

        let [title_area, card_area] = Layout::vertical([Constraint::Length(2), Constraint::Length(card_height)])
            .flex(Flex::Center)
            .areas(rect);
        let [title_area] = Layout::horizontal([Constraint::Length(CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(title_area);
        let [card_area] = Layout::horizontal([Constraint::Length(CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(card_area);

        frame.render_widget(
            Paragraph::new(Span::styled(form.title(), theme.heading_style().add_modifier(Modifier::UNDERLINED)))
                .centered(),
            title_area,
        );

        let card = Card::new(theme);
        let inner = card.inner(card_area).inner(ratatui::layout::Margin::new(2, 0));
        frame.render_widget(card, card_area);

        let [alert_area, fields_area, _, submit_area, _, divider_area, _, oauth_area, _, switch_area] =
            Layout::vertical([
                Constraint::Length(error_height),
                Constraint::Length(fields_height),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        if let Some(message) = error {
            frame.render_widget(Alert::new(theme, AlertKind::Error, message), alert_area);
        }

        let mut field_areas: Vec<(AuthField, Rect)> = Vec::new();
        let row_areas = Layout::vertical(vec![Constraint::Length(TEXT_FIELD_HEIGHT); rows.len()]).split(fields_area);
        for (row, row_area) in rows.iter().zip(row_areas.iter()) {
            let columns = Layout::horizontal(vec![Constraint::Fill(1); row.len()])
                .spacing(2)
                .split(*row_area);
            for (field, area) in row.iter().zip(columns.iter()) {
                let focused = form.focused_field() == Some(*field);
                let options = TextFieldOptions {
                    label: field.label(),
                    placeholder: field.placeholder(self.flow),
                    secret: field.is_secret(),
                    focused,
                };
                let box_area = render_text_field(frame, *area, theme, form.input(*field), options);
                field_areas.push((*field, box_area));
            }
        }

        let submit_focused = form.focused_control() == Some(AuthControl::Submit);
        th::render_button(
            frame,
            submit_area,
            form.submit_label(),
            theme,
            th::ButtonRenderOptions::new(!form.is_submitting(), submit_focused, false, Borders::ALL, ButtonVariant::Primary),
        );

        Self::render_divider(frame, divider_area, app);

        let [google_area, github_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).spacing(2).areas(oauth_area);
        for (strategy, area) in [(OAuthStrategy::Google, google_area), (OAuthStrategy::GitHub, github_area)] {
            let focused = form.focused_control() == Some(AuthControl::OAuth(strategy));
            th::render_button(
                frame,
                area,
                strategy.label(),
                theme,
                th::ButtonRenderOptions::variant(ButtonVariant::Outline, focused),
            );
        }

        let (prompt, link) = form.switch_prompt();
        let link_focused = form.focused_control() == Some(AuthControl::SwitchFlow);
        let mut link_style = theme.accent_emphasis_style();
        if link_focused {
            link_style = link_style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }
        let prompt_line = Line::from(vec![
            Span::styled(format!("{prompt} "), theme.text_secondary_style()),
            Span::styled(link, link_style),
        ]);
        let prompt_width = u16::try_from(prompt.len() + 1 + link.len()).unwrap_or(0).min(switch_area.width);
        let link_width = u16::try_from(link.len()).unwrap_or(0);
        let [prompt_area] = Layout::horizontal([Constraint::Length(prompt_width)])
            .flex(Flex::Center)
            .areas(switch_area);
        frame.render_widget(Paragraph::new(prompt_line), prompt_area);
        let link_area = Rect::new(
            prompt_area.right().saturating_sub(link_width),
            prompt_area.y,
            link_width.min(prompt_area.width),
            1,
        );

        let per_item_areas: Vec<Rect> = form
            .controls
            .iter()
            .map(|(control, _)| match control {
                AuthControl::Field(field) => field_areas
                    .iter()
                    .find(|(f, _)| f == field)
                    .map(|(_, area)| *area)
                    .unwrap_or_default(),
                AuthControl::Submit => submit_area,
                AuthControl::OAuth(OAuthStrategy::Google) => google_area,
                AuthControl::OAuth(OAuthStrategy::GitHub) => github_area,
                AuthControl::SwitchFlow => link_area,
            })
            .collect();

        let form = app.form_mut(self.flow);
        form.last_area = card_area;
        form.per_item_areas = per_item_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" Enter", " Submit "), (" Tab/↑↓", " Move "), (" Ctrl+T", " Theme ")],
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use uikit_identity::LocalIdentityProvider;
    use uikit_types::Msg;
    use uikit_util::{AppConfig, UserPreferences};

    use super::*;
    use crate::app::Shell;

    fn app_at(path: &str) -> App {
        let mut app = App::new(
            Shell::Dashboard,
            &AppConfig::new(Some("pk_test_demo"), Some(path), None).expect("config"),
            Arc::new(LocalIdentityProvider::new("pk_test_demo")),
            Arc::new(UserPreferences::ephemeral()),
        );
        app.update(&Msg::SessionLoaded(None));
        app.navigate(path);
        app.focus = rat_focus::FocusBuilder::build_for(&app);
        app
    }

    fn focus_control(app: &mut App, flow: AuthFlow, control: AuthControl) {
        let flag = match flow {
            AuthFlow::SignIn => app.sign_in.flag_for(control).cloned(),
            AuthFlow::SignUp => app.sign_up.flag_for(control).cloned(),
        }
        .expect("control flag");
        app.focus.focus(&flag);
    }

    fn type_text(component: &mut AuthComponent, app: &mut App, text: &str) {
        for c in text.chars() {
            component.handle_key_events(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn typing_and_enter_submit_sign_in() {
        let mut app = app_at("/sign-in");
        let mut component = AuthComponent::new(AuthFlow::SignIn);

        focus_control(&mut app, AuthFlow::SignIn, AuthControl::Field(AuthField::Email));
        type_text(&mut component, &mut app, "john@example.com");
        focus_control(&mut app, AuthFlow::SignIn, AuthControl::Field(AuthField::Password));
        type_text(&mut component, &mut app, "password123");

        let effects = component.handle_key_events(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            effects,
            vec![Effect::SignIn {
                email: "john@example.com".into(),
                password: "password123".into()
            }]
        );
        assert!(app.sign_in.is_submitting());
    }

    #[test]
    fn enter_with_blank_field_moves_focus_to_it() {
        let mut app = app_at("/sign-up");
        let mut component = AuthComponent::new(AuthFlow::SignUp);
        focus_control(&mut app, AuthFlow::SignUp, AuthControl::Submit);
        let effects = component.handle_key_events(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(effects.is_empty());
        assert_eq!(app.sign_up.focused_field(), Some(AuthField::FirstName));
    }

    #[test]
    fn switch_link_and_oauth_buttons_emit_effects() {
        let mut app = app_at("/sign-in");
        let mut component = AuthComponent::new(AuthFlow::SignIn);
        focus_control(&mut app, AuthFlow::SignIn, AuthControl::SwitchFlow);
        let effects = component.handle_key_events(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(effects, vec![Effect::Navigate("/sign-up".into())]);

        focus_control(&mut app, AuthFlow::SignIn, AuthControl::OAuth(OAuthStrategy::GitHub));
        let effects = component.handle_key_events(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            effects,
            vec![Effect::OAuth {
                flow: AuthFlow::SignIn,
                strategy: OAuthStrategy::GitHub
            }]
        );
    }

    #[test]
    fn renders_error_and_records_control_areas() {
        let mut app = app_at("/sign-in");
        app.sign_in.fail(AuthFlow::SignIn.failure_message());
        let mut component = AuthComponent::new(AuthFlow::SignIn);
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).expect("terminal");
        terminal.draw(|frame| component.render(frame, frame.area(), &mut app)).expect("draw");
        let text: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Welcome Back"));
        assert!(text.contains("Invalid email or password"));
        assert!(text.contains("Or continue with"));
        assert!(text.contains("Don't have an account?"));
        assert_eq!(app.sign_in.per_item_areas.len(), app.sign_in.controls.len());
        assert!(app.sign_in.per_item_areas.iter().all(|area| area.width > 0));
    }
}
