use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use uikit_types::{ButtonVariant, Effect};

use super::sections::{render_section, tooltip_text};
use super::{CAROUSEL_SLIDES, DEMO_TABS, GalleryControl, GallerySection};
use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::{centered_fixed, contains};
use crate::ui::widgets::{Carousel, Modal, TabBar, Tooltip};

const TITLE: &str = "Modern UI Component Library";
const SUBTITLE: &str = "Every widget below is drawn with the active theme. Switch sections to explore.";
const MODAL_TITLE: &str = " Example Modal ";
const MODAL_BODY: &str = "This is an example modal dialog. You can add any content here.";
const SCENE_STEP: f64 = 0.2;

/// Showcase of every presentational widget, one section at a time.
#[derive(Debug, Default)]
pub struct GalleryComponent;

impl GalleryComponent {
    fn section_titles() -> Vec<&'static str> {
        GallerySection::ALL.iter().map(|section| section.title()).collect()
    }

    fn focus_control(app: &mut App, control: GalleryControl) {
        if let Some(flag) = app.gallery.flag_for(control).cloned() {
            app.focus.focus(&flag);
        }
    }

    /// Switches section and keeps focus on the section bar.
    fn change_section(app: &mut App, change: impl FnOnce(&mut App)) {
        change(app);
        let flag = app.gallery.flag_for(GalleryControl::SectionBar).cloned();
        app.refocus(flag.as_ref());
    }

    fn change_tab(app: &mut App, change: impl FnOnce(&mut App)) {
        change(app);
        let flag = app.gallery.flag_for(GalleryControl::DemoTabs).cloned();
        app.refocus(flag.as_ref());
    }

    fn open_modal(app: &mut App) {
        app.gallery.modal.open();
        let flag = app.gallery.modal.cancel_focus.clone();
        app.refocus(Some(&flag));
    }

    fn close_modal(app: &mut App) {
        app.gallery.modal.close();
        let flag = app.gallery.flag_for(GalleryControl::OpenModal).cloned();
        app.refocus(flag.as_ref());
    }

    /// Enter/Space on a control.
    fn activate(app: &mut App, control: GalleryControl) {
        match control {
            GalleryControl::ToggleLoading => app.gallery.toggle_loading(),
            GalleryControl::OpenModal => Self::open_modal(app),
            GalleryControl::EmailNotifications | GalleryControl::PushNotifications => {
                app.gallery.toggle_notification(control)
            }
            GalleryControl::Select => app.gallery.cycle_select(true),
            GalleryControl::Carousel => app.gallery.carousel.next(Instant::now()),
            GalleryControl::SectionBar => Self::change_section(app, |app| app.gallery.cycle_section(true)),
            GalleryControl::DemoTabs => Self::change_tab(app, |app| app.gallery.cycle_tab(true)),
            _ => {}
        }
    }

    fn handle_modal_key(app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => Self::close_modal(app),
            KeyCode::Left | KeyCode::Right => {
                let target = if app.gallery.modal.cancel_focus.get() {
                    app.gallery.modal.confirm_focus.clone()
                } else {
                    app.gallery.modal.cancel_focus.clone()
                };
                app.focus.focus(&target);
            }
            _ => {}
        }
    }

    fn handle_modal_mouse(app: &mut App, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let modal = &app.gallery.modal;
        let on_button = contains(modal.cancel_area, mouse.column, mouse.row)
            || contains(modal.confirm_area, mouse.column, mouse.row);
        if on_button || !contains(modal.last_area, mouse.column, mouse.row) {
            Self::close_modal(app);
        }
    }

    fn control_at(app: &App, column: u16, row: u16) -> Option<GalleryControl> {
        app.gallery
            .control_areas
            .iter()
            .find(|(_, area)| contains(*area, column, row))
            .map(|(control, _)| *control)
    }

    fn area_of(app: &App, control: GalleryControl) -> Option<Rect> {
        app.gallery
            .control_areas
            .iter()
            .find(|(c, _)| *c == control)
            .map(|(_, area)| *area)
    }

    /// Clicks inside a control that has sub-targets (tabs, carousel arrows and dots).
    fn click_within(app: &mut App, control: GalleryControl, column: u16, row: u16) {
        let Some(area) = Self::area_of(app, control) else {
            return;
        };
        let now = Instant::now();
        match control {
            GalleryControl::Carousel => {
                if contains(Carousel::prev_area(area), column, row) {
                    app.gallery.carousel.prev(now);
                } else if contains(Carousel::next_area(area), column, row) {
                    app.gallery.carousel.next(now);
                } else if let Some(index) = find_target_index_by_mouse_position(&area, &app.gallery.dot_areas, column, row)
                {
                    app.gallery.carousel.go_to(index, now);
                }
            }
            GalleryControl::DemoTabs => {
                let tabs = TabBar::title_areas(area, &DEMO_TABS);
                if let Some(index) = find_target_index_by_mouse_position(&area, &tabs, column, row) {
                    Self::change_tab(app, |app| app.gallery.set_tab(index));
                }
            }
            GalleryControl::Select => app.gallery.cycle_select(true),
            GalleryControl::Scene => app.gallery.rotate_scene(SCENE_STEP),
            other if other.is_text() => {}
            other => Self::activate(app, other),
        }
    }

    fn render_header(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let lines = vec![
            Line::from(Span::styled(TITLE, theme.heading_style())),
            Line::from(Span::styled(SUBTITLE, theme.text_muted_style())),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_modal(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        frame.render_widget(Block::default().style(theme.modal_background_style()), area);
        let dialog = centered_fixed(52, 9, area);
        frame.render_widget(Modal::new(theme, MODAL_TITLE, MODAL_BODY), dialog);

        let footer = Modal::footer_area(dialog);
        let [_, cancel, confirm] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(12), Constraint::Length(13)])
                .spacing(1)
                .areas(footer);
        let modal = &app.gallery.modal;
        th::render_button(
            frame,
            cancel,
            "Cancel",
            theme,
            th::ButtonRenderOptions::variant(ButtonVariant::Outline, modal.cancel_focus.get()),
        );
        th::render_button(
            frame,
            confirm,
            "Confirm",
            theme,
            th::ButtonRenderOptions::variant(ButtonVariant::Primary, modal.confirm_focus.get()),
        );
        let modal = &mut app.gallery.modal;
        modal.last_area = dialog;
        modal.cancel_area = cancel;
        modal.confirm_area = confirm;
    }
}

impl Component for GalleryComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.gallery.modal.is_open() {
            Self::handle_modal_key(app, key);
            return Vec::new();
        }
        let Some(control) = app.gallery.focused_control() else {
            return Vec::new();
        };
        let forward = key.code == KeyCode::Right;
        match (control, key.code) {
            (_, KeyCode::Down) => {
                app.focus.next();
            }
            (_, KeyCode::Up) => {
                app.focus.prev();
            }
            (GalleryControl::SectionBar, KeyCode::Left | KeyCode::Right) => {
                Self::change_section(app, |app| app.gallery.cycle_section(forward))
            }
            (GalleryControl::DemoTabs, KeyCode::Left | KeyCode::Right) => {
                Self::change_tab(app, |app| app.gallery.cycle_tab(forward))
            }
            (GalleryControl::Select, KeyCode::Left | KeyCode::Right) => app.gallery.cycle_select(forward),
            (GalleryControl::Carousel, KeyCode::Left) => app.gallery.carousel.prev(Instant::now()),
            (GalleryControl::Carousel, KeyCode::Right) => app.gallery.carousel.next(Instant::now()),
            (GalleryControl::Carousel, KeyCode::Char(digit @ '1'..='9')) => {
                let index = digit as usize - '1' as usize;
                app.gallery.carousel.go_to(index, Instant::now());
            }
            (GalleryControl::Scene, KeyCode::Left) => app.gallery.rotate_scene(-SCENE_STEP),
            (GalleryControl::Scene, KeyCode::Right) => app.gallery.rotate_scene(SCENE_STEP),
            (control, _) if control.is_text() => {
                if let Some(input) = app.gallery.input_mut(control) {
                    input.handle_key(key);
                }
            }
            (control, KeyCode::Enter | KeyCode::Char(' ')) => Self::activate(app, control),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.gallery.modal.is_open() {
            Self::handle_modal_mouse(app, mouse);
            return Vec::new();
        }
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                app.gallery.hovered = Self::control_at(app, column, row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let section_hit = find_target_index_by_mouse_position(
                    &app.gallery.last_area,
                    &app.gallery.section_areas,
                    column,
                    row,
                );
                if let Some(index) = section_hit {
                    Self::change_section(app, |app| {
                        if let Some(section) = GallerySection::ALL.get(index) {
                            app.gallery.set_section(*section);
                        }
                    });
                    return Vec::new();
                }
                if let Some(control) = Self::control_at(app, column, row) {
                    Self::focus_control(app, control);
                    Self::click_within(app, control, column, row);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let layout = self.get_preferred_layout(app, rect);
        Self::render_header(frame, layout[0], &*app.ctx.theme);

        let titles = Self::section_titles();
        let section_index = GallerySection::ALL
            .iter()
            .position(|section| *section == app.gallery.section())
            .unwrap_or_default();
        frame.render_widget(
            TabBar::new(&*app.ctx.theme, &titles, section_index)
                .focused(app.gallery.is_focused(GalleryControl::SectionBar)),
            layout[1],
        );

        let mut areas = vec![(GalleryControl::SectionBar, layout[1])];
        areas.extend(render_section(frame, layout[2], app));

        let carousel = areas.iter().find(|(c, _)| *c == GalleryControl::Carousel).map(|(_, a)| *a);
        app.gallery.dot_areas = carousel
            .map(|area| Carousel::dot_areas(area, CAROUSEL_SLIDES.len()))
            .unwrap_or_default();
        app.gallery.section_areas = TabBar::title_areas(layout[1], &titles);
        app.gallery.control_areas = areas;
        app.gallery.last_area = rect;

        if let Some(position) = app.gallery.active_tooltip()
            && let Some(anchor) = Self::area_of(app, GalleryControl::Tooltip(position))
        {
            let text = tooltip_text(position);
            let placement = Tooltip::placement(anchor, text, position, rect);
            frame.render_widget(Tooltip::new(&*app.ctx.theme, text), placement);
        }

        if app.gallery.modal.is_open() {
            Self::render_modal(frame, rect, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        if app.gallery.modal.is_open() {
            return th::build_hint_spans(theme, &[(" Enter", " Close "), (" ←/→", " Button "), (" Esc", " Dismiss ")]);
        }
        let hints: &[(&str, &str)] = match app.gallery.focused_control() {
            Some(GalleryControl::SectionBar) => &[(" ←/→", " Section "), (" ↑/↓", " Move ")],
            Some(GalleryControl::DemoTabs) => &[(" ←/→", " Tab "), (" ↑/↓", " Move ")],
            Some(GalleryControl::Carousel) => &[(" ←/→", " Slide "), (" 1-3", " Jump ")],
            Some(GalleryControl::Scene) => &[(" ←/→", " Rotate ")],
            Some(GalleryControl::Select) => &[(" ←/→", " Choose ")],
            Some(control) if control.is_text() => &[(" Type", " Edit "), (" ↑/↓", " Move ")],
            _ => &[(" Enter", " Activate "), (" ↑/↓", " Move ")],
        };
        th::build_hint_spans(theme, hints)
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Sections
            Constraint::Min(0),    // Body
        ])
        .split(area)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use uikit_identity::LocalIdentityProvider;
    use uikit_types::{Msg, Session, TooltipPosition, UserIdentity};
    use uikit_util::{AppConfig, UserPreferences};

    use super::*;
    use crate::app::Shell;

    fn gallery_app() -> App {
        let mut app = App::new(
            Shell::Dashboard,
            &AppConfig::new(Some("pk_test_demo"), None, None).expect("config"),
            Arc::new(LocalIdentityProvider::new("pk_test_demo")),
            Arc::new(UserPreferences::ephemeral()),
        );
        let session = Session {
            id: "sess_1".into(),
            user: UserIdentity {
                id: "user_1".into(),
                first_name: "Jane".into(),
                last_name: "Roe".into(),
                email: "jane@example.com".into(),
            },
            method: "password".into(),
            created_at: Utc::now(),
        };
        app.update(&Msg::SessionLoaded(Some(session)));
        app.navigate("/dashboard/components");
        app.refocus(None);
        app
    }

    fn draw(app: &mut App) -> String {
        let mut component = GalleryComponent;
        let mut terminal = Terminal::new(TestBackend::new(110, 36)).expect("terminal");
        terminal.draw(|frame| component.render(frame, frame.area(), app)).expect("draw");
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focus(app: &mut App, control: GalleryControl) {
        GalleryComponent::focus_control(app, control);
        assert_eq!(app.gallery.focused_control(), Some(control));
    }

    #[test]
    fn first_section_shows_skeletons_then_content() {
        let mut app = gallery_app();
        let text = draw(&mut app);
        assert!(text.contains("Modern UI Component Library"));
        assert!(text.contains("Loading States"));
        assert!(!text.contains("Loaded Content"));
        app.gallery.toggle_loading();
        let text = draw(&mut app);
        assert!(text.contains("Loaded Content"));
    }

    #[test]
    fn section_bar_arrows_switch_sections() {
        let mut app = gallery_app();
        focus(&mut app, GalleryControl::SectionBar);
        let mut component = GalleryComponent;
        component.handle_key_events(&mut app, key(KeyCode::Right));
        component.handle_key_events(&mut app, key(KeyCode::Right));
        assert_eq!(app.gallery.section(), GallerySection::Feedback);
        assert_eq!(app.gallery.focused_control(), Some(GalleryControl::SectionBar));
        let text = draw(&mut app);
        assert!(text.contains("Operation completed successfully!"));
        assert!(text.contains("Completed"));
    }

    #[test]
    fn modal_opens_and_closes_with_escape() {
        let mut app = gallery_app();
        app.gallery.set_section(GallerySection::Overlays);
        app.refocus(None);
        focus(&mut app, GalleryControl::OpenModal);
        let mut component = GalleryComponent;
        component.handle_key_events(&mut app, key(KeyCode::Enter));
        assert!(app.gallery.modal.is_open());
        assert!(app.gallery.modal.cancel_focus.get());
        let text = draw(&mut app);
        assert!(text.contains("This is an example modal dialog."));
        component.handle_key_events(&mut app, key(KeyCode::Esc));
        assert!(!app.gallery.modal.is_open());
        assert_eq!(app.gallery.focused_control(), Some(GalleryControl::OpenModal));
    }

    #[test]
    fn clicking_outside_modal_dismisses_it() {
        let mut app = gallery_app();
        app.gallery.set_section(GallerySection::Overlays);
        GalleryComponent::open_modal(&mut app);
        draw(&mut app);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        GalleryComponent.handle_mouse_events(&mut app, click);
        assert!(!app.gallery.modal.is_open());
    }

    #[test]
    fn hovering_tooltip_anchor_shows_tooltip() {
        let mut app = gallery_app();
        app.gallery.set_section(GallerySection::Buttons);
        draw(&mut app);
        let anchor = GalleryComponent::area_of(&app, GalleryControl::Tooltip(TooltipPosition::Bottom)).expect("anchor");
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: anchor.x + 1,
            row: anchor.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        GalleryComponent.handle_mouse_events(&mut app, moved);
        let text = draw(&mut app);
        assert!(text.contains("Tooltip on bottom"));
    }

    #[test]
    fn text_inputs_and_select_respond_to_keys() {
        let mut app = gallery_app();
        app.gallery.set_section(GallerySection::FormControls);
        app.refocus(None);
        let mut component = GalleryComponent;
        focus(&mut app, GalleryControl::TextInput);
        component.handle_key_events(&mut app, key(KeyCode::Char('h')));
        component.handle_key_events(&mut app, key(KeyCode::Char('i')));
        assert_eq!(app.gallery.input(GalleryControl::TextInput).map(|i| i.input()), Some("hi"));
        focus(&mut app, GalleryControl::Select);
        component.handle_key_events(&mut app, key(KeyCode::Right));
        let text = draw(&mut app);
        assert!(text.contains("Option 2"));
    }

    #[test]
    fn carousel_dots_and_digits_jump() {
        let mut app = gallery_app();
        app.gallery.set_section(GallerySection::Media);
        app.refocus(None);
        draw(&mut app);
        assert_eq!(app.gallery.dot_areas.len(), CAROUSEL_SLIDES.len());
        let dot = app.gallery.dot_areas[2];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: dot.x,
            row: dot.y,
            modifiers: KeyModifiers::NONE,
        };
        GalleryComponent.handle_mouse_events(&mut app, click);
        assert_eq!(app.gallery.carousel.index(), 2);
        assert_eq!(app.gallery.focused_control(), Some(GalleryControl::Carousel));
        GalleryComponent.handle_key_events(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.gallery.carousel.index(), 0);
    }
}
