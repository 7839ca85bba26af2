//! Drawing for each gallery section. Every function returns the areas of
//! the controls it drew so the component can hit-test clicks.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use uikit_types::{AlertKind, BadgeVariant, ButtonVariant, TooltipPosition};

use super::{CAROUSEL_SLIDES, DEMO_TABS, GalleryControl, GallerySection, SELECT_OPTIONS};
use crate::app::App;
use crate::ui::components::common::{TEXT_FIELD_HEIGHT, TextFieldOptions, render_text_field};
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::widgets::{Alert, Badge, Card, Carousel, Scene, SkeletonCard, Spinner, TabBar};

pub const ALERTS: [(AlertKind, &str); 4] = [
    (AlertKind::Success, "Operation completed successfully!"),
    (AlertKind::Error, "An error occurred. Please try again."),
    (AlertKind::Warning, "Please backup your data before continuing."),
    (AlertKind::Info, "Your session will expire in 5 minutes."),
];

pub const BADGES: [(BadgeVariant, &str); 5] = [
    (BadgeVariant::Primary, "New"),
    (BadgeVariant::Secondary, "Default"),
    (BadgeVariant::Success, "Completed"),
    (BadgeVariant::Danger, "Error"),
    (BadgeVariant::Warning, "Warning"),
];

pub fn tooltip_text(position: TooltipPosition) -> &'static str {
    match position {
        TooltipPosition::Top => "Tooltip on top",
        TooltipPosition::Bottom => "Tooltip on bottom",
        TooltipPosition::Left => "Tooltip on left",
        TooltipPosition::Right => "Tooltip on right",
    }
}

pub type ControlAreas = Vec<(GalleryControl, Rect)>;

pub fn render_section(frame: &mut Frame, area: Rect, app: &App) -> ControlAreas {
    match app.gallery.section() {
        GallerySection::LoadingStates => render_loading_states(frame, area, app),
        GallerySection::Buttons => render_buttons(frame, area, app),
        GallerySection::Feedback => {
            render_feedback(frame, area, &*app.ctx.theme);
            Vec::new()
        }
        GallerySection::Overlays => render_overlays(frame, area, app),
        GallerySection::FormControls => render_form_controls(frame, area, app),
        GallerySection::Media => render_media(frame, area, app),
    }
}

fn toggle_loading_label(app: &App) -> String {
    if app.gallery.is_loading() {
        format!("{} Loading...", Spinner::symbol(app.throbber_idx))
    } else {
        "Toggle Loading".to_string()
    }
}

fn button(frame: &mut Frame, area: Rect, app: &App, control: GalleryControl, label: &str, variant: ButtonVariant) {
    th::render_button(
        frame,
        area,
        label,
        &*app.ctx.theme,
        th::ButtonRenderOptions::variant(variant, app.gallery.is_focused(control)),
    );
}

fn render_loading_states(frame: &mut Frame, area: Rect, app: &App) -> ControlAreas {
    let theme = &*app.ctx.theme;
    let [button_row, _, cards_row] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1), Constraint::Length(9)]).areas(area);
    let [toggle_area, _] = Layout::horizontal([Constraint::Length(20), Constraint::Min(0)]).areas(button_row);
    let label = toggle_loading_label(app);
    button(frame, toggle_area, app, GalleryControl::ToggleLoading, &label, ButtonVariant::Primary);

    let cards = Layout::horizontal([Constraint::Fill(1); 3]).spacing(2).split(cards_row);
    for (index, card_area) in cards.iter().enumerate() {
        if app.gallery.is_loading() {
            frame.render_widget(SkeletonCard::new(theme, app.throbber_idx), *card_area);
        } else {
            let body = vec![
                Line::default(),
                Line::from(Span::styled(
                    format!("Card {} finished loading.", index + 1),
                    theme.text_secondary_style(),
                )),
            ];
            frame.render_widget(Card::new(theme).title(" Loaded Content ").body(body), *card_area);
        }
    }
    vec![(GalleryControl::ToggleLoading, toggle_area)]
}

fn render_buttons(frame: &mut Frame, area: Rect, app: &App) -> ControlAreas {
    let [variants_row, _, tooltip_label, _, tooltip_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(3),
    ])
    .areas(area);

    let toggle_label = toggle_loading_label(app);
    let buttons = [
        (GalleryControl::PrimaryButton, "Primary Button", ButtonVariant::Primary),
        (GalleryControl::SecondaryButton, "Secondary Button", ButtonVariant::Secondary),
        (GalleryControl::OutlineButton, "Outline Button", ButtonVariant::Outline),
        (GalleryControl::ToggleLoading, toggle_label.as_str(), ButtonVariant::Primary),
    ];
    let slots = Layout::horizontal([Constraint::Length(20); 4]).spacing(2).split(variants_row);
    let mut areas = Vec::new();
    for ((control, label, variant), slot) in buttons.iter().zip(slots.iter()) {
        button(frame, *slot, app, *control, label, *variant);
        areas.push((*control, *slot));
    }

    frame.render_widget(
        Paragraph::new(Span::styled("Tooltips", app.ctx.theme.heading_style())),
        tooltip_label,
    );
    // Left-anchored tooltip needs room on its left side.
    let [_, tooltip_row] = Layout::horizontal([Constraint::Length(20), Constraint::Min(0)]).areas(tooltip_row);
    let anchors = [
        (TooltipPosition::Top, "Hover me (top)"),
        (TooltipPosition::Bottom, "Hover me (bottom)"),
        (TooltipPosition::Left, "Hover me (left)"),
    ];
    let slots = Layout::horizontal([Constraint::Length(20); 3]).spacing(4).split(tooltip_row);
    for ((position, label), slot) in anchors.iter().zip(slots.iter()) {
        let control = GalleryControl::Tooltip(*position);
        button(frame, *slot, app, control, label, ButtonVariant::Secondary);
        areas.push((control, *slot));
    }
    areas
}

fn render_feedback(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
    let mut constraints = vec![Constraint::Length(Alert::HEIGHT); ALERTS.len()];
    constraints.extend([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)]);
    let rows = Layout::vertical(constraints).split(area);
    for ((kind, message), row) in ALERTS.iter().zip(rows.iter()) {
        frame.render_widget(Alert::new(theme, *kind, message), *row);
    }

    let heading_row = rows[ALERTS.len() + 1];
    frame.render_widget(Paragraph::new(Span::styled("Badges", theme.heading_style())), heading_row);
    let badges_row = rows[ALERTS.len() + 2];
    let mut spans = Vec::new();
    for (variant, label) in BADGES {
        spans.push(Badge::new(theme, variant, label).span());
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), badges_row);
}

fn render_overlays(frame: &mut Frame, area: Rect, app: &App) -> ControlAreas {
    let theme = &*app.ctx.theme;
    let gallery = &app.gallery;
    let [modal_row, _, tabs_row, _, content] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let [modal_button, _] = Layout::horizontal([Constraint::Length(16), Constraint::Min(0)]).areas(modal_row);
    button(frame, modal_button, app, GalleryControl::OpenModal, "Open Modal", ButtonVariant::Primary);
    frame.render_widget(
        TabBar::new(theme, &DEMO_TABS, gallery.tab_index()).focused(gallery.is_focused(GalleryControl::DemoTabs)),
        tabs_row,
    );

    let mut areas = vec![(GalleryControl::OpenModal, modal_button), (GalleryControl::DemoTabs, tabs_row)];
    let [content, _] = Layout::horizontal([Constraint::Max(56), Constraint::Min(0)]).areas(content);
    match gallery.tab_index() {
        0 => areas.extend(render_fields(
            frame,
            content,
            app,
            &[(GalleryControl::Username, "Username", "Enter username"), (GalleryControl::AccountEmail, "Email", "Enter email")],
        )),
        1 => {
            let (email, push) = gallery.notifications();
            let rows = Layout::vertical([Constraint::Length(1); 2]).spacing(1).split(content);
            let toggles = [
                (GalleryControl::EmailNotifications, "Email notifications", email),
                (GalleryControl::PushNotifications, "Push notifications", push),
            ];
            for ((control, label, checked), row) in toggles.iter().zip(rows.iter()) {
                let mark = if *checked { "[x]" } else { "[ ]" };
                let style = if gallery.is_focused(*control) {
                    theme.selection_style()
                } else {
                    theme.text_primary_style()
                };
                frame.render_widget(Paragraph::new(format!("{mark} {label}")).style(style), *row);
                areas.push((*control, *row));
            }
        }
        _ => areas.extend(render_fields(
            frame,
            content,
            app,
            &[
                (GalleryControl::CurrentPassword, "Current Password", "Enter current password"),
                (GalleryControl::NewPassword, "New Password", "Enter new password"),
            ],
        )),
    }
    areas
}

fn render_fields(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    fields: &[(GalleryControl, &str, &str)],
) -> ControlAreas {
    let rows = Layout::vertical(vec![Constraint::Length(TEXT_FIELD_HEIGHT); fields.len()]).split(area);
    let mut areas = Vec::with_capacity(fields.len());
    for ((control, label, placeholder), row) in fields.iter().zip(rows.iter()) {
        let Some(input) = app.gallery.input(*control) else {
            continue;
        };
        let options = TextFieldOptions {
            label,
            placeholder,
            secret: control.is_secret(),
            focused: app.gallery.is_focused(*control),
        };
        let box_area = render_text_field(frame, *row, &*app.ctx.theme, input, options);
        areas.push((*control, box_area));
    }
    areas
}

fn render_form_controls(frame: &mut Frame, area: Rect, app: &App) -> ControlAreas {
    let theme = &*app.ctx.theme;
    let [column, _] = Layout::horizontal([Constraint::Max(56), Constraint::Min(0)]).areas(area);
    let [fields_area, select_area] =
        Layout::vertical([Constraint::Length(TEXT_FIELD_HEIGHT * 2), Constraint::Length(TEXT_FIELD_HEIGHT)])
            .areas(column);
    let mut areas = render_fields(
        frame,
        fields_area,
        app,
        &[
            (GalleryControl::TextInput, "Text Input", "Enter text"),
            (GalleryControl::PasswordInput, "Password", "Enter password"),
        ],
    );

    let [label_area, box_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(select_area);
    frame.render_widget(Paragraph::new(Span::styled("Select Input", theme.text_secondary_style())), label_area);
    let focused = app.gallery.is_focused(GalleryControl::Select);
    let option = SELECT_OPTIONS.get(app.gallery.select_index()).copied().unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(format!(" {option}"), theme.text_primary_style()),
        Span::styled("  ▾", theme.text_muted_style()),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(focused)),
        ),
        box_area,
    );
    areas.push((GalleryControl::Select, box_area));
    areas
}

fn render_media(frame: &mut Frame, area: Rect, app: &App) -> ControlAreas {
    let theme = &*app.ctx.theme;
    let [carousel_area, scene_area] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
        .spacing(2)
        .areas(area.intersection(Rect::new(area.x, area.y, area.width, 16)));
    frame.render_widget(
        Carousel::new(theme, &CAROUSEL_SLIDES, app.gallery.carousel.index())
            .focused(app.gallery.is_focused(GalleryControl::Carousel)),
        carousel_area,
    );
    frame.render_widget(
        Scene::new(theme, app.gallery.scene_yaw()).focused(app.gallery.is_focused(GalleryControl::Scene)),
        scene_area,
    );
    vec![(GalleryControl::Carousel, carousel_area), (GalleryControl::Scene, scene_area)]
}
