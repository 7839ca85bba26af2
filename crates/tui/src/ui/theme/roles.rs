use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};
use uikit_types::ThemeMode;

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,
    pub divider: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    /// Text drawn on top of `accent_primary` fills.
    pub text_on_accent: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub accent_subtle: Color,

    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    /// Tinted fills behind alert banners and badges.
    pub info_surface: Color,
    pub success_surface: Color,
    pub warning_surface: Color,
    pub error_surface: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,

    /// Background color used when displaying modal overlays.
    ///
    /// Darker than the primary background so the active modal content
    /// appears elevated.
    pub modal_bg: Color,

    /// Placeholder blocks drawn while content loads.
    pub skeleton: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    /// Mode this palette was built for.
    fn mode(&self) -> ThemeMode;

    // Text styles
    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }
    fn heading_style(&self) -> Style {
        Style::default().fg(self.roles().text).add_modifier(Modifier::BOLD)
    }

    // Borders and focus
    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    // Selection
    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    /// Style used for the darkened background that appears behind modal dialogs.
    fn modal_background_style(&self) -> Style {
        Style::default().bg(self.roles().modal_bg)
    }

    // Status styles
    fn status_success(&self) -> Style {
        Style::default().fg(self.roles().success)
    }
    fn status_warning(&self) -> Style {
        Style::default().fg(self.roles().warning)
    }
    fn status_error(&self) -> Style {
        Style::default().fg(self.roles().error)
    }

    // Accents
    fn accent_primary_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary)
    }
    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary).add_modifier(Modifier::BOLD)
    }
}
