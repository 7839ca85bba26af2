use ratatui::style::Color;
use uikit_types::ThemeMode;

use super::roles::{Theme, ThemeRoles};

pub const GRAY_50: Color = Color::Rgb(0xF9, 0xFA, 0xFB); // #f9fafb - app background
pub const GRAY_100: Color = Color::Rgb(0xF3, 0xF4, 0xF6); // #f3f4f6 - muted surface
pub const GRAY_200: Color = Color::Rgb(0xE5, 0xE7, 0xEB); // #e5e7eb - borders, skeletons
pub const GRAY_500: Color = Color::Rgb(0x6B, 0x72, 0x80); // #6b7280 - muted text
pub const GRAY_600: Color = Color::Rgb(0x4B, 0x55, 0x63); // #4b5563 - secondary text
pub const GRAY_900: Color = Color::Rgb(0x11, 0x18, 0x27); // #111827 - primary text
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const OVERLAY: Color = Color::Rgb(0x9C, 0xA3, 0xAF); // dimmed page behind modals

pub const BLUE_50: Color = Color::Rgb(0xEF, 0xF6, 0xFF);
pub const BLUE_500: Color = Color::Rgb(0x3B, 0x82, 0xF6);
pub const BLUE_600: Color = Color::Rgb(0x25, 0x63, 0xEB);
pub const PURPLE_600: Color = Color::Rgb(0x93, 0x33, 0xEA);

pub const GREEN_800: Color = Color::Rgb(0x16, 0x65, 0x34);
pub const RED_800: Color = Color::Rgb(0x99, 0x1B, 0x1B);
pub const YELLOW_800: Color = Color::Rgb(0x85, 0x4D, 0x0E);
pub const BLUE_800: Color = Color::Rgb(0x1E, 0x40, 0xAF);
pub const GREEN_50: Color = Color::Rgb(0xF0, 0xFD, 0xF4);
pub const RED_50: Color = Color::Rgb(0xFE, 0xF2, 0xF2);
pub const YELLOW_50: Color = Color::Rgb(0xFE, 0xFC, 0xE8);

/// Palette used when the application is in light mode.
#[derive(Debug, Clone)]
pub struct LightTheme {
    roles: ThemeRoles,
}

impl LightTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: GRAY_50,
                surface: WHITE,
                surface_muted: GRAY_100,
                border: GRAY_200,
                divider: GRAY_200,

                text: GRAY_900,
                text_secondary: GRAY_600,
                text_muted: GRAY_500,
                text_on_accent: WHITE,

                accent_primary: BLUE_600,
                accent_secondary: BLUE_500,
                accent_subtle: PURPLE_600,

                info: BLUE_800,
                success: GREEN_800,
                warning: YELLOW_800,
                error: RED_800,

                info_surface: BLUE_50,
                success_surface: GREEN_50,
                warning_surface: YELLOW_50,
                error_surface: RED_50,

                selection_bg: BLUE_600,
                selection_fg: WHITE,
                focus: BLUE_500,
                modal_bg: OVERLAY,

                skeleton: GRAY_200,
            },
        }
    }
}

impl Default for LightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for LightTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }

    fn mode(&self) -> ThemeMode {
        ThemeMode::Light
    }
}
