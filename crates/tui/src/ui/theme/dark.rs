use ratatui::style::Color;
use uikit_types::ThemeMode;

use super::roles::{Theme, ThemeRoles};

// Gray scale
pub const GRAY_950: Color = Color::Rgb(0x0B, 0x0F, 0x19); // #0b0f19 - modal overlay
pub const GRAY_900: Color = Color::Rgb(0x11, 0x18, 0x27); // #111827 - app background
pub const GRAY_800: Color = Color::Rgb(0x1F, 0x29, 0x37); // #1f2937 - panels
pub const GRAY_700: Color = Color::Rgb(0x37, 0x41, 0x51); // #374151 - borders, skeletons
pub const GRAY_400: Color = Color::Rgb(0x9C, 0xA3, 0xAF); // #9ca3af - muted text
pub const GRAY_300: Color = Color::Rgb(0xD1, 0xD5, 0xDB); // #d1d5db - secondary text
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

// Accents
pub const BLUE_400: Color = Color::Rgb(0x60, 0xA5, 0xFA); // #60a5fa
pub const BLUE_600: Color = Color::Rgb(0x25, 0x63, 0xEB); // #2563eb
pub const INDIGO_600: Color = Color::Rgb(0x4F, 0x46, 0xE5); // #4f46e5
pub const PURPLE_400: Color = Color::Rgb(0xC0, 0x84, 0xFC); // #c084fc

// Status
pub const GREEN_300: Color = Color::Rgb(0x86, 0xEF, 0xAC);
pub const RED_300: Color = Color::Rgb(0xFC, 0xA5, 0xA5);
pub const YELLOW_300: Color = Color::Rgb(0xFD, 0xE0, 0x47);
pub const BLUE_300: Color = Color::Rgb(0x93, 0xC5, 0xFD);
pub const GREEN_TINT: Color = Color::Rgb(0x14, 0x35, 0x25);
pub const RED_TINT: Color = Color::Rgb(0x3F, 0x1A, 0x1E);
pub const YELLOW_TINT: Color = Color::Rgb(0x3A, 0x31, 0x12);
pub const BLUE_TINT: Color = Color::Rgb(0x17, 0x27, 0x4A);

/// Palette used when the application is in dark mode.
#[derive(Debug, Clone)]
pub struct DarkTheme {
    roles: ThemeRoles,
}

impl DarkTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: GRAY_900,
                surface: GRAY_800,
                surface_muted: GRAY_700,
                border: GRAY_700,
                divider: GRAY_700,

                text: WHITE,
                text_secondary: GRAY_300,
                text_muted: GRAY_400,
                text_on_accent: WHITE,

                accent_primary: BLUE_600,
                accent_secondary: BLUE_400,
                accent_subtle: PURPLE_400,

                info: BLUE_300,
                success: GREEN_300,
                warning: YELLOW_300,
                error: RED_300,

                info_surface: BLUE_TINT,
                success_surface: GREEN_TINT,
                warning_surface: YELLOW_TINT,
                error_surface: RED_TINT,

                selection_bg: INDIGO_600,
                selection_fg: WHITE,
                focus: BLUE_400,
                modal_bg: GRAY_950,

                skeleton: GRAY_700,
            },
        }
    }
}

impl Default for DarkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DarkTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }

    fn mode(&self) -> ThemeMode {
        ThemeMode::Dark
    }
}
