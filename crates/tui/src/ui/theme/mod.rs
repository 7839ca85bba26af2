//! Theme styling module for the TUI UI layer.
//!
//! Two palettes, one per [`ThemeMode`], share the semantic roles in
//! [`roles`]. Prefer the helpers in [`theme_helpers`] over hard-coding colors.

use uikit_types::ThemeMode;

pub mod dark;
pub mod light;
pub mod roles;
pub mod theme_helpers;

pub use dark::DarkTheme;
pub use light::LightTheme;
pub use roles::Theme;

/// Builds the palette for a mode.
pub fn for_mode(mode: ThemeMode) -> Box<dyn Theme> {
    match mode {
        ThemeMode::Dark => Box::new(DarkTheme::new()),
        ThemeMode::Light => Box::new(LightTheme::new()),
    }
}
