/// A single entry in a navigation rail.
///
/// Created once when the view is defined and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    /// Text shown next to the icon; also the selection key.
    pub label: String,
    /// Glyph rendered in the rail. Prefer single-width symbols.
    pub icon: String,
    /// Draws an alert dot on the entry.
    pub is_alert_flagged: bool,
}

impl NavigationItem {
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            is_alert_flagged: false,
        }
    }

    /// Marks the entry with an alert dot.
    pub fn flagged(mut self) -> Self {
        self.is_alert_flagged = true;
        self
    }
}

/// A static command listed in the command palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: String,
    pub shortcut: String,
}

impl CommandEntry {
    pub fn new(name: impl Into<String>, shortcut: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shortcut: shortcut.into(),
        }
    }
}
