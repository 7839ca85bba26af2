use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use uikit_types::CommandEntry;

use crate::ui::components::common::TextInputState;

/// Platform modifier + `k`: Ctrl on Linux/Windows, Super (Cmd) on macOS.
pub fn is_palette_chord(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('k') | KeyCode::Char('K'))
        && key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
}

/// Command palette overlay state.
///
/// The search text is kept but never narrows the command list.
#[derive(Debug, Clone)]
pub struct CommandPaletteState {
    open: bool,
    search: TextInputState,
    commands: Vec<CommandEntry>,
    highlighted: usize,
    pub container_focus: FocusFlag,
    pub search_focus: FocusFlag,
    /// Last rendered overlay area, for click-outside detection.
    pub last_area: Rect,
    pub per_item_areas: Vec<Rect>,
}

impl Default for CommandPaletteState {
    fn default() -> Self {
        Self::new(Self::default_commands())
    }
}

impl CommandPaletteState {
    pub fn new(commands: Vec<CommandEntry>) -> Self {
        Self {
            open: false,
            search: TextInputState::new(),
            commands,
            highlighted: 0,
            container_focus: FocusFlag::named("palette"),
            search_focus: FocusFlag::named("palette.search"),
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
        }
    }

    pub fn default_commands() -> Vec<CommandEntry> {
        vec![
            CommandEntry::new("Search documentation...", "⌘ D"),
            CommandEntry::new("Toggle theme", "⌘ T"),
            CommandEntry::new("Open settings...", "⌘ ,"),
            CommandEntry::new("Create new...", "⌘ N"),
        ]
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the overlay. Each chord press calls this exactly once.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.highlighted = 0;
        }
    }

    pub fn search(&self) -> &TextInputState {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut TextInputState {
        &mut self.search
    }

    /// Commands shown in the overlay; the search text does not filter them.
    pub fn visible_commands(&self) -> &[CommandEntry] {
        &self.commands
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn highlight_next(&mut self) {
        if !self.commands.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.commands.len();
        }
    }

    pub fn highlight_prev(&mut self) {
        if !self.commands.is_empty() {
            self.highlighted = (self.highlighted + self.commands.len() - 1) % self.commands.len();
        }
    }

    pub fn set_highlighted(&mut self, index: usize) {
        if index < self.commands.len() {
            self.highlighted = index;
        }
    }
}

impl HasFocus for CommandPaletteState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.search_focus);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn chord_matches_ctrl_or_super_k_only() {
        assert!(is_palette_chord(&key(KeyCode::Char('k'), KeyModifiers::CONTROL)));
        assert!(is_palette_chord(&key(KeyCode::Char('k'), KeyModifiers::SUPER)));
        assert!(is_palette_chord(&key(KeyCode::Char('K'), KeyModifiers::CONTROL | KeyModifiers::SHIFT)));
        assert!(!is_palette_chord(&key(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!is_palette_chord(&key(KeyCode::Char('j'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn open_flag_flips_on_each_chord() {
        let mut palette = CommandPaletteState::default();
        assert!(!palette.is_open());
        palette.toggle();
        assert!(palette.is_open());
        palette.toggle();
        assert!(!palette.is_open());
    }

    #[test]
    fn search_text_is_stored_but_never_filters() {
        let mut palette = CommandPaletteState::default();
        palette.toggle();
        for c in "zzz".chars() {
            palette.search_mut().insert_char(c);
        }
        assert_eq!(palette.search().input(), "zzz");
        assert_eq!(palette.visible_commands().len(), 4);
        assert_eq!(palette.visible_commands()[1].name, "Toggle theme");
    }

    #[test]
    fn highlight_wraps() {
        let mut palette = CommandPaletteState::default();
        palette.highlight_prev();
        assert_eq!(palette.highlighted(), 3);
        palette.highlight_next();
        assert_eq!(palette.highlighted(), 0);
        palette.set_highlighted(9);
        assert_eq!(palette.highlighted(), 0);
    }
}
