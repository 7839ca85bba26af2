//! UTF-8 safe text buffer with a cursor, shared by every text field
//! (palette search, auth forms, gallery inputs).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInputState {
    input: String,
    /// Byte index into `input`, always on a char boundary.
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.trim().is_empty()
    }

    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Display columns between the start of the buffer and the cursor.
    pub fn cursor_columns(&self) -> u16 {
        u16::try_from(self.input[..self.cursor].width()).unwrap_or(u16::MAX)
    }

    /// Cursor column when the buffer is drawn with [`Self::masked`].
    pub fn masked_cursor_columns(&self) -> u16 {
        u16::try_from(self.input[..self.cursor].chars().count()).unwrap_or(u16::MAX)
    }

    /// One mask glyph per character, for password fields.
    pub fn masked(&self) -> String {
        "•".repeat(self.input.chars().count())
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Deletes the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            let start = self.cursor - prev.len_utf8();
            self.input.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    /// Deletes the char under the cursor.
    pub fn delete(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            let end = self.cursor + next.len_utf8();
            self.input.drain(self.cursor..end);
        }
    }

    /// Applies an editing key. Returns `false` when the key is not an edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = TextInputState::new();
        st.set_input("h🙂llo");
        st.move_home();
        st.move_right();
        st.insert_char('e');
        assert_eq!(st.input(), "he🙂llo");
        st.move_right();
        st.backspace();
        assert_eq!(st.input(), "hello");
        st.move_left();
        st.backspace();
        assert_eq!(st.input(), "ello");
    }

    #[test]
    fn delete_and_boundaries() {
        let mut st = TextInputState::new();
        st.backspace();
        st.move_left();
        st.set_input("ab");
        st.delete();
        assert_eq!(st.input(), "ab");
        st.move_home();
        st.delete();
        assert_eq!(st.input(), "b");
    }

    #[test]
    fn key_events_edit_buffer_and_skip_chords() {
        let mut st = TextInputState::new();
        assert!(st.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert!(st.handle_key(KeyEvent::new(KeyCode::Char('Y'), KeyModifiers::SHIFT)));
        assert!(!st.handle_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)));
        assert!(!st.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(st.input(), "xY");
        assert_eq!(st.masked(), "••");
        assert_eq!(st.cursor_columns(), 2);
    }
}
