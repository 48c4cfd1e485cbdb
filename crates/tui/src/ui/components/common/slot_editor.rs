//! UTF-8 safe edit buffer for the focused word slot.
//!
//! One editor instance is shared across the grid: when focus lands on a
//! slot the editor is loaded from that slot's stored text with the caret at
//! the end (the terminal analog of the original's select-on-focus), and every
//! keystroke writes back through the store's normalization.

#[derive(Clone, Debug, Default)]
pub struct SlotEditor {
    /// The text being edited
    input: String,
    /// Caret byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl SlotEditor {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the buffer with a slot's stored text, caret at the end.
    pub fn load(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor = self.input.len();
    }

    /// Move the caret one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.input[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        self.cursor = self.cursor.saturating_sub(prev);
    }

    /// Move the caret one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor = self.cursor.saturating_add(next.len_utf8());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Insert a char at the caret.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the char immediately before the caret.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.input[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        let start = self.cursor - prev;
        self.input.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Delete the char at the caret.
    pub fn delete_forward(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            let end = self.cursor + next.len_utf8();
            self.input.drain(self.cursor..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_places_caret_at_end() {
        let mut editor = SlotEditor::default();
        editor.load("abandon");
        assert_eq!(editor.cursor(), "abandon".len());
        editor.insert_char('s');
        assert_eq!(editor.input(), "abandons");
    }

    #[test]
    fn utf8_moves_and_deletes_stay_on_boundaries() {
        let mut editor = SlotEditor::default();
        editor.load("héllo");
        editor.move_home();
        editor.move_right();
        editor.move_right(); // past 'é' (2 bytes)
        editor.backspace();
        assert_eq!(editor.input(), "hllo");
        editor.delete_forward();
        assert_eq!(editor.input(), "hlo");
        editor.move_end();
        assert_eq!(editor.cursor(), editor.input().len());
    }
}
