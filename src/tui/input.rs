//! Input field handling for the terminal user interface.

/// A single-line text input with cursor position management.
#[derive(Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        InputField::default()
    }

    /// Create an input field seeded with text, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Reset the field to empty.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    // Labels carry accented characters, so the cursor counts chars and
    // edits map back to byte offsets here.
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn typing_inserts_at_the_cursor() {
        let mut field = InputField::new();
        for c in "Trno".chars() {
            field.handle_char(c);
        }
        field.cursor = 2;
        field.handle_char('e');
        field.handle_char('i');
        assert_eq!(field.value, "Treino");
        assert_eq!(field.cursor, 4);
    }

    #[test]
    fn backspace_and_delete_respect_accented_chars() {
        let mut field = InputField::with_value("média");
        assert_eq!(field.cursor, 5);
        field.handle_backspace();
        assert_eq!(field.value, "médi");
        field.move_cursor_home();
        field.handle_delete();
        assert_eq!(field.value, "édi");
    }

    #[test]
    fn cursor_movement_is_bounded() {
        let mut field = InputField::with_value("ok");
        field.move_cursor_right();
        assert_eq!(field.cursor, 2);
        field.move_cursor_home();
        field.move_cursor_left();
        assert_eq!(field.cursor, 0);
        field.move_cursor_end();
        assert_eq!(field.cursor, 2);
    }

    #[test]
    fn clear_resets_value_and_cursor() {
        let mut field = InputField::with_value("Leitura");
        field.clear();
        assert_eq!(field.value, "");
        assert_eq!(field.cursor, 0);
    }
}
