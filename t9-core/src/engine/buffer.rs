//! Text buffer contract

/// Text target the engine edits. All edits apply at the end of the text.
pub trait TextBuffer {
    fn insert_at_end(&mut self, ch: char);

    /// Removes one character from the end. No-op when empty.
    fn delete_last_char(&mut self);

    fn length_in_chars(&self) -> usize;
}

impl TextBuffer for String {
    fn insert_at_end(&mut self, ch: char) {
        self.push(ch);
    }

    fn delete_last_char(&mut self) {
        self.pop();
    }

    fn length_in_chars(&self) -> usize {
        self.chars().count()
    }
}
