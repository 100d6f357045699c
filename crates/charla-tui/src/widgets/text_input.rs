//! Single-line text input state.
//!
//! The cursor is a character index, converted to byte offsets on edit, so
//! accented input (hola, ¿qué?) behaves correctly.

/// State for a text input, managing content and cursor position.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// The text content.
    content: String,
    /// Cursor position (character index).
    cursor: usize,
    /// Input history for up/down navigation.
    history: Vec<String>,
    /// Current history index (None = editing current input).
    history_index: Option<usize>,
    /// Saved current input when navigating history.
    saved_input: String,
}

impl TextInputState {
    /// Create a new empty text input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Byte offset of the given character index.
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map_or(self.content.len(), |(offset, _)| offset)
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Take the content, clearing the state.
    pub fn take(&mut self) -> String {
        let content = std::mem::take(&mut self.content);
        self.cursor = 0;
        content
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let offset = self.byte_offset(self.cursor);
        self.content.insert(offset, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        let offset = self.byte_offset(self.cursor);
        self.content.insert_str(offset, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Take the content, recording it in history.
    pub fn submit(&mut self) -> String {
        let content = self.take();
        if !content.trim().is_empty() {
            self.history.push(content.clone());
        }
        self.history_index = None;
        self.saved_input.clear();
        content
    }

    /// Navigate to an older history entry.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }

        let next_index = match self.history_index {
            None => {
                self.saved_input = self.content.clone();
                0
            }
            Some(i) if i + 1 < self.history.len() => i + 1,
            Some(i) => i,
        };

        self.history_index = Some(next_index);
        self.content = self.history[self.history.len() - 1 - next_index].clone();
        self.cursor = self.char_count();
    }

    /// Navigate back towards the current (unsubmitted) input.
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => {
                self.history_index = None;
                self.content = std::mem::take(&mut self.saved_input);
                self.cursor = self.char_count();
            }
            Some(i) => {
                self.history_index = Some(i - 1);
                self.content = self.history[self.history.len() - i].clone();
                self.cursor = self.char_count();
            }
        }
    }
}
