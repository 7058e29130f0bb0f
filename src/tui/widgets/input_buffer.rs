//! Single-line text input with cursor management, used by the search bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Outcome of feeding a key to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text changed; listeners should refilter.
    Changed,
    /// Cursor moved, text unchanged.
    Moved,
    /// Key not handled by the buffer.
    Ignored,
}

/// A text input buffer. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Default)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an editing key.
    pub fn handle_key(&mut self, key: &KeyEvent) -> EditOutcome {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => self.delete_word(),
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                if self.content.is_empty() {
                    EditOutcome::Ignored
                } else {
                    self.clear();
                    EditOutcome::Changed
                }
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.insert_char(c);
                EditOutcome::Changed
            }
            (_, KeyCode::Backspace) => self.backspace(),
            (_, KeyCode::Delete) => self.delete(),
            (_, KeyCode::Left) => self.move_to(self.prev_boundary()),
            (_, KeyCode::Right) => self.move_to(self.next_boundary()),
            (_, KeyCode::Home) => self.move_to(0),
            (_, KeyCode::End) => self.move_to(self.content.len()),
            _ => EditOutcome::Ignored,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) -> EditOutcome {
        if self.cursor == 0 {
            return EditOutcome::Ignored;
        }
        let prev = self.prev_boundary();
        self.content.drain(prev..self.cursor);
        self.cursor = prev;
        EditOutcome::Changed
    }

    pub fn delete(&mut self) -> EditOutcome {
        if self.cursor >= self.content.len() {
            return EditOutcome::Ignored;
        }
        let next = self.next_boundary();
        self.content.drain(self.cursor..next);
        EditOutcome::Changed
    }

    /// Delete back to the previous word start (Ctrl+W).
    pub fn delete_word(&mut self) -> EditOutcome {
        if self.cursor == 0 {
            return EditOutcome::Ignored;
        }
        let before = &self.content[..self.cursor];
        let trimmed = before.trim_end_matches(|c: char| c.is_whitespace() || c == '-');
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace() || *c == '-')
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        self.content.drain(start..self.cursor);
        self.cursor = start;
        EditOutcome::Changed
    }

    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.content[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.content.len())
    }

    fn move_to(&mut self, cursor: usize) -> EditOutcome {
        if cursor == self.cursor {
            return EditOutcome::Ignored;
        }
        self.cursor = cursor;
        EditOutcome::Moved
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// Cursor column in characters, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }
}
