//! Modal text entry for the player's leaderboard name.

use crate::core::constants::MAX_NAME_LEN;
use crate::input::TextEdit;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameEntryError {
    #[error("Name cannot be empty")]
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    pub buffer: String,
    /// Shown under the input box until the next edit.
    pub error: Option<NameEntryError>,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Append a printable character. Returns false if rejected (control
    /// character or name already at the limit).
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() || self.len() >= MAX_NAME_LEN {
            return false;
        }
        self.buffer.push(c);
        self.error = None;
        true
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
        self.error = None;
    }

    pub fn apply(&mut self, edits: &[TextEdit]) {
        for edit in edits {
            match *edit {
                TextEdit::Char(c) => {
                    self.push(c);
                }
                TextEdit::Backspace => self.backspace(),
            }
        }
    }

    /// Accept the trimmed name, or record why it was rejected.
    pub fn submit(&mut self) -> Result<String, NameEntryError> {
        let name = self.buffer.trim();
        if name.is_empty() {
            self.error = Some(NameEntryError::Empty);
            return Err(NameEntryError::Empty);
        }
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut entry = NameEntry::new();
        entry.apply(&[
            TextEdit::Char('a'),
            TextEdit::Char('b'),
            TextEdit::Backspace,
            TextEdit::Char('c'),
        ]);
        assert_eq!(entry.buffer, "ac");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut entry = NameEntry::new();
        entry.backspace();
        assert!(entry.is_empty());
    }

    #[test]
    fn test_limit_is_twenty_chars() {
        let mut entry = NameEntry::new();
        for _ in 0..25 {
            entry.push('é');
        }
        assert_eq!(entry.len(), MAX_NAME_LEN);
        assert!(!entry.push('x'));
    }

    #[test]
    fn test_control_chars_rejected() {
        let mut entry = NameEntry::new();
        assert!(!entry.push('\t'));
        assert!(!entry.push('\u{7f}'));
        assert!(entry.is_empty());
    }

    #[test]
    fn test_blank_submit_rejected() {
        let mut entry = NameEntry::new();
        entry.apply(&[TextEdit::Char(' '), TextEdit::Char(' ')]);
        assert_eq!(entry.submit(), Err(NameEntryError::Empty));
        assert_eq!(entry.error, Some(NameEntryError::Empty));

        // Next edit clears the message
        entry.push('z');
        assert!(entry.error.is_none());
    }

    #[test]
    fn test_submit_trims() {
        let mut entry = NameEntry::new();
        for c in "  Ace ".chars() {
            entry.push(c);
        }
        assert_eq!(entry.submit(), Ok("Ace".to_string()));
    }
}
