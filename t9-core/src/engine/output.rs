//! Output representation for the T9 engine

use std::fmt;

use crate::types::{InputMode, KeyId};
use super::buffer::TextBuffer;

/// An edit for the external text buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    /// Append one character
    InsertChar(char),
    /// Remove the last character
    DeleteLastChar,
    /// Append a string
    InsertString(String),
}

impl TextEdit {
    pub fn apply<B: TextBuffer + ?Sized>(&self, buffer: &mut B) {
        match self {
            TextEdit::InsertChar(ch) => buffer.insert_at_end(*ch),
            TextEdit::DeleteLastChar => buffer.delete_last_char(),
            TextEdit::InsertString(text) => text.chars().for_each(|ch| buffer.insert_at_end(ch)),
        }
    }
}

/// Informational signal for the rendering host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Confirm key pressed
    Ready,
    /// Cancel key pressed
    Cancel,
    ModeChanged(InputMode),
    PopoverOpened { source_key: KeyId, symbols: Vec<char> },
    PopoverClosed,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Ready => f.write_str("ready"),
            Notification::Cancel => f.write_str("cancel"),
            Notification::ModeChanged(mode) => write!(f, "mode changed to {}", mode),
            Notification::PopoverOpened { source_key, symbols } => {
                let symbols: String = symbols.iter().collect();
                write!(f, "popover opened on {}: {}", source_key, symbols)
            }
            Notification::PopoverClosed => f.write_str("popover closed"),
        }
    }
}

/// Result of processing one input event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// Edits to apply in order
    pub edits: Vec<TextEdit>,
    pub notifications: Vec<Notification>,
}

impl EngineOutput {
    /// Creates a no-action output
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_edit(mut self, edit: TextEdit) -> Self {
        self.edits.push(edit);
        self
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notifications.push(notification);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty() && self.notifications.is_empty()
    }

    /// Apply every edit to `buffer` in order
    pub fn apply_to<B: TextBuffer + ?Sized>(&self, buffer: &mut B) {
        for edit in &self.edits {
            edit.apply(buffer);
        }
    }
}
