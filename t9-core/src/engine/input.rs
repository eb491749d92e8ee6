//! Input representation for the T9 engine

use crate::types::{KeyId, Timestamp};

/// An event delivered by the event source, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Short press of a key at the given time
    KeyPress { key: KeyId, at: Timestamp },
    /// Press held long enough to request the symbol picker
    LongPress { key: KeyId },
    /// The picker reported a chosen symbol
    SymbolSelected(char),
    /// The picker was closed without a choice
    Dismiss,
}

impl InputEvent {
    pub fn press(key: KeyId, at: Timestamp) -> Self {
        Self::KeyPress { key, at }
    }

    pub fn long_press(key: KeyId) -> Self {
        Self::LongPress { key }
    }

    pub fn select(symbol: char) -> Self {
        Self::SymbolSelected(symbol)
    }
}
