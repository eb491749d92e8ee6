//! Long-press symbol picker

use crate::error::{Error, Result};
use crate::keymap::KeyMap;
use crate::types::{InputMode, KeyId};
use super::output::TextEdit;

/// An open picker. Lives from the long-press until a selection or dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopoverState {
    pub source_key: KeyId,
    pub symbols: Vec<char>,
}

pub struct PopoverSelector;

impl PopoverSelector {
    /// Picker for a long-press on `key`, if the key offers one in `mode`
    pub fn open(keymap: &KeyMap, key: KeyId, mode: InputMode) -> Option<PopoverState> {
        let symbols = keymap.long_press_symbols(key, mode)?;
        if symbols.is_empty() {
            return None;
        }
        Some(PopoverState {
            source_key: key,
            symbols: symbols.to_vec(),
        })
    }

    /// Turn an external selection into an edit. The picker is not trusted:
    /// a symbol it never offered is rejected.
    pub fn resolve(popover: &PopoverState, selection: char) -> Result<TextEdit> {
        if popover.symbols.contains(&selection) {
            Ok(TextEdit::InsertChar(selection))
        } else {
            Err(Error::InvalidSelection(selection))
        }
    }
}
