//! Per-mode character tables for the keypad
//!
//! A [`KeyMap`] is read-only once built. Every registered key carries a
//! non-empty lowercase and uppercase cycle and a single numeric digit.
//! Long-press symbol sets are optional and independent of mode.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::types::{InputMode, KeyId};

/// Long-press symbols of the standard layout on key 1 (ASCII 0x21-0x2F)
pub const KEY1_SYMBOLS: &str = "!\"#$%&'()*+,-./";
/// Long-press symbols of the standard layout on key 0
pub const KEY0_SYMBOLS: &str = ":;<=>?@[\\]^_`{|}~";

/// Character tables for one digit key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry {
    pub lower: Vec<char>,
    pub upper: Vec<char>,
    pub numeric: char,
    pub long_press: Option<Vec<char>>,
}

impl KeyEntry {
    /// Cycle sequence for the given mode
    pub fn sequence(&self, mode: InputMode) -> &[char] {
        match mode {
            InputMode::Lower => &self.lower,
            InputMode::Upper => &self.upper,
            InputMode::Numeric => std::slice::from_ref(&self.numeric),
        }
    }
}

/// Static character tables for all digit keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    keys: BTreeMap<KeyId, KeyEntry>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeyMap {
    /// The ITU-style phone keypad
    pub fn standard() -> Self {
        const LOWER: [&str; 10] = [
            "0", ".,?!1", "abc2", "def3", "ghi4", "jkl5", "mno6", "pqrs7", "tuv8", "wxyz9",
        ];

        let keys = LOWER
            .iter()
            .enumerate()
            .map(|(digit, lower)| {
                let long_press = match digit {
                    0 => Some(KEY0_SYMBOLS.chars().collect()),
                    1 => Some(KEY1_SYMBOLS.chars().collect()),
                    _ => None,
                };
                let entry = KeyEntry {
                    lower: lower.chars().collect(),
                    upper: lower.chars().map(|c| c.to_ascii_uppercase()).collect(),
                    numeric: char::from(b'0' + digit as u8),
                    long_press,
                };
                (KeyId(digit as u8), entry)
            })
            .collect();

        Self { keys }
    }

    pub fn builder() -> KeyMapBuilder {
        KeyMapBuilder::default()
    }

    /// Cycle sequence for `key` in `mode`
    pub fn candidates(&self, key: KeyId, mode: InputMode) -> Result<&[char]> {
        self.keys
            .get(&key)
            .map(|entry| entry.sequence(mode))
            .ok_or(Error::UnknownKey(key))
    }

    /// Extended symbol set for `key`. Always `None` in numeric mode.
    pub fn long_press_symbols(&self, key: KeyId, mode: InputMode) -> Option<&[char]> {
        if mode == InputMode::Numeric {
            return None;
        }
        self.keys.get(&key)?.long_press.as_deref()
    }

    pub fn contains(&self, key: KeyId) -> bool {
        self.keys.contains_key(&key)
    }

    /// Iterate over registered keys in id order
    pub fn keys(&self) -> impl Iterator<Item = (KeyId, &KeyEntry)> {
        self.keys.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Check the table invariants
    pub fn validate(&self) -> Result<()> {
        if self.keys.is_empty() {
            return Err(Error::InvalidKeyMap("no keys defined".into()));
        }
        for (id, entry) in &self.keys {
            if !id.is_digit() {
                return Err(Error::InvalidKeyMap(format!("{} is not a digit key", id)));
            }
            if entry.lower.is_empty() {
                return Err(Error::InvalidKeyMap(format!("{} has an empty lower sequence", id)));
            }
            if entry.upper.is_empty() {
                return Err(Error::InvalidKeyMap(format!("{} has an empty upper sequence", id)));
            }
            if !entry.numeric.is_ascii_digit() {
                return Err(Error::InvalidKeyMap(format!(
                    "{} has non-digit numeric character {:?}",
                    id, entry.numeric
                )));
            }
        }
        Ok(())
    }
}

/// Incremental construction of a validated [`KeyMap`]
#[derive(Debug, Default)]
pub struct KeyMapBuilder {
    keys: BTreeMap<KeyId, KeyEntry>,
    symbols: Vec<(KeyId, Vec<char>)>,
}

impl KeyMapBuilder {
    /// Register a digit key. A later call for the same id replaces the earlier one.
    pub fn key(&mut self, id: KeyId, lower: &str, upper: &str, numeric: char) -> &mut Self {
        let long_press = self.keys.get(&id).and_then(|entry| entry.long_press.clone());
        self.keys.insert(
            id,
            KeyEntry {
                lower: lower.chars().collect(),
                upper: upper.chars().collect(),
                numeric,
                long_press,
            },
        );
        self
    }

    /// Attach a long-press symbol set to a key
    pub fn long_press(&mut self, id: KeyId, symbols: &str) -> &mut Self {
        self.symbols.push((id, symbols.chars().collect()));
        self
    }

    pub fn build(&mut self) -> Result<KeyMap> {
        let mut keys = std::mem::take(&mut self.keys);
        for (id, symbols) in self.symbols.drain(..) {
            let entry = keys.get_mut(&id).ok_or_else(|| {
                Error::InvalidKeyMap(format!("long-press symbols for undeclared {}", id))
            })?;
            entry.long_press = Some(symbols);
        }

        let keymap = KeyMap { keys };
        keymap.validate()?;
        Ok(keymap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_is_valid() {
        let keymap = KeyMap::standard();
        assert!(keymap.validate().is_ok());
        assert_eq!(keymap.len(), 10);
    }

    #[test]
    fn test_standard_sequences() {
        let keymap = KeyMap::standard();
        assert_eq!(keymap.candidates(KeyId(2), InputMode::Lower).unwrap(), &['a', 'b', 'c', '2']);
        assert_eq!(keymap.candidates(KeyId(7), InputMode::Upper).unwrap(), &['P', 'Q', 'R', 'S', '7']);
        assert_eq!(keymap.candidates(KeyId(1), InputMode::Numeric).unwrap(), &['1']);
    }

    #[test]
    fn test_unknown_key() {
        let keymap = KeyMap::standard();
        assert_eq!(
            keymap.candidates(KeyId::SPACE, InputMode::Lower),
            Err(Error::UnknownKey(KeyId::SPACE))
        );
    }

    #[test]
    fn test_long_press_disabled_in_numeric_mode() {
        let keymap = KeyMap::standard();
        assert!(keymap.long_press_symbols(KeyId(1), InputMode::Lower).is_some());
        assert!(keymap.long_press_symbols(KeyId(1), InputMode::Numeric).is_none());
        assert!(keymap.long_press_symbols(KeyId(5), InputMode::Lower).is_none());
        assert!(keymap.long_press_symbols(KeyId::BACKSPACE, InputMode::Lower).is_none());
    }

    #[test]
    fn test_builder_rejects_empty_sequence() {
        let result = KeyMap::builder().key(KeyId(2), "", "ABC", '2').build();
        assert!(matches!(result, Err(Error::InvalidKeyMap(_))));
    }

    #[test]
    fn test_builder_rejects_symbols_for_undeclared_key() {
        let result = KeyMap::builder()
            .key(KeyId(2), "abc", "ABC", '2')
            .long_press(KeyId(1), "!?")
            .build();
        assert!(matches!(result, Err(Error::InvalidKeyMap(_))));
    }

    #[test]
    fn test_builder_attaches_symbols_in_any_order() {
        let keymap = KeyMap::builder()
            .long_press(KeyId(3), "#")
            .key(KeyId(3), "def", "DEF", '3')
            .build()
            .unwrap();
        assert_eq!(keymap.long_press_symbols(KeyId(3), InputMode::Upper), Some(&['#'][..]));
    }
}
