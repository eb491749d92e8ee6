//! Multi-tap cycle tracking
//!
//! Decides whether a press continues the open cycle of its key or starts a
//! new character. Only the most recently started key can be continued, and
//! only while the gap since its last press stays within the timeout.

use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::keymap::KeyMap;
use crate::types::{InputMode, KeyId, Timestamp};

/// Stored cycle position for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleState {
    pub last_press_time: Timestamp,
    pub cycle_index: usize,
}

/// Result of one press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    pub character: char,
    pub cycle_index: usize,
    /// The press replaces the previously committed character
    pub continuation: bool,
}

#[derive(Debug, Clone)]
pub struct CycleTracker {
    states: HashMap<KeyId, CycleState>,
    active_key: Option<KeyId>,
    timeout_ms: u64,
}

impl CycleTracker {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            states: HashMap::new(),
            active_key: None,
            timeout_ms,
        }
    }

    /// Register a press of `key` at `at` and resolve its character
    pub fn press(
        &mut self,
        keymap: &KeyMap,
        key: KeyId,
        mode: InputMode,
        at: Timestamp,
    ) -> Result<CycleOutcome> {
        let sequence = keymap.candidates(key, mode)?;
        if sequence.is_empty() {
            return Err(Error::EmptySequence { key, mode });
        }

        let previous = self.states.get(&key).copied();
        let continuation = match previous {
            Some(state) => {
                self.active_key == Some(key)
                    && at.saturating_sub(state.last_press_time) <= self.timeout_ms
            }
            None => false,
        };

        let cycle_index = match previous {
            Some(state) if continuation => (state.cycle_index + 1) % sequence.len(),
            _ => 0,
        };
        if !continuation {
            self.active_key = Some(key);
        }

        self.states.insert(key, CycleState { last_press_time: at, cycle_index });
        debug!(
            "{} at {}ms: {} index {}",
            key,
            at,
            if continuation { "continue" } else { "fresh" },
            cycle_index
        );

        Ok(CycleOutcome {
            character: sequence[cycle_index],
            cycle_index,
            continuation,
        })
    }

    /// Key whose character is currently open for replacement
    pub fn active_key(&self) -> Option<KeyId> {
        self.active_key
    }

    /// Close the open character so the next press always inserts.
    /// Stored per-key positions are kept.
    pub fn break_cycle(&mut self) {
        self.active_key = None;
    }

    /// Forget every key's cycle
    pub fn reset(&mut self) {
        self.states.clear();
        self.active_key = None;
    }

    pub fn state(&self, key: KeyId) -> Option<CycleState> {
        self.states.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> (CycleTracker, KeyMap) {
        (CycleTracker::new(1000), KeyMap::standard())
    }

    #[test]
    fn test_fresh_then_continue() {
        let (mut tracker, keymap) = tracker();
        let first = tracker.press(&keymap, KeyId(2), InputMode::Lower, 0).unwrap();
        assert_eq!((first.character, first.continuation), ('a', false));

        let second = tracker.press(&keymap, KeyId(2), InputMode::Lower, 500).unwrap();
        assert_eq!((second.character, second.continuation), ('b', true));
        assert_eq!(tracker.state(KeyId(2)), Some(CycleState { last_press_time: 500, cycle_index: 1 }));
    }

    #[test]
    fn test_timeout_boundary_is_inclusive() {
        let (mut tracker, keymap) = tracker();
        tracker.press(&keymap, KeyId(3), InputMode::Lower, 0).unwrap();
        let at_boundary = tracker.press(&keymap, KeyId(3), InputMode::Lower, 1000).unwrap();
        assert!(at_boundary.continuation);

        let past = tracker.press(&keymap, KeyId(3), InputMode::Lower, 2001).unwrap();
        assert!(!past.continuation);
        assert_eq!(past.cycle_index, 0);
    }

    #[test]
    fn test_other_key_breaks_continuity() {
        let (mut tracker, keymap) = tracker();
        tracker.press(&keymap, KeyId(2), InputMode::Lower, 0).unwrap();
        tracker.press(&keymap, KeyId(5), InputMode::Lower, 10).unwrap();
        let back = tracker.press(&keymap, KeyId(2), InputMode::Lower, 20).unwrap();
        assert!(!back.continuation);
        assert_eq!(back.character, 'a');
    }

    #[test]
    fn test_break_cycle_keeps_positions() {
        let (mut tracker, keymap) = tracker();
        tracker.press(&keymap, KeyId(2), InputMode::Lower, 0).unwrap();
        tracker.press(&keymap, KeyId(2), InputMode::Lower, 100).unwrap();
        tracker.break_cycle();
        assert_eq!(tracker.active_key(), None);
        assert_eq!(tracker.state(KeyId(2)).map(|s| s.cycle_index), Some(1));

        let next = tracker.press(&keymap, KeyId(2), InputMode::Lower, 200).unwrap();
        assert!(!next.continuation);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let (mut tracker, keymap) = tracker();
        let result = tracker.press(&keymap, KeyId::SPACE, InputMode::Lower, 0);
        assert_eq!(result, Err(Error::UnknownKey(KeyId::SPACE)));
        assert_eq!(tracker.active_key(), None);
    }
}
