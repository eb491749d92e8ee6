//! Property tests for the multi-tap decoder
//!
//! Random key sequences are fed through the engine and the cycle rules are
//! checked after every press.

mod common;

use common::*;
use proptest::prelude::*;
use t9_core::{InputEvent, InputMode, KeyId, KeyMap, TextEdit};

const TIMEOUT: u64 = 1000;

fn arb_digit() -> impl Strategy<Value = u8> {
    0u8..=9
}

fn arb_mode_toggles() -> impl Strategy<Value = Vec<KeyId>> {
    prop::collection::vec(
        prop::sample::select(vec![KeyId::TOGGLE_ALPHA, KeyId::TOGGLE_NUMERIC]),
        0..4,
    )
}

proptest! {
    #[test]
    fn presses_within_timeout_walk_the_sequence(
        digit in arb_digit(),
        toggles in arb_mode_toggles(),
        gap in 0u64..=TIMEOUT,
        extra in 1usize..12,
    ) {
        let mut engine = create_engine_with_timeout(TIMEOUT);
        for toggle in &toggles {
            press(&mut engine, *toggle, 0);
        }
        let mode = engine.mode();
        let sequence = KeyMap::standard().candidates(KeyId(digit), mode).unwrap().to_vec();

        let mut at = 1;
        for n in 0..(sequence.len() + extra) {
            let output = press_digit(&mut engine, digit, at);
            let expected = sequence[n % sequence.len()];
            if n == 0 {
                prop_assert_eq!(output.edits, vec![TextEdit::InsertChar(expected)]);
            } else {
                prop_assert_eq!(output.edits, vec![TextEdit::DeleteLastChar, TextEdit::InsertChar(expected)]);
            }
            at += gap;
        }
    }

    #[test]
    fn different_key_never_continues(
        first in arb_digit(),
        second in arb_digit(),
        at in 0u64..10_000,
    ) {
        prop_assume!(first != second);
        let mut engine = create_engine();
        press_digit(&mut engine, first, at);
        let output = press_digit(&mut engine, second, at);
        prop_assert_eq!(output.edits.len(), 1);
        prop_assert!(matches!(output.edits[0], TextEdit::InsertChar(_)));
    }

    #[test]
    fn gap_past_timeout_always_inserts(
        digit in arb_digit(),
        start in 0u64..10_000,
        over in 1u64..10_000,
    ) {
        let mut engine = create_engine_with_timeout(TIMEOUT);
        press_digit(&mut engine, digit, start);
        let output = press_digit(&mut engine, digit, start + TIMEOUT + over);
        prop_assert_eq!(output.edits.len(), 1);
    }

    #[test]
    fn mode_toggle_resets_every_key(
        presses in prop::collection::vec((arb_digit(), 0u64..50), 1..20),
        toggle in prop::sample::select(vec![KeyId::TOGGLE_ALPHA, KeyId::TOGGLE_NUMERIC]),
        next in arb_digit(),
    ) {
        let mut engine = create_engine();
        let mut at = 0;
        for (digit, step) in presses {
            at += step;
            press_digit(&mut engine, digit, at);
        }
        press(&mut engine, toggle, at);
        let output = press_digit(&mut engine, next, at);

        let first = KeyMap::standard().candidates(KeyId(next), engine.mode()).unwrap()[0];
        prop_assert_eq!(output.edits, vec![TextEdit::InsertChar(first)]);
        prop_assert_eq!(engine.state().cycle().state(KeyId(next)).map(|s| s.cycle_index), Some(0));
    }

    #[test]
    fn long_press_in_numeric_mode_changes_nothing(
        digit in arb_digit(),
        prior in prop::collection::vec(arb_digit(), 0..5),
    ) {
        let mut engine = create_engine();
        press(&mut engine, KeyId::TOGGLE_NUMERIC, 0);
        for (i, d) in prior.iter().enumerate() {
            press_digit(&mut engine, *d, i as u64);
        }
        let active = engine.state().active_key();
        let cycle = engine.state().cycle().state(KeyId(digit));

        let output = long_press(&mut engine, digit);
        prop_assert!(output.is_empty());
        prop_assert!(!engine.is_popover_open());
        prop_assert_eq!(engine.mode(), InputMode::Numeric);
        prop_assert_eq!(engine.state().active_key(), active);
        prop_assert_eq!(engine.state().cycle().state(KeyId(digit)), cycle);
    }

    #[test]
    fn foreign_selection_leaves_buffer_untouched(
        key in prop::sample::select(vec![0u8, 1]),
        symbol in any::<char>(),
    ) {
        let mut engine = create_engine();
        let offered = engine.keymap().long_press_symbols(KeyId(key), InputMode::Lower).unwrap().to_vec();
        prop_assume!(!offered.contains(&symbol));

        let mut buffer = String::from("ab");
        engine.process_event(InputEvent::long_press(KeyId(key))).unwrap().apply_to(&mut buffer);
        engine.process_event(InputEvent::select(symbol)).unwrap().apply_to(&mut buffer);

        prop_assert_eq!(buffer, "ab");
        prop_assert!(engine.is_popover_open());
    }
}
