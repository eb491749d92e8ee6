//! Helper functions shared by the engine tests

#![allow(dead_code)]

use t9_core::{DecoderEngine, EngineConfig, EngineOutput, InputEvent, KeyId, KeyMap, TextEdit, Timestamp};

/// Standard layout with the default 1000ms timeout
pub fn create_engine() -> DecoderEngine {
    DecoderEngine::default()
}

pub fn create_engine_with_timeout(timeout_ms: u64) -> DecoderEngine {
    DecoderEngine::new(KeyMap::standard(), EngineConfig::with_cycle_timeout(timeout_ms))
        .expect("standard layout is valid")
}

/// Press a digit or helper key
pub fn press(engine: &mut DecoderEngine, key: KeyId, at: Timestamp) -> EngineOutput {
    engine
        .process_event(InputEvent::press(key, at))
        .expect("press should not fail")
}

pub fn press_digit(engine: &mut DecoderEngine, digit: u8, at: Timestamp) -> EngineOutput {
    press(engine, KeyId(digit), at)
}

pub fn long_press(engine: &mut DecoderEngine, digit: u8) -> EngineOutput {
    engine
        .process_event(InputEvent::long_press(KeyId(digit)))
        .expect("long press should not fail")
}

pub fn select(engine: &mut DecoderEngine, symbol: char) -> EngineOutput {
    engine
        .process_event(InputEvent::select(symbol))
        .expect("selection should not fail")
}

/// Edits for a fresh character
pub fn insert(ch: char) -> Vec<TextEdit> {
    vec![TextEdit::InsertChar(ch)]
}

/// Edits for a continued cycle
pub fn replace(ch: char) -> Vec<TextEdit> {
    vec![TextEdit::DeleteLastChar, TextEdit::InsertChar(ch)]
}

/// Feed `events` through a fresh engine and return the resulting text
pub fn type_events(engine: &mut DecoderEngine, events: &[InputEvent]) -> String {
    let mut buffer = String::new();
    for event in events {
        engine
            .process_event(event.clone())
            .expect("event should not fail")
            .apply_to(&mut buffer);
    }
    buffer
}
