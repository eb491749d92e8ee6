//! Replay of event scripts through a keyboard

use log::debug;
use t9_core::{DecoderEngine, EngineOutput, InputEvent, InputMode, Keyboard};

use crate::error::Result;
use crate::parser::ast::EventScript;

/// One processed event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    pub line: usize,
    pub event: InputEvent,
    pub output: EngineOutput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub steps: Vec<ReplayStep>,
    /// Buffer contents after the last event
    pub text: String,
    pub final_mode: InputMode,
}

/// Feed every event of `script` into `engine`, applying edits to an empty buffer
pub fn replay(engine: DecoderEngine, script: &EventScript) -> Result<Transcript> {
    let mut keyboard = Keyboard::new(engine, String::new());
    let mut steps = Vec::with_capacity(script.len());

    for decl in &script.events {
        debug!("line {}: {:?}", decl.line, decl.event);
        let output = keyboard.handle(decl.event.clone())?;
        steps.push(ReplayStep {
            line: decl.line,
            event: decl.event.clone(),
            output,
        });
    }

    let final_mode = keyboard.engine().mode();
    Ok(Transcript {
        steps,
        text: keyboard.into_buffer(),
        final_mode,
    })
}
