//! T9 decoding engine
//!
//! This module turns timestamped key events into text-buffer edits and
//! host notifications.

mod engine;
mod state;
mod input;
mod output;
mod mode;
mod cycle;
mod popover;
mod buffer;

pub use engine::DecoderEngine;
pub use state::EngineState;
pub use input::InputEvent;
pub use output::{EngineOutput, TextEdit, Notification};
pub use mode::ModeState;
pub use cycle::{CycleTracker, CycleState, CycleOutcome};
pub use popover::{PopoverSelector, PopoverState};
pub use buffer::TextBuffer;

// Re-export error types
pub use crate::error::{Error, Result};
