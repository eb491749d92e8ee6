pub mod types;
pub mod error;
pub mod config;
pub mod keymap;
pub mod engine;
pub mod keyboard;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use config::EngineConfig;
pub use keymap::{KeyMap, KeyMapBuilder, KeyEntry};
pub use engine::{DecoderEngine, InputEvent, EngineOutput, TextEdit, Notification, TextBuffer};
pub use keyboard::Keyboard;
