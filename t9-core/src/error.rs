//! Error types for the T9 engine

use thiserror::Error;
use crate::types::{InputMode, KeyId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown key: {0}")]
    UnknownKey(KeyId),

    #[error("Empty candidate sequence for {key} in {mode} mode")]
    EmptySequence { key: KeyId, mode: InputMode },

    #[error("Selection {0:?} is not offered by the open popover")]
    InvalidSelection(char),

    #[error("Invalid key map: {0}")]
    InvalidKeyMap(String),
}

pub type Result<T> = std::result::Result<T, Error>;
