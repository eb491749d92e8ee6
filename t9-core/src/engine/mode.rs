//! Input mode switching

use crate::types::InputMode;

/// Holds the current [`InputMode`]. Starts in `Lower`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeState {
    mode: InputMode,
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Flip between lower and upper case. Returns whether the mode changed;
    /// numeric mode is left alone.
    pub fn toggle_alpha_case(&mut self) -> bool {
        self.mode = match self.mode {
            InputMode::Lower => InputMode::Upper,
            InputMode::Upper => InputMode::Lower,
            InputMode::Numeric => return false,
        };
        true
    }

    /// Enter numeric mode, or leave it. Leaving always lands on `Lower`.
    pub fn toggle_numeric(&mut self) -> InputMode {
        self.mode = match self.mode {
            InputMode::Numeric => InputMode::Lower,
            InputMode::Lower | InputMode::Upper => InputMode::Numeric,
        };
        self.mode
    }

    pub fn reset(&mut self) {
        self.mode = InputMode::Lower;
    }
}
