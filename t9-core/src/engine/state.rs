use super::cycle::CycleTracker;
use super::mode::ModeState;
use super::popover::PopoverState;
use crate::types::{InputMode, KeyId};

/// Everything the engine remembers between events
#[derive(Debug, Clone)]
pub struct EngineState {
    pub(super) mode: ModeState,
    pub(super) cycle: CycleTracker,
    pub(super) popover: Option<PopoverState>,
}

impl EngineState {
    pub fn new(cycle_timeout_ms: u64) -> Self {
        Self {
            mode: ModeState::new(),
            cycle: CycleTracker::new(cycle_timeout_ms),
            popover: None,
        }
    }

    /// Reset the engine state completely
    pub fn reset(&mut self) {
        self.mode.reset();
        self.cycle.reset();
        self.popover = None;
    }

    pub fn mode(&self) -> InputMode {
        self.mode.mode()
    }

    pub fn active_key(&self) -> Option<KeyId> {
        self.cycle.active_key()
    }

    pub fn cycle(&self) -> &CycleTracker {
        &self.cycle
    }

    pub fn popover(&self) -> Option<&PopoverState> {
        self.popover.as_ref()
    }
}
