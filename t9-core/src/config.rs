//! Engine configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_CYCLE_TIMEOUT_MS: u64 = 1000;

/// Tunables for the decoding engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum gap between two presses of one key that still continues the cycle.
    /// The window is closed: a gap equal to the timeout continues.
    pub cycle_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cycle_timeout_ms: DEFAULT_CYCLE_TIMEOUT_MS,
        }
    }
}

impl EngineConfig {
    pub fn with_cycle_timeout(cycle_timeout_ms: u64) -> Self {
        Self { cycle_timeout_ms }
    }
}
