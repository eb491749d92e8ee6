use log::{debug, warn};

use crate::{
    Result,
    config::EngineConfig,
    keymap::KeyMap,
    types::{HelperKey, InputMode, Key, KeyId, Timestamp},
};
use super::{
    EngineState, InputEvent, EngineOutput, TextEdit, Notification,
    popover::{PopoverSelector, PopoverState},
};

/// The multi-tap decoding engine
///
/// One instance serves one logical keyboard. Events are processed one at a
/// time; each call returns the edits and notifications it produced.
#[derive(Debug, Clone)]
pub struct DecoderEngine {
    /// Character tables
    keymap: KeyMap,
    config: EngineConfig,
    /// Current engine state
    state: EngineState,
}

impl Default for DecoderEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            keymap: KeyMap::standard(),
            state: EngineState::new(config.cycle_timeout_ms),
            config,
        }
    }
}

impl DecoderEngine {
    /// Create an engine over a key map, validating the map first
    pub fn new(keymap: KeyMap, config: EngineConfig) -> Result<Self> {
        keymap.validate()?;
        Ok(Self {
            keymap,
            state: EngineState::new(config.cycle_timeout_ms),
            config,
        })
    }

    /// Process one input event
    pub fn process_event(&mut self, event: InputEvent) -> Result<EngineOutput> {
        if self.state.popover.is_some() {
            return Ok(match event {
                InputEvent::SymbolSelected(symbol) => self.handle_selection(symbol),
                InputEvent::Dismiss => self.close_popover(EngineOutput::none()),
                other => {
                    warn!("Dropping {:?} while the popover is open", other);
                    EngineOutput::none()
                }
            });
        }

        match event {
            InputEvent::KeyPress { key, at } => self.handle_press(key, at),
            InputEvent::LongPress { key } => Ok(self.handle_long_press(key)),
            InputEvent::SymbolSelected(symbol) => {
                debug!("Ignoring selection {:?} with no popover open", symbol);
                Ok(EngineOutput::none())
            }
            InputEvent::Dismiss => Ok(EngineOutput::none()),
        }
    }

    fn handle_press(&mut self, key: KeyId, at: Timestamp) -> Result<EngineOutput> {
        match Key::classify(key) {
            Some(Key::Helper(helper)) => Ok(self.handle_helper(helper)),
            Some(Key::Digit(id)) if self.keymap.contains(id) => self.handle_digit(id, at),
            _ => {
                warn!("Ignoring press of unregistered {}", key);
                Ok(EngineOutput::none())
            }
        }
    }

    fn handle_helper(&mut self, helper: HelperKey) -> EngineOutput {
        match helper {
            HelperKey::Confirm => EngineOutput::none().with_notification(Notification::Ready),
            HelperKey::Cancel => EngineOutput::none().with_notification(Notification::Cancel),
            HelperKey::Backspace => EngineOutput::none().with_edit(TextEdit::DeleteLastChar),
            HelperKey::Space => {
                self.state.cycle.break_cycle();
                EngineOutput::none().with_edit(TextEdit::InsertChar(' '))
            }
            HelperKey::ToggleNumeric => {
                let mode = self.state.mode.toggle_numeric();
                self.mode_changed(mode)
            }
            HelperKey::ToggleAlpha => {
                if self.state.mode.toggle_alpha_case() {
                    self.mode_changed(self.state.mode.mode())
                } else {
                    EngineOutput::none()
                }
            }
        }
    }

    fn mode_changed(&mut self, mode: InputMode) -> EngineOutput {
        // An open cycle never survives a mode switch
        self.state.cycle.reset();
        debug!("Mode changed to {}", mode);
        EngineOutput::none().with_notification(Notification::ModeChanged(mode))
    }

    fn handle_digit(&mut self, key: KeyId, at: Timestamp) -> Result<EngineOutput> {
        let mode = self.state.mode.mode();
        let outcome = self.state.cycle.press(&self.keymap, key, mode, at)?;

        let output = if outcome.continuation {
            EngineOutput::none().with_edit(TextEdit::DeleteLastChar)
        } else {
            EngineOutput::none()
        };
        Ok(output.with_edit(TextEdit::InsertChar(outcome.character)))
    }

    fn handle_long_press(&mut self, key: KeyId) -> EngineOutput {
        let mode = self.state.mode.mode();
        if mode == InputMode::Numeric {
            debug!("Long-press on {} ignored in numeric mode", key);
            return EngineOutput::none();
        }

        match PopoverSelector::open(&self.keymap, key, mode) {
            Some(popover) => {
                debug!("Opening popover for {} with {} symbols", key, popover.symbols.len());
                let notification = Notification::PopoverOpened {
                    source_key: popover.source_key,
                    symbols: popover.symbols.clone(),
                };
                self.state.popover = Some(popover);
                EngineOutput::none().with_notification(notification)
            }
            None => {
                debug!("{} has no long-press symbols", key);
                EngineOutput::none()
            }
        }
    }

    fn handle_selection(&mut self, symbol: char) -> EngineOutput {
        let Some(popover) = self.state.popover.as_ref() else {
            return EngineOutput::none();
        };

        match PopoverSelector::resolve(popover, symbol) {
            Ok(edit) => {
                // A picked symbol is never the target of a later continuation
                self.state.cycle.break_cycle();
                self.close_popover(EngineOutput::none().with_edit(edit))
            }
            Err(err) => {
                warn!("{}; keeping the popover open", err);
                EngineOutput::none()
            }
        }
    }

    fn close_popover(&mut self, output: EngineOutput) -> EngineOutput {
        self.state.popover = None;
        debug!("Popover closed");
        output.with_notification(Notification::PopoverClosed)
    }

    pub fn mode(&self) -> InputMode {
        self.state.mode()
    }

    pub fn is_popover_open(&self) -> bool {
        self.state.popover.is_some()
    }

    pub fn popover(&self) -> Option<&PopoverState> {
        self.state.popover()
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reset the engine state
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Get the current engine state (for debugging)
    pub fn state(&self) -> &EngineState {
        &self.state
    }
}
