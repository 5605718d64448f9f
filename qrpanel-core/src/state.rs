use tracing::debug;

use crate::config::PanelConfig;
use crate::params::{EccLevel, EditableParameter, MaskSelection, MAX_COUNTER};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A discrete input event, after key mapping, as consumed by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    SelectPrevious,
    SelectNext,
    Decrease,
    Increase,
    /// Reserved control; currently has no effect on the state.
    Confirm,
    /// Terminates the event loop. Never mutates the state.
    Exit,
}

/// What an input event did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// State changed; the display should be refreshed.
    Changed,
    /// Nothing changed.
    Unchanged,
    /// The caller should terminate its loop. State untouched.
    ExitRequested,
}

/// Decision taken by the regeneration scheduler on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    /// The debounce window elapsed; the encoder should run now.
    Regenerate,
}

// ---------------------------------------------------------------------------
// Parameter state
// ---------------------------------------------------------------------------

/// The editable parameter set plus the bookkeeping that drives regeneration.
///
/// `dirty` marks the cached matrix stale; `ticks_since_edit` counts scheduler
/// ticks since the last value edit. Any edit restarts the window, so a burst
/// of key presses produces a single regeneration once the user settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamState {
    pub selected: EditableParameter,
    pub counter: u32,
    pub ecc: EccLevel,
    pub mask: MaskSelection,
    pub dirty: bool,
    pub ticks_since_edit: u32,
}

impl ParamState {
    /// Initial state from the configured defaults, marked dirty so the first
    /// debounce window produces a matrix without requiring an edit.
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            selected: EditableParameter::Counter,
            counter: config.initial_counter,
            ecc: config.ecc,
            mask: config.mask,
            dirty: true,
            ticks_since_edit: 0,
        }
    }

    /// Apply one input event. Selection moves never dirty the state; value
    /// edits do, and restart the debounce window.
    pub fn apply_input(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::SelectPrevious => {
                self.selected = self.selected.previous();
                InputOutcome::Changed
            }
            InputEvent::SelectNext => {
                self.selected = self.selected.next();
                InputOutcome::Changed
            }
            InputEvent::Decrease => {
                self.edit_selected(false);
                InputOutcome::Changed
            }
            InputEvent::Increase => {
                self.edit_selected(true);
                InputOutcome::Changed
            }
            InputEvent::Confirm => InputOutcome::Unchanged,
            InputEvent::Exit => InputOutcome::ExitRequested,
        }
    }

    fn edit_selected(&mut self, increase: bool) {
        match self.selected {
            EditableParameter::Counter => {
                self.counter = if increase {
                    if self.counter >= MAX_COUNTER {
                        0
                    } else {
                        self.counter + 1
                    }
                } else if self.counter == 0 {
                    MAX_COUNTER
                } else {
                    self.counter - 1
                };
            }
            EditableParameter::ErrorCorrection => {
                self.ecc = if increase {
                    self.ecc.next()
                } else {
                    self.ecc.previous()
                };
            }
            EditableParameter::Mask => {
                self.mask = if increase {
                    self.mask.next()
                } else {
                    self.mask.previous()
                };
            }
        }
        self.dirty = true;
        self.ticks_since_edit = 0;
        debug!(
            selected = self.selected.label(),
            counter = self.counter,
            ecc = self.ecc.label(),
            mask = self.mask.label(),
            "parameter edited"
        );
    }

    /// Advance the debounce window by one tick.
    ///
    /// Regeneration fires once the state has stayed dirty for
    /// `debounce_ticks` consecutive ticks with no intervening edit.
    pub fn on_tick(&mut self, debounce_ticks: u32) -> TickOutcome {
        if !self.dirty {
            return TickOutcome::Idle;
        }
        self.ticks_since_edit += 1;
        if self.ticks_since_edit >= debounce_ticks {
            TickOutcome::Regenerate
        } else {
            TickOutcome::Idle
        }
    }

    /// Mark the current parameters as reflected by the cached matrix (or by
    /// the recorded failure) and close the debounce window.
    pub fn finish_regeneration(&mut self) {
        self.dirty = false;
        self.ticks_since_edit = 0;
    }
}
