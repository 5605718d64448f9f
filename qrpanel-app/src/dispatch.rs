//! Single-consumer event loop: serializes all state mutation and drives the
//! regeneration scheduler.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use eframe::egui;
use tracing::{debug, info, warn};

use qrpanel_core::{InputEvent, InputOutcome, PanelConfig, PayloadSpec, TickOutcome};
use qrpanel_encode::encode_payload;

use crate::input::{to_input_event, KeyInput, KeyPhase};
use crate::store::{MatrixSlot, SharedStore};

/// Events consumed by the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelEvent {
    Key(KeyInput),
    Tick,
}

/// Upper bound on one blocking wait. A timeout is a normal "no event"
/// outcome; it only guarantees the loop keeps making progress even if the
/// tick source dies.
const EVENT_WAIT: Duration = Duration::from_millis(500);

/// Run the dispatch loop until an exit event arrives or every sender is
/// gone.
///
/// This thread is the only writer of the store. Parameters are read under
/// the lock, the encoder runs outside it, and because edits and
/// regenerations are serialized here, a finished matrix always matches the
/// parameters that clear the dirty flag.
pub(crate) fn run_event_loop(
    store: &SharedStore,
    events: &Receiver<PanelEvent>,
    payload: &PayloadSpec,
    config: &PanelConfig,
    ctx: &egui::Context,
) {
    info!("dispatch loop running");
    loop {
        match events.recv_timeout(EVENT_WAIT) {
            Ok(PanelEvent::Key(input)) => {
                // Repeat and release phases are delivered but never mutate
                // parameters; key auto-repeat would otherwise double-edit.
                if input.phase != KeyPhase::Press {
                    continue;
                }
                let event = to_input_event(input.key);
                if event == InputEvent::Exit {
                    info!("exit requested");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    break;
                }
                let outcome = store.apply(|state| state.params.apply_input(event));
                if outcome == InputOutcome::Changed {
                    ctx.request_repaint();
                }
            }
            Ok(PanelEvent::Tick) => {
                let (decision, dirty) = store.apply(|state| {
                    let decision = state.params.on_tick(config.debounce_ticks);
                    (decision, state.params.dirty)
                });
                match decision {
                    TickOutcome::Regenerate => {
                        regenerate(store, payload);
                        ctx.request_repaint();
                    }
                    // Repaint while waiting so the processing indicator can
                    // reflect the elapsed ticks.
                    TickOutcome::Idle if dirty => ctx.request_repaint(),
                    TickOutcome::Idle => {}
                }
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                info!("event sources disconnected; dispatch loop stopping");
                break;
            }
        }
    }
}

/// Invoke the encoder for the current parameters and store the outcome.
///
/// A failed encode records the failure and clears the dirty flag, so a
/// configuration that cannot fit does not retry every tick; the next edit
/// reopens the window.
fn regenerate(store: &SharedStore, payload: &PayloadSpec) {
    let params = store.apply(|state| state.params);
    let text = payload.render(params.counter);
    match encode_payload(&text, params.ecc, params.mask) {
        Ok(grid) => {
            debug!(side = grid.side(), "matrix regenerated");
            store.apply(|state| {
                state.matrix = MatrixSlot::Ready(grid);
                state.params.finish_regeneration();
            });
        }
        Err(err) => {
            warn!("encoding failed: {err}");
            store.apply(|state| {
                state.matrix = MatrixSlot::Failed;
                state.params.finish_regeneration();
            });
        }
    }
}
