use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use eframe::egui;
use tracing::{debug, info};

use qrpanel_core::{PanelConfig, PayloadSpec};

use crate::dispatch::{run_event_loop, PanelEvent};
use crate::input::collect_key_inputs;
use crate::screen;
use crate::store::{PanelState, SharedStore};

/// Capacity of the bounded event queue.
///
/// Enqueues are best-effort: when the queue is full the newest event is
/// dropped and accepted events keep their order, so neither the input source
/// nor the tick source ever blocks.
pub(crate) const EVENT_QUEUE_CAPACITY: usize = 8;

pub(crate) struct QrPanelApp {
    store: SharedStore,
    event_tx: Option<SyncSender<PanelEvent>>,
    tick_stop: Arc<AtomicBool>,
    tick_thread: Option<thread::JoinHandle<()>>,
    dispatch_thread: Option<thread::JoinHandle<()>>,
}

impl QrPanelApp {
    /// Build the shared store and spawn the tick and dispatch threads.
    pub(crate) fn new(ctx: &egui::Context, config: PanelConfig, payload: PayloadSpec) -> Self {
        let store = SharedStore::new(PanelState::new(&config));
        let (event_tx, event_rx) = mpsc::sync_channel(EVENT_QUEUE_CAPACITY);

        let tick_stop = Arc::new(AtomicBool::new(false));
        let tick_period = Duration::from_millis(config.tick_period_ms);
        let tick_tx = event_tx.clone();
        let stop = tick_stop.clone();
        let tick_thread = thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                thread::sleep(tick_period);
                // Best-effort: a tick dropped on a full queue only stretches
                // the debounce window by one period.
                if let Err(TrySendError::Disconnected(_)) = tick_tx.try_send(PanelEvent::Tick) {
                    break;
                }
            }
        });

        let dispatch_store = store.clone();
        let dispatch_ctx = ctx.clone();
        let dispatch_thread = thread::spawn(move || {
            run_event_loop(&dispatch_store, &event_rx, &payload, &config, &dispatch_ctx);
        });

        Self {
            store,
            event_tx: Some(event_tx),
            tick_stop,
            tick_thread: Some(tick_thread),
            dispatch_thread: Some(dispatch_thread),
        }
    }

    /// Forward this frame's key events to the dispatch loop without ever
    /// blocking the UI thread.
    fn enqueue_input(&self, ctx: &egui::Context) {
        let Some(tx) = self.event_tx.as_ref() else {
            return;
        };
        for input in collect_key_inputs(ctx) {
            match tx.try_send(PanelEvent::Key(input)) {
                Ok(()) => {}
                Err(TrySendError::Full(event)) => {
                    debug!(?event, "event queue full; dropping newest");
                }
                Err(TrySendError::Disconnected(_)) => {}
            }
        }
    }
}

impl eframe::App for QrPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.enqueue_input(ctx);

        // The dispatch thread may mutate the store while we draw; the
        // snapshot keeps this frame consistent.
        let snapshot = self.store.snapshot();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                screen::draw_panel(ui, &snapshot);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Stop the tick source first so its sender drops, then drop our own;
        // the dispatch loop sees the disconnect and unwinds.
        self.tick_stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.tick_thread.take() {
            let _ = handle.join();
        }
        self.event_tx = None;
        if let Some(handle) = self.dispatch_thread.take() {
            let _ = handle.join();
        }
        info!("panel shut down");
    }
}
