use std::sync::{Arc, Mutex};

use qrpanel_core::{PanelConfig, ParamState};
use qrpanel_encode::ModuleGrid;

/// The cached render artifact, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MatrixSlot {
    /// Nothing computed yet.
    Empty,
    /// The last regeneration succeeded.
    Ready(ModuleGrid),
    /// The last regeneration failed; stays until an edit leads to a
    /// successful encode.
    Failed,
}

/// Everything the renderer needs in one snapshot: the editable parameters
/// and the matrix cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PanelState {
    pub(crate) params: ParamState,
    pub(crate) matrix: MatrixSlot,
}

impl PanelState {
    pub(crate) fn new(config: &PanelConfig) -> Self {
        Self {
            params: ParamState::new(config),
            matrix: MatrixSlot::Empty,
        }
    }
}

/// Shared handle to the panel state.
///
/// All mutation goes through [`apply`](Self::apply) and all rendering reads
/// through [`snapshot`](Self::snapshot), so every observer sees a consistent
/// state and the lock is held only for the closure or the clone. A poisoned
/// lock is recovered; the state itself is always structurally valid.
#[derive(Clone)]
pub(crate) struct SharedStore {
    inner: Arc<Mutex<PanelState>>,
}

impl SharedStore {
    pub(crate) fn new(state: PanelState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Run one atomic transition against the state.
    pub(crate) fn apply<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> R {
        let mut state = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut state)
    }

    /// Clone a consistent snapshot for rendering.
    pub(crate) fn snapshot(&self) -> PanelState {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
