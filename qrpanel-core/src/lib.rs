pub mod config;
pub mod error;
pub mod params;
pub mod payload;
pub mod state;

// Re-export primary types for convenience.
pub use config::PanelConfig;
pub use error::CoreError;
pub use params::{EccLevel, EditableParameter, MaskSelection, COUNTER_DIGITS, MAX_COUNTER};
pub use payload::{PayloadSpec, MAX_PAYLOAD_LEN};
pub use state::{InputEvent, InputOutcome, ParamState, TickOutcome};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
