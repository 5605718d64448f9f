pub mod encoder;
pub mod error;
pub mod export;
pub mod grid;

// Re-export primary types for convenience.
pub use encoder::{encode_payload, MAX_VERSION, MIN_VERSION};
pub use error::EncodeError;
pub use grid::{DisplayLayout, ModuleGrid, MAX_SIDE, MIN_SIDE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Convenience result type for the encode crate.
pub type Result<T> = std::result::Result<T, EncodeError>;
