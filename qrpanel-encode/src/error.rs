use thiserror::Error;

/// Errors originating from the QR encoding pipeline.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The payload does not fit any supported symbol size at the requested
    /// correction level. Recoverable: the caller keeps the state editable
    /// and shows a placeholder instead of a matrix.
    #[error("payload does not fit the supported symbol sizes: {0}")]
    DataTooLong(String),

    #[error("invalid module grid side: {0} (must be 21..=61 in steps of 4)")]
    InvalidGridSize(u32),

    #[error(transparent)]
    Core(#[from] qrpanel_core::CoreError),
}
