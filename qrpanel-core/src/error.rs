use thiserror::Error;

/// Errors originating from the parameter domain.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{found:?} is outside the QR alphanumeric subset")]
    NotAlphanumeric { found: char },

    #[error("payload prefix too long: {len} chars (max {max})")]
    PrefixTooLong { len: usize, max: usize },

    #[error("initial counter out of range: {0} (max {1})")]
    InvalidInitialCounter(u32, u32),

    #[error("invalid debounce window: {0} ticks (must be >= 1)")]
    InvalidDebounceTicks(u32),

    #[error("invalid tick period: {0} ms (must be >= 1)")]
    InvalidTickPeriod(u64),
}
