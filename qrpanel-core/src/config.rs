use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::params::{EccLevel, MaskSelection, MAX_COUNTER};
use crate::payload::PayloadSpec;

/// Startup configuration for the panel.
///
/// Everything a fixed firmware build would bake in is supplied here instead:
/// the payload prefix, the counter preset, the default encoding parameters,
/// and the regeneration timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Fixed payload prefix; the zero-padded counter is appended to it.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Counter value preset at startup.
    #[serde(default = "default_initial_counter")]
    pub initial_counter: u32,

    /// Error-correction level preset at startup.
    #[serde(default = "default_ecc")]
    pub ecc: EccLevel,

    /// Mask selection preset at startup.
    #[serde(default)]
    pub mask: MaskSelection,

    /// Quiet ticks required after the last edit before re-encoding.
    #[serde(default = "default_debounce_ticks")]
    pub debounce_ticks: u32,

    /// Period of the scheduler tick, in milliseconds. The debounce window is
    /// `debounce_ticks * tick_period_ms`, tunable independently.
    #[serde(default = "default_tick_period_ms")]
    pub tick_period_ms: u64,
}

fn default_prefix() -> String {
    "MIP".into()
}
fn default_initial_counter() -> u32 {
    100_609
}
fn default_ecc() -> EccLevel {
    EccLevel::Medium
}
fn default_debounce_ticks() -> u32 {
    2
}
fn default_tick_period_ms() -> u64 {
    250
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            initial_counter: default_initial_counter(),
            ecc: default_ecc(),
            mask: MaskSelection::default(),
            debounce_ticks: default_debounce_ticks(),
            tick_period_ms: default_tick_period_ms(),
        }
    }
}

impl PanelConfig {
    /// Validate the configuration and build the payload template from it.
    pub fn payload_spec(&self) -> crate::Result<PayloadSpec> {
        if self.initial_counter > MAX_COUNTER {
            return Err(CoreError::InvalidInitialCounter(
                self.initial_counter,
                MAX_COUNTER,
            ));
        }
        if self.debounce_ticks == 0 {
            return Err(CoreError::InvalidDebounceTicks(self.debounce_ticks));
        }
        if self.tick_period_ms == 0 {
            return Err(CoreError::InvalidTickPeriod(self.tick_period_ms));
        }
        PayloadSpec::new(self.prefix.clone())
    }
}
