use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use qrpanel_core::PanelConfig;

/// On-disk application preferences: the panel configuration plus display
/// options.
///
/// This is configuration, not state: the panel always starts from these
/// values, and nothing edited at runtime is ever written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AppPreferences {
    /// Integer upscale of the 128×64 panel at startup.
    #[serde(default = "default_display_zoom")]
    pub(crate) display_zoom: u32,

    #[serde(default)]
    pub(crate) panel: PanelConfig,
}

fn default_display_zoom() -> u32 {
    4
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            display_zoom: default_display_zoom(),
            panel: PanelConfig::default(),
        }
    }
}

impl AppPreferences {
    /// Load preferences from the file next to the executable, falling back
    /// to defaults. A missing file is written once so the values are
    /// discoverable and editable.
    pub(crate) fn load_or_init() -> Self {
        let path = config_path();
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                Ok(prefs) => {
                    info!("Loaded preferences from {}", path.display());
                    prefs
                }
                Err(e) => {
                    error!("Failed to parse preferences: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No preferences file at {}", path.display());
                let defaults = Self::default();
                defaults.write_to(&path);
                defaults
            }
        }
    }

    fn write_to(&self, path: &PathBuf) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write default preferences: {e}");
                } else {
                    info!("Wrote default preferences to {}", path.display());
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }
}

fn config_path() -> PathBuf {
    exe_directory().join("qrpanel.json")
}

/// Directory containing the running executable. Falls back to the current
/// directory if unavailable.
fn exe_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
