mod app;
mod dispatch;
mod input;
mod preferences;
mod screen;
mod store;

use eframe::egui;
use tracing::{error, info};

use qrpanel_encode::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::app::QrPanelApp;
use crate::preferences::AppPreferences;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting QRPanel");

    let prefs = AppPreferences::load_or_init();
    let payload = match prefs.panel.payload_spec() {
        Ok(spec) => spec,
        Err(e) => {
            // Fatal: report and leave without registering any window.
            error!("Invalid panel configuration: {e}");
            std::process::exit(2);
        }
    };

    let zoom = prefs.display_zoom.clamp(1, 12) as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("QRPanel")
            .with_inner_size([SCREEN_WIDTH as f32 * zoom, SCREEN_HEIGHT as f32 * zoom]),
        ..Default::default()
    };

    let config = prefs.panel.clone();
    eframe::run_native(
        "QRPanel",
        options,
        Box::new(move |cc| Ok(Box::new(QrPanelApp::new(&cc.egui_ctx, config, payload)))),
    )
}
