//! Read-only renderer: draws the simulated 128×64 panel from a state
//! snapshot. Drawing the same snapshot twice yields the same pixels.

use eframe::egui;

use qrpanel_core::{EditableParameter, ParamState};
use qrpanel_encode::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::store::{MatrixSlot, PanelState};

// LCD-ish palette for the simulated panel.
const BEZEL: egui::Color32 = egui::Color32::from_rgb(30, 30, 34);
const SCREEN_BG: egui::Color32 = egui::Color32::from_rgb(142, 154, 120);
const SCREEN_FG: egui::Color32 = egui::Color32::from_rgb(24, 28, 18);

/// Left edge of the parameter column, in device pixels. The QR pane owns
/// everything left of it.
const PARAM_COLUMN_X: u32 = 67;

// ---------------------------------------------------------------------------
// Device-pixel painter
// ---------------------------------------------------------------------------

/// Draw primitives addressed in device pixels, origin top-left.
struct ScreenPainter<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    px: f32,
}

impl ScreenPainter<'_> {
    fn device_rect(&self, x: u32, y: u32, w: u32, h: u32) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                self.origin.x + x as f32 * self.px,
                self.origin.y + y as f32 * self.px,
            ),
            egui::vec2(w as f32 * self.px, h as f32 * self.px),
        )
    }

    /// Fill a rectangle of device pixels.
    fn fill_rect(&self, x: u32, y: u32, w: u32, h: u32, color: egui::Color32) {
        self.painter.rect_filled(self.device_rect(x, y, w, h), 0.0, color);
    }

    /// One-device-pixel frame, drawn as four fills so the edges stay crisp
    /// at any zoom.
    fn draw_frame(&self, x: u32, y: u32, w: u32, h: u32, color: egui::Color32) {
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, y + h - 1, w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(x + w - 1, y, 1, h, color);
    }

    /// Anchored text; `size` is the font height in device pixels.
    fn text(&self, x: u32, y: u32, anchor: egui::Align2, text: &str, size: f32, color: egui::Color32) {
        self.painter.text(
            egui::pos2(
                self.origin.x + x as f32 * self.px,
                self.origin.y + y as f32 * self.px,
            ),
            anchor,
            text,
            egui::FontId::monospace(size * self.px),
            color,
        );
    }
}

// ---------------------------------------------------------------------------
// Panel rendering
// ---------------------------------------------------------------------------

/// Render one frame of the panel, centered in the available area at the
/// largest whole-pixel zoom that fits.
pub(crate) fn draw_panel(ui: &mut egui::Ui, state: &PanelState) {
    let available = ui.available_size();
    let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());
    painter.rect_filled(response.rect, 0.0, BEZEL);

    let px = (available.x / SCREEN_WIDTH as f32)
        .min(available.y / SCREEN_HEIGHT as f32)
        .floor()
        .max(1.0);
    let screen_size = egui::vec2(SCREEN_WIDTH as f32 * px, SCREEN_HEIGHT as f32 * px);
    let origin = egui::pos2(
        (response.rect.center().x - screen_size.x / 2.0).floor(),
        (response.rect.center().y - screen_size.y / 2.0).floor(),
    );
    painter.rect_filled(
        egui::Rect::from_min_size(origin, screen_size),
        0.0,
        SCREEN_BG,
    );

    let screen = ScreenPainter {
        painter: &painter,
        origin,
        px,
    };
    draw_matrix_pane(&screen, state);
    draw_parameter_rows(&screen, &state.params);
}

/// The left pane: the matrix itself, or a processing/error placeholder.
fn draw_matrix_pane(screen: &ScreenPainter<'_>, state: &PanelState) {
    if state.params.dirty {
        // The cached matrix is stale; show progress instead of stale cells.
        let dots = (state.params.ticks_since_edit as usize).min(3);
        let label = format!("WORKING{}", ".".repeat(dots));
        screen.text(32, 32, egui::Align2::CENTER_CENTER, &label, 6.0, SCREEN_FG);
        return;
    }
    match &state.matrix {
        MatrixSlot::Ready(grid) => {
            let layout = grid.layout();
            for y in 0..grid.side() {
                for x in 0..grid.side() {
                    if grid.module(x, y) {
                        screen.fill_rect(
                            x * layout.scale + layout.offset_x,
                            y * layout.scale + layout.offset_y,
                            layout.scale,
                            layout.scale,
                            SCREEN_FG,
                        );
                    }
                }
            }
        }
        MatrixSlot::Failed => {
            screen.draw_frame(1, 1, 62, 62, SCREEN_FG);
            screen.text(32, 32, egui::Align2::CENTER_CENTER, "TOO LONG", 6.0, SCREEN_FG);
        }
        MatrixSlot::Empty => {
            screen.draw_frame(1, 1, 62, 62, SCREEN_FG);
            screen.text(32, 32, egui::Align2::CENTER_CENTER, "NO DATA", 6.0, SCREEN_FG);
        }
    }
}

/// The right pane: one row per editable parameter, the selected row drawn
/// inverted.
fn draw_parameter_rows(screen: &ScreenPainter<'_>, params: &ParamState) {
    screen.text(127, 2, egui::Align2::RIGHT_TOP, "QRPanel", 6.0, SCREEN_FG);

    let rows = [
        (EditableParameter::Counter, format!("{:06}", params.counter)),
        (
            EditableParameter::ErrorCorrection,
            params.ecc.label().to_string(),
        ),
        (EditableParameter::Mask, params.mask.label().to_string()),
    ];
    for (i, (param, value)) in rows.iter().enumerate() {
        let y = 16 + i as u32 * 12;
        let selected = *param == params.selected;
        if selected {
            screen.fill_rect(
                PARAM_COLUMN_X,
                y - 1,
                SCREEN_WIDTH - PARAM_COLUMN_X,
                9,
                SCREEN_FG,
            );
        }
        let color = if selected { SCREEN_BG } else { SCREEN_FG };
        screen.text(69, y, egui::Align2::LEFT_TOP, param.label(), 6.0, color);
        screen.text(127, y, egui::Align2::RIGHT_TOP, value, 6.0, color);
    }

    screen.text(
        127,
        56,
        egui::Align2::RIGHT_TOP,
        "BACK QUITS",
        5.0,
        SCREEN_FG,
    );
}
