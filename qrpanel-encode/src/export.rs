//! PNG export of a module grid with embedded metadata (tEXt chunks).

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use crate::grid::ModuleGrid;

/// Modules of light quiet zone added around the exported symbol, as QR
/// readers expect.
pub const QUIET_ZONE: u32 = 4;

/// Parameter metadata to embed in an exported PNG as tEXt chunks.
pub struct ExportMetadata {
    pub payload: String,
    pub ecc: String,
    pub mask: String,
}

/// Rasterize a grid to 8-bit grayscale: light background, dark modules,
/// `scale` pixels per module, quiet zone included. Returns the pixels and
/// the image side length.
pub fn rasterize(grid: &ModuleGrid, scale: u32) -> (Vec<u8>, u32) {
    let scale = scale.max(1);
    let side_px = (grid.side() + 2 * QUIET_ZONE) * scale;
    let mut pixels = vec![255u8; (side_px * side_px) as usize];
    for y in 0..grid.side() {
        for x in 0..grid.side() {
            if !grid.module(x, y) {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = (x + QUIET_ZONE) * scale + dx;
                    let py = (y + QUIET_ZONE) * scale + dy;
                    pixels[(py * side_px + px) as usize] = 0;
                }
            }
        }
    }
    (pixels, side_px)
}

/// Write a grid as a grayscale PNG with embedded parameter metadata.
///
/// Uses the `png` crate directly so custom tEXt chunks can be injected,
/// readable by exiftool and most image viewers.
pub fn export_png(
    grid: &ModuleGrid,
    scale: u32,
    path: &Path,
    metadata: &ExportMetadata,
) -> Result<(), String> {
    let (pixels, side_px) = rasterize(grid, scale);

    let file = std::fs::File::create(path).map_err(|e| format!("Failed to create file: {e}"))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, side_px, side_px);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder
        .add_text_chunk("Software".to_string(), "QRPanel".to_string())
        .map_err(|e| format!("Failed to add text chunk: {e}"))?;
    let pairs = [
        ("QRPanel.Payload", metadata.payload.clone()),
        ("QRPanel.Ecc", metadata.ecc.clone()),
        ("QRPanel.Mask", metadata.mask.clone()),
        ("QRPanel.Side", grid.side().to_string()),
    ];
    for (key, value) in pairs {
        encoder
            .add_text_chunk(key.to_string(), value)
            .map_err(|e| format!("Failed to add text chunk '{key}': {e}"))?;
    }

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {e}"))?;
    png_writer
        .write_image_data(&pixels)
        .map_err(|e| format!("Failed to write PNG image data: {e}"))?;

    debug!("Exported {}x{} PNG to {}", side_px, side_px, path.display());
    Ok(())
}
