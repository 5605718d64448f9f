//! Encode/decode round-trips through an independent decoder (`rqrr`).

use qrpanel_core::{EccLevel, MaskSelection, PayloadSpec};
use qrpanel_encode::encode_payload;
use qrpanel_encode::export::rasterize;
use qrpanel_encode::ModuleGrid;

/// Decode a grid by rasterizing it and handing the pixels to `rqrr`.
fn decode(grid: &ModuleGrid) -> String {
    let (pixels, side_px) = rasterize(grid, 8);
    let side_px = side_px as usize;
    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(side_px, side_px, |x, y| pixels[y * side_px + x]);
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one symbol in the image");
    let (_meta, content) = grids[0].decode().expect("decode should succeed");
    content
}

#[test]
fn roundtrip_recovers_the_payload_text() {
    let spec = PayloadSpec::new("MIP").unwrap();
    let text = spec.render(100_609);
    assert_eq!(text, "MIP100609");

    let grid = encode_payload(&text, EccLevel::Medium, MaskSelection::Auto).unwrap();
    assert_eq!(decode(&grid), "MIP100609");
}

#[test]
fn roundtrip_survives_a_forced_mask() {
    let grid = encode_payload("MIP100609", EccLevel::Medium, MaskSelection::Mask5).unwrap();
    assert_eq!(decode(&grid), "MIP100609");
}

#[test]
fn roundtrip_survives_every_correction_level() {
    for ecc in [
        EccLevel::Auto,
        EccLevel::Low,
        EccLevel::Medium,
        EccLevel::Quartile,
        EccLevel::High,
    ] {
        let grid = encode_payload("MIP100609", ecc, MaskSelection::Auto).unwrap();
        assert_eq!(decode(&grid), "MIP100609", "level {:?}", ecc);
    }
}

#[test]
fn roundtrip_of_a_larger_symbol() {
    // Long enough to push past version 1 while staying well within range.
    let spec = PayloadSpec::new("WORKSHOP BADGE NO. ").unwrap();
    let text = spec.render(31_337);
    let grid = encode_payload(&text, EccLevel::Quartile, MaskSelection::Auto).unwrap();
    assert!(grid.side() > 21);
    assert_eq!(decode(&grid), text);
}
