use qrcodegen::{Mask, QrCode, QrCodeEcc, QrSegment, Version};
use tracing::debug;

use qrpanel_core::payload::is_qr_alphanumeric;
use qrpanel_core::{CoreError, EccLevel, MaskSelection};

use crate::error::EncodeError;
use crate::grid::ModuleGrid;

/// Smallest and largest symbol versions the panel supports (21×21 to 61×61).
pub const MIN_VERSION: u8 = 1;
pub const MAX_VERSION: u8 = 11;

/// Encode a payload into a module grid.
///
/// `EccLevel::Auto` requests the lowest correction level but lets the
/// encoder boost it when the payload still fits the selected symbol size;
/// explicit levels pass through with boosting disabled. `MaskSelection::Auto`
/// delegates mask scoring to the encoder, otherwise the exact pattern is
/// forced. The version range is pinned to the panel's supported sizes.
pub fn encode_payload(
    text: &str,
    ecc: EccLevel,
    mask: MaskSelection,
) -> crate::Result<ModuleGrid> {
    if let Some(found) = text.chars().find(|c| !is_qr_alphanumeric(*c)) {
        return Err(CoreError::NotAlphanumeric { found }.into());
    }

    let (level, boost) = match ecc {
        EccLevel::Auto => (QrCodeEcc::Low, true),
        EccLevel::Low => (QrCodeEcc::Low, false),
        EccLevel::Medium => (QrCodeEcc::Medium, false),
        EccLevel::Quartile => (QrCodeEcc::Quartile, false),
        EccLevel::High => (QrCodeEcc::High, false),
    };

    let segment = QrSegment::make_alphanumeric(text);
    let qr = QrCode::encode_segments_advanced(
        &[segment],
        level,
        Version::new(MIN_VERSION),
        Version::new(MAX_VERSION),
        mask.index().map(Mask::new),
        boost,
    )
    .map_err(|e| EncodeError::DataTooLong(e.to_string()))?;

    let side = qr.size() as u32;
    debug!(len = text.len(), side, "payload encoded");

    let mut modules = Vec::with_capacity((side * side) as usize);
    for y in 0..qr.size() {
        for x in 0..qr.size() {
            modules.push(qr.get_module(x, y));
        }
    }
    ModuleGrid::new(side, modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{MAX_SIDE, MIN_SIDE};

    #[test]
    fn encodes_the_default_payload() {
        let grid = encode_payload("MIP100609", EccLevel::Medium, MaskSelection::Auto).unwrap();
        assert!((MIN_SIDE..=MAX_SIDE).contains(&grid.side()));
        assert_eq!((grid.side() - MIN_SIDE) % 4, 0);
    }

    #[test]
    fn short_payload_uses_the_smallest_symbol() {
        let grid = encode_payload("MIP100609", EccLevel::Low, MaskSelection::Auto).unwrap();
        assert_eq!(grid.side(), MIN_SIDE);
    }

    #[test]
    fn auto_level_encodes_successfully() {
        assert!(encode_payload("MIP100609", EccLevel::Auto, MaskSelection::Auto).is_ok());
    }

    #[test]
    fn forced_masks_produce_distinct_grids() {
        let a = encode_payload("MIP100609", EccLevel::Medium, MaskSelection::Mask3).unwrap();
        let b = encode_payload("MIP100609", EccLevel::Medium, MaskSelection::Mask4).unwrap();
        // The format information encodes the mask index, so the grids differ.
        assert_ne!(a, b);
    }

    #[test]
    fn every_forced_mask_is_accepted() {
        let mut mask = MaskSelection::Mask0;
        for _ in 0..8 {
            assert!(encode_payload("MIP000001", EccLevel::Low, mask).is_ok());
            mask = mask.next();
        }
    }

    #[test]
    fn oversized_payload_at_high_level_fails() {
        // 306 alphanumeric chars fit version 11 at Low but not at High.
        let text = "A".repeat(300) + "100609";
        assert!(encode_payload(&text, EccLevel::Low, MaskSelection::Auto).is_ok());
        let err = encode_payload(&text, EccLevel::High, MaskSelection::Auto).unwrap_err();
        assert!(matches!(err, EncodeError::DataTooLong(_)));
    }

    #[test]
    fn payload_beyond_any_size_fails_even_at_low() {
        let text = "A".repeat(500);
        let err = encode_payload(&text, EccLevel::Low, MaskSelection::Auto).unwrap_err();
        assert!(matches!(err, EncodeError::DataTooLong(_)));
    }

    #[test]
    fn non_alphanumeric_payload_is_rejected_before_encoding() {
        let err = encode_payload("mip100609", EccLevel::Medium, MaskSelection::Auto).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::Core(CoreError::NotAlphanumeric { found: 'm' })
        ));
    }
}
