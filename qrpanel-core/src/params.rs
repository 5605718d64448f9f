use serde::{Deserialize, Serialize};

/// Highest value the counter parameter can hold. Incrementing past it wraps
/// to zero; decrementing below zero wraps back to it.
pub const MAX_COUNTER: u32 = 999_999;

/// Width of the zero-padded decimal counter in the payload.
pub const COUNTER_DIGITS: usize = 6;

// ---------------------------------------------------------------------------
// Editable parameter selection
// ---------------------------------------------------------------------------

/// The parameter currently targeted by value edits.
///
/// Selection is cyclic: `next` from [`Mask`](Self::Mask) returns to
/// [`Counter`](Self::Counter), and `previous` walks the same ring backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableParameter {
    Counter,
    ErrorCorrection,
    Mask,
}

impl EditableParameter {
    pub fn next(self) -> Self {
        match self {
            Self::Counter => Self::ErrorCorrection,
            Self::ErrorCorrection => Self::Mask,
            Self::Mask => Self::Counter,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Counter => Self::Mask,
            Self::ErrorCorrection => Self::Counter,
            Self::Mask => Self::ErrorCorrection,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Counter => "COUNT",
            Self::ErrorCorrection => "ECC",
            Self::Mask => "MASK",
        }
    }
}

// ---------------------------------------------------------------------------
// Error-correction level
// ---------------------------------------------------------------------------

/// Requested error-correction tier.
///
/// `Auto` asks the encoder for the lowest level but lets it boost to a
/// higher one when the payload still fits the chosen symbol size. The other
/// levels are passed through exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EccLevel {
    Auto,
    Low,
    Medium,
    Quartile,
    High,
}

impl EccLevel {
    pub fn next(self) -> Self {
        match self {
            Self::Auto => Self::Low,
            Self::Low => Self::Medium,
            Self::Medium => Self::Quartile,
            Self::Quartile => Self::High,
            Self::High => Self::Auto,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Auto => Self::High,
            Self::Low => Self::Auto,
            Self::Medium => Self::Low,
            Self::Quartile => Self::Medium,
            Self::High => Self::Quartile,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Low => "L",
            Self::Medium => "M",
            Self::Quartile => "Q",
            Self::High => "H",
        }
    }
}

// ---------------------------------------------------------------------------
// Mask selection
// ---------------------------------------------------------------------------

/// Requested mask pattern, `Auto` delegating the choice to the encoder's
/// penalty scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskSelection {
    #[default]
    Auto,
    Mask0,
    Mask1,
    Mask2,
    Mask3,
    Mask4,
    Mask5,
    Mask6,
    Mask7,
}

impl MaskSelection {
    pub fn next(self) -> Self {
        match self {
            Self::Auto => Self::Mask0,
            Self::Mask0 => Self::Mask1,
            Self::Mask1 => Self::Mask2,
            Self::Mask2 => Self::Mask3,
            Self::Mask3 => Self::Mask4,
            Self::Mask4 => Self::Mask5,
            Self::Mask5 => Self::Mask6,
            Self::Mask6 => Self::Mask7,
            Self::Mask7 => Self::Auto,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Auto => Self::Mask7,
            Self::Mask0 => Self::Auto,
            Self::Mask1 => Self::Mask0,
            Self::Mask2 => Self::Mask1,
            Self::Mask3 => Self::Mask2,
            Self::Mask4 => Self::Mask3,
            Self::Mask5 => Self::Mask4,
            Self::Mask6 => Self::Mask5,
            Self::Mask7 => Self::Mask6,
        }
    }

    /// The fixed mask index, or `None` for automatic selection.
    pub fn index(self) -> Option<u8> {
        match self {
            Self::Auto => None,
            Self::Mask0 => Some(0),
            Self::Mask1 => Some(1),
            Self::Mask2 => Some(2),
            Self::Mask3 => Some(3),
            Self::Mask4 => Some(4),
            Self::Mask5 => Some(5),
            Self::Mask6 => Some(6),
            Self::Mask7 => Some(7),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Mask0 => "0",
            Self::Mask1 => "1",
            Self::Mask2 => "2",
            Self::Mask3 => "3",
            Self::Mask4 => "4",
            Self::Mask5 => "5",
            Self::Mask6 => "6",
            Self::Mask7 => "7",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_cycles_through_all_parameters() {
        let mut selected = EditableParameter::Counter;
        let expected = [
            EditableParameter::Counter,
            EditableParameter::ErrorCorrection,
            EditableParameter::Mask,
        ];
        for want in expected {
            assert_eq!(selected, want);
            selected = selected.next();
        }
        assert_eq!(selected, EditableParameter::Counter);
    }

    #[test]
    fn ecc_next_visits_every_level_once() {
        let mut level = EccLevel::Auto;
        let expected = [
            EccLevel::Auto,
            EccLevel::Low,
            EccLevel::Medium,
            EccLevel::Quartile,
            EccLevel::High,
        ];
        for want in expected {
            assert_eq!(level, want);
            level = level.next();
        }
        assert_eq!(level, EccLevel::Auto, "should wrap back to Auto");
    }

    #[test]
    fn ecc_previous_inverts_next() {
        for level in [
            EccLevel::Auto,
            EccLevel::Low,
            EccLevel::Medium,
            EccLevel::Quartile,
            EccLevel::High,
        ] {
            assert_eq!(level.next().previous(), level);
            assert_eq!(level.previous().next(), level);
        }
    }

    #[test]
    fn ecc_wraps_at_both_ends() {
        assert_eq!(EccLevel::High.next(), EccLevel::Auto);
        assert_eq!(EccLevel::Auto.previous(), EccLevel::High);
    }

    #[test]
    fn mask_wraps_at_both_ends() {
        assert_eq!(MaskSelection::Mask7.next(), MaskSelection::Auto);
        assert_eq!(MaskSelection::Auto.previous(), MaskSelection::Mask7);
    }

    #[test]
    fn mask_next_visits_all_nine_values() {
        let mut mask = MaskSelection::Auto;
        let mut seen = Vec::new();
        for _ in 0..9 {
            seen.push(mask);
            mask = mask.next();
        }
        assert_eq!(mask, MaskSelection::Auto);
        seen.sort_by_key(|m| m.index().map_or(-1, i64::from));
        seen.dedup();
        assert_eq!(seen.len(), 9, "no value skipped or repeated");
    }

    #[test]
    fn mask_index_matches_variant() {
        assert_eq!(MaskSelection::Auto.index(), None);
        assert_eq!(MaskSelection::Mask0.index(), Some(0));
        assert_eq!(MaskSelection::Mask7.index(), Some(7));
    }
}
