use crate::error::CoreError;
use crate::params::{COUNTER_DIGITS, MAX_COUNTER};

/// Maximum text length the encoder accepts in alphanumeric mode across the
/// supported symbol sizes (version 11 at the lowest correction level).
pub const MAX_PAYLOAD_LEN: usize = 468;

/// Whether `c` belongs to the QR alphanumeric subset:
/// `0-9`, `A-Z` (upper-case only), space, `$ % * + - . / :`.
pub fn is_qr_alphanumeric(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='Z' | ' ' | '$' | '%' | '*' | '+' | '-' | '.' | '/' | ':')
}

/// Validated payload template: a fixed prefix followed by the zero-padded
/// decimal counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSpec {
    prefix: String,
}

impl PayloadSpec {
    /// Validate a prefix. It must stay within the alphanumeric subset and
    /// leave room for the counter digits under [`MAX_PAYLOAD_LEN`].
    pub fn new(prefix: impl Into<String>) -> crate::Result<Self> {
        let prefix = prefix.into();
        if let Some(found) = prefix.chars().find(|c| !is_qr_alphanumeric(*c)) {
            return Err(CoreError::NotAlphanumeric { found });
        }
        let max = MAX_PAYLOAD_LEN - COUNTER_DIGITS;
        if prefix.len() > max {
            return Err(CoreError::PrefixTooLong {
                len: prefix.len(),
                max,
            });
        }
        Ok(Self { prefix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Render the payload for a counter value.
    pub fn render(&self, counter: u32) -> String {
        debug_assert!(counter <= MAX_COUNTER);
        format!("{}{:0width$}", self.prefix, counter, width = COUNTER_DIGITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_zero_pads_the_counter() {
        let spec = PayloadSpec::new("MIP").unwrap();
        assert_eq!(spec.render(7), "MIP000007");
        assert_eq!(spec.render(100_609), "MIP100609");
        assert_eq!(spec.render(MAX_COUNTER), "MIP999999");
    }

    #[test]
    fn empty_prefix_is_allowed() {
        let spec = PayloadSpec::new("").unwrap();
        assert_eq!(spec.render(42), "000042");
    }

    #[test]
    fn lowercase_prefix_is_rejected() {
        let err = PayloadSpec::new("mip").unwrap_err();
        assert!(matches!(err, CoreError::NotAlphanumeric { found: 'm' }));
    }

    #[test]
    fn non_ascii_prefix_is_rejected() {
        assert!(PayloadSpec::new("CAFÉ").is_err());
    }

    #[test]
    fn punctuation_subset_is_allowed() {
        assert!(PayloadSpec::new("HTTP://X.Y/Z-1 $%*+:").is_ok());
    }

    #[test]
    fn prefix_length_is_bounded() {
        let max = MAX_PAYLOAD_LEN - COUNTER_DIGITS;
        assert!(PayloadSpec::new("A".repeat(max)).is_ok());
        let err = PayloadSpec::new("A".repeat(max + 1)).unwrap_err();
        assert!(matches!(err, CoreError::PrefixTooLong { .. }));
    }
}
