//! CEP postal code mask: `DDDDD-DDD`

use crate::digits::digits_only;
use crate::Masker;

/// Number of digits in a CEP
pub const POSTAL_CODE_DIGITS: usize = 8;

/// Formats 8-digit postal codes as `DDDDD-DDD`
#[derive(Debug, Clone, Copy, Default)]
pub struct PostalCodeMasker;

impl PostalCodeMasker {
    /// Create the masker
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Masker for PostalCodeMasker {
    fn mask(&self, value: &str) -> String {
        let digits = digits_only(value);
        if digits.len() != POSTAL_CODE_DIGITS {
            return value.to_string();
        }
        format!("{}-{}", &digits[0..5], &digits[5..8])
    }
}

/// Mask a postal code with [`PostalCodeMasker`]
#[must_use]
pub fn mask_postal_code(value: &str) -> String {
    PostalCodeMasker.mask(value)
}
