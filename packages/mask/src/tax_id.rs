//! CNPJ tax ID mask: `DD.DDD.DDD/DDDD-DD`

use crate::digits::digits_only;
use crate::Masker;

/// Number of digits in a CNPJ
pub const TAX_ID_DIGITS: usize = 14;

/// Formats 14-digit tax IDs as `DD.DDD.DDD/DDDD-DD`
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxIdMasker;

impl TaxIdMasker {
    /// Create the masker
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Masker for TaxIdMasker {
    fn mask(&self, value: &str) -> String {
        let digits = digits_only(value);
        if digits.len() != TAX_ID_DIGITS {
            return value.to_string();
        }
        format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..14]
        )
    }
}

/// Mask a tax ID with [`TaxIdMasker`]
#[must_use]
pub fn mask_tax_id(value: &str) -> String {
    TaxIdMasker.mask(value)
}
