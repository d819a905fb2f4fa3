//! Mask master builder

use fiscalcert_mask::{Masker, PostalCodeMasker, TaxIdMasker};

/// Access to the field masks
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskMasterBuilder;

impl MaskMasterBuilder {
    /// Format a 14-digit tax ID as `XX.XXX.XXX/XXXX-XX`
    #[must_use]
    pub fn tax_id(self, value: &str) -> String {
        TaxIdMasker.mask(value)
    }

    /// Format an 8-digit postal code as `XXXXX-XXX`
    #[must_use]
    pub fn postal_code(self, value: &str) -> String {
        PostalCodeMasker.mask(value)
    }

    /// The tax ID masker, for hosts that hold maskers as trait objects
    #[must_use]
    pub fn tax_id_masker(self) -> TaxIdMasker {
        TaxIdMasker
    }

    /// The postal code masker
    #[must_use]
    pub fn postal_code_masker(self) -> PostalCodeMasker {
        PostalCodeMasker
    }
}
