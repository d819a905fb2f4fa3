//! Display masks for company identification fields
//!
//! Both masks strip everything but ASCII digits and reformat only when the
//! digit count matches their format; any other input comes back unchanged.

#![forbid(unsafe_code)]

pub mod digits;
pub mod postal_code;
pub mod tax_id;

pub use digits::digits_only;
pub use postal_code::{mask_postal_code, PostalCodeMasker};
pub use tax_id::{mask_tax_id, TaxIdMasker};

/// A text transform applied whenever its field changes
pub trait Masker {
    /// Format `value`, or return it unchanged when it does not fit the mask
    fn mask(&self, value: &str) -> String;
}
