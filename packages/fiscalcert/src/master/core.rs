//! Core Master Builder
//!
//! Main entry point for all fiscalcert operations

#[cfg(feature = "certificate")]
use super::CertificateMasterBuilder;

#[cfg(feature = "mask")]
use super::MaskMasterBuilder;

/// Master builder providing a unified entry point for all fiscalcert operations
#[derive(Debug, Clone, Copy)]
pub struct FiscalCert;

impl FiscalCert {
    /// Entry point for certificate inspection
    /// Example: `FiscalCert::certificate().der().inspect(bytes, password)`
    #[cfg(feature = "certificate")]
    #[must_use]
    pub fn certificate() -> CertificateMasterBuilder {
        CertificateMasterBuilder::new()
    }

    /// Entry point for field masks
    /// Example: `FiscalCert::mask().tax_id("12345678000199")`
    #[cfg(feature = "mask")]
    #[must_use]
    pub fn mask() -> MaskMasterBuilder {
        MaskMasterBuilder
    }
}
