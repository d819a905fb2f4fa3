//! Master builder for all fiscalcert operations
//!
//! Unified entry point, decomposed by operation type.

#[cfg(feature = "certificate")]
pub mod certificate;
pub mod core;
#[cfg(feature = "mask")]
pub mod mask;

// Re-export main types
pub use self::core::FiscalCert;

#[cfg(feature = "certificate")]
pub use certificate::CertificateMasterBuilder;

#[cfg(feature = "mask")]
pub use mask::MaskMasterBuilder;
