//! # fiscalcert
//!
//! Validation of the digital certificate a company stores on its fiscal
//! record, plus the display masks applied to its tax ID and postal code.
//!
//! ## Features
//!
//! - `certificate` - PKCS#12 certificate inspection
//! - `mask` - CNPJ tax ID and CEP postal code masks
//! - `full` - both of the above (default)
//!
//! ## Example
//!
//! ```no_run
//! use fiscalcert::{CertificateState, FiscalCert};
//!
//! let stored: &[u8] = b"MIIJ..."; // base64 PKCS#12 from the company record
//! let result = FiscalCert::certificate().inspect(stored, "password");
//! if result.state() != CertificateState::Valid {
//!     eprintln!("certificate is {}", result.state());
//! }
//!
//! assert_eq!(FiscalCert::mask().tax_id("12345678000199"), "12.345.678/0001-99");
//! assert_eq!(FiscalCert::mask().postal_code("01310100"), "01310-100");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

// === Core Modules ===

#[cfg(any(feature = "certificate", feature = "mask"))]
mod master;

#[cfg(any(feature = "certificate", feature = "mask"))]
pub use master::FiscalCert;

#[cfg(feature = "certificate")]
pub use master::CertificateMasterBuilder;

#[cfg(feature = "mask")]
pub use master::MaskMasterBuilder;

// === Core Re-exports ===

pub use fiscalcert_common::LoggingTransformer;

#[cfg(feature = "certificate")]
#[cfg_attr(docsrs, doc(cfg(feature = "certificate")))]
pub use fiscalcert_certificate::{
    inspect, CertificateEncoding, CertificateInspectionResult, CertificateInspector,
    CertificateState, Clock, FixedClock, InspectionError, InspectorConfig, LoadedCertificate,
    SubjectInfo, SystemClock,
};

#[cfg(feature = "mask")]
#[cfg_attr(docsrs, doc(cfg(feature = "mask")))]
pub use fiscalcert_mask::{
    digits_only, mask_postal_code, mask_tax_id, Masker, PostalCodeMasker, TaxIdMasker,
};

/// Component crates, for items not re-exported at the root
pub mod components {
    #[cfg(feature = "certificate")]
    #[cfg_attr(docsrs, doc(cfg(feature = "certificate")))]
    pub use fiscalcert_certificate as certificate;

    pub use fiscalcert_common as common;

    #[cfg(feature = "mask")]
    #[cfg_attr(docsrs, doc(cfg(feature = "mask")))]
    pub use fiscalcert_mask as mask;
}

/// Common imports
pub mod prelude {
    #[cfg(any(feature = "certificate", feature = "mask"))]
    pub use crate::FiscalCert;

    #[cfg(feature = "certificate")]
    pub use crate::{
        CertificateInspectionResult, CertificateInspector, CertificateState, Clock,
        InspectorConfig,
    };

    #[cfg(feature = "mask")]
    pub use crate::Masker;
}
