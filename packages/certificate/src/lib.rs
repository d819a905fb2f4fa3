//! Company certificate inspection
//!
//! Decodes a base64-encoded PKCS#12 container, unlocks it with a password
//! and reports the end-entity certificate's expiry date, subject summary and
//! usability state:
//!
//! ```no_run
//! use fiscalcert_certificate::{CertificateInspector, CertificateState};
//!
//! let stored: &[u8] = b"MIIJ..."; // base64 PKCS#12 from the company record
//! let result = CertificateInspector::new().inspect(stored, "password");
//! if result.state() == CertificateState::Valid {
//!     println!("valid until {:?}", result.expire_date());
//! }
//! ```

#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod container;
pub mod error;
pub mod inspector;
pub mod parser;
pub mod result;
pub mod state;
pub mod subject;

// Re-export error types
pub use error::{InspectionError, Result};

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CertificateEncoding, InspectorConfig};
pub use inspector::{inspect, CertificateInspector};
pub use parser::LoadedCertificate;
pub use result::{CertificateInspectionResult, InconsistentResultError};
pub use state::{CertificateState, ParseStateError};
pub use subject::SubjectInfo;
