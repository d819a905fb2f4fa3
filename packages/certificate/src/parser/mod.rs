//! X.509 leaf certificate parsing
//!
//! - `core`: DER decoding and assembly of the loaded certificate metadata
//! - `name_extraction`: subject distinguished-name attributes
//! - `validity`: conversion of validity times to chrono

pub mod core;
pub mod name_extraction;
pub mod validity;

pub use self::core::{parse_leaf_certificate, LoadedCertificate};
