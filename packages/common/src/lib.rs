//! Common infrastructure shared by the fiscalcert crates
//!
//! Currently this is the logging layer: `env_logger` initialisation and
//! helpers that keep certificate material and passwords out of log output.

#![forbid(unsafe_code)]

pub mod error;

pub use error::LoggingTransformer;
