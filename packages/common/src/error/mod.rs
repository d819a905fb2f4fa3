//! Operator-facing diagnostics for failures that are absorbed into data
//! instead of being returned to the caller.

pub mod logging;

pub use logging::LoggingTransformer;
