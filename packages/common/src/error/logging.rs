//! Production logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of certificate
//! material and passwords, built on the standard `log` facade.

use log::{info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Production logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=warn` - Only unexpected certificate failures (recommended)
    /// - `RUST_LOG=info` - Also startup messages
    /// - `RUST_LOG=fiscalcert_certificate=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a certificate inspection that failed for an unanticipated reason.
    ///
    /// The container itself never reaches the log, only a short fingerprint
    /// of it, so operators can tell repeated failures of the same upload
    /// apart from distinct ones.
    pub fn log_inspection_failure(error: &dyn std::error::Error, container: &[u8]) {
        let container_hash = Self::secure_hash_bytes(container);
        warn!(
            "Unknown error when validating certificate: {error} (container_hash: {container_hash}, size: {} bytes)",
            container.len()
        );
    }

    /// SHA-256 fingerprint for logging
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    #[must_use]
    pub fn secure_hash_bytes(data: &[u8]) -> String {
        let hash = Sha256::digest(data);
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_hash_bytes() {
        LoggingTransformer::init_test();

        let hash1 = LoggingTransformer::secure_hash_bytes(b"container one");
        let hash2 = LoggingTransformer::secure_hash_bytes(b"container two");

        assert_ne!(hash1, hash2);
        assert_eq!(hash1, LoggingTransformer::secure_hash_bytes(b"container one"));

        // '#' plus 12 hex characters
        assert!(hash1.starts_with('#'));
        assert_eq!(hash1.len(), 13);
    }

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        let error = std::io::Error::new(std::io::ErrorKind::InvalidData, "truncated");
        LoggingTransformer::log_inspection_failure(&error, b"\x30\x82");
        LoggingTransformer::log_inspection_failure(&error, b"");
    }
}
