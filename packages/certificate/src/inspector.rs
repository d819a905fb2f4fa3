//! Certificate inspection: the single entry point turning a stored
//! certificate + password pair into a [`CertificateInspectionResult`].

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use fiscalcert_common::LoggingTransformer;

use crate::clock::{Clock, SystemClock};
use crate::config::{CertificateEncoding, InspectorConfig};
use crate::container::{decode_container, unlock_leaf_certificate};
use crate::error::{InspectionError, Result};
use crate::parser::{parse_leaf_certificate, LoadedCertificate};
use crate::result::CertificateInspectionResult;

/// Validates company certificates held as password-protected PKCS#12.
///
/// Inspection never fails from the caller's point of view: empty input,
/// wrong passwords and unreadable containers all come back as a
/// [`CertificateState`](crate::CertificateState) inside the result. Only
/// unanticipated failures are logged, at warn level.
///
/// The inspector holds no mutable state and can be shared across threads.
#[derive(Clone)]
pub struct CertificateInspector {
    config: InspectorConfig,
    clock: Arc<dyn Clock>,
}

impl CertificateInspector {
    /// Inspector with default configuration and the system clock
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(InspectorConfig::default())
    }

    /// Inspector with the given configuration and the system clock
    #[must_use]
    pub fn with_config(config: InspectorConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock::new()),
        }
    }

    /// Replace the reference clock used by [`inspect`](Self::inspect)
    #[must_use]
    pub fn with_clock(self, clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
            ..self
        }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Inspect a certificate against the configured clock
    #[must_use]
    pub fn inspect(&self, raw: &[u8], password: &str) -> CertificateInspectionResult {
        self.inspect_at(raw, password, self.clock.now())
    }

    /// Inspect a certificate, classifying expiry against `now`
    #[must_use]
    pub fn inspect_at(
        &self,
        raw: &[u8],
        password: &str,
        now: DateTime<Utc>,
    ) -> CertificateInspectionResult {
        match self.try_inspect(raw, password) {
            Ok(cert) => CertificateInspectionResult::loaded(
                cert.is_expired_at(now),
                cert.expire_date(),
                &cert.subject,
            ),
            Err(e) => {
                if e.is_unexpected() {
                    LoggingTransformer::log_inspection_failure(&e, raw);
                }
                CertificateInspectionResult::failed(e.state())
            }
        }
    }

    /// Decode, unlock and parse without absorbing errors.
    ///
    /// For hosts that want the failure reason; nothing is logged here.
    pub fn try_inspect(&self, raw: &[u8], password: &str) -> Result<LoadedCertificate> {
        if self.is_empty_input(raw) {
            return Err(InspectionError::EmptyInput);
        }
        if raw.len() > self.config.max_container_bytes {
            return Err(InspectionError::unexpected(format!(
                "Certificate container is {} bytes, limit is {}",
                raw.len(),
                self.config.max_container_bytes
            )));
        }

        let container = decode_container(raw, self.config.encoding)?;
        let leaf = unlock_leaf_certificate(&container, password)?;
        parse_leaf_certificate(&leaf)
    }

    fn is_empty_input(&self, raw: &[u8]) -> bool {
        match self.config.encoding {
            CertificateEncoding::Base64 => raw.iter().all(u8::is_ascii_whitespace),
            CertificateEncoding::Der => raw.is_empty(),
        }
    }
}

impl Default for CertificateInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CertificateInspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificateInspector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Inspect a base64-encoded PKCS#12 certificate with default settings
#[must_use]
pub fn inspect(raw: &[u8], password: &str) -> CertificateInspectionResult {
    CertificateInspector::new().inspect(raw, password)
}
