//! Certificate master builder

use fiscalcert_certificate::{
    CertificateEncoding, CertificateInspectionResult, CertificateInspector, Clock,
    InspectorConfig, SystemClock,
};

/// Configures a [`CertificateInspector`] before use
#[derive(Debug, Clone)]
pub struct CertificateMasterBuilder<C = SystemClock> {
    config: InspectorConfig,
    clock: C,
}

impl CertificateMasterBuilder {
    /// Default configuration and the system clock
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: InspectorConfig::default(),
            clock: SystemClock::new(),
        }
    }
}

impl Default for CertificateMasterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + 'static> CertificateMasterBuilder<C> {
    /// Expect base64 text (the default)
    #[must_use]
    pub fn base64(mut self) -> Self {
        self.config.encoding = CertificateEncoding::Base64;
        self
    }

    /// Expect raw DER bytes
    #[must_use]
    pub fn der(mut self) -> Self {
        self.config.encoding = CertificateEncoding::Der;
        self
    }

    /// Reject containers larger than `bytes`
    #[must_use]
    pub fn max_container_bytes(mut self, bytes: usize) -> Self {
        self.config.max_container_bytes = bytes;
        self
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn with_config(mut self, config: InspectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from `FISCALCERT_*` environment variables
    #[must_use]
    pub fn from_env(self) -> Self {
        self.with_config(InspectorConfig::from_env())
    }

    /// Classify expiry against `clock` instead of the system clock
    #[must_use]
    pub fn with_clock<K: Clock + 'static>(self, clock: K) -> CertificateMasterBuilder<K> {
        CertificateMasterBuilder {
            config: self.config,
            clock,
        }
    }

    /// Build a reusable inspector
    #[must_use]
    pub fn build(self) -> CertificateInspector {
        CertificateInspector::with_config(self.config).with_clock(self.clock)
    }

    /// Build and run a single inspection
    #[must_use]
    pub fn inspect(self, raw: &[u8], password: &str) -> CertificateInspectionResult {
        self.build().inspect(raw, password)
    }
}
