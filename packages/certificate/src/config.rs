//! Inspector configuration

use serde::{Deserialize, Serialize};

/// Default upper bound on the raw container size (1 MiB)
pub const DEFAULT_MAX_CONTAINER_BYTES: usize = 1024 * 1024;

/// Environment variable selecting the input encoding (`base64` or `der`)
pub const ENV_CERT_ENCODING: &str = "FISCALCERT_CERT_ENCODING";

/// Environment variable overriding [`DEFAULT_MAX_CONTAINER_BYTES`]
pub const ENV_MAX_CONTAINER_BYTES: &str = "FISCALCERT_MAX_CONTAINER_BYTES";

/// How the certificate bytes arrive from the record holder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateEncoding {
    /// Base64 text, as binary fields are usually stored at rest
    #[default]
    Base64,
    /// Raw DER-encoded PKCS#12
    Der,
}

impl CertificateEncoding {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "base64" => Some(Self::Base64),
            "der" | "binary" => Some(Self::Der),
            _ => None,
        }
    }
}

/// Configuration for [`CertificateInspector`](crate::CertificateInspector)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Encoding of the incoming certificate bytes
    pub encoding: CertificateEncoding,

    /// Inputs larger than this are rejected before decoding
    pub max_container_bytes: usize,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            encoding: CertificateEncoding::default(),
            max_container_bytes: DEFAULT_MAX_CONTAINER_BYTES,
        }
    }
}

impl InspectorConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from `FISCALCERT_*` environment variables.
    ///
    /// Missing or unparsable values keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            encoding: std::env::var(ENV_CERT_ENCODING)
                .ok()
                .and_then(|v| CertificateEncoding::parse(&v))
                .unwrap_or(defaults.encoding),
            max_container_bytes: parse_usize_env(
                ENV_MAX_CONTAINER_BYTES,
                defaults.max_container_bytes,
            ),
        }
    }

    /// Set the input encoding
    #[must_use]
    pub fn with_encoding(self, encoding: CertificateEncoding) -> Self {
        Self { encoding, ..self }
    }

    /// Set the size limit
    #[must_use]
    pub fn with_max_container_bytes(self, max_container_bytes: usize) -> Self {
        Self {
            max_container_bytes,
            ..self
        }
    }
}

fn parse_usize_env(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_parse() {
        assert_eq!(CertificateEncoding::parse("base64"), Some(CertificateEncoding::Base64));
        assert_eq!(CertificateEncoding::parse(" DER "), Some(CertificateEncoding::Der));
        assert_eq!(CertificateEncoding::parse("binary"), Some(CertificateEncoding::Der));
        assert_eq!(CertificateEncoding::parse("pem"), None);
    }

    #[test]
    fn test_builder_methods() {
        let config = InspectorConfig::new()
            .with_encoding(CertificateEncoding::Der)
            .with_max_container_bytes(4096);
        assert_eq!(config.encoding, CertificateEncoding::Der);
        assert_eq!(config.max_container_bytes, 4096);
    }
}
