//! PKCS#12 container decoding and unlocking
//!
//! Two steps sit between the stored bytes and an X.509 certificate: undoing
//! the at-rest text encoding, then opening the password-protected container.
//! Only the second step can produce an authentication failure.

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use openssl::error::ErrorStack;
use openssl::pkcs12::Pkcs12;
use openssl::provider::Provider;

use crate::config::CertificateEncoding;
use crate::error::{InspectionError, Result};

/// Turn stored certificate bytes into a binary PKCS#12 container.
///
/// Base64 input may contain line breaks or other ASCII whitespace, as
/// produced by MIME-style encoders.
pub fn decode_container(raw: &[u8], encoding: CertificateEncoding) -> Result<Vec<u8>> {
    match encoding {
        CertificateEncoding::Der => Ok(raw.to_vec()),
        CertificateEncoding::Base64 => {
            let compact: Vec<u8> = raw
                .iter()
                .copied()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            STANDARD
                .decode(compact)
                .map_err(|e| InspectionError::unexpected(format!("Base64 decoding failed: {e}")))
        }
    }
}

// OpenSSL library and reason codes for PKCS#12 password failures
const ERR_LIB_PKCS12: i32 = 35;
const PKCS12_R_MAC_VERIFY_FAILURE: i32 = 113;
const PKCS12_R_PKCS12_CIPHERFINAL_ERROR: i32 = 116;

static LEGACY_PROVIDER: OnceLock<Option<Provider>> = OnceLock::new();

/// Make the legacy algorithms (RC2, 3DES) used by older PKCS#12 exports
/// available, keeping the default provider as fallback.
///
/// Loaded once per process. Returns whether the legacy provider is active.
pub fn load_legacy_provider() -> bool {
    LEGACY_PROVIDER
        .get_or_init(|| match Provider::try_load(None, "legacy", true) {
            Ok(provider) => Some(provider),
            Err(e) => {
                log::debug!("OpenSSL legacy provider unavailable: {e}");
                None
            }
        })
        .is_some()
}

/// Open a PKCS#12 container and return the DER encoding of its end-entity
/// certificate.
///
/// A container that is not valid PKCS#12 is an unexpected failure. One that
/// fails its MAC check or decrypts to garbage under `password` is an
/// authentication failure. Anything else `parse2` reports, such as a cipher
/// the linked OpenSSL cannot provide, is unexpected.
pub fn unlock_leaf_certificate(container: &[u8], password: &str) -> Result<Vec<u8>> {
    let pkcs12 = Pkcs12::from_der(container).map_err(|e| {
        InspectionError::unexpected(format!("Malformed PKCS#12 container: {e}"))
    })?;

    // The underlying C API takes a NUL-terminated password
    if password.contains('\0') {
        return Err(InspectionError::authentication(
            "password contains a NUL character",
        ));
    }

    load_legacy_provider();
    let parsed = pkcs12.parse2(password).map_err(classify_parse_error)?;

    let cert = parsed.cert.ok_or_else(|| {
        InspectionError::unexpected("PKCS#12 container holds no end-entity certificate")
    })?;

    cert.to_der().map_err(|e| {
        InspectionError::unexpected(format!("Failed to encode end-entity certificate: {e}"))
    })
}

fn classify_parse_error(errors: ErrorStack) -> InspectionError {
    if is_password_failure(&errors) {
        InspectionError::authentication(errors.to_string())
    } else {
        InspectionError::unexpected(format!("PKCS#12 decryption failed: {errors}"))
    }
}

/// Only a MAC mismatch or a bad final cipher block point at the password.
/// An "unsupported algorithm" anywhere in the stack rules that out.
fn is_password_failure(errors: &ErrorStack) -> bool {
    let errors = errors.errors();
    let unsupported = errors
        .iter()
        .any(|e| e.reason().is_some_and(|r| r.contains("unsupported")));
    !unsupported
        && errors.iter().any(|e| {
            e.library_code() == ERR_LIB_PKCS12
                && matches!(
                    e.reason_code(),
                    PKCS12_R_MAC_VERIFY_FAILURE | PKCS12_R_PKCS12_CIPHERFINAL_ERROR
                )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_base64_with_line_breaks() {
        let decoded = decode_container(b"AAEC\r\nAwQF\n", CertificateEncoding::Base64)
            .expect("whitespace inside base64 should be ignored");
        assert_eq!(decoded, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_decode_invalid_base64() {
        let err = decode_container(b"!!not base64!!", CertificateEncoding::Base64)
            .expect_err("invalid base64 must fail");
        assert!(err.is_unexpected());
    }

    #[test]
    fn test_decode_der_passthrough() {
        let decoded = decode_container(&[0x30, 0x03, 0x02, 0x01, 0x03], CertificateEncoding::Der)
            .expect("DER input is passed through");
        assert_eq!(decoded, vec![0x30, 0x03, 0x02, 0x01, 0x03]);
    }

    #[test]
    fn test_empty_error_stack_is_not_a_password_failure() {
        let err = classify_parse_error(ErrorStack::get());
        assert!(err.is_unexpected());
    }

    #[test]
    fn test_legacy_provider_load_is_stable() {
        assert_eq!(load_legacy_provider(), load_legacy_provider());
    }

    #[test]
    fn test_unlock_garbage_is_unexpected() {
        let err = unlock_leaf_certificate(b"definitely not pkcs12", "secret")
            .expect_err("garbage must not parse");
        assert!(err.is_unexpected());
    }
}
