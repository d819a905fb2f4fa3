//! Core certificate parsing operations

use chrono::{DateTime, NaiveDate, Utc};
use der::Decode;
use x509_cert::Certificate as X509CertCert;

use crate::error::{InspectionError, Result};
use crate::subject::SubjectInfo;

use super::name_extraction::extract_subject_info;
use super::validity::time_to_utc;

/// Metadata retained from a successfully unlocked certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCertificate {
    /// End of the validity period
    pub not_after: DateTime<Utc>,
    /// Subject attributes shown to users
    pub subject: SubjectInfo,
}

impl LoadedCertificate {
    /// Whether the certificate is expired at `now`.
    ///
    /// Valid strictly before `not_after`; the boundary instant itself counts
    /// as expired.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.not_after
    }

    /// Calendar date of expiry (UTC)
    #[must_use]
    pub fn expire_date(&self) -> NaiveDate {
        self.not_after.date_naive()
    }
}

/// Parse a DER-encoded X.509 certificate into the metadata we keep
pub fn parse_leaf_certificate(der_bytes: &[u8]) -> Result<LoadedCertificate> {
    let cert = X509CertCert::from_der(der_bytes)
        .map_err(|e| InspectionError::unexpected(format!("X.509 parsing failed: {e}")))?;

    let not_after = time_to_utc(cert.tbs_certificate.validity.not_after)?;
    let subject = extract_subject_info(&cert.tbs_certificate.subject)?;

    Ok(LoadedCertificate { not_after, subject })
}
