//! Inspection result returned to the record holder

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::state::CertificateState;
use crate::subject::SubjectInfo;

/// Derived view of a certificate + password pair.
///
/// `expire_date` and `information` are present exactly when the state is
/// [`Valid`](CertificateState::Valid) or [`Expired`](CertificateState::Expired).
/// Fields are private so that pairing cannot be broken after construction,
/// and deserialization re-checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInspectionResult")]
pub struct CertificateInspectionResult {
    state: CertificateState,
    expire_date: Option<NaiveDate>,
    information: Option<String>,
}

impl CertificateInspectionResult {
    /// Result before any certificate is loaded
    #[must_use]
    pub fn not_loaded() -> Self {
        Self::default()
    }

    /// Result carrying no metadata.
    ///
    /// Loaded states passed here are downgraded to
    /// [`Unknown`](CertificateState::Unknown) since they require metadata.
    #[must_use]
    pub fn failed(state: CertificateState) -> Self {
        let state = if state.is_loaded() {
            CertificateState::Unknown
        } else {
            state
        };
        Self {
            state,
            expire_date: None,
            information: None,
        }
    }

    pub(crate) fn loaded(expired: bool, expire_date: NaiveDate, subject: &SubjectInfo) -> Self {
        Self {
            state: if expired {
                CertificateState::Expired
            } else {
                CertificateState::Valid
            },
            expire_date: Some(expire_date),
            information: Some(subject.information()),
        }
    }

    /// Usability state
    #[must_use]
    pub fn state(&self) -> CertificateState {
        self.state
    }

    /// Expiry date (time of day dropped)
    #[must_use]
    pub fn expire_date(&self) -> Option<NaiveDate> {
        self.expire_date
    }

    /// Subject CN, L, O and OU, newline-joined
    #[must_use]
    pub fn information(&self) -> Option<&str> {
        self.information.as_deref()
    }
}

#[derive(Deserialize)]
struct RawInspectionResult {
    #[serde(default)]
    state: CertificateState,
    #[serde(default)]
    expire_date: Option<NaiveDate>,
    #[serde(default)]
    information: Option<String>,
}

/// Returned when a stored result pairs its state with the wrong metadata
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Certificate state {state:?} is inconsistent with its expiry/information fields")]
pub struct InconsistentResultError {
    /// State found in the payload
    pub state: CertificateState,
}

impl TryFrom<RawInspectionResult> for CertificateInspectionResult {
    type Error = InconsistentResultError;

    fn try_from(raw: RawInspectionResult) -> Result<Self, Self::Error> {
        let has_metadata = raw.expire_date.is_some() && raw.information.is_some();
        let has_any = raw.expire_date.is_some() || raw.information.is_some();
        let consistent = if raw.state.is_loaded() {
            has_metadata
        } else {
            !has_any
        };
        if !consistent {
            return Err(InconsistentResultError { state: raw.state });
        }
        Ok(Self {
            state: raw.state,
            expire_date: raw.expire_date,
            information: raw.information,
        })
    }
}
