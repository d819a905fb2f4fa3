//! Closed error taxonomy for certificate inspection

use thiserror::Error;

use crate::state::CertificateState;

/// Why an inspection did not produce certificate metadata.
///
/// Every variant maps to exactly one [`CertificateState`]; the inspector
/// turns these into data and never hands them to the caller of
/// [`inspect`](crate::CertificateInspector::inspect).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectionError {
    /// No certificate bytes were supplied
    #[error("No certificate loaded")]
    EmptyInput,

    /// The container rejected the password or failed its integrity check
    #[error("Certificate authentication failed: {0}")]
    AuthenticationFailure(String),

    /// Any other decode, parse or extraction failure
    #[error("Certificate processing failed: {0}")]
    UnexpectedFailure(String),
}

impl InspectionError {
    /// Create an authentication failure
    #[must_use]
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::AuthenticationFailure(msg.into())
    }

    /// Create an unexpected failure
    #[must_use]
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::UnexpectedFailure(msg.into())
    }

    /// The certificate state this error is reported as
    #[must_use]
    pub fn state(&self) -> CertificateState {
        match self {
            Self::EmptyInput => CertificateState::NotLoaded,
            Self::AuthenticationFailure(_) => CertificateState::InvalidPassword,
            Self::UnexpectedFailure(_) => CertificateState::Unknown,
        }
    }

    /// Only unexpected failures are worth an operator's attention
    #[must_use]
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::UnexpectedFailure(_))
    }
}

/// Result type for certificate inspection operations
pub type Result<T> = std::result::Result<T, InspectionError>;
