//! Certificate usability state

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Usability classification of a company certificate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateState {
    /// No certificate has been inspected yet, or the input was empty
    #[default]
    NotLoaded,
    /// Decoded and not yet past its expiry instant
    Valid,
    /// Decoded but its expiry instant has been reached
    Expired,
    /// The password did not unlock the container
    InvalidPassword,
    /// Anything else went wrong while reading the container
    Unknown,
}

impl CertificateState {
    /// All states, in storage order
    pub const ALL: [Self; 5] = [
        Self::NotLoaded,
        Self::Expired,
        Self::InvalidPassword,
        Self::Unknown,
        Self::Valid,
    ];

    /// Stable storage key
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotLoaded => "not_loaded",
            Self::Valid => "valid",
            Self::Expired => "expired",
            Self::InvalidPassword => "invalid_password",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label for display
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotLoaded => "Not loaded",
            Self::Valid => "Valid",
            Self::Expired => "Expired",
            Self::InvalidPassword => "Invalid Password",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether the container was decoded, i.e. expiry and subject
    /// information are available
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Valid | Self::Expired)
    }
}

impl fmt::Display for CertificateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when parsing an unrecognised storage key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognised certificate state: {0}")]
pub struct ParseStateError(pub String);

impl FromStr for CertificateState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ParseStateError(s.to_string()))
    }
}
