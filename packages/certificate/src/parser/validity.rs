//! Validity period conversion

use chrono::{DateTime, Utc};
use x509_cert::time::Time;

use crate::error::{InspectionError, Result};

/// Convert an X.509 `Time` (UTCTime or GeneralizedTime, both UTC) into a
/// chrono timestamp. Certificate times carry whole seconds only.
pub fn time_to_utc(time: Time) -> Result<DateTime<Utc>> {
    let since_epoch = time.to_unix_duration();
    let out_of_range = || {
        InspectionError::unexpected(format!(
            "Certificate time out of range: {}s since epoch",
            since_epoch.as_secs()
        ))
    };
    let secs = i64::try_from(since_epoch.as_secs()).map_err(|_| out_of_range())?;
    DateTime::from_timestamp(secs, 0).ok_or_else(out_of_range)
}
