use chrono::{DateTime, Utc};

use super::error::ConversionError;

/// Converts epoch milliseconds into a UTC instant.
///
/// Negative values and values beyond chrono's representable range fail
/// with `MalformedTimestamp`.
pub fn decode_timestamp(field: &str, millis: i64) -> Result<DateTime<Utc>, ConversionError> {
    if millis < 0 {
        return Err(malformed(field, millis));
    }

    DateTime::from_timestamp_millis(millis).ok_or_else(|| malformed(field, millis))
}

pub fn encode_timestamp(instant: &DateTime<Utc>) -> i64 {
    instant.timestamp_millis()
}

fn malformed(field: &str, millis: i64) -> ConversionError {
    ConversionError::MalformedTimestamp {
        field: field.to_string(),
        raw: millis.to_string(),
    }
}
