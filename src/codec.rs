//! Scalar codecs for the textual representations used on the wire.
//!
//! Each codec is a pure `(encode, decode)` pair over a chrono type. Decode
//! rejects anything that does not match the exact expected pattern with
//! [`DataError::MalformedScalar`]; encode produces the canonical string so
//! that `decode(encode(x)) == x` holds over the whole supported domain.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{DataError, Result};

/// Calendar dates, e.g. `match_date` and player birth dates: `YYYY-MM-DD`.
pub mod date {
    use super::*;

    pub fn decode(raw: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DataError::MalformedScalar {
            value: raw.to_string(),
            expected: "date in YYYY-MM-DD form",
        })
    }

    pub fn encode(value: &NaiveDate) -> String {
        value.format("%Y-%m-%d").to_string()
    }
}

/// ISO-8601 timestamps with optional fractional seconds, e.g.
/// `2020-01-30T02:24:23.296715` or `2019-12-16T23:09:16`.
pub mod iso_datetime {
    use super::*;

    pub fn decode(raw: &str) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map_err(|_| {
            DataError::MalformedScalar {
                value: raw.to_string(),
                expected: "ISO-8601 datetime",
            }
        })
    }

    pub fn encode(value: &NaiveDateTime) -> String {
        value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }
}

/// Times of day: kick-offs and intra-period event timestamps,
/// `HH:MM:SS.ffffff` with the fraction optional.
pub mod clock {
    use super::*;

    pub fn decode(raw: &str) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(raw, "%H:%M:%S%.f").map_err(|_| DataError::MalformedScalar {
            value: raw.to_string(),
            expected: "time in HH:MM:SS.ffffff form",
        })
    }

    pub fn encode(value: &NaiveTime) -> String {
        value.format("%H:%M:%S%.f").to_string()
    }
}
