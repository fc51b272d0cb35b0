//! Time utilities: stored timestamp format, CLI timestamp parsing, elapsed formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Format a timestamp the way it is stored: `2025-01-05T09:30:00.000Z`.
pub fn to_iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored (RFC 3339) timestamp.
pub fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a timestamp typed on the command line.
///
/// Accepts RFC 3339 or a local `YYYY-MM-DD HH:MM[:SS]` (a `T` separator is
/// accepted too).
pub fn parse_timestamp(input: &str) -> AppResult<DateTime<Utc>> {
    let s = input.trim();

    if let Some(ts) = parse_iso(s) {
        return Ok(ts);
    }

    let normalized = s.replacen('T', " ", 1);
    let naive = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .ok_or_else(|| AppError::InvalidTimestamp(input.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidTimestamp(input.to_string()))
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    input.map(|s| parse_timestamp(s)).transpose()
}

/// Local, second-precision rendering used in listings.
pub fn format_local(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// serde adapter writing `DateTime<Utc>` in the stored millisecond form.
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::to_iso(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_iso(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}

pub mod iso_millis_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(ts: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => s.serialize_some(&super::to_iso(ts)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(raw) => super::parse_iso(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'"))),
            None => Ok(None),
        }
    }
}
