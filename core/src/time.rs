//! Time related utils.

use crate::{Error, Result};
use chrono::{NaiveDateTime, Utc};
use std::fmt;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Time format for ISO 8601 basic: "20220313T072004Z"
const ISO8601: &str = "%Y%m%dT%H%M%SZ";

/// Create a new DateTime for the current instant.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 basic: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format(ISO8601).to_string()
}

/// Parse time from ISO 8601 basic: `20220313T072004Z`
pub fn parse_iso8601(s: &str) -> Result<DateTime> {
    Ok(NaiveDateTime::parse_from_str(s, ISO8601)?.and_utc())
}

/// Timestamp is the instant a request is signed at, in both renderings SigV4 needs.
///
/// Only the full ISO 8601 basic form is stored; the date stamp is its first
/// eight characters, so both forms always come from the same instant.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    iso8601: String,
}

impl Timestamp {
    /// Capture the current instant.
    pub fn now() -> Self {
        Self::from(now())
    }

    /// Parse a timestamp from its full form, e.g. `20240101T000000Z`.
    pub fn parse(s: &str) -> Result<Self> {
        let t = NaiveDateTime::parse_from_str(s, ISO8601).map_err(|e| {
            Error::request_invalid(format!("invalid timestamp: {s:?}")).with_source(e)
        })?;
        Ok(Self::from(t.and_utc()))
    }

    /// The full instant: `YYYYMMDDThhmmssZ`.
    pub fn iso8601(&self) -> &str {
        &self.iso8601
    }

    /// The date stamp: `YYYYMMDD`.
    pub fn date(&self) -> &str {
        &self.iso8601[..8]
    }
}

impl From<DateTime> for Timestamp {
    fn from(t: DateTime) -> Self {
        Self {
            iso8601: format_iso8601(t),
        }
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso8601)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso8601)
    }
}
