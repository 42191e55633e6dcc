//! Timestamp conversion strategy
//!
//! Date/time values round-trip through canonical ISO-8601 text with
//! millisecond precision and a `Z` suffix (e.g. `2024-05-01T12:30:00.000Z`).

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::Result;

use super::StorageValue;

impl StorageValue for DateTime<Utc> {
    /// Canonical round-trippable timestamp text. Sub-millisecond precision
    /// is truncated.
    fn to_storage(&self) -> Result<String> {
        Ok(self.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// RFC 3339 parse, normalized to UTC. Malformed text fails with
    /// [`StashError::Timestamp`](crate::StashError::Timestamp).
    fn from_storage(raw: &str) -> Result<Self> {
        Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
    }
}
