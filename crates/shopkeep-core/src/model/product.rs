// ── Product entity ──
//
// All content fields stay string-typed: `price` keeps whatever the user
// typed until it is parsed for display, `materials` is a raw
// comma-delimited list, and `created_at` is the ISO-8601 string the
// client assigned at creation time. Parsing happens on demand in the
// `view` module.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::product_id::ProductId;

/// A catalog product.
///
/// `created_at` is assigned once by the creation flow and never mutated
/// afterwards; edits are full replacements that carry it forward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// String-encoded decimal amount; formatting preserved as entered.
    pub price: String,
    /// Comma-delimited tag names, parsed on demand.
    pub materials: String,
    /// Image URL; empty means "no image".
    #[serde(default)]
    pub image: String,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl Product {
    /// Parse `created_at`, accepting full RFC 3339 timestamps and bare
    /// `YYYY-MM-DD` dates. `None` for anything unparseable.
    pub fn created_at_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Parse an ISO-8601 timestamp or bare date into `DateTime<Utc>`.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| DateTime::from_naive_utc_and_offset(ndt, Utc))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_timestamp() {
        let ts = parse_timestamp("2024-06-01T12:30:00.000Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-06-01T12:30:00+00:00");
    }

    #[test]
    fn parses_bare_date_as_midnight_utc() {
        let ts = parse_timestamp("2024-06-01").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-06-01T00:00:00+00:00");
    }

    #[test]
    fn garbage_timestamp_is_none() {
        assert!(parse_timestamp("soonish").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
