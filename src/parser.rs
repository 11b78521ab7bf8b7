//! Record parser: one raw CSV line → one validated [`TradeEvent`].
//!
//! Each input line carries exactly 4 comma-separated fields:
//!
//! ```text
//! timestamp, company, orderType, quantity
//! ```
//!
//! where `orderType` is "D" (new order) or "F" (cancellation/fill). Parsing
//! is a pure function with no side effects; a line that fails any check is
//! rejected with a [`RejectReason`] and the caller decides what to do with it
//! (the monitor drops it, counts it, and continues — dirty input never aborts
//! a pass). A header row, if present, rejects naturally because its
//! order-type field is not "D"/"F".
//!
//! # Accepted timestamp formats
//!
//! The timestamp field is converted to epoch milliseconds from any of:
//! - raw integer epoch milliseconds (`1696118400000`)
//! - RFC 3339 (`2023-10-01T00:00:00Z`, with optional offset/fraction)
//! - naive `YYYY-MM-DD HH:MM:SS[.fff]`, interpreted as UTC

use chrono::{DateTime, NaiveDateTime};

use crate::types::{OrderKind, TradeEvent};

/// Number of comma-separated fields a record must have.
const FIELD_COUNT: usize = 4;

/// Why a line was rejected.
///
/// Recoverable by construction: a reject applies to one line only and never
/// propagates as a pass-level error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Field count is not exactly 4
    FieldCount,

    /// Timestamp field did not parse in any accepted format
    Timestamp,

    /// Company field is empty after trimming
    EmptyCompany,

    /// Order-type field is not exactly "D" or "F"
    OrderKind,

    /// Quantity field is not a finite number
    Quantity,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            RejectReason::FieldCount => "wrong field count",
            RejectReason::Timestamp => "unparseable timestamp",
            RejectReason::EmptyCompany => "empty company identifier",
            RejectReason::OrderKind => "invalid order-type token",
            RejectReason::Quantity => "non-numeric quantity",
        };
        f.write_str(msg)
    }
}

/// Parse one raw input line into a validated trade event.
///
/// Pure function: no logging, no state. Returns the first failing check's
/// [`RejectReason`].
pub fn parse_record(line: &str) -> Result<TradeEvent, RejectReason> {
    let mut fields = [""; FIELD_COUNT];
    let mut count = 0;
    for field in line.split(',') {
        if count == FIELD_COUNT {
            return Err(RejectReason::FieldCount);
        }
        fields[count] = field;
        count += 1;
    }
    if count != FIELD_COUNT {
        return Err(RejectReason::FieldCount);
    }

    let timestamp_ms = parse_timestamp_ms(fields[0]).ok_or(RejectReason::Timestamp)?;

    let company = fields[1].trim();
    if company.is_empty() {
        return Err(RejectReason::EmptyCompany);
    }

    let kind = OrderKind::from_token(fields[2].trim()).ok_or(RejectReason::OrderKind)?;

    let quantity = fields[3]
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite())
        .ok_or(RejectReason::Quantity)?;

    Ok(TradeEvent::new(timestamp_ms, company, kind, quantity))
}

/// Convert a timestamp field to epoch milliseconds.
///
/// Tried in order: integer millis, RFC 3339, naive datetime (UTC).
fn parse_timestamp_ms(field: &str) -> Option<i64> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }

    if let Ok(ms) = field.parse::<i64>() {
        return Some(ms);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(field) {
        return Some(dt.timestamp_millis());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(field, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc().timestamp_millis());
    }

    None
}
