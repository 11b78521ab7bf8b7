//! Core event types shared across the surveillance pipeline.
//!
//! A [`TradeEvent`] is the validated form of one input record. Events are
//! immutable once constructed: the parser builds them, the grouper moves them
//! into per-company sequences, and the scanner only ever reads them.

use serde::{Deserialize, Serialize};

/// Kind of order event carried by one input record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    /// "D" — quantity placed into the market.
    NewOrder,

    /// "F" — quantity cancelled or filled (removed from the market).
    CancelOrFill,
}

impl OrderKind {
    /// Map the raw order-type token to a kind. Only "D" and "F" are valid.
    #[inline]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "D" => Some(OrderKind::NewOrder),
            "F" => Some(OrderKind::CancelOrFill),
            _ => None,
        }
    }
}

/// One parsed order/cancellation record.
///
/// Timestamps are epoch milliseconds. Ordering must be monotonic within a
/// single company's sequence for the window scan to be meaningful; no global
/// ordering across companies is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEvent {
    /// Event timestamp (milliseconds since the Unix epoch)
    pub timestamp_ms: i64,

    /// Company identifier (non-empty, trimmed)
    pub company: String,

    /// New order vs. cancellation/fill
    pub kind: OrderKind,

    /// Order quantity, summed as given (negative values are not rejected;
    /// see DESIGN.md)
    pub quantity: f64,
}

impl TradeEvent {
    /// Create a new trade event.
    #[inline]
    pub fn new(timestamp_ms: i64, company: impl Into<String>, kind: OrderKind, quantity: f64) -> Self {
        Self {
            timestamp_ms,
            company: company.into(),
            kind,
            quantity,
        }
    }
}

/// One company's events in input arrival order.
///
/// Built by the grouper, then handed to the window scanner for read-only
/// analysis.
#[derive(Debug, Clone)]
pub struct CompanySequence {
    /// Company identifier
    pub company: String,

    /// Events in the order they were encountered in the input
    pub events: Vec<TradeEvent>,
}

impl CompanySequence {
    /// Create an empty sequence for a company.
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            events: Vec::new(),
        }
    }

    /// Number of events in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
