//! Event grouper: partitions validated events by company.
//!
//! Order matters in two places and nowhere else: events within one company's
//! sequence keep their input arrival order, and companies themselves are kept
//! in first-occurrence order. Relative interleaving across companies is
//! irrelevant to the window scan.

use ahash::AHashMap;

use crate::types::{CompanySequence, TradeEvent};

/// Order-preserving company → event-sequence partition.
///
/// Uses an `AHashMap` from company name to an index into a `Vec` of
/// sequences; the `Vec` is what preserves first-seen company order.
#[derive(Debug, Default)]
pub struct EventGrouper {
    /// Company name → index into `sequences`
    index: AHashMap<String, usize>,

    /// Per-company sequences in first-occurrence order
    sequences: Vec<CompanySequence>,
}

impl EventGrouper {
    /// Create an empty grouper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to its company's sequence, creating the sequence on
    /// first occurrence.
    pub fn push(&mut self, event: TradeEvent) {
        let idx = match self.index.get(&event.company) {
            Some(&idx) => idx,
            None => {
                let idx = self.sequences.len();
                self.index.insert(event.company.clone(), idx);
                self.sequences.push(CompanySequence::new(event.company.clone()));
                idx
            }
        };
        self.sequences[idx].events.push(event);
    }

    /// All per-company sequences in first-occurrence order.
    #[inline]
    pub fn sequences(&self) -> &[CompanySequence] {
        &self.sequences
    }

    /// Number of distinct companies seen so far.
    #[inline]
    pub fn company_count(&self) -> usize {
        self.sequences.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderKind;

    fn event(ts: i64, company: &str, qty: f64) -> TradeEvent {
        TradeEvent::new(ts, company, OrderKind::NewOrder, qty)
    }

    #[test]
    fn test_groups_by_company() {
        let mut grouper = EventGrouper::new();
        grouper.push(event(1, "A", 10.0));
        grouper.push(event(2, "B", 20.0));
        grouper.push(event(3, "A", 30.0));

        assert_eq!(grouper.company_count(), 2);

        let seqs = grouper.sequences();
        assert_eq!(seqs[0].company, "A");
        assert_eq!(seqs[0].events.len(), 2);
        assert_eq!(seqs[1].company, "B");
        assert_eq!(seqs[1].events.len(), 1);
    }

    #[test]
    fn test_preserves_first_seen_company_order() {
        let mut grouper = EventGrouper::new();
        for name in ["Zeta", "Alpha", "Mid", "Alpha", "Zeta"] {
            grouper.push(event(0, name, 1.0));
        }

        let order: Vec<&str> = grouper
            .sequences()
            .iter()
            .map(|s| s.company.as_str())
            .collect();
        assert_eq!(order, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_preserves_per_company_event_order() {
        let mut grouper = EventGrouper::new();
        grouper.push(event(30, "A", 1.0));
        grouper.push(event(10, "B", 2.0));
        grouper.push(event(20, "A", 3.0));

        // Arrival order, not timestamp order
        let quantities: Vec<f64> = grouper.sequences()[0]
            .events
            .iter()
            .map(|e| e.quantity)
            .collect();
        assert_eq!(quantities, vec![1.0, 3.0]);
    }
}
