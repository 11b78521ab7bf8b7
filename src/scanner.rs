//! Window scanner: the core excessive-cancellation detection algorithm.
//!
//! Given one company's chronologically ordered event sequence, decide whether
//! any 60-second window has a cancelled-quantity to new-order-quantity ratio
//! above one third.
//!
//! # Algorithm
//!
//! A two-pointer expanding scan over the sequence. `start` only ever moves
//! forward, which is what keeps the scan linear in the number of events:
//!
//! 1. For the current `end`, advance `start` while
//!    `ts[end] - ts[start] > W` (shrink until the window fits, anchored at
//!    `end`).
//! 2. With `start` fixed, greedily advance `end` while the *next* event still
//!    satisfies `ts[end + 1] - ts[start] <= W` — every later event that fits
//!    the window whose left edge is `start` is pulled in, and the outer loop
//!    resumes from the advanced position.
//! 3. Sum quantities over the inclusive range `[start, end]` and compute
//!    `total_cancels / max(total_orders, 1)`. Strictly above the threshold
//!    means excessive; the scan stops at the first violating window.
//!
//! Both comparisons are boundary inclusive: an event exactly `W` milliseconds
//! after the window's left edge belongs to the window.
//!
//! The greedy expansion means a prefix of a window is never evaluated on its
//! own once later events fit: quantities of every event reachable from the
//! current left edge participate in that window's ratio.

use crate::types::{OrderKind, TradeEvent};

/// Default window length: 60 seconds.
pub const DEFAULT_WINDOW_MS: i64 = 60_000;

/// Default cancellation-ratio threshold: one third, exceeded strictly.
pub const DEFAULT_MAX_CANCEL_RATIO: f64 = 1.0 / 3.0;

// ============================================================================
// Scan Outcome
// ============================================================================

/// Result of scanning one company's sequence, with instrumentation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScanOutcome {
    /// Whether a violating window was found
    pub excessive: bool,

    /// Number of windows whose ratio was evaluated
    pub windows_evaluated: usize,

    /// Highest 1-based event index reached by the scan. On a short-circuit
    /// this is how far into the sequence the scan actually looked.
    pub events_examined: usize,
}

// ============================================================================
// Window Scanner
// ============================================================================

/// Sliding-window cancellation-ratio scanner.
#[derive(Debug, Clone, Copy)]
pub struct WindowScanner {
    /// Window length in milliseconds (boundary inclusive)
    window_ms: i64,

    /// Ratio threshold; a window is violating when its ratio is strictly
    /// greater than this
    max_cancel_ratio: f64,
}

impl Default for WindowScanner {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS, DEFAULT_MAX_CANCEL_RATIO)
    }
}

impl WindowScanner {
    /// Create a scanner with explicit window length and ratio threshold.
    pub fn new(window_ms: i64, max_cancel_ratio: f64) -> Self {
        Self {
            window_ms,
            max_cancel_ratio,
        }
    }

    /// Window length in milliseconds.
    #[inline]
    pub fn window_ms(&self) -> i64 {
        self.window_ms
    }

    /// Whether any window of the sequence violates the ratio threshold.
    ///
    /// Expects events in chronological order (the grouper preserves input
    /// order, which the input contract guarantees is monotonic per company).
    #[inline]
    pub fn is_excessive(&self, events: &[TradeEvent]) -> bool {
        self.scan(events).excessive
    }

    /// Scan the sequence, returning the verdict plus instrumentation.
    ///
    /// Short-circuits on the first violating window: no later window is
    /// evaluated and no later event is examined.
    pub fn scan(&self, events: &[TradeEvent]) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        let mut start = 0;
        let mut end = 0;

        while end < events.len() {
            // Shrink from the left until the window fits, anchored at `end`.
            while events[end].timestamp_ms - events[start].timestamp_ms > self.window_ms {
                start += 1;
            }

            // Greedily pull in every later event that still fits the window
            // whose left edge is `start` (boundary inclusive).
            while end + 1 < events.len()
                && events[end + 1].timestamp_ms - events[start].timestamp_ms <= self.window_ms
            {
                end += 1;
            }

            outcome.windows_evaluated += 1;
            outcome.events_examined = end + 1;

            let mut total_orders = 0.0;
            let mut total_cancels = 0.0;
            for event in &events[start..=end] {
                match event.kind {
                    OrderKind::NewOrder => total_orders += event.quantity,
                    OrderKind::CancelOrFill => total_cancels += event.quantity,
                }
            }

            // Denominator floored at 1 so a window with no new orders still
            // yields a finite ratio.
            let ratio = total_cancels / total_orders.max(1.0);
            if ratio > self.max_cancel_ratio {
                outcome.excessive = true;
                return outcome;
            }

            end += 1;
        }

        outcome
    }
}
