//! Cancellation monitor: the full surveillance pass over an input stream.
//!
//! Connects the per-line parser, the company grouper, and the window scanner
//! into one pass and caches the outcome:
//!
//! ```text
//! raw lines → parse_record → TradeEvent → EventGrouper → CompanySequence
//!                  │                                          │
//!             (rejects dropped,                        WindowScanner
//!              counted, logged)                              │
//!                                                    SurveillanceReport
//! ```
//!
//! # Ingestion policy
//!
//! Malformed lines never abort a pass: they are dropped, counted in
//! [`MonitorStats`], and optionally logged at WARN. A failure of the input
//! source itself (open/read) is fatal and surfaces as
//! [`MonitorError::Io`](crate::MonitorError::Io).
//!
//! # Memoization
//!
//! The report is computed once per analysis and cached; repeated queries
//! never re-read the input or redo the scan. Ingesting more lines after a
//! report exists drops the cache, and the next query recomputes. Single
//! threaded by design, so a plain `Option` field is all the guarding needed.
//!
//! # Example
//!
//! ```ignore
//! use cancellation_monitor::CancellationMonitor;
//!
//! let mut monitor = CancellationMonitor::from_path("trades.csv")?;
//! println!("excessive: {:?}", monitor.excessive_companies());
//! println!("well-behaved: {}", monitor.well_behaved_count());
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::MonitorConfig;
use crate::error::{MonitorError, Result};
use crate::grouper::EventGrouper;
use crate::parser::parse_record;
use crate::scanner::WindowScanner;

// ============================================================================
// Report
// ============================================================================

/// Outcome of one full analysis pass, cached by the monitor.
#[derive(Debug, Clone, Serialize)]
pub struct SurveillanceReport {
    /// Companies flagged as excessive, in first-seen order
    excessive: Vec<String>,

    /// Every company with at least one parsed event
    total_companies: usize,
}

impl SurveillanceReport {
    /// Companies involved in excessive cancellations (first-seen order; the
    /// set is what matters, not the order).
    #[inline]
    pub fn excessive_companies(&self) -> &[String] {
        &self.excessive
    }

    /// Number of flagged companies.
    #[inline]
    pub fn excessive_count(&self) -> usize {
        self.excessive.len()
    }

    /// Number of companies with at least one parsed event.
    #[inline]
    pub fn total_companies(&self) -> usize {
        self.total_companies
    }

    /// Number of companies never flagged.
    #[inline]
    pub fn well_behaved_count(&self) -> usize {
        self.total_companies - self.excessive.len()
    }

    /// Whether a specific company was flagged.
    pub fn is_excessive(&self, company: &str) -> bool {
        self.excessive.iter().any(|c| c == company)
    }
}

/// Ingestion and analysis counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonitorStats {
    /// Non-blank lines fed to the parser
    pub lines_ingested: usize,

    /// Lines dropped by the parser
    pub lines_rejected: usize,

    /// Distinct companies with at least one parsed event
    pub companies: usize,

    /// Full analysis passes performed (memoized queries do not add passes)
    pub analysis_passes: usize,
}

// ============================================================================
// Monitor
// ============================================================================

/// Drives one streaming pass and answers the two surveillance queries.
#[derive(Debug)]
pub struct CancellationMonitor {
    config: MonitorConfig,
    scanner: WindowScanner,
    grouper: EventGrouper,
    lines_ingested: usize,
    lines_rejected: usize,
    analysis_passes: usize,

    /// Lazily-computed report; `None` until first query or after new input
    report: Option<SurveillanceReport>,
}

impl Default for CancellationMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationMonitor {
    /// Create a monitor with the default configuration (60-second window,
    /// 1/3 ratio threshold).
    pub fn new() -> Self {
        // Default config always validates
        Self::from_config(MonitorConfig::default()).expect("default config is valid")
    }

    /// Create a monitor from a validated configuration.
    pub fn from_config(config: MonitorConfig) -> Result<Self> {
        config.validate().map_err(MonitorError::Config)?;
        let scanner = WindowScanner::new(config.window_ms, config.max_cancel_ratio);
        Ok(Self {
            config,
            scanner,
            grouper: EventGrouper::new(),
            lines_ingested: 0,
            lines_rejected: 0,
            analysis_passes: 0,
            report: None,
        })
    }

    /// Open a CSV file and ingest it with the default configuration.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_config(path, MonitorConfig::default())
    }

    /// Open a CSV file and ingest it with an explicit configuration.
    pub fn from_path_with_config<P: AsRef<Path>>(path: P, config: MonitorConfig) -> Result<Self> {
        let mut monitor = Self::from_config(config)?;
        let file = File::open(path)?;
        monitor.ingest_reader(BufReader::new(file))?;
        Ok(monitor)
    }

    /// The configuration this monitor runs with.
    #[inline]
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Ingest one raw input line.
    ///
    /// Blank lines are skipped; malformed lines are dropped, counted, and
    /// optionally logged. Never fails.
    pub fn ingest_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        self.lines_ingested += 1;

        match parse_record(line) {
            Ok(event) => {
                self.grouper.push(event);
                // New input invalidates any cached report
                self.report = None;
            }
            Err(reason) => {
                self.lines_rejected += 1;
                if self.config.log_rejects {
                    warn!(%reason, line, "dropping malformed input line");
                }
            }
        }
    }

    /// Ingest every line from a reader.
    ///
    /// Read failures are fatal for the whole pass; lines ingested before the
    /// failure remain in the monitor.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            self.ingest_line(&line);
        }
        Ok(())
    }

    /// Ingestion and analysis counters.
    pub fn stats(&self) -> MonitorStats {
        MonitorStats {
            lines_ingested: self.lines_ingested,
            lines_rejected: self.lines_rejected,
            companies: self.grouper.company_count(),
            analysis_passes: self.analysis_passes,
        }
    }

    /// The cached report, computing it on first access.
    pub fn report(&mut self) -> &SurveillanceReport {
        if self.report.is_none() {
            self.report = Some(self.analyze());
            self.analysis_passes += 1;
        }
        self.report.as_ref().expect("report just computed")
    }

    /// Companies involved in excessive cancellations.
    pub fn excessive_companies(&mut self) -> &[String] {
        self.report().excessive_companies()
    }

    /// Number of companies never flagged.
    pub fn well_behaved_count(&mut self) -> usize {
        self.report().well_behaved_count()
    }

    /// Whether a specific company was flagged.
    pub fn is_company_excessive(&mut self, company: &str) -> bool {
        self.report().is_excessive(company)
    }

    /// Scan every company sequence once.
    fn analyze(&self) -> SurveillanceReport {
        let mut excessive = Vec::new();
        let mut total_companies = 0;
        let mut events_scanned = 0;
        for sequence in self.grouper.sequences() {
            // A company only enters the report with at least one parsed event
            if sequence.is_empty() {
                continue;
            }
            total_companies += 1;
            events_scanned += sequence.len();
            if self.scanner.is_excessive(&sequence.events) {
                excessive.push(sequence.company.clone());
            }
        }

        let report = SurveillanceReport {
            excessive,
            total_companies,
        };
        debug!(
            companies = report.total_companies,
            events = events_scanned,
            excessive = report.excessive_count(),
            "analysis pass complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_monitor() -> CancellationMonitor {
        CancellationMonitor::from_config(MonitorConfig::default().with_log_rejects(false)).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let mut monitor = CancellationMonitor::new();
        assert!(monitor.excessive_companies().is_empty());
        assert_eq!(monitor.well_behaved_count(), 0);
        assert_eq!(monitor.report().total_companies(), 0);
    }

    #[test]
    fn test_queries_are_memoized() {
        let mut monitor = quiet_monitor();
        monitor.ingest_line("1000,ACME,D,100");
        monitor.ingest_line("2000,ACME,F,50");

        assert!(monitor.is_company_excessive("ACME"));
        assert_eq!(monitor.well_behaved_count(), 0);
        assert_eq!(monitor.excessive_companies().len(), 1);
        // Three queries, one pass
        assert_eq!(monitor.stats().analysis_passes, 1);
    }

    #[test]
    fn test_new_input_invalidates_report() {
        let mut monitor = quiet_monitor();
        monitor.ingest_line("1000,ACME,D,100");
        assert_eq!(monitor.well_behaved_count(), 1);
        assert_eq!(monitor.stats().analysis_passes, 1);

        monitor.ingest_line("2000,ACME,F,50");
        assert!(monitor.is_company_excessive("ACME"));
        assert_eq!(monitor.stats().analysis_passes, 2);
    }

    #[test]
    fn test_rejects_counted_not_fatal() {
        let mut monitor = quiet_monitor();
        monitor.ingest_line("timestamp,company,orderType,quantity");
        monitor.ingest_line("1000,ACME,D,100");
        monitor.ingest_line("not,enough");
        monitor.ingest_line("");

        let stats = monitor.stats();
        assert_eq!(stats.lines_ingested, 3); // blank line skipped entirely
        assert_eq!(stats.lines_rejected, 2);
        assert_eq!(stats.companies, 1);
        assert_eq!(monitor.well_behaved_count(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = CancellationMonitor::from_config(MonitorConfig::new().with_window_ms(0));
        assert!(matches!(result, Err(MonitorError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = CancellationMonitor::from_path("/no/such/file.csv");
        assert!(matches!(result, Err(MonitorError::Io(_))));
    }
}
