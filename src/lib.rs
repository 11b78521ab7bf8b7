//! Cancellation Monitor
//!
//! Surveillance of excessive order cancellation over per-company trade event
//! streams.
//!
//! # Overview
//!
//! Input is a line-oriented CSV stream of order events
//! (`timestamp, company, orderType, quantity`, with `orderType` "D" for a new
//! order or "F" for a cancellation/fill). For each company, every 60-second
//! window of its event history is checked; a company is flagged when any
//! window's cancelled-quantity to new-order-quantity ratio exceeds one third.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Cancellation Monitor                     │
//! ├────────────────────────────────────────────────────────────┤
//! │  parser/   - one raw line → validated TradeEvent           │
//! │  grouper/  - partition events by company, order-preserving │
//! │  scanner/  - two-pointer 60-second ratio window scan       │
//! │  monitor/  - ingestion driver, memoized report, stats      │
//! │  config/   - window/threshold configuration (TOML/JSON)    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use cancellation_monitor::CancellationMonitor;
//!
//! let mut monitor = CancellationMonitor::from_path("trades.csv")?;
//!
//! for company in monitor.excessive_companies() {
//!     println!("excessive cancellations: {company}");
//! }
//! println!("well-behaved companies: {}", monitor.well_behaved_count());
//! ```
//!
//! Malformed input lines are dropped and counted, never fatal; an unreadable
//! input source fails the whole pass. See the module docs for the details of
//! each stage.

pub mod config;
pub mod error;
pub mod grouper;
pub mod monitor;
pub mod parser;
pub mod scanner;
pub mod types;

// Re-exports - Core surface
pub use config::MonitorConfig;
pub use error::{MonitorError, Result};
pub use monitor::{CancellationMonitor, MonitorStats, SurveillanceReport};

// Re-exports - Components
pub use grouper::EventGrouper;
pub use parser::{parse_record, RejectReason};
pub use scanner::{ScanOutcome, WindowScanner, DEFAULT_MAX_CANCEL_RATIO, DEFAULT_WINDOW_MS};
pub use types::{CompanySequence, OrderKind, TradeEvent};
