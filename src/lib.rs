//! # Fraudscan - Graph-based fraud ring detection for money-transfer ledgers
//!
//! This library analyzes a ledger of money-transfer transactions and flags
//! accounts exhibiting structural fraud signatures: closed transfer loops
//! ("fraud rings") and abnormal fan-in/fan-out hub accounts.
//!
//! ## Overview
//!
//! The engine runs as a single synchronous batch per ledger:
//!
//! 1. Build a deduplicated directed transaction graph from the records.
//! 2. Enumerate all simple cycles within the configured length window
//!    (default 3 to 5), with a fixed, reproducible traversal order.
//! 3. Flag accounts whose distinct-counterparty in/out degree meets the
//!    hub threshold (default 10).
//! 4. Score every implicated account with a fixed additive rule and
//!    assemble a deterministic, ranked report.
//!
//! Running the pipeline twice on the same ledger yields identical rings
//! and accounts; only the timing field differs.
//!
//! ## Architecture
//!
//! - `config`: analysis thresholds, validation, YAML loading
//! - `analysis::types`: records, patterns, rings, report structures
//! - `analysis::ingest`: loose-JSON ledger parsing with schema checks
//! - `analysis::graph`: transaction graph and strongly connected components
//! - `analysis::cycles`: length-bounded simple-cycle enumeration
//! - `analysis::fan_patterns`: fan-in/fan-out hub detection
//! - `analysis::scoring`: bounded suspicion scoring
//! - `analysis::rings`: ring records and membership index
//! - `analysis::pipeline`: end-to-end run and report assembly
//! - `analysis::report`: JSON and text report output
//!
//! ## Example Usage
//!
//! ```rust
//! use fraudscan::analysis::{analyze_ledger, TransactionRecord};
//! use fraudscan::config::AnalysisConfig;
//!
//! let records = vec![
//!     TransactionRecord {
//!         transaction_id: "TX_001".to_string(),
//!         sender_id: "A".to_string(),
//!         receiver_id: "B".to_string(),
//!         amount: 250.0,
//!         timestamp: "2024-01-01T10:00:00Z".to_string(),
//!     },
//! ];
//!
//! let report = analyze_ledger(&records, &AnalysisConfig::default());
//! assert_eq!(report.summary.total_accounts_analyzed, 2);
//! ```
//!
//! ## Error Handling
//!
//! Fatal input problems (schema violations) are typed `AnalysisError`
//! values raised before any graph work. Malformed rows are skipped and
//! counted. Cycle-search resource exhaustion is not an error: the report
//! is marked `truncated` and carries a deterministic prefix of the full
//! enumeration. File IO and the CLI use `color_eyre` results with context.

pub mod analysis;
pub mod config;
