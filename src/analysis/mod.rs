//! Ledger fraud analysis engine.
//!
//! This module provides the batch pipeline for detecting structural fraud
//! signatures in money-transfer ledgers: transfer loops ("fraud rings")
//! and fan-in/fan-out hub accounts.

pub mod types;
pub mod ingest;
pub mod graph;
pub mod cycles;
pub mod fan_patterns;
pub mod scoring;
pub mod rings;
pub mod pipeline;
pub mod report;

pub use types::*;
pub use ingest::parse_records;
pub use graph::TransactionGraph;
pub use cycles::enumerate_bounded_cycles;
pub use fan_patterns::detect_fan_patterns;
pub use scoring::score_patterns;
pub use rings::aggregate_rings;
pub use pipeline::analyze_ledger;
pub use report::{generate_json_report, generate_text_report};
