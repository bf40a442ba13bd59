//! Core data types for ledger fraud analysis.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single money-transfer record from the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub amount: f64,
    pub timestamp: String,
}

/// An ordered sequence of account identifiers forming a closed directed
/// walk. The start account is not repeated at the end; the cycle length is
/// the number of entries.
pub type Cycle = Vec<String>;

/// A structural fraud pattern attached to one account.
///
/// Closed enumeration so scoring matches on variant kind rather than label
/// text. `Ord` follows the serialized label order, which keeps serialized
/// pattern lists stable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pattern {
    /// Member of a detected transfer loop of the given length.
    Cycle(usize),
    /// Receives from at least the threshold number of distinct counterparties.
    FanIn,
    /// Sends to at least the threshold number of distinct counterparties.
    FanOut,
}

impl Pattern {
    /// Label used in serialized reports: `cycle_length_<k>`, `fan_in`, `fan_out`.
    pub fn label(&self) -> String {
        match self {
            Pattern::Cycle(len) => format!("cycle_length_{}", len),
            Pattern::FanIn => "fan_in".to_string(),
            Pattern::FanOut => "fan_out".to_string(),
        }
    }
}

/// A deduplicated set of patterns detected for one account.
pub type PatternSet = BTreeSet<Pattern>;

/// A detected transfer loop packaged as a named fraud ring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudRing {
    /// Sequential identifier (`RING_001`, `RING_002`, ...) in detection order.
    pub ring_id: String,
    /// Ring members in cycle order.
    pub member_accounts: Vec<String>,
    /// Always `"cycle"` for ring records.
    pub pattern_type: String,
    /// Fixed risk score assigned to every ring.
    pub risk_score: f64,
}

/// Per-account analysis result for accounts that triggered at least one pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspiciousAccount {
    pub account_id: String,
    pub suspicion_score: f64,
    /// Deduplicated pattern labels in fixed label order.
    pub detected_patterns: Vec<String>,
    /// First ring (in ring order) containing this account, or `"N/A"`.
    pub ring_id: String,
}

/// Summary statistics for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_accounts_analyzed: usize,
    pub suspicious_accounts_flagged: usize,
    pub fraud_rings_detected: usize,
    /// Wall-clock duration of the run, rounded to two decimals.
    pub processing_time_seconds: f64,
    /// True when the cycle search stopped at the configured cap and the
    /// report covers a deterministic prefix of the full enumeration.
    pub truncated: bool,
}

/// Complete analysis report returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Sorted by suspicion score descending; ties keep the accounts'
    /// first-appearance order in the input ledger.
    pub suspicious_accounts: Vec<SuspiciousAccount>,
    pub fraud_rings: Vec<FraudRing>,
    pub summary: AnalysisSummary,
}

/// Fatal input errors. Per-row problems (empty sender/receiver) are skipped
/// and counted instead of raised; see `ingest`.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Transaction record {index} is missing required field '{field}'")]
    Schema { index: usize, field: &'static str },

    #[error("Transaction record {index} is not a JSON object")]
    NotAnObject { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_labels() {
        assert_eq!(Pattern::Cycle(3).label(), "cycle_length_3");
        assert_eq!(Pattern::Cycle(5).label(), "cycle_length_5");
        assert_eq!(Pattern::FanIn.label(), "fan_in");
        assert_eq!(Pattern::FanOut.label(), "fan_out");
    }

    #[test]
    fn test_pattern_set_deduplicates_and_orders() {
        let mut set = PatternSet::new();
        set.insert(Pattern::FanOut);
        set.insert(Pattern::Cycle(4));
        set.insert(Pattern::FanIn);
        set.insert(Pattern::Cycle(4));

        let labels: Vec<String> = set.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["cycle_length_4", "fan_in", "fan_out"]);
    }

    #[test]
    fn test_report_serializes_expected_shape() {
        let report = AnalysisReport {
            suspicious_accounts: vec![SuspiciousAccount {
                account_id: "ACC_1".to_string(),
                suspicion_score: 50.0,
                detected_patterns: vec!["cycle_length_3".to_string()],
                ring_id: "RING_001".to_string(),
            }],
            fraud_rings: vec![FraudRing {
                ring_id: "RING_001".to_string(),
                member_accounts: vec!["ACC_1".to_string()],
                pattern_type: "cycle".to_string(),
                risk_score: 95.0,
            }],
            summary: AnalysisSummary {
                total_accounts_analyzed: 3,
                suspicious_accounts_flagged: 1,
                fraud_rings_detected: 1,
                processing_time_seconds: 0.01,
                truncated: false,
            },
        };

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert!(json.get("suspicious_accounts").is_some());
        assert!(json.get("fraud_rings").is_some());
        assert_eq!(json["summary"]["total_accounts_analyzed"], 3);
        assert_eq!(json["fraud_rings"][0]["risk_score"], 95.0);
    }
}
