//! End-to-end analysis pipeline and report assembly.
//!
//! Runs one synchronous batch per ledger: graph build, cycle enumeration,
//! fan-pattern detection, then scoring and aggregation. Each phase consumes
//! the completed output of the previous one; nothing is mutated after the
//! fact, so running the pipeline twice on the same ledger produces
//! identical rings and accounts (timing aside).

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::Instant;

use crate::config::AnalysisConfig;

use super::cycles::enumerate_bounded_cycles;
use super::fan_patterns::detect_fan_patterns;
use super::graph::TransactionGraph;
use super::rings::aggregate_rings;
use super::scoring::score_patterns;
use super::types::{
    AnalysisReport, AnalysisSummary, Pattern, PatternSet, SuspiciousAccount, TransactionRecord,
};

/// Analyze a validated ledger into a ranked fraud report.
///
/// Pure apart from the wall-clock timing field in the summary. Accounts
/// with equal suspicion scores keep their first-appearance order from the
/// input: evidence is keyed by node index and the final sort is stable on
/// score alone.
pub fn analyze_ledger(records: &[TransactionRecord], config: &AnalysisConfig) -> AnalysisReport {
    let start = Instant::now();

    let graph = TransactionGraph::from_records(records);
    log::info!(
        "Analyzing {} transfers across {} accounts",
        records.len(),
        graph.node_count()
    );

    let scan = enumerate_bounded_cycles(&graph, config);
    let fan_patterns = detect_fan_patterns(&graph, config.fan_threshold);
    let ring_index = aggregate_rings(&scan.cycles);

    // Per-account evidence, keyed by node index so iteration follows
    // first-appearance order.
    let mut evidence: BTreeMap<usize, PatternSet> = BTreeMap::new();

    for cycle in &scan.cycles {
        for account in cycle {
            if let Some(idx) = graph.node_index(account) {
                evidence
                    .entry(idx)
                    .or_default()
                    .insert(Pattern::Cycle(cycle.len()));
            }
        }
    }

    for (account, patterns) in &fan_patterns {
        if let Some(idx) = graph.node_index(account) {
            evidence
                .entry(idx)
                .or_default()
                .extend(patterns.iter().copied());
        }
    }

    let mut suspicious_accounts: Vec<SuspiciousAccount> = evidence
        .iter()
        .map(|(&idx, patterns)| {
            let account_id = graph.account(idx).to_string();
            let ring_id = ring_index
                .ring_for_account(&account_id)
                .unwrap_or("N/A")
                .to_string();
            SuspiciousAccount {
                suspicion_score: score_patterns(patterns),
                detected_patterns: patterns.iter().map(Pattern::label).collect(),
                account_id,
                ring_id,
            }
        })
        .collect();

    // Stable sort on score only; ties keep insertion order.
    suspicious_accounts.sort_by(|a, b| {
        b.suspicion_score
            .partial_cmp(&a.suspicion_score)
            .unwrap_or(Ordering::Equal)
    });

    let summary = AnalysisSummary {
        total_accounts_analyzed: graph.node_count(),
        suspicious_accounts_flagged: suspicious_accounts.len(),
        fraud_rings_detected: ring_index.ring_count(),
        processing_time_seconds: round_two_decimals(start.elapsed().as_secs_f64()),
        truncated: scan.truncated,
    };

    log::info!(
        "Flagged {} accounts in {} rings ({:.2}s)",
        summary.suspicious_accounts_flagged,
        summary.fraud_rings_detected,
        summary.processing_time_seconds
    );

    AnalysisReport {
        suspicious_accounts,
        fraud_rings: ring_index.into_rings(),
        summary,
    }
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
