//! Fan-in / fan-out hub detection.
//!
//! Flags accounts whose deduplicated in-degree or out-degree meets the
//! configured threshold. Degree counts distinct counterparties, not raw
//! transaction volume, so repeated transfers between the same pair do not
//! inflate the signal.

use std::collections::HashMap;

use rayon::prelude::*;

use super::graph::TransactionGraph;
use super::types::{Pattern, PatternSet};

/// Detect fan-in and fan-out hubs.
///
/// Returns a mapping from account identifier to the hub patterns it
/// triggered; both patterns may apply to the same account. Accounts below
/// the threshold in both directions are absent from the map. The map
/// carries no ordering guarantee; consumers treat it as a lookup.
pub fn detect_fan_patterns(
    graph: &TransactionGraph,
    threshold: usize,
) -> HashMap<String, PatternSet> {
    let flagged: Vec<(String, PatternSet)> = (0..graph.node_count())
        .into_par_iter()
        .filter_map(|idx| {
            let mut patterns = PatternSet::new();
            if graph.in_degree(idx) >= threshold {
                patterns.insert(Pattern::FanIn);
            }
            if graph.out_degree(idx) >= threshold {
                patterns.insert(Pattern::FanOut);
            }
            if patterns.is_empty() {
                None
            } else {
                Some((graph.account(idx).to_string(), patterns))
            }
        })
        .collect();

    log::debug!(
        "Fan pattern detection flagged {} of {} accounts (threshold {})",
        flagged.len(),
        graph.node_count(),
        threshold
    );

    flagged.into_iter().collect()
}
