//! Fraud ring aggregation.
//!
//! Packages each detected cycle into a named ring record and maintains the
//! account-to-ring membership index used by report assembly. Ring ids are
//! assigned sequentially in cycle-detection order, so they are reproducible
//! for a fixed input ledger.

use std::collections::HashMap;

use super::types::{Cycle, FraudRing};

/// Risk score assigned to every ring. Fixed by policy, independent of the
/// per-account suspicion score.
pub const RING_RISK_SCORE: f64 = 95.0;

/// Ring records plus the account membership index.
#[derive(Debug, Clone, Default)]
pub struct RingIndex {
    rings: Vec<FraudRing>,
    /// Account -> id of the first ring (in ring order) containing it.
    membership: HashMap<String, String>,
}

impl RingIndex {
    pub fn rings(&self) -> &[FraudRing] {
        &self.rings
    }

    pub fn into_rings(self) -> Vec<FraudRing> {
        self.rings
    }

    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Id of the first ring containing the account, if any.
    pub fn ring_for_account(&self, account: &str) -> Option<&str> {
        self.membership.get(account).map(|id| id.as_str())
    }
}

/// Build ring records from cycles in detection order.
pub fn aggregate_rings(cycles: &[Cycle]) -> RingIndex {
    let mut index = RingIndex::default();

    for (position, cycle) in cycles.iter().enumerate() {
        let ring_id = format!("RING_{:03}", position + 1);

        for account in cycle {
            // First ring in detection order wins for membership lookup.
            index
                .membership
                .entry(account.clone())
                .or_insert_with(|| ring_id.clone());
        }

        index.rings.push(FraudRing {
            ring_id,
            member_accounts: cycle.clone(),
            pattern_type: "cycle".to_string(),
            risk_score: RING_RISK_SCORE,
        });
    }

    index
}
