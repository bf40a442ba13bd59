//! Suspicion scoring.
//!
//! Converts an account's deduplicated pattern set into a single bounded
//! score. The rule is a fixed additive heuristic, not a calibrated
//! probability: ring membership of any length contributes 50 once, each
//! hub direction contributes 20, and the sum is clamped to 100.

use super::types::{Pattern, PatternSet};

const CYCLE_WEIGHT: f64 = 50.0;
const FAN_IN_WEIGHT: f64 = 20.0;
const FAN_OUT_WEIGHT: f64 = 20.0;
const MAX_SCORE: f64 = 100.0;

/// Score a deduplicated pattern set into `[0, 100]`.
///
/// Order-independent over the set; multiple cycle memberships of any
/// lengths still contribute the cycle weight exactly once.
pub fn score_patterns(patterns: &PatternSet) -> f64 {
    let mut score = 0.0;

    if patterns.iter().any(|p| matches!(p, Pattern::Cycle(_))) {
        score += CYCLE_WEIGHT;
    }
    if patterns.contains(&Pattern::FanIn) {
        score += FAN_IN_WEIGHT;
    }
    if patterns.contains(&Pattern::FanOut) {
        score += FAN_OUT_WEIGHT;
    }

    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[Pattern]) -> PatternSet {
        patterns.iter().copied().collect()
    }

    #[test]
    fn test_empty_set_scores_zero() {
        assert_eq!(score_patterns(&PatternSet::new()), 0.0);
    }

    #[test]
    fn test_single_pattern_weights() {
        assert_eq!(score_patterns(&set(&[Pattern::Cycle(3)])), 50.0);
        assert_eq!(score_patterns(&set(&[Pattern::FanIn])), 20.0);
        assert_eq!(score_patterns(&set(&[Pattern::FanOut])), 20.0);
    }

    #[test]
    fn test_multiple_cycle_lengths_count_once() {
        let patterns = set(&[Pattern::Cycle(3), Pattern::Cycle(4), Pattern::Cycle(5)]);
        assert_eq!(score_patterns(&patterns), 50.0);
    }

    #[test]
    fn test_cycle_plus_fan_out() {
        let patterns = set(&[Pattern::Cycle(4), Pattern::FanOut]);
        assert_eq!(score_patterns(&patterns), 70.0);
    }

    #[test]
    fn test_all_patterns_stay_within_bound() {
        let patterns = set(&[Pattern::Cycle(3), Pattern::FanIn, Pattern::FanOut]);
        let score = score_patterns(&patterns);
        assert_eq!(score, 90.0);
        assert!(score <= 100.0);
    }
}
