//! Percentile bucketing of engagement scores.
//!
//! Thresholds are tertile cut points over the scores of the currently
//! filtered set, not the global set, so a tier expresses relative ranking
//! within what the user is looking at.

use serde::{Deserialize, Serialize};

use crate::criteria::TierFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Mid => "mid",
            Tier::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub p33: f64,
    pub p66: f64,
}

impl Thresholds {
    /// Compute tertile thresholds over the given scores.
    ///
    /// Scores are sorted ascending and the cut points are the values at
    /// indices `n/3` and `2n/3`. An empty input yields the defaults 0 and 1.
    pub fn compute(scores: &[f64]) -> Self {
        let mut sorted: Vec<f64> = scores.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        let p33 = sorted.get(n / 3).copied().unwrap_or(0.0);
        let p66 = sorted.get(2 * n / 3).copied().unwrap_or(1.0);
        Self { p33, p66 }
    }

    /// Classify a score, low branch first: `low` when `score <= p33`, then
    /// `high` when `score >= p66`, otherwise `mid`. With collapsed
    /// thresholds (p33 == p66) a score at the cut point classifies `low`;
    /// the high check is never reached.
    pub fn classify(&self, score: f64) -> Tier {
        if score <= self.p33 {
            Tier::Low
        } else if score >= self.p66 {
            Tier::High
        } else {
            Tier::Mid
        }
    }

    /// Evaluate only the predicate of the selected tier. Both boundary
    /// comparisons are inclusive, so a score exactly at a threshold can
    /// satisfy the low and high predicates independently.
    pub fn matches(&self, filter: TierFilter, score: f64) -> bool {
        match filter {
            TierFilter::All => true,
            TierFilter::Low => score <= self.p33,
            TierFilter::High => score >= self.p66,
            TierFilter::Mid => score > self.p33 && score < self.p66,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_uses_defaults() {
        let t = Thresholds::compute(&[]);
        assert_eq!(t.p33, 0.0);
        assert_eq!(t.p66, 1.0);
    }

    #[test]
    fn thresholds_are_drawn_from_the_input() {
        let scores = [0.1, 0.2, 0.3, 0.9];
        let t = Thresholds::compute(&scores);
        // n = 4: p33 index 1, p66 index 2.
        assert_eq!(t.p33, 0.2);
        assert_eq!(t.p66, 0.3);
        assert!(scores.contains(&t.p33));
        assert!(scores.contains(&t.p66));
    }

    #[test]
    fn high_bound_is_inclusive() {
        let t = Thresholds::compute(&[0.1, 0.2, 0.3, 0.9]);
        assert!(t.matches(TierFilter::High, 0.3));
        assert!(t.matches(TierFilter::High, 0.9));
        assert!(!t.matches(TierFilter::High, 0.25));
    }

    #[test]
    fn every_score_classifies_into_exactly_one_tier() {
        let scores = [0.05, 0.1, 0.2, 0.3, 0.5, 0.9];
        let t = Thresholds::compute(&scores);
        for &s in &scores {
            let tiers = [Tier::Low, Tier::Mid, Tier::High];
            let matched: Vec<_> = tiers.iter().filter(|&&x| t.classify(s) == x).collect();
            assert_eq!(matched.len(), 1);
        }
    }

    #[test]
    fn collapsed_thresholds_classify_low_by_branch_order() {
        // All-equal scores collapse both cut points onto the same value.
        let t = Thresholds::compute(&[0.5, 0.5, 0.5]);
        assert_eq!(t.p33, t.p66);
        assert_eq!(t.classify(0.5), Tier::Low);
        // The filter predicates still both hold independently.
        assert!(t.matches(TierFilter::Low, 0.5));
        assert!(t.matches(TierFilter::High, 0.5));
    }
}
