//! Count and summary aggregation over filtered record sequences.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A group label with its running count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub label: String,
    pub count: u64,
}

/// Count occurrences of each label, sorted by descending count.
///
/// Ties keep the order in which a label was first encountered in the input,
/// so tie-breaking is a property of the caller's record order rather than of
/// hash-map iteration.
pub fn grouped_counts<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<GroupCount> {
    let mut groups: Vec<GroupCount> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for label in labels {
        match index.get(label) {
            Some(&at) => groups[at].count += 1,
            None => {
                index.insert(label.to_string(), groups.len());
                groups.push(GroupCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-encountered order within equal counts.
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

/// Top-N truncation for grouped counts.
#[must_use]
pub fn top_n(mut groups: Vec<GroupCount>, n: usize) -> Vec<GroupCount> {
    groups.truncate(n);
    groups
}

/// Trust-score bucket counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustScoreDistribution {
    /// Scores at or above 9.0.
    pub excellent: u64,
    /// Scores in [7.5, 9.0).
    pub good: u64,
    /// Scores in [6.0, 7.5).
    pub fair: u64,
    /// Scores below 6.0.
    pub poor: u64,
}

/// Scalar statistics plus the fixed bucket histogram over trust scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustScoreSummary {
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
    pub distribution: TrustScoreDistribution,
}

/// Summarize a set of trust scores. An empty input yields the zero summary.
#[must_use]
pub fn trust_score_summary(scores: &[f64]) -> TrustScoreSummary {
    if scores.is_empty() {
        return TrustScoreSummary::default();
    }

    let mut distribution = TrustScoreDistribution::default();
    let mut highest = f64::MIN;
    let mut lowest = f64::MAX;
    let mut sum = 0.0;

    for &score in scores {
        sum += score;
        highest = highest.max(score);
        lowest = lowest.min(score);

        if score >= 9.0 {
            distribution.excellent += 1;
        } else if score >= 7.5 {
            distribution.good += 1;
        } else if score >= 6.0 {
            distribution.fair += 1;
        } else {
            distribution.poor += 1;
        }
    }

    let average = sum / scores.len() as f64;

    TrustScoreSummary {
        average,
        highest,
        lowest,
        distribution,
    }
}
