//! C8 — Bipartite matcher.
//!
//! Matches run A's (cleaned, corrected) anomalies against run B's using
//! a minimum-cost perfect assignment over a candidate-filtered,
//! similarity-weighted cost matrix. Unmatched A anomalies are reported
//! missing; unmatched B anomalies are reported new.

mod hungarian;

use rayon::prelude::*;
use tracing::debug;

use crate::config::{MatchingConfig, SimilarityConfig};
use crate::similarity;
use crate::types::{Anomaly, SimilarityBreakdown};

/// One confirmed pairing, with the similarity breakdown that earned it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfirmedMatch {
    pub a_index: usize,
    pub b_index: usize,
    pub similarity: SimilarityBreakdown,
}

/// Outcome of matching one run pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchResult {
    pub confirmed: Vec<ConfirmedMatch>,
    pub missing: Vec<usize>,
    pub new_anomalies: Vec<usize>,
}

/// Match run A's anomalies against run B's.
///
/// Index order in `missing`/`new_anomalies`/`confirmed` always refers
/// to position within the input slices, never the post-sort order of
/// anything internal — callers own translating back to [`crate::types::AnomalyId`].
pub fn match_anomalies(
    anomalies_a: &[Anomaly],
    anomalies_b: &[Anomaly],
    matching_config: &MatchingConfig,
    similarity_config: &SimilarityConfig,
) -> MatchResult {
    let n_a = anomalies_a.len();
    let n_b = anomalies_b.len();

    if n_a == 0 && n_b == 0 {
        return MatchResult::default();
    }

    let size = n_a.max(n_b);

    // One similarity score per (i, j) candidate cell, computed in
    // parallel; `None` means the pair failed the distance/similarity
    // candidate filter and gets the sentinel cost.
    let rows: Vec<Vec<Option<SimilarityBreakdown>>> = (0..n_a)
        .into_par_iter()
        .map(|i| {
            (0..n_b)
                .map(|j| {
                    let gap = (anomalies_a[i].corrected_distance - anomalies_b[j].corrected_distance).abs();
                    if gap > matching_config.candidate_distance_ft {
                        return None;
                    }
                    let breakdown = similarity::score(&anomalies_a[i], &anomalies_b[j], similarity_config);
                    if breakdown.total < matching_config.candidate_min_similarity {
                        return None;
                    }
                    Some(breakdown)
                })
                .collect()
        })
        .collect();

    let mut cost = vec![vec![matching_config.sentinel_cost; size]; size];
    for (i, row) in rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if let Some(breakdown) = cell {
                cost[i][j] = 1.0 - breakdown.total;
            }
        }
    }

    let assignment = hungarian::solve(&cost);

    let mut confirmed = Vec::new();
    let mut matched_b = vec![false; n_b];

    for (i, &j) in assignment.iter().enumerate().take(n_a) {
        if j >= n_b {
            continue;
        }
        if let Some(breakdown) = rows[i][j] {
            if breakdown.total >= matching_config.acceptance_min_similarity {
                confirmed.push(ConfirmedMatch {
                    a_index: i,
                    b_index: j,
                    similarity: breakdown,
                });
                matched_b[j] = true;
            }
        }
    }

    let confirmed_a: std::collections::HashSet<usize> = confirmed.iter().map(|m| m.a_index).collect();
    let missing: Vec<usize> = (0..n_a).filter(|i| !confirmed_a.contains(i)).collect();
    let new_anomalies: Vec<usize> = (0..n_b).filter(|j| !matched_b[*j]).collect();

    debug!(
        n_a,
        n_b,
        confirmed = confirmed.len(),
        missing = missing.len(),
        new_anomalies = new_anomalies.len(),
        "bipartite matching complete"
    );

    MatchResult {
        confirmed,
        missing,
        new_anomalies,
    }
}
