//! C3 — Reference extractor and matcher.
//!
//! Reference points (girth welds, valves, fittings) are the skeleton
//! every other alignment step hangs off of: the distance corrector (C5)
//! builds its zones from [`MatchedReference`] pairs, and the drift
//! reporter (C6) walks the same pairs to measure odometer drift.

use tracing::debug;

use crate::config::ReferenceMatchingConfig;
use crate::types::{Anomaly, MatchedReference, ReferencePoint};

/// Project every reference-point anomaly in a run, sorted by distance.
///
/// The normalizer already sorts anomalies by `raw_distance`, so this is
/// a filter-map, not a re-sort — preserving that order matters for the
/// matcher's tie-break rule below.
pub fn extract(anomalies: &[Anomaly]) -> Vec<ReferencePoint> {
    anomalies.iter().filter_map(ReferencePoint::from_anomaly).collect()
}

/// Greedily match run A's reference points against run B's.
///
/// For each of A's reference points in distance order, picks the
/// unmatched candidate in B within `max_offset_ft` with the lowest
/// score (`|Δdistance| + joint_mismatch_penalty` when both joint
/// numbers are known and differ), breaking ties by B's earlier index.
/// Matching is injective in both directions by construction: each B
/// candidate is removed from the pool the moment it is matched.
pub fn match_references(
    refs_a: &[ReferencePoint],
    refs_b: &[ReferencePoint],
    config: &ReferenceMatchingConfig,
) -> Vec<MatchedReference> {
    let mut available: Vec<bool> = vec![true; refs_b.len()];
    let mut matches = Vec::with_capacity(refs_a.len().min(refs_b.len()));

    for &ref_a in refs_a {
        let mut best: Option<(usize, f64)> = None;

        for (j, &ref_b) in refs_b.iter().enumerate() {
            if !available[j] {
                continue;
            }
            let offset = (ref_b.distance - ref_a.distance).abs();
            if offset > config.max_offset_ft {
                continue;
            }
            let mut score = offset;
            if ref_a.joint_number > 0 && ref_b.joint_number > 0 && ref_a.joint_number != ref_b.joint_number {
                score += config.joint_mismatch_penalty;
            }
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((j, score)),
            }
        }

        if let Some((j, _)) = best {
            available[j] = false;
            matches.push(MatchedReference::new(ref_a, refs_b[j]));
        }
    }

    debug!(
        refs_a = refs_a.len(),
        refs_b = refs_b.len(),
        matched = matches.len(),
        "reference matching complete"
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnomalyId, CanonicalType};

    fn point(row: usize, distance: f64, joint: u32) -> ReferencePoint {
        ReferencePoint {
            id: AnomalyId { run_index: 0, row_index: row },
            distance,
            odometer: distance,
            joint_number: joint,
            canonical_type: CanonicalType::GirthWeld,
            run_index: 0,
        }
    }

    #[test]
    fn matches_nearest_within_tolerance() {
        let config = ReferenceMatchingConfig::default();
        let refs_a = vec![point(0, 1000.0, 10)];
        let refs_b = vec![point(0, 1450.0, 10), point(1, 1010.0, 10)];
        let matches = match_references(&refs_a, &refs_b, &config);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].ref_b.id.row_index, 1);
    }

    #[test]
    fn out_of_tolerance_is_unmatched() {
        let config = ReferenceMatchingConfig::default();
        let refs_a = vec![point(0, 1000.0, 10)];
        let refs_b = vec![point(0, 2000.0, 10)];
        assert!(match_references(&refs_a, &refs_b, &config).is_empty());
    }

    #[test]
    fn matching_is_injective() {
        let config = ReferenceMatchingConfig::default();
        let refs_a = vec![point(0, 1000.0, 10), point(1, 1005.0, 11)];
        let refs_b = vec![point(0, 1002.0, 10)];
        let matches = match_references(&refs_a, &refs_b, &config);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn joint_mismatch_adds_penalty_but_can_still_win() {
        let config = ReferenceMatchingConfig::default();
        let refs_a = vec![point(0, 1000.0, 10)];
        // Candidate with matching joint is farther but still cheaper once
        // the mismatch penalty (100ft) is added to the closer one.
        let refs_b = vec![point(0, 1050.0, 99), point(1, 1120.0, 10)];
        let matches = match_references(&refs_a, &refs_b, &config);
        assert_eq!(matches[0].ref_b.id.row_index, 1);
    }

    #[test]
    fn derived_offsets_are_correct() {
        let ref_a = point(0, 1000.0, 10);
        let mut ref_b = point(0, 1010.0, 10);
        ref_b.odometer = 1005.0;
        let matched = MatchedReference::new(ref_a, ref_b);
        assert_eq!(matched.distance_offset, 10.0);
        assert_eq!(matched.odometer_drift, 5.0);
    }
}
