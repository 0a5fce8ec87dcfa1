//! C4 — Replacement detector.
//!
//! Advisory only: groups consecutive unmatched reference points into
//! candidate pipe-replacement spans. Never influences correction or
//! matching; surfaced purely for the [`AlignmentZone::is_pipe_replacement`]
//! flag's corroboration and for human review.

use std::collections::HashSet;

use crate::config::ReplacementDetectionConfig;
use crate::types::{AnomalyId, MatchedReference, ReferencePoint, ReplacementReport, ReplacementSpan};

/// Detect candidate replacement spans in both runs.
///
/// `refs_a`/`refs_b` must be sorted by distance (the normalizer's
/// invariant holds transitively through [`crate::reference::extract`]).
pub fn detect(
    refs_a: &[ReferencePoint],
    refs_b: &[ReferencePoint],
    matches: &[MatchedReference],
    config: &ReplacementDetectionConfig,
) -> ReplacementReport {
    let matched_a: HashSet<AnomalyId> = matches.iter().map(|m| m.ref_a.id).collect();
    let matched_b: HashSet<AnomalyId> = matches.iter().map(|m| m.ref_b.id).collect();

    let unmatched_a: Vec<ReferencePoint> = refs_a.iter().copied().filter(|r| !matched_a.contains(&r.id)).collect();
    let unmatched_b: Vec<ReferencePoint> = refs_b.iter().copied().filter(|r| !matched_b.contains(&r.id)).collect();

    ReplacementReport {
        removed: group_spans(&unmatched_a, config),
        added: group_spans(&unmatched_b, config),
    }
}

fn group_spans(points: &[ReferencePoint], config: &ReplacementDetectionConfig) -> Vec<ReplacementSpan> {
    let mut spans = Vec::new();
    let mut run_start = 0usize;

    for i in 1..=points.len() {
        let breaks_run = i == points.len() || points[i].distance - points[i - 1].distance > config.proximity_ft;
        if breaks_run {
            let run = &points[run_start..i];
            if run.len() >= config.min_run_len {
                spans.push(ReplacementSpan {
                    start_distance: run.first().unwrap().distance,
                    end_distance: run.last().unwrap().distance,
                    point_count: run.len(),
                });
            }
            run_start = i;
        }
    }

    spans
}
