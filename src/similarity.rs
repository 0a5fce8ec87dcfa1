//! C7 — Similarity scorer.
//!
//! Produces a weighted four-component score for one candidate anomaly
//! pair, used both as the bipartite matcher's cost basis (C8) and as
//! the record kept on each chain link for later review.

use crate::config::SimilarityConfig;
use crate::types::{Anomaly, SimilarityBreakdown};

/// Score how well `a` (earlier run) and `b` (later run) might be the
/// same physical feature.
///
/// Distance is compared in the *corrected* frame — this only makes
/// sense once the distance corrector (C5) has run. Each component is
/// clamped to `[0, 1]` before weighting.
pub fn score(a: &Anomaly, b: &Anomaly, config: &SimilarityConfig) -> SimilarityBreakdown {
    let distance = distance_component(a, b, config.distance_decay_ft);
    let dimensional = dimensional_component(a, b);
    let clock = clock_component(a, b);
    let feature_type = feature_type_component(a, b, config.feature_type_compatible_score);

    let total = config.weight_distance * distance
        + config.weight_dimensional * dimensional
        + config.weight_clock * clock
        + config.weight_feature_type * feature_type;

    SimilarityBreakdown {
        distance,
        dimensional,
        clock,
        feature_type,
        total,
    }
}

fn distance_component(a: &Anomaly, b: &Anomaly, decay_ft: f64) -> f64 {
    let gap = (a.corrected_distance - b.corrected_distance).abs();
    (-gap / decay_ft).exp()
}

fn dimensional_component(a: &Anomaly, b: &Anomaly) -> f64 {
    let va = [a.depth_percent, a.length, a.width];
    let vb = [b.depth_percent, b.length, b.width];

    let dot: f64 = va.iter().zip(vb.iter()).map(|(x, y)| x * y).sum();
    let norm_a = va.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = vb.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn clock_component(a: &Anomaly, b: &Anomaly) -> f64 {
    let raw_diff = (a.clock_degrees - b.clock_degrees).abs() % 360.0;
    let circular_diff = raw_diff.min(360.0 - raw_diff);
    (1.0 - circular_diff / 180.0).clamp(0.0, 1.0)
}

fn feature_type_component(a: &Anomaly, b: &Anomaly, compatible_score: f64) -> f64 {
    if a.canonical_type == b.canonical_type {
        1.0
    } else if a.canonical_type.compatible(b.canonical_type) {
        compatible_score
    } else {
        0.0
    }
}
