//! Piecewise-linear alignment zones produced by the distance corrector.

use serde::{Deserialize, Serialize};

use super::MatchedReference;

/// An interval of the later run's raw-distance axis bounded by two
/// consecutive matched reference pairs, carrying the affine map for
/// that interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentZone {
    pub start_raw: f64,
    pub end_raw: f64,
    pub start_canon: f64,
    pub end_canon: f64,
    pub correction_factor: f64,
    pub is_pipe_replacement: bool,
}

impl AlignmentZone {
    pub fn from_pair(prev: &MatchedReference, next: &MatchedReference, replacement_ratio_deviation: f64) -> Self {
        let start_raw = prev.ref_b.distance;
        let end_raw = next.ref_b.distance;
        let start_canon = prev.ref_a.distance;
        let end_canon = next.ref_a.distance;

        let canon_span = end_canon - start_canon;
        let correction_factor = if canon_span <= 0.0 {
            1.0
        } else {
            (end_raw - start_raw) / canon_span
        };

        Self {
            start_raw,
            end_raw,
            start_canon,
            end_canon,
            correction_factor,
            is_pipe_replacement: (correction_factor - 1.0).abs() > replacement_ratio_deviation,
        }
    }

    /// Map a raw distance to the reference-run coordinate if it falls
    /// within this zone's raw-distance span.
    pub fn map(&self, raw_distance: f64) -> Option<f64> {
        if self.end_raw <= self.start_raw {
            return None;
        }
        if raw_distance < self.start_raw || raw_distance > self.end_raw {
            return None;
        }
        let t = (raw_distance - self.start_raw) / (self.end_raw - self.start_raw);
        Some(self.start_canon + t * (self.end_canon - self.start_canon))
    }
}
