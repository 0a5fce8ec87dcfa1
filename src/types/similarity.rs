//! Anomaly-to-anomaly similarity score and its component breakdown.

use serde::{Deserialize, Serialize};

/// The four weighted components of an anomaly-pair similarity score,
/// each in `[0, 1]`, plus the weighted `total` (also in `[0, 1]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityBreakdown {
    pub distance: f64,
    pub dimensional: f64,
    pub clock: f64,
    pub feature_type: f64,
    pub total: f64,
}
