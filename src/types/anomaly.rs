//! The canonical `Anomaly` record and its stable identity.

use serde::{Deserialize, Serialize};

use super::CanonicalType;

/// Identifies one anomaly by the run it was observed in and its row
/// position within that run's normalized table.
///
/// Chains reference anomalies by id rather than by shared pointer so
/// that `EngineResult` stays trivially copyable and serializable (see
/// DESIGN.md, "Ownership").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnomalyId {
    pub run_index: usize,
    pub row_index: usize,
}

/// A single observed feature in one run.
///
/// Lifecycle: created once by the normalizer (C1) from one raw row;
/// `corrected_distance` is mutated exactly once by the distance
/// corrector (C5); `cleaning_flags` is appended to by the cleaner's
/// (C2) seven passes; every other field is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: AnomalyId,
    pub feature_id: Option<String>,

    pub raw_distance: f64,
    pub odometer: f64,
    pub corrected_distance: f64,

    pub joint_number: u32,
    pub clock_degrees: f64,
    pub canonical_type: CanonicalType,

    pub depth_percent: f64,
    pub length: f64,
    pub width: f64,
    pub wall_thickness: f64,

    pub is_reference_point: bool,
    pub cleaning_flags: Vec<String>,
    pub has_missing_data: bool,
}

impl Anomaly {
    /// Append a cleaning flag, keeping the de-duplication property each
    /// pass relies on (a pass should not stamp the same flag twice on
    /// the same anomaly if it runs idempotently on cleaned data).
    pub fn flag(&mut self, flag: impl Into<String>) {
        let flag = flag.into();
        if !self.cleaning_flags.contains(&flag) {
            self.cleaning_flags.push(flag);
        }
    }
}
