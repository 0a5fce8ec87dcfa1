//! Reference-point projections and matched reference pairs.

use serde::{Deserialize, Serialize};

use super::{Anomaly, AnomalyId, CanonicalType};

/// Projection of an anomaly whose `canonical_type` is a reference
/// feature (girth weld, valve, fitting).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub id: AnomalyId,
    pub distance: f64,
    pub odometer: f64,
    pub joint_number: u32,
    pub canonical_type: CanonicalType,
    pub run_index: usize,
}

impl ReferencePoint {
    /// Project a reference point from an anomaly, or `None` if the
    /// anomaly is not a reference feature.
    pub fn from_anomaly(anomaly: &Anomaly) -> Option<Self> {
        if !anomaly.is_reference_point {
            return None;
        }
        Some(Self {
            id: anomaly.id,
            distance: anomaly.raw_distance,
            odometer: anomaly.odometer,
            joint_number: anomaly.joint_number,
            canonical_type: anomaly.canonical_type,
            run_index: anomaly.id.run_index,
        })
    }
}

/// A pair of reference points from two runs, matched by the reference
/// matcher (C3).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchedReference {
    pub ref_a: ReferencePoint,
    pub ref_b: ReferencePoint,
    pub distance_offset: f64,
    pub odometer_drift: f64,
}

impl MatchedReference {
    pub fn new(ref_a: ReferencePoint, ref_b: ReferencePoint) -> Self {
        let distance_offset = ref_b.distance - ref_a.distance;
        let odometer_drift =
            (ref_b.distance - ref_b.odometer) - (ref_a.distance - ref_a.odometer);
        Self {
            ref_a,
            ref_b,
            distance_offset,
            odometer_drift,
        }
    }
}
