//! Pass 7 — zero-dimension check (spec §4.2.7).

use crate::types::{Anomaly, PassReport};

pub fn run(mut anomalies: Vec<Anomaly>) -> (Vec<Anomaly>, PassReport) {
    let mut rows_affected = 0usize;
    let mut details = Vec::new();

    for a in &mut anomalies {
        if !a.is_reference_point && a.length == 0.0 && a.width == 0.0 && a.depth_percent == 0.0 {
            a.flag("zero_dimensions");
            a.has_missing_data = true;
            rows_affected += 1;
            details.push(format!("row {} has zero length/width/depth", a.id.row_index));
        }
    }

    let report = PassReport {
        name: "zero_dimension_check".to_string(),
        description: "Flags non-reference anomalies with length, width, and depth all zero".to_string(),
        rows_affected,
        details,
    };

    (anomalies, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnomalyId, CanonicalType};

    fn anomaly(is_ref: bool, length: f64, width: f64, depth: f64) -> Anomaly {
        Anomaly {
            id: AnomalyId { run_index: 0, row_index: 0 },
            feature_id: None,
            raw_distance: 100.0,
            odometer: 100.0,
            corrected_distance: 100.0,
            joint_number: 0,
            clock_degrees: 0.0,
            canonical_type: if is_ref { CanonicalType::GirthWeld } else { CanonicalType::Dent },
            depth_percent: depth,
            length,
            width,
            wall_thickness: 0.375,
            is_reference_point: is_ref,
            cleaning_flags: Vec::new(),
            has_missing_data: false,
        }
    }

    #[test]
    fn flags_zero_dimension_non_reference() {
        let (out, report) = run(vec![anomaly(false, 0.0, 0.0, 0.0)]);
        assert!(out[0].cleaning_flags.contains(&"zero_dimensions".to_string()));
        assert!(out[0].has_missing_data);
        assert_eq!(report.rows_affected, 1);
    }

    #[test]
    fn reference_points_are_exempt() {
        let (out, report) = run(vec![anomaly(true, 0.0, 0.0, 0.0)]);
        assert!(out[0].cleaning_flags.is_empty());
        assert_eq!(report.rows_affected, 0);
    }

    #[test]
    fn nonzero_dimension_is_unflagged() {
        let (out, _) = run(vec![anomaly(false, 1.0, 0.0, 0.0)]);
        assert!(out[0].cleaning_flags.is_empty());
    }
}
