//! Pass 5 — distance monotonicity check (spec §4.2.5).
//!
//! Backward jumps are flagged, never removed or corrected — that is
//! the distance corrector's (C5) job, working from reference pairs.

use crate::config::CleanerConfig;
use crate::types::{Anomaly, PassReport};

pub fn run(mut anomalies: Vec<Anomaly>, config: &CleanerConfig) -> (Vec<Anomaly>, PassReport) {
    let mut rows_affected = 0usize;
    let mut details = Vec::new();

    for i in 1..anomalies.len() {
        let prev_distance = anomalies[i - 1].raw_distance;
        let curr_distance = anomalies[i].raw_distance;
        if prev_distance > 0.0 && curr_distance > 0.0 && curr_distance < prev_distance {
            let jump = (prev_distance - curr_distance).round() as i64;
            let flag = if (jump as f64) < config.minor_backward_jump_ft {
                format!("distance_backward_jump_{jump}ft")
            } else {
                format!("distance_major_backward_jump_{jump}ft")
            };
            let row_index = anomalies[i].id.row_index;
            anomalies[i].flag(&flag);
            rows_affected += 1;
            details.push(format!("row {row_index}: {flag}"));
        }
    }

    let report = PassReport {
        name: "distance_monotonicity".to_string(),
        description: "Flags (without removing) backward jumps in sorted distance order".to_string(),
        rows_affected,
        details,
    };

    (anomalies, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnomalyId, CanonicalType};

    fn anomaly(distance: f64) -> Anomaly {
        Anomaly {
            id: AnomalyId { run_index: 0, row_index: 0 },
            feature_id: None,
            raw_distance: distance,
            odometer: distance,
            corrected_distance: distance,
            joint_number: 0,
            clock_degrees: 0.0,
            canonical_type: CanonicalType::Dent,
            depth_percent: 20.0,
            length: 1.0,
            width: 1.0,
            wall_thickness: 0.375,
            is_reference_point: false,
            cleaning_flags: Vec::new(),
            has_missing_data: false,
        }
    }

    #[test]
    fn small_backward_jump_flagged_minor() {
        let config = CleanerConfig::default();
        let anomalies = vec![anomaly(100.0), anomaly(95.0)];
        let (out, report) = run(anomalies, &config);
        assert!(out[1].cleaning_flags.iter().any(|f| f.contains("distance_backward_jump_")));
        assert_eq!(report.rows_affected, 1);
    }

    #[test]
    fn large_backward_jump_flagged_major() {
        let config = CleanerConfig::default();
        let anomalies = vec![anomaly(1000.0), anomaly(50.0)];
        let (out, _) = run(anomalies, &config);
        assert!(out[1].cleaning_flags.iter().any(|f| f.contains("distance_major_backward_jump_")));
    }

    #[test]
    fn forward_progression_is_unflagged() {
        let config = CleanerConfig::default();
        let anomalies = vec![anomaly(100.0), anomaly(200.0)];
        let (out, report) = run(anomalies, &config);
        assert!(out[1].cleaning_flags.is_empty());
        assert_eq!(report.rows_affected, 0);
    }
}
