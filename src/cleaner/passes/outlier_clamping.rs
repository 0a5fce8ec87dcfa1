//! Pass 3 — outlier clamping (spec §4.2.3).

use crate::config::CleanerConfig;
use crate::types::{Anomaly, PassReport};

pub fn run(mut anomalies: Vec<Anomaly>, config: &CleanerConfig) -> (Vec<Anomaly>, PassReport) {
    let mut rows_affected = 0usize;
    let mut details = Vec::new();

    for a in &mut anomalies {
        let mut touched = false;

        let clamped_depth = a.depth_percent.clamp(0.0, 100.0);
        if clamped_depth != a.depth_percent {
            a.flag(format!("depth_clamped_{:.1}_to_{:.1}", a.depth_percent, clamped_depth));
            a.depth_percent = clamped_depth;
            touched = true;
        }

        if a.wall_thickness < config.wt_clamp_min_in {
            a.flag(format!("wt_clamped_low_{:.3}_to_{:.3}", a.wall_thickness, config.wt_clamp_min_replacement_in));
            a.wall_thickness = config.wt_clamp_min_replacement_in;
            touched = true;
        } else if a.wall_thickness > config.wt_clamp_max_in {
            a.flag(format!("wt_clamped_high_{:.3}_to_{:.3}", a.wall_thickness, config.wt_clamp_max_replacement_in));
            a.wall_thickness = config.wt_clamp_max_replacement_in;
            touched = true;
        }

        if a.length > config.dimension_clamp_max_in {
            a.flag(format!("length_clamped_{:.1}_to_{:.1}", a.length, config.dimension_clamp_max_in));
            a.length = config.dimension_clamp_max_in;
            touched = true;
        }

        if a.width > config.dimension_clamp_max_in {
            a.flag(format!("width_clamped_{:.1}_to_{:.1}", a.width, config.dimension_clamp_max_in));
            a.width = config.dimension_clamp_max_in;
            touched = true;
        }

        if touched {
            rows_affected += 1;
            details.push(format!("row {} clamped", a.id.row_index));
        }
    }

    let report = PassReport {
        name: "outlier_clamping".to_string(),
        description: "Clamps depth, wall thickness, length, and width to plausible ranges".to_string(),
        rows_affected,
        details,
    };

    (anomalies, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnomalyId, CanonicalType};

    fn anomaly(wt: f64, length: f64, width: f64) -> Anomaly {
        Anomaly {
            id: AnomalyId { run_index: 0, row_index: 0 },
            feature_id: None,
            raw_distance: 100.0,
            odometer: 100.0,
            corrected_distance: 100.0,
            joint_number: 0,
            clock_degrees: 0.0,
            canonical_type: CanonicalType::Dent,
            depth_percent: 20.0,
            length,
            width,
            wall_thickness: wt,
            is_reference_point: false,
            cleaning_flags: Vec::new(),
            has_missing_data: false,
        }
    }

    #[test]
    fn clamps_low_and_high_wt() {
        let config = CleanerConfig::default();
        let anomalies = vec![anomaly(0.01, 5.0, 5.0), anomaly(3.0, 5.0, 5.0)];
        let (out, report) = run(anomalies, &config);
        assert_eq!(out[0].wall_thickness, 0.188);
        assert_eq!(out[1].wall_thickness, 2.0);
        assert_eq!(report.rows_affected, 2);
    }

    #[test]
    fn clamps_length_and_width() {
        let config = CleanerConfig::default();
        let anomalies = vec![anomaly(0.375, 150.0, 200.0)];
        let (out, _) = run(anomalies, &config);
        assert_eq!(out[0].length, 100.0);
        assert_eq!(out[0].width, 100.0);
    }

    #[test]
    fn leaves_plausible_values_untouched() {
        let config = CleanerConfig::default();
        let anomalies = vec![anomaly(0.375, 5.0, 5.0)];
        let (out, report) = run(anomalies, &config);
        assert_eq!(out[0].wall_thickness, 0.375);
        assert_eq!(report.rows_affected, 0);
    }
}
