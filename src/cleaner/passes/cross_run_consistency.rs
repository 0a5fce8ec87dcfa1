//! Pass 6 — cross-run wall-thickness consistency (spec §4.2.6).
//!
//! Skipped (and documented as such) when no other runs are provided —
//! this is a degenerate input, not an error, per spec §7.

use crate::cleaner::util::median;
use crate::config::CleanerConfig;
use crate::types::{Anomaly, PassReport};

pub fn run(
    mut anomalies: Vec<Anomaly>,
    other_runs_wt: &[f64],
    config: &CleanerConfig,
) -> (Vec<Anomaly>, PassReport) {
    if other_runs_wt.is_empty() {
        let report = PassReport {
            name: "cross_run_wt_consistency".to_string(),
            description: "Flags wall thickness deviating >30% from the cross-run median".to_string(),
            rows_affected: 0,
            details: vec!["skipped: no other runs provided".to_string()],
        };
        return (anomalies, report);
    }

    let reference_median = median(other_runs_wt);
    let mut rows_affected = 0usize;
    let mut details = Vec::new();

    if reference_median > 0.0 {
        for a in &mut anomalies {
            let deviation = (a.wall_thickness - reference_median).abs() / reference_median;
            if deviation > config.cross_run_wt_deviation_fraction {
                let pct = (deviation * 100.0).round() as i64;
                a.flag(format!("wt_cross_run_deviation_{pct}pct"));
                rows_affected += 1;
                details.push(format!(
                    "row {}: WT {:.3} deviates {pct}% from cross-run median {reference_median:.3}",
                    a.id.row_index, a.wall_thickness
                ));
            }
        }
    }

    let report = PassReport {
        name: "cross_run_wt_consistency".to_string(),
        description: "Flags wall thickness deviating >30% from the cross-run median".to_string(),
        rows_affected,
        details,
    };

    (anomalies, report)
}
