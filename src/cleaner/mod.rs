//! C2 — Cleaner: a fixed, ordered seven-pass data-quality pipeline.
//!
//! Each pass is a pure transform returning a new anomaly list and a
//! [`PassReport`]; the aggregated [`CleaningReport`] carries all seven
//! pass reports plus counters. The cleaner never reorders rows beyond
//! the normalizer's initial distance sort (spec §4.2).

mod passes;
mod util;

use tracing::debug;

use crate::config::EngineConfig;
use crate::types::{Anomaly, CleaningReport};

/// Clean one run's normalized anomalies.
///
/// `other_runs` supplies every other run's *already-normalized* (not
/// necessarily cleaned) anomalies, used only by pass 6 to compute the
/// cross-run wall-thickness median.
pub fn clean(run_index: usize, anomalies: Vec<Anomaly>, other_runs: &[&[Anomaly]], config: &EngineConfig) -> (Vec<Anomaly>, CleaningReport) {
    let total_rows_in = anomalies.len();
    let mut report = CleaningReport {
        run_index,
        ..Default::default()
    };

    let (anomalies, pass1) = passes::duplicate_removal::run(anomalies);
    report.push(pass1);

    let (anomalies, pass2) = passes::unit_conversion::run(anomalies, &config.cleaner);
    report.push(pass2);

    let (anomalies, pass3) = passes::outlier_clamping::run(anomalies, &config.cleaner);
    report.push(pass3);

    let (anomalies, pass4) = passes::interpolation::run(anomalies);
    report.push(pass4);

    let (anomalies, pass5) = passes::monotonicity::run(anomalies, &config.cleaner);
    report.push(pass5);

    let other_runs_wt: Vec<f64> = other_runs
        .iter()
        .flat_map(|run| run.iter())
        .map(|a| a.wall_thickness)
        .filter(|wt| *wt > 0.0)
        .collect();
    let (anomalies, pass6) = passes::cross_run_consistency::run(anomalies, &other_runs_wt, &config.cleaner);
    report.push(pass6);

    let (anomalies, pass7) = passes::zero_dimension::run(anomalies);
    report.push(pass7);

    report.total_rows_in = total_rows_in;
    report.total_rows_out = anomalies.len();

    debug!(
        run_index,
        rows_in = report.total_rows_in,
        rows_out = report.total_rows_out,
        total_flags = report.total_flags,
        "cleaner finished"
    );

    (anomalies, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use crate::types::RawRow;

    fn row(distance: f64, feature_type: &str) -> RawRow {
        RawRow {
            distance: Some(distance),
            feature_type: Some(feature_type.to_string()),
            depth_percent: Some(20.0),
            ..Default::default()
        }
    }

    #[test]
    fn seven_passes_run_in_order() {
        let config = EngineConfig::default();
        let rows = vec![row(100.0, "dent"), row(100.0, "dent"), row(200.0, "crack")];
        let anomalies = normalize(0, &rows, &config);
        let (cleaned, report) = clean(0, anomalies, &[], &config);
        assert_eq!(report.passes.len(), 7);
        assert_eq!(report.passes[0].name, "duplicate_removal");
        assert_eq!(report.passes[6].name, "zero_dimension_check");
        assert_eq!(cleaned.len(), 2);
    }

    #[test]
    fn cleaning_is_deterministic() {
        let config = EngineConfig::default();
        let rows = vec![row(100.0, "dent"), row(0.0, "crack"), row(200.0, "dent")];
        let anomalies = normalize(0, &rows, &config);
        let (cleaned1, _) = clean(0, anomalies.clone(), &[], &config);
        let (cleaned2, _) = clean(0, anomalies, &[], &config);
        assert_eq!(cleaned1, cleaned2);
    }
}
