//! C6 — Drift reporter.
//!
//! Drift is the gap between a run's raw logged distance and its
//! odometer reading, measured *before* distance correction — run 0
//! included — so the report reflects what the tool actually recorded,
//! not what alignment later reconciled it to.

use tracing::debug;

use crate::config::DriftConfig;
use crate::types::{Anomaly, DriftPoint, DriftSummary, RunDrift};

/// Build the drift report for one run.
///
/// `reference_distances` is the run's reference points, already
/// extracted by [`crate::reference::extract`]; `anomalies` is the
/// run's full (cleaned) anomaly table, used for the down-sampled
/// full-run series.
pub fn report(run_index: usize, reference_points: &[crate::types::ReferencePoint], anomalies: &[Anomaly], config: &DriftConfig) -> RunDrift {
    let reference_series: Vec<DriftPoint> = reference_points
        .iter()
        .map(|r| DriftPoint {
            distance: r.distance,
            odometer: r.odometer,
            drift: r.distance - r.odometer,
            label: Some(format!("{:?}", r.canonical_type)),
        })
        .collect();

    let stride = if anomalies.is_empty() { 1 } else { (anomalies.len() / config.downsample_cap).max(1) };
    let full_series: Vec<DriftPoint> = anomalies
        .iter()
        .step_by(stride)
        .map(|a| DriftPoint {
            distance: a.raw_distance,
            odometer: a.odometer,
            drift: a.raw_distance - a.odometer,
            label: None,
        })
        .collect();

    let summary = summarize(run_index, &full_series, config);

    debug!(run_index, reference_points = reference_series.len(), full_points = full_series.len(), "drift report built");

    RunDrift {
        run_index,
        reference_series,
        full_series,
        summary,
    }
}

fn summarize(run_index: usize, series: &[DriftPoint], config: &DriftConfig) -> DriftSummary {
    if series.is_empty() {
        return DriftSummary {
            run_index,
            max_drift: 0.0,
            min_drift: 0.0,
            mean_drift: 0.0,
            total_accumulated: 0.0,
            drift_rate_per_1000ft: 0.0,
        };
    }

    let max_drift = series.iter().map(|p| p.drift).fold(f64::MIN, f64::max);
    let min_drift = series.iter().map(|p| p.drift).fold(f64::MAX, f64::min);
    let mean_drift = series.iter().map(|p| p.drift).sum::<f64>() / series.len() as f64;

    let first = series.first().unwrap();
    let last = series.last().unwrap();
    let total_accumulated = last.drift - first.drift;
    let distance_span = last.distance - first.distance;
    let drift_rate_per_1000ft = if distance_span.abs() > f64::EPSILON {
        total_accumulated / distance_span * config.rate_per_ft
    } else {
        0.0
    };

    DriftSummary {
        run_index,
        max_drift,
        min_drift,
        mean_drift,
        total_accumulated,
        drift_rate_per_1000ft,
    }
}
