//! Odometer drift series and summary statistics (C6 output).

use serde::{Deserialize, Serialize};

/// One point on a drift curve: raw distance, odometer reading, and
/// their difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftPoint {
    pub distance: f64,
    pub odometer: f64,
    pub drift: f64,
    pub label: Option<String>,
}

/// Summary statistics over one run's drift curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftSummary {
    pub run_index: usize,
    pub max_drift: f64,
    pub min_drift: f64,
    pub mean_drift: f64,
    pub total_accumulated: f64,
    pub drift_rate_per_1000ft: f64,
}

/// The two drift series plus the summary for a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDrift {
    pub run_index: usize,
    pub reference_series: Vec<DriftPoint>,
    pub full_series: Vec<DriftPoint>,
    pub summary: DriftSummary,
}
