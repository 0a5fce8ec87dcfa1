//! The engine's final output (spec §6).

use serde::{Deserialize, Serialize};

use super::{AlignmentZone, Anomaly, AnomalyChain, CleaningReport, ReplacementReport, RunDrift};

/// Output of a full engine run: every cleaned anomaly with its
/// corrected distance assigned, the cross-run match chains, the
/// alignment zones built per run pair, per-run drift series, and the
/// per-run cleaning audit reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineResult {
    pub aligned_anomalies: Vec<Anomaly>,
    pub chains: Vec<AnomalyChain>,
    /// One `Vec<AlignmentZone>` per processed run pair, in run order
    /// (pair `(0, i)` at index `i - 1`).
    pub alignment_zones: Vec<Vec<AlignmentZone>>,
    /// One advisory [`ReplacementReport`] per processed run pair, same
    /// indexing as `alignment_zones`.
    pub replacement_reports: Vec<ReplacementReport>,
    pub drift_points: Vec<RunDrift>,
    pub cleaning_reports: Vec<CleaningReport>,
}
