//! Advisory output of the replacement detector (C4).

use serde::{Deserialize, Serialize};

/// A run of consecutive unmatched reference points spanning a contiguous
/// raw-distance interval, reported as a candidate cut-out ("removed",
/// found in the earlier run) or cut-in ("added", found in the later run)
/// pipe section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplacementSpan {
    pub start_distance: f64,
    pub end_distance: f64,
    pub point_count: usize,
}

/// Advisory report for one run pair: candidate removed sections (from
/// the earlier run's unmatched references) and added sections (from the
/// later run's). Does not alter correction; used only for logging and
/// for the `is_pipe_replacement` flag on alignment zones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplacementReport {
    pub removed: Vec<ReplacementSpan>,
    pub added: Vec<ReplacementSpan>,
}
