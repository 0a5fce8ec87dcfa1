//! Cross-run anomaly chains and the priority bands assigned to them.

use serde::{Deserialize, Serialize};

use super::{AnomalyId, SimilarityBreakdown};

/// Status of an anomaly chain, constrained by confidence per spec §3:
/// `matched` implies confidence >= 0.70; `uncertain` implies
/// `0.40 <= confidence < 0.70`; `new`/`missing` always carry confidence 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainStatus {
    Matched,
    Uncertain,
    New,
    Missing,
}

/// Regulatory priority band, ordered least to most urgent for use with
/// derived `Ord`/`PartialOrd` in diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum PriorityBand {
    Monitor,
    Scheduled,
    #[serde(rename = "180-DAY")]
    OneEightyDay,
    #[serde(rename = "60-DAY")]
    SixtyDay,
    Immediate,
}

/// Per-metric growth rates and projected time-to-critical for a chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthRates {
    pub depth_percent_per_year: f64,
    pub length_per_year: f64,
    pub width_per_year: f64,
    pub time_to_critical_years: Option<f64>,
}

/// An ordered list of 1..=K anomalies (one per participating run)
/// representing a single physical feature tracked across inspections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyChain {
    pub anomalies: Vec<AnomalyId>,
    pub run_indices: Vec<usize>,
    pub confidence: f64,
    pub status: ChainStatus,
    pub last_similarity: Option<SimilarityBreakdown>,
    pub growth: GrowthRates,
    pub priority: PriorityBand,
    /// The latest anomaly's corrected distance, used for reporting position.
    pub representative_position: f64,
}
