//! Default tunable values, one per named constant in spec.md §4.
//!
//! Centralises the magic numbers the algorithm sections spell out so
//! `EngineConfig::default()` has a single source of truth and callers
//! can see, at a glance, which literal backs which behavior.

// ============================================================================
// Normalizer (C1)
// ============================================================================

/// Wall thickness assumed when a row is missing it (inches).
pub const DEFAULT_WALL_THICKNESS_IN: f64 = 0.375;

// ============================================================================
// Cleaner (C2)
// ============================================================================

/// Pass 2: distance is treated as metres if the run's max raw distance
/// is below this (feet-equivalent) ceiling...
pub const UNIT_DISTANCE_MAX_CEILING_FT: f64 = 100_000.0;
/// ...and the median is below this ceiling.
pub const UNIT_DISTANCE_MEDIAN_CEILING_FT: f64 = 30_000.0;
/// Metres-to-feet conversion factor.
pub const METERS_TO_FEET: f64 = 3.28084;
/// Pass 2: length/width treated as millimetres if the median positive
/// value exceeds this many inches.
pub const UNIT_DIMENSION_MEDIAN_THRESHOLD_IN: f64 = 10.0;
/// Pass 2: wall thickness treated as millimetres if the median positive
/// value exceeds this many inches.
pub const UNIT_WT_MEDIAN_THRESHOLD_IN: f64 = 3.0;
/// Millimetres-to-inches conversion factor.
pub const MM_TO_INCHES: f64 = 0.0393701;

/// Pass 3: wall thickness below this is clamped up (inches).
pub const WT_CLAMP_MIN_IN: f64 = 0.05;
/// ...to this value.
pub const WT_CLAMP_MIN_REPLACEMENT_IN: f64 = 0.188;
/// Pass 3: wall thickness above this is clamped down (inches).
pub const WT_CLAMP_MAX_IN: f64 = 2.5;
/// ...to this value.
pub const WT_CLAMP_MAX_REPLACEMENT_IN: f64 = 2.0;
/// Pass 3: length/width above this are clamped (inches).
pub const DIMENSION_CLAMP_MAX_IN: f64 = 100.0;

/// Pass 5: backward jumps smaller than this are "small" (feet).
pub const MINOR_BACKWARD_JUMP_FT: f64 = 10.0;

/// Pass 6: wall thickness deviating from the cross-run median by more
/// than this fraction is flagged.
pub const CROSS_RUN_WT_DEVIATION_FRACTION: f64 = 0.30;

// ============================================================================
// Reference extractor / matcher (C3)
// ============================================================================

/// Maximum distance gap for a candidate reference-point match (feet).
pub const REFERENCE_MATCH_MAX_OFFSET_FT: f64 = 500.0;
/// Per-joint-number-mismatch penalty added to the match score.
pub const REFERENCE_MATCH_JOINT_PENALTY: f64 = 100.0;

// ============================================================================
// Replacement detector (C4)
// ============================================================================

/// Proximity threshold used to group consecutive unmatched reference
/// points into one candidate replacement span (feet).
pub const REPLACEMENT_PROXIMITY_FT: f64 = 200.0;
/// Minimum run length (consecutive unmatched points) to report a span.
pub const REPLACEMENT_MIN_RUN_LEN: usize = 2;

// ============================================================================
// Distance corrector (C5)
// ============================================================================

/// A zone's correction factor deviating from 1 by more than this
/// fraction marks the zone as a pipe replacement.
pub const ZONE_REPLACEMENT_RATIO_DEVIATION: f64 = 0.20;

// ============================================================================
// Drift reporter (C6)
// ============================================================================

/// Maximum number of points kept in the down-sampled full-run drift series.
pub const DRIFT_DOWNSAMPLE_CAP: usize = 200;
/// Drift rate is reported per this many feet of run length.
pub const DRIFT_RATE_PER_FT: f64 = 1_000.0;

// ============================================================================
// Similarity scorer (C7)
// ============================================================================

pub const SIMILARITY_WEIGHT_DISTANCE: f64 = 0.40;
pub const SIMILARITY_WEIGHT_DIMENSIONAL: f64 = 0.30;
pub const SIMILARITY_WEIGHT_CLOCK: f64 = 0.20;
pub const SIMILARITY_WEIGHT_FEATURE_TYPE: f64 = 0.10;
/// Exponential decay length scale for the distance component (feet).
pub const SIMILARITY_DISTANCE_DECAY_FT: f64 = 50.0;
/// Feature-type component score for a "compatible" (not equal) pair.
pub const SIMILARITY_FEATURE_TYPE_COMPATIBLE: f64 = 0.5;

// ============================================================================
// Bipartite matcher (C8)
// ============================================================================

/// Candidate filter: max corrected-distance gap (feet).
pub const MATCH_CANDIDATE_DISTANCE_FT: f64 = 200.0;
/// Candidate filter: minimum similarity total.
pub const MATCH_CANDIDATE_MIN_SIMILARITY: f64 = 0.20;
/// Acceptance threshold: minimum similarity total for an assignment to
/// become a confirmed match.
pub const MATCH_ACCEPTANCE_MIN_SIMILARITY: f64 = 0.40;
/// Cost matrix sentinel for non-candidate cells.
pub const MATCH_SENTINEL_COST: f64 = 1000.0;

// ============================================================================
// Chain status thresholds (spec §3 invariant)
// ============================================================================

pub const CHAIN_MATCHED_MIN_CONFIDENCE: f64 = 0.70;
pub const CHAIN_UNCERTAIN_MIN_CONFIDENCE: f64 = 0.40;

// ============================================================================
// Growth analyzer (C10)
// ============================================================================

/// Depth percent at which a feature is considered already critical.
pub const GROWTH_CRITICAL_DEPTH_PERCENT: f64 = 80.0;

// ============================================================================
// Priority classifier (C11)
// ============================================================================

pub const PRIORITY_IMMEDIATE_DEPTH: f64 = 80.0;
pub const PRIORITY_IMMEDIATE_TTC_YEARS: f64 = 1.0;
pub const PRIORITY_IMMEDIATE_GROWTH: f64 = 8.0;

pub const PRIORITY_60DAY_DEPTH: f64 = 60.0;
pub const PRIORITY_60DAY_GROWTH: f64 = 5.0;
pub const PRIORITY_60DAY_TTC_YEARS: f64 = 3.0;

pub const PRIORITY_180DAY_DEPTH: f64 = 40.0;
pub const PRIORITY_180DAY_GROWTH: f64 = 2.0;

pub const PRIORITY_SCHEDULED_DEPTH: f64 = 20.0;
pub const PRIORITY_SCHEDULED_GROWTH: f64 = 0.5;
