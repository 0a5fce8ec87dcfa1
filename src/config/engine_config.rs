//! `EngineConfig`: every tunable named in spec.md §4, grouped by the
//! component that owns it. Unlike the teacher's `WellConfig`, there is
//! no TOML/env loading here — the engine's external-interface contract
//! (spec §6) keeps files and environment variables out of the core, so
//! a caller builds an `EngineConfig` in memory, typically
//! `EngineConfig::default()`.

use serde::{Deserialize, Serialize};

use super::defaults::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CleanerConfig {
    pub unit_distance_max_ceiling_ft: f64,
    pub unit_distance_median_ceiling_ft: f64,
    pub meters_to_feet: f64,
    pub unit_dimension_median_threshold_in: f64,
    pub unit_wt_median_threshold_in: f64,
    pub mm_to_inches: f64,
    pub wt_clamp_min_in: f64,
    pub wt_clamp_min_replacement_in: f64,
    pub wt_clamp_max_in: f64,
    pub wt_clamp_max_replacement_in: f64,
    pub dimension_clamp_max_in: f64,
    pub minor_backward_jump_ft: f64,
    pub cross_run_wt_deviation_fraction: f64,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            unit_distance_max_ceiling_ft: UNIT_DISTANCE_MAX_CEILING_FT,
            unit_distance_median_ceiling_ft: UNIT_DISTANCE_MEDIAN_CEILING_FT,
            meters_to_feet: METERS_TO_FEET,
            unit_dimension_median_threshold_in: UNIT_DIMENSION_MEDIAN_THRESHOLD_IN,
            unit_wt_median_threshold_in: UNIT_WT_MEDIAN_THRESHOLD_IN,
            mm_to_inches: MM_TO_INCHES,
            wt_clamp_min_in: WT_CLAMP_MIN_IN,
            wt_clamp_min_replacement_in: WT_CLAMP_MIN_REPLACEMENT_IN,
            wt_clamp_max_in: WT_CLAMP_MAX_IN,
            wt_clamp_max_replacement_in: WT_CLAMP_MAX_REPLACEMENT_IN,
            dimension_clamp_max_in: DIMENSION_CLAMP_MAX_IN,
            minor_backward_jump_ft: MINOR_BACKWARD_JUMP_FT,
            cross_run_wt_deviation_fraction: CROSS_RUN_WT_DEVIATION_FRACTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMatchingConfig {
    pub max_offset_ft: f64,
    pub joint_mismatch_penalty: f64,
}

impl Default for ReferenceMatchingConfig {
    fn default() -> Self {
        Self {
            max_offset_ft: REFERENCE_MATCH_MAX_OFFSET_FT,
            joint_mismatch_penalty: REFERENCE_MATCH_JOINT_PENALTY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplacementDetectionConfig {
    pub proximity_ft: f64,
    pub min_run_len: usize,
}

impl Default for ReplacementDetectionConfig {
    fn default() -> Self {
        Self {
            proximity_ft: REPLACEMENT_PROXIMITY_FT,
            min_run_len: REPLACEMENT_MIN_RUN_LEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub replacement_ratio_deviation: f64,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            replacement_ratio_deviation: ZONE_REPLACEMENT_RATIO_DEVIATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftConfig {
    pub downsample_cap: usize,
    pub rate_per_ft: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            downsample_cap: DRIFT_DOWNSAMPLE_CAP,
            rate_per_ft: DRIFT_RATE_PER_FT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    pub weight_distance: f64,
    pub weight_dimensional: f64,
    pub weight_clock: f64,
    pub weight_feature_type: f64,
    pub distance_decay_ft: f64,
    pub feature_type_compatible_score: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            weight_distance: SIMILARITY_WEIGHT_DISTANCE,
            weight_dimensional: SIMILARITY_WEIGHT_DIMENSIONAL,
            weight_clock: SIMILARITY_WEIGHT_CLOCK,
            weight_feature_type: SIMILARITY_WEIGHT_FEATURE_TYPE,
            distance_decay_ft: SIMILARITY_DISTANCE_DECAY_FT,
            feature_type_compatible_score: SIMILARITY_FEATURE_TYPE_COMPATIBLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub candidate_distance_ft: f64,
    pub candidate_min_similarity: f64,
    pub acceptance_min_similarity: f64,
    pub sentinel_cost: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            candidate_distance_ft: MATCH_CANDIDATE_DISTANCE_FT,
            candidate_min_similarity: MATCH_CANDIDATE_MIN_SIMILARITY,
            acceptance_min_similarity: MATCH_ACCEPTANCE_MIN_SIMILARITY,
            sentinel_cost: MATCH_SENTINEL_COST,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainStatusConfig {
    pub matched_min_confidence: f64,
    pub uncertain_min_confidence: f64,
}

impl Default for ChainStatusConfig {
    fn default() -> Self {
        Self {
            matched_min_confidence: CHAIN_MATCHED_MIN_CONFIDENCE,
            uncertain_min_confidence: CHAIN_UNCERTAIN_MIN_CONFIDENCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    pub critical_depth_percent: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            critical_depth_percent: GROWTH_CRITICAL_DEPTH_PERCENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityConfig {
    pub immediate_depth: f64,
    pub immediate_ttc_years: f64,
    pub immediate_growth: f64,
    pub sixty_day_depth: f64,
    pub sixty_day_growth: f64,
    pub sixty_day_ttc_years: f64,
    pub one_eighty_day_depth: f64,
    pub one_eighty_day_growth: f64,
    pub scheduled_depth: f64,
    pub scheduled_growth: f64,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            immediate_depth: PRIORITY_IMMEDIATE_DEPTH,
            immediate_ttc_years: PRIORITY_IMMEDIATE_TTC_YEARS,
            immediate_growth: PRIORITY_IMMEDIATE_GROWTH,
            sixty_day_depth: PRIORITY_60DAY_DEPTH,
            sixty_day_growth: PRIORITY_60DAY_GROWTH,
            sixty_day_ttc_years: PRIORITY_60DAY_TTC_YEARS,
            one_eighty_day_depth: PRIORITY_180DAY_DEPTH,
            one_eighty_day_growth: PRIORITY_180DAY_GROWTH,
            scheduled_depth: PRIORITY_SCHEDULED_DEPTH,
            scheduled_growth: PRIORITY_SCHEDULED_GROWTH,
        }
    }
}

/// Top-level configuration for a single engine run, grouping every
/// tunable by the component that owns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub default_wall_thickness_in: DefaultWallThickness,
    pub cleaner: CleanerConfig,
    pub reference_matching: ReferenceMatchingConfig,
    pub replacement_detection: ReplacementDetectionConfig,
    pub zone: ZoneConfig,
    pub drift: DriftConfig,
    pub similarity: SimilarityConfig,
    pub matching: MatchingConfig,
    pub chain_status: ChainStatusConfig,
    pub growth: GrowthConfig,
    pub priority: PriorityConfig,
}

/// A single `f64` newtype so `EngineConfig` can derive `Default`
/// uniformly across scalar and struct fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultWallThickness(pub f64);

impl Default for DefaultWallThickness {
    fn default() -> Self {
        Self(DEFAULT_WALL_THICKNESS_IN)
    }
}

/// A non-fatal warning about an implausible config override, in the
/// style of the teacher's `config::validation::ValidationWarning` —
/// informational only, never a construction failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    pub field: &'static str,
    pub message: String,
}

impl EngineConfig {
    /// Range-check tunables that must stay positive/bounded for the
    /// algorithm's invariants to hold. Returns warnings rather than an
    /// error — config problems are not part of spec.md §7's structural
    /// error class.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let mut check_positive = |field: &'static str, value: f64| {
            if value <= 0.0 {
                warnings.push(ConfigWarning {
                    field,
                    message: format!("expected a positive value, got {value}"),
                });
            }
        };

        check_positive("reference_matching.max_offset_ft", self.reference_matching.max_offset_ft);
        check_positive("replacement_detection.proximity_ft", self.replacement_detection.proximity_ft);
        check_positive("similarity.distance_decay_ft", self.similarity.distance_decay_ft);
        check_positive("matching.candidate_distance_ft", self.matching.candidate_distance_ft);
        check_positive("drift.rate_per_ft", self.drift.rate_per_ft);

        let weight_sum = self.similarity.weight_distance
            + self.similarity.weight_dimensional
            + self.similarity.weight_clock
            + self.similarity.weight_feature_type;
        if (weight_sum - 1.0).abs() > 1e-6 {
            warnings.push(ConfigWarning {
                field: "similarity.weights",
                message: format!("similarity weights sum to {weight_sum}, expected 1.0"),
            });
        }

        if self.chain_status.uncertain_min_confidence > self.chain_status.matched_min_confidence {
            warnings.push(ConfigWarning {
                field: "chain_status",
                message: "uncertain_min_confidence must not exceed matched_min_confidence"
                    .to_string(),
            });
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_warnings() {
        assert!(EngineConfig::default().validate().is_empty());
    }

    #[test]
    fn negative_tolerance_is_flagged_not_rejected() {
        let mut config = EngineConfig::default();
        config.reference_matching.max_offset_ft = -1.0;
        let warnings = config.validate();
        assert!(warnings.iter().any(|w| w.field == "reference_matching.max_offset_ft"));
    }
}
