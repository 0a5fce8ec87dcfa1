//! Pass 2 — heuristic unit detection and conversion (spec §4.2.2).
//!
//! Applied conditionally to the whole run: distance metres→feet,
//! length/width mm→in, wall thickness mm→in. Each conversion that
//! fires stamps every row in the run with its flag.

use crate::cleaner::util::median;
use crate::config::CleanerConfig;
use crate::types::{Anomaly, PassReport};

pub fn run(mut anomalies: Vec<Anomaly>, config: &CleanerConfig) -> (Vec<Anomaly>, PassReport) {
    let mut details = Vec::new();
    let mut rows_affected = 0usize;

    let max_distance = anomalies
        .iter()
        .map(|a| a.raw_distance)
        .fold(f64::MIN, f64::max);
    let distances: Vec<f64> = anomalies.iter().map(|a| a.raw_distance).collect();
    let median_distance = median(&distances);

    if !anomalies.is_empty()
        && max_distance < config.unit_distance_max_ceiling_ft
        && median_distance < config.unit_distance_median_ceiling_ft
    {
        for a in &mut anomalies {
            a.raw_distance *= config.meters_to_feet;
            a.odometer *= config.meters_to_feet;
            a.corrected_distance *= config.meters_to_feet;
            a.flag("distance_converted_m_to_ft");
        }
        rows_affected += anomalies.len();
        details.push(format!(
            "distance: max {max_distance:.1}, median {median_distance:.1} -> interpreted as metres, converted to feet"
        ));
    }

    let positive_lengths: Vec<f64> = anomalies.iter().map(|a| a.length).filter(|l| *l > 0.0).collect();
    let median_length = median(&positive_lengths);
    if !positive_lengths.is_empty() && median_length > config.unit_dimension_median_threshold_in {
        for a in &mut anomalies {
            a.length *= config.mm_to_inches;
            a.width *= config.mm_to_inches;
            a.flag("dimensions_converted_mm_to_in");
        }
        rows_affected += anomalies.len();
        details.push(format!(
            "length/width: median positive length {median_length:.2} -> interpreted as mm, converted to in"
        ));
    }

    let positive_wt: Vec<f64> = anomalies.iter().map(|a| a.wall_thickness).filter(|w| *w > 0.0).collect();
    let median_wt = median(&positive_wt);
    if !positive_wt.is_empty() && median_wt > config.unit_wt_median_threshold_in {
        for a in &mut anomalies {
            a.wall_thickness *= config.mm_to_inches;
            a.flag("wt_converted_mm_to_in");
        }
        rows_affected += anomalies.len();
        details.push(format!(
            "wall_thickness: median positive WT {median_wt:.2} -> interpreted as mm, converted to in"
        ));
    }

    let report = PassReport {
        name: "unit_conversion".to_string(),
        description: "Heuristically detects metric units and converts to feet/inches".to_string(),
        rows_affected,
        details,
    };

    (anomalies, report)
}
