//! C1 — Normalizer: turns vendor-column-mapped raw rows into canonical
//! `Anomaly` records with typed, bounded fields.
//!
//! Normalization never fails: a row with no recoverable data is still
//! emitted (with `has_missing_data` set) so downstream cleaning and
//! matching can see it, per spec §4.1.

use crate::config::EngineConfig;
use crate::types::{Anomaly, AnomalyId, CanonicalType, ClockValue, RawRow};

/// Normalize one run's raw rows into sorted, canonical `Anomaly` records.
///
/// Output is sorted by `raw_distance` ascending; `row_index` in the
/// resulting `AnomalyId` refers to the row's position in `rows`, not
/// its position in the sorted output.
pub fn normalize(run_index: usize, rows: &[RawRow], config: &EngineConfig) -> Vec<Anomaly> {
    let mut anomalies: Vec<Anomaly> = rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| normalize_row(run_index, row_index, row, config))
        .collect();

    anomalies.sort_by(|a, b| {
        a.raw_distance
            .partial_cmp(&b.raw_distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    anomalies
}

fn normalize_row(run_index: usize, row_index: usize, row: &RawRow, config: &EngineConfig) -> Anomaly {
    let mut has_missing_data = false;

    let distance = row.distance.unwrap_or_else(|| {
        has_missing_data = true;
        0.0
    });
    let odometer = row.odometer.unwrap_or(distance);

    let clock_degrees = match &row.clock_position {
        Some(value) => parse_clock(value),
        None => {
            has_missing_data = true;
            0.0
        }
    };

    let canonical_type = match &row.feature_type {
        Some(raw) if !raw.trim().is_empty() => CanonicalType::from_raw(raw),
        _ => {
            has_missing_data = true;
            CanonicalType::Unknown
        }
    };

    let depth_percent = match row.depth_percent {
        Some(d) => d.clamp(0.0, 100.0),
        None => {
            has_missing_data = true;
            0.0
        }
    };

    let length = row.length.map(f64::abs).unwrap_or(0.0);
    let width = row.width.map(f64::abs).unwrap_or(0.0);
    let wall_thickness = row
        .wall_thickness
        .filter(|wt| *wt > 0.0)
        .unwrap_or(config.default_wall_thickness_in.0);

    let joint_number = row
        .joint_number
        .and_then(|j| u32::try_from(j).ok())
        .unwrap_or(0);

    let is_reference_point = canonical_type.is_reference_point();

    Anomaly {
        id: AnomalyId { run_index, row_index },
        feature_id: row.feature_id.clone(),
        raw_distance: distance,
        odometer,
        corrected_distance: distance,
        joint_number,
        clock_degrees,
        canonical_type,
        depth_percent,
        length,
        width,
        wall_thickness,
        is_reference_point,
        cleaning_flags: Vec::new(),
        has_missing_data,
    }
}

/// Parse a clock position into degrees per spec §4.1:
/// - `"H:MM"` text: hours in `0..=12`, minutes `0..60`.
/// - A bare number `<= 12` is interpreted as decimal hours.
/// - A bare number `> 12` is interpreted as degrees directly.
fn parse_clock(value: &ClockValue) -> f64 {
    match value {
        ClockValue::Text(text) => {
            if let Some((h, m)) = text.split_once(':') {
                let hours: f64 = h.trim().parse().unwrap_or(0.0);
                let minutes: f64 = m.trim().parse().unwrap_or(0.0);
                hours_minutes_to_degrees(hours, minutes)
            } else if let Ok(number) = text.trim().parse::<f64>() {
                number_to_degrees(number)
            } else {
                0.0
            }
        }
        ClockValue::Number(number) => number_to_degrees(*number),
    }
}

fn number_to_degrees(number: f64) -> f64 {
    if number <= 12.0 {
        let hours = number.trunc();
        let minutes = (number.fract()) * 60.0;
        hours_minutes_to_degrees(hours, minutes)
    } else {
        number.rem_euclid(360.0)
    }
}

fn hours_minutes_to_degrees(hours: f64, minutes: f64) -> f64 {
    (((hours.rem_euclid(12.0)) * 30.0) + minutes * 0.5).rem_euclid(360.0)
}
