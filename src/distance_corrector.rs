//! C5 — Distance corrector.
//!
//! Builds a piecewise-linear map from a later run's raw-distance axis
//! into run 0's coordinate frame from a sorted list of matched
//! reference pairs, then applies it to every anomaly in that run.

use tracing::debug;

use crate::config::ZoneConfig;
use crate::types::{AlignmentZone, Anomaly, MatchedReference};

/// Build the ordered sequence of alignment zones from matched reference
/// pairs, sorted by the later run's raw distance. Requires at least two
/// matched pairs; fewer yields no zones (callers fall back to identity).
pub fn build_zones(matches: &[MatchedReference], config: &ZoneConfig) -> Vec<AlignmentZone> {
    if matches.len() < 2 {
        return Vec::new();
    }
    let mut sorted = matches.to_vec();
    sorted.sort_by(|a, b| a.ref_b.distance.partial_cmp(&b.ref_b.distance).unwrap_or(std::cmp::Ordering::Equal));

    sorted
        .windows(2)
        .map(|pair| AlignmentZone::from_pair(&pair[0], &pair[1], config.replacement_ratio_deviation))
        .collect()
}

/// Correct every anomaly's `corrected_distance` in place, using:
/// - the interpolated map when the raw distance falls inside a zone,
/// - a flat extrapolation using the nearest zone's correction factor
///   when it falls before the first or after the last zone,
/// - a flat translation by the single matched pair's `distance_offset`
///   when there is exactly one matched reference pair (zero zones, but
///   not zero information),
/// - the identity map when there are no matched reference pairs at all
///   (run 0, or a run with no reference matches).
pub fn correct(anomalies: &mut [Anomaly], zones: &[AlignmentZone], matches: &[MatchedReference]) {
    if zones.is_empty() {
        match matches {
            [single] => {
                for a in anomalies.iter_mut() {
                    a.corrected_distance = a.raw_distance - single.distance_offset;
                }
                debug!(anomalies = anomalies.len(), "distance correction applied (single-pair translation)");
            }
            _ => {
                for a in anomalies.iter_mut() {
                    a.corrected_distance = a.raw_distance;
                }
            }
        }
        return;
    }

    let first = zones.first().unwrap();
    let last = zones.last().unwrap();

    for a in anomalies.iter_mut() {
        let raw = a.raw_distance;
        a.corrected_distance = if let Some(mapped) = zones.iter().find_map(|z| z.map(raw)) {
            mapped
        } else if raw < first.start_raw {
            first.start_canon + (raw - first.start_raw) * first.correction_factor
        } else {
            last.end_canon + (raw - last.end_raw) * last.correction_factor
        };
    }

    debug!(zones = zones.len(), anomalies = anomalies.len(), "distance correction applied");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnomalyId, CanonicalType, ReferencePoint};

    fn point(distance: f64, odometer: f64) -> ReferencePoint {
        ReferencePoint {
            id: AnomalyId { run_index: 1, row_index: 0 },
            distance,
            odometer,
            joint_number: 1,
            canonical_type: CanonicalType::GirthWeld,
            run_index: 1,
        }
    }

    fn anomaly(distance: f64) -> Anomaly {
        Anomaly {
            id: AnomalyId { run_index: 1, row_index: 0 },
            feature_id: None,
            raw_distance: distance,
            odometer: distance,
            corrected_distance: 0.0,
            joint_number: 0,
            clock_degrees: 0.0,
            canonical_type: CanonicalType::Dent,
            depth_percent: 20.0,
            length: 1.0,
            width: 1.0,
            wall_thickness: 0.375,
            is_reference_point: false,
            cleaning_flags: Vec::new(),
            has_missing_data: false,
        }
    }

    #[test]
    fn no_zones_is_identity() {
        let mut anomalies = vec![anomaly(100.0), anomaly(200.0)];
        correct(&mut anomalies, &[], &[]);
        assert_eq!(anomalies[0].corrected_distance, 100.0);
        assert_eq!(anomalies[1].corrected_distance, 200.0);
    }

    #[test]
    fn single_matched_pair_translates_by_its_offset() {
        let config = ZoneConfig::default();
        let m1 = MatchedReference::new(point(1000.0, 1000.0), point(1010.0, 1010.0));
        let matches = vec![m1];
        let zones = build_zones(&matches, &config);
        assert!(zones.is_empty());
        let mut anomalies = vec![anomaly(1510.0)];
        correct(&mut anomalies, &zones, &matches);
        assert!((anomalies[0].corrected_distance - 1500.0).abs() < 1e-6);
    }

    #[test]
    fn pure_translation_shifts_every_point_equally() {
        let config = ZoneConfig::default();
        let m1 = MatchedReference::new(point(1000.0, 1000.0), point(1010.0, 1010.0));
        let m2 = MatchedReference::new(point(2000.0, 2000.0), point(2010.0, 2010.0));
        let matches = vec![m1, m2];
        let zones = build_zones(&matches, &config);
        let mut anomalies = vec![anomaly(1510.0)];
        correct(&mut anomalies, &zones, &matches);
        assert!((anomalies[0].corrected_distance - 1500.0).abs() < 1e-6);
    }

    #[test]
    fn extrapolates_before_first_and_after_last_zone() {
        let config = ZoneConfig::default();
        let m1 = MatchedReference::new(point(1000.0, 1000.0), point(1010.0, 1010.0));
        let m2 = MatchedReference::new(point(2000.0, 2000.0), point(2010.0, 2010.0));
        let matches = vec![m1, m2];
        let zones = build_zones(&matches, &config);
        let mut anomalies = vec![anomaly(500.0), anomaly(2510.0)];
        correct(&mut anomalies, &zones, &matches);
        assert!((anomalies[0].corrected_distance - 490.0).abs() < 1e-6);
        assert!((anomalies[1].corrected_distance - 2500.0).abs() < 1e-6);
    }

    #[test]
    fn fewer_than_two_matches_yields_no_zones() {
        let config = ZoneConfig::default();
        let m1 = MatchedReference::new(point(1000.0, 1000.0), point(1010.0, 1010.0));
        assert!(build_zones(&[m1], &config).is_empty());
    }
}
