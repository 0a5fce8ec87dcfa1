//! Pass 1 — duplicate removal (spec §4.2.1).
//!
//! Composite key: `(round(distance,2), round(clock_degrees,0),
//! canonical_type, round(depth_percent,1))`. First occurrence wins;
//! relative order of survivors is preserved.

use std::collections::HashSet;

use crate::types::{Anomaly, CanonicalType, PassReport};

type DupKey = (i64, i64, CanonicalType, i64);

fn key(anomaly: &Anomaly) -> DupKey {
    (
        (anomaly.raw_distance * 100.0).round() as i64,
        anomaly.clock_degrees.round() as i64,
        anomaly.canonical_type,
        (anomaly.depth_percent * 10.0).round() as i64,
    )
}

pub fn run(anomalies: Vec<Anomaly>) -> (Vec<Anomaly>, PassReport) {
    let mut seen: HashSet<DupKey> = HashSet::new();
    let mut kept = Vec::with_capacity(anomalies.len());
    let mut removed = 0usize;
    let mut details = Vec::new();

    for anomaly in anomalies {
        let k = key(&anomaly);
        if seen.insert(k) {
            kept.push(anomaly);
        } else {
            removed += 1;
            details.push(format!(
                "removed duplicate at {:.2}ft (row {})",
                k.0 as f64 / 100.0,
                anomaly.id.row_index
            ));
        }
    }

    let report = PassReport {
        name: "duplicate_removal".to_string(),
        description: "Removes anomalies sharing (distance, clock, type, depth) with an earlier row".to_string(),
        rows_affected: removed,
        details,
    };

    (kept, report)
}
