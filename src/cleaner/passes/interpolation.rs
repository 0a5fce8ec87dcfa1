//! Pass 4 — missing-value interpolation (spec §4.2.4).

use crate::types::{Anomaly, PassReport};

pub fn run(mut anomalies: Vec<Anomaly>) -> (Vec<Anomaly>, PassReport) {
    let mut rows_affected = 0usize;
    let mut details = Vec::new();

    let len = anomalies.len();
    for i in 0..len {
        if i > 0 && i + 1 < len && anomalies[i].raw_distance == 0.0 {
            let prev = anomalies[i - 1].raw_distance;
            let next = anomalies[i + 1].raw_distance;
            if prev > 0.0 && next > 0.0 {
                let interpolated = (prev + next) / 2.0;
                let row_index = anomalies[i].id.row_index;
                let a = &mut anomalies[i];
                a.raw_distance = interpolated;
                a.corrected_distance = interpolated;
                a.flag("distance_interpolated");
                rows_affected += 1;
                details.push(format!("row {row_index} distance interpolated to {interpolated:.2}"));
            }
        }
    }

    for a in &mut anomalies {
        if a.odometer == 0.0 && a.raw_distance > 0.0 {
            a.odometer = a.raw_distance;
            a.flag("odometer_from_distance");
            rows_affected += 1;
            details.push(format!("row {} odometer set from distance", a.id.row_index));
        }
    }

    let report = PassReport {
        name: "missing_value_interpolation".to_string(),
        description: "Interpolates zero distances between valid neighbors; derives odometer from distance".to_string(),
        rows_affected,
        details,
    };

    (anomalies, report)
}
