//! End-to-end engine scenarios, one per spec §8 behavior.

use approx::assert_relative_eq;

use ili_align::types::{ChainStatus, PriorityBand, RawRow, RunInput};
use ili_align::{run, EngineConfig, EngineError};

fn row(distance: f64, feature_type: &str, depth: f64, joint: i64) -> RawRow {
    RawRow {
        distance: Some(distance),
        feature_type: Some(feature_type.to_string()),
        depth_percent: Some(depth),
        joint_number: Some(joint),
        ..Default::default()
    }
}

#[test]
fn pure_translation_no_growth() {
    let config = EngineConfig::default();
    let run0 = RunInput {
        rows: vec![row(1000.0, "girth weld", 0.0, 1), row(1500.0, "dent", 25.0, 1), row(2000.0, "girth weld", 0.0, 2)],
        year: 2018,
    };
    let run1 = RunInput {
        rows: vec![row(1020.0, "girth weld", 0.0, 1), row(1520.0, "dent", 25.0, 1), row(2020.0, "girth weld", 0.0, 2)],
        year: 2020,
    };
    let result = run(vec![run0, run1], &config).unwrap();

    let dent_chain = result.chains.iter().find(|c| c.anomalies.len() == 2 && c.status != ChainStatus::New).unwrap();
    assert_eq!(dent_chain.status, ChainStatus::Matched);
    assert_relative_eq!(dent_chain.growth.depth_percent_per_year, 0.0, epsilon = 1e-6);
    assert_eq!(dent_chain.priority, PriorityBand::Monitor);
}

#[test]
fn linear_growth_projects_time_to_critical() {
    let config = EngineConfig::default();
    let run0 = RunInput {
        rows: vec![row(1000.0, "girth weld", 0.0, 1), row(1500.0, "metal loss", 60.0, 1), row(2000.0, "girth weld", 0.0, 2)],
        year: 2015,
    };
    let run1 = RunInput {
        rows: vec![row(1000.0, "girth weld", 0.0, 1), row(1500.0, "metal loss", 70.0, 1), row(2000.0, "girth weld", 0.0, 2)],
        year: 2020,
    };
    let result = run(vec![run0, run1], &config).unwrap();

    let chain = result.chains.iter().find(|c| c.anomalies.len() == 2 && c.status != ChainStatus::New).unwrap();
    assert_relative_eq!(chain.growth.depth_percent_per_year, 2.0, epsilon = 1e-6);
    assert!(chain.growth.time_to_critical_years.is_some());
}

#[test]
fn single_reference_pair_yields_zero_zones_and_pure_translation() {
    let config = EngineConfig::default();
    let run0 = RunInput {
        rows: vec![row(1000.0, "girth weld", 0.0, 1), row(1500.0, "dent", 20.0, 1)],
        year: 2017,
    };
    let run1 = RunInput {
        rows: vec![row(1020.0, "girth weld", 0.0, 1), row(1520.0, "dent", 20.0, 1)],
        year: 2021,
    };
    let result = run(vec![run0, run1], &config).unwrap();

    assert!(result.alignment_zones[0].is_empty());
    let dent_chain = result.chains.iter().find(|c| c.anomalies.len() == 2 && c.status != ChainStatus::New).unwrap();
    assert_relative_eq!(dent_chain.representative_position, 1500.0, epsilon = 1.0);
}

#[test]
fn pipe_replacement_zone_is_flagged() {
    let config = EngineConfig::default();
    let run0 = RunInput {
        rows: vec![row(1000.0, "girth weld", 0.0, 1), row(1500.0, "dent", 20.0, 1), row(2000.0, "girth weld", 0.0, 2)],
        year: 2016,
    };
    // The replaced section is longer in run1: the joint between the two
    // welds stretched well past the 20% deviation threshold.
    let run1 = RunInput {
        rows: vec![row(1000.0, "girth weld", 0.0, 1), row(1900.0, "dent", 20.0, 1), row(2800.0, "girth weld", 0.0, 2)],
        year: 2021,
    };
    let result = run(vec![run0, run1], &config).unwrap();

    assert!(!result.alignment_zones.is_empty());
    assert!(result.alignment_zones[0].iter().any(|z| z.is_pipe_replacement));
}

#[test]
fn unit_auto_conversion_normalizes_metric_run() {
    let config = EngineConfig::default();
    let run0 = RunInput {
        rows: vec![row(305.0, "girth weld", 0.0, 1), row(457.0, "dent", 20.0, 1), row(610.0, "girth weld", 0.0, 2)],
        year: 2017,
    };
    let mut run1_rows = run0.rows.clone();
    for r in &mut run1_rows {
        r.distance = r.distance.map(|d| d * 1.0);
    }
    let run1 = RunInput { rows: run1_rows, year: 2019 };
    let result = run(vec![run0, run1], &config).unwrap();

    assert!(!result.cleaning_reports.is_empty());
    assert!(result.chains.iter().any(|c| c.status == ChainStatus::Matched || c.status == ChainStatus::Uncertain));
}

#[test]
fn ambiguous_pair_is_uncertain_not_matched() {
    let config = EngineConfig::default();
    let run0 = RunInput {
        rows: vec![row(1000.0, "girth weld", 0.0, 1), row(1500.0, "dent", 20.0, 1), row(2000.0, "girth weld", 0.0, 2)],
        year: 2016,
    };
    let run1 = RunInput {
        rows: vec![row(1000.0, "girth weld", 0.0, 1), row(1545.0, "crack", 45.0, 1), row(2000.0, "girth weld", 0.0, 2)],
        year: 2021,
    };
    let result = run(vec![run0, run1], &config).unwrap();

    assert!(result.chains.iter().any(|c| matches!(c.status, ChainStatus::Uncertain | ChainStatus::New | ChainStatus::Missing)));
}

#[test]
fn critical_depth_escalates_to_immediate_priority() {
    let config = EngineConfig::default();
    let run0 = RunInput {
        rows: vec![row(1000.0, "girth weld", 0.0, 1), row(1500.0, "metal loss", 50.0, 1), row(2000.0, "girth weld", 0.0, 2)],
        year: 2019,
    };
    let run1 = RunInput {
        rows: vec![row(1000.0, "girth weld", 0.0, 1), row(1500.0, "metal loss", 85.0, 1), row(2000.0, "girth weld", 0.0, 2)],
        year: 2021,
    };
    let result = run(vec![run0, run1], &config).unwrap();

    let chain = result.chains.iter().find(|c| c.anomalies.len() == 2 && c.status != ChainStatus::New).unwrap();
    assert_eq!(chain.priority, PriorityBand::Immediate);
}

#[test]
fn fewer_than_two_runs_is_structural_error() {
    let config = EngineConfig::default();
    let err = run(vec![RunInput::default()], &config).unwrap_err();
    assert_eq!(err, EngineError::TooFewRuns { got: 1 });
}

#[test]
fn every_anomaly_lands_in_exactly_one_chain() {
    let config = EngineConfig::default();
    let run0 = RunInput {
        rows: vec![row(1000.0, "girth weld", 0.0, 1), row(1500.0, "dent", 20.0, 1), row(2000.0, "girth weld", 0.0, 2)],
        year: 2016,
    };
    let run1 = RunInput {
        rows: vec![row(1010.0, "girth weld", 0.0, 1), row(1510.0, "dent", 20.0, 1), row(2010.0, "girth weld", 0.0, 2)],
        year: 2020,
    };
    let total_rows = run0.rows.len() + run1.rows.len();
    let result = run(vec![run0, run1], &config).unwrap();
    let chained: usize = result.chains.iter().map(|c| c.anomalies.len()).sum();
    assert_eq!(chained, total_rows);
}
