//! C12 — Engine orchestrator.
//!
//! Ties normalization (C1) through priority classification (C11)
//! together into the single pure entry point spec §6 describes. Every
//! later run is corrected directly into run 0's coordinate frame —
//! never transitively through intermediate runs — and drift is always
//! measured pre-correction, including for run 0 itself.

use rayon::prelude::*;
use tracing::{info, info_span};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::types::{AlignmentZone, Anomaly, CleaningReport, EngineResult, ReplacementReport, RunDrift, RunInput};
use crate::{chainer, distance_corrector, drift, growth, matching, normalizer, priority, reference, replacement};

/// Run the full alignment and matching pipeline over `runs.len()`
/// inspection runs. `runs[0]` is treated as the canonical coordinate
/// frame every later run is corrected into.
pub fn run(runs: Vec<RunInput>, config: &EngineConfig) -> Result<EngineResult, EngineError> {
    if runs.len() < 2 {
        return Err(EngineError::TooFewRuns { got: runs.len() });
    }

    let years: Vec<i32> = runs.iter().map(|r| r.year).collect();

    let normalized: Vec<Vec<Anomaly>> = runs
        .par_iter()
        .enumerate()
        .map(|(run_index, run)| normalizer::normalize(run_index, &run.rows, config))
        .collect();

    let cleaned_and_reports: Vec<(Vec<Anomaly>, CleaningReport)> = (0..normalized.len())
        .into_par_iter()
        .map(|run_index| {
            let other_runs: Vec<&[Anomaly]> = normalized
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != run_index)
                .map(|(_, a)| a.as_slice())
                .collect();
            crate::cleaner::clean(run_index, normalized[run_index].clone(), &other_runs, config)
        })
        .collect();

    let mut anomalies_by_run: Vec<Vec<Anomaly>> = Vec::with_capacity(cleaned_and_reports.len());
    let mut cleaning_reports = Vec::with_capacity(cleaned_and_reports.len());
    for (anomalies, report) in cleaned_and_reports {
        anomalies_by_run.push(anomalies);
        cleaning_reports.push(report);
    }

    let refs_by_run: Vec<Vec<crate::types::ReferencePoint>> = anomalies_by_run.iter().map(|a| reference::extract(a)).collect();

    let mut alignment_zones: Vec<Vec<AlignmentZone>> = Vec::with_capacity(anomalies_by_run.len() - 1);
    let mut replacement_reports: Vec<ReplacementReport> = Vec::with_capacity(anomalies_by_run.len() - 1);

    for run_index in 1..anomalies_by_run.len() {
        let span = info_span!("align_run", run_index);
        let _guard = span.enter();

        let matches = reference::match_references(&refs_by_run[0], &refs_by_run[run_index], &config.reference_matching);
        let zones = distance_corrector::build_zones(&matches, &config.zone);
        distance_corrector::correct(&mut anomalies_by_run[run_index], &zones, &matches);

        let replacement_report = replacement::detect(&refs_by_run[0], &refs_by_run[run_index], &matches, &config.replacement_detection);

        alignment_zones.push(zones);
        replacement_reports.push(replacement_report);
    }
    for a in anomalies_by_run[0].iter_mut() {
        a.corrected_distance = a.raw_distance;
    }

    let drift_points: Vec<RunDrift> = anomalies_by_run
        .iter()
        .enumerate()
        .map(|(run_index, anomalies)| drift::report(run_index, &refs_by_run[run_index], anomalies, &config.drift))
        .collect();

    let pairwise_matches: Vec<matching::MatchResult> = (0..anomalies_by_run.len() - 1)
        .into_par_iter()
        .map(|k| matching::match_anomalies(&anomalies_by_run[k], &anomalies_by_run[k + 1], &config.matching, &config.similarity))
        .collect();

    let mut chains = chainer::build_chains(&anomalies_by_run, &pairwise_matches, &config.chain_status);

    chains.par_iter_mut().for_each(|chain| {
        chain.growth = growth::compute(chain, &anomalies_by_run, &years, &config.growth);
    });
    for chain in &mut chains {
        chain.priority = priority::classify(chain, &anomalies_by_run, &config.priority);
    }

    let aligned_anomalies: Vec<Anomaly> = anomalies_by_run.into_iter().flatten().collect();

    info!(
        runs = runs.len(),
        anomalies = aligned_anomalies.len(),
        chains = chains.len(),
        "engine run complete"
    );

    Ok(EngineResult {
        aligned_anomalies,
        chains,
        alignment_zones,
        replacement_reports,
        drift_points,
        cleaning_reports,
    })
}
