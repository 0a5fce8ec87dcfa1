//! C9 — Chain composer.
//!
//! Threads consecutive pairwise match results (C8) into full anomaly
//! chains spanning however many runs a feature was tracked across. A
//! chain's status and confidence are fixed by the first successful
//! pairwise match it participates in and never revisited by later
//! pairs, per spec §3's confidence-status coupling invariant.

use tracing::debug;

use crate::config::ChainStatusConfig;
use crate::matching::MatchResult;
use crate::types::{Anomaly, AnomalyChain, ChainStatus, GrowthRates, PriorityBand};

struct Builder {
    anomalies: Vec<crate::types::AnomalyId>,
    run_indices: Vec<usize>,
    confidence: f64,
    last_similarity: Option<crate::types::SimilarityBreakdown>,
}

fn no_growth() -> GrowthRates {
    GrowthRates {
        depth_percent_per_year: 0.0,
        length_per_year: 0.0,
        width_per_year: 0.0,
        time_to_critical_years: None,
    }
}

fn finalize(builder: Builder, status: ChainStatus, anomalies_by_run: &[Vec<Anomaly>]) -> AnomalyChain {
    let confidence = if matches!(status, ChainStatus::New | ChainStatus::Missing) { 0.0 } else { builder.confidence };
    let last_run = *builder.run_indices.last().unwrap();
    let last_id = *builder.anomalies.last().unwrap();
    let representative_position = anomalies_by_run[last_run][last_id.row_index].corrected_distance;

    AnomalyChain {
        anomalies: builder.anomalies,
        run_indices: builder.run_indices,
        confidence,
        status,
        last_similarity: builder.last_similarity,
        growth: no_growth(),
        priority: PriorityBand::Monitor,
        representative_position,
    }
}

fn status_from_confidence(confidence: f64, config: &ChainStatusConfig) -> ChainStatus {
    if confidence >= config.matched_min_confidence {
        ChainStatus::Matched
    } else {
        ChainStatus::Uncertain
    }
}

/// Build chains across `K` runs given `K - 1` consecutive pairwise
/// match results. `anomalies_by_run[k]` must be the same slice (in the
/// same order) that produced `pairwise[k]`'s indices.
pub fn build_chains(anomalies_by_run: &[Vec<Anomaly>], pairwise: &[MatchResult], config: &ChainStatusConfig) -> Vec<AnomalyChain> {
    let mut finished = Vec::new();

    let mut open: Vec<Builder> = anomalies_by_run[0]
        .iter()
        .map(|a| Builder {
            anomalies: vec![a.id],
            run_indices: vec![0],
            confidence: 0.0,
            last_similarity: None,
        })
        .collect();

    for (k, result) in pairwise.iter().enumerate() {
        let next_run = k + 1;
        let n_next = anomalies_by_run[next_run].len();
        let mut next_open: Vec<Option<Builder>> = (0..n_next).map(|_| None).collect();

        let mut remaining_open: Vec<Option<Builder>> = open.into_iter().map(Some).collect();

        for m in &result.confirmed {
            let mut builder = remaining_open[m.a_index].take().expect("confirmed match references an already-closed chain");
            let is_first_pair = builder.run_indices.len() == 1;
            if is_first_pair {
                builder.confidence = m.similarity.total;
            }
            builder.last_similarity = Some(m.similarity);
            builder.anomalies.push(anomalies_by_run[next_run][m.b_index].id);
            builder.run_indices.push(next_run);
            next_open[m.b_index] = Some(builder);
        }

        for &a_index in &result.missing {
            if let Some(builder) = remaining_open[a_index].take() {
                finished.push(finalize(builder, ChainStatus::Missing, anomalies_by_run));
            }
        }

        for &b_index in &result.new_anomalies {
            next_open[b_index] = Some(Builder {
                anomalies: vec![anomalies_by_run[next_run][b_index].id],
                run_indices: vec![next_run],
                confidence: 0.0,
                last_similarity: None,
            });
        }

        open = next_open.into_iter().map(|b| b.expect("every anomaly in a run belongs to exactly one chain")).collect();
    }

    for builder in open {
        let status = if builder.run_indices.len() == 1 {
            ChainStatus::New
        } else {
            status_from_confidence(builder.confidence, config)
        };
        finished.push(finalize(builder, status, anomalies_by_run));
    }

    debug!(chains = finished.len(), "chain composition complete");
    finished
}
