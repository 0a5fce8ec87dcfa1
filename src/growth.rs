//! C10 — Growth analyzer.
//!
//! Projects per-metric growth rates for a chain by ordinary least
//! squares against inspection year, then derives a time-to-critical
//! estimate for depth. Chains with fewer than two distinct years carry
//! zero growth and no projection — there is nothing to regress against.

use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

use crate::config::GrowthConfig;
use crate::types::{Anomaly, AnomalyChain, GrowthRates};

/// Compute growth rates for one chain.
///
/// `years[k]` is the inspection year for run `k`; `anomalies_by_run`
/// gives the underlying per-run anomaly tables the chain's
/// [`crate::types::AnomalyId`]s index into.
pub fn compute(chain: &AnomalyChain, anomalies_by_run: &[Vec<Anomaly>], years: &[i32], config: &GrowthConfig) -> GrowthRates {
    let points: Vec<(f64, &Anomaly)> = chain
        .anomalies
        .iter()
        .map(|id| (years[id.run_index] as f64, &anomalies_by_run[id.run_index][id.row_index]))
        .collect();

    let xs: Vec<f64> = points.iter().map(|(x, _)| *x).collect();
    let depth_slope = slope(&xs, &points.iter().map(|(_, a)| a.depth_percent).collect::<Vec<_>>());
    let length_slope = slope(&xs, &points.iter().map(|(_, a)| a.length).collect::<Vec<_>>());
    let width_slope = slope(&xs, &points.iter().map(|(_, a)| a.width).collect::<Vec<_>>());

    if points.len() >= 3 {
        let depth_ys: Vec<f64> = points.iter().map(|(_, a)| a.depth_percent).collect();
        let p = trend_significance(&xs, &depth_ys);
        debug!(p_value = p, chain_len = points.len(), "depth trend significance");
    }

    let latest_depth = points.last().map(|(_, a)| a.depth_percent).unwrap_or(0.0);
    let time_to_critical_years = if latest_depth >= config.critical_depth_percent {
        Some(0.0)
    } else if depth_slope > 0.0 {
        Some((config.critical_depth_percent - latest_depth) / depth_slope)
    } else {
        None
    };

    GrowthRates {
        depth_percent_per_year: depth_slope,
        length_per_year: length_slope,
        width_per_year: width_slope,
        time_to_critical_years,
    }
}

/// Ordinary least squares slope of `ys` against `xs`. Returns 0 when
/// fewer than two distinct x values are present — the denominator
/// would be zero.
fn slope(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }

    let n = xs.len() as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys.iter()).map(|(x, y)| x * y).sum();
    let sum_x2: f64 = xs.iter().map(|x| x * x).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        0.0
    } else {
        (n * sum_xy - sum_x * sum_y) / denominator
    }
}

/// Two-tailed p-value for the Pearson correlation between `xs` and
/// `ys`, via a Student's t-distribution — the same diagnostic pattern
/// used for significance filtering elsewhere, scaled down for a
/// handful of inspection runs rather than a packet stream.
fn trend_significance(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    let r = pearson(xs, ys);
    if r.abs() >= 0.9999 {
        return 0.0;
    }
    let df = (n - 2) as f64;
    let t_stat = r * df.sqrt() / (1.0 - r * r).sqrt();
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => 2.0 * (1.0 - dist.cdf(t_stat.abs())),
        Err(_) => 1.0,
    }
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|a| a * a).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x.powi(2)) * (n * sum_y2 - sum_y.powi(2))).sqrt();

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
