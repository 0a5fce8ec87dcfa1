//! C11 — Priority classifier.
//!
//! A fixed, first-match-wins rule table over depth, growth rate, and
//! time-to-critical (spec §4.11). Ordered most urgent to least so a
//! chain meeting several bands' criteria gets the most urgent one.

use crate::config::PriorityConfig;
use crate::types::{Anomaly, AnomalyChain, PriorityBand};

pub fn classify(chain: &AnomalyChain, anomalies_by_run: &[Vec<Anomaly>], config: &PriorityConfig) -> PriorityBand {
    let latest = chain.anomalies.last().expect("a chain always has at least one anomaly");
    let depth = anomalies_by_run[latest.run_index][latest.row_index].depth_percent;
    let growth = chain.growth.depth_percent_per_year.abs();
    let ttc = chain.growth.time_to_critical_years;

    if depth >= config.immediate_depth
        || ttc.is_some_and(|t| t <= config.immediate_ttc_years)
        || growth >= config.immediate_growth
    {
        return PriorityBand::Immediate;
    }

    if depth >= config.sixty_day_depth
        || growth >= config.sixty_day_growth
        || ttc.is_some_and(|t| t <= config.sixty_day_ttc_years)
    {
        return PriorityBand::SixtyDay;
    }

    if depth >= config.one_eighty_day_depth || growth >= config.one_eighty_day_growth {
        return PriorityBand::OneEightyDay;
    }

    if depth >= config.scheduled_depth || growth >= config.scheduled_growth {
        return PriorityBand::Scheduled;
    }

    PriorityBand::Monitor
}
