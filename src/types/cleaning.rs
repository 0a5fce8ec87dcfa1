//! Cleaner audit reports (C2 output).

use serde::{Deserialize, Serialize};

/// Report produced by a single cleaning pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassReport {
    pub name: String,
    pub description: String,
    pub rows_affected: usize,
    pub details: Vec<String>,
}

/// Aggregated report for one run's cleaning pipeline (all seven passes).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub run_index: usize,
    pub passes: Vec<PassReport>,
    pub total_rows_in: usize,
    pub total_rows_out: usize,
    pub total_flags: usize,
}

impl CleaningReport {
    pub fn push(&mut self, pass: PassReport) {
        self.total_flags += pass.rows_affected;
        self.passes.push(pass);
    }
}
