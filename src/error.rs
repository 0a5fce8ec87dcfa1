//! The engine's structural error class (spec §7).
//!
//! Only caller misuse — too few runs — terminates the engine. Every
//! other condition spec.md calls out (empty runs, missing references,
//! no candidate pairs, missing/out-of-range values, divide-by-zero in
//! regression or zone math) is absorbed and surfaced through
//! `cleaning_reports`, `cleaning_flags`, and zone/chain fields instead
//! of an `Err`, per the propagation policy in spec.md §7.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("at least 2 runs are required for alignment, got {got}")]
    TooFewRuns { got: usize },
}
