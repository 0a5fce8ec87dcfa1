//! ili-align-engine: a pure, synchronous batch engine that aligns and
//! matches anomalies across multiple in-line-inspection (ILI) pipeline
//! runs.
//!
//! The engine takes each run's raw vendor rows, normalizes them into a
//! canonical anomaly table, cleans known data-quality issues, matches
//! reference features (welds, valves, fittings) across runs to build a
//! piecewise-linear coordinate correction, then uses that correction to
//! drive a similarity-weighted bipartite match of every anomaly across
//! consecutive runs. The result is a set of cross-run anomaly chains
//! with growth rates and regulatory priority assigned.
//!
//! The entire pipeline is exposed as one function, [`engine::run`],
//! with no I/O, no persistence, and no global state — see
//! `config`'s module doc for why that shapes [`config::EngineConfig`].

pub mod chainer;
pub mod cleaner;
pub mod config;
pub mod distance_corrector;
pub mod drift;
pub mod engine;
pub mod error;
pub mod growth;
pub mod matching;
pub mod normalizer;
pub mod priority;
pub mod reference;
pub mod replacement;
pub mod similarity;
pub mod types;

pub use config::EngineConfig;
pub use engine::run;
pub use error::EngineError;
pub use types::{EngineResult, RawRow, RunInput};
