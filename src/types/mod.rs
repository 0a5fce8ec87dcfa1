//! Shared data structures for the alignment and matching engine.
//!
//! - `canonical_type`: the closed feature-type enum and vendor-string mapping.
//! - `anomaly`: the `Anomaly` record and its stable id.
//! - `reference`: reference-point projections and matched reference pairs.
//! - `zone`: piecewise-linear alignment zones (C5 output).
//! - `similarity`: the weighted anomaly-pair similarity breakdown (C7 output).
//! - `chain`: cross-run anomaly chains, growth rates, priority bands.
//! - `drift`: odometer drift series and summary statistics (C6 output).
//! - `cleaning`: per-pass and per-run cleaning audit reports (C2 output).
//! - `replacement`: advisory pipe-replacement spans (C4 output).
//! - `input`: external-interface input types (spec §6).
//! - `result`: the final `EngineResult`.

mod anomaly;
mod canonical_type;
mod chain;
mod cleaning;
mod drift;
mod input;
mod reference;
mod replacement;
mod result;
mod similarity;
mod zone;

pub use anomaly::*;
pub use canonical_type::*;
pub use chain::*;
pub use cleaning::*;
pub use drift::*;
pub use input::*;
pub use reference::*;
pub use replacement::*;
pub use result::*;
pub use similarity::*;
pub use zone::*;
