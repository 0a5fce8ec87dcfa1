//! Engine configuration: tunables grouped by owning component.
//!
//! Unlike the teacher's `config` module, there is no global `OnceLock`
//! singleton here — the engine is a pure function (DESIGN.md,
//! "Reactive global store"), so `EngineConfig` is an ordinary value the
//! caller constructs and threads through `engine::run`.

pub mod defaults;
mod engine_config;

pub use engine_config::*;
