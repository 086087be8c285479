//! Flag translation and per-request pattern compilation

pub mod compiler;
pub mod options;

pub use compiler::{CompiledPattern, NamedGroup};
pub use options::EngineOptions;
