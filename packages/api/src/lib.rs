//! rxplay Public API
//!
//! Regex playground service. The evaluation engine is re-exported as-is; the
//! [`server`] module puts it behind an HTTP API with size checks, status code
//! mapping and a single-origin CORS policy.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod server;

// Re-export the engine's public types
pub use rxplay_engine::{
    Capture, ErrorKind, EvalConfig, EvalError, Evaluator, Flags, GroupMeta, MatchOutcome,
    MatchRecord, MatchRequest, MatchSuccess, Span, evaluate,
};
pub use rxplay_engine::config;

pub use server::{ServerConfig, router, serve};
