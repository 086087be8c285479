//! Core evaluation configuration structure

use std::time::Duration;

/// Evaluation limits
///
/// Every evaluation reads these values; none of them change while the
/// service is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum UTF-8 encoded text length in bytes (inclusive)
    pub max_text_bytes: usize,

    /// Wall-clock budget for the scan loop
    pub timeout: Duration,

    /// Match cap used when a request does not name one
    pub default_max_matches: usize,

    /// Backtracking steps the engine may take per match attempt before giving up
    pub backtrack_limit: usize,
}
