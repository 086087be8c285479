//! Evaluation entry points
//!
//! Order of work for one request: size guard, flag translation, compile (on
//! the caller's thread, outside the deadline), then the bounded scan on a
//! supervised worker thread.

use crate::config::EvalConfig;
use crate::error::{self, EvalError};
use crate::guard;
use crate::outcome::{GroupMeta, MatchOutcome, MatchSuccess};
use crate::pattern::{CompiledPattern, EngineOptions};
use crate::request::{Flags, MatchRequest};
use crate::scan::{self, ScanStop};
use crate::supervisor;

/// Evaluates requests under one fixed configuration
///
/// Holds no per-request state; a single evaluator may serve any number of
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    #[must_use]
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate one request to completion or to its deadline
    ///
    /// Blocks the calling thread for at most the compile time plus the
    /// configured timeout.
    pub fn evaluate(&self, request: MatchRequest) -> MatchOutcome {
        let MatchRequest {
            text,
            pattern,
            flags,
            max_matches,
        } = request;

        guard::check_text_size(&text, self.config.max_text_bytes)?;

        let options = EngineOptions::translate(flags);
        let compiled = CompiledPattern::compile(&pattern, options, self.config.backtrack_limit)?;
        let group_meta = GroupMeta::from(&compiled);
        let max_matches = max_matches.unwrap_or(self.config.default_max_matches);
        let deadline = self.config.timeout;

        log::debug!(
            "scanning {} bytes with {:?}, cap {max_matches}, deadline {deadline:?}",
            text.len(),
            compiled.as_str()
        );

        let report = supervisor::run_with_deadline(deadline, move |abandoned| {
            scan::scan(&compiled, &text, max_matches, abandoned)
        })
        .map_err(|exceeded| {
            log::warn!("regex evaluation timed out: {exceeded}");
            error::timeout(deadline)
        })?
        .map_err(|stop| scan_stopped(stop, deadline))?;

        log::debug!(
            "scan finished with {} matches in {:?}",
            report.matches.len(),
            report.elapsed
        );

        Ok(MatchSuccess::new(report, group_meta))
    }
}

fn scan_stopped(stop: ScanStop, deadline: std::time::Duration) -> EvalError {
    match stop {
        ScanStop::EngineGaveUp(e) => {
            log::warn!("regex evaluation ran out of execution budget: {e}");
        }
        ScanStop::Abandoned => {}
    }
    error::timeout(deadline)
}

/// Evaluate `pattern` against `text` under the default configuration
///
/// # Examples
/// ```
/// use rxplay_engine::{Flags, evaluate};
///
/// let success = evaluate("a@b c@d", r"(\w+)@(\w+)", Flags::NONE, 1).unwrap();
/// assert_eq!(success.count, 1);
/// assert_eq!(success.matches[0].as_str(), "a@b");
/// ```
pub fn evaluate(text: &str, pattern: &str, flags: Flags, max_matches: usize) -> MatchOutcome {
    Evaluator::default().evaluate(
        MatchRequest::new(text, pattern)
            .with_flags(flags)
            .with_max_matches(max_matches),
    )
}
