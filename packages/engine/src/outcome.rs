//! Success payload and the overall evaluation outcome

use serde::{Serialize, Serializer};

use crate::error::EvalError;
use crate::pattern::CompiledPattern;
use crate::scan::{MatchRecord, ScanReport};

/// Result of one evaluation: a success payload or exactly one classified error
pub type MatchOutcome = Result<MatchSuccess, EvalError>;

/// Capture group metadata of the compiled pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMeta {
    /// Positional group count, excluding group 0
    pub count: usize,
    /// Group names in declaration order
    pub named: Vec<String>,
}

impl From<&CompiledPattern> for GroupMeta {
    fn from(pattern: &CompiledPattern) -> Self {
        Self {
            count: pattern.group_count(),
            named: pattern
                .named_groups()
                .iter()
                .map(|g| g.name.clone())
                .collect(),
        }
    }
}

/// Serializes as the literal `true`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct OkFlag;

impl Serialize for OkFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

/// Successful evaluation
///
/// `count` always equals `matches.len()`. Reaching the match cap is not an
/// error and is not flagged; compare `count` with the requested cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSuccess {
    ok: OkFlag,
    pub count: usize,
    pub matches: Vec<MatchRecord>,
    pub group_meta: GroupMeta,
    /// Scan time in whole milliseconds, truncated
    pub elapsed_ms: u64,
}

impl MatchSuccess {
    #[must_use]
    pub fn new(report: ScanReport, group_meta: GroupMeta) -> Self {
        let elapsed_ms = u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX);
        Self {
            ok: OkFlag,
            count: report.matches.len(),
            matches: report.matches,
            group_meta,
            elapsed_ms,
        }
    }
}
