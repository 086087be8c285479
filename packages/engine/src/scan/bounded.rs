//! The bounded match loop
//!
//! Finds non-overlapping matches left to right. The loop stops when the match
//! cap is reached, when the engine finds nothing more, or when the supervising
//! thread has abandoned this scan. It never checks the clock itself; the
//! deadline belongs to the supervisor.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use fancy_regex::Captures;

use super::offsets::{CharCursor, next_char_boundary};
use super::record::{Capture, MatchRecord, Span};
use crate::pattern::{CompiledPattern, NamedGroup};

/// Matches collected by a completed scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub matches: Vec<MatchRecord>,
    /// Wall-clock time spent in the loop
    pub elapsed: Duration,
}

/// Why a scan ended without a report
#[derive(Debug, thiserror::Error)]
pub enum ScanStop {
    /// The supervisor gave up on this scan; nobody is waiting for it
    #[error("scan abandoned by its supervisor")]
    Abandoned,
    /// The engine refused to continue (backtrack budget or VM stack exhausted)
    #[error("engine gave up: {0}")]
    EngineGaveUp(#[source] fancy_regex::Error),
}

/// Scan `text` with `pattern`, emitting at most `max_matches` records
///
/// After a non-empty match the search resumes at its end. After an empty match
/// it resumes one code point later, so the loop always terminates. Anchors and
/// lookbehind see the whole text, not just the unsearched suffix.
///
/// # Errors
///
/// Returns `ScanStop::Abandoned` once `abandoned` is raised and
/// `ScanStop::EngineGaveUp` if a match attempt exhausts the engine's budget.
pub fn scan(
    pattern: &CompiledPattern,
    text: &str,
    max_matches: usize,
    abandoned: &AtomicBool,
) -> Result<ScanReport, ScanStop> {
    let started = Instant::now();
    let names: Arc<[NamedGroup]> = pattern.named_groups().into();
    let group_count = pattern.group_count();
    let mut cursor = CharCursor::new(text);
    let mut matches = Vec::new();
    let mut pos = 0;

    while matches.len() < max_matches && pos <= text.len() {
        if abandoned.load(Ordering::Acquire) {
            log::debug!("scan abandoned after {} matches", matches.len());
            return Err(ScanStop::Abandoned);
        }

        let captures = match pattern.regex().captures_from_pos(text, pos) {
            Ok(Some(captures)) => captures,
            Ok(None) => break,
            Err(e) => {
                log::warn!("engine gave up after {} matches: {e}", matches.len());
                return Err(ScanStop::EngineGaveUp(e));
            }
        };
        let Some(whole) = captures.get(0) else {
            break;
        };

        pos = if whole.start() == whole.end() {
            next_char_boundary(text, whole.end())
        } else {
            whole.end()
        };

        matches.push(build_record(&captures, group_count, &mut cursor, &names));
    }

    Ok(ScanReport {
        matches,
        elapsed: started.elapsed(),
    })
}

fn build_record(
    captures: &Captures<'_>,
    group_count: usize,
    cursor: &mut CharCursor<'_>,
    names: &Arc<[NamedGroup]>,
) -> MatchRecord {
    let mut span_of = |start: usize, end: usize| Span::new(cursor.char_offset(start), cursor.char_offset(end));

    let (text, span) = match captures.get(0) {
        Some(m) => (m.as_str().to_owned(), span_of(m.start(), m.end())),
        None => (String::new(), Span::new(0, 0)),
    };

    let groups = (1..=group_count)
        .map(|index| match captures.get(index) {
            Some(m) => Capture::Matched {
                text: m.as_str().to_owned(),
                span: span_of(m.start(), m.end()),
            },
            None => Capture::Absent,
        })
        .collect();

    MatchRecord::new(text, span, groups, Arc::clone(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::EngineOptions;

    fn run(pattern: &str, text: &str, max_matches: usize) -> Vec<MatchRecord> {
        let compiled = CompiledPattern::compile(pattern, EngineOptions::default(), 1_000_000).unwrap();
        scan(&compiled, text, max_matches, &AtomicBool::new(false))
            .unwrap()
            .matches
    }

    fn spans(records: &[MatchRecord]) -> Vec<(usize, usize)> {
        records.iter().map(|r| (r.start(), r.end())).collect()
    }

    #[test]
    fn test_empty_matches_advance() {
        let records = run("x*", "abc", 100);
        assert_eq!(spans(&records), [(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_empty_match_after_nonempty_match() {
        let records = run(r"\w*", "ab cd", 100);
        let texts: Vec<_> = records.iter().map(MatchRecord::as_str).collect();
        assert_eq!(texts, ["ab", "", "cd", ""]);
        assert_eq!(spans(&records), [(0, 2), (2, 2), (3, 5), (5, 5)]);
    }

    #[test]
    fn test_cap_stops_the_loop() {
        assert_eq!(run("a", "aaaaa", 3).len(), 3);
        assert!(run("a", "aaaaa", 0).is_empty());
    }

    #[test]
    fn test_anchor_sees_whole_text() {
        let records = run("^a", "aaa", 100);
        assert_eq!(spans(&records), [(0, 1)]);
    }

    #[test]
    fn test_spans_are_code_points() {
        let records = run("€+", "a€€b€", 100);
        assert_eq!(spans(&records), [(1, 3), (4, 5)]);
        assert_eq!(records[0].as_str(), "€€");
    }

    #[test]
    fn test_abandoned_scan_stops() {
        let compiled = CompiledPattern::compile("a", EngineOptions::default(), 1_000_000).unwrap();
        let result = scan(&compiled, "aaa", 10, &AtomicBool::new(true));
        assert!(matches!(result, Err(ScanStop::Abandoned)));
    }

    #[test]
    fn test_unmatched_alternative_is_absent() {
        let records = run("(a)|(b)", "b", 10);
        assert_eq!(records.len(), 1);
        assert!(records[0].group(1).is_some_and(Capture::is_absent));
        assert_eq!(records[0].group(2).and_then(Capture::text), Some("b"));
    }
}
