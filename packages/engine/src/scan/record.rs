//! Per-match result records
//!
//! A capture is a tagged value: a group that did not take part in a match is
//! `Absent`, which is never confused with a group that matched the empty
//! string at a real position.

use std::sync::Arc;

use serde::Deserialize;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::pattern::NamedGroup;

/// Half-open `[start, end)` range in code points, serialized as `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<[usize; 2]> for Span {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<Span> for [usize; 2] {
    fn from(span: Span) -> Self {
        [span.start, span.end]
    }
}

/// Result of one capture group within one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// The group did not participate in the match
    Absent,
    Matched { text: String, span: Span },
}

impl Capture {
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Capture::Absent => None,
            Capture::Matched { text, .. } => Some(text),
        }
    }

    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Capture::Absent => None,
            Capture::Matched { span, .. } => Some(*span),
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Capture::Absent)
    }
}

/// One match found by the scan
///
/// Positional groups are 1-based; group 0 is the whole match and is kept
/// apart from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    text: String,
    span: Span,
    groups: Vec<Capture>,
    names: Arc<[NamedGroup]>,
}

impl MatchRecord {
    pub(crate) fn new(text: String, span: Span, groups: Vec<Capture>, names: Arc<[NamedGroup]>) -> Self {
        Self {
            text,
            span,
            groups,
            names,
        }
    }

    /// Text of the whole match
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.span.start
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Positional groups 1..=N, in order
    #[must_use]
    pub fn groups(&self) -> &[Capture] {
        &self.groups
    }

    /// Group by 1-based index; index 0 is not a positional group
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&Capture> {
        index.checked_sub(1).and_then(|i| self.groups.get(i))
    }

    /// Group by declared name
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&Capture> {
        self.names
            .iter()
            .find(|g| g.name == name)
            .and_then(|g| self.group(g.index))
    }

    /// Named groups in declaration order
    pub fn named_groups(&self) -> impl Iterator<Item = (&str, &Capture)> {
        self.names
            .iter()
            .filter_map(|g| self.group(g.index).map(|c| (g.name.as_str(), c)))
    }
}

struct GroupValues<'a>(&'a [Capture]);
struct GroupSpans<'a>(&'a [Capture]);
struct NamedValues<'a>(&'a MatchRecord);
struct NamedSpans<'a>(&'a MatchRecord);

impl Serialize for GroupValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(Capture::text))
    }
}

impl Serialize for GroupSpans<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(Capture::span))
    }
}

impl Serialize for NamedValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.named_groups().map(|(name, c)| (name, c.text())))
    }
}

impl Serialize for NamedSpans<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.named_groups().map(|(name, c)| (name, c.span())))
    }
}

impl Serialize for MatchRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MatchRecord", 7)?;
        state.serialize_field("match", &self.text)?;
        state.serialize_field("start", &self.span.start)?;
        state.serialize_field("end", &self.span.end)?;
        state.serialize_field("groups", &GroupValues(&self.groups))?;
        state.serialize_field("group_spans", &GroupSpans(&self.groups))?;
        state.serialize_field("named_groups", &NamedValues(self))?;
        state.serialize_field("named_group_spans", &NamedSpans(self))?;
        state.end()
    }
}
