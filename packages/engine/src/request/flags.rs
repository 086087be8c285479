use serde::{Deserialize, Serialize};

/// Named boolean toggles a request may set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags {
    /// Ignore letter case throughout matching
    #[serde(rename = "IGNORECASE", default)]
    pub ignore_case: bool,

    /// `^` and `$` also match at internal line boundaries
    #[serde(rename = "MULTILINE", default)]
    pub multi_line: bool,

    /// `.` also matches line terminators
    #[serde(rename = "DOTALL", default)]
    pub dot_all: bool,
}

impl Flags {
    pub const NONE: Flags = Flags {
        ignore_case: false,
        multi_line: false,
        dot_all: false,
    };

    #[must_use]
    pub fn ignore_case(mut self, yes: bool) -> Self {
        self.ignore_case = yes;
        self
    }

    #[must_use]
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    #[must_use]
    pub fn dot_all(mut self, yes: bool) -> Self {
        self.dot_all = yes;
        self
    }
}
