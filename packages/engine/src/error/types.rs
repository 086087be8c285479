//! Evaluation error types
//!
//! The core reports exactly three failure kinds. Anything else that goes wrong
//! inside an evaluation is a defect and surfaces as a panic, not as a variant here.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// A Result alias where the Err case is [`EvalError`].
pub type Result<T> = std::result::Result<T, EvalError>;

/// Fixed, pattern-independent message carried by every timeout.
pub const TIMEOUT_MESSAGE: &str = "regex evaluation timeout";

/// Classification of an [`EvalError`], serialized as the boundary's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Input text exceeds the byte cap
    TooLarge,
    /// Pattern failed to compile
    RegexSyntax,
    /// Scan did not finish within its budget
    Timeout,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::TooLarge => "TooLarge",
            ErrorKind::RegexSyntax => "RegexSyntax",
            ErrorKind::Timeout => "Timeout",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal failure of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("text too large: {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    /// Carries the engine diagnostic verbatim.
    #[error("{message}")]
    RegexSyntax { message: String },

    /// `deadline` is the budget that was exceeded; it is not part of the message.
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout { deadline: Duration },
}

impl EvalError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::TooLarge { .. } => ErrorKind::TooLarge,
            EvalError::RegexSyntax { .. } => ErrorKind::RegexSyntax,
            EvalError::Timeout { .. } => ErrorKind::Timeout,
        }
    }

    /// Human-readable message suitable for a UI.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
