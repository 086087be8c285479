use std::fmt::Display;
use std::time::Duration;

use super::types::EvalError;

/// Creates an `EvalError` for text whose UTF-8 length exceeds `limit`.
#[must_use]
pub fn too_large(size: usize, limit: usize) -> EvalError {
    EvalError::TooLarge { size, limit }
}

/// Creates an `EvalError` from an engine compile diagnostic.
pub fn regex_syntax<E: Display>(e: E) -> EvalError {
    EvalError::RegexSyntax {
        message: e.to_string(),
    }
}

/// Creates an `EvalError` for a scan that overran `deadline`.
#[must_use]
pub fn timeout(deadline: Duration) -> EvalError {
    EvalError::Timeout { deadline }
}
