//! rxplay Engine Prelude
//!
//! The types callers need to run an evaluation and read its outcome.

pub use crate::config::EvalConfig;
pub use crate::error::{ErrorKind, EvalError};
pub use crate::evaluator::{Evaluator, evaluate};
pub use crate::outcome::{GroupMeta, MatchOutcome, MatchSuccess};
pub use crate::request::{Flags, MatchRequest};
pub use crate::scan::{Capture, MatchRecord, Span};
