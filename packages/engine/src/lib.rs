//! # rxplay Engine
//!
//! Regex evaluation core for the rxplay playground. A request carries a text,
//! a pattern and flags; the engine compiles the pattern, scans the text for
//! non-overlapping matches up to a cap, and reports spans and capture groups
//! or one classified error.
//!
//! ## Safety envelope
//!
//! - **Size guard**: texts over 2 MiB (UTF-8 bytes) are rejected before compiling
//! - **Match cap**: the scan stops once the requested number of matches is found
//! - **Deadline**: the scan runs on its own thread; the caller waits at most the
//!   configured timeout (1.5 s by default) and then reports a timeout
//! - **Backtrack budget**: the engine gives up on runaway backtracking, which
//!   also bounds how long an abandoned scan keeps running
//!
//! Spans are reported in Unicode code points.
//!
//! ## Usage
//!
//! ```
//! use rxplay_engine::{Flags, evaluate};
//!
//! let success = evaluate("x@y", r"(?<user>\w+)@(?<host>\w+)", Flags::NONE, 5000).unwrap();
//! assert_eq!(success.group_meta.named, ["user", "host"]);
//! assert_eq!(success.matches[0].named("host").and_then(|c| c.text()), Some("y"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod evaluator;
pub mod guard;
pub mod outcome;
pub mod pattern;
pub mod request;
pub mod scan;
pub mod supervisor;

pub mod prelude;

pub use crate::prelude::*;
