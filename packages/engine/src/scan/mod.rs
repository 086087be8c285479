//! Bounded match loop and the records it produces

pub mod bounded;
pub mod offsets;
pub mod record;

pub use bounded::{ScanReport, ScanStop, scan};
pub use offsets::CharCursor;
pub use record::{Capture, MatchRecord, Span};
