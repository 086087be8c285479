//! Evaluation request types
//!
//! Shapes of the data a caller hands to the core. The JSON field names match
//! the playground's wire format (`IGNORECASE`, `MULTILINE`, `DOTALL`).

pub mod flags;
pub mod types;

pub use flags::Flags;
pub use types::MatchRequest;
