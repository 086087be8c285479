//! Evaluation configuration
//!
//! Limits and budgets applied to every evaluation. Values are plain data,
//! validated once at startup and shared read-only afterwards.

pub mod builders;
pub mod defaults;
pub mod types;
pub mod validation;

pub use types::EvalConfig;
pub use validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator};
