//! Evaluation limits validation
//!
//! Shared checks used by `EvalConfig` and by the service configuration that
//! embeds it. Validation runs once at startup; nothing here is consulted
//! while evaluating.

use std::time::Duration;

use super::types::EvalConfig;

pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// A limit or setting rejected at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("invalid byte limit: {0}")]
    InvalidBufferSize(String),

    #[error("invalid setting: {0}")]
    InvalidParameter(String),

    #[error("conflicting settings: {0}")]
    Conflict(String),
}

/// Startup validation for a configuration value
pub trait Validator {
    /// # Errors
    ///
    /// Returns the first setting found out of range.
    fn validate(&self) -> ConfigResult<()>;
}

/// Reusable limit checks
pub struct ConfigValidator;

impl ConfigValidator {
    /// Longest deadline an evaluation may be given
    pub const MAX_TIMEOUT: Duration = Duration::from_secs(3600);

    /// Largest text or body limit accepted
    pub const MAX_BYTE_LIMIT: usize = 1024 * 1024 * 1024;

    /// Deadline must be non-zero and at most [`Self::MAX_TIMEOUT`]
    ///
    /// # Errors
    ///
    /// `ConfigurationError::InvalidTimeout` naming the setting.
    pub fn validate_timeout(timeout: Duration, name: &str) -> ConfigResult<()> {
        if timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout(format!("{name} must be positive")));
        }
        if timeout > Self::MAX_TIMEOUT {
            return Err(ConfigurationError::InvalidTimeout(format!(
                "{name} of {timeout:?} is longer than {:?}",
                Self::MAX_TIMEOUT
            )));
        }
        Ok(())
    }

    /// Byte limit must be non-zero and at most [`Self::MAX_BYTE_LIMIT`]
    ///
    /// # Errors
    ///
    /// `ConfigurationError::InvalidBufferSize` naming the setting.
    pub fn validate_buffer_size(size: usize, name: &str) -> ConfigResult<()> {
        if size == 0 || size > Self::MAX_BYTE_LIMIT {
            return Err(ConfigurationError::InvalidBufferSize(format!(
                "{name} must be between 1 and {} bytes, got {size}",
                Self::MAX_BYTE_LIMIT
            )));
        }
        Ok(())
    }

    /// Validate numeric range
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the value is outside
    /// the specified range [min, max] (inclusive).
    pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> ConfigResult<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must be between {min} and {max}, got {value}"
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const MAX_TEXT_BYTES: usize = 2 * 1024 * 1024;
    pub const EVAL_TIMEOUT: Duration = Duration::from_millis(1500);
    pub const MAX_MATCHES: usize = 5000;
    pub const BACKTRACK_LIMIT: usize = 50_000_000;
}

impl Validator for EvalConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_buffer_size(self.max_text_bytes, "max_text_bytes")?;
        ConfigValidator::validate_timeout(self.timeout, "timeout")?;
        ConfigValidator::validate_range(self.default_max_matches, 1, usize::MAX, "default_max_matches")?;
        ConfigValidator::validate_range(self.backtrack_limit, 1, usize::MAX, "backtrack_limit")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EvalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_text_bytes, 2_097_152);
        assert_eq!(config.timeout, Duration::from_millis(1500));
        assert_eq!(config.default_max_matches, 5000);
    }

    #[test]
    fn test_timeout_longer_than_an_hour_rejected() {
        let config = EvalConfig::default().with_timeout(Duration::from_secs(3601));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidTimeout(_)));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = EvalConfig::default().with_timeout(Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn test_zero_text_cap_rejected() {
        let config = EvalConfig::default().with_max_text_bytes(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidBufferSize(_))
        ));
    }

    #[test]
    fn test_oversized_text_cap_rejected() {
        let config = EvalConfig::default().with_max_text_bytes(usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidBufferSize(_))
        ));
    }

    #[test]
    fn test_zero_match_cap_rejected() {
        let config = EvalConfig::default().with_default_max_matches(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_max_matches"));
    }
}
