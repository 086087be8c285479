//! Service configuration
//!
//! Defaults reproduce the reference deployment: listen on `127.0.0.1:8000`,
//! allow the playground frontend at `http://localhost:5173`.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use http::HeaderValue;
use rxplay_engine::config::{
    ConfigResult, ConfigValidator, ConfigurationError, EvalConfig, Validator,
};

pub const ENV_BIND: &str = "RXPLAY_BIND";
pub const ENV_ALLOWED_ORIGIN: &str = "RXPLAY_ALLOWED_ORIGIN";
pub const ENV_MAX_BODY_BYTES: &str = "RXPLAY_MAX_BODY_BYTES";
pub const ENV_MAX_TEXT_BYTES: &str = "RXPLAY_MAX_TEXT_BYTES";
pub const ENV_TIMEOUT_MS: &str = "RXPLAY_TIMEOUT_MS";
pub const ENV_MAX_MATCHES: &str = "RXPLAY_MAX_MATCHES";
pub const ENV_BACKTRACK_LIMIT: &str = "RXPLAY_BACKTRACK_LIMIT";

/// HTTP service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address
    pub bind: SocketAddr,

    /// The one origin allowed to call the API from a browser
    pub allowed_origin: String,

    /// Request body limit; JSON escaping can make a body several times larger
    /// than the text it carries
    pub max_body_bytes: usize,

    /// Evaluation limits
    pub eval: EvalConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            allowed_origin: "http://localhost:5173".to_string(),
            max_body_bytes: 16 * 1024 * 1024,
            eval: EvalConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load from `RXPLAY_*` environment variables, keeping defaults for unset ones
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if a set variable cannot be parsed.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if a present value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(bind) = parse_var(&lookup, ENV_BIND)? {
            config.bind = bind;
        }
        if let Some(origin) = lookup(ENV_ALLOWED_ORIGIN) {
            config.allowed_origin = origin;
        }
        if let Some(limit) = parse_var(&lookup, ENV_MAX_BODY_BYTES)? {
            config.max_body_bytes = limit;
        }
        if let Some(limit) = parse_var(&lookup, ENV_MAX_TEXT_BYTES)? {
            config.eval.max_text_bytes = limit;
        }
        if let Some(ms) = parse_var(&lookup, ENV_TIMEOUT_MS)? {
            config.eval.timeout = Duration::from_millis(ms);
        }
        if let Some(cap) = parse_var(&lookup, ENV_MAX_MATCHES)? {
            config.eval.default_max_matches = cap;
        }
        if let Some(limit) = parse_var(&lookup, ENV_BACKTRACK_LIMIT)? {
            config.eval.backtrack_limit = limit;
        }

        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> ConfigResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e| ConfigurationError::InvalidParameter(format!("{key}={raw:?}: {e}")))
}

/// A concrete IP with port 0 would bind to an unpredictable port
fn validate_bind(bind: SocketAddr) -> ConfigResult<()> {
    if bind.port() == 0 && !bind.ip().is_unspecified() {
        return Err(ConfigurationError::InvalidParameter(format!(
            "bind address {bind} needs an explicit port"
        )));
    }
    Ok(())
}

impl Validator for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_bind(self.bind)?;

        if self.allowed_origin.is_empty() || HeaderValue::from_str(&self.allowed_origin).is_err() {
            return Err(ConfigurationError::InvalidParameter(format!(
                "allowed_origin {:?} is not a valid header value",
                self.allowed_origin
            )));
        }

        ConfigValidator::validate_buffer_size(self.max_body_bytes, "max_body_bytes")?;
        self.eval.validate()?;

        if self.max_body_bytes < self.eval.max_text_bytes {
            return Err(ConfigurationError::Conflict(format!(
                "max_body_bytes ({}) is smaller than max_text_bytes ({})",
                self.max_body_bytes, self.eval.max_text_bytes
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ENV_BIND, "0.0.0.0:9000"),
            (ENV_ALLOWED_ORIGIN, "https://play.example"),
            (ENV_TIMEOUT_MS, "250"),
            (ENV_MAX_MATCHES, " 10 "),
        ]))
        .unwrap();

        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.allowed_origin, "https://play.example");
        assert_eq!(config.eval.timeout, Duration::from_millis(250));
        assert_eq!(config.eval.default_max_matches, 10);
        assert_eq!(config.eval.max_text_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn test_unparsable_value_names_the_variable() {
        let err = ServerConfig::from_lookup(lookup(&[(ENV_TIMEOUT_MS, "soon")])).unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_MS));
    }

    #[test]
    fn test_body_limit_must_cover_text_limit() {
        let mut config = ServerConfig::default();
        config.max_body_bytes = 1024;
        assert!(matches!(config.validate(), Err(ConfigurationError::Conflict(_))));
    }

    #[test]
    fn test_bind_needs_port_for_specific_ip() {
        let mut config = ServerConfig::default();
        config.bind = "127.0.0.1:0".parse().unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("127.0.0.1:0"));

        config.bind = "0.0.0.0:0".parse().unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_origin_rejected() {
        let mut config = ServerConfig::default();
        config.allowed_origin = String::new();
        assert!(config.validate().is_err());
    }
}
