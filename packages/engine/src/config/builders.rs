//! Builder methods for evaluation configuration

use std::time::Duration;

use super::types::EvalConfig;

impl EvalConfig {
    /// Set the scan deadline
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use rxplay_engine::config::EvalConfig;
    ///
    /// let config = EvalConfig::default().with_timeout(Duration::from_millis(250));
    /// assert_eq!(config.timeout, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the text size cap in bytes
    #[must_use]
    pub fn with_max_text_bytes(mut self, max_text_bytes: usize) -> Self {
        self.max_text_bytes = max_text_bytes;
        self
    }

    /// Set the match cap applied when a request omits `max_matches`
    #[must_use]
    pub fn with_default_max_matches(mut self, max_matches: usize) -> Self {
        self.default_max_matches = max_matches;
        self
    }

    /// Set the per-attempt backtracking budget of the engine
    #[must_use]
    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }
}
