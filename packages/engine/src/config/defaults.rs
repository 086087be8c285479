//! Default implementations for evaluation configuration

use super::types::EvalConfig;
use super::validation::ConfigDefaults;

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_text_bytes: ConfigDefaults::MAX_TEXT_BYTES,
            timeout: ConfigDefaults::EVAL_TIMEOUT,
            default_max_matches: ConfigDefaults::MAX_MATCHES,
            backtrack_limit: ConfigDefaults::BACKTRACK_LIMIT,
        }
    }
}
