use super::types::{ErrorKind, EvalError};

impl EvalError {
    /// Returns true if the input text was rejected for size.
    #[must_use]
    pub fn is_too_large(&self) -> bool {
        self.kind() == ErrorKind::TooLarge
    }

    /// Returns true if the pattern failed to compile.
    #[must_use]
    pub fn is_regex_syntax(&self) -> bool {
        self.kind() == ErrorKind::RegexSyntax
    }

    /// Returns true if the scan overran its deadline or execution budget.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.kind() == ErrorKind::Timeout
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::{TIMEOUT_MESSAGE, regex_syntax, timeout, too_large};

    #[test]
    fn test_exactly_one_classification_holds() {
        let errors = [
            too_large(10, 5),
            regex_syntax("unbalanced parenthesis"),
            timeout(Duration::from_millis(1500)),
        ];

        for err in &errors {
            let flags = [err.is_too_large(), err.is_regex_syntax(), err.is_timeout()];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{err:?}");
        }
    }

    #[test]
    fn test_timeout_message_is_fixed() {
        let short = timeout(Duration::from_millis(1));
        let long = timeout(Duration::from_secs(60));
        assert_eq!(short.message(), TIMEOUT_MESSAGE);
        assert_eq!(long.message(), TIMEOUT_MESSAGE);
    }

    #[test]
    fn test_too_large_message_names_sizes() {
        let message = too_large(2_097_153, 2_097_152).message();
        assert!(message.contains("2097153"));
        assert!(message.contains("2097152"));
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(ErrorKind::TooLarge.to_string(), "TooLarge");
        assert_eq!(ErrorKind::RegexSyntax.as_str(), "RegexSyntax");
        assert_eq!(ErrorKind::Timeout.as_str(), "Timeout");
    }
}
