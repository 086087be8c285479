//! Pattern compilation
//!
//! Every evaluation compiles its own pattern. Nothing here is cached or
//! shared between calls.

use fancy_regex::{Regex, RegexBuilder};

use super::options::EngineOptions;
use crate::error::{self, Result};

/// A capture group declared with a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedGroup {
    pub name: String,
    /// 1-based positional index of the group
    pub index: usize,
}

/// Compiled form of one request's pattern
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
    named: Vec<NamedGroup>,
}

impl CompiledPattern {
    /// Compile `pattern` under `options`
    ///
    /// `backtrack_limit` bounds how many backtracking steps the engine may take
    /// in a single match attempt.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::RegexSyntax` carrying the engine diagnostic if the
    /// pattern does not compile.
    pub fn compile(pattern: &str, options: EngineOptions, backtrack_limit: usize) -> Result<Self> {
        let mut builder = RegexBuilder::new(pattern);
        builder.backtrack_limit(backtrack_limit);
        options.apply(&mut builder);

        let regex = builder.build().map_err(|e| {
            log::debug!("pattern {pattern:?} rejected: {e}");
            error::regex_syntax(e)
        })?;

        let named = regex
            .capture_names()
            .enumerate()
            .filter_map(|(index, name)| {
                name.map(|name| NamedGroup {
                    name: name.to_owned(),
                    index,
                })
            })
            .collect();

        Ok(Self { regex, named })
    }

    /// Number of positional capture groups, excluding the whole match
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }

    /// Named groups in declaration order
    #[must_use]
    pub fn named_groups(&self) -> &[NamedGroup] {
        &self.named
    }

    /// 1-based index of the group called `name`
    #[must_use]
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.named.iter().find(|g| g.name == name).map(|g| g.index)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 1_000_000;

    fn compile(pattern: &str) -> Result<CompiledPattern> {
        CompiledPattern::compile(pattern, EngineOptions::default(), LIMIT)
    }

    #[test]
    fn test_group_count_excludes_whole_match() {
        assert_eq!(compile("abc").unwrap().group_count(), 0);
        assert_eq!(compile(r"(\w+)@(\w+)").unwrap().group_count(), 2);
        assert_eq!(compile("(?:a)(b)").unwrap().group_count(), 1);
    }

    #[test]
    fn test_named_groups_keep_declaration_order() {
        let compiled = compile(r"(?P<host>\w+)(x)(?<user>\w+)").unwrap();
        let names: Vec<_> = compiled.named_groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["host", "user"]);
        assert_eq!(compiled.group_index("host"), Some(1));
        assert_eq!(compiled.group_index("user"), Some(3));
        assert_eq!(compiled.group_index("missing"), None);
    }

    #[test]
    fn test_unbalanced_parenthesis_is_syntax_error() {
        let err = compile("(").unwrap_err();
        assert!(err.is_regex_syntax());
        assert!(!err.message().is_empty());
    }

    #[test]
    fn test_bad_repetition_is_syntax_error() {
        let err = compile("*a").unwrap_err();
        assert!(err.is_regex_syntax());
    }

    #[test]
    fn test_lookaround_and_backreference_compile() {
        assert!(compile(r"(?<=@)\w+").is_ok());
        assert!(compile(r"(\w)\1").is_ok());
    }
}
