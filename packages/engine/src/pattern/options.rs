//! Translation of request flags into the engine's option model

use fancy_regex::RegexBuilder;

use crate::request::Flags;

/// Engine-side representation of the request toggles
///
/// Every one of the eight flag combinations maps to exactly one value here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EngineOptions {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
}

impl EngineOptions {
    /// Pure mapping from request flags
    #[must_use]
    pub const fn translate(flags: Flags) -> Self {
        Self {
            case_insensitive: flags.ignore_case,
            multi_line: flags.multi_line,
            dot_matches_new_line: flags.dot_all,
        }
    }

    pub(crate) fn apply(self, builder: &mut RegexBuilder) {
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line);
    }
}

impl From<Flags> for EngineOptions {
    fn from(flags: Flags) -> Self {
        Self::translate(flags)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn all_flag_combinations() -> impl Iterator<Item = Flags> {
        (0u8..8).map(|bits| {
            Flags::NONE
                .ignore_case(bits & 1 != 0)
                .multi_line(bits & 2 != 0)
                .dot_all(bits & 4 != 0)
        })
    }

    #[test]
    fn test_translation_is_total_and_injective() {
        let translated: HashSet<EngineOptions> =
            all_flag_combinations().map(EngineOptions::translate).collect();
        assert_eq!(translated.len(), 8);
    }

    #[test]
    fn test_translation_is_deterministic() {
        for flags in all_flag_combinations() {
            assert_eq!(EngineOptions::from(flags), EngineOptions::from(flags));
        }
    }

    #[test]
    fn test_every_combination_builds() {
        for flags in all_flag_combinations() {
            let mut builder = RegexBuilder::new("^a.b$");
            EngineOptions::translate(flags).apply(&mut builder);
            assert!(builder.build().is_ok(), "{flags:?}");
        }
    }

    #[test]
    fn test_each_toggle_changes_matching() {
        let build = |flags: Flags, pattern: &str| {
            let mut builder = RegexBuilder::new(pattern);
            EngineOptions::translate(flags).apply(&mut builder);
            builder.build().unwrap()
        };

        let plain = build(Flags::NONE, "abc");
        let folded = build(Flags::NONE.ignore_case(true), "abc");
        assert!(!plain.is_match("ABC").unwrap());
        assert!(folded.is_match("ABC").unwrap());

        let anchored = build(Flags::NONE, "^b$");
        let lines = build(Flags::NONE.multi_line(true), "^b$");
        assert!(!anchored.is_match("a\nb\nc").unwrap());
        assert!(lines.is_match("a\nb\nc").unwrap());

        let dot = build(Flags::NONE, "a.b");
        let dot_all = build(Flags::NONE.dot_all(true), "a.b");
        assert!(!dot.is_match("a\nb").unwrap());
        assert!(dot_all.is_match("a\nb").unwrap());
    }
}
