// ABOUTME: Guarded append that refuses to add a food already present in a meal
// ABOUTME: Presence checks cover identities, synonyms, connector phrases, and portion phrases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::{Cleaned, DedupEngine, UnchangedReason};
use crate::diet::synonyms::{contains_word, SynonymResolver};
use regex::Regex;

impl DedupEngine<'_> {
    /// Append `addition` to `text` unless the food is already there
    ///
    /// The addition is joined with " with " (or ", " when the text already has a
    /// "with" clause). Appending the same addition twice leaves the text as it
    /// was after the first append.
    #[must_use]
    pub fn add_without_duplication(&self, text: &str, addition: &str) -> Cleaned {
        let addition = strip_leading_connector(addition)
            .trim_end_matches([',', ';', '.'])
            .trim_end();
        if addition.is_empty() {
            return Cleaned::unchanged(text, UnchangedReason::EmptyAddition);
        }
        let base = text
            .trim_end()
            .trim_end_matches([',', ';', '.'])
            .trim_end();
        if base.is_empty() {
            return Cleaned::Changed(addition.to_owned());
        }
        if self.is_already_present(base, addition) {
            return Cleaned::unchanged(text, UnchangedReason::AlreadyPresent);
        }

        let joiner = if contains_word(&base.to_lowercase(), "with") {
            ", "
        } else {
            " with "
        };
        Cleaned::Changed(format!("{base}{joiner}{addition}"))
    }

    /// Whether the food named by `addition` already appears in `text`
    #[must_use]
    pub fn is_already_present(&self, text: &str, addition: &str) -> bool {
        let lowered = text.to_lowercase();
        let addition_lower = addition.trim().to_lowercase();
        if contains_word(&lowered, &addition_lower) {
            return true;
        }

        let added = self.index.identities_in(addition);
        if !added.is_empty() && !added.is_disjoint(&self.index.identities_in(text)) {
            return true;
        }

        let canonical = self.resolver.canonicalize(addition);
        if canonical.is_empty() {
            return false;
        }
        let mut spellings = vec![canonical.clone()];
        spellings.extend(
            SynonymResolver::surfaces_of(&canonical)
                .iter()
                .map(|surface| (*surface).to_owned()),
        );

        spellings.iter().any(|spelling| {
            if spelling.chars().count() >= self.resolver.min_containment_len() {
                contains_word(&lowered, spelling)
            } else {
                connector_or_portion_mention(&lowered, spelling)
            }
        })
    }
}

/// Short names only count when they sit after a connector or before a portion
fn connector_or_portion_mention(lowered: &str, spelling: &str) -> bool {
    let escaped = regex::escape(spelling);
    let patterns = [
        format!(r"\b(?:with|and|or)\s+{escaped}\b"),
        format!(r"\b{escaped}\s*\("),
        format!(r"^\s*{escaped}\b"),
    ];
    patterns.iter().any(|pattern| {
        Regex::new(pattern).is_ok_and(|re| re.is_match(lowered))
    })
}

fn strip_leading_connector(addition: &str) -> &str {
    let mut rest = addition.trim().trim_start_matches([',', ';']).trim_start();
    for connector in ["with ", "and ", "or "] {
        if rest
            .get(..connector.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(connector))
        {
            rest = rest[connector.len()..].trim_start();
        }
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_with_connector() {
        let engine = DedupEngine::global();
        let result = engine.add_without_duplication("Idli (2 medium)", "coconut chutney (2 tbsp)");
        assert_eq!(
            result.text(),
            "Idli (2 medium) with coconut chutney (2 tbsp)"
        );
        let result = engine.add_without_duplication(result.text(), "roasted flaxseeds (1 tsp)");
        assert_eq!(
            result.text(),
            "Idli (2 medium) with coconut chutney (2 tbsp), roasted flaxseeds (1 tsp)"
        );
    }

    #[test]
    fn test_append_is_idempotent() {
        let engine = DedupEngine::global();
        let once = engine
            .add_without_duplication("Vegetable dalia (1 bowl)", "curd (½ katori)")
            .into_text();
        let twice = engine.add_without_duplication(&once, "curd (½ katori)");
        assert_eq!(twice.reason(), Some(UnchangedReason::AlreadyPresent));
        assert_eq!(twice.into_text(), once);
    }

    #[test]
    fn test_synonym_already_present() {
        let engine = DedupEngine::global();
        let result = engine.add_without_duplication("Jeera rice with dahi (1 katori)", "yogurt");
        assert_eq!(result.reason(), Some(UnchangedReason::AlreadyPresent));
        let result = engine.add_without_duplication("Moong dal khichdi (1 bowl)", "green gram");
        assert!(!result.is_changed());
    }

    #[test]
    fn test_short_names_need_connector_or_portion() {
        let engine = DedupEngine::global();
        assert!(engine.is_already_present("Poha with tea", "tea"));
        assert!(engine.is_already_present("Poha, tea (1 cup)", "tea"));
        assert!(!engine.is_already_present("Poha, steamed", "tea"));
    }

    #[test]
    fn test_empty_inputs() {
        let engine = DedupEngine::global();
        let result = engine.add_without_duplication("Apple", "   ");
        assert_eq!(result.reason(), Some(UnchangedReason::EmptyAddition));
        let result = engine.add_without_duplication("", "apple (1 medium)");
        assert_eq!(result.into_text(), "apple (1 medium)");
    }

    #[test]
    fn test_leading_connector_is_stripped() {
        let engine = DedupEngine::global();
        let result = engine.add_without_duplication("Ragi porridge", "with banana");
        assert_eq!(result.into_text(), "Ragi porridge with banana");
    }
}
