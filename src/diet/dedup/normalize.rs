// ABOUTME: Final output normalization applied once to every finished meal description
// ABOUTME: Removes repeated alternatives, re-portioned foods, doubled words and stray punctuation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::fragments::{join_fragments, split_fragments, Fragment};
use super::{
    split_annotation, Cleaned, DedupEngine, FragmentKey, UnchangedReason, ANNOTATION_SEPARATOR,
    FALLBACK_PHRASE,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static DOUBLED_PARENTHETICAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)\s*\([^()]*\)").ok());

static EMPTY_PARENS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\(\s*\)").ok());

static OPEN_PADDING: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\(\s+").ok());

static CLOSE_PADDING: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+\)").ok());

static SPACE_BEFORE_PUNCT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s+([,;.])").ok());

static REPEATED_COMMAS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r",(\s*,)+").ok());

static DOUBLED_CONNECTOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(with|and|or)(\s+(?:with|and|or)\b)+").ok());

static LEADING_CONNECTOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:\s*(?:,|with\b|and\b|or\b))+\s*").ok());

static TRAILING_CONNECTOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(?:\s*(?:,|\bwith|\band|\bor))+\s*$").ok());

static MULTISPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s{2,}").ok());

impl DedupEngine<'_> {
    /// Final cleanup of a finished meal description
    ///
    /// Drops repeated "X or Y" alternatives, later mentions of a food already
    /// named (with another portion or another spelling), adjacent repeated
    /// words and doubled parentheticals, then tidies spacing and punctuation.
    /// A trailing health-benefit annotation is carried through untouched.
    #[must_use]
    pub fn normalize_output(&self, text: &str) -> Cleaned {
        if text.trim().is_empty() {
            return Cleaned::unchanged(text, UnchangedReason::EmptyInput);
        }
        let (body, annotation) = split_annotation(text);
        let fragments = match split_fragments(body) {
            Ok(fragments) => fragments,
            Err(problem) => {
                debug!(%problem, "Skipping normalization for malformed meal text");
                return Cleaned::unchanged(text, UnchangedReason::Malformed(problem));
            }
        };

        let fragments = self.drop_repeated_alternatives(fragments);
        let fragments = self.drop_repeated_foods(fragments);
        let mut cleaned = tidy(&join_fragments(&fragments));
        if cleaned.is_empty() {
            cleaned = FALLBACK_PHRASE.to_owned();
        }
        if body.trim_start().starts_with(char::is_uppercase) {
            cleaned = capitalize_first(&cleaned);
        }
        if let Some(note) = annotation {
            cleaned.push_str(ANNOTATION_SEPARATOR);
            cleaned.push_str(note);
        }

        if cleaned == text {
            Cleaned::unchanged(text, UnchangedReason::NoDuplicates)
        } else {
            Cleaned::Changed(cleaned)
        }
    }

    /// Remove the second and later copies of an "X or Y" pair
    fn drop_repeated_alternatives(&self, fragments: Vec<Fragment>) -> Vec<Fragment> {
        let mut seen: Vec<(String, String)> = Vec::new();
        let mut removed = vec![false; fragments.len()];
        for i in 1..fragments.len() {
            if !fragments[i].connector.is_alternative() || removed[i - 1] {
                continue;
            }
            let first = self.resolver.canonicalize(&fragments[i - 1].text);
            let second = self.resolver.canonicalize(&fragments[i].text);
            let pair = if first <= second {
                (first, second)
            } else {
                (second, first)
            };
            if seen.contains(&pair) {
                removed[i - 1] = true;
                removed[i] = true;
            } else {
                seen.push(pair);
            }
        }
        fragments
            .into_iter()
            .zip(removed)
            .filter_map(|(fragment, gone)| (!gone).then_some(fragment))
            .collect()
    }

    /// Remove fragments naming a food that an earlier fragment already named
    fn drop_repeated_foods(&self, fragments: Vec<Fragment>) -> Vec<Fragment> {
        let mut kept: Vec<(Fragment, FragmentKey)> = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            let key = self.key_for(&fragment.text);
            let repeated = if key.is_blank() {
                kept.iter()
                    .any(|(earlier, _)| earlier.text.eq_ignore_ascii_case(&fragment.text))
            } else {
                kept.iter().any(|(_, earlier)| self.same_food(earlier, &key))
            };
            if !repeated {
                kept.push((fragment, key));
            }
        }
        kept.into_iter().map(|(fragment, _)| fragment).collect()
    }
}

fn replace_all(pattern: &LazyLock<Option<Regex>>, text: &str, replacement: &str) -> String {
    match pattern.as_ref() {
        Some(re) => re.replace_all(text, replacement).into_owned(),
        None => text.to_owned(),
    }
}

/// Word, parenthesis and punctuation cleanup on a rejoined description
fn tidy(text: &str) -> String {
    let mut out = collapse_repeated_words(text);
    out = replace_all(&DOUBLED_PARENTHETICAL, &out, "($1)");
    out = replace_all(&EMPTY_PARENS, &out, "");
    out = replace_all(&OPEN_PADDING, &out, "(");
    out = replace_all(&CLOSE_PADDING, &out, ")");
    out = replace_all(&SPACE_BEFORE_PUNCT, &out, "$1");
    out = replace_all(&REPEATED_COMMAS, &out, ",");
    out = replace_all(&DOUBLED_CONNECTOR, &out, "$1");
    out = replace_all(&LEADING_CONNECTOR, &out, "");
    out = replace_all(&TRAILING_CONNECTOR, &out, "");
    out = replace_all(&MULTISPACE, &out, " ");
    out.trim().to_owned()
}

/// Drop a word that repeats the word right before it ("vegetable vegetable stew")
fn collapse_repeated_words(text: &str) -> String {
    let mut words: Vec<&str> = Vec::new();
    for word in text.split(' ') {
        let repeat = !word.is_empty()
            && word.chars().all(char::is_alphabetic)
            && words.last().is_some_and(|prev| prev.eq_ignore_ascii_case(word));
        if !repeat {
            words.push(word);
        }
    }
    words.join(" ")
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_alternative_pair_is_removed() {
        let engine = DedupEngine::global();
        let result = engine.normalize_output(
            "Brown rice (1 cup) or jowar roti (2 medium), toor dal (1 katori), \
             jowar roti (2 medium) or brown rice (1 cup) | Benefit: steady energy",
        );
        assert_eq!(
            result.into_text(),
            "Brown rice (1 cup) or jowar roti (2 medium), toor dal (1 katori) | Benefit: steady energy"
        );
    }

    #[test]
    fn test_same_food_with_other_portion_is_removed() {
        let engine = DedupEngine::global();
        let result = engine.normalize_output("Apple (1 medium) with papaya (1 small) and apple (1 large)");
        assert_eq!(result.into_text(), "Apple (1 medium) with papaya (1 small)");
    }

    #[test]
    fn test_spelling_variant_is_removed() {
        let engine = DedupEngine::global();
        let result = engine.normalize_output("Curd rice (1 cup) with dahi (½ katori)");
        assert_eq!(result.into_text(), "Curd rice (1 cup)");
    }

    #[test]
    fn test_repeated_word_and_doubled_parenthetical() {
        let engine = DedupEngine::global();
        assert_eq!(
            engine.normalize_output("Vegetable vegetable stew (1 bowl)").into_text(),
            "Vegetable stew (1 bowl)"
        );
        assert_eq!(
            engine.normalize_output("Toor dal (1 katori) (1 katori)").into_text(),
            "Toor dal (1 katori)"
        );
    }

    #[test]
    fn test_stray_connectors_are_cleaned() {
        let engine = DedupEngine::global();
        let result = engine.normalize_output("Poha (1 bowl) with  and lemon water");
        assert_eq!(result.into_text(), "Poha (1 bowl) and lemon water");
        let result = engine.normalize_output("Poha (1 bowl), , lemon water ,");
        assert_eq!(result.into_text(), "Poha (1 bowl), lemon water");
    }

    #[test]
    fn test_clean_meal_is_unchanged() {
        let engine = DedupEngine::global();
        let text = "Idli (2 medium) with sambar (1 katori) | Benefit: light and easy to digest";
        let result = engine.normalize_output(text);
        assert_eq!(result.reason(), Some(UnchangedReason::NoDuplicates));
        assert_eq!(result.into_text(), text);
    }

    #[test]
    fn test_annotation_is_never_rewritten() {
        let engine = DedupEngine::global();
        let result = engine.normalize_output("Apple, apple | Benefit: and and ,");
        assert_eq!(result.into_text(), "Apple | Benefit: and and ,");
    }

    #[test]
    fn test_malformed_text_is_returned_as_is() {
        let engine = DedupEngine::global();
        let result = engine.normalize_output("Dal (1 katori with rice");
        assert!(matches!(result.reason(), Some(UnchangedReason::Malformed(_))));
    }
}
