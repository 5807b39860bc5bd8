// ABOUTME: Parenthesis-aware tokenizer splitting meal text into food fragments
// ABOUTME: Splits on top-level commas and the connector words with/and/or
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use std::fmt;

/// Word or punctuation that introduced a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// First fragment
    Start,
    /// Introduced by a comma
    Comma,
    /// Introduced by "with"
    With,
    /// Introduced by "and"
    And,
    /// Introduced by "or"
    Or,
    /// Introduced by ", and" at the end of a list
    SerialAnd,
    /// Introduced by ", or" at the end of a list
    SerialOr,
}

impl Connector {
    /// Separator text placed before a fragment with this connector
    #[must_use]
    pub const fn joiner(self) -> &'static str {
        match self {
            Self::Start => " ",
            Self::Comma => ", ",
            Self::With => " with ",
            Self::And => " and ",
            Self::Or => " or ",
            Self::SerialAnd => ", and ",
            Self::SerialOr => ", or ",
        }
    }

    /// Whether the fragment is an alternative to the one before it
    #[must_use]
    pub const fn is_alternative(self) -> bool {
        matches!(self, Self::Or | Self::SerialOr)
    }

    fn after_comma(self) -> Self {
        match self {
            Self::And => Self::SerialAnd,
            Self::Or => Self::SerialOr,
            other => other,
        }
    }
}

/// A trimmed food fragment and the connector in front of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Connector preceding the fragment
    pub connector: Connector,
    /// Fragment text, trimmed
    pub text: String,
}

/// Parentheses that do not pair up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedText {
    /// A `)` with no open group
    UnexpectedClose,
    /// A `(` never closed
    Unclosed,
}

impl fmt::Display for MalformedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedClose => f.write_str("unbalanced closing parenthesis"),
            Self::Unclosed => f.write_str("unclosed parenthesis"),
        }
    }
}

const WORD_CONNECTORS: [(&str, Connector); 3] = [
    ("with ", Connector::With),
    ("and ", Connector::And),
    ("or ", Connector::Or),
];

/// Split text into fragments at top-level separators
///
/// Separators inside parentheses belong to the portion text and never split.
/// Empty fragments are skipped; the last connector seen before a non-empty
/// fragment is the one recorded.
///
/// # Errors
///
/// Returns [`MalformedText`] when parentheses are unbalanced.
pub fn split_fragments(text: &str) -> Result<Vec<Fragment>, MalformedText> {
    let lowered = text.to_ascii_lowercase();
    let bytes = lowered.as_bytes();
    let mut fragments = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0;
    let mut connector = Connector::Start;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth = depth.checked_sub(1).ok_or(MalformedText::UnexpectedClose)?,
            b',' if depth == 0 => {
                push_fragment(&mut fragments, &text[start..i], connector);
                connector = Connector::Comma;
                start = i + 1;
            }
            b' ' if depth == 0 => {
                let rest = &lowered[i + 1..];
                if let Some((word, next)) = WORD_CONNECTORS
                    .iter()
                    .find(|(word, _)| rest.starts_with(word))
                {
                    let pending = &text[start..i];
                    connector = if pending.trim().is_empty() && connector == Connector::Comma {
                        next.after_comma()
                    } else {
                        push_fragment(&mut fragments, pending, connector);
                        *next
                    };
                    i += word.len();
                    start = i + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    if depth != 0 {
        return Err(MalformedText::Unclosed);
    }
    push_fragment(&mut fragments, &text[start..], connector);
    Ok(fragments)
}

fn push_fragment(fragments: &mut Vec<Fragment>, raw: &str, connector: Connector) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        let connector = if fragments.is_empty() {
            Connector::Start
        } else {
            connector
        };
        fragments.push(Fragment {
            connector,
            text: trimmed.to_owned(),
        });
    }
}

/// Reassemble fragments with their original connectors
#[must_use]
pub fn join_fragments<'a>(fragments: impl IntoIterator<Item = &'a Fragment>) -> String {
    let mut out = String::new();
    for fragment in fragments {
        if !out.is_empty() {
            out.push_str(fragment.connector.joiner());
        }
        out.push_str(&fragment.text);
    }
    out
}

/// Join items as an English list: "a", "a and b", "a, b, and c"
#[must_use]
pub fn oxford_join(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_owned(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(fragments: &[Fragment]) -> Vec<&str> {
        fragments.iter().map(|f| f.text.as_str()).collect()
    }

    #[test]
    fn test_splits_on_commas_and_connectors() {
        let fragments =
            split_fragments("Jowar roti (2 medium), toor dal (1 katori) and lauki sabzi with curd")
                .unwrap();
        assert_eq!(
            texts(&fragments),
            vec!["Jowar roti (2 medium)", "toor dal (1 katori)", "lauki sabzi", "curd"]
        );
        assert_eq!(fragments[1].connector, Connector::Comma);
        assert_eq!(fragments[2].connector, Connector::And);
        assert_eq!(fragments[3].connector, Connector::With);
    }

    #[test]
    fn test_parentheses_protect_separators() {
        let fragments = split_fragments("Poha (with peanuts, lemon) or upma").unwrap();
        assert_eq!(texts(&fragments), vec!["Poha (with peanuts, lemon)", "upma"]);
        assert_eq!(fragments[1].connector, Connector::Or);
    }

    #[test]
    fn test_oxford_comma_is_preserved() {
        let text = "apple, pear, and guava";
        let fragments = split_fragments(text).unwrap();
        assert_eq!(texts(&fragments), vec!["apple", "pear", "guava"]);
        assert_eq!(fragments[2].connector, Connector::SerialAnd);
        assert_eq!(join_fragments(&fragments), text);
    }

    #[test]
    fn test_unbalanced_parentheses_are_rejected() {
        assert_eq!(split_fragments("dal (1 katori"), Err(MalformedText::Unclosed));
        assert_eq!(split_fragments("dal 1 katori)"), Err(MalformedText::UnexpectedClose));
    }

    #[test]
    fn test_words_containing_connectors_do_not_split() {
        let fragments = split_fragments("sandwich, orange, android").unwrap();
        assert_eq!(texts(&fragments), vec!["sandwich", "orange", "android"]);
    }

    #[test]
    fn test_join_round_trips_connectors() {
        let text = "Idli (2 medium) with sambar (1 katori), mint chutney or curd";
        let fragments = split_fragments(text).unwrap();
        assert_eq!(join_fragments(&fragments), text);
    }

    #[test]
    fn test_oxford_join() {
        assert_eq!(oxford_join(&["a"]), "a");
        assert_eq!(oxford_join(&["a", "b"]), "a and b");
        assert_eq!(oxford_join(&["a", "b", "c"]), "a, b, and c");
    }
}
