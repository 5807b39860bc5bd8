// ABOUTME: Synonym resolver mapping food-name spelling variants onto canonical identities
// ABOUTME: Canonicalizes names (case, portions, quantities) and tests class equivalence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Synonym Resolver
//!
//! Regional menus spell the same ingredient many ways (curd, dahi, yogurt).
//! The resolver folds a surface string to a canonical key and decides whether
//! two names refer to the same food.
//!
//! Equivalence is layered:
//! 1. identical canonical strings,
//! 2. membership in the same explicit synonym class,
//! 3. word-aligned containment of one name in the other (or of a synonym of
//!    the shorter name in the longer one), only when the contained name has at
//!    least `min_containment_len` characters. Short names such as "pea" would
//!    otherwise match "peanut chutney".

use std::collections::HashMap;
use std::sync::LazyLock;

/// Default minimum length for containment matches
pub const DEFAULT_MIN_CONTAINMENT_LEN: usize = 4;

/// Explicit synonym classes: canonical key followed by its surface spellings
const SYNONYM_CLASSES: &[(&str, &[&str])] = &[
    ("curd", &["curd", "dahi", "yogurt", "yoghurt"]),
    ("buttermilk", &["buttermilk", "chaas", "chhaas", "chhachh", "mattha"]),
    ("paneer", &["paneer", "cottage cheese", "chhena"]),
    ("milk", &["milk", "doodh"]),
    ("moong", &["moong", "mung", "green gram"]),
    ("masoor", &["masoor", "red lentil", "red lentils"]),
    ("toor", &["toor", "arhar", "tuvar", "pigeon pea", "pigeon peas"]),
    ("urad", &["urad", "black gram"]),
    ("chana", &["chana", "chickpea", "chickpeas", "chole", "cholar", "bengal gram"]),
    ("rajma", &["rajma", "kidney bean", "kidney beans"]),
    ("lobia", &["lobia", "black-eyed peas", "chawli"]),
    ("besan", &["besan", "gram flour"]),
    ("spinach", &["spinach", "palak"]),
    ("fenugreek", &["fenugreek", "methi"]),
    ("okra", &["okra", "bhindi", "lady finger"]),
    ("brinjal", &["brinjal", "baingan", "begun", "vangi", "eggplant"]),
    ("bottle gourd", &["bottle gourd", "lauki", "lau", "dudhi"]),
    ("ridge gourd", &["ridge gourd", "turai", "tori"]),
    ("bitter gourd", &["bitter gourd", "karela"]),
    ("cauliflower", &["cauliflower", "gobi", "gobhi"]),
    ("cabbage", &["cabbage"]),
    ("green peas", &["green peas", "matar", "peas"]),
    ("pumpkin", &["pumpkin", "kaddu"]),
    ("cucumber", &["cucumber", "kheera"]),
    ("corn", &["corn", "makki", "makka", "bhutta"]),
    ("ragi", &["ragi", "finger millet", "nachni"]),
    ("bajra", &["bajra", "pearl millet"]),
    ("jowar", &["jowar", "sorghum"]),
    ("foxtail millet", &["foxtail millet", "kangni"]),
    ("quinoa", &["quinoa"]),
    ("oats", &["oats"]),
    ("poha", &["poha", "flattened rice", "aval", "chire", "chirer"]),
    ("semolina", &["semolina", "suji", "sooji", "rava"]),
    ("broken wheat", &["broken wheat", "dalia", "daliya"]),
    ("makhana", &["makhana", "fox nuts", "lotus seeds"]),
    ("peanut", &["peanut", "peanuts", "groundnut", "moongphali"]),
    ("flaxseed", &["flaxseed", "flaxseeds", "alsi"]),
    ("chia", &["chia", "chia seeds"]),
    ("banana", &["banana", "kela"]),
    ("jeera", &["jeera", "cumin"]),
    ("tofu", &["tofu"]),
    ("soya chunks", &["soya chunks", "soy chunks", "soya nuggets"]),
    ("mushroom", &["mushroom", "mushrooms"]),
    ("capsicum", &["capsicum", "bell pepper", "shimla mirch"]),
    ("mustard greens", &["mustard greens", "sarson"]),
    ("mint", &["mint", "pudina"]),
    ("sambar", &["sambar", "sambhar"]),
    ("idli", &["idli", "idly"]),
    ("chicken", &["chicken", "murgh"]),
    ("fish", &["fish", "machli", "macher", "meen"]),
    ("egg", &["egg", "eggs", "anda", "dimer"]),
    ("mutton", &["mutton", "goat meat", "mangsho"]),
    ("prawn", &["prawn", "prawns", "shrimp", "jhinga", "chingri"]),
    ("potato", &["potato", "aloo"]),
    ("onion", &["onion", "pyaz", "kanda"]),
    ("garlic", &["garlic", "lehsun"]),
    ("ginger", &["ginger", "adrak"]),
];

/// Surface spelling -> canonical key
static SURFACE_TO_KEY: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (key, surfaces) in SYNONYM_CLASSES {
        map.insert(*key, *key);
        for surface in *surfaces {
            map.insert(*surface, *key);
        }
    }
    map
});

/// Leading tokens dropped after a numeric quantity ("2 cups of ...")
const QUANTITY_UNITS: &[&str] = &[
    "cup", "cups", "katori", "katoris", "bowl", "bowls", "glass", "glasses", "tbsp", "tsp", "g",
    "gm", "grams", "piece", "pieces", "small", "medium", "large", "slice", "slices", "whole",
];

/// Resolves spelling variants of food names to canonical identities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynonymResolver {
    min_containment_len: usize,
}

impl Default for SynonymResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CONTAINMENT_LEN)
    }
}

impl SynonymResolver {
    /// Create a resolver with the given minimum containment length
    #[must_use]
    pub const fn new(min_containment_len: usize) -> Self {
        Self {
            min_containment_len,
        }
    }

    /// Minimum length a name needs before containment counts as a match
    #[must_use]
    pub const fn min_containment_len(&self) -> usize {
        self.min_containment_len
    }

    /// All explicit synonym classes as `(key, surfaces)` pairs
    pub fn classes() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        SYNONYM_CLASSES.iter().copied()
    }

    /// Canonical key of a name's synonym class, if the whole name is a known spelling
    #[must_use]
    pub fn class_of(canonical: &str) -> Option<&'static str> {
        SURFACE_TO_KEY.get(canonical).copied()
    }

    /// All spellings in the class keyed by `key` (empty when `key` is not a class)
    #[must_use]
    pub fn surfaces_of(key: &str) -> &'static [&'static str] {
        SYNONYM_CLASSES
            .iter()
            .find(|(class_key, _)| *class_key == key)
            .map_or(&[], |(_, surfaces)| *surfaces)
    }

    /// Fold a food name to its canonical form
    ///
    /// Lowercases, removes parenthetical portions or descriptors, drops leading
    /// numeric quantities with their unit, strips punctuation, collapses
    /// whitespace, and maps a known spelling to its class key.
    #[must_use]
    pub fn canonicalize(&self, name: &str) -> String {
        let lowered = strip_parentheticals(&name.to_lowercase());
        let cleaned: String = lowered
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '\'' || c == '/' || c == '.' {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        let mut tokens: Vec<&str> = cleaned
            .split_whitespace()
            .map(|token| token.trim_matches(|c: char| c == '.' || c == '-'))
            .filter(|token| !token.is_empty())
            .collect();

        let mut dropped_quantity = false;
        while tokens.first().is_some_and(|token| is_quantity(token)) {
            tokens.remove(0);
            dropped_quantity = true;
        }
        if dropped_quantity {
            if tokens.first().is_some_and(|token| QUANTITY_UNITS.contains(token)) {
                tokens.remove(0);
            }
            if tokens.first() == Some(&"of") {
                tokens.remove(0);
            }
        }
        if matches!(tokens.first(), Some(&"a" | &"an" | &"some")) && tokens.len() > 1 {
            tokens.remove(0);
        }

        let joined = tokens.join(" ");
        Self::class_of(&joined).map_or(joined, ToOwned::to_owned)
    }

    /// Whether two names denote the same food
    #[must_use]
    pub fn same_class(&self, a: &str, b: &str) -> bool {
        let ca = self.canonicalize(a);
        let cb = self.canonicalize(b);
        if ca.is_empty() || cb.is_empty() {
            return false;
        }
        if ca == cb {
            return true;
        }
        let (shorter, longer) = if ca.len() <= cb.len() {
            (&ca, &cb)
        } else {
            (&cb, &ca)
        };
        self.contained_in(shorter, longer)
    }

    /// Word-aligned containment of `needle` (or one of its synonyms) in `haystack`
    #[must_use]
    pub fn contained_in(&self, needle: &str, haystack: &str) -> bool {
        let long_enough = |candidate: &str| candidate.chars().count() >= self.min_containment_len;

        if long_enough(needle) && contains_word(haystack, needle) {
            return true;
        }
        Self::surfaces_of(needle)
            .iter()
            .any(|surface| long_enough(surface) && contains_word(haystack, surface))
    }
}

/// Word-bounded substring test on already-lowercased text
#[must_use]
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack
        .match_indices(needle)
        .any(|(start, _)| is_word_bounded(haystack, start, start + needle.len()))
}

/// Whether `text[start..end]` is delimited by non-alphanumeric characters
#[must_use]
pub fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .is_none_or(|c| !c.is_alphanumeric());
    before_ok && after_ok
}

fn is_quantity(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '/' | '.' | '½' | '¼' | '¾' | '⅓'))
}

/// Remove every balanced parenthetical group; an unclosed group is cut off
fn strip_parentheticals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0_usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}
