// ABOUTME: Food index mapping every known surface string to the food identities it denotes
// ABOUTME: Extracts identity mentions from free text using longest word-bounded matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Food Index
//!
//! The index is built once from every catalog name (unfiltered, so it does not
//! depend on a profile) plus every synonym-class spelling. Each surface maps to
//! a set of identities:
//!
//! - a synonym spelling denotes its class key,
//! - a catalog name denotes its own canonical form, its explicit extra
//!   identities, and the identities of every other surface it contains on word
//!   boundaries ("moong dal khichdi" also denotes moong).
//!
//! Identity extraction from text selects the longest non-overlapping surfaces,
//! so "masala chaas" is read as one dish rather than as "chaas" alone.

use crate::diet::catalogs;
use crate::diet::synonyms::{contains_word, is_word_bounded, SynonymResolver};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::iter;
use std::sync::LazyLock;

/// Canonical food identity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodIdentity(String);

impl FoodIdentity {
    /// Wrap an already-canonical key
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Canonical key
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of identities
pub type IdentitySet = BTreeSet<FoodIdentity>;

/// A surface found in text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Identities the surface denotes
    pub identities: IdentitySet,
}

#[derive(Debug, Clone)]
struct Surface {
    text: String,
    identities: IdentitySet,
}

static GLOBAL_INDEX: LazyLock<FoodIndex> =
    LazyLock::new(|| FoodIndex::build(catalogs::all_seed_names(), SynonymResolver::default()));

/// Surface-to-identity index over all catalog names and synonym spellings
#[derive(Debug, Clone)]
pub struct FoodIndex {
    /// Sorted longest first
    surfaces: Vec<Surface>,
    resolver: SynonymResolver,
}

impl FoodIndex {
    /// Index over every built-in catalog
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_INDEX
    }

    /// Build an index from `(name, extra identities)` pairs
    pub fn build<'a>(
        names: impl IntoIterator<Item = (&'a str, &'a [&'a str])>,
        resolver: SynonymResolver,
    ) -> Self {
        let mut primary: BTreeMap<String, IdentitySet> = BTreeMap::new();

        for (key, spellings) in SynonymResolver::classes() {
            for spelling in spellings.iter().chain(iter::once(&key)) {
                primary
                    .entry((*spelling).to_owned())
                    .or_default()
                    .insert(FoodIdentity::new(key));
            }
        }

        let mut catalog_names: Vec<String> = Vec::new();
        for (name, also) in names {
            let surface = name.trim().to_lowercase();
            if surface.is_empty() {
                continue;
            }
            let identities = primary.entry(surface.clone()).or_default();
            identities.insert(FoodIdentity::new(resolver.canonicalize(name)));
            for extra in also {
                identities.insert(FoodIdentity::new(resolver.canonicalize(extra)));
            }
            catalog_names.push(surface);
        }

        let mut derived = primary.clone();
        for name in &catalog_names {
            let Some(own) = derived.get_mut(name) else {
                continue;
            };
            for (other, identities) in &primary {
                if other != name && contains_word(name, other) {
                    own.extend(identities.iter().cloned());
                }
            }
        }

        let mut surfaces: Vec<Surface> = derived
            .into_iter()
            .map(|(text, identities)| Surface { text, identities })
            .collect();
        surfaces.sort_by(|a, b| b.text.len().cmp(&a.text.len()).then_with(|| a.text.cmp(&b.text)));

        Self { surfaces, resolver }
    }

    /// Resolver used for canonical forms
    #[must_use]
    pub const fn resolver(&self) -> &SynonymResolver {
        &self.resolver
    }

    /// Longest non-overlapping surface mentions in `text`, in text order
    #[must_use]
    pub fn mentions(&self, text: &str) -> Vec<Mention> {
        // ASCII lowercasing keeps byte offsets aligned with `text`
        let lowered = text.to_ascii_lowercase();
        let mut taken: Vec<(usize, usize, &IdentitySet)> = Vec::new();

        for surface in &self.surfaces {
            for (start, _) in lowered.match_indices(surface.text.as_str()) {
                let end = start + surface.text.len();
                if !is_word_bounded(&lowered, start, end) {
                    continue;
                }
                let overlaps = taken.iter().any(|(s, e, _)| start < *e && *s < end);
                if !overlaps {
                    taken.push((start, end, &surface.identities));
                }
            }
        }

        taken.sort_by_key(|(start, _, _)| *start);
        taken
            .into_iter()
            .map(|(start, end, identities)| Mention {
                start,
                end,
                identities: identities.clone(),
            })
            .collect()
    }

    /// Union of identities mentioned anywhere in `text`
    #[must_use]
    pub fn identities_in(&self, text: &str) -> IdentitySet {
        self.mentions(text)
            .into_iter()
            .flat_map(|mention| mention.identities)
            .collect()
    }

    /// Identities of a single food name (empty when it mentions nothing known)
    #[must_use]
    pub fn identities_of(&self, name: &str) -> IdentitySet {
        let canonical = self.resolver.canonicalize(name);
        self.surfaces
            .iter()
            .find(|surface| surface.text == canonical)
            .map_or_else(|| self.identities_in(&canonical), |surface| surface.identities.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(index: &FoodIndex, text: &str) -> Vec<String> {
        index
            .identities_in(text)
            .into_iter()
            .map(|id| id.as_str().to_owned())
            .collect()
    }

    #[test]
    fn test_compound_names_inherit_contained_identities() {
        let index = FoodIndex::global();
        let identities = ids(index, "moong dal khichdi");
        assert!(identities.contains(&"moong dal khichdi".to_owned()));
        assert!(identities.contains(&"moong".to_owned()));
    }

    #[test]
    fn test_synonym_spellings_share_identity() {
        let index = FoodIndex::global();
        assert_eq!(ids(index, "a bowl of dahi"), vec!["curd".to_owned()]);
        assert_eq!(ids(index, "Yogurt"), vec!["curd".to_owned()]);
    }

    #[test]
    fn test_longest_match_wins() {
        let index = FoodIndex::global();
        let mentions = index.mentions("Masala chaas (1 glass)");
        assert_eq!(mentions.len(), 1);
        assert_eq!((mentions[0].start, mentions[0].end), (0, 12));
        assert!(mentions[0]
            .identities
            .contains(&FoodIdentity::new("buttermilk")));
    }

    #[test]
    fn test_explicit_extra_identities() {
        let index = FoodIndex::global();
        assert!(index.identities_of("sambar").contains(&FoodIdentity::new("toor")));
        assert!(index
            .identities_of("Pesarattu (2 medium)")
            .contains(&FoodIdentity::new("moong")));
    }

    #[test]
    fn test_unknown_text_has_no_identities() {
        let index = FoodIndex::global();
        assert!(index.identities_in("a balanced home-cooked meal").is_empty());
        assert!(index.identities_of("dragonfruit smoothie").is_empty());
    }

    #[test]
    fn test_build_from_custom_names() {
        let index = FoodIndex::build([("jackfruit curry", &[][..])], SynonymResolver::default());
        assert_eq!(ids(&index, "jackfruit curry"), vec!["jackfruit curry".to_owned()]);
        assert!(ids(&index, "palak").contains(&"spinach".to_owned()));
    }
}
