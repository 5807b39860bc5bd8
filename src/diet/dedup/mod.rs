// ABOUTME: Three-stage deduplication engine for meal descriptions
// ABOUTME: Guarded append, fragment-level duplicate removal, and final output normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Deduplication Engine
//!
//! Three independent passes keep a meal description free of repeated foods:
//!
//! 1. [`DedupEngine::add_without_duplication`] guards every append during
//!    composition.
//! 2. [`DedupEngine::remove_duplicate_food_items`] splits a composed meal into
//!    fragments and drops later fragments that repeat an earlier food.
//! 3. [`DedupEngine::normalize_output`] runs once per finished meal and repairs
//!    duplicate shapes the first two passes cannot see (repeated alternatives,
//!    doubled portions, stray connectors).
//!
//! Every pass returns a [`Cleaned`] value: either the rewritten text or the
//! original text together with the reason nothing changed. None of them fail.

mod append;
mod fragments;
mod normalize;
mod phrases;

pub use fragments::{join_fragments, oxford_join, split_fragments, Connector, Fragment, MalformedText};

use crate::diet::index::{FoodIndex, IdentitySet};
use crate::diet::synonyms::SynonymResolver;
use std::fmt;

/// Text used when every fragment of a meal collapses away
pub const FALLBACK_PHRASE: &str = "A light home-style meal";

/// Separator between a meal description and its health-benefit annotation
pub const ANNOTATION_SEPARATOR: &str = " | ";

/// Split a meal into its description and optional annotation
#[must_use]
pub fn split_annotation(text: &str) -> (&str, Option<&str>) {
    text.split_once(ANNOTATION_SEPARATOR)
        .map_or((text, None), |(body, note)| (body, Some(note)))
}

/// Why a pass returned its input untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnchangedReason {
    /// Nothing was duplicated
    NoDuplicates,
    /// The addition already appears in the text
    AlreadyPresent,
    /// The input text was empty
    EmptyInput,
    /// The addition was empty
    EmptyAddition,
    /// The text could not be split into fragments
    Malformed(MalformedText),
}

impl fmt::Display for UnchangedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDuplicates => f.write_str("no duplicates"),
            Self::AlreadyPresent => f.write_str("already present"),
            Self::EmptyInput => f.write_str("empty input"),
            Self::EmptyAddition => f.write_str("empty addition"),
            Self::Malformed(problem) => write!(f, "malformed text: {problem}"),
        }
    }
}

/// Result of a deduplication pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cleaned {
    /// The pass rewrote the text
    Changed(String),
    /// The pass left the text as it was
    Unchanged {
        /// Original text
        text: String,
        /// Why nothing changed
        reason: UnchangedReason,
    },
}

impl Cleaned {
    fn unchanged(text: &str, reason: UnchangedReason) -> Self {
        Self::Unchanged {
            text: text.to_owned(),
            reason,
        }
    }

    /// Resulting text, rewritten or not
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Changed(text) | Self::Unchanged { text, .. } => text,
        }
    }

    /// Borrow the resulting text
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Changed(text) | Self::Unchanged { text, .. } => text,
        }
    }

    /// Whether the pass rewrote the text
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// Reason the text was left alone, if it was
    #[must_use]
    pub const fn reason(&self) -> Option<UnchangedReason> {
        match self {
            Self::Changed(_) => None,
            Self::Unchanged { reason, .. } => Some(*reason),
        }
    }
}

/// Identity key of one fragment
#[derive(Debug, Clone)]
struct FragmentKey {
    identities: IdentitySet,
    canonical: String,
}

impl FragmentKey {
    fn is_blank(&self) -> bool {
        self.identities.is_empty() && self.canonical.is_empty()
    }
}

/// Deduplication passes sharing one index and resolver
#[derive(Debug, Clone, Copy)]
pub struct DedupEngine<'a> {
    index: &'a FoodIndex,
    resolver: SynonymResolver,
}

impl<'a> DedupEngine<'a> {
    /// Engine over an index, comparing unknown names with `resolver`
    #[must_use]
    pub const fn new(index: &'a FoodIndex, resolver: SynonymResolver) -> Self {
        Self { index, resolver }
    }

    /// Engine over the built-in index with default matching
    #[must_use]
    pub fn global() -> DedupEngine<'static> {
        DedupEngine::new(FoodIndex::global(), SynonymResolver::default())
    }

    /// Index the engine resolves identities with
    #[must_use]
    pub const fn index(&self) -> &'a FoodIndex {
        self.index
    }

    fn key_for(&self, fragment: &str) -> FragmentKey {
        FragmentKey {
            identities: self.index.identities_in(fragment),
            canonical: self.resolver.canonicalize(fragment),
        }
    }

    /// Whether two fragment keys name the same food
    fn same_food(&self, a: &FragmentKey, b: &FragmentKey) -> bool {
        if a.is_blank() || b.is_blank() {
            return false;
        }
        if !a.identities.is_empty() && !b.identities.is_empty() {
            return !a.identities.is_disjoint(&b.identities);
        }
        self.resolver.same_class(&a.canonical, &b.canonical)
    }
}
