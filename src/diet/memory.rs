// ABOUTME: Daily food memory recording every identity served on the current day
// ABOUTME: Cleared at each day boundary and owned by a single generation call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Daily Food Memory
//!
//! One memory belongs to one generation call. Each finished meal is recorded
//! as free text; the memory stores the identities the text mentions plus
//! canonical fragments for names the index does not know, so that a lookup can
//! still fall back to synonym-class comparison.

use crate::diet::dedup::split_annotation;
use crate::diet::index::{FoodIndex, IdentitySet};
use tracing::trace;

/// Foods already served on the current day
#[derive(Debug, Clone)]
pub struct DailyFoodMemory<'a> {
    index: &'a FoodIndex,
    day: Option<u32>,
    identities: IdentitySet,
    fragments: Vec<String>,
}

impl<'a> DailyFoodMemory<'a> {
    /// Empty memory bound to an index
    #[must_use]
    pub const fn new(index: &'a FoodIndex) -> Self {
        Self {
            index,
            day: None,
            identities: IdentitySet::new(),
            fragments: Vec::new(),
        }
    }

    /// Start a new day, forgetting everything recorded before
    pub fn reset(&mut self, day: u32) {
        self.day = Some(day);
        self.identities.clear();
        self.fragments.clear();
    }

    /// Current day, if any day has been started
    #[must_use]
    pub const fn current_day(&self) -> Option<u32> {
        self.day
    }

    /// Record the foods in a finished meal; ignored when `day` is not the current day
    pub fn record(&mut self, day: u32, text: &str) {
        if self.day != Some(day) {
            trace!(day, current = ?self.day, "Ignoring record for a non-current day");
            return;
        }
        let (body, _) = split_annotation(text);
        self.identities.extend(self.index.identities_in(body));

        let resolver = self.index.resolver();
        for piece in body.split([',', ';']) {
            for part in split_connectors(piece) {
                let canonical = resolver.canonicalize(part);
                if !canonical.is_empty() && !self.fragments.contains(&canonical) {
                    self.fragments.push(canonical);
                }
            }
        }
    }

    /// Whether a candidate food was already served today
    ///
    /// Known names compare by identity; unknown names fall back to synonym
    /// comparison against recorded fragments. A non-current `day` always
    /// answers `false`.
    #[must_use]
    pub fn was_used_today(&self, day: u32, candidate: &str) -> bool {
        if self.day != Some(day) {
            return false;
        }
        let identities = self.index.identities_of(candidate);
        if identities.is_empty() {
            let resolver = self.index.resolver();
            return self
                .fragments
                .iter()
                .any(|fragment| resolver.same_class(fragment, candidate));
        }
        self.contains_any(&identities)
    }

    /// Whether any of the identities was already served today
    #[must_use]
    pub fn contains_any(&self, identities: &IdentitySet) -> bool {
        !self.identities.is_disjoint(identities)
    }

    /// Identities served so far today
    #[must_use]
    pub const fn identities(&self) -> &IdentitySet {
        &self.identities
    }
}

fn split_connectors(piece: &str) -> Vec<&str> {
    let mut parts = vec![piece];
    for connector in [" with ", " and ", " or "] {
        parts = parts
            .into_iter()
            .flat_map(|part| part.split(connector))
            .collect();
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_identities_are_remembered() {
        let mut memory = DailyFoodMemory::new(FoodIndex::global());
        memory.reset(1);
        memory.record(1, "Moong dal khichdi (1 bowl) with cucumber raita (1 katori)");
        assert!(memory.was_used_today(1, "moong"));
        assert!(memory.was_used_today(1, "Green gram"));
        assert!(memory.was_used_today(1, "kheera"));
        assert!(!memory.was_used_today(1, "apple"));
    }

    #[test]
    fn test_reset_clears_previous_day() {
        let mut memory = DailyFoodMemory::new(FoodIndex::global());
        memory.reset(1);
        memory.record(1, "Apple (1 medium)");
        memory.reset(2);
        assert!(!memory.was_used_today(2, "apple"));
        assert!(memory.identities().is_empty());
    }

    #[test]
    fn test_non_current_day_is_ignored() {
        let mut memory = DailyFoodMemory::new(FoodIndex::global());
        memory.reset(3);
        memory.record(4, "Apple (1 medium)");
        assert!(!memory.was_used_today(3, "apple"));
        memory.record(3, "Apple (1 medium)");
        assert!(!memory.was_used_today(2, "apple"));
        assert!(memory.was_used_today(3, "apple"));
    }

    #[test]
    fn test_unknown_names_fall_back_to_fragments() {
        let mut memory = DailyFoodMemory::new(FoodIndex::global());
        memory.reset(1);
        memory.record(1, "Jackfruit biryani (1 cup) with mint chutney (1 tbsp)");
        assert!(memory.was_used_today(1, "jackfruit biryani"));
        assert!(!memory.was_used_today(1, "dragonfruit"));
    }

    #[test]
    fn test_annotation_is_not_a_food() {
        let mut memory = DailyFoodMemory::new(FoodIndex::global());
        memory.reset(1);
        memory.record(1, "Apple (1 medium) | Benefit: fibre for steady energy");
        assert_eq!(memory.identities().len(), 1);
    }

    #[test]
    fn test_memories_are_independent() {
        let mut first = DailyFoodMemory::new(FoodIndex::global());
        let mut second = DailyFoodMemory::new(FoodIndex::global());
        first.reset(1);
        second.reset(1);
        first.record(1, "Papaya (1 medium)");
        assert!(first.was_used_today(1, "papaya"));
        assert!(!second.was_used_today(1, "papaya"));
    }
}
