// ABOUTME: Meal selector trait and the per-meal context every selector composes against
// ABOUTME: Rotation arithmetic, freshness probing, serving text, enrichment, and finishing passes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Meal Selectors
//!
//! One [`MealSelector`] per slot turns the filtered catalogs into a meal
//! description for a given day. Selectors never touch shared state: all
//! inputs arrive through a [`MealContext`], which also tracks the identities
//! drafted into the meal being composed so that a single meal never names
//! the same food twice.
//!
//! Index choice is `(day_index * a + b + pattern_offset) mod len` with a
//! distinct `(a, b)` per ingredient slot, followed by a forward probe that
//! skips anything already eaten today or already drafted into this meal.

/// Health-benefit annotations appended to composed meals
pub mod annotations;
mod breakfast;
mod dinner;
mod lunch;
mod non_veg;
mod snacks;

pub use annotations::{health_benefit, DEFAULT_BENEFIT};
pub use breakfast::BreakfastSelector;
pub use dinner::DinnerSelector;
pub use lunch::LunchSelector;
pub use snacks::{EveningSnackSelector, MidMorningSelector};

use crate::config::ScheduleConfig;
use crate::diet::catalogs::{CatalogEntry, EnrichmentKind, FoodCatalogs};
use crate::diet::dedup::{oxford_join, DedupEngine, ANNOTATION_SEPARATOR};
use crate::diet::index::IdentitySet;
use crate::diet::memory::DailyFoodMemory;
use crate::diet::patterns::{PatternOffsets, RotationFamily};
use crate::diet::portions::{PortionCategory, PortionDescriptor, PortionGoal, PortionSizer};
use nutriplan_core::models::{MealSlot, UserProfile};
use tracing::debug;

/// Composes one meal of a day
pub trait MealSelector {
    /// Slot this selector fills
    fn slot(&self) -> MealSlot;

    /// Compose the finished meal description, annotation included
    fn compose(&self, ctx: &mut MealContext<'_>) -> String;
}

/// Selector responsible for a slot
#[must_use]
pub fn selector_for(slot: MealSlot) -> &'static dyn MealSelector {
    match slot {
        MealSlot::Breakfast => &BreakfastSelector,
        MealSlot::MidMorningSnack => &MidMorningSelector,
        MealSlot::Lunch => &LunchSelector,
        MealSlot::EveningSnack => &EveningSnackSelector,
        MealSlot::Dinner => &DinnerSelector,
    }
}

/// Phrase used when the catalogs left nothing to choose from for a slot
#[must_use]
pub const fn generic_phrase(slot: MealSlot) -> &'static str {
    match slot {
        MealSlot::Breakfast => "Seasonal home-style breakfast bowl",
        MealSlot::MidMorningSnack => "Seasonal whole fruit of choice",
        MealSlot::Lunch => "Home-style thali with seasonal sides",
        MealSlot::EveningSnack => "Light homemade snack",
        MealSlot::Dinner => "Light home-style supper",
    }
}

/// Multiplier, increment and pattern family for one ingredient slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    /// Day-index multiplier
    pub multiplier: usize,
    /// Constant increment
    pub increment: usize,
    /// Pattern family whose offset is added
    pub family: RotationFamily,
}

impl Rotation {
    /// Rotation with the given constants
    #[must_use]
    pub const fn new(multiplier: usize, increment: usize, family: RotationFamily) -> Self {
        Self {
            multiplier,
            increment,
            family,
        }
    }
}

/// Per-call inputs shared by every meal of every day
#[derive(Debug, Clone, Copy)]
pub struct PlanInputs<'a> {
    /// Profile the plan is generated for
    pub profile: &'a UserProfile,
    /// Catalogs filtered for the profile
    pub catalogs: &'a FoodCatalogs,
    /// Pattern offsets for the plan length
    pub offsets: &'a PatternOffsets,
    /// Deduplication passes
    pub dedup: DedupEngine<'a>,
    /// Regional, non-vegetarian and enrichment cadences
    pub schedule: &'a ScheduleConfig,
}

/// Everything a selector may consult while composing one meal
#[derive(Debug)]
pub struct MealContext<'a> {
    inputs: &'a PlanInputs<'a>,
    memory: &'a DailyFoodMemory<'a>,
    day: u32,
    portion_goal: PortionGoal,
    draft: IdentitySet,
}

impl<'a> MealContext<'a> {
    /// Context for one meal of `day` (1-based)
    #[must_use]
    pub fn new(inputs: &'a PlanInputs<'a>, memory: &'a DailyFoodMemory<'a>, day: u32) -> Self {
        Self {
            inputs,
            memory,
            day,
            portion_goal: PortionGoal::from(inputs.profile.fitness_goal),
            draft: IdentitySet::new(),
        }
    }

    /// Day number, 1-based
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Day index, 0-based
    #[must_use]
    pub const fn day_index(&self) -> usize {
        self.day.saturating_sub(1) as usize
    }

    /// Profile being planned for
    #[must_use]
    pub const fn profile(&self) -> &'a UserProfile {
        self.inputs.profile
    }

    /// Filtered catalogs
    #[must_use]
    pub const fn catalogs(&self) -> &'a FoodCatalogs {
        self.inputs.catalogs
    }

    /// Cadence schedule
    #[must_use]
    pub const fn schedule(&self) -> &'a ScheduleConfig {
        self.inputs.schedule
    }

    /// Portion goal derived from the fitness goal
    #[must_use]
    pub const fn portion_goal(&self) -> PortionGoal {
        self.portion_goal
    }

    /// Starting index for a rotation over `len` entries
    #[must_use]
    pub fn rotate(&self, len: usize, rotation: Rotation) -> usize {
        if len == 0 {
            return 0;
        }
        let day_index = self.day_index();
        let offset = self.inputs.offsets.offset(rotation.family, day_index);
        (day_index * rotation.multiplier + rotation.increment + offset) % len
    }

    /// Whether any of the identities was eaten today or drafted into this meal
    #[must_use]
    pub fn is_taken(&self, identities: &IdentitySet) -> bool {
        self.memory.contains_any(identities) || !self.draft.is_disjoint(identities)
    }

    /// Identities the index resolves for a free-text name
    #[must_use]
    pub fn identities_of(&self, name: &str) -> IdentitySet {
        self.inputs.dedup.index().identities_of(name)
    }

    /// Whether a free-text food name was eaten today or drafted into this meal
    #[must_use]
    pub fn is_name_taken(&self, name: &str) -> bool {
        let identities = self.identities_of(name);
        if identities.is_empty() {
            self.memory.was_used_today(self.day, name)
        } else {
            self.is_taken(&identities)
        }
    }

    /// Rotated entry, probing forward past taken ones
    ///
    /// Falls back to the first rotated entry when every entry is taken.
    /// `None` only for an empty catalog.
    #[must_use]
    pub fn pick<'c>(&self, entries: &'c [CatalogEntry], rotation: Rotation) -> Option<&'c CatalogEntry> {
        let start = self.rotate(entries.len(), rotation);
        self.pick_fresh(entries, rotation).or_else(|| {
            if !entries.is_empty() {
                debug!(day = self.day, "Every catalog entry already used today; keeping rotation choice");
            }
            entries.get(start)
        })
    }

    /// Rotated entry that is not yet taken, if any
    #[must_use]
    pub fn pick_fresh<'c>(&self, entries: &'c [CatalogEntry], rotation: Rotation) -> Option<&'c CatalogEntry> {
        let start = self.rotate(entries.len(), rotation);
        (0..entries.len())
            .map(|step| &entries[(start + step) % entries.len()])
            .find(|entry| !self.is_taken(&entry.identities))
    }

    /// Record identities as part of the meal being composed
    pub fn take(&mut self, identities: &IdentitySet) {
        self.draft.extend(identities.iter().cloned());
    }

    /// Serving size for a category under the profile's goal and gender
    #[must_use]
    pub const fn portion(&self, category: PortionCategory) -> PortionDescriptor {
        PortionSizer::size_for(category, self.portion_goal, self.inputs.profile.gender)
    }

    /// "name (portion)" for an entry, drafting its identities
    pub fn serve(&mut self, entry: &CatalogEntry) -> String {
        self.take(&entry.identities);
        format!("{} ({})", entry.name, self.portion(entry.portion))
    }

    /// Pick from a group and serve it; `None` for an empty group
    pub fn serve_pick(&mut self, entries: &[CatalogEntry], rotation: Rotation) -> Option<String> {
        let entry = self.pick(entries, rotation)?;
        Some(self.serve(entry))
    }

    /// Append one enrichment item through the guarded append
    ///
    /// Candidates are probed in rotation order; an item is only added when
    /// it was not eaten today, not drafted into this meal and not already
    /// named by the text.
    pub fn enrich(&mut self, text: String, kind: EnrichmentKind, rotation: Rotation) -> String {
        let entries = self.inputs.catalogs.enrichment(kind);
        if entries.is_empty() {
            return text;
        }
        let start = self.rotate(entries.len(), rotation);
        for step in 0..entries.len() {
            let item = &entries[(start + step) % entries.len()];
            if self.is_taken(&item.entry.identities) {
                continue;
            }
            let addition = format!("{} ({})", item.entry.name, item.portion);
            let cleaned = self.inputs.dedup.add_without_duplication(&text, &addition);
            if cleaned.is_changed() {
                self.take(&item.entry.identities);
                return cleaned.into_text();
            }
        }
        debug!(day = self.day, ?kind, "No enrichment item fits this meal");
        text
    }

    /// Fragment cleanup, capitalization and the health-benefit annotation
    #[must_use]
    pub fn finish(&self, text: &str) -> String {
        let body = self.inputs.dedup.remove_duplicate_food_items(text).into_text();
        let body = capitalize(&body);
        let benefit = health_benefit(&body);
        format!("{body}{ANNOTATION_SEPARATOR}{benefit}")
    }
}

/// Present items as an English list, skipping missing ones
fn list(items: impl IntoIterator<Item = Option<String>>) -> String {
    let items: Vec<String> = items.into_iter().flatten().collect();
    let items: Vec<&str> = items.iter().map(String::as_str).collect();
    oxford_join(&items)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::diet::catalogs::FoodGroup;
    use crate::diet::index::FoodIndex;
    use nutriplan_core::models::{DietaryPreference, FitnessGoal, Gender, Region};

    fn inputs_for<'a>(
        profile: &'a UserProfile,
        catalogs: &'a FoodCatalogs,
        offsets: &'a PatternOffsets,
        schedule: &'a ScheduleConfig,
    ) -> PlanInputs<'a> {
        PlanInputs {
            profile,
            catalogs,
            offsets,
            dedup: DedupEngine::global(),
            schedule,
        }
    }

    #[test]
    fn test_every_slot_composes_an_annotated_meal() {
        let profile = UserProfile::new(
            DietaryPreference::Vegetarian,
            Gender::Female,
            62.0,
            FitnessGoal::Maintenance,
        )
        .with_region(Region::South);
        let catalogs = FoodCatalogs::for_profile(&profile, FoodIndex::global());
        let offsets = PatternOffsets::generate(75, 15);
        let config = PlannerConfig::default();
        let inputs = inputs_for(&profile, &catalogs, &offsets, &config.schedule);
        let mut memory = DailyFoodMemory::new(FoodIndex::global());
        memory.reset(1);

        for slot in MealSlot::ORDER {
            let selector = selector_for(slot);
            assert_eq!(selector.slot(), slot);
            let text = {
                let mut ctx = MealContext::new(&inputs, &memory, 1);
                selector.compose(&mut ctx)
            };
            assert!(text.contains(ANNOTATION_SEPARATOR), "{slot}: {text}");
            assert!(text.starts_with(char::is_uppercase), "{slot}: {text}");
            memory.record(1, &text);
        }
    }

    #[test]
    fn test_pick_skips_foods_eaten_today() {
        let profile = UserProfile::new(
            DietaryPreference::Vegetarian,
            Gender::Male,
            70.0,
            FitnessGoal::Maintenance,
        );
        let catalogs = FoodCatalogs::for_profile(&profile, FoodIndex::global());
        let offsets = PatternOffsets::generate(75, 15);
        let config = PlannerConfig::default();
        let inputs = inputs_for(&profile, &catalogs, &offsets, &config.schedule);
        let fruits = catalogs.group(FoodGroup::Fruit);
        let rotation = Rotation::new(7, 2, RotationFamily::Breakfast);

        let mut memory = DailyFoodMemory::new(FoodIndex::global());
        memory.reset(1);
        let first = {
            let ctx = MealContext::new(&inputs, &memory, 1);
            ctx.pick(fruits, rotation).map(|entry| entry.name)
        };
        let first = first.unwrap();
        memory.record(1, first);
        let ctx = MealContext::new(&inputs, &memory, 1);
        let second = ctx.pick(fruits, rotation).unwrap();
        assert_ne!(second.name, first);
    }

    #[test]
    fn test_empty_catalog_yields_nothing() {
        let profile = UserProfile::new(
            DietaryPreference::Vegan,
            Gender::Female,
            55.0,
            FitnessGoal::WeightLoss,
        );
        let catalogs = FoodCatalogs::for_profile(&profile, FoodIndex::global());
        let offsets = PatternOffsets::generate(75, 15);
        let config = PlannerConfig::default();
        let inputs = inputs_for(&profile, &catalogs, &offsets, &config.schedule);
        let memory = DailyFoodMemory::new(FoodIndex::global());
        let ctx = MealContext::new(&inputs, &memory, 1);
        let rotation = Rotation::new(1, 0, RotationFamily::Lunch);
        assert!(ctx.pick(&[], rotation).is_none());
        assert_eq!(ctx.rotate(0, rotation), 0);
    }

    #[test]
    fn test_generic_phrases_name_no_food() {
        for slot in MealSlot::ORDER {
            assert!(
                FoodIndex::global().identities_in(generic_phrase(slot)).is_empty(),
                "{slot}"
            );
        }
    }
}
