// ABOUTME: Food catalogs for every meal role, regional specialties, non-veg dishes, and enrichment items
// ABOUTME: Builds the per-profile filtered view consumed by the meal selectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Food Catalogs
//!
//! Static seed data lives in the submodules as `const` arrays. A
//! [`FoodCatalogs`] value is the filtered view for one profile: every entry has
//! passed the dietary-preference and allergy exclusions and carries its
//! pre-computed food identities, so selectors never re-derive them.
//!
//! Catalog names are lowercase and never contain list separators (commas or
//! the words "with", "and", "or"); the deduplication engine relies on that.

mod allergens;
mod data;
mod enrichment;
mod non_veg;
mod regional;

pub use allergens::{DietFilter, DAIRY_TERMS, JAIN_EXCLUDED_TERMS};
pub use enrichment::{EnrichmentKind, EnrichmentSeed};
pub use non_veg::{generic_dish, CookingMethod, NonVegType};

use crate::diet::index::{FoodIndex, IdentitySet};
use crate::diet::portions::PortionCategory;
use bitflags::bitflags;
use nutriplan_core::models::UserProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

bitflags! {
    /// Dietary attributes of a catalog entry used by exclusion rules
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DietTags: u8 {
        /// Contains milk products
        const DAIRY = 0b0000_0001;
        /// Contains onion, garlic, or root vegetables
        const ROOT = 0b0000_0010;
        /// Contains wheat, barley, or semolina
        const GLUTEN = 0b0000_0100;
        /// Contains peanuts or tree nuts
        const NUTS = 0b0000_1000;
        /// Contains soy
        const SOY = 0b0001_0000;
    }
}

/// Static catalog record
#[derive(Debug, Clone, Copy)]
pub struct FoodSeed {
    /// Lowercase display name
    pub name: &'static str,
    /// Portion table used for the entry
    pub portion: PortionCategory,
    /// Dietary attributes
    pub tags: DietTags,
    /// Extra identities the name does not spell out (e.g. sambar is made of toor)
    pub also: &'static [&'static str],
}

/// Start a seed with no tags or extra identities
pub(crate) const fn seed(name: &'static str, portion: PortionCategory) -> FoodSeed {
    FoodSeed {
        name,
        portion,
        tags: DietTags::empty(),
        also: &[],
    }
}

impl FoodSeed {
    const fn tags(self, tags: DietTags) -> Self {
        Self { tags, ..self }
    }

    const fn also(self, also: &'static [&'static str]) -> Self {
        Self { also, ..self }
    }
}

/// Role of a base catalog within a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodGroup {
    /// Breakfast main dish
    BreakfastMain,
    /// Breakfast accompaniment
    BreakfastSide,
    /// Drink
    Beverage,
    /// Whole fruit
    Fruit,
    /// Evening snack
    Snack,
    /// Roti and other flatbreads
    Bread,
    /// Rice and millet rice
    Rice,
    /// Dal and legume curry
    Legume,
    /// Cooked vegetable
    Vegetable,
    /// Salad or raita
    Salad,
    /// Vegetarian protein dish
    Protein,
    /// One-pot dinner main
    DinnerMain,
}

impl FoodGroup {
    /// Every base group
    pub const ALL: [Self; 12] = [
        Self::BreakfastMain,
        Self::BreakfastSide,
        Self::Beverage,
        Self::Fruit,
        Self::Snack,
        Self::Bread,
        Self::Rice,
        Self::Legume,
        Self::Vegetable,
        Self::Salad,
        Self::Protein,
        Self::DinnerMain,
    ];

    const fn seeds(self) -> &'static [FoodSeed] {
        match self {
            Self::BreakfastMain => data::BREAKFAST_MAINS,
            Self::BreakfastSide => data::BREAKFAST_SIDES,
            Self::Beverage => data::BEVERAGES,
            Self::Fruit => data::FRUITS,
            Self::Snack => data::SNACKS,
            Self::Bread => data::BREADS,
            Self::Rice => data::RICE,
            Self::Legume => data::LEGUMES,
            Self::Vegetable => data::VEGETABLES,
            Self::Salad => data::SALADS,
            Self::Protein => data::PROTEINS,
            Self::DinnerMain => data::DINNER_MAINS,
        }
    }
}

/// Meal slot that can receive a regional specialty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionalSlot {
    /// Breakfast main
    Breakfast,
    /// Lunch main
    Lunch,
    /// Dinner main
    Dinner,
    /// Evening snack
    Snack,
}

impl RegionalSlot {
    /// Every regional slot
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];
}

/// A filtered catalog entry with its food identities
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Display name
    pub name: &'static str,
    /// Portion table used for the entry
    pub portion: PortionCategory,
    /// Food identities the entry contributes to a meal
    pub identities: IdentitySet,
}

/// A filtered non-vegetarian regional dish
#[derive(Debug, Clone)]
pub struct NonVegDish {
    /// Protein family
    pub kind: NonVegType,
    /// Catalog entry
    pub entry: CatalogEntry,
}

/// A filtered enrichment item
#[derive(Debug, Clone)]
pub struct EnrichmentEntry {
    /// Catalog entry
    pub entry: CatalogEntry,
    /// Fixed serving label
    pub portion: &'static str,
}

/// Every seed name with its explicit extra identities, for index construction
pub fn all_seed_names() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    let base = FoodGroup::ALL.into_iter().flat_map(|group| group.seeds().iter());
    let enrichment = [EnrichmentKind::Probiotic, EnrichmentKind::Prebiotic]
        .into_iter()
        .flat_map(|kind| enrichment::enrichment_seeds(kind).iter().map(|item| &item.seed));
    base.chain(regional::all_regional_seeds())
        .chain(non_veg::all_non_veg_seeds())
        .chain(enrichment)
        .map(|seed| (seed.name, seed.also))
}

/// Catalog view filtered for one profile
#[derive(Debug, Clone)]
pub struct FoodCatalogs {
    groups: HashMap<FoodGroup, Vec<CatalogEntry>>,
    regional: HashMap<RegionalSlot, Vec<CatalogEntry>>,
    non_veg_types: Vec<NonVegType>,
    cooking_methods: HashMap<NonVegType, Vec<CookingMethod>>,
    non_veg_dishes: Vec<NonVegDish>,
    probiotics: Vec<EnrichmentEntry>,
    prebiotics: Vec<EnrichmentEntry>,
}

impl FoodCatalogs {
    /// Filter every catalog for the profile's preference, region, and allergies
    #[must_use]
    pub fn for_profile(profile: &UserProfile, index: &FoodIndex) -> Self {
        let filter = DietFilter::for_profile(profile);
        let admit = |seed: &FoodSeed| -> Option<CatalogEntry> {
            filter.admits(seed.name, seed.tags).then(|| CatalogEntry {
                name: seed.name,
                portion: seed.portion,
                identities: index.identities_of(seed.name),
            })
        };

        let groups: HashMap<FoodGroup, Vec<CatalogEntry>> = FoodGroup::ALL
            .into_iter()
            .map(|group| (group, group.seeds().iter().filter_map(&admit).collect()))
            .collect();

        let regional: HashMap<RegionalSlot, Vec<CatalogEntry>> = profile
            .region
            .map(|region| {
                RegionalSlot::ALL
                    .into_iter()
                    .map(|slot| {
                        let entries: Vec<CatalogEntry> = regional::regional_seeds(region, slot)
                            .iter()
                            .filter_map(&admit)
                            .collect();
                        (slot, entries)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let preference = profile.dietary_preference;
        let cooking_methods: HashMap<NonVegType, Vec<CookingMethod>> = NonVegType::ALL
            .into_iter()
            .filter(|kind| kind.allowed_for(preference.allows_egg(), preference.allows_meat()))
            .map(|kind| {
                let methods: Vec<CookingMethod> = kind
                    .cooking_methods()
                    .iter()
                    .copied()
                    .filter(|method| {
                        filter.admits(&generic_dish(kind, *method), DietTags::empty())
                    })
                    .collect();
                (kind, methods)
            })
            .filter(|(_, methods)| !methods.is_empty())
            .collect();
        let non_veg_types: Vec<NonVegType> = NonVegType::ALL
            .into_iter()
            .filter(|kind| cooking_methods.contains_key(kind))
            .collect();

        let non_veg_dishes: Vec<NonVegDish> = profile
            .region
            .map(|region| {
                non_veg::regional_non_veg(region)
                    .iter()
                    .filter(|(kind, _)| non_veg_types.contains(kind))
                    .filter_map(|(kind, seed)| {
                        admit(seed).map(|entry| NonVegDish { kind: *kind, entry })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let enrichment_for = |kind: EnrichmentKind| -> Vec<EnrichmentEntry> {
            enrichment::enrichment_seeds(kind)
                .iter()
                .filter_map(|item| {
                    admit(&item.seed).map(|entry| EnrichmentEntry {
                        entry,
                        portion: item.portion,
                    })
                })
                .collect()
        };

        let catalogs = Self {
            groups,
            regional,
            non_veg_types,
            cooking_methods,
            non_veg_dishes,
            probiotics: enrichment_for(EnrichmentKind::Probiotic),
            prebiotics: enrichment_for(EnrichmentKind::Prebiotic),
        };
        debug!(
            preference = %profile.dietary_preference,
            region = profile.region.map(|r| r.as_str()),
            allergy_keywords = filter.keywords().len(),
            non_veg_types = catalogs.non_veg_types.len(),
            "Filtered food catalogs"
        );
        catalogs
    }

    /// Entries of a base group (empty when everything was excluded)
    #[must_use]
    pub fn group(&self, group: FoodGroup) -> &[CatalogEntry] {
        self.groups.get(&group).map_or(&[], Vec::as_slice)
    }

    /// Regional entries for a slot (empty without a region)
    #[must_use]
    pub fn regional(&self, slot: RegionalSlot) -> &[CatalogEntry] {
        self.regional.get(&slot).map_or(&[], Vec::as_slice)
    }

    /// Non-vegetarian types admitted for the profile
    #[must_use]
    pub fn non_veg_types(&self) -> &[NonVegType] {
        &self.non_veg_types
    }

    /// Cooking styles of a type whose generic dish passes the profile's exclusions
    #[must_use]
    pub fn cooking_methods(&self, kind: NonVegType) -> &[CookingMethod] {
        self.cooking_methods.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Admitted regional dishes of one non-vegetarian type
    pub fn non_veg_dishes(&self, kind: NonVegType) -> impl Iterator<Item = &CatalogEntry> {
        self.non_veg_dishes
            .iter()
            .filter(move |dish| dish.kind == kind)
            .map(|dish| &dish.entry)
    }

    /// Admitted enrichment items of one kind
    #[must_use]
    pub fn enrichment(&self, kind: EnrichmentKind) -> &[EnrichmentEntry] {
        match kind {
            EnrichmentKind::Probiotic => &self.probiotics,
            EnrichmentKind::Prebiotic => &self.prebiotics,
        }
    }

    /// Every admitted entry name across all catalogs
    pub fn all_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups
            .values()
            .chain(self.regional.values())
            .flatten()
            .map(|entry| entry.name)
            .chain(self.non_veg_dishes.iter().map(|dish| dish.entry.name))
            .chain(
                self.probiotics
                    .iter()
                    .chain(&self.prebiotics)
                    .map(|item| item.entry.name),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::{DietaryPreference, FitnessGoal, Gender};

    const SEPARATORS: [&str; 4] = [",", " with ", " and ", " or "];

    #[test]
    fn test_seed_names_are_clean_lowercase() {
        for (name, _) in all_seed_names() {
            assert_eq!(name, name.to_lowercase(), "{name}");
            assert_eq!(name, name.trim(), "{name}");
            for separator in SEPARATORS {
                assert!(!name.contains(separator), "{name} contains '{separator}'");
            }
            assert!(!name.contains('|') && !name.contains('('), "{name}");
        }
    }

    #[test]
    fn test_every_base_group_is_populated() {
        for group in FoodGroup::ALL {
            assert!(group.seeds().len() >= 8, "{group:?} too small");
        }
    }

    fn non_veg_profile(allergies: &str) -> UserProfile {
        UserProfile::new(
            DietaryPreference::NonVegetarian,
            Gender::Male,
            75.0,
            FitnessGoal::Maintenance,
        )
        .with_allergies(allergies)
    }

    #[test]
    fn test_cooking_methods_respect_allergies() {
        let catalogs = FoodCatalogs::for_profile(&non_veg_profile("curry"), FoodIndex::global());
        assert!(!catalogs.non_veg_types().is_empty());
        for kind in catalogs.non_veg_types() {
            let methods = catalogs.cooking_methods(*kind);
            assert!(!methods.is_empty(), "{kind:?}");
            for method in methods {
                assert!(!generic_dish(*kind, *method).contains("curry"), "{kind:?}");
            }
        }
        assert_eq!(catalogs.cooking_methods(NonVegType::Mutton).len(), 1);
    }

    #[test]
    fn test_type_without_admitted_method_is_dropped() {
        let catalogs =
            FoodCatalogs::for_profile(&non_veg_profile("curry, stew"), FoodIndex::global());
        assert!(!catalogs.non_veg_types().contains(&NonVegType::Mutton));
        assert!(catalogs.cooking_methods(NonVegType::Mutton).is_empty());
        assert!(catalogs.non_veg_types().contains(&NonVegType::Chicken));
    }

    #[test]
    fn test_dairy_terms_are_tagged() {
        for (group, seed) in FoodGroup::ALL
            .into_iter()
            .flat_map(|group| group.seeds().iter().map(move |seed| (group, seed)))
        {
            if DAIRY_TERMS.iter().any(|term| seed.name.contains(term)) {
                assert!(seed.tags.contains(DietTags::DAIRY), "{group:?}: {}", seed.name);
            }
        }
    }
}
