// ABOUTME: Non-vegetarian dish catalogs: protein types, cooking methods, and regional dishes
// ABOUTME: Feeds the lunch and dinner substitution cadence for egg and meat eaters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::{seed, DietTags, FoodSeed};
use crate::diet::portions::PortionCategory::Protein;
use nutriplan_core::models::Region;
use serde::{Deserialize, Serialize};

/// Cooking style as `(prefix, suffix)` around the type name
pub type CookingMethod = (&'static str, &'static str);

/// Animal protein family of a non-vegetarian dish
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NonVegType {
    /// Chicken
    Chicken,
    /// Fish
    Fish,
    /// Egg
    Egg,
    /// Mutton
    Mutton,
    /// Prawn
    Prawn,
}

impl NonVegType {
    /// Rotation order
    pub const ALL: [Self; 5] = [
        Self::Chicken,
        Self::Fish,
        Self::Egg,
        Self::Mutton,
        Self::Prawn,
    ];

    /// Food name used in generated dish text
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Chicken => "chicken",
            Self::Fish => "fish",
            Self::Egg => "egg",
            Self::Mutton => "mutton",
            Self::Prawn => "prawn",
        }
    }

    /// Every cooking style for the type
    #[must_use]
    pub const fn cooking_methods(&self) -> &'static [CookingMethod] {
        match self {
            Self::Chicken => &[
                ("grilled", ""),
                ("tandoori-style", ""),
                ("home-style", " curry"),
                ("stir-fried", ""),
            ],
            Self::Fish => &[
                ("steamed", ""),
                ("grilled", ""),
                ("pan-seared", ""),
                ("light", " curry"),
            ],
            Self::Egg => &[("boiled", ""), ("poached", ""), ("masala", " bhurji")],
            Self::Mutton => &[("slow-cooked", " curry"), ("lean", " stew")],
            Self::Prawn => &[("stir-fried", ""), ("grilled", ""), ("light", " curry")],
        }
    }

    /// Whether the dietary preference admits this type
    #[must_use]
    pub const fn allowed_for(&self, allows_egg: bool, allows_meat: bool) -> bool {
        match self {
            Self::Egg => allows_egg,
            Self::Chicken | Self::Fish | Self::Mutton | Self::Prawn => allows_meat,
        }
    }
}

/// Generic dish text for a type cooked one way
#[must_use]
pub fn generic_dish(kind: NonVegType, (prefix, suffix): CookingMethod) -> String {
    format!("{prefix} {}{suffix}", kind.name())
}

const DAIRY: DietTags = DietTags::DAIRY;
const ROOT: DietTags = DietTags::ROOT;

const NORTH: &[(NonVegType, FoodSeed)] = &[
    (NonVegType::Chicken, seed("chicken tikka", Protein).tags(DAIRY)),
    (NonVegType::Chicken, seed("butter chicken", Protein).tags(DAIRY)),
    (NonVegType::Mutton, seed("mutton rogan josh", Protein).tags(DAIRY)),
    (NonVegType::Egg, seed("egg bhurji", Protein).tags(ROOT)),
    (NonVegType::Fish, seed("amritsari fish", Protein).also(&["besan"])),
];

const SOUTH: &[(NonVegType, FoodSeed)] = &[
    (NonVegType::Chicken, seed("chettinad chicken", Protein).tags(ROOT)),
    (NonVegType::Fish, seed("kerala fish curry", Protein)),
    (NonVegType::Prawn, seed("prawn moilee", Protein)),
    (NonVegType::Egg, seed("egg roast", Protein).tags(ROOT)),
    (NonVegType::Mutton, seed("mutton sukka", Protein).tags(ROOT)),
];

const EAST: &[(NonVegType, FoodSeed)] = &[
    (NonVegType::Fish, seed("macher jhol", Protein).tags(ROOT)),
    (NonVegType::Prawn, seed("chingri malai curry", Protein).tags(DAIRY)),
    (NonVegType::Mutton, seed("kosha mangsho", Protein).tags(ROOT)),
    (NonVegType::Egg, seed("dimer dalna", Protein).tags(ROOT)),
    (NonVegType::Chicken, seed("chicken rezala", Protein).tags(DAIRY)),
];

const WEST: &[(NonVegType, FoodSeed)] = &[
    (NonVegType::Fish, seed("goan fish curry", Protein)),
    (NonVegType::Chicken, seed("chicken xacuti", Protein).tags(ROOT)),
    (NonVegType::Prawn, seed("prawn balchao", Protein).tags(ROOT)),
    (NonVegType::Egg, seed("egg masala curry", Protein).tags(ROOT)),
    (NonVegType::Mutton, seed("kolhapuri mutton", Protein).tags(ROOT)),
];

/// Region-specific non-vegetarian dishes
pub(super) const fn regional_non_veg(region: Region) -> &'static [(NonVegType, FoodSeed)] {
    match region {
        Region::North => NORTH,
        Region::South => SOUTH,
        Region::East => EAST,
        Region::West => WEST,
    }
}

/// Every regional non-vegetarian seed
pub(super) fn all_non_veg_seeds() -> impl Iterator<Item = &'static FoodSeed> {
    [NORTH, SOUTH, EAST, WEST]
        .into_iter()
        .flat_map(|dishes| dishes.iter().map(|(_, seed)| seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_dish_wraps_the_type_name() {
        let chicken = NonVegType::Chicken.cooking_methods();
        assert_eq!(generic_dish(NonVegType::Chicken, chicken[0]), "grilled chicken");
        assert_eq!(generic_dish(NonVegType::Chicken, chicken[2]), "home-style chicken curry");
        let egg = NonVegType::Egg.cooking_methods();
        assert_eq!(generic_dish(NonVegType::Egg, egg[2]), "masala egg bhurji");
    }

    #[test]
    fn test_eggetarian_admits_only_egg() {
        let allowed: Vec<NonVegType> = NonVegType::ALL
            .into_iter()
            .filter(|kind| kind.allowed_for(true, false))
            .collect();
        assert_eq!(allowed, vec![NonVegType::Egg]);
    }

    #[test]
    fn test_every_region_covers_every_type() {
        for region in [Region::North, Region::South, Region::East, Region::West] {
            for kind in NonVegType::ALL {
                assert!(
                    regional_non_veg(region).iter().any(|(k, _)| *k == kind)
                        || kind == NonVegType::Prawn,
                    "{region:?} lacks {kind:?}"
                );
            }
        }
    }
}
