// ABOUTME: Regional specialty catalogs per cuisine family and meal slot
// ABOUTME: North, South, East, and West dishes substituted on a fixed day cadence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::{seed, DietTags, FoodSeed, RegionalSlot};
use crate::diet::portions::PortionCategory::{Beverage, Bread, Curry, Porridge, Rice, Snack, Vegetable};
use nutriplan_core::models::Region;

const DAIRY: DietTags = DietTags::DAIRY;
const ROOT: DietTags = DietTags::ROOT;
const GLUTEN: DietTags = DietTags::GLUTEN;
const NUTS: DietTags = DietTags::NUTS;

const NORTH_BREAKFAST: &[FoodSeed] = &[
    seed("paneer paratha", Bread).tags(DAIRY.union(GLUTEN)),
    seed("gobi paratha", Bread).tags(GLUTEN),
    seed("matar kulcha", Bread).tags(GLUTEN),
    seed("aloo paratha", Bread).tags(ROOT.union(GLUTEN)),
    seed("methi paratha", Bread).tags(GLUTEN),
    seed("makki upma", Porridge),
];

const NORTH_LUNCH: &[FoodSeed] = &[
    seed("rajma chawal", Curry),
    seed("kadhi chawal", Curry).tags(DAIRY).also(&["besan"]),
    seed("chole chawal", Curry).tags(ROOT),
    seed("lobia chawal", Curry),
    seed("dal chawal", Curry).also(&["toor"]),
];

const NORTH_DINNER: &[FoodSeed] = &[
    seed("palak paneer", Curry).tags(DAIRY),
    seed("matar paneer", Curry).tags(DAIRY),
    seed("sarson ka saag", Vegetable).tags(ROOT),
    seed("shahi paneer", Curry).tags(DAIRY),
    seed("kadai mushroom", Curry),
    seed("dal tadka", Curry).also(&["toor"]),
];

const NORTH_SNACK: &[FoodSeed] = &[
    seed("aloo tikki", Snack).tags(ROOT),
    seed("dahi bhalla", Snack).tags(DAIRY).also(&["urad"]),
    seed("matar chaat", Snack),
    seed("bhuna chana", Snack),
];

const SOUTH_BREAKFAST: &[FoodSeed] = &[
    seed("idli sambar", Bread),
    seed("rava idli", Bread).tags(GLUTEN),
    seed("ven pongal", Porridge).also(&["moong"]),
    seed("neer dosa", Bread),
    seed("adai", Bread).also(&["toor", "chana"]),
];

const SOUTH_LUNCH: &[FoodSeed] = &[
    seed("curd rice", Rice).tags(DAIRY),
    seed("sambar rice", Rice),
    seed("rasam rice", Rice).also(&["toor"]),
    seed("bisi bele bath", Rice).also(&["toor"]),
    seed("avial", Vegetable).tags(DAIRY),
];

const SOUTH_DINNER: &[FoodSeed] = &[
    seed("ragi mudde", Bread),
    seed("kootu", Curry).also(&["moong"]),
    seed("kerala vegetable stew", Curry),
    seed("keerai masiyal", Curry).also(&["spinach"]),
];

const SOUTH_SNACK: &[FoodSeed] = &[
    seed("sundal", Snack).also(&["chana"]),
    seed("steamed kozhukattai", Snack),
    seed("ragi malt", Beverage),
    seed("sprouted moong usal", Snack),
];

const EAST_BREAKFAST: &[FoodSeed] = &[
    seed("chirer pulao", Porridge),
    seed("ghugni", Curry).tags(ROOT).also(&["green peas"]),
    seed("chakuli pitha", Bread).also(&["urad"]),
    seed("sattu paratha", Bread).tags(GLUTEN).also(&["chana"]),
];

const EAST_LUNCH: &[FoodSeed] = &[
    seed("shukto", Vegetable).also(&["bitter gourd"]),
    seed("dalma", Curry).also(&["toor"]),
    seed("cholar dal", Curry),
    seed("aloo posto", Vegetable).tags(ROOT),
];

const EAST_DINNER: &[FoodSeed] = &[
    seed("lau ghonto", Vegetable),
    seed("chhena tarkari", Curry).tags(DAIRY),
    seed("begun bhaja", Vegetable),
    seed("dhokar dalna", Curry).also(&["chana"]),
];

const EAST_SNACK: &[FoodSeed] = &[
    seed("jhalmuri", Snack).tags(ROOT),
    seed("til laddoo", Snack),
    seed("chirer bhaja", Snack).tags(NUTS),
];

const WEST_BREAKFAST: &[FoodSeed] = &[
    seed("khaman dhokla", Bread),
    seed("handvo", Bread).also(&["toor", "chana"]),
    seed("kanda poha", Porridge).tags(ROOT),
    seed("thalipeeth", Bread).tags(ROOT),
    seed("misal", Curry).tags(ROOT),
];

const WEST_LUNCH: &[FoodSeed] = &[
    seed("gujarati kadhi", Curry).tags(DAIRY).also(&["besan"]),
    seed("dal dhokli", Curry).tags(GLUTEN).also(&["toor"]),
    seed("undhiyu", Vegetable).tags(ROOT),
    seed("pithla bhakri", Curry).also(&["besan"]),
    seed("varan bhaat", Rice).also(&["toor"]),
];

const WEST_DINNER: &[FoodSeed] = &[
    seed("bharli vangi", Vegetable),
    seed("sev tameta", Vegetable).also(&["besan"]),
    seed("khichdi kadhi", Porridge).tags(DAIRY).also(&["moong", "besan"]),
    seed("zunka bhakri", Curry).also(&["besan"]),
];

const WEST_SNACK: &[FoodSeed] = &[
    seed("khandvi", Snack).tags(DAIRY).also(&["besan"]),
    seed("muthia", Snack).tags(GLUTEN).also(&["fenugreek"]),
    seed("sabudana vada", Snack).tags(ROOT.union(NUTS)),
];

/// Regional seeds for one cuisine family and slot
pub(super) const fn regional_seeds(region: Region, slot: RegionalSlot) -> &'static [FoodSeed] {
    match (region, slot) {
        (Region::North, RegionalSlot::Breakfast) => NORTH_BREAKFAST,
        (Region::North, RegionalSlot::Lunch) => NORTH_LUNCH,
        (Region::North, RegionalSlot::Dinner) => NORTH_DINNER,
        (Region::North, RegionalSlot::Snack) => NORTH_SNACK,
        (Region::South, RegionalSlot::Breakfast) => SOUTH_BREAKFAST,
        (Region::South, RegionalSlot::Lunch) => SOUTH_LUNCH,
        (Region::South, RegionalSlot::Dinner) => SOUTH_DINNER,
        (Region::South, RegionalSlot::Snack) => SOUTH_SNACK,
        (Region::East, RegionalSlot::Breakfast) => EAST_BREAKFAST,
        (Region::East, RegionalSlot::Lunch) => EAST_LUNCH,
        (Region::East, RegionalSlot::Dinner) => EAST_DINNER,
        (Region::East, RegionalSlot::Snack) => EAST_SNACK,
        (Region::West, RegionalSlot::Breakfast) => WEST_BREAKFAST,
        (Region::West, RegionalSlot::Lunch) => WEST_LUNCH,
        (Region::West, RegionalSlot::Dinner) => WEST_DINNER,
        (Region::West, RegionalSlot::Snack) => WEST_SNACK,
    }
}

/// Every regional seed across all cuisine families
pub(super) fn all_regional_seeds() -> impl Iterator<Item = &'static FoodSeed> {
    [Region::North, Region::South, Region::East, Region::West]
        .into_iter()
        .flat_map(|region| {
            RegionalSlot::ALL
                .into_iter()
                .flat_map(move |slot| regional_seeds(region, slot).iter())
        })
}
