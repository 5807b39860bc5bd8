// ABOUTME: Probiotic and prebiotic enrichment items appended to meals on a cadence
// ABOUTME: Each item carries a fixed portion label instead of a table lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::{seed, DietTags, FoodSeed};
use crate::diet::portions::PortionCategory::{Beverage, Condiment, Curry, Fruit};
use serde::{Deserialize, Serialize};

/// Gut-health role of an enrichment item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentKind {
    /// Fermented foods carrying live cultures
    Probiotic,
    /// Fibre that feeds gut bacteria
    Prebiotic,
}

/// An enrichment item with its fixed serving
#[derive(Debug, Clone, Copy)]
pub struct EnrichmentSeed {
    /// Catalog seed (name, tags, identities)
    pub seed: FoodSeed,
    /// Fixed serving label
    pub portion: &'static str,
}

const fn item(seed: FoodSeed, portion: &'static str) -> EnrichmentSeed {
    EnrichmentSeed { seed, portion }
}

pub(super) const PROBIOTICS: &[EnrichmentSeed] = &[
    item(seed("curd", Curry).tags(DietTags::DAIRY), "½ katori"),
    item(seed("buttermilk", Beverage).tags(DietTags::DAIRY), "1 glass"),
    item(seed("kanji", Beverage).tags(DietTags::ROOT), "½ glass"),
    item(seed("fermented rice water", Beverage), "½ glass"),
];

pub(super) const PREBIOTICS: &[EnrichmentSeed] = &[
    item(seed("roasted flaxseeds", Condiment), "1 tsp"),
    item(seed("soaked chia seeds", Condiment), "1 tsp"),
    item(seed("raw banana", Fruit), "½ small"),
    item(seed("barley water", Beverage).tags(DietTags::GLUTEN), "1 glass"),
    item(seed("raw garlic", Condiment).tags(DietTags::ROOT), "1 clove"),
    item(seed("psyllium husk", Condiment), "1 tsp"),
];

/// Enrichment seeds of one kind
pub(super) const fn enrichment_seeds(kind: EnrichmentKind) -> &'static [EnrichmentSeed] {
    match kind {
        EnrichmentKind::Probiotic => PROBIOTICS,
        EnrichmentKind::Prebiotic => PREBIOTICS,
    }
}
