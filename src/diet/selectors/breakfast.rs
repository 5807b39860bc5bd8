// ABOUTME: Breakfast selector composing a main dish with an accompaniment
// ABOUTME: Regional breakfasts on cadence and a prebiotic enrichment on its own cadence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::{generic_phrase, MealContext, MealSelector, Rotation};
use crate::diet::catalogs::{EnrichmentKind, FoodGroup, RegionalSlot};
use crate::diet::patterns::RotationFamily;
use nutriplan_core::models::MealSlot;
use tracing::debug;

const MAIN: Rotation = Rotation::new(5, 1, RotationFamily::Breakfast);
const SIDE: Rotation = Rotation::new(3, 4, RotationFamily::Breakfast);
const REGIONAL: Rotation = Rotation::new(2, 0, RotationFamily::Breakfast);
const PREBIOTIC: Rotation = Rotation::new(1, 0, RotationFamily::Breakfast);

/// Breakfast: "main (portion) with side (portion)"
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakfastSelector;

impl MealSelector for BreakfastSelector {
    fn slot(&self) -> MealSlot {
        MealSlot::Breakfast
    }

    fn compose(&self, ctx: &mut MealContext<'_>) -> String {
        let catalogs = ctx.catalogs();
        let regional = if ctx.schedule().regional_breakfast.hits(ctx.day()) {
            ctx.pick_fresh(catalogs.regional(RegionalSlot::Breakfast), REGIONAL)
        } else {
            None
        };
        let Some(main) =
            regional.or_else(|| ctx.pick(catalogs.group(FoodGroup::BreakfastMain), MAIN))
        else {
            debug!(day = ctx.day(), "No breakfast main left after filtering");
            return ctx.finish(generic_phrase(MealSlot::Breakfast));
        };

        let mut text = ctx.serve(main);
        if let Some(side) = ctx.serve_pick(catalogs.group(FoodGroup::BreakfastSide), SIDE) {
            text = format!("{text} with {side}");
        }
        if ctx.schedule().enrich_breakfast.hits(ctx.day()) {
            text = ctx.enrich(text, EnrichmentKind::Prebiotic, PREBIOTIC);
        }
        ctx.finish(&text)
    }
}
