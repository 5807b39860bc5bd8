// ABOUTME: Dinner selector with non-vegetarian, regional, one-pot and default plates
// ABOUTME: Adds a prebiotic enrichment on its cadence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::{generic_phrase, list, non_veg, MealContext, MealSelector, Rotation};
use crate::diet::catalogs::{EnrichmentKind, FoodGroup, RegionalSlot};
use crate::diet::patterns::RotationFamily;
use nutriplan_core::models::MealSlot;
use tracing::debug;

const BREAD: Rotation = Rotation::new(4, 2, RotationFamily::Dinner);
const VEGETABLE: Rotation = Rotation::new(6, 1, RotationFamily::Dinner);
const PROTEIN: Rotation = Rotation::new(3, 3, RotationFamily::Dinner);
const ONE_POT: Rotation = Rotation::new(2, 5, RotationFamily::Dinner);
const REGIONAL: Rotation = Rotation::new(5, 4, RotationFamily::Dinner);
const PREBIOTIC: Rotation = Rotation::new(2, 3, RotationFamily::Dinner);

/// Dinner: "roti, vegetable, and protein" unless a cadence picks another plate
#[derive(Debug, Clone, Copy, Default)]
pub struct DinnerSelector;

impl MealSelector for DinnerSelector {
    fn slot(&self) -> MealSlot {
        MealSlot::Dinner
    }

    fn compose(&self, ctx: &mut MealContext<'_>) -> String {
        let day = ctx.day();
        let schedule = ctx.schedule();
        let mut plate = None;
        if schedule.non_veg_dinner.hits(day) {
            plate = non_veg_plate(ctx);
        }
        if plate.is_none() && schedule.regional_dinner.hits(day) {
            plate = regional_plate(ctx);
        }
        if plate.is_none() && schedule.dinner_main.hits(day) {
            plate = one_pot_plate(ctx);
        }
        let plate = plate.unwrap_or_else(|| default_plate(ctx));

        if plate.is_empty() {
            debug!(day, "No dinner items left after filtering");
            return ctx.finish(generic_phrase(MealSlot::Dinner));
        }
        let mut text = plate;
        if schedule.enrich_dinner.hits(day) {
            text = ctx.enrich(text, EnrichmentKind::Prebiotic, PREBIOTIC);
        }
        ctx.finish(&text)
    }
}

fn non_veg_plate(ctx: &mut MealContext<'_>) -> Option<String> {
    let dish = non_veg::serve_dish(ctx, RotationFamily::Dinner)?;
    let catalogs = ctx.catalogs();
    Some(list([
        ctx.serve_pick(catalogs.group(FoodGroup::Bread), BREAD),
        Some(dish),
        ctx.serve_pick(catalogs.group(FoodGroup::Vegetable), VEGETABLE),
    ]))
}

fn regional_plate(ctx: &mut MealContext<'_>) -> Option<String> {
    let catalogs = ctx.catalogs();
    let special = ctx.pick_fresh(catalogs.regional(RegionalSlot::Dinner), REGIONAL)?;
    let special = ctx.serve(special);
    Some(match ctx.serve_pick(catalogs.group(FoodGroup::Bread), BREAD) {
        Some(bread) => format!("{special} with {bread}"),
        None => special,
    })
}

fn one_pot_plate(ctx: &mut MealContext<'_>) -> Option<String> {
    let catalogs = ctx.catalogs();
    let main = ctx.pick_fresh(catalogs.group(FoodGroup::DinnerMain), ONE_POT)?;
    let main = ctx.serve(main);
    Some(match ctx.serve_pick(catalogs.group(FoodGroup::Vegetable), VEGETABLE) {
        Some(vegetable) => format!("{main} with {vegetable}"),
        None => main,
    })
}

fn default_plate(ctx: &mut MealContext<'_>) -> String {
    let catalogs = ctx.catalogs();
    list([
        ctx.serve_pick(catalogs.group(FoodGroup::Bread), BREAD),
        ctx.serve_pick(catalogs.group(FoodGroup::Vegetable), VEGETABLE),
        ctx.serve_pick(catalogs.group(FoodGroup::Protein), PROTEIN),
    ])
}
