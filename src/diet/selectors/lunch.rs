// ABOUTME: Lunch selector building a thali-style plate from grain, legume, vegetable and salad
// ABOUTME: Non-vegetarian and regional plates replace the default plate on their cadences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::{generic_phrase, list, non_veg, MealContext, MealSelector, Rotation};
use crate::diet::catalogs::{EnrichmentKind, FoodGroup, RegionalSlot};
use crate::diet::patterns::RotationFamily;
use nutriplan_core::models::MealSlot;
use tracing::debug;

const BREAD: Rotation = Rotation::new(3, 1, RotationFamily::Lunch);
const RICE: Rotation = Rotation::new(5, 2, RotationFamily::Lunch);
const LEGUME: Rotation = Rotation::new(1, 0, RotationFamily::Legume);
const VEGETABLE: Rotation = Rotation::new(7, 3, RotationFamily::Lunch);
const SALAD: Rotation = Rotation::new(2, 5, RotationFamily::Lunch);
const REGIONAL: Rotation = Rotation::new(3, 2, RotationFamily::Lunch);
const PROBIOTIC: Rotation = Rotation::new(1, 1, RotationFamily::Lunch);

/// Lunch: "grain, legume, vegetable, and salad"
#[derive(Debug, Clone, Copy, Default)]
pub struct LunchSelector;

impl MealSelector for LunchSelector {
    fn slot(&self) -> MealSlot {
        MealSlot::Lunch
    }

    fn compose(&self, ctx: &mut MealContext<'_>) -> String {
        let day = ctx.day();
        let schedule = ctx.schedule();
        let mut plate = None;
        if schedule.non_veg_lunch.hits(day) {
            plate = non_veg_plate(ctx);
        }
        if plate.is_none() && schedule.regional_lunch.hits(day) {
            plate = regional_plate(ctx);
        }
        let plate = plate.unwrap_or_else(|| default_plate(ctx));

        if plate.is_empty() {
            debug!(day, "No lunch items left after filtering");
            return ctx.finish(generic_phrase(MealSlot::Lunch));
        }
        let mut text = plate;
        if schedule.enrich_lunch.hits(day) {
            text = ctx.enrich(text, EnrichmentKind::Probiotic, PROBIOTIC);
        }
        ctx.finish(&text)
    }
}

/// Roti, or roti with a rice alternative on cadence
fn grain(ctx: &mut MealContext<'_>) -> Option<String> {
    let catalogs = ctx.catalogs();
    let bread = ctx.serve_pick(catalogs.group(FoodGroup::Bread), BREAD);
    if !ctx.schedule().rice_alternative.hits(ctx.day()) {
        return bread;
    }
    let rice = ctx.serve_pick(catalogs.group(FoodGroup::Rice), RICE);
    match (bread, rice) {
        (Some(bread), Some(rice)) => Some(format!("{bread} or {rice}")),
        (bread, rice) => bread.or(rice),
    }
}

fn non_veg_plate(ctx: &mut MealContext<'_>) -> Option<String> {
    let dish = non_veg::serve_dish(ctx, RotationFamily::Lunch)?;
    let catalogs = ctx.catalogs();
    Some(list([
        grain(ctx),
        Some(dish),
        ctx.serve_pick(catalogs.group(FoodGroup::Vegetable), VEGETABLE),
        ctx.serve_pick(catalogs.group(FoodGroup::Salad), SALAD),
    ]))
}

fn regional_plate(ctx: &mut MealContext<'_>) -> Option<String> {
    let catalogs = ctx.catalogs();
    let special = ctx.pick_fresh(catalogs.regional(RegionalSlot::Lunch), REGIONAL)?;
    let special = ctx.serve(special);
    Some(match ctx.serve_pick(catalogs.group(FoodGroup::Salad), SALAD) {
        Some(salad) => format!("{special} with {salad}"),
        None => special,
    })
}

fn default_plate(ctx: &mut MealContext<'_>) -> String {
    let catalogs = ctx.catalogs();
    list([
        grain(ctx),
        ctx.serve_pick(catalogs.group(FoodGroup::Legume), LEGUME),
        ctx.serve_pick(catalogs.group(FoodGroup::Vegetable), VEGETABLE),
        ctx.serve_pick(catalogs.group(FoodGroup::Salad), SALAD),
    ])
}
