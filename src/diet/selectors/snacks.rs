// ABOUTME: Mid-morning and evening snack selectors
// ABOUTME: Fruit with a drink before lunch, a light snack with a drink in the evening
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::{generic_phrase, MealContext, MealSelector, Rotation};
use crate::diet::catalogs::{FoodGroup, RegionalSlot};
use crate::diet::patterns::RotationFamily;
use nutriplan_core::models::MealSlot;
use tracing::debug;

const FRUIT: Rotation = Rotation::new(7, 2, RotationFamily::Breakfast);
const MORNING_DRINK: Rotation = Rotation::new(4, 3, RotationFamily::Breakfast);
const SNACK: Rotation = Rotation::new(3, 7, RotationFamily::Dinner);
const REGIONAL_SNACK: Rotation = Rotation::new(1, 1, RotationFamily::Dinner);
const EVENING_DRINK: Rotation = Rotation::new(5, 1, RotationFamily::Dinner);

/// Mid-morning: "fruit (portion) with drink (portion)"
#[derive(Debug, Clone, Copy, Default)]
pub struct MidMorningSelector;

impl MealSelector for MidMorningSelector {
    fn slot(&self) -> MealSlot {
        MealSlot::MidMorningSnack
    }

    fn compose(&self, ctx: &mut MealContext<'_>) -> String {
        let catalogs = ctx.catalogs();
        let fruit = ctx.serve_pick(catalogs.group(FoodGroup::Fruit), FRUIT);
        let drink = ctx.serve_pick(catalogs.group(FoodGroup::Beverage), MORNING_DRINK);
        pair_or_generic(ctx, fruit, drink, MealSlot::MidMorningSnack)
    }
}

/// Evening: "snack (portion) with drink (portion)", regional snack on cadence
#[derive(Debug, Clone, Copy, Default)]
pub struct EveningSnackSelector;

impl MealSelector for EveningSnackSelector {
    fn slot(&self) -> MealSlot {
        MealSlot::EveningSnack
    }

    fn compose(&self, ctx: &mut MealContext<'_>) -> String {
        let catalogs = ctx.catalogs();
        let regional = if ctx.schedule().regional_snack.hits(ctx.day()) {
            ctx.pick_fresh(catalogs.regional(RegionalSlot::Snack), REGIONAL_SNACK)
        } else {
            None
        };
        let snack = regional
            .or_else(|| ctx.pick(catalogs.group(FoodGroup::Snack), SNACK))
            .map(|entry| ctx.serve(entry));
        let drink = ctx.serve_pick(catalogs.group(FoodGroup::Beverage), EVENING_DRINK);
        pair_or_generic(ctx, snack, drink, MealSlot::EveningSnack)
    }
}

fn pair_or_generic(
    ctx: &MealContext<'_>,
    food: Option<String>,
    drink: Option<String>,
    slot: MealSlot,
) -> String {
    match (food, drink) {
        (Some(food), Some(drink)) => ctx.finish(&format!("{food} with {drink}")),
        (Some(only), None) | (None, Some(only)) => ctx.finish(&only),
        (None, None) => {
            debug!(day = ctx.day(), %slot, "No snack items left after filtering");
            ctx.finish(generic_phrase(slot))
        }
    }
}
