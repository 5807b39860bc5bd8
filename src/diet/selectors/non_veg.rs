// ABOUTME: Non-vegetarian dish choice shared by the lunch and dinner selectors
// ABOUTME: Rotates admitted types, prefers a regional dish on cadence, else a generic cooking style
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::{MealContext, Rotation};
use crate::diet::catalogs::{generic_dish, CatalogEntry, NonVegType};
use crate::diet::patterns::RotationFamily;
use crate::diet::portions::PortionSizer;
use tracing::debug;

/// Serve a non-vegetarian dish, or `None` when no admitted type is still fresh today
pub(super) fn serve_dish(ctx: &mut MealContext<'_>, family: RotationFamily) -> Option<String> {
    let types = ctx.catalogs().non_veg_types();
    if types.is_empty() {
        return None;
    }
    let start = ctx.rotate(types.len(), Rotation::new(1, 2, family));
    let Some(kind) = (0..types.len())
        .map(|step| types[(start + step) % types.len()])
        .find(|kind| !ctx.is_name_taken(kind.name()))
    else {
        debug!(day = ctx.day(), "Every non-vegetarian type already served today");
        return None;
    };

    let portion = PortionSizer::non_veg(kind, ctx.portion_goal(), ctx.profile().gender);
    let style = Rotation::new(3, 1, family);
    if ctx.schedule().regional_non_veg.hits(ctx.day()) {
        if let Some(entry) = fresh_regional_dish(ctx, kind, style) {
            ctx.take(&entry.identities);
            return Some(format!("{} ({portion})", entry.name));
        }
    }

    let methods = ctx.catalogs().cooking_methods(kind);
    let method = methods.get(ctx.rotate(methods.len(), style)).copied()?;
    let name = generic_dish(kind, method);
    let identities = ctx.identities_of(&name);
    ctx.take(&identities);
    Some(format!("{name} ({portion})"))
}

fn fresh_regional_dish<'a>(
    ctx: &MealContext<'a>,
    kind: NonVegType,
    rotation: Rotation,
) -> Option<&'a CatalogEntry> {
    let dishes: Vec<&CatalogEntry> = ctx.catalogs().non_veg_dishes(kind).collect();
    if dishes.is_empty() {
        return None;
    }
    let start = ctx.rotate(dishes.len(), rotation);
    (0..dishes.len())
        .map(|step| dishes[(start + step) % dishes.len()])
        .find(|entry| !ctx.is_taken(&entry.identities))
}
