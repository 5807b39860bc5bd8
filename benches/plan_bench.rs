// ABOUTME: Criterion benchmarks for plan generation and the deduplication passes
// ABOUTME: Measures full 75-day generation per dietary profile, meal cleanup, and plan serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Criterion benchmarks for plan generation.
//!
//! Measures end-to-end generation for representative profiles, the
//! per-meal deduplication stages, and JSON output of a full plan.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriplan::diet::{DedupEngine, DietPlanGenerator, FoodIndex, PlanAudit};
use nutriplan::models::{DietaryPreference, FitnessGoal, Gender, Region, UserProfile};

fn profiles() -> Vec<(&'static str, UserProfile)> {
    vec![
        (
            "jain_north",
            UserProfile::new(
                DietaryPreference::Jain,
                Gender::Female,
                60.0,
                FitnessGoal::WeightLoss,
            )
            .with_region(Region::North),
        ),
        (
            "non_veg_south",
            UserProfile::new(
                DietaryPreference::NonVegetarian,
                Gender::Male,
                78.0,
                FitnessGoal::MuscleGain,
            )
            .with_region(Region::South),
        ),
        (
            "vegan_dairy_free",
            UserProfile::new(
                DietaryPreference::Vegan,
                Gender::Female,
                55.0,
                FitnessGoal::Maintenance,
            )
            .with_allergies("dairy, peanuts"),
        ),
    ]
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_plan");
    let generator = DietPlanGenerator::default();
    group.throughput(Throughput::Elements(u64::from(generator.config().plan_days)));

    for (name, profile) in profiles() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &profile, |b, profile| {
            b.iter(|| generator.generate(black_box(profile)));
        });
    }

    group.finish();
}

fn bench_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup");
    let engine = DedupEngine::global();
    let meal = "Jeera rice (1 cup), curd (1 katori), cucumber salad and dahi (½ katori)";

    group.bench_function("remove_duplicate_food_items", |b| {
        b.iter(|| engine.remove_duplicate_food_items(black_box(meal)));
    });
    group.bench_function("normalize_output", |b| {
        b.iter(|| engine.normalize_output(black_box(meal)));
    });
    group.bench_function("add_without_duplication", |b| {
        b.iter(|| engine.add_without_duplication(black_box(meal), black_box("yogurt (½ katori)")));
    });

    group.finish();
}

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_output");
    let (_, profile) = profiles().into_iter().next().unwrap();
    let plan = DietPlanGenerator::default().generate(&profile);

    let serialized = serde_json::to_vec(&plan).unwrap();
    group.throughput(Throughput::Bytes(serialized.len() as u64));
    group.bench_function("serialize_json", |b| {
        b.iter(|| serde_json::to_vec(black_box(&plan)));
    });
    group.bench_function("audit", |b| {
        b.iter(|| PlanAudit::run(FoodIndex::global(), black_box(&plan)));
    });

    group.finish();
}

criterion_group!(benches, bench_generation, bench_dedup, bench_output);
criterion_main!(benches);
