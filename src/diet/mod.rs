// ABOUTME: Nutrition plan engine: catalogs, food identity, rotation, deduplication, and assembly
// ABOUTME: Turns a user profile into a deterministic multi-day, five-meal Indian diet plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Diet Plan Engine
//!
//! The engine is layered bottom-up:
//!
//! - **synonyms** / **index**: map free-text food mentions to canonical identities
//! - **catalogs**: built-in food lists filtered per dietary preference and allergies
//! - **portions**: serving sizes by category, fitness goal and gender
//! - **patterns**: per-day rotation offsets that break the base cycle
//! - **memory**: identities already served on the current day
//! - **dedup**: append guard, duplicate-phrase removal and output normalization
//! - **selectors**: one composer per meal slot
//! - **wellness**: calorie, water and lifestyle annotations
//! - **assembler**: the day loop tying everything together
//! - **audit**: post-hoc variety and repetition report

/// Plan assembler driving the day loop
pub mod assembler;
/// Same-day repetition and variety report
pub mod audit;
/// Built-in food catalogs and dietary filtering
pub mod catalogs;
/// Deduplication stages applied while composing and after assembly
pub mod dedup;
/// Canonical food identity index
pub mod index;
/// Per-day food memory
pub mod memory;
/// Day-pattern rotation offsets
pub mod patterns;
/// Portion tables
pub mod portions;
/// Per-slot meal composers
pub mod selectors;
/// Food synonym classes and word-aligned matching
pub mod synonyms;
/// Calorie, water and wellness-note annotations
pub mod wellness;

pub use assembler::{generate_plan, DietPlanGenerator};
pub use audit::{PlanAudit, RepeatFinding};
pub use dedup::{Cleaned, DedupEngine, UnchangedReason};
pub use index::{FoodIdentity, FoodIndex};
pub use memory::DailyFoodMemory;
