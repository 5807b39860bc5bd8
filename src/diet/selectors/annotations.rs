// ABOUTME: Health-benefit annotation chosen from the first matching keyword family
// ABOUTME: Benefit texts describe nutrients only and never name a food
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use crate::diet::synonyms::contains_word;

/// Benefit used when no keyword family matches
pub const DEFAULT_BENEFIT: &str = "balanced nutrients to keep the day steady";

/// Keyword families in priority order
const BENEFITS: &[(&[&str], &str)] = &[
    (
        &["chicken", "fish", "egg", "mutton", "prawn", "paneer", "tofu", "soya chunks"],
        "high-quality protein for muscle repair",
    ),
    (
        &["dal", "moong", "masoor", "toor", "chana", "rajma", "lobia", "sprouts", "sambar"],
        "plant protein and fibre for lasting fullness",
    ),
    (
        &["ragi", "bajra", "jowar", "oats", "quinoa", "dalia", "foxtail millet"],
        "slow-release carbohydrates for steady energy",
    ),
    (
        &["curd", "dahi", "buttermilk", "kanji", "idli", "dosa", "fermented"],
        "live cultures that support gut health",
    ),
    (
        &["spinach", "palak", "methi", "sarson", "mustard greens"],
        "iron and folate for healthy blood",
    ),
    (
        &["flaxseeds", "chia", "walnuts", "almonds"],
        "omega-3 fats for heart health",
    ),
    (
        &["papaya", "orange", "guava", "amla", "apple", "pomegranate"],
        "vitamin C and antioxidants for immunity",
    ),
    (
        &["coconut water", "lemon water", "jaljeera"],
        "electrolytes for hydration",
    ),
];

/// "Benefit: ..." text for a meal description
#[must_use]
pub fn health_benefit(meal: &str) -> String {
    let lowered = meal.to_lowercase();
    let benefit = BENEFITS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| contains_word(&lowered, keyword)))
        .map_or(DEFAULT_BENEFIT, |(_, benefit)| benefit);
    format!("Benefit: {benefit}")
}
