// ABOUTME: Dietary and allergy exclusion rules applied to every catalog entry
// ABOUTME: Expands allergy terms into keyword families and maps them onto diet tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::DietTags;
use nutriplan_core::models::{DietaryPreference, UserProfile};

/// Substrings marking a food as dairy-containing
pub const DAIRY_TERMS: &[&str] = &[
    "milk", "curd", "dahi", "yogurt", "yoghurt", "paneer", "chhena", "cheese", "ghee", "butter",
    "cream", "lassi", "chaas", "chhaas", "raita", "kheer", "khoa", "malai", "whey", "makhani",
    "shrikhand", "kadhi", "latte",
];

/// Substrings marking a food as excluded from a Jain diet
pub const JAIN_EXCLUDED_TERMS: &[&str] = &[
    "onion", "garlic", "potato", "aloo", "carrot", "beetroot", "radish", "mooli", "ginger",
    "adrak", "lehsun", "pyaz", "kanda", "arbi", "sweet potato",
];

const GLUTEN_TERMS: &[&str] = &[
    "wheat", "atta", "maida", "semolina", "suji", "sooji", "rava", "bread", "pasta", "vermicelli",
    "seviyan", "barley", "dalia", "daliya", "paratha", "thepla", "phulka", "chapati", "khakhra",
    "naan", "kulcha", "sandwich", "crackers", "cookies",
];

const NUT_TERMS: &[&str] = &[
    "peanut", "groundnut", "moongphali", "almond", "cashew", "walnut", "pistachio", "nuts",
];

const SOY_TERMS: &[&str] = &["soy", "soya", "tofu", "edamame", "tempeh"];

const EGG_TERMS: &[&str] = &["egg", "omelette", "anda", "dimer"];

const FISH_TERMS: &[&str] = &["fish", "machli", "macher", "meen"];

const SHELLFISH_TERMS: &[&str] = &["prawn", "shrimp", "jhinga", "chingri", "crab", "lobster"];

/// Allergen family: trigger words in the allergy field, keywords matched in
/// food names, and the diet tag that also excludes an entry
struct AllergenFamily {
    triggers: &'static [&'static str],
    keywords: &'static [&'static str],
    tag: DietTags,
}

const FAMILIES: &[AllergenFamily] = &[
    AllergenFamily {
        triggers: &["dairy", "milk", "lactose", "casein"],
        keywords: DAIRY_TERMS,
        tag: DietTags::DAIRY,
    },
    AllergenFamily {
        triggers: &["gluten", "wheat", "celiac", "coeliac"],
        keywords: GLUTEN_TERMS,
        tag: DietTags::GLUTEN,
    },
    AllergenFamily {
        triggers: &["nut", "peanut", "groundnut"],
        keywords: NUT_TERMS,
        tag: DietTags::NUTS,
    },
    AllergenFamily {
        triggers: &["soy", "soya"],
        keywords: SOY_TERMS,
        tag: DietTags::SOY,
    },
    AllergenFamily {
        triggers: &["egg"],
        keywords: EGG_TERMS,
        tag: DietTags::empty(),
    },
    AllergenFamily {
        triggers: &["fish", "seafood"],
        keywords: FISH_TERMS,
        tag: DietTags::empty(),
    },
    AllergenFamily {
        triggers: &["shellfish", "prawn", "shrimp", "seafood", "crustacean"],
        keywords: SHELLFISH_TERMS,
        tag: DietTags::empty(),
    },
];

/// Exclusion rules derived from one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DietFilter {
    preference: DietaryPreference,
    keywords: Vec<String>,
    excluded_tags: DietTags,
}

impl DietFilter {
    /// Build the filter for a profile's preference and allergy list
    #[must_use]
    pub fn for_profile(profile: &UserProfile) -> Self {
        let mut keywords: Vec<String> = Vec::new();
        let mut excluded_tags = DietTags::empty();

        for term in &profile.allergies {
            let term = term.trim().to_lowercase();
            if term.is_empty() {
                continue;
            }
            for family in FAMILIES {
                if family.triggers.iter().any(|trigger| term.contains(trigger)) {
                    excluded_tags |= family.tag;
                    keywords.extend(family.keywords.iter().map(|k| (*k).to_owned()));
                }
            }
            keywords.push(term);
        }
        keywords.sort();
        keywords.dedup();

        if profile.dietary_preference == DietaryPreference::Vegan {
            excluded_tags |= DietTags::DAIRY;
        }
        if profile.dietary_preference == DietaryPreference::Jain {
            excluded_tags |= DietTags::ROOT;
        }

        Self {
            preference: profile.dietary_preference,
            keywords,
            excluded_tags,
        }
    }

    /// Whether an entry survives the dietary and allergy exclusions
    #[must_use]
    pub fn admits(&self, name: &str, tags: DietTags) -> bool {
        if tags.intersects(self.excluded_tags) {
            return false;
        }
        let name = name.to_lowercase();
        let blocked_terms: &[&str] = match self.preference {
            DietaryPreference::Vegan => DAIRY_TERMS,
            DietaryPreference::Jain => JAIN_EXCLUDED_TERMS,
            _ => &[],
        };
        if blocked_terms.iter().any(|term| name.contains(term)) {
            return false;
        }
        !self.keywords.iter().any(|keyword| name.contains(keyword.as_str()))
    }

    /// Expanded allergy keywords, sorted
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::{FitnessGoal, Gender};

    fn profile(preference: DietaryPreference, allergies: &str) -> UserProfile {
        UserProfile::new(preference, Gender::Female, 60.0, FitnessGoal::Maintenance)
            .with_allergies(allergies)
    }

    #[test]
    fn test_vegan_blocks_dairy_by_tag_and_name() {
        let filter = DietFilter::for_profile(&profile(DietaryPreference::Vegan, ""));
        assert!(!filter.admits("hung curd dip", DietTags::DAIRY));
        assert!(!filter.admits("paneer masala", DietTags::empty()));
        assert!(filter.admits("coconut chutney", DietTags::empty()));
    }

    #[test]
    fn test_jain_blocks_root_vegetables() {
        let filter = DietFilter::for_profile(&profile(DietaryPreference::Jain, ""));
        assert!(!filter.admits("aloo methi", DietTags::empty()));
        assert!(!filter.admits("vegetable poha", DietTags::ROOT));
        assert!(filter.admits("gobi paratha", DietTags::GLUTEN));
    }

    #[test]
    fn test_allergy_family_expansion() {
        let filter = DietFilter::for_profile(&profile(DietaryPreference::Vegetarian, "Dairy"));
        assert!(!filter.admits("cucumber raita", DietTags::empty()));
        assert!(!filter.admits("turmeric latte", DietTags::empty()));
        assert!(filter.keywords().contains(&"dairy".to_owned()));

        let filter = DietFilter::for_profile(&profile(DietaryPreference::Vegetarian, "gluten"));
        assert!(!filter.admits("methi thepla", DietTags::empty()));
        assert!(!filter.admits("rava upma", DietTags::empty()));
        assert!(filter.admits("jowar roti", DietTags::empty()));
    }

    #[test]
    fn test_raw_allergy_terms_match_substrings() {
        let filter = DietFilter::for_profile(&profile(DietaryPreference::Vegetarian, "kiwi"));
        assert!(!filter.admits("kiwi", DietTags::empty()));
        assert!(filter.admits("apple", DietTags::empty()));
    }

    #[test]
    fn test_tree_nut_allergy_uses_nut_tag() {
        let filter = DietFilter::for_profile(&profile(DietaryPreference::Vegetarian, "tree nuts"));
        assert!(!filter.admits("sabudana khichdi", DietTags::NUTS));
        assert!(!filter.admits("peanut chutney", DietTags::empty()));
    }
}
