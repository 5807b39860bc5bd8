// ABOUTME: Fragment-level duplicate removal for a composed meal description
// ABOUTME: Keeps the first fragment of each food and rejoins survivors as an English list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::fragments::{oxford_join, split_fragments};
use super::{Cleaned, DedupEngine, FragmentKey, UnchangedReason, FALLBACK_PHRASE};
use tracing::debug;

impl DedupEngine<'_> {
    /// Drop later fragments that repeat a food named by an earlier fragment
    ///
    /// Text without duplicates comes back untouched. Otherwise the surviving
    /// fragments are rejoined as "a, b, and c". When nothing that names a food
    /// survives, the fallback phrase is returned.
    #[must_use]
    pub fn remove_duplicate_food_items(&self, text: &str) -> Cleaned {
        if text.trim().is_empty() {
            return Cleaned::unchanged(text, UnchangedReason::EmptyInput);
        }
        let fragments = match split_fragments(text) {
            Ok(fragments) => fragments,
            Err(problem) => {
                debug!(%problem, "Skipping duplicate removal for malformed meal text");
                return Cleaned::unchanged(text, UnchangedReason::Malformed(problem));
            }
        };

        let mut kept: Vec<(&str, FragmentKey)> = Vec::with_capacity(fragments.len());
        let mut dropped = 0_usize;
        for fragment in &fragments {
            let key = self.key_for(&fragment.text);
            let repeated = if key.is_blank() {
                kept.iter().any(|(text, _)| text.eq_ignore_ascii_case(&fragment.text))
            } else {
                kept.iter().any(|(_, earlier)| self.same_food(earlier, &key))
            };
            if repeated {
                dropped += 1;
            } else {
                kept.push((fragment.text.as_str(), key));
            }
        }

        if dropped == 0 {
            return Cleaned::unchanged(text, UnchangedReason::NoDuplicates);
        }
        debug!(dropped, kept = kept.len(), "Removed repeated food fragments");
        if kept.iter().all(|(_, key)| key.is_blank()) {
            return Cleaned::Changed(FALLBACK_PHRASE.to_owned());
        }
        let survivors: Vec<&str> = kept.iter().map(|(text, _)| *text).collect();
        Cleaned::Changed(oxford_join(&survivors))
    }
}
