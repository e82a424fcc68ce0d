use std::collections::{BTreeMap, BTreeSet};

use crate::hash::hash_text;
use crate::properties::StringProperties;

/// Main entry point. Derives the full property record for `input`.
///
/// Total for any string, including the empty string; there is no failure
/// mode. Runs in a single pass per property, linear in input length.
pub fn analyze(input: &str) -> StringProperties {
    // Raw character count, spaces included. Chars, not bytes, so multi-byte
    // input counts correctly.
    let length = input.chars().count();

    // Case folding first, then whitespace removal. Palindrome status and
    // character uniqueness are both judged on this normalized form.
    let normalized: String = input
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    // Character-wise reversal, not byte reversal, so multi-byte text stays
    // valid under comparison.
    let reversed: String = normalized.chars().rev().collect();
    let is_palindrome = normalized == reversed;

    let unique_characters = normalized.chars().collect::<BTreeSet<char>>().len();

    // split_whitespace trims edges and collapses runs, so empty and
    // whitespace-only input both yield 0.
    let word_count = input.split_whitespace().count();

    let sha256_hex = hash_text(input);

    // Frequency runs over the raw input: case kept, only the literal ASCII
    // space skipped. Tabs and newlines count like any other character.
    let mut character_frequency_map: BTreeMap<char, u64> = BTreeMap::new();
    for ch in input.chars() {
        if ch == ' ' {
            continue;
        }
        *character_frequency_map.entry(ch).or_insert(0) += 1;
    }

    StringProperties {
        length,
        is_palindrome,
        unique_characters,
        word_count,
        sha256_hex,
        character_frequency_map,
    }
}
