//! Stringprops analysis layer.
//!
//! This crate derives a structural property record from arbitrary text:
//! length, palindrome status, unique character count, word count, a SHA-256
//! content fingerprint, and a per-character frequency map. Downstream layers
//! (store, filter engine, HTTP surface) rely on the fingerprint for stable
//! identity and deduplication.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence beyond basic case folding.
//! Give us the same text and you get the same record on any machine.
//!
//! ## Invariants worth knowing
//!
//! - `analyze` is total: every input, including the empty string, yields a
//!   valid record
//! - `length` counts characters of the raw input, spaces included
//! - palindrome and uniqueness are judged on the lowercased,
//!   whitespace-stripped form
//! - the frequency map keeps original case and skips only the literal
//!   ASCII space
//! - fingerprint = SHA-256(raw input bytes), 64 lowercase hex characters
//!
//! Bottom line: same input = same record forever.

mod analyzer;
mod hash;
mod properties;

pub use crate::analyzer::analyze;
pub use crate::hash::hash_text;
pub use crate::properties::StringProperties;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_is_deterministic() {
        let inputs = ["", "Race car", "hello world", "a\u{10348}b", "  spaced  "];
        for input in inputs {
            assert_eq!(analyze(input), analyze(input), "input: {input:?}");
        }
    }

    #[test]
    fn palindrome_ignores_case_and_whitespace() {
        assert!(analyze("Race car").is_palindrome);
        assert!(analyze("A man a plan a canal Panama").is_palindrome);
        assert!(!analyze("hello").is_palindrome);
    }

    #[test]
    fn palindrome_on_empty_and_single_char() {
        // Empty normalized text reads the same in both directions.
        assert!(analyze("").is_palindrome);
        assert!(analyze("   ").is_palindrome);
        assert!(analyze("x").is_palindrome);
    }

    #[test]
    fn length_counts_raw_characters() {
        assert_eq!(analyze("").length, 0);
        assert_eq!(analyze("a b").length, 3);
        // Chars, not bytes: U+10348 is four UTF-8 bytes but one character.
        assert_eq!(analyze("a\u{10348}b").length, 3);
    }

    #[test]
    fn word_count_edge_cases() {
        assert_eq!(analyze("").word_count, 0);
        assert_eq!(analyze("   ").word_count, 0);
        assert_eq!(analyze("a  b   c").word_count, 3);
        assert_eq!(analyze("\tone\n two ").word_count, 2);
    }

    #[test]
    fn frequency_map_skips_spaces_and_keeps_case() {
        let props = analyze("a a");
        assert_eq!(props.character_frequency_map.len(), 1);
        assert_eq!(props.character_frequency_map.get(&'a'), Some(&2));
        assert!(!props.character_frequency_map.contains_key(&' '));

        let props = analyze("Aa");
        assert_eq!(props.character_frequency_map.get(&'A'), Some(&1));
        assert_eq!(props.character_frequency_map.get(&'a'), Some(&1));
    }

    #[test]
    fn frequency_map_counts_non_space_whitespace() {
        // Only the literal ASCII space is skipped; tabs and newlines count.
        let props = analyze("a\tb\n");
        assert_eq!(props.character_frequency_map.get(&'\t'), Some(&1));
        assert_eq!(props.character_frequency_map.get(&'\n'), Some(&1));
    }

    #[test]
    fn unique_characters_on_normalized_form() {
        // "Aa a" normalizes to "aaa": a single distinct character.
        assert_eq!(analyze("Aa a").unique_characters, 1);
        assert_eq!(analyze("abcabc").unique_characters, 3);
        assert_eq!(analyze("").unique_characters, 0);
    }

    #[test]
    fn fingerprint_is_lowercase_hex_of_raw_input() {
        let props = analyze("hello world");
        assert_eq!(props.sha256_hex.len(), 64);
        assert!(props.sha256_hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(props.sha256_hex, props.sha256_hex.to_lowercase());
        // Raw bytes are hashed: case and whitespace both matter.
        assert_ne!(props.sha256_hex, analyze("Hello world").sha256_hex);
        assert_ne!(props.sha256_hex, analyze("helloworld").sha256_hex);
        // Matches the standalone helper.
        assert_eq!(props.sha256_hex, hash_text("hello world"));
    }

    #[test]
    fn fingerprints_distinct_over_corpus() {
        let corpus = [
            "", " ", "a", "A", "ab", "ba", "race car", "Race car", "racecar",
            "hello", "hello world", "hello  world", "three word phrase",
        ];
        let mut seen = std::collections::HashSet::new();
        for input in corpus {
            assert!(
                seen.insert(analyze(input).sha256_hex),
                "fingerprint collision for {input:?}"
            );
        }
    }

    #[test]
    fn known_sha256_vector() {
        // SHA-256("abc") from FIPS 180-2.
        assert_eq!(
            analyze("abc").sha256_hex,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
