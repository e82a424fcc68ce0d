//! Property record types.
//!
//! This module defines [`StringProperties`], the output of [`analyze`]. The
//! record is a pure function of the input text: no hidden state, no clock,
//! no locale dependence beyond basic case folding.
//!
//! # Determinism
//!
//! For a fixed input string, all fields are deterministic:
//! - Same `length`, `word_count`, `unique_characters`
//! - Same `is_palindrome` verdict
//! - Same `sha256_hex` identity hash
//! - Same `character_frequency_map` contents
//!
//! [`analyze`]: crate::analyze

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structural properties derived from a single string.
///
/// Produced by [`analyze`](crate::analyze); immutable once constructed.
/// The `sha256_hex` field is the entity's identity and the only key any
/// persistence layer should use for lookup or deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Character count of the raw input, spaces included.
    pub length: usize,

    /// Whether the lowercased, whitespace-stripped form equals its own
    /// character-wise reverse.
    pub is_palindrome: bool,

    /// Distinct characters in the lowercased, whitespace-stripped form.
    pub unique_characters: usize,

    /// Whitespace-delimited tokens in the trimmed input; 0 for empty or
    /// whitespace-only input.
    pub word_count: usize,

    /// SHA-256 of the raw input bytes, 64 lowercase hex characters.
    pub sha256_hex: String,

    /// Occurrences of each character in the raw input, case-sensitive,
    /// excluding the literal ASCII space. Ordered for stable serialization;
    /// key order carries no meaning.
    pub character_frequency_map: BTreeMap<char, u64>,
}
