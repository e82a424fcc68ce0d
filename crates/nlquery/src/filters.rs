//! Structured filter set.
//!
//! [`StringFilters`] is the common currency between the natural-language
//! interpreter, explicit query parameters, and the filter engine: a sparse
//! record where an absent field means "no constraint". Absent fields are
//! omitted from serialized output, so responses echo exactly the filters
//! that were applied.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A sparse set of optional constraints over stored string properties.
///
/// Constructed either by [`parse_query`](crate::parse_query) or directly
/// from explicit request parameters. Never mutated after construction;
/// callers building one by hand must run [`validate`](Self::validate) to
/// uphold the `min_length <= max_length` invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringFilters {
    /// Require the palindrome verdict to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Inclusive lower bound on character length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Inclusive upper bound on character length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Require an exact word count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    /// Require this character to appear in the frequency map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilters {
    /// True when no field carries a constraint.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Enforce `min_length <= max_length` when both bounds are present.
    pub fn validate(&self) -> Result<(), ParseError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(ParseError::ConflictingLengthBounds { min, max });
            }
        }
        Ok(())
    }
}
