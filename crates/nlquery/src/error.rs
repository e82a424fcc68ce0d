use thiserror::Error;

/// Errors from the query interpreter.
///
/// There is exactly one: contradictory length bounds. Unrecognized phrasing
/// is never an error, it simply contributes no constraint.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("conflicting length constraints: min_length {min} exceeds max_length {max}")]
    ConflictingLengthBounds { min: usize, max: usize },
}
