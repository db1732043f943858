//! Letter-step adjacency between ladder words
//!
//! Two words are adjacent when they have the same length and differ in exactly
//! one position. Comparison ignores ASCII case.

use thiserror::Error;

/// Error returned when comparing words of different lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdjacencyError {
    #[error("cannot compare words of length {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Count the positions at which two equal-length words differ
///
/// Length is measured in characters, and characters are compared
/// case-insensitively.
///
/// # Errors
/// Returns `AdjacencyError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use word_ladder::core::hamming;
///
/// assert_eq!(hamming("parch", "PORCH"), Ok(1));
/// assert_eq!(hamming("cold", "cold"), Ok(0));
/// assert!(hamming("cold", "colder").is_err());
/// ```
pub fn hamming(a: &str, b: &str) -> Result<usize, AdjacencyError> {
    let left = a.chars().count();
    let right = b.chars().count();
    if left != right {
        return Err(AdjacencyError::LengthMismatch { left, right });
    }

    Ok(a.chars()
        .zip(b.chars())
        .filter(|(x, y)| !x.eq_ignore_ascii_case(y))
        .count())
}

/// Check whether two words are exactly one letter apart
///
/// Words of different lengths are never adjacent.
#[inline]
#[must_use]
pub fn is_adjacent(a: &str, b: &str) -> bool {
    hamming(a, b) == Ok(1)
}
