//! Ladder word representation
//!
//! A Word is a normalized, uppercase, letters-only string of any positive length.

use std::fmt;
use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters A-Z")]
    InvalidCharacters,
}

/// An uppercase ladder word
///
/// Construction trims surrounding whitespace and uppercases, so two words that
/// differ only in case compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty or contains anything
    /// other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("  porch ").unwrap();
    /// assert_eq!(word.text(), "PORCH");
    ///
    /// assert!(Word::new("p0rch").is_err());
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the word, returning the owned text
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Trim and uppercase raw text the same way every ladder component does
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("parch").unwrap();
        assert_eq!(word.text(), "PARCH");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_trims_and_uppercases() {
        let word = Word::new("  PoRcH\t").unwrap();
        assert_eq!(word.text(), "PORCH");
    }

    #[test]
    fn word_creation_rejects_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("por3h").is_err()); // Number
        assert!(Word::new("por ch").is_err()); // Inner space
        assert!(Word::new("porch!").is_err()); // Punctuation
        assert!(Word::new("pörch").is_err()); // Non-ASCII
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("porch", 5).is_ok());
        assert_eq!(
            Word::with_length("porch", 4),
            Err(WordError::InvalidLength {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("cold").unwrap(), Word::new("COLD").unwrap());
        assert_ne!(Word::new("cold").unwrap(), Word::new("cord").unwrap());
    }

    #[test]
    fn word_display() {
        let word = Word::new("warm").unwrap();
        assert_eq!(format!("{word}"), "WARM");
    }
}
