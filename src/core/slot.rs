//! Clue slots and their candidate words

use serde::{Deserialize, Serialize};

/// A validated candidate word for one slot
///
/// Invariant (upheld by `CandidateValidator`): `word` is uppercase A-Z with
/// the slot's word length, and `justification` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub justification: String,
}

impl Candidate {
    #[must_use]
    pub fn new(word: impl Into<String>, justification: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            justification: justification.into(),
        }
    }
}

/// One clue position that needs exactly one word in the ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub clue: String,
    pub word_length: usize,
    pub candidates: Vec<Candidate>,
}

impl Slot {
    /// Create a slot with no candidates yet
    #[must_use]
    pub fn new(clue: impl Into<String>, word_length: usize) -> Self {
        Self {
            clue: clue.into(),
            word_length,
            candidates: Vec::new(),
        }
    }

    /// Replace the candidate list wholesale (used between attempts)
    #[must_use]
    pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Iterate over the candidate words in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.word.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_starts_empty() {
        let slot = Slot::new("Covered entrance to a house", 5);
        assert!(slot.candidates.is_empty());
        assert_eq!(slot.word_length, 5);
    }

    #[test]
    fn slot_candidates_replaced_wholesale() {
        let first = vec![Candidate::new("COLD", "a"), Candidate::new("CORD", "b")];
        let slot = Slot::new("clue", 4)
            .with_candidates(first)
            .with_candidates(vec![Candidate::new("WARM", "c")]);
        assert_eq!(slot.words().collect::<Vec<_>>(), vec!["WARM"]);
    }
}
