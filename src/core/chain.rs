//! The ladder chain: the ordered, validated result of a solve

use super::adjacency::hamming;
use super::slot::Slot;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A word placed in the ladder, remembering which slot it answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainLink {
    pub word: String,
    pub slot: usize,
    pub clue: String,
    pub justification: String,
}

/// An ordered sequence of links, one per slot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chain {
    links: Vec<ChainLink>,
}

/// Structural problems found by [`Chain::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainDefect {
    #[error("chain has {actual} words but {expected} clues were given")]
    WrongLength { expected: usize, actual: usize },
    #[error(
        "{left} and {right} (positions {position} and {next}) are not one letter apart",
        next = .position + 1
    )]
    NotAdjacent {
        position: usize,
        left: String,
        right: String,
    },
    #[error("word {0} appears more than once")]
    RepeatedWord(String),
    #[error("clue {0:?} does not match any input clue")]
    UnknownClue(String),
    #[error("clue {0:?} is used more than once")]
    RepeatedClue(String),
}

/// One `{word, clue, reasoning}` entry of a solved ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderPair {
    pub word: String,
    pub clue: String,
    pub reasoning: String,
}

/// Caller-facing rendering of a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedLadder {
    pub ladder: Vec<String>,
    pub pairs: Vec<LadderPair>,
}

impl Chain {
    #[must_use]
    pub const fn new(links: Vec<ChainLink>) -> Self {
        Self { links }
    }

    /// Best-effort chain of the first candidate per slot, in slot order
    ///
    /// Slots without candidates are left out, so the draft may be short and
    /// is not expected to pass [`Chain::validate`].
    #[must_use]
    pub fn draft(slots: &[Slot]) -> Self {
        let links = slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.candidates.first().map(|candidate| ChainLink {
                    word: candidate.word.clone(),
                    slot: index,
                    clue: slot.clue.clone(),
                    justification: candidate.justification.clone(),
                })
            })
            .collect();
        Self { links }
    }

    #[must_use]
    pub fn links(&self) -> &[ChainLink] {
        &self.links
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Ladder words in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|link| link.word.as_str())
    }

    /// Check every structural invariant of a finished ladder against the
    /// clues it was built from
    ///
    /// # Errors
    /// Returns the first `ChainDefect` found.
    pub fn validate(&self, clues: &[String]) -> Result<(), ChainDefect> {
        if self.links.len() != clues.len() {
            return Err(ChainDefect::WrongLength {
                expected: clues.len(),
                actual: self.links.len(),
            });
        }

        for (position, pair) in self.links.windows(2).enumerate() {
            if hamming(&pair[0].word, &pair[1].word) != Ok(1) {
                return Err(ChainDefect::NotAdjacent {
                    position,
                    left: pair[0].word.clone(),
                    right: pair[1].word.clone(),
                });
            }
        }

        let mut seen_words = FxHashSet::default();
        for link in &self.links {
            if !seen_words.insert(link.word.to_uppercase()) {
                return Err(ChainDefect::RepeatedWord(link.word.clone()));
            }
        }

        let mut remaining: Vec<String> = clues.iter().map(|c| c.to_lowercase()).collect();
        for link in &self.links {
            let key = link.clue.to_lowercase();
            match remaining.iter().position(|c| *c == key) {
                Some(index) => {
                    remaining.swap_remove(index);
                }
                None if clues.iter().any(|c| c.to_lowercase() == key) => {
                    return Err(ChainDefect::RepeatedClue(link.clue.clone()));
                }
                None => return Err(ChainDefect::UnknownClue(link.clue.clone())),
            }
        }

        Ok(())
    }

    /// Render as the `{ ladder, pairs }` shape handed back to callers
    #[must_use]
    pub fn to_solved(&self) -> SolvedLadder {
        SolvedLadder {
            ladder: self.links.iter().map(|l| l.word.clone()).collect(),
            pairs: self
                .links
                .iter()
                .map(|l| LadderPair {
                    word: l.word.clone(),
                    clue: l.clue.clone(),
                    reasoning: l.justification.clone(),
                })
                .collect(),
        }
    }
}
