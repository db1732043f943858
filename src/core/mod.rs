//! Core domain types for word ladders
//!
//! Words, the one-letter adjacency relation, clue slots and the finished chain.
//! Everything here is pure and independent of how candidates are produced.

mod adjacency;
mod chain;
mod slot;
mod word;

pub use adjacency::{AdjacencyError, hamming, is_adjacent};
pub use chain::{Chain, ChainDefect, ChainLink, LadderPair, SolvedLadder};
pub use slot::{Candidate, Slot};
pub use word::{Word, WordError, normalize};
