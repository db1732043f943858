//! Candidate generation
//!
//! The solver never invents words itself. A `CandidateGenerator` proposes a
//! handful of `(word, justification)` pairs per clue; everything it returns is
//! treated as untrusted and passes through `CandidateValidator`.

pub mod backoff;
pub mod fixture;
pub mod lexicon;

pub use backoff::{BackoffGenerator, BackoffPolicy, Sleeper, ThreadSleeper};
pub use fixture::FixtureGenerator;
pub use lexicon::LexiconGenerator;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Most candidates a generator is expected to return per slot
pub const MAX_CANDIDATES_PER_SLOT: usize = 6;

/// One proposed word, exactly as the generator produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCandidate {
    pub word: String,
    #[serde(alias = "reasoning", default)]
    pub justification: String,
}

/// What the solver asks a generator for
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub word_length: usize,
    pub clues: &'a [String],
    /// Words rejected by earlier attempts; a hint, not a hard filter
    pub excluded: &'a BTreeSet<String>,
}

/// Failures reported by a generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Worth retrying after a pause (rate limiting, 5xx and the like)
    #[error("transient generator failure: {0}")]
    Transient(String),
    /// The generator cannot serve requests right now
    #[error("generator unavailable: {0}")]
    Unavailable(String),
    /// A response arrived but could not be understood
    #[error("malformed generator response: {0}")]
    Malformed(String),
}

/// Source of candidate words for each clue
pub trait CandidateGenerator {
    /// Propose candidates for every clue, in clue order
    ///
    /// # Errors
    /// Returns a `GeneratorError` when no response could be produced.
    fn generate(
        &mut self,
        request: &GenerationRequest<'_>,
    ) -> Result<Vec<Vec<RawCandidate>>, GeneratorError>;
}

impl<G: CandidateGenerator + ?Sized> CandidateGenerator for Box<G> {
    fn generate(
        &mut self,
        request: &GenerationRequest<'_>,
    ) -> Result<Vec<Vec<RawCandidate>>, GeneratorError> {
        (**self).generate(request)
    }
}
