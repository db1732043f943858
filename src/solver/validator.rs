//! Candidate validation
//!
//! Turns untrusted generator output into well-formed per-slot candidate lists.

use crate::core::{Candidate, Word};
use crate::generator::RawCandidate;
use rustc_hash::FxHashSet;

/// Default minimum number of viable candidates before a slot is reported sparse
pub const DEFAULT_MIN_CANDIDATES: usize = 3;

/// Filters raw candidates down to the ones a ladder can use
#[derive(Debug, Clone, Copy)]
pub struct CandidateValidator {
    pub word_length: usize,
    pub min_candidates: usize,
}

/// Result of validating one generation round
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Surviving candidates per slot, in generator order
    pub slots: Vec<Vec<Candidate>>,
    /// Indices of slots left with fewer than `min_candidates` viable words
    pub sparse_slots: Vec<usize>,
    /// Number of raw candidates dropped (malformed or duplicate)
    pub dropped: usize,
}

impl CandidateValidator {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            min_candidates: DEFAULT_MIN_CANDIDATES,
        }
    }

    #[must_use]
    pub const fn with_min_candidates(mut self, min_candidates: usize) -> Self {
        self.min_candidates = min_candidates;
        self
    }

    /// Validate a single slot's raw candidates
    ///
    /// Words are trimmed and uppercased; a candidate survives when its word is
    /// exactly `word_length` ASCII letters and its justification is non-empty.
    /// Duplicate words keep their first occurrence.
    #[must_use]
    pub fn validate_slot(&self, raw: &[RawCandidate]) -> Vec<Candidate> {
        let mut seen = FxHashSet::default();
        raw.iter()
            .filter_map(|candidate| {
                let word = Word::with_length(&candidate.word, self.word_length).ok()?;
                let justification = candidate.justification.trim();
                if justification.is_empty() {
                    return None;
                }
                seen.insert(word.text().to_string())
                    .then(|| Candidate::new(word.into_string(), justification))
            })
            .collect()
    }

    /// Validate every slot of a generation round
    ///
    /// Never fails; slots below the minimum are listed in `sparse_slots` for
    /// the caller to act on.
    #[must_use]
    pub fn validate(&self, raw_slots: &[Vec<RawCandidate>]) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (index, raw) in raw_slots.iter().enumerate() {
            let kept = self.validate_slot(raw);
            report.dropped += raw.len() - kept.len();
            if kept.len() < self.min_candidates {
                report.sparse_slots.push(index);
            }
            report.slots.push(kept);
        }

        report
    }
}
