//! Ladder error taxonomy
//!
//! Every failure carries a stable machine-readable code. Only
//! `MalformedInput`, `UpstreamUnavailable` and `AttemptsExhausted` ever reach
//! callers of `solve_ladder`; the rest are per-attempt failures that the retry
//! loop records and moves past.

use crate::commands::solve::Exhaustion;
use crate::core::ChainDefect;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum LadderError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("slot {slot} has no usable candidates")]
    CandidateExhausted { slot: usize },

    #[error("no assignment of candidates forms a ladder (per-slot counts {candidate_counts:?})")]
    NoValidAssignment { candidate_counts: Vec<usize> },

    #[error("words {words:?} cannot be ordered into a ladder")]
    NoValidOrdering { words: Vec<String> },

    #[error("search gave up after visiting {budget} nodes")]
    SearchBudgetExceeded { budget: usize },

    #[error("generator response does not match the request: {0}")]
    SchemaMismatch(String),

    #[error("solver produced an invalid chain: {0}")]
    InvalidChain(#[from] ChainDefect),

    #[error("candidate generator unavailable after {attempts} attempt(s): {reason}")]
    UpstreamUnavailable { attempts: usize, reason: String },

    #[error("no ladder found after {} attempt(s)", .0.attempts.len())]
    AttemptsExhausted(Box<Exhaustion>),
}

impl LadderError {
    /// Stable error code for machine consumers
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "malformed_input",
            Self::CandidateExhausted { .. } => "candidate_exhausted",
            Self::NoValidAssignment { .. } => "no_valid_assignment",
            Self::NoValidOrdering { .. } => "no_valid_ordering",
            Self::SearchBudgetExceeded { .. } => "search_budget_exceeded",
            Self::SchemaMismatch(_) => "schema_mismatch",
            Self::InvalidChain(_) => "invalid_chain",
            Self::UpstreamUnavailable { .. } => "upstream_unavailable",
            Self::AttemptsExhausted(_) => "attempts_exhausted",
        }
    }

    /// Whether another attempt with fresh candidates could succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !matches!(self, Self::MalformedInput(_) | Self::AttemptsExhausted(_))
    }

    /// Caller-facing report: code plus a human-readable reason
    #[must_use]
    pub fn report(&self) -> ErrorReport {
        let message = match self {
            // Search internals stay out of user-visible messages
            Self::AttemptsExhausted(exhaustion) => format!(
                "could not build a word ladder after {} attempt(s)",
                exhaustion.attempts.len()
            ),
            other => other.to_string(),
        };
        ErrorReport {
            code: self.code(),
            message,
        }
    }
}

/// Serializable `{ code, message }` error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            LadderError::MalformedInput("x".into()).code(),
            "malformed_input"
        );
        assert_eq!(
            LadderError::CandidateExhausted { slot: 2 }.code(),
            "candidate_exhausted"
        );
        assert_eq!(
            LadderError::UpstreamUnavailable {
                attempts: 1,
                reason: "down".into()
            }
            .code(),
            "upstream_unavailable"
        );
    }

    #[test]
    fn malformed_input_is_not_retryable() {
        assert!(!LadderError::MalformedInput("empty".into()).is_retryable());
        let dead_end = LadderError::NoValidAssignment {
            candidate_counts: vec![3, 3],
        };
        assert!(dead_end.is_retryable());
        let mismatch = LadderError::SchemaMismatch("3 slots for 2 clues".into());
        assert!(mismatch.is_retryable());
    }

    #[test]
    fn chain_defects_convert() {
        let err: LadderError = ChainDefect::RepeatedWord("COLD".into()).into();
        assert_eq!(err.code(), "invalid_chain");
        assert!(err.to_string().contains("COLD"));
    }

    #[test]
    fn report_carries_code_and_message() {
        let report = LadderError::CandidateExhausted { slot: 1 }.report();
        assert_eq!(report.code, "candidate_exhausted");
        assert_eq!(report.message, "slot 1 has no usable candidates");
    }
}
