//! Batch solving
//!
//! Solves a file of puzzles in parallel. Each puzzle carries its own candidate
//! fixture, so a batch run is fully offline and reproducible.

use super::solve::{Pipeline, SolveConfig, solve_ladder};
use crate::core::SolvedLadder;
use crate::error::{ErrorReport, LadderError};
use crate::generator::{FixtureGenerator, RawCandidate};
use crate::solver::LadderSolver;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// One puzzle in a batch file
#[derive(Debug, Clone, Deserialize)]
pub struct Puzzle {
    #[serde(default)]
    pub name: Option<String>,
    pub word_length: usize,
    pub clues: Vec<String>,
    /// Candidate lists keyed by clue text
    pub candidates: FxHashMap<String, Vec<RawCandidate>>,
}

/// Parse a batch file: a JSON array of puzzles
///
/// # Errors
/// Returns the `serde_json` error if the document does not match.
pub fn parse_puzzles(json: &str) -> Result<Vec<Puzzle>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Shared settings for every puzzle in a batch
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub max_attempts: usize,
    pub pipeline: Pipeline,
    pub show_progress: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_attempts: super::solve::DEFAULT_MAX_ATTEMPTS,
            pipeline: Pipeline::Repair,
            show_progress: false,
        }
    }
}

/// Result for one puzzle
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub index: usize,
    pub name: Option<String>,
    pub attempts: usize,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    Solved(SolvedLadder),
    Failed(ErrorReport),
}

/// Aggregate statistics for a batch
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub entries: Vec<BatchEntry>,
    pub solved: usize,
    pub failed: usize,
    pub failures_by_code: BTreeMap<&'static str, usize>,
    pub average_attempts: f64,
    pub duration: Duration,
}

impl BatchSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

/// Solve every puzzle, in parallel, with the same solver
#[must_use]
pub fn run_batch<L>(puzzles: &[Puzzle], solver: &L, options: BatchOptions) -> BatchSummary
where
    L: LadderSolver + Sync,
{
    let start = Instant::now();
    let pb = progress_bar(puzzles.len(), options.show_progress);

    let mut entries: Vec<BatchEntry> = puzzles
        .par_iter()
        .enumerate()
        .map(|(index, puzzle)| {
            let entry = solve_puzzle(index, puzzle, solver, options);
            pb.inc(1);
            entry
        })
        .collect();
    entries.sort_by_key(|e| e.index);

    pb.finish_with_message("done");

    let mut failures_by_code = BTreeMap::new();
    for entry in &entries {
        if let BatchOutcome::Failed(report) = &entry.outcome {
            *failures_by_code.entry(report.code).or_insert(0) += 1;
        }
    }
    let failed: usize = failures_by_code.values().sum();
    let total_attempts: usize = entries.iter().map(|e| e.attempts).sum();
    let average_attempts = if entries.is_empty() {
        0.0
    } else {
        total_attempts as f64 / entries.len() as f64
    };

    log::info!(
        target: "orchestrator",
        "batch of {} finished: {} solved, {failed} failed",
        entries.len(),
        entries.len() - failed
    );

    BatchSummary {
        solved: entries.len() - failed,
        failed,
        failures_by_code,
        average_attempts,
        duration: start.elapsed(),
        entries,
    }
}

fn solve_puzzle<L: LadderSolver>(
    index: usize,
    puzzle: &Puzzle,
    solver: &L,
    options: BatchOptions,
) -> BatchEntry {
    let mut config = SolveConfig::new(puzzle.word_length, puzzle.clues.clone());
    config.max_attempts = options.max_attempts;
    config.pipeline = options.pipeline;

    let mut generator = FixtureGenerator::new(puzzle.candidates.clone());
    let (attempts, outcome) = match solve_ladder(&config, &mut generator, solver) {
        Ok(result) => (
            result.attempts.len(),
            BatchOutcome::Solved(result.chain.to_solved()),
        ),
        Err(err) => {
            let attempts = match &err {
                LadderError::AttemptsExhausted(exhaustion) => exhaustion.attempts.len(),
                LadderError::UpstreamUnavailable { attempts, .. } => *attempts,
                _ => 0,
            };
            (attempts, BatchOutcome::Failed(err.report()))
        }
    };

    BatchEntry {
        index,
        name: puzzle.name.clone(),
        attempts,
        outcome,
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverType;

    const PUZZLES: &str = r#"[
        {
            "name": "heat",
            "word_length": 5,
            "clues": ["Become dry through extreme heat", "Covered entrance to a house"],
            "candidates": {
                "Become dry through extreme heat": [
                    {"word": "PARCH", "justification": "dry out"},
                    {"word": "SEARS", "justification": "burns"}
                ],
                "Covered entrance to a house": [
                    {"word": "PORCH", "justification": "entrance"}
                ]
            }
        },
        {
            "word_length": 4,
            "clues": ["a", "b"],
            "candidates": {
                "a": [{"word": "COLD", "justification": "chilly"}],
                "b": [{"word": "WARM", "justification": "heated"}]
            }
        },
        {
            "word_length": 0,
            "clues": ["a"],
            "candidates": {}
        }
    ]"#;

    #[test]
    fn parses_puzzle_file() {
        let puzzles = parse_puzzles(PUZZLES).unwrap();
        assert_eq!(puzzles.len(), 3);
        assert_eq!(puzzles[0].name.as_deref(), Some("heat"));
        assert!(puzzles[1].name.is_none());
        assert_eq!(puzzles[1].candidates["a"][0].word, "COLD");
    }

    #[test]
    fn rejects_malformed_file() {
        assert!(parse_puzzles(r#"{"word_length": 4}"#).is_err());
    }

    #[test]
    fn summarizes_mixed_batch() {
        let puzzles = parse_puzzles(PUZZLES).unwrap();
        let options = BatchOptions {
            max_attempts: 2,
            ..BatchOptions::default()
        };
        let summary = run_batch(&puzzles, &SolverType::default(), options);

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.solved, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.failures_by_code.get("attempts_exhausted"), Some(&1));
        assert_eq!(summary.failures_by_code.get("malformed_input"), Some(&1));

        let indices: Vec<_> = summary.entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        match &summary.entries[0].outcome {
            BatchOutcome::Solved(ladder) => assert_eq!(ladder.ladder, vec!["PARCH", "PORCH"]),
            BatchOutcome::Failed(report) => panic!("unexpected failure: {}", report.message),
        }
        assert_eq!(summary.entries[1].attempts, 2);
        assert!((summary.average_attempts - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn entry_serializes_flat() {
        let entry = BatchEntry {
            index: 0,
            name: None,
            attempts: 1,
            outcome: BatchOutcome::Failed(LadderError::MalformedInput("x".into()).report()),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["failed"]["code"], "malformed_input");
        assert_eq!(json["attempts"], 1);
    }

    #[test]
    fn empty_batch() {
        let summary = run_batch(&[], &SolverType::default(), BatchOptions::default());
        assert_eq!(summary.total(), 0);
        assert!(summary.average_attempts.abs() < f64::EPSILON);
    }
}
