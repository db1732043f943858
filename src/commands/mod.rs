//! Command implementations

pub mod batch;
pub mod check;
pub mod solve;

pub use batch::{
    BatchEntry, BatchOptions, BatchOutcome, BatchSummary, Puzzle, parse_puzzles, run_batch,
};
pub use check::{CheckReport, Step, check_words};
pub use solve::{
    Attempt, AttemptOutcome, DEFAULT_MAX_ATTEMPTS, Exhaustion, MAX_CLUE_CHARS, Pipeline,
    SolveConfig, SolveResult, solve_ladder,
};
