//! Word ladder solving
//!
//! Candidate validation plus the two search strategies that turn validated
//! slots into a chain.

pub mod assignment;
pub mod budget;
pub mod ordering;
pub mod reorder;
pub mod strategy;
pub mod validator;

pub use assignment::SlotAssignmentSearch;
pub use budget::{DEFAULT_NODE_BUDGET, SearchBudget};
pub use ordering::{AdjacencyGraph, ChainOrderer};
pub use reorder::AssignThenReorder;
pub use strategy::{FallbackSolver, LadderSolver, SearchStats, Solution, SolverType};
pub use validator::{CandidateValidator, DEFAULT_MIN_CANDIDATES, ValidationReport};
