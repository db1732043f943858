//! Ladder solving strategies
//!
//! Defines the `LadderSolver` trait and the runtime-selectable `SolverType`.

use super::assignment::SlotAssignmentSearch;
use super::budget::{DEFAULT_NODE_BUDGET, SearchBudget};
use super::reorder::AssignThenReorder;
use crate::core::{Chain, Slot};
use crate::error::LadderError;

/// Counters describing how much work a search did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes charged against the budget
    pub nodes_visited: usize,
    /// Failed states recorded (memoized dead ends or rejected combinations)
    pub dead_states: usize,
    /// Branches skipped because a dead state was already known
    pub memo_hits: usize,
}

/// A chain plus the statistics of the search that found it
#[derive(Debug, Clone)]
pub struct Solution {
    pub chain: Chain,
    pub stats: SearchStats,
}

/// Turns validated slots into a ladder
pub trait LadderSolver {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Choose one candidate per slot and order them into a chain
    ///
    /// # Errors
    /// Returns a `LadderError` describing why no chain was produced.
    fn solve(&self, slots: &[Slot]) -> Result<Solution, LadderError>;
}

/// Slot-order search first, assign-then-reorder when that finds nothing
///
/// Both stages draw on one budget of `node_budget` visits, so a single solve
/// never visits more nodes than that in total.
#[derive(Debug, Clone, Copy)]
pub struct FallbackSolver {
    pub node_budget: usize,
}

impl FallbackSolver {
    #[must_use]
    pub const fn new(node_budget: usize) -> Self {
        Self { node_budget }
    }
}

impl Default for FallbackSolver {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_BUDGET)
    }
}

impl LadderSolver for FallbackSolver {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn solve(&self, slots: &[Slot]) -> Result<Solution, LadderError> {
        let mut budget = SearchBudget::new(self.node_budget);
        match SlotAssignmentSearch::search_within(slots, &mut budget) {
            Err(err @ LadderError::NoValidAssignment { .. }) => {
                log::debug!(
                    target: "search",
                    "slot-order failed ({err}), reordering with {} of {} nodes left",
                    budget.limit().saturating_sub(budget.visited()),
                    budget.limit()
                );
                AssignThenReorder::search_within(slots, &mut budget)
            }
            other => other,
        }
    }
}

/// Enum wrapper for all solver types
///
/// Allows runtime selection of the solver while keeping static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum SolverType {
    /// Walk slots in input order (default)
    SlotOrder(SlotAssignmentSearch),
    /// Pick words, then find an order
    Reorder(AssignThenReorder),
    /// Slot order, then reorder
    Fallback(FallbackSolver),
}

impl LadderSolver for SolverType {
    fn name(&self) -> &'static str {
        match self {
            Self::SlotOrder(s) => s.name(),
            Self::Reorder(s) => s.name(),
            Self::Fallback(s) => s.name(),
        }
    }

    fn solve(&self, slots: &[Slot]) -> Result<Solution, LadderError> {
        match self {
            Self::SlotOrder(s) => s.solve(slots),
            Self::Reorder(s) => s.solve(slots),
            Self::Fallback(s) => s.solve(slots),
        }
    }
}

impl SolverType {
    /// Create a solver from its name
    ///
    /// Supported names: "slot-order", "reorder", "fallback".
    /// Defaults to slot-order if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, node_budget: usize) -> Self {
        match name {
            "reorder" | "assign-then-reorder" => {
                Self::Reorder(AssignThenReorder::new(node_budget))
            }
            "fallback" => Self::Fallback(FallbackSolver::new(node_budget)),
            _ => Self::SlotOrder(SlotAssignmentSearch::new(node_budget)),
        }
    }
}

impl Default for SolverType {
    fn default() -> Self {
        Self::SlotOrder(SlotAssignmentSearch::default())
    }
}
