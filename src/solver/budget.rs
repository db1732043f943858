//! Node-visit budget shared by the search strategies

use crate::error::LadderError;

/// Default cap on search nodes visited for one solve
pub const DEFAULT_NODE_BUDGET: usize = 250_000;

/// Counts visited search nodes and stops exploration past a fixed limit
#[derive(Debug, Clone)]
pub struct SearchBudget {
    limit: usize,
    visited: usize,
}

impl SearchBudget {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit, visited: 0 }
    }

    /// Record one visited node
    ///
    /// # Errors
    /// Returns `LadderError::SearchBudgetExceeded` once the limit is passed.
    #[inline]
    pub fn visit(&mut self) -> Result<(), LadderError> {
        self.visited += 1;
        if self.visited > self.limit {
            return Err(LadderError::SearchBudgetExceeded { budget: self.limit });
        }
        Ok(())
    }

    #[must_use]
    pub const fn visited(&self) -> usize {
        self.visited
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_BUDGET)
    }
}
