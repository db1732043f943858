//! Slot-order assignment search
//!
//! Picks one candidate per slot, walking the slots in input order and requiring
//! each chosen word to be one letter away from the word chosen for the slot
//! before it. The result is a chain in slot order with no reordering pass.

use super::budget::{DEFAULT_NODE_BUDGET, SearchBudget};
use super::strategy::{LadderSolver, SearchStats, Solution};
use crate::core::{Chain, ChainLink, Slot, is_adjacent};
use crate::error::LadderError;
use rustc_hash::FxHashSet;

/// Depth-first assignment search over slots in input order
#[derive(Debug, Clone, Copy)]
pub struct SlotAssignmentSearch {
    pub node_budget: usize,
}

/// One level of the explicit search stack
struct Frame {
    /// Slot this frame assigns
    slot: usize,
    /// Candidate indices still eligible for this slot, in candidate order
    order: Vec<usize>,
    /// Next position in `order` to try
    cursor: usize,
    /// Candidate currently committed while deeper slots are explored
    chosen: Option<usize>,
    /// Set when a candidate in this subtree was skipped for repeating a word;
    /// such a failure depends on the path and must not be memoized
    tainted: bool,
}

impl Frame {
    const fn new(slot: usize, order: Vec<usize>) -> Self {
        Self {
            slot,
            order,
            cursor: 0,
            chosen: None,
            tainted: false,
        }
    }
}

impl SlotAssignmentSearch {
    #[must_use]
    pub const fn new(node_budget: usize) -> Self {
        Self { node_budget }
    }

    /// Candidates of `slot` that can follow `prev`, in candidate order
    fn eligible(slot: &Slot, prev: &str) -> Vec<usize> {
        slot.candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| is_adjacent(prev, &c.word))
            .map(|(i, _)| i)
            .collect()
    }

    /// Run the search with a fresh budget of `node_budget` visits
    ///
    /// # Errors
    /// - `CandidateExhausted` if any slot has no candidates
    /// - `NoValidAssignment` if every branch fails
    /// - `SearchBudgetExceeded` if the node budget runs out first
    pub fn search(&self, slots: &[Slot]) -> Result<Solution, LadderError> {
        Self::search_within(slots, &mut SearchBudget::new(self.node_budget))
    }

    /// Run the search, charging visits to a budget owned by the caller
    ///
    /// # Errors
    /// Same as [`SlotAssignmentSearch::search`].
    pub fn search_within(
        slots: &[Slot],
        budget: &mut SearchBudget,
    ) -> Result<Solution, LadderError> {
        if slots.is_empty() {
            return Err(LadderError::MalformedInput("no slots to assign".into()));
        }
        if let Some(slot) = slots.iter().position(|s| s.candidates.is_empty()) {
            return Err(LadderError::CandidateExhausted { slot });
        }

        let mut stats = SearchStats::default();
        // (slot index, previous word) pairs proven to have no completion
        let mut dead: FxHashSet<(usize, &str)> = FxHashSet::default();
        let mut used: FxHashSet<&str> = FxHashSet::default();

        let root_order = (0..slots[0].candidates.len()).collect();
        let mut stack = vec![Frame::new(0, root_order)];

        while let Some(frame) = stack.last_mut() {
            let slot = &slots[frame.slot];

            let Some(&candidate) = frame.order.get(frame.cursor) else {
                let failed_slot = frame.slot;
                let tainted = frame.tainted;
                stack.pop();

                if let Some(parent) = stack.last_mut()
                    && let Some(chosen) = parent.chosen.take()
                {
                    let prev = slots[parent.slot].candidates[chosen].word.as_str();
                    used.remove(prev);
                    if tainted {
                        parent.tainted = true;
                    } else {
                        dead.insert((failed_slot, prev));
                        stats.dead_states += 1;
                    }
                }
                continue;
            };
            frame.cursor += 1;
            budget.visit()?;

            let word = slot.candidates[candidate].word.as_str();
            if used.contains(word) {
                frame.tainted = true;
                continue;
            }

            let next = frame.slot + 1;
            if next == slots.len() {
                frame.chosen = Some(candidate);
                stats.nodes_visited = budget.visited();
                log::debug!(
                    target: "search",
                    "slot-order search succeeded: {} nodes, {} dead states, {} memo hits",
                    stats.nodes_visited,
                    stats.dead_states,
                    stats.memo_hits
                );
                return Ok(Solution {
                    chain: chain_from_stack(slots, &stack),
                    stats,
                });
            }

            if dead.contains(&(next, word)) {
                stats.memo_hits += 1;
                continue;
            }

            frame.chosen = Some(candidate);
            used.insert(word);
            stack.push(Frame::new(next, Self::eligible(&slots[next], word)));
        }

        log::debug!(
            target: "search",
            "slot-order search exhausted after {} nodes",
            budget.visited()
        );
        Err(LadderError::NoValidAssignment {
            candidate_counts: slots.iter().map(|s| s.candidates.len()).collect(),
        })
    }
}

fn chain_from_stack(slots: &[Slot], stack: &[Frame]) -> Chain {
    let links = stack
        .iter()
        .filter_map(|frame| {
            let slot = &slots[frame.slot];
            frame.chosen.map(|chosen| {
                let candidate = &slot.candidates[chosen];
                ChainLink {
                    word: candidate.word.clone(),
                    slot: frame.slot,
                    clue: slot.clue.clone(),
                    justification: candidate.justification.clone(),
                }
            })
        })
        .collect();
    Chain::new(links)
}

impl Default for SlotAssignmentSearch {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_BUDGET)
    }
}

impl LadderSolver for SlotAssignmentSearch {
    fn name(&self) -> &'static str {
        "slot-order"
    }

    fn solve(&self, slots: &[Slot]) -> Result<Solution, LadderError> {
        self.search(slots)
    }
}
