//! Assign-then-reorder solving
//!
//! Decouples "which word" from "what order": pick one candidate per slot, then
//! ask the [`ChainOrderer`] whether those words can be arranged into a ladder.
//! Combinations are enumerated with earlier candidates first, so the top
//! candidate of every slot is tried before anything else.

use super::budget::{DEFAULT_NODE_BUDGET, SearchBudget};
use super::ordering::ChainOrderer;
use super::strategy::{LadderSolver, SearchStats, Solution};
use crate::core::{ChainLink, Slot, is_adjacent};
use crate::error::LadderError;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy)]
pub struct AssignThenReorder {
    pub node_budget: usize,
}

impl AssignThenReorder {
    #[must_use]
    pub const fn new(node_budget: usize) -> Self {
        Self { node_budget }
    }

    /// Candidate indices per slot that have at least one neighbour in some
    /// other slot; a word with none can never sit inside a ladder of two or
    /// more words
    fn connectable(slots: &[Slot]) -> Vec<Vec<usize>> {
        if slots.len() < 2 {
            return slots
                .iter()
                .map(|s| (0..s.candidates.len()).collect())
                .collect();
        }

        slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.candidates
                    .iter()
                    .enumerate()
                    .filter(|(_, candidate)| {
                        slots.iter().enumerate().any(|(j, other)| {
                            j != i && other.words().any(|w| is_adjacent(&candidate.word, w))
                        })
                    })
                    .map(|(index, _)| index)
                    .collect()
            })
            .collect()
    }

    /// Run the search with a fresh budget of `node_budget` visits
    ///
    /// # Errors
    /// - `CandidateExhausted` if any slot has no candidates
    /// - `NoValidOrdering` if no combination can be ordered into a ladder
    /// - `SearchBudgetExceeded` if the node budget runs out first
    pub fn search(&self, slots: &[Slot]) -> Result<Solution, LadderError> {
        Self::search_within(slots, &mut SearchBudget::new(self.node_budget))
    }

    /// Run the search, charging visits to a budget owned by the caller
    ///
    /// # Errors
    /// Same as [`AssignThenReorder::search`].
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

        let top_words = || -> Vec<String> {
            slots
                .iter()
                .filter_map(|s| s.candidates.first().map(|c| c.word.clone()))
                .collect()
        };

        let choices = Self::connectable(slots);
        if choices.iter().any(Vec::is_empty) {
            return Err(LadderError::NoValidOrdering { words: top_words() });
        }

        let mut stats = SearchStats::default();
        let mut odometer = vec![0usize; slots.len()];

        loop {
            budget.visit()?;

            let links: Vec<ChainLink> = odometer
                .iter()
                .enumerate()
                .map(|(slot_index, &choice)| {
                    let slot = &slots[slot_index];
                    let candidate = &slot.candidates[choices[slot_index][choice]];
                    ChainLink {
                        word: candidate.word.clone(),
                        slot: slot_index,
                        clue: slot.clue.clone(),
                        justification: candidate.justification.clone(),
                    }
                })
                .collect();

            let distinct = {
                let mut seen = FxHashSet::default();
                links.iter().all(|l| seen.insert(l.word.as_str()))
            };
            if distinct {
                match ChainOrderer.order(links, budget) {
                    Ok(chain) => {
                        stats.nodes_visited = budget.visited();
                        log::debug!(
                            target: "search",
                            "reorder search succeeded after {} nodes ({} combinations rejected)",
                            stats.nodes_visited,
                            stats.dead_states
                        );
                        return Ok(Solution { chain, stats });
                    }
                    Err(LadderError::NoValidOrdering { .. }) => stats.dead_states += 1,
                    Err(other) => return Err(other),
                }
            } else {
                stats.dead_states += 1;
            }

            if !advance(&mut odometer, &choices) {
                break;
            }
        }

        log::debug!(
            target: "search",
            "reorder search exhausted after {} nodes",
            budget.visited()
        );
        Err(LadderError::NoValidOrdering { words: top_words() })
    }
}

/// Step the odometer to the next combination; false once every combination
/// has been produced
fn advance(odometer: &mut [usize], choices: &[Vec<usize>]) -> bool {
    for position in (0..odometer.len()).rev() {
        odometer[position] += 1;
        if odometer[position] < choices[position].len() {
            return true;
        }
        odometer[position] = 0;
    }
    false
}

impl Default for AssignThenReorder {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_BUDGET)
    }
}

impl LadderSolver for AssignThenReorder {
    fn name(&self) -> &'static str {
        "reorder"
    }

    fn solve(&self, slots: &[Slot]) -> Result<Solution, LadderError> {
        self.search(slots)
    }
}
