//! Chain ordering
//!
//! Given one word per slot, find an order in which every neighbouring pair is
//! one letter apart. This is a Hamiltonian path search over the adjacency
//! graph of the chosen words.
//!
//! ## Search order
//!
//! Low-degree vertices are tried first, both as starting points and as the
//! next step. A vertex with a single neighbour can only ever be an end of the
//! ladder, so committing to it early fails fast on dead ends. Ties fall back
//! to input order, which keeps the result deterministic.

use super::budget::SearchBudget;
use crate::core::{Chain, ChainLink, is_adjacent};
use crate::error::LadderError;
use rustc_hash::FxHashSet;

/// Undirected one-letter adjacency graph over a fixed word list
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    /// Neighbour lists, sorted by (degree, index)
    neighbours: Vec<Vec<usize>>,
    degrees: Vec<usize>,
}

impl AdjacencyGraph {
    #[must_use]
    pub fn build<S: AsRef<str>>(words: &[S]) -> Self {
        let n = words.len();
        let mut neighbours = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if is_adjacent(words[i].as_ref(), words[j].as_ref()) {
                    neighbours[i].push(j);
                    neighbours[j].push(i);
                }
            }
        }

        let degrees: Vec<usize> = neighbours.iter().map(Vec::len).collect();
        for list in &mut neighbours {
            list.sort_by_key(|&v| (degrees[v], v));
        }

        Self {
            neighbours,
            degrees,
        }
    }

    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.degrees[vertex]
    }

    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> &[usize] {
        &self.neighbours[vertex]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Starting vertices worth trying, or `None` when no path can exist
    ///
    /// Degree-one vertices must be path ends, so if any exist only they are
    /// tried; more than two of them, or any isolated vertex, rules out a path.
    fn start_candidates(&self) -> Option<Vec<usize>> {
        let n = self.len();
        if n > 1 && self.degrees.contains(&0) {
            return None;
        }

        let leaves: Vec<usize> = (0..n).filter(|&v| self.degrees[v] == 1).collect();
        if leaves.len() > 2 {
            return None;
        }
        if !leaves.is_empty() {
            return Some(leaves);
        }

        let mut starts: Vec<usize> = (0..n).collect();
        starts.sort_by_key(|&v| (self.degrees[v], v));
        Some(starts)
    }

    /// Find a Hamiltonian path, charging each extension to `budget`
    ///
    /// # Errors
    /// Returns `LadderError::SearchBudgetExceeded` if the budget runs out.
    pub fn hamiltonian_path(
        &self,
        budget: &mut SearchBudget,
    ) -> Result<Option<Vec<usize>>, LadderError> {
        let n = self.len();
        if n == 0 {
            return Ok(Some(Vec::new()));
        }
        let Some(starts) = self.start_candidates() else {
            return Ok(None);
        };

        let mut visited = vec![false; n];
        for start in starts {
            budget.visit()?;
            let mut path = vec![start];
            let mut cursors = vec![0usize];
            visited[start] = true;

            while let Some(&vertex) = path.last() {
                if path.len() == n {
                    return Ok(Some(path));
                }
                let Some(cursor) = cursors.last_mut() else {
                    break;
                };

                if let Some(&next) = self.neighbours[vertex].get(*cursor) {
                    *cursor += 1;
                    if visited[next] {
                        continue;
                    }
                    budget.visit()?;
                    visited[next] = true;
                    path.push(next);
                    cursors.push(0);
                } else {
                    visited[vertex] = false;
                    path.pop();
                    cursors.pop();
                }
            }
        }

        Ok(None)
    }
}

/// Orders one already-chosen word per slot into a valid chain
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainOrderer;

impl ChainOrderer {
    /// Reorder `links` into a ladder, keeping each link's slot, clue and
    /// justification
    ///
    /// # Errors
    /// - `NoValidOrdering` if the words repeat or no ordering is a ladder
    /// - `SearchBudgetExceeded` if the budget runs out first
    pub fn order(
        &self,
        links: Vec<ChainLink>,
        budget: &mut SearchBudget,
    ) -> Result<Chain, LadderError> {
        let words: Vec<&str> = links.iter().map(|l| l.word.as_str()).collect();

        let mut seen = FxHashSet::default();
        let distinct = words.iter().all(|w| seen.insert(w.to_ascii_uppercase()));

        let path = if distinct {
            AdjacencyGraph::build(&words).hamiltonian_path(budget)?
        } else {
            None
        };

        let Some(path) = path else {
            return Err(LadderError::NoValidOrdering {
                words: words.iter().map(ToString::to_string).collect(),
            });
        };

        let mut pending: Vec<Option<ChainLink>> = links.into_iter().map(Some).collect();
        let ordered = path.iter().filter_map(|&v| pending[v].take()).collect();
        Ok(Chain::new(ordered))
    }
}
