//! Ladder checking
//!
//! Reports the letter distance between consecutive words of a proposed
//! ladder, with no clues involved.

use crate::core::{hamming, normalize};
use serde::Serialize;

/// Distance between two consecutive words
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub from: String,
    pub to: String,
    /// `None` when the words differ in length
    pub distance: Option<usize>,
}

impl Step {
    #[must_use]
    pub fn is_adjacent(&self) -> bool {
        self.distance == Some(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub words: Vec<String>,
    pub steps: Vec<Step>,
    pub repeated: Vec<String>,
}

impl CheckReport {
    /// Every step changes one letter and no word repeats
    #[must_use]
    pub fn is_ladder(&self) -> bool {
        !self.words.is_empty()
            && self.repeated.is_empty()
            && self.steps.iter().all(Step::is_adjacent)
    }
}

#[must_use]
pub fn check_words<S: AsRef<str>>(words: &[S]) -> CheckReport {
    let words: Vec<String> = words.iter().map(|w| normalize(w.as_ref())).collect();

    let steps = words
        .windows(2)
        .map(|pair| Step {
            from: pair[0].clone(),
            to: pair[1].clone(),
            distance: hamming(&pair[0], &pair[1]).ok(),
        })
        .collect();

    let mut repeated = Vec::new();
    for (index, word) in words.iter().enumerate() {
        if words[..index].contains(word) && !repeated.contains(word) {
            repeated.push(word.clone());
        }
    }

    CheckReport {
        words,
        steps,
        repeated,
    }
}
