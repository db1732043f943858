//! Formatting utilities for terminal output

use crate::commands::{AttemptOutcome, Step};

/// Mark the letters that change between two words with `^`
///
/// Words of different length get no markers.
#[must_use]
pub fn change_marker(from: &str, to: &str) -> String {
    if from.chars().count() != to.chars().count() {
        return String::new();
    }
    from.chars()
        .zip(to.chars())
        .map(|(a, b)| if a.eq_ignore_ascii_case(&b) { ' ' } else { '^' })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// One-line description of a check step
#[must_use]
pub fn step_summary(step: &Step) -> String {
    match step.distance {
        Some(1) => format!("{} → {}  (1 letter)", step.from, step.to),
        Some(n) => format!("{} → {}  ({n} letters)", step.from, step.to),
        None => format!("{} → {}  (length differs)", step.from, step.to),
    }
}

/// Short label for an attempt outcome
#[must_use]
pub fn outcome_label(outcome: &AttemptOutcome) -> String {
    match outcome {
        AttemptOutcome::Success(chain) => format!("ladder of {}", chain.len()),
        AttemptOutcome::Failure { code, .. } => (*code).to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
