//! Display functions for command results

use super::formatters::{change_marker, create_progress_bar, outcome_label, step_summary};
use crate::commands::{
    Attempt, AttemptOutcome, BatchOutcome, BatchSummary, CheckReport, SolveResult,
};
use crate::core::Chain;
use crate::error::LadderError;
use colored::Colorize;

/// Print a solved ladder with the clue and reasoning behind each word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let ladder = result.chain.words().collect::<Vec<_>>().join(" → ");
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}",
        "Ladder:".bright_cyan().bold(),
        ladder.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_chain(&result.chain);

    if verbose {
        print_attempts(&result.attempts);
        println!(
            "\n  Nodes visited: {}  dead states: {}  memo hits: {}",
            result.stats.nodes_visited, result.stats.dead_states, result.stats.memo_hits
        );
    }

    println!();
    let done = format!("✅ Solved in {} attempt(s)", result.attempts.len());
    println!("{}", done.green().bold());
}

fn print_chain(chain: &Chain) {
    let mut previous: Option<&str> = None;
    for (i, link) in chain.links().iter().enumerate() {
        if let Some(prev) = previous {
            let marker = change_marker(prev, &link.word);
            if !marker.is_empty() {
                println!("     {}", marker.yellow());
            }
        }
        println!(
            "{:>3}. {}  {}",
            i + 1,
            link.word.bright_white().bold(),
            link.clue.dimmed()
        );
        if !link.justification.is_empty() {
            println!("       {}", link.justification.italic());
        }
        previous = Some(&link.word);
    }
}

fn print_attempts(attempts: &[Attempt]) {
    println!("\n{}", "Attempts:".bright_cyan().bold());
    for attempt in attempts {
        let label = outcome_label(&attempt.outcome);
        let label = match attempt.outcome {
            AttemptOutcome::Success(_) => label.green(),
            AttemptOutcome::Failure { .. } => label.red(),
        };
        print!("  #{} {label}", attempt.number);
        if !attempt.sparse_slots.is_empty() {
            let sparse = format!("sparse slots {:?}", attempt.sparse_slots);
            print!("  {}", sparse.yellow());
        }
        println!();
        if let AttemptOutcome::Failure { reason, .. } = &attempt.outcome {
            println!("     {}", reason.dimmed());
        }
    }
}

/// Print a solve failure; diagnostics only with `verbose`
pub fn print_solve_error(err: &LadderError, verbose: bool) {
    let report = err.report();
    println!(
        "\n{} {}",
        format!("❌ {}", report.code).red().bold(),
        report.message
    );

    if verbose && let LadderError::AttemptsExhausted(exhaustion) = err {
        print_attempts(&exhaustion.attempts);
        if !exhaustion.last_chain.is_empty() {
            println!("\n{}", "Last chain (not a valid ladder):".yellow());
            print_chain(&exhaustion.last_chain);
        }
        if !exhaustion.rejected_words.is_empty() {
            println!(
                "\n  Rejected: {}",
                exhaustion.rejected_words.join(", ").dimmed()
            );
        }
    }
}

/// Print the distances along a proposed ladder
pub fn print_check_report(report: &CheckReport) {
    for step in &report.steps {
        let line = step_summary(step);
        if step.is_adjacent() {
            println!("  {}", line.green());
        } else {
            println!("  {}", line.red());
        }
    }
    if !report.repeated.is_empty() {
        println!(
            "  {}",
            format!("repeated: {}", report.repeated.join(", ")).red()
        );
    }

    println!();
    if report.is_ladder() {
        println!("{}", "✅ Valid ladder".green().bold());
    } else {
        println!("{}", "❌ Not a ladder".red().bold());
    }
}

/// Print the result of a batch run
pub fn print_batch_summary(summary: &BatchSummary, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(summary.solved as f64, summary.total() as f64, 30);
    println!(
        "\n   Solved:    [{}] {}/{}",
        bar.green(),
        summary.solved,
        summary.total()
    );
    println!("   Failed:    {}", summary.failed.to_string().red());
    for (code, count) in &summary.failures_by_code {
        println!("     {code}: {count}");
    }
    println!("   Attempts:  {:.2} average", summary.average_attempts);
    println!("   Time:      {:.2}s", summary.duration.as_secs_f64());

    if verbose {
        println!();
        for entry in &summary.entries {
            let fallback = format!("#{}", entry.index);
            let name = entry.name.as_deref().unwrap_or(&fallback);
            match &entry.outcome {
                BatchOutcome::Solved(ladder) => {
                    println!("  {} {}", name.bold(), ladder.ladder.join(" → ").green());
                }
                BatchOutcome::Failed(report) => {
                    println!("  {} {}", name.bold(), report.code.red());
                }
            }
        }
    }
}
