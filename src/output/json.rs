//! Machine-readable output for `--json`

use crate::commands::{BatchSummary, CheckReport, SolveResult};
use crate::error::LadderError;
use serde_json::{Value, json};

/// `{ ladder, pairs, attempts }`
#[must_use]
pub fn solve_result(result: &SolveResult) -> Value {
    let solved = result.chain.to_solved();
    json!({
        "ladder": solved.ladder,
        "pairs": solved.pairs,
        "attempts": result.attempts.len(),
    })
}

/// `{ error: { code, message } }`
#[must_use]
pub fn solve_error(err: &LadderError) -> Value {
    json!({ "error": err.report() })
}

#[must_use]
pub fn check_report(report: &CheckReport) -> Value {
    json!({
        "words": report.words,
        "steps": report.steps,
        "repeated": report.repeated,
        "is_ladder": report.is_ladder(),
    })
}

#[must_use]
pub fn batch_summary(summary: &BatchSummary) -> Value {
    json!({
        "total": summary.total(),
        "solved": summary.solved,
        "failed": summary.failed,
        "failures_by_code": summary.failures_by_code,
        "average_attempts": summary.average_attempts,
        "seconds": summary.duration.as_secs_f64(),
        "puzzles": summary.entries,
    })
}
