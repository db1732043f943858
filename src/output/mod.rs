//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod json;

pub use display::{print_batch_summary, print_check_report, print_solve_error, print_solve_result};
