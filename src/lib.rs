//! Word Ladder
//!
//! Builds word ladders from clues: one word per clue, consecutive words differing
//! in exactly one letter, no word used twice.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::{hamming, is_adjacent};
//!
//! assert_eq!(hamming("PARCH", "PORCH"), Ok(1));
//! assert!(is_adjacent("cold", "CORD"));
//! assert!(!is_adjacent("COLD", "WARM"));
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Candidate sources
pub mod generator;

// Validation and search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
