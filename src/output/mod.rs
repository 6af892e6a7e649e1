//! Terminal output formatting
//!
//! Sorting and printing of solver results.

pub mod display;

pub use display::{print_results, sorted_words};
