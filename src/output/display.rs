//! Display functions for solver results

use crate::core::LetterSet;
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Order a result set for output: shortest words first, ties alphabetical
#[must_use]
pub fn sorted_words(words: &FxHashSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = words.iter().cloned().collect();
    sorted.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    sorted
}

/// Print the result set, one word per line
///
/// Verbose mode wraps the plain word list in a colored summary of the puzzle
/// letters and the word count.
pub fn print_results(letters: &LetterSet, words: &FxHashSet<String>, verbose: bool) {
    let sorted = sorted_words(words);

    if verbose {
        println!("{}", "─".repeat(40).cyan());
        println!(
            "Letters: {}  (center: {})",
            letters.to_string().bright_yellow().bold(),
            char::from(letters.center()).to_string().bright_yellow()
        );
        println!("{}", "─".repeat(40).cyan());
    }

    for word in &sorted {
        println!("{word}");
    }

    if verbose {
        println!("{}", "─".repeat(40).cyan());
        let summary = format!("{} words found", sorted.len());
        if sorted.is_empty() {
            println!("{}", summary.red());
        } else {
            println!("{}", summary.green().bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_set(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn sorted_words_orders_by_length_then_alphabet() {
        let words = result_set(&["FELINE", "LINE", "LIFELINE", "FINE", "NINE", "LIFE"]);

        let sorted = sorted_words(&words);

        assert_eq!(
            sorted,
            vec!["FINE", "LIFE", "LINE", "NINE", "FELINE", "LIFELINE"]
        );
    }

    #[test]
    fn sorted_words_handles_empty_set() {
        let words = result_set(&[]);
        assert!(sorted_words(&words).is_empty());
    }

    #[test]
    fn sorted_words_same_length_is_alphabetical() {
        let words = result_set(&["TEST", "ABLE", "ZEST", "MESH"]);

        let sorted = sorted_words(&words);

        assert_eq!(sorted, vec!["ABLE", "MESH", "TEST", "ZEST"]);
    }
}
