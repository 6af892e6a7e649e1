//! Spelling Bee Solver
//!
//! Finds every dictionary word constructible from seven puzzle letters. Words
//! must contain the designated center letter, be at least four letters long,
//! and appear in the dictionary; letters may repeat within a word. The
//! dictionary is stored in a trie so the breadth-first search can cut off any
//! letter sequence no dictionary word extends.
//!
//! # Quick Start
//!
//! ```rust
//! use bee_solver::core::LetterSet;
//! use bee_solver::dictionary::loader::trie_from_words;
//! use bee_solver::solver::Solver;
//!
//! let trie = trie_from_words(["FINE", "LINE", "NINE"]);
//! let letters = LetterSet::from_tokens(&["E", "F", "I", "L", "N", "O", "P"]).unwrap();
//!
//! let words = Solver::new(&trie).solve(&letters);
//! assert!(words.contains("FINE"));
//! ```

// Core domain types
pub mod core;

// Dictionary trie and word lists
pub mod dictionary;

// Search engine
pub mod solver;

// Terminal output formatting
pub mod output;
