//! Core domain types for the Spelling Bee puzzle
//!
//! Pure types with no I/O: the validated letter set the search runs over.

mod letters;

pub use letters::{LETTER_COUNT, LetterSet, LetterSetError};
