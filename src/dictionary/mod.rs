//! Dictionary storage for the solver
//!
//! The trie the search runs against, plus the embedded default word list and
//! the loader that builds tries from word list files.

mod embedded;
pub mod loader;
mod trie;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use trie::{Probe, Trie};

/// Words shorter than this are never entered into the dictionary
pub const MIN_WORD_LEN: usize = 4;
