//! Spelling Bee search engine
//!
//! Breadth-first generation over letter sequences, pruned by the dictionary trie.

mod engine;

pub use engine::Solver;
