//! Dictionary prefix tree
//!
//! A trie stores the dictionary so that word-membership and prefix-existence
//! can both be answered in one walk proportional to the query length,
//! independent of dictionary size. The search engine relies on `probe` to
//! accept complete words and to cut off branches no dictionary word extends.

use rustc_hash::FxHashMap;

/// One node in the trie
///
/// `is_terminal` marks that the path from the root to this node spells a
/// complete dictionary word. A node may be terminal and still have children
/// (a longer word passes through it).
#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    is_terminal: bool,
}

/// Combined answer from a single trie traversal
///
/// `is_word`: the queried sequence is a complete dictionary word.
/// `is_prefix`: at least one strictly longer dictionary word starts with the
/// queried sequence, so extending it can still pay off. Both are false when
/// the sequence names no node at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub is_word: bool,
    pub is_prefix: bool,
}

/// Prefix tree over the dictionary
///
/// Built once from the word list, then read-only for the lifetime of the
/// search. The root owns the entire node tree.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    /// Create an empty trie
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// True if no word has been inserted
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Insert a word, creating exactly the node chain it needs
    ///
    /// Idempotent: inserting the same word twice leaves the trie unchanged.
    /// Case normalization and minimum-length filtering are the caller's job
    /// (see the loader); the trie stores whatever bytes it is given.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for byte in word.bytes() {
            node = node.children.entry(byte).or_default();
        }
        if !node.is_terminal {
            node.is_terminal = true;
            self.word_count += 1;
        }
    }

    /// True iff the sequence was inserted as a complete word
    #[must_use]
    pub fn contains_word(&self, sequence: &str) -> bool {
        self.find(sequence).is_some_and(|node| node.is_terminal)
    }

    /// True iff some strictly longer stored word starts with this sequence
    ///
    /// A terminal leaf with no children is a word but not a prefix: nothing
    /// extends past it, so the search stops growing that branch.
    #[must_use]
    pub fn has_prefix(&self, sequence: &str) -> bool {
        self.find(sequence)
            .is_some_and(|node| !node.children.is_empty())
    }

    /// Answer `contains_word` and `has_prefix` with one traversal
    #[must_use]
    pub fn probe(&self, sequence: &str) -> Probe {
        match self.find(sequence) {
            Some(node) => Probe {
                is_word: node.is_terminal,
                is_prefix: !node.children.is_empty(),
            },
            None => Probe {
                is_word: false,
                is_prefix: false,
            },
        }
    }

    /// Walk the node chain for a sequence
    ///
    /// `None` means the sequence is absent from the tree, which is distinct
    /// from finding a real node that happens to have no children.
    fn find(&self, sequence: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for byte in sequence.bytes() {
            node = node.children.get(&byte)?;
        }
        Some(node)
    }
}
