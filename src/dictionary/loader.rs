//! Dictionary loading utilities
//!
//! Builds the trie from a word list file or from the embedded default list.
//! All filtering happens here, not in the trie: words are trimmed,
//! uppercased, and dropped when shorter than four letters or containing
//! anything other than ASCII letters.

use crate::dictionary::{MIN_WORD_LEN, Trie};
use std::fs;
use std::io;
use std::path::Path;

/// Build a trie from a dictionary file, one word per line
///
/// Lines that do not survive normalization are skipped silently, matching
/// the loose format of real word list files.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bee_solver::dictionary::loader::load_from_file;
///
/// let trie = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", trie.word_count());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Trie> {
    let content = fs::read_to_string(path)?;
    Ok(trie_from_words(content.lines()))
}

/// Build a trie from the word list compiled into the binary
///
/// # Examples
/// ```
/// use bee_solver::dictionary::loader::load_embedded;
///
/// let trie = load_embedded();
/// assert!(trie.contains_word("ABOUT"));
/// ```
#[must_use]
pub fn load_embedded() -> Trie {
    trie_from_words(crate::dictionary::DICTIONARY.iter().copied())
}

/// Build a trie from any iterator of candidate words
#[must_use]
pub fn trie_from_words<'a, I>(words: I) -> Trie
where
    I: IntoIterator<Item = &'a str>,
{
    let mut trie = Trie::new();
    for word in words {
        if let Some(normalized) = normalize(word) {
            trie.insert(&normalized);
        }
    }
    trie
}

/// Trim and uppercase a raw line; `None` if it is not a usable word
fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.len() < MIN_WORD_LEN || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trie_from_words_inserts_valid_words() {
        let trie = trie_from_words(["FINE", "LINE", "NINE"]);
        assert_eq!(trie.word_count(), 3);
        assert!(trie.contains_word("FINE"));
        assert!(trie.contains_word("NINE"));
    }

    #[test]
    fn short_words_are_filtered_out() {
        let trie = trie_from_words(["FIN", "AT", "E", "FINE"]);
        assert_eq!(trie.word_count(), 1);
        assert!(!trie.contains_word("FIN"));
        assert!(trie.contains_word("FINE"));
    }

    #[test]
    fn words_are_trimmed_and_uppercased() {
        let trie = trie_from_words(["  line  ", "Nine\t"]);
        assert!(trie.contains_word("LINE"));
        assert!(trie.contains_word("NINE"));
        assert!(!trie.contains_word("line"));
    }

    #[test]
    fn non_alphabetic_lines_are_skipped() {
        let trie = trie_from_words(["don't", "well-read", "caf\u{e9}s", "1234", "", "FINE"]);
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn trie_from_empty_input_is_empty() {
        let trie = trie_from_words([]);
        assert!(trie.is_empty());
    }

    #[test]
    fn load_embedded_builds_full_dictionary() {
        use crate::dictionary::DICTIONARY;

        let trie = load_embedded();
        assert_eq!(trie.word_count(), DICTIONARY.len());
        for &word in &DICTIONARY[..10] {
            assert!(trie.contains_word(word), "missing embedded word '{word}'");
        }
    }
}
