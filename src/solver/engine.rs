//! Breadth-first puzzle search
//!
//! Enumerates letter sequences outward from the seven single-letter seeds,
//! one trie probe per candidate. A candidate that is a complete word and
//! contains the center letter is accepted; a candidate no dictionary word
//! extends is dropped along with its whole branch. Because extension only
//! happens when the trie confirms the candidate is a live prefix, the work
//! done is proportional to the number of real dictionary prefixes reachable
//! from the letters, not to 7^n.

use crate::core::LetterSet;
use crate::dictionary::Trie;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Spelling Bee search engine
///
/// Borrows a fully built trie; the trie is never mutated during search.
pub struct Solver<'a> {
    trie: &'a Trie,
}

impl<'a> Solver<'a> {
    /// Create a solver over a built dictionary
    #[must_use]
    pub const fn new(trie: &'a Trie) -> Self {
        Self { trie }
    }

    /// Find every dictionary word constructible from the puzzle letters
    ///
    /// Letters may repeat within a word without limit. The minimum length of
    /// four is already guaranteed by the dictionary build, so no length check
    /// happens here.
    #[must_use]
    pub fn solve(&self, letters: &LetterSet) -> FxHashSet<String> {
        self.solve_letters(letters.letters(), letters.center())
    }

    /// Run the seven seed branches on separate threads and merge the results
    ///
    /// The trie is read-only during search, so the branches share nothing but
    /// the result sets they hand back. Output is identical to `solve`.
    #[must_use]
    pub fn solve_parallel(&self, letters: &LetterSet) -> FxHashSet<String> {
        let center = letters.center();
        letters
            .letters()
            .par_iter()
            .map(|&seed| self.search(&[seed], letters.letters(), center))
            .reduce(FxHashSet::default, |mut merged, branch| {
                merged.extend(branch);
                merged
            })
    }

    /// Search seeded with every given letter
    ///
    /// Takes the letters raw rather than as a `LetterSet` so that degenerate
    /// inputs (duplicate letters) still search deterministically; the result
    /// set deduplicates whatever the duplicate seeds rediscover.
    #[must_use]
    pub fn solve_letters(&self, letters: &[u8], center: u8) -> FxHashSet<String> {
        self.search(letters, letters, center)
    }

    /// The breadth-first generation loop
    ///
    /// Seeds the queue with single-letter candidates from `seeds`, extends
    /// live candidates with every letter in `letters`.
    fn search(&self, seeds: &[u8], letters: &[u8], center: u8) -> FxHashSet<String> {
        let mut words = FxHashSet::default();
        let mut queue: VecDeque<String> =
            seeds.iter().map(|&l| char::from(l).to_string()).collect();

        while let Some(candidate) = queue.pop_front() {
            let probe = self.trie.probe(&candidate);
            // Center-letter check happens only on complete words; a prefix
            // without the center letter may still gain it later
            if probe.is_word && candidate.as_bytes().contains(&center) {
                words.insert(candidate.clone());
            }
            if probe.is_prefix {
                for &letter in letters {
                    let mut extended = String::with_capacity(candidate.len() + 1);
                    extended.push_str(&candidate);
                    extended.push(char::from(letter));
                    queue.push_back(extended);
                }
            }
        }

        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::trie_from_words;

    const FIXTURE: [&str; 6] = ["FINE", "FELINE", "LIFE", "LINE", "LIFELINE", "NINE"];

    fn fixture_letters() -> LetterSet {
        // E is the center; O and P round the set out to seven
        LetterSet::from_tokens(&["E", "F", "I", "L", "N", "O", "P"]).unwrap()
    }

    #[test]
    fn solve_finds_exactly_the_fixture_words() {
        let trie = trie_from_words(FIXTURE);
        let solver = Solver::new(&trie);

        let words = solver.solve(&fixture_letters());

        let expected: FxHashSet<String> = FIXTURE.iter().map(ToString::to_string).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn solve_excludes_words_missing_the_center_letter() {
        // Both words are reachable from the letters; only LINT has the center I
        let trie = trie_from_words(["LINT", "LLNT"]);
        let letters = LetterSet::from_tokens(&["I", "L", "N", "T", "O", "U", "P"]).unwrap();
        let solver = Solver::new(&trie);

        let words = solver.solve(&letters);

        assert!(words.contains("LINT"));
        assert!(!words.contains("LLNT"));
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn solve_allows_repeated_letters_in_a_word() {
        let trie = trie_from_words(["NINE"]);
        let solver = Solver::new(&trie);

        let words = solver.solve(&fixture_letters());

        assert!(words.contains("NINE"));
    }

    #[test]
    fn duplicate_seed_letters_yield_each_word_once() {
        // Invalid as a LetterSet, but the engine itself must stay deterministic
        let trie = trie_from_words(["TEST"]);
        let solver = Solver::new(&trie);

        let words = solver.solve_letters(b"TEST", b'T');

        assert_eq!(words.len(), 1);
        assert!(words.contains("TEST"));
    }

    #[test]
    fn disjoint_dictionary_yields_empty_set() {
        let trie = trie_from_words(["QUARTZ", "JUMBO"]);
        let solver = Solver::new(&trie);

        let words = solver.solve(&fixture_letters());

        assert!(words.is_empty());
    }

    #[test]
    fn empty_trie_yields_empty_set() {
        let trie = Trie::new();
        let solver = Solver::new(&trie);

        assert!(solver.solve(&fixture_letters()).is_empty());
    }

    #[test]
    fn parallel_solve_matches_sequential() {
        let trie = trie_from_words(FIXTURE);
        let solver = Solver::new(&trie);
        let letters = fixture_letters();

        assert_eq!(solver.solve_parallel(&letters), solver.solve(&letters));
    }

    #[test]
    fn parallel_solve_on_embedded_dictionary_matches_sequential() {
        let trie = crate::dictionary::loader::load_embedded();
        let solver = Solver::new(&trie);
        let letters = LetterSet::from_tokens(&["T", "E", "S", "R", "I", "N", "G"]).unwrap();

        let sequential = solver.solve(&letters);
        assert_eq!(solver.solve_parallel(&letters), sequential);
        assert!(sequential.contains("TESTING"));
    }

    #[test]
    fn words_shorter_than_four_never_appear() {
        // The loader refuses short words, so the engine cannot emit them
        let trie = trie_from_words(["FIN", "FINE"]);
        let solver = Solver::new(&trie);

        let words = solver.solve(&fixture_letters());

        assert!(!words.contains("FIN"));
        assert!(words.contains("FINE"));
    }
}
