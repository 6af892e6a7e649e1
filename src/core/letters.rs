//! Puzzle letter set
//!
//! A `LetterSet` holds the seven letters of the hive, with the center letter first.

use std::fmt;

/// Number of letters in a Spelling Bee puzzle
pub const LETTER_COUNT: usize = 7;

/// The seven puzzle letters, validated on construction
///
/// Index 0 is the center letter, which every accepted word must contain.
/// All seven letters are distinct uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: [u8; LETTER_COUNT],
}

/// Error type for invalid letter sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterSetError {
    WrongCount(usize),
    NotASingleUppercaseLetter(String),
    Duplicate(char),
}

impl fmt::Display for LetterSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount(count) => {
                write!(f, "Exactly {LETTER_COUNT} letters are required, got {count}")
            }
            Self::NotASingleUppercaseLetter(token) => {
                write!(f, "'{token}' is not a single uppercase letter (A-Z)")
            }
            Self::Duplicate(letter) => {
                write!(f, "All {LETTER_COUNT} letters must be unique, '{letter}' repeats")
            }
        }
    }
}

impl std::error::Error for LetterSetError {}

impl LetterSet {
    /// Create a `LetterSet` from command-line tokens
    ///
    /// The first token is the center letter.
    ///
    /// # Errors
    /// Returns `LetterSetError` if:
    /// - There are not exactly seven tokens
    /// - Any token is not a single uppercase ASCII letter
    /// - Any letter appears more than once
    ///
    /// # Examples
    /// ```
    /// use bee_solver::core::LetterSet;
    ///
    /// let letters = LetterSet::from_tokens(&["E", "F", "I", "L", "N", "O", "P"]).unwrap();
    /// assert_eq!(letters.center(), b'E');
    ///
    /// assert!(LetterSet::from_tokens(&["e", "F", "I", "L", "N", "O", "P"]).is_err());
    /// ```
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, LetterSetError> {
        if tokens.len() != LETTER_COUNT {
            return Err(LetterSetError::WrongCount(tokens.len()));
        }

        let mut letters = [0u8; LETTER_COUNT];
        for (slot, token) in letters.iter_mut().zip(tokens) {
            let token = token.as_ref();
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_uppercase() => *slot = c as u8,
                _ => {
                    return Err(LetterSetError::NotASingleUppercaseLetter(
                        token.to_string(),
                    ));
                }
            }
        }

        for (i, &letter) in letters.iter().enumerate() {
            if letters[..i].contains(&letter) {
                return Err(LetterSetError::Duplicate(char::from(letter)));
            }
        }

        Ok(Self { letters })
    }

    /// The center letter, required in every accepted word
    #[inline]
    #[must_use]
    pub const fn center(&self) -> u8 {
        self.letters[0]
    }

    /// All seven letters, center first
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; LETTER_COUNT] {
        &self.letters
    }

    /// Check whether a letter belongs to the set
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
