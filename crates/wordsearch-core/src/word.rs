//! Target words.

use std::{
    borrow::Borrow,
    fmt::{self, Display},
    str::FromStr,
};

use crate::WordError;

/// The fixed alphabet used for words and for filler cells.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An uppercase word of at least [`Word::MIN_LEN`] letters from [`ALPHABET`].
///
/// # Examples
///
/// ```
/// use wordsearch_core::Word;
///
/// let word = Word::new(" cat ")?;
/// assert_eq!(word.as_str(), "CAT");
/// assert_eq!(word.reversed().as_str(), "TAC");
/// assert!(Word::new("a").is_err());
/// assert!(Word::new("NOÉ").is_err());
/// # Ok::<(), wordsearch_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Minimum number of letters in a word.
    pub const MIN_LEN: usize = 2;

    /// Validates and normalizes a word.
    ///
    /// Surrounding whitespace is trimmed and ASCII letters are uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::InvalidLetter`] if any character is not an ASCII letter,
    /// and [`WordError::TooShort`] if fewer than [`Word::MIN_LEN`] letters remain.
    pub fn new(s: &str) -> Result<Self, WordError> {
        let s = s.trim();
        if let Some(letter) = s.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidLetter { letter });
        }
        if s.len() < Self::MIN_LEN {
            return Err(WordError::TooShort {
                len: s.len(),
                min: Self::MIN_LEN,
            });
        }
        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Returns the word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the letters as ASCII bytes.
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the number of letters.
    #[must_use]
    #[expect(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the word spelled backwards.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.chars().rev().collect())
    }

    /// Returns `true` if the word reads the same in both directions.
    #[must_use]
    pub fn is_palindrome(&self) -> bool {
        self.letters().iter().eq(self.letters().iter().rev())
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_new_normalizes() {
        assert_eq!(Word::new("moises").unwrap().as_str(), "MOISES");
        assert_eq!(Word::new("  Pedro\n").unwrap().as_str(), "PEDRO");
        assert_eq!(Word::new("NOE").unwrap().len(), 3);
    }

    #[test]
    fn test_new_rejects_invalid_input() {
        assert_eq!(Word::new("A"), Err(WordError::TooShort { len: 1, min: 2 }));
        assert_eq!(Word::new(""), Err(WordError::TooShort { len: 0, min: 2 }));
        assert_eq!(
            Word::new("ICE CREAM"),
            Err(WordError::InvalidLetter { letter: ' ' })
        );
        assert_eq!(
            Word::new("ABRAÃO"),
            Err(WordError::InvalidLetter { letter: 'Ã' })
        );
    }

    #[test]
    fn test_palindrome() {
        assert!(Word::new("ANA").unwrap().is_palindrome());
        assert!(!Word::new("RUTE").unwrap().is_palindrome());
    }

    #[test]
    fn test_borrow_as_str_in_sets() {
        let words: HashSet<Word> = ["DAVID", "ESTER"]
            .into_iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert!(words.contains("DAVID"));
        assert!(!words.contains("GOLIAS"));
    }

    #[test]
    fn test_alphabet() {
        assert_eq!(ALPHABET.len(), 26);
        assert!(ALPHABET.iter().all(u8::is_ascii_uppercase));
    }
}
