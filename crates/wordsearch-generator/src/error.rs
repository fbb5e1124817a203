use wordsearch_core::WordError;

/// Errors raised when parsing a [`PuzzleSeed`](crate::PuzzleSeed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hex digits, found {len} characters")]
    InvalidLength {
        /// Length of the rejected text.
        len: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("invalid hex digit {digit:?} in seed")]
    InvalidDigit {
        /// The offending character.
        digit: char,
    },
}

/// Errors raised when loading a word list.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum VocabularyError {
    /// A line does not hold a valid word.
    #[display("line {line}: {source}")]
    InvalidWord {
        /// One-based line number.
        line: usize,
        /// Why the word was rejected.
        source: WordError,
    },
}
