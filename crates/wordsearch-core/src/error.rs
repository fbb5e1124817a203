use crate::{Direction, Position, Word};

/// Errors raised when validating a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The word has fewer letters than [`Word::MIN_LEN`].
    #[display("word must have at least {min} letters, found {len}")]
    TooShort {
        /// Number of letters found.
        len: usize,
        /// Required minimum.
        min: usize,
    },
    /// The word contains something other than an ASCII letter.
    #[display("word contains invalid letter {letter:?}")]
    InvalidLetter {
        /// The offending character.
        letter: char,
    },
}

/// Error returned by [`DraftGrid::place`] when a word does not fit.
///
/// [`DraftGrid::place`]: crate::DraftGrid::place
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{word} does not fit at {origin} heading {direction}")]
pub struct PlacementError {
    /// The rejected word.
    pub word: Word,
    /// The attempted origin.
    pub origin: Position,
    /// The attempted direction.
    pub direction: Direction,
}

/// Reasons a drag gesture does not resolve into a selection path.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum PathError {
    /// An endpoint lies outside the grid.
    #[display("{position} is outside the {size}x{size} grid")]
    OutOfBounds {
        /// The offending endpoint.
        position: Position,
        /// The grid's side length.
        size: usize,
    },
    /// The endpoints do not share a row, column or 45° diagonal.
    #[display("{start} and {end} are not on a straight line")]
    InvalidSlope {
        /// Gesture start.
        start: Position,
        /// Gesture end.
        end: Position,
    },
    /// The gesture runs in a direction the direction policy excludes.
    #[display("selections heading {direction} are not allowed")]
    DirectionNotAllowed {
        /// The gesture's direction.
        direction: Direction,
    },
    /// The path walk hit its step cap without reaching the end cell.
    #[display("path from {start} to {end} did not terminate")]
    Overflow {
        /// Gesture start.
        start: Position,
        /// Gesture end.
        end: Position,
    },
}

/// Errors raised when parsing a [`LetterGrid`](crate::LetterGrid) from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input holds no letters.
    #[display("grid is empty")]
    Empty,
    /// A row's length differs from the number of rows.
    #[display("row {row} has {found} letters, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Number of rows, which every row length must equal.
        expected: usize,
        /// Letters found in the row.
        found: usize,
    },
    /// A cell is not an ASCII letter.
    #[display("invalid letter {letter:?} in line {row}")]
    InvalidLetter {
        /// The offending character.
        letter: char,
        /// Zero-based line index.
        row: usize,
    },
}

/// Errors raised when parsing a [`Direction`] or a
/// [`DirectionSet`](crate::DirectionSet).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDirectionError {
    /// The name matches no direction or preset.
    #[display("unknown direction {name:?}")]
    Unknown {
        /// The unrecognized name.
        name: String,
    },
    /// A direction list names no direction at all.
    #[display("direction set is empty")]
    Empty,
}
