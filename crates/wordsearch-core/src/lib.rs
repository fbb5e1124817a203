//! Core data structures for word-search puzzles.
//!
//! This crate provides the geometry and grid types shared by puzzle generation and
//! game sessions.
//!
//! # Overview
//!
//! 1. **Geometry**
//!    - [`position`]: zero-based `(row, col)` cell coordinates
//!    - [`direction`]: the eight-entry direction table and configurable
//!      [`DirectionSet`]s
//!
//! 2. **Words and grids**
//!    - [`word`]: validated uppercase target words and the fill [`ALPHABET`]
//!    - [`grid`]: [`DraftGrid`] with the placement validator, and the completed
//!      [`LetterGrid`] with the found-word locator
//!    - [`Placement`]: a word bound to an origin and a direction
//!
//! 3. **Selection**
//!    - [`selection`]: resolution of drag gestures into straight-line
//!      [`SelectionPath`]s
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Direction, DirectionSet, DraftGrid, Position, SelectionPath, Word};
//!
//! let mut draft = DraftGrid::new(12);
//! draft.place(&Word::new("CAT")?, Position::new(0, 0), Direction::SouthEast)?;
//! let grid = draft.fill_with(|_| b'Q');
//!
//! let path = SelectionPath::between(
//!     Position::new(0, 0),
//!     Position::new(2, 2),
//!     grid.size(),
//!     DirectionSet::all(),
//! );
//! assert_eq!(grid.letters_along(&path).as_deref(), Some("CAT"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod direction;
mod error;
pub mod grid;
mod placement;
pub mod position;
pub mod selection;
pub mod word;

pub use self::{
    direction::{Direction, DirectionSet},
    error::*,
    grid::{DraftGrid, LetterGrid},
    placement::Placement,
    position::Position,
    selection::SelectionPath,
    word::{ALPHABET, Word},
};
