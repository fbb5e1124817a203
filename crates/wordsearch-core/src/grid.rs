//! Letter grids.
//!
//! A puzzle grid goes through two stages:
//!
//! 1. [`DraftGrid`] - cells are empty or hold a letter of an already placed word.
//!    [`DraftGrid::can_place`] is the only gate in front of writes, so letters of
//!    different words can share a cell only when they agree.
//! 2. [`LetterGrid`] - produced by [`DraftGrid::fill_with`]; every cell holds
//!    exactly one uppercase letter and the contents never change again.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    Direction, DirectionSet, GridParseError, Placement, PlacementError, Position,
    SelectionPath, Word,
};

/// A square grid under construction.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, DraftGrid, Position, Word};
///
/// let mut draft = DraftGrid::new(12);
/// let cat = Word::new("CAT")?;
/// let tea = Word::new("TEA")?;
///
/// draft.place(&cat, Position::new(0, 0), Direction::SouthEast)?;
/// // "TEA" may share the T of "CAT" ...
/// assert!(draft.can_place(&tea, Position::new(2, 2), Direction::East));
/// // ... but not overwrite its A.
/// assert!(!draft.can_place(&tea, Position::new(1, 0), Direction::East));
///
/// let grid = draft.fill_with(|_| b'X');
/// assert_eq!(grid.letter(Position::new(1, 1)), 'A');
/// assert_eq!(grid.letter(Position::new(0, 1)), 'X');
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftGrid {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl DraftGrid {
    /// Creates an all-empty `size`×`size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `size * size` overflows `usize`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        let Some(len) = size.checked_mul(size) else {
            panic!("grid size {size} is too large");
        };
        Self {
            size,
            cells: vec![None; len],
        }
    }

    /// Returns the side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `pos`, or `None` for an empty or out-of-bounds cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        if !pos.is_within(self.size) {
            return None;
        }
        self.cells[index(self.size, pos)].map(char::from)
    }

    /// Returns the number of cells still empty.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Decides whether `word` fits at `origin` reading in `direction`.
    ///
    /// The whole extent must stay inside the grid, and every cell it covers must
    /// be empty or already hold the matching letter. This never modifies the grid.
    #[must_use]
    pub fn can_place(&self, word: &Word, origin: Position, direction: Direction) -> bool {
        if !origin.is_within(self.size)
            || origin
                .offset(direction, word.len() - 1, self.size)
                .is_none()
        {
            return false;
        }
        word.letters().iter().enumerate().all(|(i, &letter)| {
            origin
                .offset(direction, i, self.size)
                .is_some_and(|pos| {
                    self.cells[index(self.size, pos)].is_none_or(|cell| cell == letter)
                })
        })
    }

    /// Writes `word` at `origin` reading in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] without touching any cell if
    /// [`DraftGrid::can_place`] rejects the placement.
    pub fn place(
        &mut self,
        word: &Word,
        origin: Position,
        direction: Direction,
    ) -> Result<Placement, PlacementError> {
        let rejected = || PlacementError {
            word: word.clone(),
            origin,
            direction,
        };
        if !self.can_place(word, origin, direction) {
            return Err(rejected());
        }
        let placement = Placement::new(word.clone(), origin, direction).ok_or_else(rejected)?;
        for (pos, &letter) in placement.cells().zip(word.letters()) {
            self.cells[index(self.size, pos)] = Some(letter);
        }
        Ok(placement)
    }

    /// Completes the grid, asking `filler` for a letter for every empty cell.
    ///
    /// `filler` must return an uppercase ASCII letter.
    #[must_use]
    pub fn fill_with<F>(self, mut filler: F) -> LetterGrid
    where
        F: FnMut(Position) -> u8,
    {
        let size = self.size;
        let letters = Position::all(size)
            .zip(self.cells)
            .map(|(pos, cell)| {
                cell.unwrap_or_else(|| {
                    let letter = filler(pos);
                    debug_assert!(letter.is_ascii_uppercase(), "filler returned {letter:#x}");
                    letter
                })
            })
            .collect();
        LetterGrid { size, letters }
    }
}

/// A completed square grid in which every cell holds one uppercase letter.
///
/// The text form lists one row per line; letters within a row may be separated by
/// whitespace.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, DirectionSet, LetterGrid, Position, Word};
///
/// let grid: LetterGrid = "
///     C X X
///     X A X
///     X X T
/// "
/// .parse()?;
///
/// let placement = grid
///     .locate(&Word::new("CAT")?, DirectionSet::all())
///     .expect("CAT runs down the diagonal");
/// assert_eq!(placement.origin(), Position::new(0, 0));
/// assert_eq!(placement.direction(), Direction::SouthEast);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    size: usize,
    letters: Vec<u8>,
}

impl LetterGrid {
    /// Returns the side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn letter(&self, pos: Position) -> char {
        assert!(
            pos.is_within(self.size),
            "{pos} is outside the {0}x{0} grid",
            self.size
        );
        char::from(self.letters[index(self.size, pos)])
    }

    /// Returns the letter at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        pos.is_within(self.size)
            .then(|| char::from(self.letters[index(self.size, pos)]))
    }

    /// Returns one row as ASCII letters.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than [`LetterGrid::size`].
    #[must_use]
    pub fn row(&self, row: usize) -> &[u8] {
        &self.letters[row * self.size..(row + 1) * self.size]
    }

    /// Concatenates the letters along `path` in traversal order.
    ///
    /// Returns `None` if any cell of the path lies outside the grid.
    #[must_use]
    pub fn letters_along(&self, path: &SelectionPath) -> Option<String> {
        path.into_iter().map(|&pos| self.get(pos)).collect()
    }

    /// Returns `true` if `word` can be read from `origin` in `direction`.
    #[must_use]
    pub fn spells(&self, word: &Word, origin: Position, direction: Direction) -> bool {
        word.letters().iter().enumerate().all(|(i, &letter)| {
            origin
                .offset(direction, i, self.size)
                .is_some_and(|pos| self.letters[index(self.size, pos)] == letter)
        })
    }

    /// Iterates over every placement of `word` along `directions`, scanning origins
    /// in row-major order and directions in table order.
    pub fn placements_of<'a>(
        &'a self,
        word: &'a Word,
        directions: DirectionSet,
    ) -> impl Iterator<Item = Placement> + 'a {
        Position::all(self.size).flat_map(move |origin| {
            directions.directions().filter_map(move |direction| {
                self.spells(word, origin, direction)
                    .then(|| Placement::new(word.clone(), origin, direction))
                    .flatten()
            })
        })
    }

    /// Finds the first placement of `word` by exhaustive scan.
    ///
    /// Costs O(size² · directions · word length) in the worst case.
    #[must_use]
    pub fn locate(&self, word: &Word, directions: DirectionSet) -> Option<Placement> {
        self.placements_of(word, directions).next()
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &letter) in self.row(row).iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}

impl FromStr for LetterGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<u8>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()))
            .enumerate()
            .map(|(row, chars)| {
                chars
                    .map(|c| match u8::try_from(c) {
                        Ok(letter) if letter.is_ascii_alphabetic() => {
                            Ok(letter.to_ascii_uppercase())
                        }
                        _ => Err(GridParseError::InvalidLetter { letter: c, row }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .filter(|row| !matches!(row, Ok(letters) if letters.is_empty()))
            .collect::<Result<_, _>>()?;

        let size = rows.len();
        if size == 0 {
            return Err(GridParseError::Empty);
        }
        if let Some((row, letters)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(GridParseError::NotSquare {
                row,
                expected: size,
                found: letters.len(),
            });
        }
        Ok(Self {
            size,
            letters: rows.concat(),
        })
    }
}

fn index(size: usize, pos: Position) -> usize {
    pos.row * size + pos.col
}
