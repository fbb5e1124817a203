//! Grid coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate in a square letter grid.
///
/// Rows grow downwards and columns grow to the right; both are zero-based.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, Position};
///
/// let pos = Position::new(0, 0);
/// assert_eq!(pos.offset(Direction::SouthEast, 2, 12), Some(Position::new(2, 2)));
/// assert_eq!(pos.offset(Direction::North, 1, 12), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the position lies inside a `size`×`size` grid.
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the position `steps` cells away in `direction`, or `None` if that
    /// position leaves a `size`×`size` grid.
    #[must_use]
    pub fn offset(self, direction: Direction, steps: usize, size: usize) -> Option<Self> {
        self.offset_unbounded(direction, steps)
            .filter(|pos| pos.is_within(size))
    }

    /// Like [`Position::offset`] but only rejects steps that would cross row or
    /// column zero.
    #[must_use]
    pub fn offset_unbounded(self, direction: Direction, steps: usize) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        Some(Self {
            row: step_axis(self.row, d_row, steps)?,
            col: step_axis(self.col, d_col, steps)?,
        })
    }

    /// Returns all positions of a `size`×`size` grid in row-major order.
    pub fn all(size: usize) -> impl Iterator<Item = Self> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Self::new(row, col)))
    }
}

fn step_axis(value: usize, delta: i8, steps: usize) -> Option<usize> {
    match delta {
        0 => Some(value),
        d if d > 0 => value.checked_add(steps),
        _ => value.checked_sub(steps),
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
