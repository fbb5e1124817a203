//! Resolution of drag gestures into straight-line cell paths.

use std::cmp::Ordering;

use crate::{Direction, DirectionSet, PathError, Position};

/// The ordered cells covered by a drag gesture, from its start cell to its end cell.
///
/// A path is either empty (a rejected gesture), a single cell, or a straight run of
/// cells along one direction.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{DirectionSet, Position, SelectionPath};
///
/// let path = SelectionPath::resolve(
///     Position::new(0, 0),
///     Position::new(2, 2),
///     12,
///     DirectionSet::all(),
/// )?;
/// assert_eq!(
///     path.cells(),
///     [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)]
/// );
///
/// // A knight's move is not a straight line.
/// let rejected = SelectionPath::between(
///     Position::new(0, 0),
///     Position::new(1, 2),
///     12,
///     DirectionSet::all(),
/// );
/// assert!(rejected.is_empty());
/// # Ok::<(), wordsearch_core::PathError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SelectionPath {
    cells: Vec<Position>,
}

impl SelectionPath {
    /// Resolves the straight-line path from `start` to `end`, inclusive, in a
    /// `size`×`size` grid.
    ///
    /// `start == end` always yields a single-cell path. Otherwise the displacement
    /// must be horizontal, vertical or a 45° diagonal, and its direction must be in
    /// `directions`.
    ///
    /// # Errors
    ///
    /// - [`PathError::OutOfBounds`] if either endpoint lies outside the grid.
    /// - [`PathError::InvalidSlope`] if the endpoints are not collinear along a
    ///   row, column or diagonal.
    /// - [`PathError::DirectionNotAllowed`] if the line's direction is not in
    ///   `directions`.
    /// - [`PathError::Overflow`] if the walk exceeds `size * size` steps without
    ///   reaching `end`.
    pub fn resolve(
        start: Position,
        end: Position,
        size: usize,
        directions: DirectionSet,
    ) -> Result<Self, PathError> {
        for position in [start, end] {
            if !position.is_within(size) {
                return Err(PathError::OutOfBounds { position, size });
            }
        }
        if start == end {
            return Ok(Self { cells: vec![start] });
        }

        let row_span = start.row.abs_diff(end.row);
        let col_span = start.col.abs_diff(end.col);
        if row_span != 0 && col_span != 0 && row_span != col_span {
            return Err(PathError::InvalidSlope { start, end });
        }
        let direction = Direction::from_delta(
            unit_step(start.row, end.row),
            unit_step(start.col, end.col),
        )
        .ok_or(PathError::InvalidSlope { start, end })?;
        if !directions.contains_direction(direction) {
            return Err(PathError::DirectionNotAllowed { direction });
        }

        let limit = size * size;
        let mut cells = Vec::with_capacity(row_span.max(col_span) + 1);
        let mut current = start;
        loop {
            cells.push(current);
            if current == end {
                return Ok(Self { cells });
            }
            let next = current.offset(direction, 1, size);
            match next {
                Some(next) if cells.len() < limit => current = next,
                _ => {
                    log::warn!(
                        "selection walk from {start} to {end} overflowed after {} steps",
                        cells.len()
                    );
                    return Err(PathError::Overflow { start, end });
                }
            }
        }
    }

    /// Infallible form of [`SelectionPath::resolve`]: a rejected gesture yields an
    /// empty path.
    #[must_use]
    pub fn between(start: Position, end: Position, size: usize, directions: DirectionSet) -> Self {
        Self::resolve(start, end, size, directions).unwrap_or_else(|err| {
            log::debug!("rejected selection: {err}");
            Self::default()
        })
    }

    pub(crate) fn from_cells(cells: Vec<Position>) -> Self {
        Self { cells }
    }

    /// Returns the cells in traversal order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` for a rejected gesture.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the first cell.
    #[must_use]
    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    /// Returns the last cell.
    #[must_use]
    pub fn end(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// Returns the same cells traversed from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            cells: self.cells.iter().rev().copied().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SelectionPath {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

fn unit_step(from: usize, to: usize) -> i8 {
    match to.cmp(&from) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SIZE: usize = 12;

    fn resolve(start: (usize, usize), end: (usize, usize)) -> Result<SelectionPath, PathError> {
        SelectionPath::resolve(start.into(), end.into(), SIZE, DirectionSet::all())
    }

    #[test]
    fn test_diagonal_path() {
        let path = resolve((0, 0), (2, 2)).unwrap();
        assert_eq!(
            path.cells(),
            [
                Position::new(0, 0),
                Position::new(1, 1),
                Position::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_reverse_gesture_walks_backwards() {
        let path = resolve((2, 2), (0, 0)).unwrap();
        assert_eq!(
            path.cells(),
            [
                Position::new(2, 2),
                Position::new(1, 1),
                Position::new(0, 0)
            ]
        );
        assert_eq!(path.reversed(), resolve((0, 0), (2, 2)).unwrap());
    }

    #[test]
    fn test_horizontal_and_vertical_paths() {
        let row = resolve((3, 7), (3, 2)).unwrap();
        assert_eq!(row.len(), 6);
        assert!(row.cells().iter().all(|pos| pos.row == 3));
        assert_eq!(row.end(), Some(Position::new(3, 2)));

        let col = resolve((0, 11), (11, 11)).unwrap();
        assert_eq!(col.len(), 12);
        assert!(col.cells().iter().all(|pos| pos.col == 11));
    }

    #[test]
    fn test_invalid_slope() {
        assert_eq!(
            resolve((0, 0), (1, 2)),
            Err(PathError::InvalidSlope {
                start: Position::new(0, 0),
                end: Position::new(1, 2),
            })
        );
        let path = SelectionPath::between((5, 5).into(), (0, 9).into(), SIZE, DirectionSet::all());
        assert!(path.is_empty());
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(
            resolve((0, 0), (0, 12)),
            Err(PathError::OutOfBounds {
                position: Position::new(0, 12),
                size: SIZE,
            })
        );
    }

    #[test]
    fn test_direction_policy() {
        let result = SelectionPath::resolve(
            Position::new(5, 5),
            Position::new(3, 7),
            SIZE,
            DirectionSet::LEGACY_SIX,
        );
        assert_eq!(
            result,
            Err(PathError::DirectionNotAllowed {
                direction: Direction::NorthEast
            })
        );

        let single = SelectionPath::resolve(
            Position::new(5, 5),
            Position::new(5, 5),
            SIZE,
            DirectionSet::empty(),
        );
        assert_eq!(single.map(|path| path.len()), Ok(1));
    }

    prop_compose! {
        fn position()(row in 0..SIZE, col in 0..SIZE) -> Position {
            Position::new(row, col)
        }
    }

    proptest! {
        #[test]
        fn prop_degenerate_gesture_is_single_cell(pos in position()) {
            let path = SelectionPath::between(pos, pos, SIZE, DirectionSet::all());
            prop_assert_eq!(path.cells(), [pos]);
        }

        #[test]
        fn prop_irregular_slope_is_rejected(start in position(), end in position()) {
            let row_span = start.row.abs_diff(end.row);
            let col_span = start.col.abs_diff(end.col);
            prop_assume!(row_span != 0 && col_span != 0 && row_span != col_span);
            let path = SelectionPath::between(start, end, SIZE, DirectionSet::all());
            prop_assert!(path.is_empty());
        }

        #[test]
        fn prop_valid_path_is_contiguous(start in position(), end in position()) {
            let Ok(path) = SelectionPath::resolve(start, end, SIZE, DirectionSet::all()) else {
                return Ok(());
            };
            prop_assert_eq!(path.start(), Some(start));
            prop_assert_eq!(path.end(), Some(end));
            prop_assert_eq!(
                path.len(),
                start.row.abs_diff(end.row).max(start.col.abs_diff(end.col)) + 1
            );
            for pair in path.cells().windows(2) {
                prop_assert!(pair[0].row.abs_diff(pair[1].row) <= 1);
                prop_assert!(pair[0].col.abs_diff(pair[1].col) <= 1);
            }
        }
    }
}
