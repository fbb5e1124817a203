use crate::{Direction, Position, SelectionPath, Word};

/// Where a word's letters sit in a grid: a word, an origin cell, and a direction.
///
/// A placement only guarantees that its cells do not cross row or column zero;
/// whether they fit a particular grid is decided by [`DraftGrid::can_place`].
///
/// [`DraftGrid::can_place`]: crate::DraftGrid::can_place
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, Placement, Position, Word};
///
/// let word = Word::new("CAT")?;
/// let placement = Placement::new(word, Position::new(0, 0), Direction::SouthEast).unwrap();
/// assert_eq!(placement.end(), Position::new(2, 2));
/// assert!(placement.contains(Position::new(1, 1)));
/// # Ok::<(), wordsearch_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    word: Word,
    origin: Position,
    direction: Direction,
    end: Position,
}

impl Placement {
    /// Creates a placement, or returns `None` if the word would run past row or
    /// column zero.
    #[must_use]
    pub fn new(word: Word, origin: Position, direction: Direction) -> Option<Self> {
        let end = origin.offset_unbounded(direction, word.len() - 1)?;
        Some(Self {
            word,
            origin,
            direction,
            end,
        })
    }

    /// Returns the placed word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the cell holding the first letter.
    #[must_use]
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Returns the direction the word reads in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the cell holding the last letter.
    #[must_use]
    pub fn end(&self) -> Position {
        self.end
    }

    /// Iterates over the cells from the first letter to the last.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.word.len()).filter_map(|i| self.origin.offset_unbounded(self.direction, i))
    }

    /// Returns `true` if `pos` holds one of the word's letters.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells().any(|cell| cell == pos)
    }

    /// Returns the selection path that traces the word from first to last letter.
    #[must_use]
    pub fn to_selection_path(&self) -> SelectionPath {
        SelectionPath::from_cells(self.cells().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn test_cells_follow_direction() {
        let placement = Placement::new(word("NOE"), Position::new(4, 2), Direction::NorthEast)
            .expect("placement stays above row zero");
        let cells: Vec<_> = placement.cells().collect();
        assert_eq!(
            cells,
            [
                Position::new(4, 2),
                Position::new(3, 3),
                Position::new(2, 4)
            ]
        );
        assert_eq!(placement.end(), Position::new(2, 4));
        assert!(!placement.contains(Position::new(4, 3)));
    }

    #[test]
    fn test_new_rejects_underflow() {
        assert!(Placement::new(word("RUTE"), Position::new(2, 2), Direction::North).is_none());
        assert!(Placement::new(word("RUT"), Position::new(2, 2), Direction::North).is_some());
    }

    #[test]
    fn test_to_selection_path() {
        let placement =
            Placement::new(word("ESTER"), Position::new(1, 5), Direction::West).unwrap();
        let path = placement.to_selection_path();
        assert_eq!(path.start(), Some(Position::new(1, 5)));
        assert_eq!(path.end(), Some(Position::new(1, 1)));
        assert_eq!(path.len(), 5);
    }
}
