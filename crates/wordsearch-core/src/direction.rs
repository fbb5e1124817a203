//! The direction table and configurable direction sets.
//!
//! A single [`DirectionSet`] governs where the generator may place words, which
//! selection gestures are accepted, and where the locator searches for found words.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::ParseDirectionError;

/// One of the eight straight-line directions a word can run in.
///
/// Variants are listed in the order of the classic direction table, which is also
/// the order the locator tries them in. The first six make up
/// [`DirectionSet::LEGACY_SIX`].
///
/// # Examples
///
/// ```
/// use wordsearch_core::Direction;
///
/// assert_eq!(Direction::SouthEast.delta(), (1, 1));
/// assert_eq!(Direction::SouthEast.opposite(), Direction::NorthWest);
/// assert_eq!(Direction::from_delta(0, -1), Some(Direction::West));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Left to right along a row.
    East,
    /// Top to bottom along a column.
    South,
    /// Down and to the right.
    SouthEast,
    /// Right to left along a row.
    West,
    /// Bottom to top along a column.
    North,
    /// Up and to the left.
    NorthWest,
    /// Up and to the right.
    NorthEast,
    /// Down and to the left.
    SouthWest,
}

impl Direction {
    /// All eight directions in table order.
    pub const ALL: [Self; 8] = [
        Self::East,
        Self::South,
        Self::SouthEast,
        Self::West,
        Self::North,
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
    ];

    /// Returns the unit step `(Δrow, Δcol)`.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::SouthEast => (1, 1),
            Self::West => (0, -1),
            Self::North => (-1, 0),
            Self::NorthWest => (-1, -1),
            Self::NorthEast => (-1, 1),
            Self::SouthWest => (1, -1),
        }
    }

    /// Returns the direction with the given unit step, or `None` for `(0, 0)` and
    /// non-unit components.
    #[must_use]
    pub fn from_delta(d_row: i8, d_col: i8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.delta() == (d_row, d_col))
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::South => Self::North,
            Self::SouthEast => Self::NorthWest,
            Self::West => Self::East,
            Self::North => Self::South,
            Self::NorthWest => Self::SouthEast,
            Self::NorthEast => Self::SouthWest,
            Self::SouthWest => Self::NorthEast,
        }
    }

    /// Returns `true` for the four diagonal directions.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        let (d_row, d_col) = self.delta();
        d_row != 0 && d_col != 0
    }

    /// Returns the kebab-case name used by [`Display`] and [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::South => "south",
            Self::SouthEast => "south-east",
            Self::West => "west",
            Self::North => "north",
            Self::NorthWest => "north-west",
            Self::NorthEast => "north-east",
            Self::SouthWest => "south-west",
        }
    }

    const fn abbreviation(self) -> &'static str {
        match self {
            Self::East => "e",
            Self::South => "s",
            Self::SouthEast => "se",
            Self::West => "w",
            Self::North => "n",
            Self::NorthWest => "nw",
            Self::NorthEast => "ne",
            Self::SouthWest => "sw",
        }
    }

    /// Returns the single-direction set containing `self`.
    #[must_use]
    pub const fn flag(self) -> DirectionSet {
        match self {
            Self::East => DirectionSet::EAST,
            Self::South => DirectionSet::SOUTH,
            Self::SouthEast => DirectionSet::SOUTH_EAST,
            Self::West => DirectionSet::WEST,
            Self::North => DirectionSet::NORTH,
            Self::NorthWest => DirectionSet::NORTH_WEST,
            Self::NorthEast => DirectionSet::NORTH_EAST,
            Self::SouthWest => DirectionSet::SOUTH_WEST,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parses a direction name (`"south-east"`) or abbreviation (`"se"`),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|direction| {
                direction.name().eq_ignore_ascii_case(s)
                    || direction.abbreviation().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| ParseDirectionError::Unknown { name: s.to_owned() })
    }
}

bitflags::bitflags! {
    /// A set of [`Direction`]s.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::{Direction, DirectionSet};
    ///
    /// let set: DirectionSet = "legacy-six".parse()?;
    /// assert_eq!(set.len(), 6);
    /// assert!(set.contains_direction(Direction::NorthWest));
    /// assert!(!set.contains_direction(Direction::NorthEast));
    ///
    /// let custom: DirectionSet = "east, south".parse()?;
    /// assert_eq!(custom.directions().collect::<Vec<_>>(), [Direction::East, Direction::South]);
    /// # Ok::<(), wordsearch_core::ParseDirectionError>(())
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirectionSet: u8 {
        /// [`Direction::East`].
        const EAST = 1 << 0;
        /// [`Direction::South`].
        const SOUTH = 1 << 1;
        /// [`Direction::SouthEast`].
        const SOUTH_EAST = 1 << 2;
        /// [`Direction::West`].
        const WEST = 1 << 3;
        /// [`Direction::North`].
        const NORTH = 1 << 4;
        /// [`Direction::NorthWest`].
        const NORTH_WEST = 1 << 5;
        /// [`Direction::NorthEast`].
        const NORTH_EAST = 1 << 6;
        /// [`Direction::SouthWest`].
        const SOUTH_WEST = 1 << 7;

        /// The first six entries of the direction table.
        const LEGACY_SIX = Self::EAST.bits()
            | Self::SOUTH.bits()
            | Self::SOUTH_EAST.bits()
            | Self::WEST.bits()
            | Self::NORTH.bits()
            | Self::NORTH_WEST.bits();
        /// Rows and columns only, in both senses.
        const ORTHOGONAL = Self::EAST.bits()
            | Self::SOUTH.bits()
            | Self::WEST.bits()
            | Self::NORTH.bits();
    }
}

impl DirectionSet {
    /// Returns `true` if `direction` is a member of the set.
    #[must_use]
    pub const fn contains_direction(self, direction: Direction) -> bool {
        self.contains(direction.flag())
    }

    /// Iterates over the members in table order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.contains_direction(*direction))
    }

    /// Returns the set extended by the opposite of every member.
    #[must_use]
    pub fn with_opposites(self) -> Self {
        self.directions().map(Direction::opposite).collect::<Self>() | self
    }

    /// Returns the number of directions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, direction| set | direction.flag())
    }
}

impl Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, direction) in self.directions().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            Display::fmt(&direction, f)?;
        }
        Ok(())
    }
}

impl FromStr for DirectionSet {
    type Err = ParseDirectionError;

    /// Parses a preset (`all`, `legacy-six`, `orthogonal`) or a comma separated
    /// list of direction names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let preset = match s.to_ascii_lowercase().as_str() {
            "all" => Some(Self::all()),
            "legacy-six" => Some(Self::LEGACY_SIX),
            "orthogonal" => Some(Self::ORTHOGONAL),
            _ => None,
        };
        if let Some(set) = preset {
            return Ok(set);
        }

        let set = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse::<Direction>)
            .collect::<Result<Self, _>>()?;
        if set.is_empty() {
            return Err(ParseDirectionError::Empty);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_round_trip() {
        for direction in Direction::ALL {
            let (d_row, d_col) = direction.delta();
            assert!((d_row, d_col) != (0, 0));
            assert_eq!(Direction::from_delta(d_row, d_col), Some(direction));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn test_opposite_negates_delta() {
        for direction in Direction::ALL {
            let (d_row, d_col) = direction.delta();
            assert_eq!(direction.opposite().delta(), (-d_row, -d_col));
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_diagonals() {
        let diagonals: Vec<_> = Direction::ALL
            .into_iter()
            .filter(|d| d.is_diagonal())
            .collect();
        assert_eq!(
            diagonals,
            [
                Direction::SouthEast,
                Direction::NorthWest,
                Direction::NorthEast,
                Direction::SouthWest
            ]
        );
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("south-east".parse(), Ok(Direction::SouthEast));
        assert_eq!("NW".parse(), Ok(Direction::NorthWest));
        assert_eq!(" east ".parse(), Ok(Direction::East));
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(ParseDirectionError::Unknown { name }) if name == "up"
        ));
    }

    #[test]
    fn test_presets() {
        assert_eq!(DirectionSet::all().len(), 8);
        assert_eq!(DirectionSet::default(), DirectionSet::all());
        assert_eq!(DirectionSet::LEGACY_SIX.len(), 6);
        assert_eq!(
            DirectionSet::LEGACY_SIX.directions().collect::<Vec<_>>(),
            Direction::ALL[..6]
        );
        assert_eq!(DirectionSet::ORTHOGONAL.len(), 4);
        assert!(
            DirectionSet::ORTHOGONAL
                .directions()
                .all(|d| !d.is_diagonal())
        );
    }

    #[test]
    fn test_with_opposites() {
        assert_eq!(DirectionSet::LEGACY_SIX.with_opposites(), DirectionSet::all());
        assert_eq!(DirectionSet::ORTHOGONAL.with_opposites(), DirectionSet::ORTHOGONAL);
        let set = DirectionSet::EAST | DirectionSet::SOUTH_EAST;
        assert_eq!(
            set.with_opposites(),
            set | DirectionSet::WEST | DirectionSet::NORTH_WEST
        );
        assert_eq!(DirectionSet::empty().with_opposites(), DirectionSet::empty());
    }

    #[test]
    fn test_parse_direction_set() {
        assert_eq!("ALL".parse(), Ok(DirectionSet::all()));
        assert_eq!("orthogonal".parse(), Ok(DirectionSet::ORTHOGONAL));
        assert_eq!(
            "e, s,se".parse(),
            Ok(DirectionSet::EAST | DirectionSet::SOUTH | DirectionSet::SOUTH_EAST)
        );
        assert_eq!("".parse::<DirectionSet>(), Err(ParseDirectionError::Empty));
        assert!("east,sideways".parse::<DirectionSet>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let set = DirectionSet::NORTH | DirectionSet::SOUTH_WEST;
        assert_eq!(set.to_string(), "north,south-west");
        assert_eq!(set.to_string().parse(), Ok(set));
    }
}
