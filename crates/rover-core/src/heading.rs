//! Compass headings and their turn tables.

use crate::error::ParseError;
use std::fmt;

/// One of the four compass directions a rover can face.
///
/// Right turns follow the cyclic order `N -> E -> S -> W -> N`; left
/// turns follow the reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    /// Facing +y.
    North = 0,
    /// Facing +x.
    East = 1,
    /// Facing -y.
    South = 2,
    /// Facing -x.
    West = 3,
}

impl Heading {
    /// All headings in right-turn order, starting from north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// The heading after a 90° counter-clockwise turn.
    pub fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// The heading after a 90° clockwise turn.
    pub fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit `(dx, dy)` step for a forward move.
    ///
    /// ```
    /// use rover_core::Heading;
    ///
    /// assert_eq!(Heading::North.delta(), (0, 1));
    /// assert_eq!(Heading::West.delta(), (-1, 0));
    /// ```
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// Single-letter wire form: `N`, `E`, `S` or `W`.
    pub fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = ParseError;

    /// Parse a heading letter. Only uppercase is accepted.
    fn try_from(value: char) -> Result<Self, ParseError> {
        match value {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            other => Err(ParseError::UnknownHeading { received: other }),
        }
    }
}

impl std::str::FromStr for Heading {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::try_from(c),
            _ => Err(ParseError::HeadingLength {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
