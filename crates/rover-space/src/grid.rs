//! Rectangular grid with implicit origin.

use rover_core::{ParseError, Position};
use std::fmt;
use std::str::FromStr;

/// An immutable rectangle `[0, max.x] x [0, max.y]`, inclusive on both ends.
///
/// # Examples
///
/// ```
/// use rover_core::Position;
/// use rover_space::Grid;
///
/// let grid: Grid = "5 5".parse().unwrap();
/// assert!(grid.contains(Position::new(5, 0)));
/// assert!(!grid.contains(Position::new(6, 0)));
/// assert!(!grid.contains(Position::new(0, -1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    max: Position,
}

impl Grid {
    /// Create a grid from its top-right corner.
    ///
    /// Returns `Err(ParseError::NegativeBound)` if either coordinate is
    /// negative.
    pub fn new(max: Position) -> Result<Self, ParseError> {
        if max.x < 0 {
            return Err(ParseError::NegativeBound {
                which: "maxX",
                value: max.x,
            });
        }
        if max.y < 0 {
            return Err(ParseError::NegativeBound {
                which: "maxY",
                value: max.y,
            });
        }
        Ok(Self { max })
    }

    /// Bottom-left corner. Always the origin.
    pub fn min(&self) -> Position {
        Position::ORIGIN
    }

    /// Top-right corner.
    pub fn max(&self) -> Position {
        self.max
    }

    /// Whether `p` lies inside the grid (edges included).
    pub fn contains(&self, p: Position) -> bool {
        (0..=self.max.x).contains(&p.x) && (0..=self.max.y).contains(&p.y)
    }
}

fn parse_bound(which: &'static str, token: &str) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInt {
        which,
        value: token.to_string(),
    })
}

impl FromStr for Grid {
    type Err = ParseError;

    /// Parse `"<maxX> <maxY>"`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [x, y] = tokens[..] else {
            return Err(ParseError::TokenCount {
                expected: 2,
                got: tokens.len(),
            });
        };
        Grid::new(Position::new(
            parse_bound("maxX", x)?,
            parse_bound("maxY", y)?,
        ))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.max)
    }
}
