//! Integer lattice positions.

use std::fmt;

/// A point on the integer lattice, `x` growing east and `y` growing north.
///
/// Positions are signed so that a candidate move off the south or west
/// edge is representable and can be rejected by the grid, rather than
/// wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// East-west coordinate.
    pub x: i32,
    /// North-south coordinate.
    pub y: i32,
}

impl Position {
    /// The grid origin `(0, 0)`.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a position from its two coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by `(dx, dy)`.
    ///
    /// Returns `None` if either coordinate would overflow `i32`. Such a
    /// position cannot lie inside any grid, so callers treat `None` the
    /// same as an out-of-bounds candidate.
    pub fn offset(self, (dx, dy): (i32, i32)) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_by_delta() {
        let p = Position::new(2, 3);
        assert_eq!(p.offset((1, 0)), Some(Position::new(3, 3)));
        assert_eq!(p.offset((0, -1)), Some(Position::new(2, 2)));
    }

    #[test]
    fn offset_below_origin_is_representable() {
        assert_eq!(Position::ORIGIN.offset((0, -1)), Some(Position::new(0, -1)));
    }

    #[test]
    fn offset_overflow_returns_none() {
        assert_eq!(Position::new(i32::MAX, 0).offset((1, 0)), None);
        assert_eq!(Position::new(0, i32::MIN).offset((0, -1)), None);
    }

    #[test]
    fn display_is_space_separated() {
        assert_eq!(Position::new(1, 3).to_string(), "1 3");
    }
}
