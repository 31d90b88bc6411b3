//! The rover state machine.

use rover_core::{Command, Heading, ParseError, Position};
use std::fmt;
use std::str::FromStr;

/// Result of applying one command to a [`Rover`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The rover turned in place. Already committed.
    Turned,
    /// The rover wants to move here. Not committed: the caller checks the
    /// candidate against the grid and then calls [`Rover::move_to`].
    /// `None` means the candidate overflowed the coordinate range.
    Move(Option<Position>),
}

/// A rover's position and heading.
///
/// Performs no bounds checking of its own; see [`Step::Move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rover {
    position: Position,
    heading: Heading,
}

impl Rover {
    /// Create a rover at `position` facing `heading`.
    pub fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Apply a single command.
    ///
    /// Turns are committed immediately. A move only computes the cell in
    /// front of the rover.
    ///
    /// ```
    /// use rover_core::{Command, Heading, Position};
    /// use rover_engine::rover::{Rover, Step};
    ///
    /// let mut r = Rover::new(Position::new(1, 2), Heading::North);
    /// assert_eq!(r.apply(Command::Left), Step::Turned);
    /// assert_eq!(r.heading(), Heading::West);
    /// assert_eq!(r.apply(Command::Move), Step::Move(Some(Position::new(0, 2))));
    /// assert_eq!(r.position(), Position::new(1, 2));
    /// ```
    pub fn apply(&mut self, cmd: Command) -> Step {
        match cmd {
            Command::Left => {
                self.heading = self.heading.turn_left();
                Step::Turned
            }
            Command::Right => {
                self.heading = self.heading.turn_right();
                Step::Turned
            }
            Command::Move => Step::Move(self.position.offset(self.heading.delta())),
        }
    }

    /// Commit a move previously proposed by [`apply`](Self::apply).
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}

fn parse_coord(which: &'static str, token: &str) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInt {
        which,
        value: token.to_string(),
    })
}

impl FromStr for Rover {
    type Err = ParseError;

    /// Parse a start line: `"<x> <y> <heading>"`, e.g. `"1 2 N"`.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [x, y, heading] = tokens[..] else {
            return Err(ParseError::TokenCount {
                expected: 3,
                got: tokens.len(),
            });
        };
        let position = Position::new(parse_coord("x", x)?, parse_coord("y", y)?);
        Ok(Self::new(position, heading.parse()?))
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.heading)
    }
}
