//! The three rover commands.

use crate::error::ParseError;
use std::fmt;

/// A single instruction for a rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Rotate 90° counter-clockwise in place (`L`).
    Left,
    /// Rotate 90° clockwise in place (`R`).
    Right,
    /// Step one cell in the current heading (`M`).
    Move,
}

impl Command {
    /// Uppercase wire form.
    pub fn letter(self) -> char {
        match self {
            Command::Left => 'L',
            Command::Right => 'R',
            Command::Move => 'M',
        }
    }
}

impl TryFrom<char> for Command {
    type Error = ParseError;

    /// Parse a command letter, case-insensitively.
    ///
    /// The returned [`ParseError::IllegalCommand`] has `column: 0`; callers
    /// that know the position within a line should fill it in.
    fn try_from(value: char) -> Result<Self, ParseError> {
        match value.to_ascii_uppercase() {
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            'M' => Ok(Command::Move),
            _ => Err(ParseError::IllegalCommand {
                received: value,
                column: 0,
            }),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_cases() {
        assert_eq!(Command::try_from('L'), Ok(Command::Left));
        assert_eq!(Command::try_from('r'), Ok(Command::Right));
        assert_eq!(Command::try_from('m'), Ok(Command::Move));
    }

    #[test]
    fn rejects_other_letters() {
        assert_eq!(
            Command::try_from('X'),
            Err(ParseError::IllegalCommand {
                received: 'X',
                column: 0
            })
        );
        assert!(Command::try_from(' ').is_err());
    }

    #[test]
    fn letter_is_uppercase() {
        assert_eq!(Command::try_from('m').map(Command::letter), Ok('M'));
    }
}
