//! Error types for the rover simulator.
//!
//! Organized by phase: parsing ([`ParseError`]), movement
//! ([`BoundsViolation`]), and the run-level union ([`SimError`]) that
//! crosses the foreign-call boundary as a single message string.

use crate::heading::Heading;
use crate::position::Position;
use std::error::Error;
use std::fmt;

/// Errors from parsing grid bounds, rover start lines, or command lines.
///
/// Always detected before any rover moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong number of whitespace-separated tokens on a line.
    TokenCount {
        /// Tokens the line must hold.
        expected: usize,
        /// Tokens actually present.
        got: usize,
    },
    /// A token that should be an integer is not one.
    InvalidInt {
        /// Which field the token was meant to fill.
        which: &'static str,
        /// The raw token.
        value: String,
    },
    /// A grid bound is negative.
    NegativeBound {
        /// Which axis.
        which: &'static str,
        /// The parsed value.
        value: i32,
    },
    /// The heading token is not exactly one character.
    HeadingLength {
        /// The raw token.
        value: String,
    },
    /// The heading letter is not one of `N`, `E`, `S`, `W`.
    UnknownHeading {
        /// The character found.
        received: char,
    },
    /// A command line holds a character outside `{L, R, M}`.
    IllegalCommand {
        /// The character found.
        received: char,
        /// 1-based column within the trimmed command line (0 if unknown).
        column: usize,
    },
    /// The instruction block has an odd number of non-blank lines.
    UnpairedLine {
        /// 1-based input line of the start line with no command line.
        line: usize,
    },
    /// The instruction block holds no rovers at all.
    NoRovers,
    /// More rover programs than the configured limit.
    TooManyRovers {
        /// The configured limit.
        limit: usize,
        /// Rover programs present.
        got: usize,
    },
    /// A command line is longer than the configured limit.
    TooManyCommands {
        /// The configured limit.
        limit: usize,
        /// Commands present on the line.
        got: usize,
    },
    /// Any of the above, pinned to the input line that caused it.
    AtLine {
        /// 1-based input line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
        /// What was wrong with it.
        reason: Box<ParseError>,
    },
}

impl ParseError {
    /// Attach a line number and the offending text.
    pub fn at_line(self, line: usize, text: &str) -> Self {
        Self::AtLine {
            line,
            text: text.to_string(),
            reason: Box::new(self),
        }
    }

    /// The innermost error, with any [`AtLine`](Self::AtLine) wrappers removed.
    pub fn root(&self) -> &ParseError {
        match self {
            Self::AtLine { reason, .. } => reason.root(),
            other => other,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenCount { expected, got } => {
                write!(f, "expected {expected} whitespace-separated tokens, got {got}")
            }
            Self::InvalidInt { which, value } => {
                write!(f, "invalid integer for {which}: '{value}'")
            }
            Self::NegativeBound { which, value } => {
                write!(f, "grid bound {which} must be non-negative, got {value}")
            }
            Self::HeadingLength { value } => {
                write!(f, "heading must be a single character, got '{value}'")
            }
            Self::UnknownHeading { received } => write!(
                f,
                "'{received}' is not a valid heading; headings can be N, E, S, W"
            ),
            Self::IllegalCommand { received, column } => {
                write!(
                    f,
                    "'{received}' is not a valid instruction; instructions can be L, R, M"
                )?;
                if *column > 0 {
                    write!(f, " (column {column})")?;
                }
                Ok(())
            }
            Self::UnpairedLine { line } => write!(
                f,
                "instructions must come in pairs of lines; start line {line} has no command line"
            ),
            Self::NoRovers => write!(f, "instructions describe no rovers"),
            Self::TooManyRovers { limit, got } => {
                write!(f, "{got} rovers exceeds the limit of {limit}")
            }
            Self::TooManyCommands { limit, got } => {
                write!(f, "{got} commands exceeds the per-rover limit of {limit}")
            }
            Self::AtLine { line, text, reason } => {
                write!(f, "line {line} ('{text}'): {reason}")
            }
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AtLine { reason, .. } => Some(reason.as_ref()),
            _ => None,
        }
    }
}

/// A move command would take a rover outside the grid.
///
/// The display text names only the heading, preserving the message
/// existing consumers match on. The remaining fields are for Rust callers
/// and logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundsViolation {
    /// 0-based index of the rover in input order.
    pub rover: usize,
    /// 0-based index of the offending command within the rover's program.
    pub command: usize,
    /// Heading held when the move was attempted.
    pub heading: Heading,
    /// Position the rover was trying to leave.
    pub from: Position,
}

impl fmt::Display for BoundsViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Instruction tried to send Rover too far \"{}\"",
            self.heading.letter()
        )
    }
}

impl Error for BoundsViolation {}

/// Every way a simulation run can fail.
///
/// A run is atomic: when any of these is returned, no rover's final
/// state is reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// Grid bounds or the instruction block were malformed.
    Parse(ParseError),
    /// A rover tried to move off the grid.
    Bounds(BoundsViolation),
    /// A rover's start position lies outside the grid.
    StartOutOfBounds {
        /// 0-based rover index in input order.
        rover: usize,
        /// The declared start position.
        position: Position,
        /// The grid's top-right corner.
        max: Position,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Bounds(e) => write!(f, "{e}"),
            Self::StartOutOfBounds {
                rover,
                position,
                max,
            } => write!(
                f,
                "start position ({}, {}) of rover {} is outside the grid [0, {}] x [0, {}]",
                position.x,
                position.y,
                rover + 1,
                max.x,
                max.y
            ),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Bounds(e) => Some(e),
            Self::StartOutOfBounds { .. } => None,
        }
    }
}

impl From<ParseError> for SimError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<BoundsViolation> for SimError {
    fn from(e: BoundsViolation) -> Self {
        Self::Bounds(e)
    }
}
