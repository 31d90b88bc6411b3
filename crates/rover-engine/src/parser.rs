//! Instruction block parsing.
//!
//! An instruction block is a sequence of line pairs: a start line
//! (`"<x> <y> <heading>"`) followed by a command line over `{L, R, M}`.
//! Blank lines anywhere are ignored. Every error the parser can tie to a
//! line comes back wrapped in [`ParseError::AtLine`].

use rover_core::{Command, ParseError};
use smallvec::SmallVec;

use crate::config::EngineConfig;
use crate::rover::Rover;

/// Inline capacity for a rover's command sequence.
///
/// Typical programs are a handful of commands; longer ones spill to the heap.
pub type Commands = SmallVec<[Command; 32]>;

/// A rover's starting state paired with its ordered commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoverProgram {
    /// State before the first command.
    pub start: Rover,
    /// Commands in execution order.
    pub commands: Commands,
    /// 1-based input line of the start line, or 0 if built in code.
    pub line: usize,
}

impl RoverProgram {
    /// Build a program directly, without a source line.
    pub fn new(start: Rover, commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            start,
            commands: commands.into_iter().collect(),
            line: 0,
        }
    }
}

/// Parse a command line, case-insensitively.
///
/// `IllegalCommand` errors carry the 1-based column of the bad character.
pub fn parse_commands(line: &str) -> Result<Commands, ParseError> {
    line.chars()
        .enumerate()
        .map(|(i, c)| {
            Command::try_from(c).map_err(|_| ParseError::IllegalCommand {
                received: c,
                column: i + 1,
            })
        })
        .collect()
}

/// Converts instruction text into [`RoverProgram`]s.
#[derive(Clone, Debug, Default)]
pub struct InstructionParser {
    config: EngineConfig,
}

impl InstructionParser {
    /// A parser with no size limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser that enforces the limits in `config`.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Parse a whole instruction block, preserving rover order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rover_engine::InstructionParser;
    ///
    /// let programs = InstructionParser::new()
    ///     .parse("1 2 N\nLMLMLMLMM\n\n3 3 E\nMMRMMRMRRM\n")
    ///     .unwrap();
    /// assert_eq!(programs.len(), 2);
    /// assert_eq!(programs[1].start.to_string(), "3 3 E");
    /// assert_eq!(programs[1].line, 4);
    /// ```
    pub fn parse(&self, text: &str) -> Result<Vec<RoverProgram>, ParseError> {
        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(ParseError::NoRovers);
        }
        if lines.len() % 2 != 0 {
            let (line, _) = lines[lines.len() - 1];
            return Err(ParseError::UnpairedLine { line });
        }
        self.config.check_rover_count(lines.len() / 2)?;

        lines
            .chunks_exact(2)
            .map(|pair| -> Result<RoverProgram, ParseError> {
                let (start_no, start_text) = pair[0];
                let (cmd_no, cmd_text) = pair[1];
                let start = start_text
                    .parse::<Rover>()
                    .map_err(|e| e.at_line(start_no, start_text))?;
                let commands =
                    parse_commands(cmd_text).map_err(|e| e.at_line(cmd_no, cmd_text))?;
                self.config
                    .check_command_count(commands.len())
                    .map_err(|e| e.at_line(cmd_no, cmd_text))?;
                Ok(RoverProgram {
                    start,
                    commands,
                    line: start_no,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_core::{Heading, Position};

    #[test]
    fn parses_pairs_in_order() {
        let programs = InstructionParser::new()
            .parse("1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM")
            .unwrap();
        assert_eq!(programs.len(), 2);
        assert_eq!(
            programs[0].start,
            Rover::new(Position::new(1, 2), Heading::North)
        );
        assert_eq!(programs[0].commands.len(), 9);
        assert_eq!(programs[1].start.heading(), Heading::East);
        assert_eq!(programs[1].commands[2], Command::Right);
    }

    #[test]
    fn blank_lines_and_crlf_ignored() {
        let programs = InstructionParser::new()
            .parse("\r\n  \n1 2 N\r\n\r\nLM\r\n\n")
            .unwrap();
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].line, 3);
        assert_eq!(programs[0].commands.as_slice(), &[Command::Left, Command::Move]);
    }

    #[test]
    fn lowercase_commands_normalized() {
        let programs = InstructionParser::new().parse("0 0 N\nlRm").unwrap();
        assert_eq!(
            programs[0].commands.as_slice(),
            &[Command::Left, Command::Right, Command::Move]
        );
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(InstructionParser::new().parse(""), Err(ParseError::NoRovers));
        assert_eq!(
            InstructionParser::new().parse("\n \n"),
            Err(ParseError::NoRovers)
        );
    }

    #[test]
    fn odd_line_count_names_trailing_line() {
        assert_eq!(
            InstructionParser::new().parse("1 2 N\nMM\n\n3 3 E"),
            Err(ParseError::UnpairedLine { line: 4 })
        );
    }

    #[test]
    fn illegal_command_names_character_and_line() {
        let err = InstructionParser::new()
            .parse("2 2 N\nLMXM")
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::IllegalCommand {
                received: 'X',
                column: 3
            }
            .at_line(2, "LMXM")
        );
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn bad_start_line_wrapped_with_line_number() {
        let err = InstructionParser::new()
            .parse("1 2 N\nM\n3 3 Q\nM")
            .unwrap_err();
        match err {
            ParseError::AtLine { line, text, reason } => {
                assert_eq!(line, 3);
                assert_eq!(text, "3 3 Q");
                assert_eq!(*reason, ParseError::UnknownHeading { received: 'Q' });
            }
            other => panic!("expected AtLine, got {other:?}"),
        }
    }

    #[test]
    fn embedded_space_in_command_line_rejected() {
        let err = InstructionParser::new().parse("0 0 N\nM M").unwrap_err();
        assert_eq!(
            err.root(),
            &ParseError::IllegalCommand {
                received: ' ',
                column: 2
            }
        );
    }

    #[test]
    fn rover_limit_enforced() {
        let parser = InstructionParser::with_config(EngineConfig {
            max_rovers: Some(1),
            ..Default::default()
        });
        assert_eq!(
            parser.parse("0 0 N\nM\n1 1 N\nM"),
            Err(ParseError::TooManyRovers { limit: 1, got: 2 })
        );
    }

    #[test]
    fn command_limit_enforced() {
        let parser = InstructionParser::with_config(EngineConfig {
            max_commands_per_rover: Some(2),
            ..Default::default()
        });
        assert!(parser.parse("0 0 N\nMM").is_ok());
        let err = parser.parse("0 0 N\nMMM").unwrap_err();
        assert_eq!(err.root(), &ParseError::TooManyCommands { limit: 2, got: 3 });
    }
}
