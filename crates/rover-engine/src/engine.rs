//! Multi-rover simulation engine.
//!
//! [`SimulationEngine`] moves rovers strictly one at a time, one command
//! at a time, in the order they were given. A run is atomic: the first
//! bounds violation aborts it and no rover's final state is reported.
//!
//! # Ownership model
//!
//! The engine holds only its [`EngineConfig`]. Grids and rovers are
//! created fresh for each run and dropped when it returns, so one engine
//! can serve concurrent callers through `&self`.

use std::fmt;

use rover_core::{BoundsViolation, SimError};
use rover_space::Grid;
use tracing::{debug, instrument, trace, warn};

use crate::config::{ConfigError, EngineConfig};
use crate::parser::{InstructionParser, RoverProgram};
use crate::rover::{Rover, Step};

// Compile-time assertion: the engine can be shared across host threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<SimulationEngine>();
    }
};

// ── Outcome ─────────────────────────────────────────────────────

/// Final states of every rover in a successful run, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// One entry per rover program.
    pub rovers: Vec<Rover>,
}

impl Outcome {
    /// Each rover's final state as `"<x> <y> <heading>"`.
    pub fn lines(&self) -> Vec<String> {
        self.rovers.iter().map(Rover::to_string).collect()
    }
}

impl fmt::Display for Outcome {
    /// Newline-joined final states, with no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rover) in self.rovers.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{rover}")?;
        }
        Ok(())
    }
}

// ── SimulationEngine ────────────────────────────────────────────

/// Runs rover programs against a grid.
///
/// # Examples
///
/// ```
/// use rover_engine::SimulationEngine;
///
/// let engine = SimulationEngine::new();
/// let outcome = engine
///     .simulate("5 5", "1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM")
///     .unwrap();
/// assert_eq!(outcome.to_string(), "1 3 N\n5 1 E");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationEngine {
    config: EngineConfig,
}

impl SimulationEngine {
    /// An engine with [`EngineConfig::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with a custom, validated configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// A parser enforcing this engine's limits.
    pub fn parser(&self) -> InstructionParser {
        InstructionParser::with_config(self.config.clone())
    }

    /// Parse grid bounds and instructions, then run them.
    ///
    /// Parsing covers the whole instruction block before any rover moves,
    /// so a malformed line anywhere wins over a bounds violation earlier on.
    pub fn simulate(&self, top_right: &str, instructions: &str) -> Result<Outcome, SimError> {
        let grid: Grid = top_right.parse()?;
        let programs = self.parser().parse(instructions)?;
        self.run(&grid, programs)
    }

    /// Execute already-parsed programs against `grid`.
    ///
    /// An empty program list yields an empty outcome.
    #[instrument(skip_all, fields(grid = %grid, rovers = programs.len()))]
    pub fn run(&self, grid: &Grid, programs: Vec<RoverProgram>) -> Result<Outcome, SimError> {
        self.config.check_rover_count(programs.len())?;
        for program in &programs {
            self.config.check_command_count(program.commands.len())?;
        }
        if self.config.reject_out_of_bounds_start {
            for (index, program) in programs.iter().enumerate() {
                let position = program.start.position();
                if !grid.contains(position) {
                    warn!(rover = index, %position, "start position outside grid");
                    return Err(SimError::StartOutOfBounds {
                        rover: index,
                        position,
                        max: grid.max(),
                    });
                }
            }
        }

        debug!("simulation started");
        let mut rovers = Vec::with_capacity(programs.len());
        for (index, program) in programs.into_iter().enumerate() {
            let rover = drive(grid, index, &program)?;
            debug!(rover = index, state = %rover, "rover finished");
            rovers.push(rover);
        }
        Ok(Outcome { rovers })
    }
}

/// Run one program to completion, or stop at the first bounds violation.
fn drive(grid: &Grid, index: usize, program: &RoverProgram) -> Result<Rover, BoundsViolation> {
    let mut rover = program.start;
    for (command_index, &command) in program.commands.iter().enumerate() {
        match rover.apply(command) {
            Step::Turned => {}
            Step::Move(Some(candidate)) if grid.contains(candidate) => rover.move_to(candidate),
            Step::Move(_) => {
                let violation = BoundsViolation {
                    rover: index,
                    command: command_index,
                    heading: rover.heading(),
                    from: rover.position(),
                };
                warn!(
                    rover = index,
                    command = command_index,
                    heading = %violation.heading,
                    from = %violation.from,
                    "move would leave grid"
                );
                return Err(violation);
            }
        }
        trace!(rover = index, %command, state = %rover, "command applied");
    }
    Ok(rover)
}

/// Run instructions with a default engine.
///
/// Shorthand for `SimulationEngine::new().simulate(top_right, instructions)`.
pub fn simulate(top_right: &str, instructions: &str) -> Result<Outcome, SimError> {
    SimulationEngine::new().simulate(top_right, instructions)
}
