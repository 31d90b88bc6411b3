//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the builder-input for a [`SimulationEngine`](crate::SimulationEngine).
//! [`validate()`](EngineConfig::validate) runs once when the engine is built;
//! the limit checks are applied on every run.

use std::error::Error;
use std::fmt;

use rover_core::ParseError;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_rovers` is `Some(0)`: no input could ever be accepted.
    ZeroRoverLimit,
    /// `max_commands_per_rover` is `Some(0)`: every command line would be rejected.
    ZeroCommandLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRoverLimit => write!(f, "max_rovers must be at least 1"),
            Self::ZeroCommandLimit => write!(f, "max_commands_per_rover must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── EngineConfig ───────────────────────────────────────────────────

/// Knobs for a [`SimulationEngine`](crate::SimulationEngine).
///
/// The defaults reproduce the behavior of the C entry point: start
/// positions must be on the grid, and input size is unbounded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fail the run if any rover starts outside the grid. Default: `true`.
    pub reject_out_of_bounds_start: bool,
    /// Maximum number of rover programs per run. Default: unlimited.
    pub max_rovers: Option<usize>,
    /// Maximum number of commands on a single command line. Default: unlimited.
    pub max_commands_per_rover: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reject_out_of_bounds_start: true,
            max_rovers: None,
            max_commands_per_rover: None,
        }
    }
}

impl EngineConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rovers == Some(0) {
            return Err(ConfigError::ZeroRoverLimit);
        }
        if self.max_commands_per_rover == Some(0) {
            return Err(ConfigError::ZeroCommandLimit);
        }
        Ok(())
    }

    pub(crate) fn check_rover_count(&self, got: usize) -> Result<(), ParseError> {
        match self.max_rovers {
            Some(limit) if got > limit => Err(ParseError::TooManyRovers { limit, got }),
            _ => Ok(()),
        }
    }

    pub(crate) fn check_command_count(&self, got: usize) -> Result<(), ParseError> {
        match self.max_commands_per_rover {
            Some(limit) if got > limit => Err(ParseError::TooManyCommands { limit, got }),
            _ => Ok(()),
        }
    }
}
