//! Instruction parsing and simulation for grid rovers.
//!
//! Control flow for one run:
//!
//! 1. [`Grid`](rover_space::Grid) is parsed from the top-right corner.
//! 2. [`InstructionParser`] turns the instruction block into [`RoverProgram`]s.
//! 3. [`SimulationEngine`] drives each [`Rover`] through its commands,
//!    checking every move against the grid.
//!
//! The whole run succeeds or fails as a unit. Nothing is kept between runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod parser;
pub mod rover;

pub use config::{ConfigError, EngineConfig};
pub use engine::{simulate, Outcome, SimulationEngine};
pub use parser::{parse_commands, Commands, InstructionParser, RoverProgram};
pub use rover::{Rover, Step};
