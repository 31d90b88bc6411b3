//! Rover: a deterministic multi-rover grid simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all rover sub-crates. For most users, adding `rover` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rover::prelude::*;
//!
//! let grid: Grid = "5 5".parse().unwrap();
//! let programs = InstructionParser::new()
//!     .parse("1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM")
//!     .unwrap();
//! let outcome = SimulationEngine::new().run(&grid, programs).unwrap();
//! assert_eq!(outcome.to_string(), "1 3 N\n5 1 E");
//!
//! // Same run, as the JSON payload foreign callers receive.
//! let payload = rover::ffi::return_coordinates("5 5", "1 2 N\nMMMMMMMM");
//! assert_eq!(payload.error, "Instruction tried to send Rover too far \"N\"");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rover-core` | Positions, headings, commands, error types |
//! | [`space`] | `rover-space` | The bounded [`Grid`](space::Grid) |
//! | [`engine`] | `rover-engine` | Rover state machine, parser, simulation engine |
//! | [`ffi`] | `rover-ffi` | JSON payload codec and C entry points |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`rover-core`).
pub use rover_core as types;

/// Grid bounds (`rover-space`).
pub use rover_space as space;

/// Parsing and simulation (`rover-engine`).
///
/// [`engine::SimulationEngine`] is the main entry point for Rust callers.
pub use rover_engine as engine;

/// Foreign-call boundary (`rover-ffi`).
///
/// [`ffi::return_coordinates`] is the safe equivalent of the exported
/// `rover_return_coordinates` C function.
pub use rover_ffi as ffi;

/// Common imports for typical rover usage.
///
/// ```rust
/// use rover::prelude::*;
/// ```
pub mod prelude {
    // Core types and errors
    pub use rover_core::{BoundsViolation, Command, Heading, ParseError, Position, SimError};

    // Space
    pub use rover_space::Grid;

    // Engine
    pub use rover_engine::{
        simulate, EngineConfig, InstructionParser, Outcome, Rover, RoverProgram, SimulationEngine,
    };

    // Boundary
    pub use rover_ffi::CoordinatesResult;
}
