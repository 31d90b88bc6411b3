//! Core types for the rover grid simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary every other layer speaks: lattice positions, compass
//! headings, the three rover commands, and the error enums that flow
//! up to the foreign-call boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod heading;
pub mod position;

pub use command::Command;
pub use error::{BoundsViolation, ParseError, SimError};
pub use heading::Heading;
pub use position::Position;
