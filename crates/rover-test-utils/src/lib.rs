//! Test fixtures for rover simulator development.
//!
//! Provides the reference scenarios as [`Scenario`] values and a
//! deterministic fleet generator for benches and stress tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    generated_fleet, Scenario, BOUNDS_VIOLATION, MALFORMED_COMMAND, SOUTH_FROM_ORIGIN, TWO_ROVERS,
};
