//! Spatial bounds for the rover simulator.
//!
//! Rovers live on an axis-aligned rectangle anchored at the origin. The
//! [`Grid`] is parsed once per run from its top-right corner and answers
//! a single question: is this position inside?

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;

pub use grid::Grid;
