//! C FFI bindings for the rover grid simulator.
//!
//! Exposes one entry point, [`rover_return_coordinates`], which takes the
//! grid bounds and instruction block as C strings and returns a JSON
//! payload with `result` and `error` fields. Callers release the payload
//! with [`rover_string_free`]. Nothing is retained between calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

// Run `$body`, converting a panic into `$fallback` (a
// `BoundaryError::Panicked` payload by default) so unwinding never
// crosses the C boundary.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard!(
            $body,
            $crate::codec::CoordinatesResult::err($crate::error::BoundaryError::Panicked)
        )
    };
    ($body:block, $fallback:expr) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => {
                tracing::error!("panic caught at FFI boundary");
                $fallback
            }
        }
    };
}

pub mod codec;
pub mod entry;
pub mod error;

pub use codec::{return_coordinates, CoordinatesResult};
pub use entry::{rover_return_coordinates, rover_string_free};
pub use error::BoundaryError;
