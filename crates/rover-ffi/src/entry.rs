//! The C entry points: run a simulation, free its payload.
//!
//! Every call is self-contained. No handles, globals, or caches are kept,
//! so concurrent calls from different host threads need no locking.

use std::ffi::{c_char, CStr, CString};

use crate::codec::{return_coordinates, CoordinatesResult, FALLBACK_JSON};
use crate::error::BoundaryError;

/// Borrow a C string argument as `&str`.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated buffer that stays
/// valid for `'a`.
#[allow(unsafe_code)]
unsafe fn read_arg<'a>(
    ptr: *const c_char,
    null: BoundaryError,
    invalid: BoundaryError,
) -> Result<&'a str, BoundaryError> {
    if ptr.is_null() {
        return Err(null);
    }
    // SAFETY: non-null and NUL-terminated per caller contract.
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| invalid)
}

/// Hand a payload to C as an owned, NUL-terminated string.
fn into_raw_payload(payload: &CoordinatesResult) -> *mut c_char {
    // JSON escapes NUL, so this only falls back if encoding itself failed.
    CString::new(payload.to_json())
        .or_else(|_| CString::new(FALLBACK_JSON))
        .unwrap_or_default()
        .into_raw()
}

/// Simulate rovers on a grid and return the JSON payload
/// `{"result": "...", "error": "..."}`.
///
/// `top_right` is `"<maxX> <maxY>"`. `instructions` holds pairs of lines:
/// `"<x> <y> <heading>"` then a command string over `L`, `R`, `M`.
///
/// Never returns null and never unwinds. The returned string is owned by
/// the caller and must be released with [`rover_string_free`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rover_return_coordinates(
    top_right: *const c_char,
    instructions: *const c_char,
) -> *mut c_char {
    let payload = ffi_guard!({
        // SAFETY: both pointers are null or valid C strings per caller contract,
        // and outlive this call.
        let args = unsafe {
            (
                read_arg(
                    top_right,
                    BoundaryError::NullTopRight,
                    BoundaryError::InvalidUtf8TopRight,
                ),
                read_arg(
                    instructions,
                    BoundaryError::NullInstructions,
                    BoundaryError::InvalidUtf8Instructions,
                ),
            )
        };
        match args {
            (Ok(top_right), Ok(instructions)) => return_coordinates(top_right, instructions),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "rejected boundary argument");
                CoordinatesResult::err(e)
            }
        }
    });
    into_raw_payload(&payload)
}

/// Release a payload returned by [`rover_return_coordinates`].
///
/// Null is a no-op. Passing any other pointer, or freeing twice, is
/// undefined behavior.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rover_string_free(payload: *mut c_char) {
    if payload.is_null() {
        return;
    }
    ffi_guard!(
        {
            // SAFETY: payload came from CString::into_raw in
            // rover_return_coordinates and has not been freed yet, per caller
            // contract.
            drop(unsafe { CString::from_raw(payload) });
        },
        ()
    );
}
