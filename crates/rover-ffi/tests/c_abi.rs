//! Integration test: reference scenarios through the C ABI.
//!
//! Drives `rover_return_coordinates` the way a foreign host would: C
//! strings in, a JSON payload out, then `rover_string_free`. Also checks
//! that concurrent callers on separate threads do not interfere.

#![allow(unsafe_code)]

use std::ffi::{CStr, CString};
use std::thread;

use rover_ffi::{rover_return_coordinates, rover_string_free, CoordinatesResult};
use rover_test_utils::{
    Scenario, BOUNDS_VIOLATION, MALFORMED_COMMAND, SOUTH_FROM_ORIGIN, TWO_ROVERS,
};

fn run(top_right: &str, instructions: &str) -> CoordinatesResult {
    let tr = CString::new(top_right).unwrap();
    let ins = CString::new(instructions).unwrap();
    let raw = rover_return_coordinates(tr.as_ptr(), ins.as_ptr());
    assert!(!raw.is_null());
    // SAFETY: raw is a live payload returned above.
    let json = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_owned();
    rover_string_free(raw);
    CoordinatesResult::from_json(&json).expect("payload must be valid JSON")
}

fn check(s: Scenario) {
    let payload = run(s.top_right, s.instructions);
    assert_eq!(payload.result, s.result, "result for {s:?}");
    assert_eq!(payload.error, s.error, "error for {s:?}");
}

#[test]
fn two_rovers() {
    check(TWO_ROVERS);
}

#[test]
fn bounds_violation() {
    check(BOUNDS_VIOLATION);
}

#[test]
fn malformed_command() {
    check(MALFORMED_COMMAND);
}

#[test]
fn south_from_origin() {
    check(SOUTH_FROM_ORIGIN);
}

#[test]
fn decoded_payload_collapses_to_result() {
    assert_eq!(
        run(TWO_ROVERS.top_right, TWO_ROVERS.instructions).into_result(),
        Ok(TWO_ROVERS.result.to_string())
    );
    assert_eq!(
        run(BOUNDS_VIOLATION.top_right, BOUNDS_VIOLATION.instructions).into_result(),
        Err(BOUNDS_VIOLATION.error.to_string())
    );
}

#[test]
fn start_outside_grid_reported() {
    let payload = run("1 1", "20 2 N\nMMMLMM");
    assert!(payload.result.is_empty());
    assert!(payload.error.contains("outside the grid"), "{}", payload.error);
}

#[test]
fn concurrent_callers_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let scenario = if i % 2 == 0 {
                    TWO_ROVERS
                } else {
                    BOUNDS_VIOLATION
                };
                for _ in 0..100 {
                    check(scenario);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
