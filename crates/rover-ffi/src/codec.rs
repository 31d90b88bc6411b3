//! The structured payload that crosses the C boundary.
//!
//! [`CoordinatesResult`] is serialized to JSON so callers in any language
//! can decode it without sharing C struct layouts. Exactly one of its two
//! fields is non-empty.

use rover_core::SimError;
use rover_engine::Outcome;
use serde::{Deserialize, Serialize};

/// Payload emitted when JSON encoding itself fails. Hand-checked to be
/// valid JSON with both fields present.
pub(crate) const FALLBACK_JSON: &str = r#"{"result":"","error":"internal error: failed to encode result"}"#;

/// Result of one simulation run, as seen by foreign callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatesResult {
    /// Newline-joined `"<x> <y> <heading>"` lines, or empty on failure.
    pub result: String,
    /// Human-readable failure message, or empty on success.
    pub error: String,
}

impl CoordinatesResult {
    /// A successful payload.
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            error: String::new(),
        }
    }

    /// A failed payload carrying `error`'s display text.
    pub fn err(error: impl ToString) -> Self {
        Self {
            result: String::new(),
            error: error.to_string(),
        }
    }

    /// Whether this payload reports success.
    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }

    /// Encode as JSON. Never fails: an encoding error yields a fixed
    /// error payload instead.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to encode payload");
            FALLBACK_JSON.to_string()
        })
    }

    /// Decode a payload produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Collapse into a `Result`, treating a non-empty `error` as authoritative.
    pub fn into_result(self) -> Result<String, String> {
        if self.error.is_empty() {
            Ok(self.result)
        } else {
            Err(self.error)
        }
    }
}

impl From<Result<Outcome, SimError>> for CoordinatesResult {
    fn from(r: Result<Outcome, SimError>) -> Self {
        match r {
            Ok(outcome) => Self::ok(outcome.to_string()),
            Err(e) => Self::err(e),
        }
    }
}

/// Run a simulation and wrap the outcome for the boundary.
///
/// This is the safe core of [`rover_return_coordinates`](crate::rover_return_coordinates).
///
/// ```
/// use rover_ffi::return_coordinates;
///
/// let payload = return_coordinates("5 5", "1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM");
/// assert_eq!(payload.result, "1 3 N\n5 1 E");
/// assert_eq!(payload.error, "");
/// ```
pub fn return_coordinates(top_right: &str, instructions: &str) -> CoordinatesResult {
    rover_engine::simulate(top_right, instructions).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn success_payload_has_empty_error() {
        let json = return_coordinates("5 5", "1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM").to_json();
        assert_eq!(json, r#"{"result":"1 3 N\n5 1 E","error":""}"#);
    }

    #[test]
    fn failure_payload_has_empty_result() {
        let json = return_coordinates("5 5", "1 2 N\nMMMMMMMMMMMMMMMM").to_json();
        assert_eq!(
            json,
            r#"{"result":"","error":"Instruction tried to send Rover too far \"N\""}"#
        );
    }

    #[test]
    fn fallback_is_well_formed() {
        let decoded = CoordinatesResult::from_json(FALLBACK_JSON).unwrap();
        assert!(decoded.result.is_empty());
        assert!(!decoded.error.is_empty());
    }

    #[test]
    fn into_result_prefers_error() {
        let payload = CoordinatesResult {
            result: "stale".into(),
            error: "boom".into(),
        };
        assert_eq!(payload.into_result(), Err("boom".to_string()));
        assert_eq!(CoordinatesResult::ok("1 1 N").into_result(), Ok("1 1 N".into()));
    }

    #[test]
    fn control_characters_are_escaped() {
        let json = CoordinatesResult::err("bad \0 byte\n").to_json();
        assert!(!json.contains('\0'));
        assert_eq!(
            CoordinatesResult::from_json(&json).unwrap().error,
            "bad \0 byte\n"
        );
    }

    proptest! {
        #[test]
        fn exactly_one_field_populated(top_right in ".{0,12}", instructions in ".{0,64}") {
            let payload = return_coordinates(&top_right, &instructions);
            prop_assert!(payload.result.is_empty() != payload.error.is_empty());
            let decoded = CoordinatesResult::from_json(&payload.to_json()).unwrap();
            prop_assert_eq!(decoded, payload);
        }

        #[test]
        fn well_formed_inputs_never_error_on_parse(
            x in 0i32..6, y in 0i32..6, cmds in "[LRlr]{1,20}",
        ) {
            // Turn-only programs from an on-grid start always succeed.
            let payload = return_coordinates("5 5", &format!("{x} {y} N\n{cmds}"));
            prop_assert!(payload.is_ok(), "{}", payload.error);
        }
    }
}
