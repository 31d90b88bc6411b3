//! Errors that exist only at the C boundary.

use std::error::Error;
use std::fmt;

/// Failures detected before the simulator is reached.
///
/// Rendered into the payload's `error` field like any simulation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryError {
    /// `top_right` was a null pointer.
    NullTopRight,
    /// `instructions` was a null pointer.
    NullInstructions,
    /// `top_right` was not valid UTF-8.
    InvalidUtf8TopRight,
    /// `instructions` was not valid UTF-8.
    InvalidUtf8Instructions,
    /// A Rust panic was caught at the boundary.
    Panicked,
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullTopRight => write!(f, "received null pointer top_right argument"),
            Self::NullInstructions => write!(f, "received null pointer instructions argument"),
            Self::InvalidUtf8TopRight => write!(f, "top_right argument is not valid UTF-8"),
            Self::InvalidUtf8Instructions => {
                write!(f, "instructions argument is not valid UTF-8")
            }
            Self::Panicked => write!(f, "internal error: simulator panicked"),
        }
    }
}

impl Error for BoundaryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_argument() {
        assert!(BoundaryError::NullTopRight.to_string().contains("top_right"));
        assert!(BoundaryError::NullInstructions
            .to_string()
            .contains("instructions"));
        assert!(BoundaryError::InvalidUtf8TopRight
            .to_string()
            .contains("UTF-8"));
    }
}
