// this_file: src/error.rs

//! Error taxonomy for host-runtime calls.
//!
//! None of these is fatal: every bridge degrades to a sentinel value or a
//! pending last-error entry and leaves recovery to the native caller.

use thiserror::Error;

/// Failure of a single call across the host-runtime boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The host method itself raised.
    #[error("{method}() raised: {message}")]
    Raised { method: String, message: String },

    /// The host method returned a value of the wrong shape.
    #[error("{method}() must return {expected}, got {actual}")]
    TypeMismatch {
        method: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The host object does not implement the method.
    #[error("host object has no method {method}()")]
    MissingMethod { method: String },

    /// The foreign handle is no longer registered with the runtime.
    #[error("foreign handle is no longer registered")]
    StaleHandle,

    /// An integer crossed the boundary but does not fit the native width.
    /// Narrowing is always checked; silent truncation is never performed.
    #[error("{method}() returned {value}, out of range for the native interface")]
    OutOfRange { method: String, value: i64 },
}

impl BridgeError {
    /// Shorthand for a host-raised failure.
    pub fn raised(method: &str, message: impl Into<String>) -> Self {
        BridgeError::Raised {
            method: method.to_owned(),
            message: message.into(),
        }
    }

    /// Shorthand for a missing-method failure.
    pub fn missing(method: &str) -> Self {
        BridgeError::MissingMethod {
            method: method.to_owned(),
        }
    }

    /// Shorthand for a wrong-return-shape failure.
    pub fn mismatch(method: &str, expected: &'static str, actual: &'static str) -> Self {
        BridgeError::TypeMismatch {
            method: method.to_owned(),
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BridgeError::mismatch("get_point_count", "an integer", "str");
        assert_eq!(
            err.to_string(),
            "get_point_count() must return an integer, got str"
        );

        let err = BridgeError::missing("draw");
        assert_eq!(err.to_string(), "host object has no method draw()");

        let err = BridgeError::OutOfRange {
            method: "get_point_count".to_owned(),
            value: -3,
        };
        assert!(err.to_string().contains("-3"));
    }
}
