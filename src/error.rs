//! Error types for netcalc.

use thiserror::Error;

/// Errors produced while turning user-supplied strings into addresses.
///
/// Both kinds are recoverable: the caller surfaces them as a displayable
/// message and nothing retries, since every computation is deterministic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not match the expected textual shape
    #[error("invalid format `{input}`: {reason}")]
    InvalidFormat { input: String, reason: String },

    /// Value parses as a number but violates a bound
    #[error("out of range `{input}`: {reason}")]
    OutOfRange { input: String, reason: String },
}

impl ParseError {
    /// Shorthand for [`ParseError::InvalidFormat`].
    pub fn invalid_format(input: &str, reason: &str) -> Self {
        ParseError::InvalidFormat {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for [`ParseError::OutOfRange`].
    pub fn out_of_range(input: &str, reason: &str) -> Self {
        ParseError::OutOfRange {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
