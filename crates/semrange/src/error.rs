//! Error types for range and version parsing

use thiserror::Error;

/// Errors produced while tokenizing, building versions or parsing ranges
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// A token sequence cannot form `major[.minor[.patch]]`
    #[error("Malformed version \"{input}\": {reason}")]
    MalformedVersion { input: String, reason: String },

    /// A recognizer was asked to parse tokens it does not accept
    #[error("The {recognizer} recognizer cannot parse \"{input}\"")]
    MalformedRange { recognizer: &'static str, input: String },

    /// No recognizer accepted the clause
    #[error("Could not parse version range \"{range}\"")]
    UnparsableRange { range: String },

    /// A numeric version component does not fit in 64 bits
    #[error("Version component \"{value}\" is out of range")]
    IntegerOverflow { value: String },

    #[error("Unexpected character '{character}' at offset {position} in \"{input}\"")]
    UnexpectedCharacter {
        character: char,
        position: usize,
        input: String,
    },
}

impl RangeError {
    pub(crate) fn malformed_version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        RangeError::MalformedVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unparsable(range: impl Into<String>) -> Self {
        RangeError::UnparsableRange { range: range.into() }
    }
}

pub type Result<T> = std::result::Result<T, RangeError>;
