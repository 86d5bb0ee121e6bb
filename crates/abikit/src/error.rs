//! ABI error types

use thiserror::Error;

/// Error returned by every fallible abikit operation
#[derive(Debug, Error)]
pub enum AbiError {
    /// Malformed schema document
    #[error("Schema error: {0}")]
    Schema(String),

    /// Type string outside the supported grammar
    #[error("Invalid type: {0}")]
    InvalidType(String),

    /// No method with the given name
    #[error("Method '{0}' not found")]
    MethodNotFound(String),

    /// No method with the given selector
    #[error("No method with id: 0x{0}")]
    NoSuchSelector(String),

    /// Call data too short to hold a selector
    #[error("Selector needs 4 bytes, got {0}")]
    SelectorTooShort(usize),

    /// Neither a method nor an event has the given name
    #[error("Could not locate named method or event: {0}")]
    NoSuchEventOrMethod(String),

    /// Nothing to decode
    #[error("Unmarshalling empty output")]
    EmptyOutput,

    /// Method output not aligned to 32-byte words
    #[error("Improperly formatted output: {0} bytes is not a multiple of 32")]
    MalformedOutput(usize),

    /// Declared type the textual parser cannot produce
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Unexpected token in argument text
    #[error("Syntax error: expected {expected}, found {found}")]
    Syntax {
        /// What the parser was looking for
        expected: String,
        /// What it got instead
        found: String,
    },

    /// Argument text ran out of tokens
    #[error("Argument stack underflow: not enough arguments")]
    StackUnderflow,

    /// Token could not be converted to the declared type
    #[error("Cannot parse '{token}' as {ty}: {reason}")]
    Parse {
        /// Offending token
        token: String,
        /// Declared type
        ty: String,
        /// Underlying failure
        reason: String,
    },

    /// Values do not match the declared types
    #[error("ABI encoding error: {0}")]
    Encode(String),

    /// Buffer does not hold a valid encoding
    #[error("ABI decoding error: {0}")]
    Decode(String),

    /// Decoded values do not fit the requested Rust type
    #[error("Detokenize error: {0}")]
    Detokenize(String),
}

impl AbiError {
    pub(crate) fn parse(token: &str, ty: impl ToString, reason: impl ToString) -> Self {
        AbiError::Parse {
            token: token.to_string(),
            ty: ty.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn syntax(expected: impl Into<String>, found: impl ToString) -> Self {
        AbiError::Syntax {
            expected: expected.into(),
            found: found.to_string(),
        }
    }
}

impl From<serde_json::Error> for AbiError {
    fn from(e: serde_json::Error) -> Self {
        AbiError::Schema(e.to_string())
    }
}
