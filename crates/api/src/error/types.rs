//! Error type definitions for curve and pairing operations

use std::string::String;

/// Broad classification of an [`Error`]
///
/// Callers that only need to tell malformed input apart from arithmetic
/// misuse can match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed byte encoding: length, flag bits, or out-of-range value
    Format,
    /// Inversion of the additive identity
    DivideByZero,
    /// Square root of a non-residue
    Arithmetic,
    /// Invalid argument to a bulk operation
    Parameter,
}

/// Primary error type for bls381 operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A decoded value is not a valid encoding
    #[error("invalid encoding for {context}: {message}")]
    InvalidEncoding {
        /// What was being decoded
        context: &'static str,
        /// Why it was rejected
        message: String,
    },

    /// Input had the wrong number of bytes
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        /// What was being decoded
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Attempted to invert zero
    #[error("division by zero in {context}")]
    DivideByZero {
        /// Field or operation that was inverting
        context: &'static str,
    },

    /// Attempted to take the square root of a non-residue
    #[error("no square root exists in {context}")]
    NoSquareRoot {
        /// Field that was being rooted
        context: &'static str,
    },

    /// Invalid argument
    #[error("invalid parameter '{context}': {message}")]
    InvalidParameter {
        /// Name of the parameter
        context: &'static str,
        /// Why it was rejected
        message: String,
    },
}

/// Result type for bls381 operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEncoding { .. } | Self::InvalidLength { .. } => ErrorKind::Format,
            Self::DivideByZero { .. } => ErrorKind::DivideByZero,
            Self::NoSquareRoot { .. } => ErrorKind::Arithmetic,
            Self::InvalidParameter { .. } => ErrorKind::Parameter,
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::DivideByZero { .. } => Self::DivideByZero { context },
            Self::NoSquareRoot { .. } => Self::NoSquareRoot { context },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// Replace the message of an error that carries one
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidEncoding { context, .. } => Self::InvalidEncoding { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            other => other,
        }
    }
}
