//! Error handling for field, group and pairing operations

use std::borrow::Cow;
use std::fmt;

use bls381_api::{Error as CoreError, ErrorKind};

/// The error type for curve primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed encoding: bad flag bits, value out of range, point off the
    /// curve or outside the prime-order subgroup
    Format {
        /// Type being decoded
        context: &'static str,
        /// Reason the encoding was rejected
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Type being decoded
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Inversion of zero
    DivideByZero {
        /// Field whose zero was inverted
        context: &'static str,
    },

    /// Square root of a quadratic non-residue
    NoSquareRoot {
        /// Field that was being rooted
        context: &'static str,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Format error
    pub fn format<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Format {
            context,
            reason: reason.into(),
        }
    }

    /// Classify this error; length mismatches count as format errors
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format { .. } | Error::Length { .. } => ErrorKind::Format,
            Error::DivideByZero { .. } => ErrorKind::DivideByZero,
            Error::NoSquareRoot { .. } => ErrorKind::Arithmetic,
            Error::Parameter { .. } => ErrorKind::Parameter,
        }
    }
}

/// Result type for curve primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Format { context, reason } => {
                write!(f, "Invalid encoding for {}: {}", context, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::DivideByZero { context } => write!(f, "Division by zero in {}", context),
            Error::NoSquareRoot { context } => write!(f, "No square root exists in {}", context),
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Format { context, reason } => CoreError::InvalidEncoding {
                context,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::DivideByZero { context } => CoreError::DivideByZero { context },
            Error::NoSquareRoot { context } => CoreError::NoSquareRoot { context },
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "parameter",
                message: format!("{}: {}", name, reason),
            },
        }
    }
}

pub use bls381_api::error::ResultExt;

pub mod validate;
