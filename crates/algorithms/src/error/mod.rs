//! Error handling for the pairing primitives

use alloc::borrow::Cow;
use core::fmt;

#[cfg(feature = "std")]
use alloc::string::ToString;

use bls48_api::Error as CoreError;

/// The error type for pairing primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Bytes decoded to something outside the expected group
    Point {
        /// Group being decoded
        group: &'static str,
        /// What check failed
        reason: &'static str,
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
}

/// Result type for pairing primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Point { group, reason } => {
                write!(f, "Invalid {} element: {}", group, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "parameter",
                },
                #[cfg(feature = "std")]
                message: reason.into_owned(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Point { group, reason } => CoreError::InvalidPoint {
                context: group,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
        }
    }
}

// Re-export core error handling traits for convenience
pub use bls48_api::error::ResultExt;

pub mod validate;

#[cfg(test)]
mod tests;
