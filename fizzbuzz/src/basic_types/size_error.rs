use std::convert::Infallible;

use thiserror::Error;

#[cfg(doc)]
use crate::FizzBuzz;

/// Errors related to setting the size of a [`FizzBuzz`] sequence.
///
/// Both are raised when the size is given, never while the sequence is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    /// The provided value is not an integer.
    #[error("invalid value for size: {0:?} is not an integer")]
    NotAnInteger(String),
    /// The provided value is an integer, but it is smaller than 1.
    #[error("incorrect value for size: {0} is smaller than 1")]
    NotPositive(i64),
}

/// The category of a [`SizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeErrorKind {
    /// The value has the wrong type.
    Type,
    /// The value has the right type but is out of range.
    Argument,
}

impl SizeError {
    pub fn kind(&self) -> SizeErrorKind {
        match self {
            SizeError::NotAnInteger(_) => SizeErrorKind::Type,
            SizeError::NotPositive(_) => SizeErrorKind::Argument,
        }
    }
}

impl From<Infallible> for SizeError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
