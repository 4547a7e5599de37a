/*!
This module contains the error types raised when building comparators.

All of these errors describe a bad call site and are raised while a comparator pair is being
constructed. Comparison functions that were built successfully never return errors.
*/

use std::fmt;

/// Alias for a [`Result`] that wraps a [`ComparatorError`].
pub type ComparatorResult<T> = Result<T, ComparatorError>;

/// Errors that can result from constructing a comparator pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ComparatorError {
    /// Variant for a required argument that was not supplied. The value is the argument name.
    MissingArgument(&'static str),

    /// Variant for an argument that was supplied but cannot be called.
    InvalidArgumentType {
        /// A description of the argument that was rejected e.g. its name or position.
        argument: String,
        /// A rendering of the value that was supplied in place of a function.
        found: String,
    },

    /// Variant for a composition request that did not include any comparators.
    EmptyArgumentList,
}

impl std::error::Error for ComparatorError {}

impl fmt::Display for ComparatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparatorError::MissingArgument(name) => write!(f, "{} is required", name),
            ComparatorError::InvalidArgumentType { argument, found } => {
                write!(f, "{} is not a function (found {})", argument, found)
            }
            ComparatorError::EmptyArgumentList => write!(f, "No comparators to compose"),
        }
    }
}
