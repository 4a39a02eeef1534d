// konsa - Error types for fraction construction and division
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for konsa.
//!
//! Only [`Fraction`](crate::Fraction) can fail: construction with a zero
//! denominator, and division by a zero-valued fraction. The other types in
//! this crate encode absence and alternatives as ordinary values instead of
//! errors.

use std::fmt;

/// Result type for fallible konsa operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or dividing fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A fraction was constructed with a denominator of zero
    ZeroDenominator,
    /// A fraction was divided by a zero-valued fraction
    ZeroDivisor,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroDenominator => write!(f, "Denominator must be != 0"),
            Error::ZeroDivisor => {
                write!(f, "Numerator for the second fraction must be != 0")
            }
        }
    }
}

impl std::error::Error for Error {}
