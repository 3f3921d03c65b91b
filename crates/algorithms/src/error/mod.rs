//! Error handling for the ring arithmetic

use std::borrow::Cow;
use std::fmt::Display;

use etru_api::Error as CoreError;
use thiserror::Error;

/// The error type for Eisenstein and polynomial arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The divisor was the zero element or reduced to the zero polynomial
    #[error("Division by zero in {context}")]
    DivisionByZero {
        /// Operation that attempted the division
        context: &'static str,
    },

    /// The gcd with the modulus is not a unit
    #[error("{element} has no inverse modulo {modulus}")]
    NotInvertible {
        /// Display form of the value that was inverted
        element: String,
        /// Display form of the modulus
        modulus: String,
    },

    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
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

    /// Shorthand to create a NotInvertible error
    pub fn not_invertible(element: impl Display, modulus: impl Display) -> Self {
        Error::NotInvertible {
            element: element.to_string(),
            modulus: modulus.to_string(),
        }
    }
}

/// Result type for ring arithmetic
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::DivisionByZero { context } => CoreError::DivisionByZero { context },
            e @ Error::NotInvertible { .. } => CoreError::NotInvertible {
                context: "ring arithmetic",
                message: e.to_string(),
            },
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "ring arithmetic",
                message: format!("{}: {}", name, reason),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
