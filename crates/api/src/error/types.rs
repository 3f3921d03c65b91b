//! Error type definitions for the public API surface

use thiserror::Error;

/// Primary error type surfaced by the public API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A divisor was the zero element or the zero polynomial
    #[error("{context}: division by zero")]
    DivisionByZero { context: &'static str },

    /// An element or polynomial has no inverse modulo the given modulus
    #[error("{context}: {message}")]
    NotInvertible {
        context: &'static str,
        message: String,
    },

    /// Key generation ran out of candidates
    #[error("{context}: no invertible private key after {attempts} attempts")]
    KeyGenerationExhausted {
        context: &'static str,
        attempts: usize,
    },

    /// Input exceeds the capacity of a single block
    #[error("{context}: capacity {capacity} exceeded (needed {required})")]
    Overflow {
        context: &'static str,
        capacity: usize,
        required: usize,
    },

    /// Key material is inconsistent with its declared parameters
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Ciphertext is structurally malformed
    #[error("Invalid ciphertext: {context}: {message}")]
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {context}: {message}")]
    SerializationError {
        context: &'static str,
        message: String,
    },
}

/// Result type for API operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::NotInvertible { message, .. } => Self::NotInvertible { context, message },
            Self::KeyGenerationExhausted { attempts, .. } => {
                Self::KeyGenerationExhausted { context, attempts }
            }
            Self::Overflow {
                capacity, required, ..
            } => Self::Overflow {
                context,
                capacity,
                required,
            },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidCiphertext { message, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::SerializationError { message, .. } => {
                Self::SerializationError { context, message }
            }
        }
    }
}
