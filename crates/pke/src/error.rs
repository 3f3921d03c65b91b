//! Error handling for ETRU operations.

use etru_algorithms::error::Error as PrimitiveError;
use etru_api::error::Error as CoreError;
use thiserror::Error;

/// Error type for ETRU operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Ring arithmetic failed
    #[error("ETRU primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// No candidate private polynomial was invertible within the budget
    #[error("no invertible private key after {attempts} attempts")]
    KeyGenerationExhausted {
        /// Candidates tried
        attempts: usize,
    },

    /// The message does not fit into a single block
    #[error("message needs {required} coefficients but a block holds {capacity}")]
    Overflow {
        /// Coefficients available in one block
        capacity: usize,
        /// Coefficients the message needs
        required: usize,
    },

    /// The operation needs keys the scheme instance does not hold
    #[error("no key pair loaded")]
    MissingKey,

    /// Serialized or supplied key material is inconsistent
    #[error("malformed key: {0}")]
    MalformedKey(String),

    /// A block stream cannot be unpadded or decoded
    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    /// Message bytes and digit-set coefficients do not correspond
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Rejected scheme parameters
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

impl Error {
    /// Shorthand to create an InvalidParameter error
    pub fn param(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// True when the underlying arithmetic failed on a non-invertible element
    pub fn is_not_invertible(&self) -> bool {
        matches!(self, Error::Primitive(PrimitiveError::NotInvertible { .. }))
    }
}

// Conversion from ETRU Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGenerationExhausted { attempts } => CoreError::KeyGenerationExhausted {
                context: "ETRU key generation",
                attempts,
            },
            Error::Overflow { capacity, required } => CoreError::Overflow {
                context: "ETRU message encoding",
                capacity,
                required,
            },
            e @ Error::MissingKey => CoreError::InvalidKey {
                context: "ETRU",
                message: e.to_string(),
            },
            Error::MalformedKey(message) => CoreError::InvalidKey {
                context: "ETRU key",
                message,
            },
            Error::MalformedCiphertext(message) => CoreError::InvalidCiphertext {
                context: "ETRU block mode",
                message,
            },
            Error::Encoding(message) => CoreError::SerializationError {
                context: "ETRU message encoding",
                message,
            },
            Error::InvalidParameter { name, reason } => CoreError::InvalidParameter {
                context: "ETRU parameters",
                message: format!("{}: {}", name, reason),
            },
        }
    }
}

/// Result type for ETRU operations.
pub type Result<T> = core::result::Result<T, Error>;
