//! # etru
//!
//! ETRU public key encryption: NTRU over the Eisenstein integers Z[ω].
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! etru = "0.3"
//! ```
//!
//! ```
//! use etru::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let scheme = Etru::new(ETRU_251)?;
//! let (pk, sk) = scheme.keypair(&mut OsRng)?;
//! let ct = scheme.encrypt_message(&pk, b"I am Maozihao", MessageEncoding::DigitSet, &mut OsRng)?;
//! assert_eq!(scheme.decrypt_message(&sk, &ct, MessageEncoding::DigitSet)?, b"I am Maozihao");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library RNG support
//! - `serde`: Serialize/Deserialize for ring values and key records
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`etru-api`]: Error type, scheme and serialization traits
//! - [`etru-params`]: Parameter sets
//! - [`etru-algorithms`]: Eisenstein integer and polynomial arithmetic
//! - [`etru-pke`]: The ETRU scheme, message encodings and block mode

pub use etru_algorithms as algorithms;
pub use etru_api as api;
pub use etru_params as params;
pub use etru_pke as pke;

/// Common imports for etru users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{PublicKeyScheme, Serialize, SerializeSecret};

    // Ring arithmetic
    pub use crate::algorithms::{EisensteinInteger, Polynomial};

    // Scheme, keys and parameters
    pub use crate::params::{EtruParams, ETRU_251};
    pub use crate::pke::{Etru, KeyCheck, MessageEncoding, PrivateKey, PublicKey};
}
