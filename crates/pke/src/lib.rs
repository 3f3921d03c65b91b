//! Public key encryption over the Eisenstein integers for the etru library.
//!
//! [`Etru`] is an NTRU-style scheme whose ring is `Z[ω][x] / (x^N - 1)`.
//! It implements [`etru_api::PublicKeyScheme`] on polynomials and offers
//! byte-level single-block and block-mode helpers on top.

#![forbid(unsafe_code)]

pub mod error;
pub mod etru;

// Re-export key items
pub use error::{Error, Result};
pub use etru::{Etru, KeyCheck, MessageEncoding, PrivateKey, PublicKey};
