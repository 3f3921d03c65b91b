//! Ring arithmetic for ETRU
//!
//! This crate provides exact arithmetic on the Eisenstein integers Z[ω]
//! and on polynomials with Eisenstein coefficients: the closest-vector
//! division that makes Z[ω] Euclidean, inversion modulo a prime, and
//! reduction and inversion in the quotient ring (Z[ω]/m)[x] / (x^N - 1).
//!
//! Nothing here is constant time. Timings depend on the values involved.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Eisenstein integers
pub mod eisenstein;
pub use eisenstein::EisensteinInteger;

// Polynomials over Z[ω]
pub mod poly;
pub use poly::polynomial::Polynomial;
pub use poly::sampling::{DefaultSamplers, DigitSetSampler};
