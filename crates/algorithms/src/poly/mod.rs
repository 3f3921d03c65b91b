//! Polynomial engine over the Eisenstein integers
//!
//! Polynomials are dense, highest degree first, with exact `Z[ω]`
//! coefficients. Reduction modulo `(x^N - 1, m)` and inversion in that
//! quotient ring live in [`division`].

pub mod division;
pub mod polynomial;
pub mod sampling;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::polynomial::Polynomial;
    pub use super::sampling::{DefaultSamplers, DigitSetSampler};
    pub use crate::eisenstein::EisensteinInteger;
}
