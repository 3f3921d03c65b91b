//! sampling.rs - Digit-set sampling of small polynomials

use super::polynomial::Polynomial;
use crate::eisenstein::EisensteinInteger;
use crate::error::{validate, Result};
use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore};

/// Trait for sampling short polynomials from the Eisenstein digit set
pub trait DigitSetSampler {
    /// Samples a polynomial holding exactly `weight` copies of each of the
    /// seven digits `0, ±1, ±ω, ±(1+ω)` in uniformly random order
    fn sample_digit_set<R: RngCore + CryptoRng>(rng: &mut R, weight: usize) -> Result<Polynomial>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

impl DigitSetSampler for DefaultSamplers {
    fn sample_digit_set<R: RngCore + CryptoRng>(rng: &mut R, weight: usize) -> Result<Polynomial> {
        validate::parameter(weight > 0, "weight", "must be positive")?;

        let mut coeffs: Vec<EisensteinInteger> = EisensteinInteger::DIGITS
            .iter()
            .flat_map(|&digit| core::iter::repeat(digit).take(weight))
            .collect();
        coeffs.shuffle(rng);

        Ok(Polynomial::new(coeffs))
    }
}
