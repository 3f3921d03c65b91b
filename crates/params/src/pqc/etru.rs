//! Constants for the ETRU public key encryption scheme
//!
//! Moduli are Eisenstein integers `x + yω`, stored as `(x, y)` pairs so this
//! crate stays free of the arithmetic types.

/// Number of elements in the sampling digit set `{0, ±1, ±ω, ±(1+ω)}`
pub const ETRU_DIGIT_SET_SIZE: usize = 7;

/// Default number of private key candidates tried before giving up
pub const ETRU_DEFAULT_KEY_RETRIES: usize = 10;

/// ETRU parameter set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EtruParams {
    /// Ring dimension: the ideal polynomial is x^N - 1
    pub n: usize,

    /// Small (plaintext) modulus as an Eisenstein integer (x, y)
    pub p: (i64, i64),

    /// Large (ciphertext) modulus as an Eisenstein integer (x, y)
    pub q: (i64, i64),

    /// Copies of each digit in the private polynomials f and g
    pub key_weight: usize,

    /// Copies of each digit in the per-message blinding polynomial r
    pub blinding_weight: usize,

    /// Private key candidates tried before key generation fails
    pub max_key_retries: usize,
}

/// ETRU-251 parameters
///
/// p = 2+3ω has norm 7, so the seven digits are exactly the residues mod p.
/// q = 167ω generates an inert prime, so Z[ω]/(q) is a field of 167² elements.
/// With key weight 8 every coefficient of p·r·g + f·m stays far inside the
/// Voronoi cell of q (inradius 83.5).
pub const ETRU_251: EtruParams = EtruParams {
    n: 251,
    p: (2, 3),
    q: (0, 167),
    key_weight: 8,
    blinding_weight: 251 / 8,
    max_key_retries: ETRU_DEFAULT_KEY_RETRIES,
};

/// Length of a digit-set polynomial sampled with the given weight
pub const fn digit_set_len(weight: usize) -> usize {
    weight * ETRU_DIGIT_SET_SIZE
}
