//! ETRU: NTRU over the Eisenstein integers.
//!
//! Keys and messages are polynomials in `Z[ω][x] / (x^N - 1)` with small
//! digit-set coefficients. With `f` invertible modulo a small prime `p` and
//! a large prime `q`, the public key is `h = p·f_q·g` and a message `m`
//! encrypts to `e = r·h + m (mod q)`. Multiplying by `f` gives
//! `p·r·g + f·m`, which is exact as long as its coefficients stay inside the
//! Voronoi cell of `q`; reducing modulo `p` and multiplying by `f_p`
//! recovers `m`.

mod block;
mod encoding;
mod keys;

pub use self::block::{pad_blocks, unpad_blocks};
pub use self::encoding::MessageEncoding;
pub use self::keys::{PrivateKey, PublicKey};

use core::fmt;

use etru_algorithms::{DefaultSamplers, DigitSetSampler, EisensteinInteger, Polynomial};
use etru_api::{PublicKeyScheme, Result as ApiResult};
use etru_params::pqc::etru::{digit_set_len, EtruParams};
use rand::{CryptoRng, Rng, RngCore};
use tracing::{debug, info};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Polynomials produced by a successful key generation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct KeySet {
    f: Polynomial,
    g: Polynomial,
    f_p: Polynomial,
    f_q: Polynomial,
    h: Polynomial,
}

/// Outcome of [`Etru::verify`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyCheck {
    /// `f·f_p ≡ 1 (mod R, p)`
    pub f_p_inverts_f: bool,
    /// `f_q·f ≡ 1 (mod R, q)`
    pub f_q_inverts_f: bool,
    /// `f·h ≡ p·g (mod R, q)`
    pub public_key_matches: bool,
}

impl KeyCheck {
    /// True when every relation holds
    pub fn is_valid(&self) -> bool {
        self.f_p_inverts_f && self.f_q_inverts_f && self.public_key_matches
    }
}

/// An ETRU instance: validated parameters, the ideal `x^N - 1` and,
/// once generated, a key pair.
#[derive(Clone)]
pub struct Etru {
    params: EtruParams,
    p: EisensteinInteger,
    q: EisensteinInteger,
    ideal: Polynomial,
    keys: Option<KeySet>,
}

impl fmt::Debug for Etru {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Etru")
            .field("params", &self.params)
            .field("has_keys", &self.keys.is_some())
            .finish()
    }
}

impl Etru {
    /// Creates an instance after validating the parameter set
    pub fn new(params: EtruParams) -> Result<Self> {
        let p = EisensteinInteger::from(params.p);
        let q = EisensteinInteger::from(params.q);

        if params.n < 2 {
            return Err(Error::param("n", "ring dimension must be at least 2"));
        }
        if u32::try_from(params.n).is_err() {
            return Err(Error::param("n", "ring dimension must fit in 32 bits"));
        }
        if p.is_zero() || q.is_zero() {
            return Err(Error::param("p, q", "moduli must be nonzero"));
        }
        if p.is_unit() {
            return Err(Error::param("p", "small modulus must not be a unit"));
        }
        if p.norm() >= q.norm() {
            return Err(Error::param("q", format!("norm of {} must exceed norm of {}", q, p)));
        }
        if params.key_weight == 0 || params.blinding_weight == 0 {
            return Err(Error::param("weight", "sampling weights must be positive"));
        }
        if digit_set_len(params.key_weight) + 1 > params.n {
            return Err(Error::param(
                "key_weight",
                format!(
                    "f needs {} coefficients but N is {}",
                    digit_set_len(params.key_weight) + 1,
                    params.n
                ),
            ));
        }
        if digit_set_len(params.blinding_weight) > params.n {
            return Err(Error::param(
                "blinding_weight",
                format!(
                    "r needs {} coefficients but N is {}",
                    digit_set_len(params.blinding_weight),
                    params.n
                ),
            ));
        }
        if params.max_key_retries == 0 {
            return Err(Error::param("max_key_retries", "must be positive"));
        }

        Ok(Self {
            params,
            p,
            q,
            ideal: Polynomial::ideal(params.n),
            keys: None,
        })
    }

    /// Returns a fresh instance with a different retry budget
    pub fn with_max_key_retries(self, max_key_retries: usize) -> Result<Self> {
        Self::new(EtruParams {
            max_key_retries,
            ..self.params
        })
    }

    /// Returns a fresh instance with a different weight for `f` and `g`
    pub fn with_key_weight(self, key_weight: usize) -> Result<Self> {
        Self::new(EtruParams {
            key_weight,
            ..self.params
        })
    }

    /// Returns a fresh instance with a different weight for `r`
    pub fn with_blinding_weight(self, blinding_weight: usize) -> Result<Self> {
        Self::new(EtruParams {
            blinding_weight,
            ..self.params
        })
    }

    /// The parameter set
    pub fn params(&self) -> &EtruParams {
        &self.params
    }

    /// Ring dimension N
    pub fn n(&self) -> usize {
        self.params.n
    }

    /// Small modulus
    pub fn p(&self) -> EisensteinInteger {
        self.p
    }

    /// Large modulus
    pub fn q(&self) -> EisensteinInteger {
        self.q
    }

    /// The ideal polynomial x^N - 1
    pub fn ideal(&self) -> &Polynomial {
        &self.ideal
    }

    /// True once a key pair is stored
    pub fn has_keys(&self) -> bool {
        self.keys.is_some()
    }

    /// Samples a digit-set polynomial with `weight` copies of each digit
    pub fn generate_random_polynomial<R: RngCore + CryptoRng>(
        &self,
        weight: usize,
        rng: &mut R,
    ) -> Result<Polynomial> {
        Ok(DefaultSamplers::sample_digit_set(rng, weight)?)
    }

    /// Samples a fresh blinding polynomial `r`
    pub fn generate_blinding_polynomial<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<Polynomial> {
        self.generate_random_polynomial(self.params.blinding_weight, rng)
    }

    /// Generates and stores a key pair, retrying non-invertible `f`.
    ///
    /// On failure the instance keeps whatever keys it held before.
    pub fn generate_random_keys<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<()> {
        let keys = self.search_keys(rng)?;
        self.keys = Some(keys);
        Ok(())
    }

    fn search_keys<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<KeySet> {
        self.search_keys_with(rng, Self::sample_private_candidate)
    }

    /// A digit-set polynomial with one extra coefficient 1 at a random
    /// position. The digit set sums to zero, so `f(1) = 1`.
    fn sample_private_candidate<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<Polynomial> {
        let mut f = self.generate_random_polynomial(self.params.key_weight, rng)?;
        let position = rng.gen_range(0..=f.len());
        f.coeffs.insert(position, EisensteinInteger::ONE);
        Ok(f)
    }

    fn search_keys_with<R, S>(&self, rng: &mut R, mut sample_f: S) -> Result<KeySet>
    where
        R: RngCore + CryptoRng,
        S: FnMut(&Self, &mut R) -> Result<Polynomial>,
    {
        let g = self.generate_random_polynomial(self.params.key_weight, rng)?;

        for attempt in 1..=self.params.max_key_retries {
            let f = sample_f(self, rng)?;
            match self.derive_keys(f, g.clone()) {
                Ok(keys) => {
                    info!(n = self.params.n, attempts = attempt, "generated ETRU key pair");
                    return Ok(keys);
                }
                Err(e) if e.is_not_invertible() => {
                    debug!(attempt, error = %e, "private key candidate rejected");
                }
                Err(e) => return Err(e),
            }
        }

        Err(Error::KeyGenerationExhausted {
            attempts: self.params.max_key_retries,
        })
    }

    /// Derives and stores `f_p`, `f_q` and `h` from chosen `f` and `g`
    pub fn generate_public_keys(&mut self, f: Polynomial, g: Polynomial) -> Result<()> {
        let keys = self.derive_keys(f, g)?;
        self.keys = Some(keys);
        Ok(())
    }

    fn derive_keys(&self, f: Polynomial, g: Polynomial) -> Result<KeySet> {
        let f_p = f.invert(&self.ideal, self.p)?;
        let f_q = f.invert(&self.ideal, self.q)?;
        let h = f_q
            .scale(self.p)
            .mul(&g)
            .reduce_ideal(&self.ideal, self.q)?
            .reduce_coeffs(self.q)?;
        Ok(KeySet { f, g, f_p, f_q, h })
    }

    fn keys(&self) -> Result<&KeySet> {
        self.keys.as_ref().ok_or(Error::MissingKey)
    }

    /// Encrypts `m` with blinding `r` under the stored public key
    pub fn encrypt(&self, m: &Polynomial, r: &Polynomial) -> Result<Polynomial> {
        self.encrypt_with(&self.keys()?.h, m, r)
    }

    /// Decrypts with the stored private key
    pub fn decrypt(&self, e: &Polynomial) -> Result<Polynomial> {
        let keys = self.keys()?;
        self.decrypt_with(&keys.f, &keys.f_p, e)
    }

    /// `e = r·h + m mod (R, q)`
    pub(crate) fn encrypt_with(
        &self,
        h: &Polynomial,
        m: &Polynomial,
        r: &Polynomial,
    ) -> Result<Polynomial> {
        if m.len() > self.params.n {
            return Err(Error::Overflow {
                capacity: self.params.n,
                required: m.len(),
            });
        }

        Ok(r
            .mul(h)
            .add(m)
            .reduce_ideal(&self.ideal, self.q)?
            .reduce_coeffs(self.q)?)
    }

    /// `m = f_p·(f·e mod q) mod (R, p)`
    pub(crate) fn decrypt_with(
        &self,
        f: &Polynomial,
        f_p: &Polynomial,
        e: &Polynomial,
    ) -> Result<Polynomial> {
        let a = f
            .mul(e)
            .reduce_ideal(&self.ideal, self.q)?
            .reduce_coeffs(self.q)?;
        Ok(f_p
            .mul(&a)
            .reduce_ideal(&self.ideal, self.p)?
            .reduce_coeffs(self.p)?)
    }

    /// Recomputes the key relations of the stored key pair
    pub fn verify(&self) -> Result<KeyCheck> {
        let keys = self.keys()?;
        let one = Polynomial::one();

        let f_f_p = keys.f.mul(&keys.f_p).reduce_ideal(&self.ideal, self.p)?;
        let f_q_f = keys.f_q.mul(&keys.f).reduce_ideal(&self.ideal, self.q)?;
        let f_h = keys.f.mul(&keys.h).reduce_ideal(&self.ideal, self.q)?;
        let p_g = keys.g.scale(self.p).reduce_ideal(&self.ideal, self.q)?;

        Ok(KeyCheck {
            f_p_inverts_f: f_f_p == one,
            f_q_inverts_f: f_q_f == one,
            public_key_matches: f_h == p_g,
        })
    }

    /// The stored public key
    pub fn public_key(&self) -> Result<PublicKey> {
        Ok(self.public_key_of(self.keys()?))
    }

    /// A copy of the stored private key
    pub fn private_key(&self) -> Result<PrivateKey> {
        Ok(self.private_key_of(self.keys()?))
    }

    fn public_key_of(&self, keys: &KeySet) -> PublicKey {
        PublicKey {
            n: self.params.n,
            p: self.p,
            q: self.q,
            h: keys.h.clone(),
        }
    }

    fn private_key_of(&self, keys: &KeySet) -> PrivateKey {
        PrivateKey {
            n: self.params.n,
            p: self.p,
            q: self.q,
            f: keys.f.clone(),
            f_p: keys.f_p.clone(),
        }
    }

    fn check_key(&self, n: usize, p: EisensteinInteger, q: EisensteinInteger) -> Result<()> {
        if (n, p, q) != (self.params.n, self.p, self.q) {
            return Err(Error::MalformedKey(format!(
                "key is for (N={}, p={}, q={}) but the scheme uses (N={}, p={}, q={})",
                n, p, q, self.params.n, self.p, self.q
            )));
        }
        Ok(())
    }

    pub(crate) fn check_public_key(&self, pk: &PublicKey) -> Result<()> {
        pk.validate()?;
        self.check_key(pk.n, pk.p, pk.q)
    }

    pub(crate) fn check_private_key(&self, sk: &PrivateKey) -> Result<()> {
        sk.validate()?;
        self.check_key(sk.n, sk.p, sk.q)
    }

    /// Encrypts a single-block message under `pk`
    pub fn encrypt_message<R: RngCore + CryptoRng>(
        &self,
        pk: &PublicKey,
        message: &[u8],
        encoding: MessageEncoding,
        rng: &mut R,
    ) -> Result<Polynomial> {
        self.check_public_key(pk)?;
        let m = encoding.encode_block(message, self.params.n)?;
        let r = self.generate_blinding_polynomial(rng)?;
        self.encrypt_with(&pk.h, &m, &r)
    }

    /// Decrypts a single-block message with `sk`
    pub fn decrypt_message(
        &self,
        sk: &PrivateKey,
        ciphertext: &Polynomial,
        encoding: MessageEncoding,
    ) -> Result<Vec<u8>> {
        self.check_private_key(sk)?;
        let m = self.decrypt_with(&sk.f, &sk.f_p, ciphertext)?;
        encoding.decode(m.as_coeffs_slice())
    }
}

impl PublicKeyScheme for Etru {
    type PublicKey = PublicKey;
    type PrivateKey = PrivateKey;
    type Plaintext = Polynomial;
    type Ciphertext = Polynomial;

    fn name(&self) -> &'static str {
        "ETRU"
    }

    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::PrivateKey)> {
        let keys = self.search_keys(rng)?;
        Ok((self.public_key_of(&keys), self.private_key_of(&keys)))
    }

    fn encrypt<R: CryptoRng + RngCore>(
        &self,
        pk: &Self::PublicKey,
        plaintext: &Self::Plaintext,
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        self.check_public_key(pk)?;
        let r = self.generate_blinding_polynomial(rng)?;
        Ok(self.encrypt_with(&pk.h, plaintext, &r)?)
    }

    fn decrypt(
        &self,
        sk: &Self::PrivateKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::Plaintext> {
        self.check_private_key(sk)?;
        Ok(self.decrypt_with(&sk.f, &sk.f_p, ciphertext)?)
    }
}
