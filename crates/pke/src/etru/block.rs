//! Block mode for messages longer than one ring element.
//!
//! The coefficient stream is padded to whole blocks of N and every block is
//! encrypted with its own blinding polynomial. Padding appends `k` zeros to
//! fill the last data block, then a sentinel block of `N - k` zeros followed
//! by `k` ones, so a full final block is followed by an all-zero sentinel.

use etru_algorithms::{EisensteinInteger, Polynomial};
use rand::{CryptoRng, RngCore};
use rayon::prelude::*;
use tracing::trace;

use super::{encoding::MessageEncoding, keys::PrivateKey, keys::PublicKey, Etru};
use crate::error::{Error, Result};

/// Pads a coefficient stream and splits it into blocks of exactly `n`
pub fn pad_blocks(mut coeffs: Vec<EisensteinInteger>, n: usize) -> Result<Vec<Polynomial>> {
    if n == 0 {
        return Err(Error::param("n", "block length must be positive"));
    }
    let k = (n - coeffs.len() % n) % n;

    coeffs.resize(coeffs.len() + k, EisensteinInteger::ZERO);
    coeffs.resize(coeffs.len() + n - k, EisensteinInteger::ZERO);
    coeffs.resize(coeffs.len() + k, EisensteinInteger::ONE);

    Ok(coeffs
        .chunks(n)
        .map(|block| Polynomial::new(block.to_vec()))
        .collect())
}

/// Joins blocks of exactly `n` and strips the padding added by [`pad_blocks`]
pub fn unpad_blocks(blocks: &[Polynomial], n: usize) -> Result<Vec<EisensteinInteger>> {
    let malformed = |reason: &str| Error::MalformedCiphertext(reason.into());

    if blocks.is_empty() {
        return Err(malformed("no blocks"));
    }
    if blocks.iter().any(|b| b.len() != n) {
        return Err(malformed("block length differs from N"));
    }

    let mut coeffs: Vec<EisensteinInteger> = blocks
        .iter()
        .flat_map(|b| b.as_coeffs_slice().iter().copied())
        .collect();

    let sentinel_start = coeffs.len() - n;
    let sentinel = &coeffs[sentinel_start..];
    let k = sentinel
        .iter()
        .filter(|&&c| c == EisensteinInteger::ONE)
        .count();

    if k >= n {
        return Err(malformed("padding count must be below N"));
    }
    let (zeros, ones) = sentinel.split_at(n - k);
    if !zeros.iter().all(EisensteinInteger::is_zero)
        || !ones.iter().all(|&c| c == EisensteinInteger::ONE)
    {
        return Err(malformed("bad padding block"));
    }
    if sentinel_start < k || !coeffs[sentinel_start - k..sentinel_start]
        .iter()
        .all(EisensteinInteger::is_zero)
    {
        return Err(malformed("padding zeros missing"));
    }

    coeffs.truncate(sentinel_start - k);
    Ok(coeffs)
}

impl Etru {
    /// Encrypts a message of any length, one ciphertext block per N
    /// coefficients plus the padding block.
    ///
    /// Blinding polynomials are drawn from `rng` in block order before the
    /// blocks are encrypted in parallel, so a seeded `rng` gives the same
    /// ciphertext on every run.
    pub fn encrypt_blocks<R: RngCore + CryptoRng>(
        &self,
        pk: &PublicKey,
        message: &[u8],
        encoding: MessageEncoding,
        rng: &mut R,
    ) -> Result<Vec<Polynomial>> {
        self.check_public_key(pk)?;
        let n = self.n();
        let blocks = pad_blocks(encoding.encode(message)?, n)?;
        trace!(blocks = blocks.len(), "encrypting ETRU blocks");

        let blinds = blocks
            .iter()
            .map(|_| self.generate_blinding_polynomial(rng))
            .collect::<Result<Vec<_>>>()?;

        blocks
            .par_iter()
            .zip(blinds.par_iter())
            .map(|(m, r)| self.encrypt_with(&pk.h, m, r).map(|e| e.left_padded(n)))
            .collect()
    }

    /// Decrypts the output of [`encrypt_blocks`](Self::encrypt_blocks)
    pub fn decrypt_blocks(
        &self,
        sk: &PrivateKey,
        ciphertext: &[Polynomial],
        encoding: MessageEncoding,
    ) -> Result<Vec<u8>> {
        self.check_private_key(sk)?;
        let n = self.n();
        if ciphertext.iter().any(|e| e.len() > n) {
            return Err(Error::MalformedCiphertext(
                "ciphertext block longer than N".into(),
            ));
        }
        trace!(blocks = ciphertext.len(), "decrypting ETRU blocks");

        let blocks = ciphertext
            .par_iter()
            .map(|e| {
                self.decrypt_with(&sk.f, &sk.f_p, e)
                    .map(|m| m.left_padded(n))
            })
            .collect::<Result<Vec<_>>>()?;

        encoding.decode(&unpad_blocks(&blocks, n)?)
    }
}
