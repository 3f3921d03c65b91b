//! Trait definition for public key encryption schemes.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for public key encryption schemes parameterized at runtime.
///
/// Unlike byte-oriented schemes, lattice schemes such as ETRU carry their
/// ring parameters in an instance, so every operation takes `&self`.
pub trait PublicKeyScheme {
    /// Public key type for the scheme.
    type PublicKey: Clone;

    /// Private key type for the scheme.
    type PrivateKey: Zeroize + Clone;

    /// Plaintext representation consumed by `encrypt`.
    type Plaintext;

    /// Ciphertext type produced by the scheme.
    type Ciphertext: Clone;

    /// Returns the scheme name.
    fn name(&self) -> &'static str;

    /// Generates a new key pair.
    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::PrivateKey)>;

    /// Encrypts a plaintext under the recipient's public key.
    ///
    /// # Arguments
    /// * `pk` - The recipient's public key.
    /// * `plaintext` - The message to encrypt.
    /// * `rng` - Source of the per-message blinding randomness.
    fn encrypt<R: CryptoRng + RngCore>(
        &self,
        pk: &Self::PublicKey,
        plaintext: &Self::Plaintext,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext with the recipient's private key.
    fn decrypt(&self, sk: &Self::PrivateKey, ciphertext: &Self::Ciphertext)
        -> Result<Self::Plaintext>;
}
