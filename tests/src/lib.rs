//! Shared fixtures for the etru integration and property tests

use etru_algorithms::{EisensteinInteger, Polynomial};
use etru_params::EtruParams;
use etru_pke::Etru;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tracing_subscriber::EnvFilter;

/// A ring of dimension 17 over the ETRU-251 moduli, fast enough for
/// loops over many keys
pub const SMALL_PARAMS: EtruParams = EtruParams {
    n: 17,
    p: (2, 3),
    q: (0, 167),
    key_weight: 1,
    blinding_weight: 2,
    max_key_retries: 10,
};

/// Routes scheme logs to the test output, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic RNG for reproducible tests
pub fn seeded_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// A scheme instance holding a freshly generated key pair, and the RNG
/// that generated it
pub fn keyed_scheme(params: EtruParams, seed: u64) -> (Etru, ChaChaRng) {
    init_tracing();
    let mut rng = seeded_rng(seed);
    let mut etru = Etru::new(params).expect("valid parameters");
    etru.generate_random_keys(&mut rng)
        .expect("key generation succeeds");
    (etru, rng)
}

/// A message polynomial of `len` uniformly chosen digits
pub fn random_digit_polynomial<R: Rng>(rng: &mut R, len: usize) -> Polynomial {
    let digits = EisensteinInteger::DIGITS;
    Polynomial::new(
        (0..len)
            .map(|_| digits[rng.gen_range(0..digits.len())])
            .collect(),
    )
}
