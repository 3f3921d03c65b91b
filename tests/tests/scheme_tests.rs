//! End-to-end ETRU scenarios

use etru_api::{Error as CoreError, PublicKeyScheme};
use etru_params::{EtruParams, ETRU_251};
use etru_pke::{Error, Etru, MessageEncoding};
use etru_tests::{keyed_scheme, random_digit_polynomial, SMALL_PARAMS};

#[test]
fn test_maozihao_digit_set_round_trip() {
    let (etru, mut rng) = keyed_scheme(ETRU_251, 42);
    assert!(etru.verify().unwrap().is_valid());

    let pk = etru.public_key().unwrap();
    let sk = etru.private_key().unwrap();

    let ct = etru
        .encrypt_message(&pk, b"I am Maozihao", MessageEncoding::DigitSet, &mut rng)
        .unwrap();
    let pt = etru
        .decrypt_message(&sk, &ct, MessageEncoding::DigitSet)
        .unwrap();

    assert_eq!(String::from_utf8(pt).unwrap(), "I am Maozihao");
}

#[test]
fn test_round_trip_many_pairs_etru_251() {
    let (etru, mut rng) = keyed_scheme(ETRU_251, 1);

    for _ in 0..20 {
        let m = random_digit_polynomial(&mut rng, ETRU_251.n);
        let r = etru.generate_blinding_polynomial(&mut rng).unwrap();
        let e = etru.encrypt(&m, &r).unwrap();
        assert_eq!(etru.decrypt(&e).unwrap(), m.trimmed());
    }
}

#[test]
fn test_round_trip_across_many_keys() {
    for seed in 0..20 {
        let (etru, mut rng) = keyed_scheme(SMALL_PARAMS, seed);
        let (pk, sk) = (etru.public_key().unwrap(), etru.private_key().unwrap());

        for len in [0, 1, 9, SMALL_PARAMS.n] {
            let m = random_digit_polynomial(&mut rng, len);
            let e = PublicKeyScheme::encrypt(&etru, &pk, &m, &mut rng).unwrap();
            let d = PublicKeyScheme::decrypt(&etru, &sk, &e).unwrap();
            assert_eq!(d, m.trimmed(), "seed {} length {}", seed, len);
        }
    }
}

#[test]
fn test_ciphertext_depends_on_blinding() {
    let (etru, mut rng) = keyed_scheme(ETRU_251, 5);
    let pk = etru.public_key().unwrap();

    let a = etru
        .encrypt_message(&pk, b"same", MessageEncoding::DigitSet, &mut rng)
        .unwrap();
    let b = etru
        .encrypt_message(&pk, b"same", MessageEncoding::DigitSet, &mut rng)
        .unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_single_block_overflow() {
    let (etru, mut rng) = keyed_scheme(ETRU_251, 3);
    let pk = etru.public_key().unwrap();

    // 100 bytes need 285 base-7 digits, N is 251
    let message = vec![0xffu8; 100];
    match etru.encrypt_message(&pk, &message, MessageEncoding::DigitSet, &mut rng) {
        Err(Error::Overflow { capacity, required }) => {
            assert_eq!(capacity, 251);
            assert_eq!(required, 285);
        }
        other => panic!("Expected Overflow error, got {:?}", other),
    }

    // The same message fits in block mode
    let sk = etru.private_key().unwrap();
    let blocks = etru
        .encrypt_blocks(&pk, &message, MessageEncoding::DigitSet, &mut rng)
        .unwrap();
    // 285 digits pad to two data blocks plus the sentinel block
    assert_eq!(blocks.len(), 3);
    assert_eq!(
        etru.decrypt_blocks(&sk, &blocks, MessageEncoding::DigitSet)
            .unwrap(),
        message
    );
}

#[test]
fn test_block_mode_long_message() {
    let (etru, mut rng) = keyed_scheme(ETRU_251, 77);
    let pk = etru.public_key().unwrap();
    let sk = etru.private_key().unwrap();

    let message: Vec<u8> = (1..=255u8).cycle().take(600).collect();
    let blocks = etru
        .encrypt_blocks(&pk, &message, MessageEncoding::DigitSet, &mut rng)
        .unwrap();
    assert!(blocks.iter().all(|b| b.len() == ETRU_251.n));

    let decrypted = etru
        .decrypt_blocks(&sk, &blocks, MessageEncoding::DigitSet)
        .unwrap();
    assert_eq!(decrypted, message);
}

#[test]
fn test_block_mode_empty_message() {
    let (etru, mut rng) = keyed_scheme(SMALL_PARAMS, 8);
    let pk = etru.public_key().unwrap();
    let sk = etru.private_key().unwrap();

    let blocks = etru
        .encrypt_blocks(&pk, b"", MessageEncoding::DigitSet, &mut rng)
        .unwrap();
    assert_eq!(blocks.len(), 1);
    assert!(etru
        .decrypt_blocks(&sk, &blocks, MessageEncoding::DigitSet)
        .unwrap()
        .is_empty());
}

#[test]
fn test_wrong_private_key_does_not_decrypt() {
    let (alice, mut rng) = keyed_scheme(SMALL_PARAMS, 100);
    let (bob, _) = keyed_scheme(SMALL_PARAMS, 200);

    let m = random_digit_polynomial(&mut rng, SMALL_PARAMS.n);
    let e = PublicKeyScheme::encrypt(&alice, &alice.public_key().unwrap(), &m, &mut rng).unwrap();
    let d = PublicKeyScheme::decrypt(&alice, &bob.private_key().unwrap(), &e).unwrap();
    assert_ne!(d, m.trimmed());
}

#[test]
fn test_parameter_errors_surface_through_api() {
    let err = Etru::new(EtruParams { n: 0, ..SMALL_PARAMS }).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "n", .. }));

    match CoreError::from(err) {
        CoreError::InvalidParameter { context, message } => {
            assert_eq!(context, "ETRU parameters");
            assert!(message.starts_with("n: "));
        }
        other => panic!("Expected InvalidParameter error, got {:?}", other),
    }
}
