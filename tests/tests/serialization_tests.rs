//! Key record persistence: the compact byte format and serde

use etru_api::{Error as CoreError, Serialize, SerializeSecret};
use etru_pke::{MessageEncoding, PrivateKey, PublicKey};
use etru_tests::{keyed_scheme, SMALL_PARAMS};
use zeroize::Zeroize;

#[test]
fn test_reloaded_keys_still_decrypt() {
    let (etru, mut rng) = keyed_scheme(SMALL_PARAMS, 12);

    let pk_bytes = etru.public_key().unwrap().to_bytes();
    let sk_bytes = etru.private_key().unwrap().to_bytes_zeroizing();

    let pk = <PublicKey as Serialize>::from_bytes(&pk_bytes).unwrap();
    let sk = <PrivateKey as SerializeSecret>::from_bytes(&sk_bytes).unwrap();
    assert_eq!(pk, etru.public_key().unwrap());

    let ct = etru
        .encrypt_message(&pk, b"ok", MessageEncoding::DigitSet, &mut rng)
        .unwrap();
    assert_eq!(
        etru.decrypt_message(&sk, &ct, MessageEncoding::DigitSet)
            .unwrap(),
        b"ok"
    );
}

#[test]
fn test_public_key_header() {
    let (etru, _) = keyed_scheme(SMALL_PARAMS, 13);
    let pk = etru.public_key().unwrap();
    let bytes = pk.to_bytes();

    assert_eq!(&bytes[..4], b"ETPK");
    assert_eq!(u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]), 17);
    // q = 0 + 167ω
    assert_eq!(&bytes[24..32], &0i64.to_le_bytes());
    assert_eq!(&bytes[32..40], &167i64.to_le_bytes());
    assert_eq!(bytes.len(), 40 + 4 + 16 * pk.h.len());
}

#[test]
fn test_corrupted_records_are_rejected() {
    let (etru, _) = keyed_scheme(SMALL_PARAMS, 14);
    let bytes = etru.private_key().unwrap().to_bytes_zeroizing();

    // n = 0
    let mut zero_n = bytes.to_vec();
    zero_n[4..8].copy_from_slice(&0u32.to_le_bytes());
    assert!(matches!(
        <PrivateKey as SerializeSecret>::from_bytes(&zero_n),
        Err(CoreError::InvalidKey { .. })
    ));

    // p = 0
    let mut zero_p = bytes.to_vec();
    zero_p[8..24].fill(0);
    assert!(<PrivateKey as SerializeSecret>::from_bytes(&zero_p).is_err());

    // A public key tag on private material
    let mut wrong_tag = bytes.to_vec();
    wrong_tag[..4].copy_from_slice(b"ETPK");
    assert!(<PrivateKey as SerializeSecret>::from_bytes(&wrong_tag).is_err());

    assert!(<PrivateKey as SerializeSecret>::from_bytes(&bytes[..bytes.len() - 8]).is_err());
}

#[test]
fn test_serde_json_round_trip() {
    let (etru, _) = keyed_scheme(SMALL_PARAMS, 15);
    let pk = etru.public_key().unwrap();
    let sk = etru.private_key().unwrap();

    let json = serde_json::to_string(&pk).unwrap();
    assert!(json.contains("\"n\":17"));
    let pk2: PublicKey = serde_json::from_str(&json).unwrap();
    assert_eq!(pk2, pk);

    let sk2: PrivateKey = serde_json::from_str(&serde_json::to_string(&sk).unwrap()).unwrap();
    assert_eq!(sk2, sk);
}

#[test]
fn test_private_key_zeroize() {
    let (etru, _) = keyed_scheme(SMALL_PARAMS, 16);
    let mut sk = etru.private_key().unwrap();
    assert!(!sk.f.is_empty());

    sk.zeroize();
    assert!(sk.f.is_empty());
    assert!(sk.f_p.is_empty());
    assert_eq!(sk.n, 0);
}
