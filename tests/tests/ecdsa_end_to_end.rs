//! Generate, sign, serialize, parse and verify across crate boundaries

use bitecc_algorithms::ec::k256::Secp256k1Point;
use bitecc_algorithms::U256;
use bitecc_params::{Network, SecFormat};
use bitecc_sign::{verify, KeyPair, Message, PrivateKey, Signature, Verifier};
use bitecc_tests::seeded_rng;

#[test]
fn sign_and_verify_through_encodings() {
    let mut rng = seeded_rng(2024);
    for _ in 0..16 {
        let pair = KeyPair::generate(&mut rng).unwrap();
        let z = U256::random(&mut rng);
        let signature = pair.private_key().sign(z, &mut rng).unwrap();
        assert!(signature.is_low_s());

        // The verifier only ever sees the wire forms
        let sec = pair.public_key().sec(SecFormat::Compressed).unwrap();
        let public = Secp256k1Point::parse(&sec).unwrap();
        let parsed = Signature::parse(&signature.der()).unwrap();
        assert!(verify(&public, z, &parsed));
        assert!(public.verify(z, &parsed));
        assert!(!verify(&public, z.wrapping_add(&U256::ONE), &parsed));
    }
}

#[test]
fn hash160_messages_round_trip() {
    let mut rng = seeded_rng(7);
    let pair = KeyPair::generate(&mut rng).unwrap();
    let signature = pair
        .private_key()
        .sign(Message::Hash160(b"pay 1 coin"), &mut rng)
        .unwrap();
    assert!(verify(pair.public_key(), Message::Hash160(b"pay 1 coin"), &signature));
    assert!(!verify(pair.public_key(), Message::Hash160(b"pay 2 coin"), &signature));
}

#[test]
fn wif_export_preserves_signing_key() {
    let mut rng = seeded_rng(99);
    let pair = KeyPair::generate(&mut rng).unwrap();
    let wif = pair.private_key().wif(SecFormat::Compressed, Network::Testnet);
    let (restored, format, network) = PrivateKey::from_wif(&wif).unwrap();
    assert_eq!((format, network), (SecFormat::Compressed, Network::Testnet));
    assert_eq!(restored.public_point(), pair.public_key());

    let z = U256::random(&mut rng);
    let signature = restored.sign(z, &mut rng).unwrap();
    assert!(verify(pair.public_key(), z, &signature));
}

#[test]
fn sec_round_trips_for_many_keys() {
    let mut rng = seeded_rng(1);
    for _ in 0..128 {
        let pair = KeyPair::generate(&mut rng).unwrap();
        for format in [SecFormat::Compressed, SecFormat::Uncompressed] {
            let sec = pair.public_key().sec(format).unwrap();
            assert_eq!(&Secp256k1Point::parse(&sec).unwrap(), pair.public_key());
        }
    }
}
