//! Known-answer tests for SEC, address, WIF and DER encodings

use bitecc_algorithms::ec::k256::Secp256k1Point;
use bitecc_api::ErrorKind;
use bitecc_sign::{verify, PrivateKey, Signature};
use bitecc_tests::vectors::*;
use bitecc_tests::{bytes, u256};

#[test]
fn sec_vectors() {
    for v in SEC_VECTORS {
        let point = Secp256k1Point::generator().mul(&u256(v.secret));
        let sec = point.sec(v.format).unwrap();
        assert_eq!(hex::encode(&sec), v.sec, "secret {}", v.secret);
        assert_eq!(Secp256k1Point::parse(&sec).unwrap(), point);
    }
}

#[test]
fn address_vectors() {
    for v in ADDRESS_VECTORS {
        let point = Secp256k1Point::generator().mul(&u256(v.secret));
        assert_eq!(point.address(v.format, v.network).unwrap(), v.address);
    }
}

#[test]
fn wif_vectors() {
    for v in WIF_VECTORS {
        let key = PrivateKey::new(u256(v.secret)).unwrap();
        assert_eq!(key.wif(v.format, v.network).as_str(), v.wif);

        let (decoded, format, network) = PrivateKey::from_wif(v.wif).unwrap();
        assert_eq!(decoded, key);
        assert_eq!(format, v.format);
        assert_eq!(network, v.network);
    }
}

#[test]
fn verify_vectors() {
    for v in VERIFY_VECTORS {
        let public = Secp256k1Point::new(u256(v.px), u256(v.py)).unwrap();
        let signature = Signature::new(u256(v.r), u256(v.s)).unwrap();
        assert!(verify(&public, u256(v.z), &signature));

        let reparsed = Signature::parse(&signature.der()).unwrap();
        assert_eq!(reparsed, signature);
    }
}

#[test]
fn sign_vectors() {
    for v in SIGN_VECTORS {
        let key = PrivateKey::new(u256(v.secret)).unwrap();
        let signature = key.sign_with_nonce(u256(v.z), &u256(v.nonce)).unwrap();
        assert_eq!(hex::encode(signature.der()), v.der);
        assert_eq!(Signature::parse(&bytes(v.der)).unwrap(), signature);
        assert!(verify(key.public_point(), u256(v.z), &signature));
    }
}

#[test]
fn malformed_der_is_rejected() {
    for (name, der) in MALFORMED_DER {
        let err = Signature::parse(&bytes(der)).unwrap_err();
        assert!(err.is_malformed_input(), "{}", name);
        assert_eq!(err.kind(), ErrorKind::SignatureFormat, "{}", name);
    }
}

#[test]
fn malformed_sec_is_rejected() {
    let cases: &[(&str, ErrorKind)] = &[
        ("", ErrorKind::Encoding),
        ("05", ErrorKind::Encoding),
        ("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f817", ErrorKind::Length),
        // x = p is out of range
        (
            "02fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
            ErrorKind::Range,
        ),
        // (1, 1) is not on the curve
        (
            "04000000000000000000000000000000000000000000000000000000000000000100\
             00000000000000000000000000000000000000000000000000000000000001",
            ErrorKind::Curve,
        ),
    ];
    for (sec, kind) in cases {
        let err = Secp256k1Point::parse(&bytes(sec)).unwrap_err();
        assert!(err.is_malformed_input(), "{}", sec);
        assert_eq!(err.kind(), *kind, "{}", sec);
    }
}
