//! Group-law properties of secp256k1 checked on random scalars

use bitecc_algorithms::ec::k256::constants::N;
use bitecc_algorithms::ec::k256::Secp256k1Point;
use bitecc_algorithms::U256;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = U256> {
    any::<[u8; 32]>().prop_map(U256::from_be_bytes)
}

#[test]
fn order_annihilates_generator() {
    let g = Secp256k1Point::generator();
    assert!(g.mul(&N).is_identity());
    assert!(g.mul(&U256::ZERO).is_identity());
    assert_eq!(g.mul(&N.wrapping_sub(&U256::ONE)), g.negate());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn addition_is_associative(a in scalar(), b in scalar(), c in scalar()) {
        let g = Secp256k1Point::generator();
        let (p, q, r) = (g.mul(&a), g.mul(&b), g.mul(&c));
        prop_assert_eq!(p.add(&q).add(&r), p.add(&q.add(&r)));
    }

    #[test]
    fn addition_is_commutative(a in scalar(), b in scalar()) {
        let g = Secp256k1Point::generator();
        let (p, q) = (g.mul(&a), g.mul(&b));
        prop_assert_eq!(p.add(&q), q.add(&p));
    }

    #[test]
    fn negation_is_inverse(a in scalar()) {
        let p = Secp256k1Point::generator().mul(&a);
        prop_assert!(p.add(&p.negate()).is_identity());
        prop_assert_eq!(p.add(&Secp256k1Point::identity()), p.clone());
    }

    #[test]
    fn doubling_matches_addition(a in scalar()) {
        let p = Secp256k1Point::generator().mul(&a);
        prop_assert_eq!(p.double(), p.add(&p));
    }
}
