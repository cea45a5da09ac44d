use super::*;
use crate::error::ErrorKind;

const PRIME: u64 = 223;

fn fe(n: u64) -> FieldElement {
    FieldElement::from_u64(n, PRIME).unwrap()
}

fn pt(x: u64, y: u64) -> Point {
    Point::new(fe(x), fe(y), fe(0), fe(7)).unwrap()
}

fn inf() -> Point {
    Point::infinity(fe(0), fe(7)).unwrap()
}

#[test]
fn test_on_curve() {
    for (x, y) in [(192, 105), (17, 56), (1, 193)] {
        assert!(Point::new(fe(x), fe(y), fe(0), fe(7)).is_ok());
    }
    for (x, y) in [(200, 119), (42, 99)] {
        let err = Point::new(fe(x), fe(y), fe(0), fe(7)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Curve);
    }
}

#[test]
fn test_small_curve_over_integers_like_field() {
    // y² = x³ + 5x + 7 over F_223 contains (2, 5) only if 25 == 8 + 10 + 7
    let a = fe(5);
    let b = fe(7);
    assert!(Point::new(fe(2), fe(5), a, b).is_ok());
    assert!(Point::new(fe(2), fe(6), a, b).is_err());
}

#[test]
fn test_half_infinity_is_rejected() {
    let err = Point::from_coordinates(Some(fe(1)), None, fe(0), fe(7)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Curve);
}

#[test]
fn test_mixed_fields_are_rejected() {
    let other = FieldElement::from_u64(7, 31).unwrap();
    let err = Point::new(fe(192), fe(105), fe(0), other).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn test_addition_vectors() {
    let cases = [
        ((170, 142), (60, 139), (220, 181)),
        ((47, 71), (17, 56), (215, 68)),
        ((143, 98), (76, 66), (47, 71)),
    ];
    for (p1, p2, expected) in cases {
        let sum = pt(p1.0, p1.1).add(&pt(p2.0, p2.1)).unwrap();
        assert_eq!(sum, pt(expected.0, expected.1));
    }
}

#[test]
fn test_identity_and_inverse() {
    let p = pt(47, 71);
    assert_eq!(p.add(&inf()).unwrap(), p);
    assert_eq!(inf().add(&p).unwrap(), p);
    assert!(p.add(&p.neg()).unwrap().is_infinity());
    assert!(inf().add(&inf()).unwrap().is_infinity());
}

#[test]
fn test_scalar_multiples_of_47_71() {
    let expected = [
        (36, 111),
        (15, 137),
        (194, 51),
        (126, 96),
        (139, 137),
        (92, 47),
        (116, 55),
        (69, 86),
        (154, 150),
        (154, 73),
        (69, 137),
        (116, 168),
        (92, 176),
        (139, 86),
        (126, 127),
        (194, 172),
        (15, 86),
        (36, 112),
        (47, 152),
    ];
    let p = pt(47, 71);
    for (i, (x, y)) in expected.iter().enumerate() {
        let k = U256::from(i as u64 + 2);
        assert_eq!(p.mul_scalar(&k), pt(*x, *y), "multiple {}", i + 2);
    }
    assert!(p.mul_scalar(&U256::from(21u64)).is_infinity());
    assert_eq!(p.mul_scalar(&U256::from(22u64)), p);
}

#[test]
fn test_repeated_addition_matches_scalar_multiplication() {
    let p = pt(15, 86);
    let mut acc = inf();
    for k in 1..=8u64 {
        acc = acc.add(&p).unwrap();
        assert_eq!(acc, p.mul_scalar(&U256::from(k)));
    }
}

#[test]
fn test_zero_scalar_gives_infinity() {
    assert!(pt(47, 71).mul_scalar(&U256::ZERO).is_infinity());
}

#[test]
fn test_vertical_tangent_doubles_to_infinity() {
    // y² = x³ - x, where (0, 0) has a vertical tangent
    let a = fe(PRIME - 1);
    let b = fe(0);
    let p = Point::new(fe(0), fe(0), a, b).unwrap();
    assert!(p.double().is_infinity());
    assert!(p.add(&p).unwrap().is_infinity());

    // (6, 0) is a point of order two on y² = x³ + 7
    assert!(pt(6, 0).double().is_infinity());
}

#[test]
fn test_different_curves_cannot_be_added() {
    let other_curve = Point::new(fe(0), fe(0), fe(PRIME - 1), fe(0)).unwrap();
    let err = pt(47, 71).add(&other_curve).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Curve);
}

#[test]
fn test_associativity() {
    let a = pt(192, 105);
    let b = pt(17, 56);
    let c = pt(1, 193);
    let left = a.add(&b).unwrap().add(&c).unwrap();
    let right = a.add(&b.add(&c).unwrap()).unwrap();
    assert_eq!(left, right);
}

#[test]
fn test_display() {
    assert_eq!(inf().to_string(), "Point(infinity)");
    assert_eq!(pt(47, 71).to_string(), "Point(47,71)_0_7");
}
