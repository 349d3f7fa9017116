//! Vector integration tests.

#![allow(clippy::float_cmp)]

use datamodel::{Operand, Vector, VectorError};

const SAMPLES: [(f64, f64); 7] = [
    (0.0, 0.0),
    (3.0, 4.0),
    (-3.0, 4.0),
    (2.5, -1.5),
    (1e-3, 0.0),
    (-7.0, -24.0),
    (1e6, 2.0),
];

#[test]
fn default_vector_is_the_origin() {
    let v = Vector::default();
    assert_eq!(v, Vector::new(0.0, 0.0));
    assert_eq!(v.magnitude(), 0.0);
    assert!(!v.is_truthy());
}

#[test]
fn magnitude_is_euclidean_length() {
    for (x, y) in SAMPLES {
        let v = Vector::new(x, y);
        let expected = (x * x + y * y).sqrt();
        assert!((v.magnitude() - expected).abs() <= expected * 1e-12);
        assert_eq!(v.is_truthy(), x != 0.0 || y != 0.0);
    }
    assert_eq!(Vector::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Vector::new(9.0, 12.0).magnitude(), 15.0);
    assert_eq!(Vector::new(-7.0, -24.0).magnitude(), 25.0);
}

#[test]
fn only_the_origin_is_falsy() {
    assert!(!Vector::new(0.0, 0.0).is_truthy());
    assert!(!Vector::new(-0.0, 0.0).is_truthy());
    assert!(Vector::new(0.0, -1.0).is_truthy());
    assert!(Vector::new(1e-300, 0.0).is_truthy());
}

#[test]
fn addition_is_commutative_and_leaves_operands_alone() {
    let a = Vector::new(2.0, 4.0);
    let b = Vector::new(2.0, 1.0);
    assert_eq!(a + b, Vector::new(4.0, 5.0));
    assert_eq!(&a + &b, b + a);
    assert_eq!(a, Vector::new(2.0, 4.0));
    assert_eq!(b, Vector::new(2.0, 1.0));

    for (ax, ay) in SAMPLES {
        for (bx, by) in SAMPLES {
            let a = Vector::new(ax, ay);
            let b = Vector::new(bx, by);
            assert_eq!(a + b, b + a);
        }
    }
}

#[test]
fn scaling_composes() {
    let v = Vector::new(3.0, 4.0);
    assert_eq!(v * 3.0, Vector::new(9.0, 12.0));
    assert_eq!(v.scale(3.0), v * 3.0);
    assert_eq!((v * 3.0).magnitude(), 15.0);
    assert_eq!(v, Vector::new(3.0, 4.0));

    for (x, y) in SAMPLES {
        let v = Vector::new(x, y);
        for (k1, k2) in [(2.0, 3.0), (-1.0, 0.5), (0.0, 4.0), (0.25, -8.0)] {
            assert_eq!(v.scale(k1 * k2), v.scale(k1).scale(k2));
        }
    }
}

#[test]
fn multiplying_by_a_vector_is_unsupported() {
    let v = Vector::new(3.0, 4.0);
    assert_eq!(v.try_mul(3), Ok(Vector::new(9.0, 12.0)));
    assert_eq!(v.try_mul(0.5), Ok(Vector::new(1.5, 2.0)));
    assert_eq!(v.try_mul(v), Err(VectorError::UnsupportedOperation));
    assert_eq!(
        v.try_mul(Operand::Vector(Vector::default())),
        Err(VectorError::UnsupportedOperation)
    );
}

#[test]
fn vectors_describe_themselves() {
    assert_eq!(Vector::new(4.0, 5.0).to_string(), "Vector(4, 5)");
    assert_eq!(Vector::new(9.0, 12.0).describe(), "Vector(9, 12)");
    assert_eq!(Vector::new(2.5, -1.0).describe(), "Vector(2.5, -1)");
    assert_eq!(Vector::default().describe(), "Vector(0, 0)");
}

#[test]
fn tuples_convert_both_ways() {
    let v = Vector::from((1.5, -2.0));
    assert_eq!(v, Vector::new(1.5, -2.0));
    let (x, y): (f64, f64) = v.into();
    assert_eq!((x, y), (1.5, -2.0));
}
