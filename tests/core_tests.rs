use std::f64::consts::FRAC_PI_2;
use vector_math::{vector::Vector, VectorError};

fn v(data: &[f64]) -> Vector {
    Vector::from_vec(data.to_vec())
}

#[test]
fn test_equal_respects_tolerance() {
    let a = v(&[1.0, 2.0, 3.0]);
    let b = v(&[1.0, 2.0, 3.0000001]);

    assert!(a.equal(&b, 1e-6));
    assert!(!a.equal(&b, 1e-9));
    assert!(a.equal(&a, 0.0));
}

#[test]
fn test_angle_between_axes() {
    let angle = v(&[1.0, 0.0, 0.0]).angle(&v(&[0.0, 1.0, 0.0])).unwrap();
    assert!((angle - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn test_cross_of_axes() {
    let z = v(&[1.0, 0.0, 0.0]).cross(&v(&[0.0, 1.0, 0.0])).unwrap();
    assert_eq!(z, v(&[0.0, 0.0, 1.0]));
}

#[test]
fn test_add_dimension_mismatch() {
    let err = v(&[1.0, 2.0]).add(&v(&[1.0, 2.0, 3.0])).unwrap_err();
    assert!(matches!(
        err,
        VectorError::DimensionMismatch { left: 2, right: 3 }
    ));
}

#[test]
fn test_angle_zero_vector() {
    let err = v(&[0.0, 0.0, 0.0]).angle(&v(&[1.0, 0.0, 0.0])).unwrap_err();
    assert!(matches!(err, VectorError::ZeroVector));
}

#[test]
fn test_cross_not_three_dimensional() {
    let err = v(&[1.0, 2.0]).cross(&v(&[1.0, 2.0, 3.0])).unwrap_err();
    assert!(matches!(
        err,
        VectorError::NotThreeDimensional { left: 2, right: 3 }
    ));
}
