use std::f64::consts::{FRAC_PI_2, PI};

use sky_almanac::core::vector::convert;
use sky_almanac::core::{Matrix, RectangularVector, SphericalVector, Vector};

fn assert_close(a: f64, b: f64, tol: f64, what: &str) {
    assert!((a - b).abs() <= tol, "{what}: {a} vs {b}");
}

#[test]
fn rectangular_spherical_round_trip() {
    let samples = [
        RectangularVector::new(1.0, 2.0, 3.0),
        RectangularVector::new(-0.3, 0.0, -4.0),
        RectangularVector::new(-1.0, -1e-3, 0.25),
        RectangularVector::new(0.0, 5.0, 0.0),
    ];
    for v in samples {
        let spherical: SphericalVector = convert(v);
        assert!((0.0..2.0 * PI).contains(&spherical.phi), "phi {}", spherical.phi);
        assert!(spherical.theta.abs() <= FRAC_PI_2);
        let back: RectangularVector = convert(spherical);
        let scale = v.norm();
        assert_close(back.x, v.x, 1e-9 * scale, "x");
        assert_close(back.y, v.y, 1e-9 * scale, "y");
        assert_close(back.z, v.z, 1e-9 * scale, "z");
    }
}

#[test]
fn zero_vector_converts_to_canonical_spherical() {
    let s: SphericalVector = convert(RectangularVector::ZERO);
    assert_eq!(s, SphericalVector::new(0.0, 0.0, 0.0));
}

#[test]
fn convert_to_same_representation_is_identity() {
    let s = SphericalVector::new(1.25, -0.5, 2.0);
    let same: SphericalVector = convert(s);
    assert_eq!(same, s);
    let r = RectangularVector::new(0.1, 0.2, 0.3);
    let same: RectangularVector = convert(Vector::Rectangular(r));
    assert_eq!(same, r);
}

#[test]
fn elementary_rotations_are_orthonormal() {
    for angle in [-2.7, -0.4, 0.0, 0.3, 1.2, 3.0] {
        for m in [
            Matrix::rotate_x(angle),
            Matrix::rotate_y(angle),
            Matrix::rotate_z(angle),
        ] {
            let product = m * m.transpose();
            assert!(
                product.max_abs_diff(&Matrix::IDENTITY) < 1e-12,
                "M·Mᵀ deviates for angle {angle}"
            );
        }
    }
}

#[test]
fn composed_rotations_apply_right_to_left() {
    let v = RectangularVector::new(1.0, 0.0, 0.0);
    let composed = Matrix::rotate_x(0.7) * Matrix::rotate_z(0.4);
    let stepwise = Matrix::rotate_x(0.7) * (Matrix::rotate_z(0.4) * v);
    let direct = composed * v;
    assert_close(direct.x, stepwise.x, 1e-15, "x");
    assert_close(direct.y, stepwise.y, 1e-15, "y");
    assert_close(direct.z, stepwise.z, 1e-15, "z");
    let product = composed * composed.transpose();
    assert!(product.max_abs_diff(&Matrix::IDENTITY) < 1e-12);
}

#[test]
fn matrix_products_return_rectangular_vectors() {
    let s = Vector::Spherical(SphericalVector::new(FRAC_PI_2, 0.0, 2.0));
    let rotated = Matrix::rotate_z(FRAC_PI_2) * s;
    let Vector::Rectangular(r) = rotated else {
        panic!("matrix product must be rectangular");
    };
    // Passive rotation by +90° about z takes +y onto +x.
    assert_close(r.x, 2.0, 1e-12, "x");
    assert_close(r.y, 0.0, 1e-12, "y");
}

#[test]
fn dot_cross_and_norm() {
    let a = Vector::Rectangular(RectangularVector::new(1.0, 0.0, 0.0));
    let b = Vector::Spherical(SphericalVector::direction(FRAC_PI_2, 0.0));
    assert_close(a.dot(&b), 0.0, 1e-15, "dot");
    let c = a.cross(&b).to_rectangular();
    assert_close(c.z, 1.0, 1e-15, "cross z");
    assert_close((a + b).norm(), 2f64.sqrt(), 1e-15, "norm");
    assert_close((a - b * 2.0).norm(), 5f64.sqrt(), 1e-15, "scaled norm");
}
