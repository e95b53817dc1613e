//! Equatorial → horizontal coordinates for an observer.

use std::f64::consts::FRAC_PI_2;

use almanac_core::angles::normalize_rad;
use almanac_core::{Matrix, RectangularVector, SphericalVector, Vector};

/// Local hour angle of a right ascension.
pub fn hour_angle(right_ascension: f64, longitude: f64, gmst: f64) -> f64 {
    gmst + longitude - right_ascension
}

/// Rotate an apparent geocentric equatorial vector into the horizon frame.
///
/// In the result `x` points south, `y` west, and `z` to the zenith.
pub fn to_horizontal(
    vector: Vector,
    longitude: f64,
    latitude: f64,
    gmst: f64,
) -> RectangularVector {
    let equatorial = vector.to_spherical();
    let tau = hour_angle(equatorial.phi, longitude, gmst);
    Matrix::rotate_y(FRAC_PI_2 - latitude)
        * SphericalVector::new(tau, equatorial.theta, equatorial.r)
}

/// Sine of the geometric altitude.
pub fn sin_altitude(vector: Vector, longitude: f64, latitude: f64, gmst: f64) -> f64 {
    let p = vector.to_spherical();
    let tau = hour_angle(p.phi, longitude, gmst);
    latitude.sin() * p.theta.sin() + latitude.cos() * p.theta.cos() * tau.cos()
}

/// Azimuth (from north through east) and altitude, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinates {
    pub azimuth: f64,
    pub altitude: f64,
    pub distance: f64,
}

impl HorizontalCoordinates {
    pub fn new(vector: Vector, longitude: f64, latitude: f64, gmst: f64) -> Self {
        let horizontal = to_horizontal(vector, longitude, latitude, gmst).to_spherical();
        Self {
            azimuth: normalize_rad(horizontal.phi + std::f64::consts::PI),
            altitude: horizontal.theta,
            distance: horizontal.r,
        }
    }
}
