//! Mean obliquity of the ecliptic.

use almanac_core::constants::{ARCSEC_TO_RAD, TWO_PI};
use almanac_core::poly::polynomial_sum;
use almanac_core::{Jt, Matrix, Vector};

use crate::model::ObliquityModel;
use crate::tables::{VONDRAK_OBLIQUITY_PERIODIC, VONDRAK_OBLIQUITY_POLY};

const BASE_ARCSEC: f64 = 23.0 * 3600.0 + 26.0 * 60.0;

const WILLIAMS: [f64; 11] = [
    0.0, -4683.396, -1.75, 1998.9, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];
const SIMON: [f64; 11] = [
    0.0, -4680.927, -1.52, 1998.9, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];
const LASKAR: [f64; 11] = [
    0.0, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];
const IAU_1976: [f64; 4] = [0.0, -4681.5, -5.9, 1813.0];
const CAPITAINE: [f64; 6] = [0.0, -4683.6769, -1.831, 2003.400, -57.6, -434.0];

/// Mean obliquity in radians. Polynomial models take their argument in units of 10 000 years.
pub fn mean_obliquity(model: ObliquityModel, jt: Jt) -> f64 {
    let series = |start: f64, coefficients: &[f64]| {
        (BASE_ARCSEC + start + polynomial_sum(coefficients, jt / 100.0)) * ARCSEC_TO_RAD
    };
    match model {
        ObliquityModel::Williams1994 => series(21.406173, &WILLIAMS),
        ObliquityModel::Simon1994 => series(21.412, &SIMON),
        ObliquityModel::Laskar1996 => series(21.448, &LASKAR),
        ObliquityModel::Iau1976 => series(21.448, &IAU_1976),
        ObliquityModel::Iau2006 => series(21.406, &CAPITAINE),
        ObliquityModel::Vondrak2011 => {
            let w = TWO_PI * jt;
            let periodic: f64 = VONDRAK_OBLIQUITY_PERIODIC
                .iter()
                .map(|term| {
                    let (s, c) = (w / term[0]).sin_cos();
                    c * term[1] + s * term[2]
                })
                .sum();
            (periodic + polynomial_sum(&VONDRAK_OBLIQUITY_POLY, jt)) * ARCSEC_TO_RAD
        }
    }
}

/// Ecliptic → equatorial rotation for a given obliquity.
#[inline]
pub fn obliquity_matrix(obliquity: f64) -> Matrix {
    Matrix::rotate_x(-obliquity)
}

/// Mean obliquity at one `(model, JT)` and the rotations it defines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliquityElements {
    pub model: ObliquityModel,
    pub jt: Jt,
    pub obliquity: f64,
    pub ecliptic_to_equatorial: Matrix,
    pub equatorial_to_ecliptic: Matrix,
}

impl ObliquityElements {
    pub fn new(model: ObliquityModel, jt: Jt) -> Self {
        let obliquity = mean_obliquity(model, jt);
        let ecliptic_to_equatorial = obliquity_matrix(obliquity);
        Self {
            model,
            jt,
            obliquity,
            ecliptic_to_equatorial,
            equatorial_to_ecliptic: ecliptic_to_equatorial.transpose(),
        }
    }

    pub fn rotate_ecliptic_vector(&self, vector: Vector) -> Vector {
        self.ecliptic_to_equatorial * vector
    }

    pub fn rotate_equatorial_vector(&self, vector: Vector) -> Vector {
        self.equatorial_to_ecliptic * vector
    }
}
