//! Precession matrices from J2000 to the mean equinox of date.

use almanac_core::constants::{ARCSEC_TO_RAD, TWO_PI};
use almanac_core::poly::{horner, polynomial_sum};
use almanac_core::{Jt, Matrix, Vector};

use crate::model::{NativeFrame, PrecessionModel};
use crate::tables::{
    self, EclipticPrecessionSeries, VONDRAK_PRECESSION_POLY, VONDRAK_PRECESSION_XY,
    VONDRAK_PRECESSION_Z,
};

/// Precession rotation for one `(model, JT)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionElements {
    pub model: PrecessionModel,
    pub jt: Jt,
    pub frame: NativeFrame,
    /// J2000 → mean of date, in the model's native frame.
    pub from_j2000: Matrix,
    /// Mean of date → J2000.
    pub to_j2000: Matrix,
}

impl PrecessionElements {
    pub fn new(model: PrecessionModel, jt: Jt) -> Self {
        let from_j2000 = precession_matrix(model, jt);
        Self {
            model,
            jt,
            frame: model.frame(),
            from_j2000,
            to_j2000: from_j2000.transpose(),
        }
    }

    pub fn is_ecliptic(&self) -> bool {
        self.frame == NativeFrame::Ecliptic
    }

    pub fn transform_from_j2000(&self, vector: Vector) -> Vector {
        self.from_j2000 * vector
    }

    pub fn transform_to_j2000(&self, vector: Vector) -> Vector {
        self.to_j2000 * vector
    }
}

/// J2000 → date matrix in the model's native frame.
pub fn precession_matrix(model: PrecessionModel, jt: Jt) -> Matrix {
    match model {
        PrecessionModel::Iau1976 => ecliptic_matrix(&tables::IAU_1976, jt),
        PrecessionModel::Laskar1986 => ecliptic_matrix(&tables::LASKAR_1986, jt),
        PrecessionModel::Williams1994 => ecliptic_matrix(&tables::WILLIAMS_1994, jt),
        PrecessionModel::Simon1994 => ecliptic_matrix(&tables::SIMON_1994, jt),
        PrecessionModel::De4xx => ecliptic_matrix(&tables::JPL_DE4XX, jt),
        PrecessionModel::Iau2000 => iau2000_matrix(jt),
        PrecessionModel::Iau2006 | PrecessionModel::Iau2009 => iau2006_matrix(jt),
        PrecessionModel::Vondrak2011 => vondrak_matrix(jt),
    }
}

fn ecliptic_matrix(series: &EclipticPrecessionSeries, jt: Jt) -> Matrix {
    let t = jt / 10.0;
    let p_a = ARCSEC_TO_RAD * t * horner(series.p, t);
    let node = horner(series.node, t);
    let inclination = horner(series.inclination, t);
    Matrix::rotate_z(-(node + p_a)) * Matrix::rotate_x(inclination) * Matrix::rotate_z(node)
}

/// `R3(χ_A)·R1(−ω_A)·R3(−ψ_A)·R1(ε₀)`, all angles in arcseconds.
fn equatorial_matrix(psi: f64, omega: f64, chi: f64, eps0: f64) -> Matrix {
    Matrix::rotate_z(chi * ARCSEC_TO_RAD)
        * Matrix::rotate_x(-omega * ARCSEC_TO_RAD)
        * Matrix::rotate_z(-psi * ARCSEC_TO_RAD)
        * Matrix::rotate_x(eps0 * ARCSEC_TO_RAD)
}

fn iau2000_matrix(t: Jt) -> Matrix {
    let eps0 = 84_381.448;
    let psi = (((-0.001147 * t - 1.07259) * t + 5038.7784) * t) - 0.29965 * t;
    let omega = ((-0.007726 * t + 0.05127) * t) * t + eps0 - 0.02524 * t;
    let chi = ((-0.001125 * t - 2.38064) * t + 10.5526) * t;
    equatorial_matrix(psi, omega, chi, eps0)
}

fn iau2006_matrix(t: Jt) -> Matrix {
    let eps0 = 84_381.406;
    let psi = polynomial_sum(
        &[0.0, 5038.481507, -1.0790069, -0.00114045, 0.000132851, -0.0000000951],
        t,
    );
    let omega = polynomial_sum(
        &[eps0, -0.025754, 0.0512623, -0.00772503, -0.000000467, 0.0000003337],
        t,
    );
    let chi = polynomial_sum(
        &[0.0, 10.556403, -2.3814292, -0.00121197, 0.000170663, -0.0000000560],
        t,
    );
    equatorial_matrix(psi, omega, chi, eps0)
}

fn vondrak_matrix(t: Jt) -> Matrix {
    let w = TWO_PI * t;
    let (mut psi, mut omega, mut chi) = (0.0, 0.0, 0.0);
    for (xy, z) in VONDRAK_PRECESSION_XY.iter().zip(VONDRAK_PRECESSION_Z.iter()) {
        let (s, c) = (w / xy[0]).sin_cos();
        psi += c * xy[1] + s * xy[3];
        omega += c * xy[2] + s * xy[4];
        let (s, c) = (w / z[0]).sin_cos();
        chi += c * z[1] + s * z[2];
    }
    psi += polynomial_sum(&VONDRAK_PRECESSION_POLY[0], t);
    omega += polynomial_sum(&VONDRAK_PRECESSION_POLY[1], t);
    chi += polynomial_sum(&VONDRAK_PRECESSION_POLY[2], t);
    equatorial_matrix(psi, omega, chi, 84_381.406)
}
