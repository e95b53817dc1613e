//! Nutation in longitude and obliquity.

use almanac_core::angles::mod3600;
use almanac_core::constants::{ARCSEC_PER_TURN, ARCSEC_TO_RAD};
use almanac_core::{Jt, Matrix, Vector};

use crate::model::NutationModel;
use crate::tables::{IAU1980_TERMS, IAU2000_TERMS};

/// Nutation angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NutationAngles {
    /// Δψ.
    pub longitude: f64,
    /// Δε.
    pub obliquity: f64,
}

/// Evaluate a nutation series at `jt`.
pub fn nutation_angles(model: NutationModel, jt: Jt) -> NutationAngles {
    match model {
        NutationModel::Iau1980 => iau1980(jt),
        NutationModel::Iau2000 => iau2000(jt),
        NutationModel::Iau2006 => {
            let angles = iau2000(jt);
            NutationAngles {
                longitude: angles.longitude * (1.0 + (0.4697e-6 - 2.7774e-6 * jt)),
                obliquity: angles.obliquity * (1.0 + 2.7774e-6 * jt),
            }
        }
    }
}

fn iau1980(t: Jt) -> NutationAngles {
    let t2 = t * t;
    let t10 = t / 10.0;
    // Delaunay arguments, FK5 system.
    let l = (mod3600(1_717_915_922.633 * t + 485_866.733) + (0.064 * t + 31.310) * t2)
        * ARCSEC_TO_RAD;
    let lp = (mod3600(129_596_581.224 * t + 1_287_099.804) - (0.012 * t + 0.577) * t2)
        * ARCSEC_TO_RAD;
    let f = (mod3600(1_739_527_263.137 * t + 335_778.877) + (0.011 * t - 13.257) * t2)
        * ARCSEC_TO_RAD;
    let d = (mod3600(1_602_961_601.328 * t + 1_072_261.307) + (0.019 * t - 6.891) * t2)
        * ARCSEC_TO_RAD;
    let om = (mod3600(-6_962_890.539 * t + 450_160.280) + (0.008 * t + 7.455) * t2)
        * ARCSEC_TO_RAD;
    let fundamental = [l, lp, f, d, om];

    let (mut dpsi, mut deps) = (0.0, 0.0);
    for row in IAU1980_TERMS.iter() {
        let arg: f64 = row[..5]
            .iter()
            .zip(fundamental.iter())
            .map(|(&k, a)| f64::from(k) * a)
            .sum();
        let (s, c) = arg.sin_cos();
        dpsi += (f64::from(row[5]) + t10 * f64::from(row[6])) * s;
        deps += (f64::from(row[7]) + t10 * f64::from(row[8])) * c;
    }
    dpsi += (-1742.0 * t10 - 171_996.0) * om.sin();
    deps += (89.0 * t10 + 92_025.0) * om.cos();

    NutationAngles {
        longitude: 1e-4 * ARCSEC_TO_RAD * dpsi,
        obliquity: 1e-4 * ARCSEC_TO_RAD * deps,
    }
}

fn iau2000(t: Jt) -> NutationAngles {
    let arg = |c0: f64, c1: f64| ((c0 + c1 * t) % ARCSEC_PER_TURN) * ARCSEC_TO_RAD;
    let fundamental = [
        arg(485_868.249036, 1_717_915_923.2178),
        arg(1_287_104.79305, 129_596_581.0481),
        arg(335_779.526232, 1_739_527_262.8478),
        arg(1_072_260.70369, 1_602_961_601.2090),
        arg(450_160.398036, -6_962_890.5431),
    ];

    let (mut dpsi, mut deps) = (0.0, 0.0);
    for (multipliers, c) in IAU2000_TERMS.iter().rev() {
        let a: f64 = multipliers
            .iter()
            .zip(fundamental.iter())
            .map(|(&k, x)| f64::from(k) * x)
            .sum();
        let (s, co) = a.sin_cos();
        dpsi += (c[0] + c[1] * t) * s + c[2] * co;
        deps += (c[3] + c[4] * t) * co + c[5] * s;
    }

    // 0.1 µas → rad, plus the fixed planetary offsets of the B model (mas).
    let unit = ARCSEC_TO_RAD / 1e7;
    NutationAngles {
        longitude: dpsi * unit - 0.135e-3 * ARCSEC_TO_RAD,
        obliquity: deps * unit + 0.388e-3 * ARCSEC_TO_RAD,
    }
}

/// Nutation rotation in the ecliptic frame.
pub fn ecliptic_nutation_matrix(angles: &NutationAngles) -> Matrix {
    Matrix::rotate_x(-angles.obliquity) * Matrix::rotate_z(-angles.longitude)
}

/// Nutation rotation in the equatorial frame for a mean obliquity.
pub fn equatorial_nutation_matrix(angles: &NutationAngles, obliquity: f64) -> Matrix {
    Matrix::rotate_x(-obliquity - angles.obliquity)
        * Matrix::rotate_z(-angles.longitude)
        * Matrix::rotate_x(obliquity)
}

/// Nutation at one `(model, JT)`. The equatorial matrix exists only when an obliquity was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutationElements {
    pub model: NutationModel,
    pub jt: Jt,
    pub angles: NutationAngles,
    pub ecliptic: Matrix,
    pub equatorial: Option<Matrix>,
}

impl NutationElements {
    pub fn new(model: NutationModel, jt: Jt, obliquity: Option<f64>) -> Self {
        let angles = nutation_angles(model, jt);
        Self {
            model,
            jt,
            angles,
            ecliptic: ecliptic_nutation_matrix(&angles),
            equatorial: obliquity.map(|eps| equatorial_nutation_matrix(&angles, eps)),
        }
    }

    pub fn apply_to_ecliptic(&self, vector: Vector) -> Vector {
        self.ecliptic * vector
    }

    pub fn remove_from_ecliptic(&self, vector: Vector) -> Vector {
        vector * self.ecliptic
    }

    /// `None` when the elements were built without an obliquity.
    pub fn apply_to_equatorial(&self, vector: Vector) -> Option<Vector> {
        self.equatorial.map(|m| m * vector)
    }

    pub fn remove_from_equatorial(&self, vector: Vector) -> Option<Vector> {
        self.equatorial.map(|m| vector * m)
    }
}
