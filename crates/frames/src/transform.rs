//! Composition of precession, obliquity, and nutation into one transform.

use almanac_core::{Jt, Matrix, RectangularVector, Vector};
use log::debug;

use crate::model::{NativeFrame, PrecessionModel};
use crate::nutation::{NutationElements, equatorial_nutation_matrix};
use crate::obliquity::{ObliquityElements, obliquity_matrix};
use crate::precession::PrecessionElements;

/// J2000 mean ecliptic → apparent (true) equator and equinox of date.
///
/// Ecliptic-native theories precess in the ecliptic, rotate to the equator of date, then nutate.
/// Equatorial-native theories rotate to the J2000 equator first and precess there.
/// The nutation rotation always uses the mean obliquity of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticToEquatorialElements {
    pub jt: Jt,
    pub precession: PrecessionElements,
    /// Mean obliquity of date.
    pub obliquity: ObliquityElements,
    pub nutation: NutationElements,
    matrix: Matrix,
}

impl EclipticToEquatorialElements {
    pub fn new(model: PrecessionModel, jt: Jt) -> Self {
        let obliquity_model = model.obliquity_model();
        let nutation_model = model.nutation_model();
        debug!(
            "composing {model} transform at JT {jt:.9} with obliquity {obliquity_model} and nutation {nutation_model}"
        );

        let precession = PrecessionElements::new(model, jt);
        let obliquity = ObliquityElements::new(obliquity_model, jt);
        let nutation = NutationElements::new(nutation_model, jt, Some(obliquity.obliquity));
        let nutation_matrix = equatorial_nutation_matrix(&nutation.angles, obliquity.obliquity);

        let matrix = match precession.frame {
            NativeFrame::Ecliptic => {
                nutation_matrix * obliquity.ecliptic_to_equatorial * precession.from_j2000
            }
            NativeFrame::Equatorial => {
                let j2000 = ObliquityElements::new(obliquity_model, 0.0);
                nutation_matrix * precession.from_j2000 * j2000.ecliptic_to_equatorial
            }
        };

        Self {
            jt,
            precession,
            obliquity,
            nutation,
            matrix,
        }
    }

    pub fn model(&self) -> PrecessionModel {
        self.precession.model
    }

    /// The composed matrix.
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    /// Apply the composed transform; the result is rectangular.
    pub fn transform(&self, vector: Vector) -> RectangularVector {
        self.matrix * vector.to_rectangular()
    }

    /// True obliquity of date, `ε + Δε`.
    pub fn true_obliquity(&self) -> f64 {
        self.obliquity.obliquity + self.nutation.angles.obliquity
    }

    /// Rotate an apparent equatorial vector onto the true ecliptic of date.
    pub fn equatorial_to_true_ecliptic(&self, vector: Vector) -> RectangularVector {
        obliquity_matrix(self.true_obliquity()).transpose() * vector.to_rectangular()
    }
}
