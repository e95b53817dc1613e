//! Precession, obliquity, and nutation models, and their composition into a single
//! J2000 ecliptic → apparent equatorial transform.
//!
//! Every model family is a closed enum. Elements are immutable value structs built per
//! `(model, JT)` and carry the rotation matrices a caller needs.

pub mod model;
pub mod nutation;
pub mod obliquity;
pub mod precession;
mod tables;
pub mod transform;

use std::fmt;

use thiserror::Error;

pub use model::{NativeFrame, NutationModel, ObliquityModel, PrecessionModel};
pub use nutation::{NutationAngles, NutationElements};
pub use obliquity::ObliquityElements;
pub use precession::PrecessionElements;
pub use transform::EclipticToEquatorialElements;

/// Model family named in an identifier error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Precession,
    Obliquity,
    Nutation,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModelKind::Precession => "precession",
            ModelKind::Obliquity => "obliquity",
            ModelKind::Nutation => "nutation",
        })
    }
}

/// Errors raised while resolving model identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("unknown {kind} model `{id}`")]
    OutOfRange { kind: ModelKind, id: String },
}

impl FrameError {
    pub(crate) fn out_of_range(kind: ModelKind, id: impl fmt::Display) -> Self {
        FrameError::OutOfRange {
            kind,
            id: id.to_string(),
        }
    }
}
