//! Apparent geocentric positions from heliocentric coordinate providers.
//!
//! A provider is any thread-safe function of JT returning a heliocentric ecliptic J2000 vector
//! in AU. [`PositionEphemeris`] turns a pair of providers (Earth, body) into the apparent
//! equatorial vector of the body, correcting for light time and planetary aberration.

pub mod fast_moon;
pub mod fast_sun;
pub mod horizon;
pub mod kepler;
pub mod position;

use std::sync::Arc;

use almanac_core::{Jt, Vector};
use almanac_frames::FrameError;
use thiserror::Error;

pub use kepler::{OrbitalElements, Planet};
pub use position::{BodyOptions, PositionEphemeris, VELOCITY_STEP_DAYS, position_ephemeris};

/// Shared coordinate provider.
pub type CoordinateSource = Arc<dyn Fn(Jt) -> Result<Vector, EphemerisError> + Send + Sync>;

/// Wrap a closure as a [`CoordinateSource`].
pub fn coordinate_source<F>(f: F) -> CoordinateSource
where
    F: Fn(Jt) -> Result<Vector, EphemerisError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Provider that always returns the same vector, e.g. the Sun at the heliocentric origin.
pub fn fixed_source(vector: Vector) -> CoordinateSource {
    Arc::new(move |_| Ok(vector))
}

/// Errors surfaced while reducing positions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EphemerisError {
    #[error("position session used before set_jt0")]
    Uninitialized,
    #[error("coordinate provider failed: {0}")]
    Provider(String),
    #[error(transparent)]
    Frame(#[from] FrameError),
}
