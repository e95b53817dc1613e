//! Light-time and aberration reduction, as a reusable session and as a one-shot call.

use std::fmt;

use almanac_core::constants::{DAYS_PER_CENTURY, SPEED_OF_LIGHT_AU_DAY};
use almanac_core::{Jt, Matrix, RectangularVector, Vector};
use almanac_frames::{EclipticToEquatorialElements, PrecessionModel};
use log::debug;

use crate::{CoordinateSource, EphemerisError};

/// Forward-difference step used for velocities, in days.
pub const VELOCITY_STEP_DAYS: f64 = 0.01;

fn evaluate_pair(
    source: &CoordinateSource,
    jt: Jt,
) -> Result<(RectangularVector, RectangularVector), EphemerisError> {
    let (now, ahead) = rayon::join(
        || source(jt),
        || source(jt + VELOCITY_STEP_DAYS / DAYS_PER_CENTURY),
    );
    Ok((now?.to_rectangular(), ahead?.to_rectangular()))
}

/// Heliocentric position at `jt` and velocity (AU/day) from a forward difference.
fn position_and_velocity(
    source: &CoordinateSource,
    jt: Jt,
) -> Result<(RectangularVector, RectangularVector), EphemerisError> {
    let (now, ahead) = evaluate_pair(source, jt)?;
    Ok((now, (ahead - now) * (1.0 / VELOCITY_STEP_DAYS)))
}

/// Geocentric vector corrected for light time, then rotated by `matrix`.
fn reduce(
    geocentric: RectangularVector,
    body_velocity: RectangularVector,
    earth_velocity: RectangularVector,
    matrix: &Matrix,
) -> RectangularVector {
    let distance = geocentric.norm();
    if distance == 0.0 {
        return *matrix * geocentric;
    }
    let light_time = distance / SPEED_OF_LIGHT_AU_DAY;
    *matrix * (geocentric - (body_velocity - earth_velocity) * light_time)
}

/// A body's provider together with its velocity at the session's reference instant.
#[derive(Clone)]
pub struct BodyOptions {
    source: CoordinateSource,
    velocity: RectangularVector,
}

impl BodyOptions {
    /// Velocity captured by `create_body_options`, AU/day.
    pub fn velocity(&self) -> RectangularVector {
        self.velocity
    }
}

impl fmt::Debug for BodyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyOptions")
            .field("velocity", &self.velocity)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
enum SessionState {
    Uninitialized,
    Ready {
        jt0: Jt,
        earth_velocity: RectangularVector,
        elements: EclipticToEquatorialElements,
    },
}

/// Reduction session that caches the Earth velocity and composed transform at `jt0`.
///
/// Cloning yields an independent session; the clones can be re-anchored separately.
#[derive(Clone)]
pub struct PositionEphemeris {
    model: PrecessionModel,
    earth: CoordinateSource,
    state: SessionState,
}

impl fmt::Debug for PositionEphemeris {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionEphemeris")
            .field("model", &self.model)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl PositionEphemeris {
    pub fn new(model: PrecessionModel, earth: CoordinateSource) -> Self {
        Self {
            model,
            earth,
            state: SessionState::Uninitialized,
        }
    }

    pub fn model(&self) -> PrecessionModel {
        self.model
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready { .. })
    }

    /// Reference instant of the cached state.
    pub fn jt0(&self) -> Option<Jt> {
        match self.state {
            SessionState::Ready { jt0, .. } => Some(jt0),
            SessionState::Uninitialized => None,
        }
    }

    /// Capture the Earth velocity and composed transform at `jt0`, replacing any previous state.
    pub fn set_jt0(&mut self, jt0: Jt) -> Result<&mut Self, EphemerisError> {
        debug!("anchoring {} session at JT {jt0:.9}", self.model);
        let (velocity, elements) = rayon::join(
            || position_and_velocity(&self.earth, jt0),
            || EclipticToEquatorialElements::new(self.model, jt0),
        );
        let (_, earth_velocity) = velocity?;
        self.state = SessionState::Ready {
            jt0,
            earth_velocity,
            elements,
        };
        Ok(self)
    }

    pub fn earth_velocity(&self) -> Result<RectangularVector, EphemerisError> {
        match &self.state {
            SessionState::Ready { earth_velocity, .. } => Ok(*earth_velocity),
            SessionState::Uninitialized => Err(EphemerisError::Uninitialized),
        }
    }

    pub fn elements(&self) -> Result<&EclipticToEquatorialElements, EphemerisError> {
        match &self.state {
            SessionState::Ready { elements, .. } => Ok(elements),
            SessionState::Uninitialized => Err(EphemerisError::Uninitialized),
        }
    }

    /// Capture a body's provider and its velocity at `jt0`.
    pub fn create_body_options(
        &self,
        jt0: Jt,
        body: CoordinateSource,
    ) -> Result<BodyOptions, EphemerisError> {
        if !self.is_ready() {
            return Err(EphemerisError::Uninitialized);
        }
        let (_, velocity) = position_and_velocity(&body, jt0)?;
        Ok(BodyOptions {
            source: body,
            velocity,
        })
    }

    /// Apparent geocentric equatorial vector of the body at `jt`, using the cached velocities
    /// and transform.
    pub fn get_position(
        &self,
        jt: Jt,
        options: &BodyOptions,
    ) -> Result<RectangularVector, EphemerisError> {
        let SessionState::Ready {
            earth_velocity,
            elements,
            ..
        } = &self.state
        else {
            return Err(EphemerisError::Uninitialized);
        };
        let (body, earth) = rayon::join(|| (options.source)(jt), || (self.earth)(jt));
        let geocentric = body?.to_rectangular() - earth?.to_rectangular();
        Ok(reduce(
            geocentric,
            options.velocity,
            *earth_velocity,
            &elements.matrix(),
        ))
    }
}

/// One-shot reduction at `jt`: velocities and the composed transform are all evaluated at `jt`.
pub fn position_ephemeris(
    jt: Jt,
    model: PrecessionModel,
    earth: &CoordinateSource,
    body: &CoordinateSource,
) -> Result<Vector, EphemerisError> {
    let ((earth_state, body_state), elements) = rayon::join(
        || {
            rayon::join(
                || position_and_velocity(earth, jt),
                || position_and_velocity(body, jt),
            )
        },
        || EclipticToEquatorialElements::new(model, jt),
    );
    let (earth_position, earth_velocity) = earth_state?;
    let (body_position, body_velocity) = body_state?;
    Ok(Vector::Rectangular(reduce(
        body_position - earth_position,
        body_velocity,
        earth_velocity,
        &elements.matrix(),
    )))
}
