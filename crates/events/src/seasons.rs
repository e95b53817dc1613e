//! Equinoxes and solstices by fixed-point iteration on the Sun's apparent longitude.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use almanac_core::constants::SECONDS_PER_DAY;
use almanac_core::time::{civil_date, datetime_from_mjd, delta_t_seconds, mjd_from_date};
use almanac_core::{Vector, jt_from_mjd};
use almanac_ephemeris::{PositionEphemeris, fixed_source};
use chrono::NaiveDateTime;
use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::EventError;

/// Days per radian of solar longitude, near enough for the correction step.
const DAYS_PER_RADIAN: f64 = 58.13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::MarchEquinox,
        Season::JuneSolstice,
        Season::SeptemberEquinox,
        Season::DecemberSolstice,
    ];

    /// Month in which the event falls; the search starts on its first day.
    pub fn month(self) -> u32 {
        match self {
            Season::MarchEquinox => 3,
            Season::JuneSolstice => 6,
            Season::SeptemberEquinox => 9,
            Season::DecemberSolstice => 12,
        }
    }

    /// Apparent solar longitude at the event, radians.
    pub fn target_longitude(self) -> f64 {
        match self {
            Season::MarchEquinox => 0.0,
            Season::JuneSolstice => FRAC_PI_2,
            Season::SeptemberEquinox => PI,
            Season::DecemberSolstice => -FRAC_PI_2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::MarchEquinox => "March equinox",
            Season::JuneSolstice => "June solstice",
            Season::SeptemberEquinox => "September equinox",
            Season::DecemberSolstice => "December solstice",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stopping rule of the fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonSettings {
    pub precision_seconds: f64,
    pub max_iterations: usize,
}

impl Default for SeasonSettings {
    fn default() -> Self {
        Self {
            precision_seconds: 0.1,
            max_iterations: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonEvent {
    pub season: Season,
    /// UTC.
    pub time: NaiveDateTime,
    pub converged: bool,
    pub iterations: usize,
}

/// Instant of one equinox or solstice of `year`.
///
/// `session` must carry a heliocentric Earth provider. It is re-anchored whenever the trial
/// instant has moved a day or more from the current anchor, which leaves it within a day of the
/// result.
pub fn find_equinox_solstice(
    session: &mut PositionEphemeris,
    year: i32,
    season: Season,
    settings: &SeasonSettings,
) -> Result<SeasonEvent, EventError> {
    let start = civil_date(year, season.month(), 1)?;
    let sun = fixed_source(Vector::default());
    let precision = settings.precision_seconds / SECONDS_PER_DAY;
    let target = season.target_longitude();

    // Dynamical time throughout; converted to UT at the end.
    let mut mjd = mjd_from_date(&start);
    let mut anchor = mjd;
    session.set_jt0(jt_from_mjd(mjd))?;
    let mut options = session.create_body_options(jt_from_mjd(mjd), sun.clone())?;

    let mut delta = f64::INFINITY;
    let mut iterations = 0;
    while delta.abs() > precision && iterations < settings.max_iterations {
        let jt = jt_from_mjd(mjd);
        // Corrections accumulated since the last anchor, not just the latest step.
        if (mjd - anchor).abs() >= 1.0 {
            debug!("{season}: re-anchoring at MJD {mjd:.6}");
            session.set_jt0(jt)?;
            options = session.create_body_options(jt, sun.clone())?;
            anchor = mjd;
        }
        let apparent = session.get_position(jt, &options)?;
        let ecliptic = session
            .elements()?
            .equatorial_to_true_ecliptic(Vector::Rectangular(apparent));
        let longitude = ecliptic.to_spherical().phi;

        delta = DAYS_PER_RADIAN * (target - longitude).sin();
        mjd += delta;
        iterations += 1;
        trace!("{season} iteration {iterations}: λ={longitude:.9} Δ={delta:.3e} d");
    }

    let converged = delta.abs() <= precision;
    if !converged {
        warn!(
            "{season} {year}: stopped after {iterations} iterations with correction {delta:.3e} d"
        );
    }
    let ut = mjd - delta_t_seconds(year, season.month()) / SECONDS_PER_DAY;
    Ok(SeasonEvent {
        season,
        time: datetime_from_mjd(ut)?,
        converged,
        iterations,
    })
}

/// All four equinoxes and solstices of `year`, searched in parallel on clones of `session`.
pub fn find_equinox_solstice_year(
    session: &PositionEphemeris,
    year: i32,
    settings: &SeasonSettings,
) -> Result<Vec<SeasonEvent>, EventError> {
    Season::ALL
        .par_iter()
        .map(|&season| {
            let mut own = session.clone();
            find_equinox_solstice(&mut own, year, season, settings)
        })
        .collect()
}
