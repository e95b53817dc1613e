//! Observer site and the local civil day that every daily search samples.

use almanac_core::angles::deg_to_rad;
use almanac_core::constants::SECONDS_PER_DAY;
use almanac_core::time::{datetime_from_mjd, delta_t_seconds, gmst, mjd_from_date};
use almanac_core::{Jt, Mjd, Vector, jt_from_mjd};
use almanac_ephemeris::EphemerisError;
use almanac_ephemeris::horizon::sin_altitude;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::EventError;

/// Geographic site. Angles in radians, east longitude positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub longitude: f64,
    pub latitude: f64,
    /// Local civil time minus UTC, hours.
    pub utc_offset_hours: f64,
}

impl Observer {
    pub fn new(longitude: f64, latitude: f64, utc_offset_hours: f64) -> Self {
        Self {
            longitude,
            latitude,
            utc_offset_hours,
        }
    }

    pub fn from_degrees(latitude_deg: f64, longitude_deg: f64, utc_offset_hours: f64) -> Self {
        Self::new(
            deg_to_rad(longitude_deg),
            deg_to_rad(latitude_deg),
            utc_offset_hours,
        )
    }
}

/// Kind of body, which fixes the altitude of its apparent rise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Sun,
    Moon,
    /// Point source such as a star or planet.
    Dot,
}

impl ObjectType {
    /// Geometric altitude at the moment of rise or set, degrees.
    pub fn horizon_altitude_deg(self) -> f64 {
        match self {
            ObjectType::Sun => -0.833,
            ObjectType::Moon => 0.133,
            ObjectType::Dot => -0.5667,
        }
    }

    pub(crate) fn sin_horizon_altitude(self) -> f64 {
        deg_to_rad(self.horizon_altitude_deg()).sin()
    }
}

/// One local civil day at an observer, anchored at local midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalDay {
    pub date: NaiveDate,
    pub observer: Observer,
    /// UT of local midnight.
    mjd0: Mjd,
    delta_t_days: f64,
}

impl LocalDay {
    pub fn new(date: NaiveDate, observer: Observer) -> Self {
        Self {
            date,
            observer,
            mjd0: mjd_from_date(&date) - observer.utc_offset_hours / 24.0,
            delta_t_days: delta_t_seconds(date.year(), date.month()) / SECONDS_PER_DAY,
        }
    }

    /// UT of `hour` hours after local midnight.
    pub fn mjd_at(&self, hour: f64) -> Mjd {
        self.mjd0 + hour / 24.0
    }

    /// Dynamical time of `hour` hours after local midnight.
    pub fn jt_at(&self, hour: f64) -> Jt {
        jt_from_mjd(self.mjd_at(hour) + self.delta_t_days)
    }

    /// Dynamical time of local midnight, the natural reference for a session.
    pub fn anchor_jt(&self) -> Jt {
        self.jt_at(0.0)
    }

    pub fn local_datetime(&self, hour: f64) -> Result<NaiveDateTime, EventError> {
        Ok(datetime_from_mjd(mjd_from_date(&self.date) + hour / 24.0)?)
    }

    /// `sin(altitude)` of the body `hour` hours after local midnight.
    pub fn sin_altitude<P>(&self, position: &P, hour: f64) -> Result<f64, EventError>
    where
        P: Fn(Jt) -> Result<Vector, EphemerisError>,
    {
        let mjd = self.mjd_at(hour);
        let vector = position(self.jt_at(hour))?;
        Ok(sin_altitude(
            vector,
            self.observer.longitude,
            self.observer.latitude,
            gmst(mjd),
        ))
    }
}
