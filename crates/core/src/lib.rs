//! Core constants, angle helpers, vector algebra, and time scales for the Sky Almanac workspace.

pub mod time;
pub mod vector;

pub use vector::{FromVector, Matrix, RectangularVector, SphericalVector, Vector};

/// Julian centuries since J2000.0, the time argument of every model function.
pub type Jt = f64;

/// Modified Julian Date.
pub type Mjd = f64;

/// Astronomical constants.
pub mod constants {
    use std::f64::consts::PI;

    /// MJD of the J2000.0 epoch.
    pub const MJD_J2000: f64 = 51_544.5;
    /// Days per Julian century.
    pub const DAYS_PER_CENTURY: f64 = 36_525.0;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Kilometres per astronomical unit.
    pub const KM_PER_AU: f64 = 149_597_870.7;
    /// Speed of light in AU/day.
    pub const SPEED_OF_LIGHT_AU_DAY: f64 = 173.144_632_685;
    /// Arcseconds in a full turn.
    pub const ARCSEC_PER_TURN: f64 = 1_296_000.0;
    /// Radians per arcsecond.
    pub const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);
    /// Radians per degree.
    pub const DEG_TO_RAD: f64 = PI / 180.0;
    /// Degrees per radian.
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
    /// Full turn in radians.
    pub const TWO_PI: f64 = 2.0 * PI;
}

/// Angle conversion and normalization helpers.
pub mod angles {
    use super::constants::{ARCSEC_PER_TURN, DEG_TO_RAD, RAD_TO_DEG, TWO_PI};

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * DEG_TO_RAD
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v * RAD_TO_DEG
    }

    /// Reduce an angle in radians to `[0, 2π)`.
    #[inline]
    pub fn normalize_rad(v: f64) -> f64 {
        let r = v.rem_euclid(TWO_PI);
        if r >= TWO_PI { 0.0 } else { r }
    }

    /// Reduce an angle in degrees to `[0, 360)`.
    #[inline]
    pub fn normalize_deg(v: f64) -> f64 {
        let r = v.rem_euclid(360.0);
        if r >= 360.0 { 0.0 } else { r }
    }

    /// Reduce an angle in arcseconds to one turn.
    #[inline]
    pub fn mod3600(v: f64) -> f64 {
        v - ARCSEC_PER_TURN * (v / ARCSEC_PER_TURN).floor()
    }
}

/// Polynomial evaluation in the two coefficient orders used by model tables.
pub mod poly {
    /// Sum `c[0] + c[1]·x + c[2]·x² + …` (ascending coefficients).
    pub fn polynomial_sum(coefficients: &[f64], x: f64) -> f64 {
        coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    /// Horner fold over descending coefficients: `((c[0]·x + c[1])·x + …)`.
    pub fn horner(coefficients: &[f64], x: f64) -> f64 {
        coefficients.iter().fold(0.0, |acc, c| acc * x + c)
    }
}

/// Convert an MJD to Julian centuries since J2000.0.
#[inline]
pub fn jt_from_mjd(mjd: Mjd) -> Jt {
    (mjd - constants::MJD_J2000) / constants::DAYS_PER_CENTURY
}

/// Convert Julian centuries since J2000.0 back to an MJD.
#[inline]
pub fn mjd_from_jt(jt: Jt) -> Mjd {
    jt * constants::DAYS_PER_CENTURY + constants::MJD_J2000
}
