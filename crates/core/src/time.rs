//! Time scales at the calendar boundary: civil dates, MJD, ΔT, and sidereal time.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use thiserror::Error;

use crate::Mjd;
use crate::constants::{SECONDS_PER_DAY, TWO_PI};

/// MJD of the Unix epoch.
pub const MJD_UNIX_EPOCH: f64 = 40_587.0;

/// Calendar reform used when reading a civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarKind {
    #[default]
    Gregorian,
    Julian,
}

/// Errors raised while converting between MJD and civil dates.
#[derive(Debug, Error, PartialEq)]
pub enum TimeError {
    #[error("MJD {0} is outside the representable calendar range")]
    OutOfRange(f64),
    #[error("invalid civil date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// MJD of a civil instant. Month is 1–12, the time of day may carry fractional seconds.
pub fn mjd_from_civil(
    kind: CalendarKind,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Mjd {
    let (y, m) = if month <= 2 {
        (i64::from(year) - 1, i64::from(month) + 12)
    } else {
        (i64::from(year), i64::from(month))
    };
    // Floor division keeps years before 1 CE on the right day.
    let b = match kind {
        CalendarKind::Julian => -2 + (y + 4716).div_euclid(4) - 1179,
        CalendarKind::Gregorian => y.div_euclid(400) - y.div_euclid(100) + y.div_euclid(4),
    };
    let day_number = 365 * y - 679_004 + b + (30.6001 * (m + 1) as f64) as i64 + i64::from(day);
    let fraction = (f64::from(hour) + f64::from(minute) / 60.0 + second / 3600.0) / 24.0;
    day_number as f64 + fraction
}

/// MJD of a proleptic Gregorian date-time.
pub fn mjd_from_datetime(dt: &NaiveDateTime) -> Mjd {
    let seconds = f64::from(dt.second()) + f64::from(dt.nanosecond()) * 1e-9;
    mjd_from_civil(
        CalendarKind::Gregorian,
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        seconds,
    )
}

/// MJD at 00:00 of a date.
pub fn mjd_from_date(date: &NaiveDate) -> Mjd {
    mjd_from_civil(CalendarKind::Gregorian, date.year(), date.month(), date.day(), 0, 0, 0.0)
}

/// MJD of a Unix timestamp in milliseconds.
pub fn mjd_from_unix_millis(millis: i64) -> Mjd {
    millis as f64 / 1000.0 / SECONDS_PER_DAY + MJD_UNIX_EPOCH
}

/// Date-time of an MJD, rounded to the millisecond.
pub fn datetime_from_mjd(mjd: Mjd) -> Result<NaiveDateTime, TimeError> {
    let epoch = NaiveDate::from_ymd_opt(1858, 11, 17)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(TimeError::OutOfRange(mjd))?;
    let millis = (mjd * SECONDS_PER_DAY * 1000.0).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(TimeError::OutOfRange(mjd));
    }
    TimeDelta::try_milliseconds(millis as i64)
        .and_then(|delta| epoch.checked_add_signed(delta))
        .ok_or(TimeError::OutOfRange(mjd))
}

/// Validated calendar date.
pub fn civil_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TimeError::InvalidDate { year, month, day })
}

/// Greenwich mean sidereal time in radians for an MJD in UT.
pub fn gmst(mjd: Mjd) -> f64 {
    let mjd0 = mjd.floor();
    let ut = SECONDS_PER_DAY * (mjd - mjd0);
    let jt0 = crate::jt_from_mjd(mjd0);
    let jt = crate::jt_from_mjd(mjd);
    let seconds = 24_110.548_41 + 8_640_184.812_866 * jt0 + 1.002_737_909_3 * ut
        + (0.093_104 - 0.000_006_2 * jt) * jt * jt;
    TWO_PI / SECONDS_PER_DAY * seconds.rem_euclid(SECONDS_PER_DAY)
}

/// ΔT = TT − UT in seconds (Espenak & Meeus polynomial fits). Month is 1–12.
pub fn delta_t_seconds(year: i32, month: u32) -> f64 {
    let y = f64::from(year) + (f64::from(month) - 0.5) / 12.0;
    let long_term = |y: f64| {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    };
    match year {
        2005..=2050 => {
            let t = y - 2000.0;
            62.92 + (0.32217 + 0.005589 * t) * t
        }
        -500..=499 => {
            let u = y / 100.0;
            10583.6
                + (-1014.41
                    + (33.78311
                        + (-5.952053
                            + (-0.1798452 + (0.022174192 + 0.0090316521 * u) * u) * u)
                            * u)
                        * u)
                    * u
        }
        500..=1599 => {
            let u = (y - 1000.0) / 100.0;
            1574.2
                + (-556.01
                    + (71.23472
                        + (0.319781 + (-0.8503463 + (-0.005050998 + 0.0083572073 * u) * u) * u)
                            * u)
                        * u)
                    * u
        }
        1600..=1699 => {
            let u = y - 1600.0;
            120.0 + (-0.9808 + (-0.01532 + u / 7129.0) * u) * u
        }
        1700..=1799 => {
            let u = y - 1700.0;
            8.83 + (0.1603 + (-0.0059285 + (0.00013336 - u / 1_174_000.0) * u) * u) * u
        }
        1800..=1859 => {
            let u = y - 1800.0;
            13.72
                + (-0.332447
                    + (0.0068612
                        + (0.0041116
                            + (-0.00037436
                                + (0.0000121272 + (-0.0000001699 + 0.000000000875 * u) * u) * u)
                                * u)
                            * u)
                        * u)
                    * u
        }
        1860..=1899 => {
            let u = y - 1860.0;
            7.62 + (0.5737 + (-0.251754 + (0.01680668 + (-0.0004473624 + u / 233_174.0) * u) * u) * u)
                * u
        }
        1900..=1919 => {
            let u = y - 1900.0;
            -2.79 + (1.494119 + (-0.0598939 + (0.0061966 - 0.000197 * u) * u) * u) * u
        }
        1920..=1940 => {
            let u = y - 1920.0;
            21.20 + (0.84493 + (-0.076100 + 0.0020936 * u) * u) * u
        }
        1941..=1960 => {
            let u = y - 1950.0;
            29.07 + (0.407 + (-1.0 / 233.0 + u / 2547.0) * u) * u
        }
        1961..=1985 => {
            let u = y - 1975.0;
            45.45 + (1.067 + (-1.0 / 260.0 - u / 718.0) * u) * u
        }
        1986..=2004 => {
            let u = y - 2000.0;
            63.86
                + (0.3345
                    + (-0.060374 + (0.0017275 + (0.000651814 + 0.00002373599 * u) * u) * u) * u)
                    * u
        }
        2051..=2150 => long_term(y) - 0.5628 * (2150.0 - y),
        _ => long_term(y),
    }
}
