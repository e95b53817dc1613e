//! Civil, nautical, and astronomical twilight.

use std::fmt;
use std::str::FromStr;

use almanac_core::{Jt, Vector};
use almanac_core::angles::deg_to_rad;
use almanac_ephemeris::EphemerisError;
use chrono::{NaiveDate, NaiveDateTime};

use crate::EventError;
use crate::observer::{LocalDay, Observer};
use crate::riseset::find_crossings;

/// Depth of the Sun below the horizon that bounds twilight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwilightKind {
    #[default]
    Civil,
    Nautical,
    Astronomical,
}

impl TwilightKind {
    pub const ALL: [TwilightKind; 3] = [
        TwilightKind::Civil,
        TwilightKind::Nautical,
        TwilightKind::Astronomical,
    ];

    /// Solar altitude at the boundary, degrees.
    pub fn sun_altitude_deg(self) -> f64 {
        match self {
            TwilightKind::Civil => -6.0,
            TwilightKind::Nautical => -12.0,
            TwilightKind::Astronomical => -18.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TwilightKind::Civil => "civil",
            TwilightKind::Nautical => "nautical",
            TwilightKind::Astronomical => "astronomical",
        }
    }
}

impl fmt::Display for TwilightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TwilightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TwilightKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown twilight kind `{s}`"))
    }
}

/// Outcome of a twilight search. `Begin` is the morning crossing, `End` the evening one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwilightResult {
    Begin(NaiveDateTime),
    End(NaiveDateTime),
    BeginEnd {
        begin: NaiveDateTime,
        end: NaiveDateTime,
    },
    None { is_above: bool },
}

/// Morning and evening twilight boundaries for the Sun position function `position`.
pub fn find_twilight<P>(
    kind: TwilightKind,
    date: NaiveDate,
    observer: Observer,
    position: P,
) -> Result<TwilightResult, EventError>
where
    P: Fn(Jt) -> Result<Vector, EphemerisError> + Sync,
{
    let day = LocalDay::new(date, observer);
    let threshold = deg_to_rad(kind.sun_altitude_deg()).sin();
    let crossings = find_crossings(&day, &position, threshold)?;

    Ok(match (crossings.rise, crossings.set) {
        (Some(begin), Some(end)) => TwilightResult::BeginEnd {
            begin: day.local_datetime(begin)?,
            end: day.local_datetime(end)?,
        },
        (Some(begin), None) => TwilightResult::Begin(day.local_datetime(begin)?),
        (None, Some(end)) => TwilightResult::End(day.local_datetime(end)?),
        (None, None) => TwilightResult::None {
            is_above: crossings.last_sample > 0.0,
        },
    })
}
