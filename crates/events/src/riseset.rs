//! Rise and set times from quadratic interpolation of the altitude curve.

use almanac_core::{Jt, Vector};
use almanac_ephemeris::EphemerisError;
use almanac_search::{QuadraticResult, find_quadratic_roots};
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, trace};

use crate::EventError;
use crate::observer::{LocalDay, ObjectType, Observer};

/// Outcome of a rise/set search. Times are local civil time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiseSetResult {
    Rise(NaiveDateTime),
    Set(NaiveDateTime),
    RiseSet {
        rise: NaiveDateTime,
        set: NaiveDateTime,
    },
    /// No crossing during the day.
    None { is_above: bool },
}

/// Upward and downward crossings of a threshold, in hours after local midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Crossings {
    pub rise: Option<f64>,
    pub set: Option<f64>,
    /// Last sampled value, whose sign tells whether the body stayed above.
    pub last_sample: f64,
}

/// Scan the day in two-hour windows centred on hours 1, 3, …, 23.
pub(crate) fn find_crossings<P>(
    day: &LocalDay,
    position: &P,
    sin_threshold: f64,
) -> Result<Crossings, EventError>
where
    P: Fn(Jt) -> Result<Vector, EphemerisError> + Sync,
{
    let f = |hour: f64| -> Result<f64, EventError> {
        Ok(day.sin_altitude(position, hour)? - sin_threshold)
    };

    let mut rise = None;
    let mut set = None;
    let mut y_minus = f(0.0)?;
    for window in 0..12 {
        let hour = f64::from(2 * window + 1);
        let (y0, y_plus) = rayon::join(|| f(hour), || f(hour + 1.0));
        let (y0, y_plus) = (y0?, y_plus?);
        trace!("window {hour}: {y_minus:.6} {y0:.6} {y_plus:.6}");

        match find_quadratic_roots(y_minus, y0, y_plus) {
            QuadraticResult::Root { root, .. } => {
                if y_minus < 0.0 {
                    rise = Some(hour + root);
                } else {
                    set = Some(hour + root);
                }
            }
            QuadraticResult::Roots {
                extremum,
                root1,
                root2,
            } => {
                let (up, down) = if extremum.y < 0.0 {
                    (hour + root2, hour + root1)
                } else {
                    (hour + root1, hour + root2)
                };
                return Ok(Crossings {
                    rise: Some(up),
                    set: Some(down),
                    last_sample: y_plus,
                });
            }
            QuadraticResult::None { .. } => {}
        }

        y_minus = y_plus;
        if rise.is_some() && set.is_some() {
            break;
        }
    }

    Ok(Crossings {
        rise,
        set,
        last_sample: y_minus,
    })
}

/// Rise and set of a body on a local civil date.
pub fn find_rise_set<P>(
    object: ObjectType,
    date: NaiveDate,
    observer: Observer,
    position: P,
) -> Result<RiseSetResult, EventError>
where
    P: Fn(Jt) -> Result<Vector, EphemerisError> + Sync,
{
    let day = LocalDay::new(date, observer);
    let crossings = find_crossings(&day, &position, object.sin_horizon_altitude())?;
    debug!("{object:?} on {date}: {crossings:?}");

    Ok(match (crossings.rise, crossings.set) {
        (Some(rise), Some(set)) => RiseSetResult::RiseSet {
            rise: day.local_datetime(rise)?,
            set: day.local_datetime(set)?,
        },
        (Some(rise), None) => RiseSetResult::Rise(day.local_datetime(rise)?),
        (None, Some(set)) => RiseSetResult::Set(day.local_datetime(set)?),
        (None, None) => RiseSetResult::None {
            is_above: crossings.last_sample > 0.0,
        },
    })
}
