//! Upper and lower culmination: a coarse scan of the altitude curve brackets each local
//! extremum, and golden-section search refines it.

use almanac_core::{Jt, Vector};
use almanac_ephemeris::EphemerisError;
use almanac_search::{Extremum, GoldenSectionSearch};
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use rayon::prelude::*;

use crate::EventError;
use crate::observer::{LocalDay, ObjectType, Observer};

/// Spacing of the bracketing scan, hours.
const SCAN_STEP_HOURS: f64 = 2.0;

/// The scan runs one step past either end of the day so that extrema near midnight are
/// bracketed on both sides.
const SCAN_STEPS: std::ops::RangeInclusive<i32> = -1..=13;

/// One culmination instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CulminationPoint {
    pub time: NaiveDateTime,
    /// Whether the body is above its rise/set altitude at that instant.
    pub is_above: bool,
    pub converged: bool,
}

/// Culminations during one local day. A body whose transit drifts across midnight, such as
/// the Moon, skips one of them roughly once a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Culmination {
    pub upper: Option<CulminationPoint>,
    pub lower: Option<CulminationPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Upper,
    Lower,
}

impl Kind {
    fn beats(self, y: f64, other: f64) -> bool {
        match self {
            Kind::Upper => y > other,
            Kind::Lower => y < other,
        }
    }
}

/// First extremum of `kind` inside the day, refined from the scan samples.
fn refine<F>(
    kind: Kind,
    samples: &[(f64, f64)],
    altitude: &F,
    precision_hours: f64,
    max_steps: usize,
) -> Result<Option<Extremum>, EventError>
where
    F: Fn(f64) -> Result<f64, EventError> + Sync,
{
    for window in samples.windows(3) {
        let &[(a, y_before), (_, y), (b, y_after)] = window else {
            continue;
        };
        if kind.beats(y_before, y) || !kind.beats(y, y_after) {
            continue;
        }
        let search = GoldenSectionSearch::new(a, b, precision_hours, max_steps);
        let found = match kind {
            Kind::Upper => search.find_max(altitude)?,
            Kind::Lower => search.find_min(altitude)?,
        };
        if (0.0..24.0).contains(&found.x) {
            return Ok(Some(found));
        }
        debug!("{kind:?} extremum at {:.4} h falls outside the day", found.x);
    }
    Ok(None)
}

/// Upper and lower culmination of the body during the local civil day.
pub fn find_culmination<P>(
    object: ObjectType,
    date: NaiveDate,
    observer: Observer,
    position: P,
    precision_hours: f64,
    max_steps: usize,
) -> Result<Culmination, EventError>
where
    P: Fn(Jt) -> Result<Vector, EphemerisError> + Sync,
{
    let day = LocalDay::new(date, observer);
    let altitude = |hour: f64| day.sin_altitude(&position, hour);

    let samples = SCAN_STEPS
        .into_par_iter()
        .map(|step| {
            let hour = f64::from(step) * SCAN_STEP_HOURS;
            altitude(hour).map(|y| (hour, y))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (upper, lower) = rayon::join(
        || refine(Kind::Upper, &samples, &altitude, precision_hours, max_steps),
        || refine(Kind::Lower, &samples, &altitude, precision_hours, max_steps),
    );
    let (upper, lower) = (upper?, lower?);
    debug!(
        "culmination on {date}: upper {:?} h, lower {:?} h",
        upper.map(|e| e.x),
        lower.map(|e| e.x)
    );

    let threshold = object.sin_horizon_altitude();
    let point = |found: Option<Extremum>| {
        found
            .map(|e| -> Result<CulminationPoint, EventError> {
                Ok(CulminationPoint {
                    time: day.local_datetime(e.x)?,
                    is_above: altitude(e.x)? > threshold,
                    converged: e.converged,
                })
            })
            .transpose()
    };
    let (upper, lower) = rayon::join(|| point(upper), || point(lower));

    Ok(Culmination {
        upper: upper?,
        lower: lower?,
    })
}
