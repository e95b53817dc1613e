//! Daily rise/set almanac and yearly seasons, assembled from the event searches.

use std::fmt;
use std::str::FromStr;

use almanac_core::{Jt, RectangularVector, Vector};
use almanac_ephemeris::kepler::simon_j2000;
use almanac_ephemeris::{
    CoordinateSource, EphemerisError, Planet, PositionEphemeris, fast_moon, fast_sun, fixed_source,
};
use almanac_events::{
    Culmination, EventError, LocalDay, ObjectType, Observer, RiseSetResult, SeasonEvent,
    SeasonSettings, TwilightKind, TwilightResult, find_culmination, find_equinox_solstice_year,
    find_rise_set, find_twilight,
};
use almanac_export::EventRow;
use almanac_frames::PrecessionModel;
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

/// Body of a daily report and the source of its apparent position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Body {
    /// Sun from the mean-element Earth reduced through a position session.
    #[default]
    Sun,
    /// Sun from the analytic low-precision theory.
    SunFast,
    /// Moon from the analytic low-precision theory.
    Moon,
}

impl Body {
    pub fn object_type(self) -> ObjectType {
        match self {
            Body::Sun | Body::SunFast => ObjectType::Sun,
            Body::Moon => ObjectType::Moon,
        }
    }
}

impl FromStr for Body {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" => Ok(Body::Sun),
            "sun-fast" | "sun_fast" => Ok(Body::SunFast),
            "moon" => Ok(Body::Moon),
            other => Err(format!("unknown body `{other}` (expected sun, sun-fast, or moon)")),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Body::Sun => "sun",
            Body::SunFast => "sun-fast",
            Body::Moon => "moon",
        })
    }
}

/// Golden-section budget for culmination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CulminationSearch {
    pub precision_hours: f64,
    pub max_steps: usize,
}

impl Default for CulminationSearch {
    fn default() -> Self {
        Self {
            precision_hours: 1e-6,
            max_steps: 50,
        }
    }
}

/// Events of one body on one local day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayReport {
    pub date: NaiveDate,
    pub body: Body,
    pub rise_set: RiseSetResult,
    pub twilight_kind: TwilightKind,
    /// Twilight of the Sun; absent for the Moon.
    pub twilight: Option<TwilightResult>,
    pub culmination: Culmination,
}

fn heliocentric_earth() -> CoordinateSource {
    simon_j2000(Planet::Earth)
}

fn heliocentric_sun() -> CoordinateSource {
    fixed_source(Vector::Rectangular(RectangularVector::ZERO))
}

/// Compute rise/set, twilight, and culmination of `body` for `date`.
pub fn day_report(
    date: NaiveDate,
    observer: Observer,
    model: PrecessionModel,
    body: Body,
    twilight_kind: TwilightKind,
    culmination: CulminationSearch,
) -> Result<DayReport, EventError> {
    debug!("{body} report for {date} with {model}");
    let search = DaySearch {
        date,
        observer,
        body,
        twilight_kind,
        culmination,
    };
    match body {
        Body::Sun => {
            let jt0 = LocalDay::new(date, observer).anchor_jt();
            let mut session = PositionEphemeris::new(model, heliocentric_earth());
            session.set_jt0(jt0)?;
            let options = session.create_body_options(jt0, heliocentric_sun())?;
            let position = |jt: Jt| session.get_position(jt, &options).map(Vector::from);
            search.run(&position)
        }
        Body::SunFast => {
            let sun = fast_sun::geocentric_equatorial_apparent(model.obliquity_model());
            let position = |jt: Jt| sun(jt);
            search.run(&position)
        }
        Body::Moon => {
            let moon = fast_moon::geocentric_equatorial_apparent(model.obliquity_model());
            let position = |jt: Jt| moon(jt);
            search.run(&position)
        }
    }
}

struct DaySearch {
    date: NaiveDate,
    observer: Observer,
    body: Body,
    twilight_kind: TwilightKind,
    culmination: CulminationSearch,
}

impl DaySearch {
    fn run<P>(&self, position: &P) -> Result<DayReport, EventError>
    where
        P: Fn(Jt) -> Result<Vector, EphemerisError> + Sync,
    {
        let object = self.body.object_type();
        let twilight = match object {
            ObjectType::Sun => Some(find_twilight(
                self.twilight_kind,
                self.date,
                self.observer,
                position,
            )?),
            _ => None,
        };
        Ok(DayReport {
            date: self.date,
            body: self.body,
            rise_set: find_rise_set(object, self.date, self.observer, position)?,
            twilight_kind: self.twilight_kind,
            twilight,
            culmination: find_culmination(
                object,
                self.date,
                self.observer,
                position,
                self.culmination.precision_hours,
                self.culmination.max_steps,
            )?,
        })
    }
}

/// Equinoxes and solstices of `year`, in UTC.
pub fn season_report(
    year: i32,
    model: PrecessionModel,
    settings: &SeasonSettings,
) -> Result<Vec<SeasonEvent>, EventError> {
    let session = PositionEphemeris::new(model, heliocentric_earth());
    find_equinox_solstice_year(&session, year, settings)
}

fn clock(time: &NaiveDateTime) -> String {
    time.format("%H:%M:%S").to_string()
}

impl DayReport {
    /// Flatten into export rows, one per event.
    pub fn rows(&self, observer: &str) -> Vec<EventRow> {
        let date = self.date.format("%Y-%m-%d").to_string();
        let row = |event: &str, time: Option<&NaiveDateTime>, note: &str| EventRow {
            observer: observer.to_string(),
            date: date.clone(),
            event: event.to_string(),
            time_local: time.map(clock).unwrap_or_default(),
            note: note.to_string(),
        };
        let all_day = |is_above: bool| if is_above { "always above" } else { "always below" };

        let mut rows = Vec::new();
        match self.rise_set {
            RiseSetResult::RiseSet { rise, set } => {
                rows.push(row("rise", Some(&rise), ""));
                rows.push(row("set", Some(&set), ""));
            }
            RiseSetResult::Rise(rise) => {
                rows.push(row("rise", Some(&rise), ""));
                rows.push(row("set", None, "no set"));
            }
            RiseSetResult::Set(set) => {
                rows.push(row("rise", None, "no rise"));
                rows.push(row("set", Some(&set), ""));
            }
            RiseSetResult::None { is_above } => {
                rows.push(row("rise", None, all_day(is_above)));
                rows.push(row("set", None, all_day(is_above)));
            }
        }

        let kind = self.twilight_kind.name();
        let begin = format!("{kind}_twilight_begin");
        let end = format!("{kind}_twilight_end");
        match self.twilight {
            Some(TwilightResult::BeginEnd { begin: b, end: e }) => {
                rows.push(row(&begin, Some(&b), ""));
                rows.push(row(&end, Some(&e), ""));
            }
            Some(TwilightResult::Begin(b)) => {
                rows.push(row(&begin, Some(&b), ""));
                rows.push(row(&end, None, "no end"));
            }
            Some(TwilightResult::End(e)) => {
                rows.push(row(&begin, None, "no begin"));
                rows.push(row(&end, Some(&e), ""));
            }
            Some(TwilightResult::None { is_above }) => {
                rows.push(row(&begin, None, all_day(is_above)));
                rows.push(row(&end, None, all_day(is_above)));
            }
            None => {}
        }

        for (event, point) in [
            ("upper_culmination", &self.culmination.upper),
            ("lower_culmination", &self.culmination.lower),
        ] {
            let Some(point) = point else {
                rows.push(row(event, None, "no culmination this day"));
                continue;
            };
            let mut note = if point.is_above { "above horizon" } else { "below horizon" }.to_string();
            if !point.converged {
                note.push_str(", not converged");
            }
            rows.push(row(event, Some(&point.time), &note));
        }
        rows
    }
}
