use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sky_almanac::almanac::{Body, CulminationSearch, DayReport, day_report};
use sky_almanac::ephemeris::fast_moon;
use sky_almanac::ephemeris::fast_sun::geocentric_equatorial_apparent;
use sky_almanac::events::{
    LocalDay, ObjectType, Observer, RiseSetResult, TwilightKind, TwilightResult, find_rise_set,
    find_twilight,
};
use sky_almanac::frames::{ObliquityModel, PrecessionModel};

struct City {
    name: &'static str,
    observer: Observer,
    date: NaiveDate,
    rise: &'static str,
    set: &'static str,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn cities() -> [City; 3] {
    [
        City {
            name: "St Petersburg",
            observer: Observer::from_degrees(60.058_333_3, 30.325, 3.0),
            date: date(2018, 8, 7),
            rise: "04:52:41",
            set: "21:14:35",
        },
        City {
            name: "New York",
            observer: Observer::from_degrees(40.7127, -74.0059, -4.0),
            date: date(2018, 8, 7),
            rise: "05:58:28",
            set: "20:04:19",
        },
        City {
            name: "Sydney",
            observer: Observer::from_degrees(-33.865, 151.209_444, 10.0),
            date: date(2018, 8, 24),
            rise: "06:23:58",
            set: "17:31:43",
        },
    ]
}

fn at(day: NaiveDate, clock: &str) -> NaiveDateTime {
    day.and_time(NaiveTime::parse_from_str(clock, "%H:%M:%S").expect("clock"))
}

fn minutes_between(a: NaiveDateTime, b: NaiveDateTime) -> f64 {
    (a - b).num_milliseconds().abs() as f64 / 60_000.0
}

fn report(observer: Observer, day: NaiveDate, body: Body) -> DayReport {
    day_report(
        day,
        observer,
        PrecessionModel::Iau1976,
        body,
        TwilightKind::Civil,
        CulminationSearch::default(),
    )
    .expect("day report")
}

#[test]
fn sunrise_and_sunset_in_three_cities() {
    for city in cities() {
        let report = report(city.observer, city.date, Body::Sun);
        let RiseSetResult::RiseSet { rise, set } = report.rise_set else {
            panic!("{}: expected rise and set, got {:?}", city.name, report.rise_set);
        };
        let expected_rise = at(city.date, city.rise);
        let expected_set = at(city.date, city.set);
        assert!(
            minutes_between(rise, expected_rise) < 1.0,
            "{} rise {rise} vs {expected_rise}",
            city.name
        );
        assert!(
            minutes_between(set, expected_set) < 1.0,
            "{} set {set} vs {expected_set}",
            city.name
        );
    }
}

#[test]
fn fast_sun_gives_the_same_day() {
    for city in cities() {
        let kepler = report(city.observer, city.date, Body::Sun);
        let fast = report(city.observer, city.date, Body::SunFast);
        match (kepler.rise_set, fast.rise_set) {
            (
                RiseSetResult::RiseSet { rise: r1, set: s1 },
                RiseSetResult::RiseSet { rise: r2, set: s2 },
            ) => {
                assert!(minutes_between(r1, r2) < 0.5, "{} rise {r1} vs {r2}", city.name);
                assert!(minutes_between(s1, s2) < 0.5, "{} set {s1} vs {s2}", city.name);
            }
            other => panic!("{}: {other:?}", city.name),
        }
    }
}

#[test]
fn direct_search_accepts_any_position_function() {
    let observer = Observer::from_degrees(40.7127, -74.0059, -4.0);
    let sun = geocentric_equatorial_apparent(ObliquityModel::Iau1976);
    let result = find_rise_set(ObjectType::Sun, date(2018, 8, 7), observer, |jt: f64| sun(jt))
        .expect("rise/set");
    assert!(matches!(result, RiseSetResult::RiseSet { .. }), "{result:?}");
}

#[test]
fn polar_day_and_night() {
    let tromso = Observer::from_degrees(69.6496, 18.956, 2.0);
    let summer = report(tromso, date(2018, 6, 21), Body::Sun);
    assert_eq!(summer.rise_set, RiseSetResult::None { is_above: true });
    let midnight = summer.culmination.lower.expect("lower culmination");
    assert!(midnight.is_above);

    let winter = report(tromso, date(2018, 12, 21), Body::Sun);
    assert_eq!(winter.rise_set, RiseSetResult::None { is_above: false });
    let noon = winter.culmination.upper.expect("upper culmination");
    assert!(!noon.is_above);
    // The Sun stays within six degrees of the horizon at noon.
    assert!(
        matches!(winter.twilight, Some(TwilightResult::BeginEnd { .. })),
        "{:?}",
        winter.twilight
    );
}

#[test]
fn twilight_brackets_the_daylight() {
    let observer = Observer::from_degrees(40.7127, -74.0059, -4.0);
    let day = date(2018, 8, 7);
    let sun = geocentric_equatorial_apparent(ObliquityModel::Iau1976);
    let position = |jt: f64| sun(jt);

    let RiseSetResult::RiseSet { rise, set } =
        find_rise_set(ObjectType::Sun, day, observer, position).expect("rise/set")
    else {
        panic!("New York has a sunrise in August");
    };

    let mut previous: Option<(NaiveDateTime, NaiveDateTime)> = None;
    for kind in TwilightKind::ALL {
        let TwilightResult::BeginEnd { begin, end } =
            find_twilight(kind, day, observer, position).expect("twilight")
        else {
            panic!("{kind} twilight should begin and end");
        };
        assert!(begin < rise && set < end, "{kind}: {begin}..{end}");
        if let Some((outer_begin, outer_end)) = previous {
            assert!(begin < outer_begin && outer_end < end, "{kind} is deeper");
        }
        previous = Some((begin, end));
    }
}

#[test]
fn culmination_sits_between_rise_and_set() {
    let observer = Observer::from_degrees(40.7127, -74.0059, -4.0);
    let day = date(2018, 8, 7);
    let report = report(observer, day, Body::Sun);
    let RiseSetResult::RiseSet { rise, set } = report.rise_set else {
        panic!("expected rise and set");
    };
    let upper = report.culmination.upper.expect("upper culmination");
    let lower = report.culmination.lower.expect("lower culmination");
    let midpoint = rise + (set - rise) / 2;
    assert!(minutes_between(upper.time, midpoint) < 2.0, "noon {}", upper.time);
    assert!(upper.is_above && upper.converged);
    assert!(!lower.is_above && lower.converged);
    let gap = minutes_between(upper.time, lower.time) / 60.0;
    assert!((gap - 12.0).abs() < 0.2, "culminations {gap} h apart");
}

#[test]
fn moonrise_and_moonset_in_three_cities() {
    let st_petersburg = Observer::from_degrees(60.058_333_3, 30.325, 3.0);
    // Moonrise falls at 23:58 on the 5th and 00:24 on the 7th, so the 6th has only a set.
    let spb = report(st_petersburg, date(2018, 8, 6), Body::Moon);
    let RiseSetResult::Set(set) = spb.rise_set else {
        panic!("St Petersburg: expected only a moonset, got {:?}", spb.rise_set);
    };
    let expected = at(date(2018, 8, 6), "16:28:42");
    assert!(minutes_between(set, expected) < 1.0, "moonset {set} vs {expected}");
    assert_eq!(spb.twilight, None);

    let cases = [
        (
            "New York",
            Observer::from_degrees(40.7127, -74.0059, -4.0),
            date(2018, 8, 7),
            "01:49:30",
            "16:43:37",
        ),
        (
            "Sydney",
            Observer::from_degrees(-33.865, 151.209_444, 10.0),
            date(2018, 8, 24),
            "15:27:41",
            "04:53:35",
        ),
    ];
    for (name, observer, day, rise_at, set_at) in cases {
        let RiseSetResult::RiseSet { rise, set } = report(observer, day, Body::Moon).rise_set
        else {
            panic!("{name}: expected moonrise and moonset");
        };
        assert!(minutes_between(rise, at(day, rise_at)) < 1.0, "{name} moonrise {rise}");
        assert!(minutes_between(set, at(day, set_at)) < 1.0, "{name} moonset {set}");
    }
}

#[test]
fn moon_rows_skip_twilight() {
    let observer = Observer::from_degrees(40.7127, -74.0059, -4.0);
    let moon = fast_moon::geocentric_equatorial_apparent(ObliquityModel::Iau1976);
    let direct = find_rise_set(ObjectType::Moon, date(2018, 8, 7), observer, |jt: f64| moon(jt))
        .expect("rise/set");

    let report = report(observer, date(2018, 8, 7), Body::Moon);
    assert_eq!(report.rise_set, direct);
    let rows = report.rows("New York");
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| !r.event.contains("twilight")));
    assert_eq!("Moon".parse::<Body>(), Ok(Body::Moon));
    assert_eq!(Body::SunFast.to_string(), "sun-fast");
}

#[test]
fn moon_transit_skips_a_day() {
    let new_york = Observer::from_degrees(40.7127, -74.0059, -4.0);
    let transit = |day: NaiveDate| report(new_york, day, Body::Moon).culmination.upper;

    let before = transit(date(2018, 8, 23)).expect("transit on the 23rd");
    let expected = at(date(2018, 8, 23), "23:17:42");
    assert!(minutes_between(before.time, expected) < 2.0, "{}", before.time);

    // The next transit comes five minutes after midnight.
    let skipped = report(new_york, date(2018, 8, 24), Body::Moon);
    assert_eq!(skipped.culmination.upper, None);
    let lower = skipped.culmination.lower.expect("lower culmination on the 24th");
    assert!(!lower.is_above && lower.converged);
    let rows = skipped.rows("New York");
    let upper_row = rows.iter().find(|r| r.event == "upper_culmination").expect("row");
    assert!(upper_row.time_local.is_empty());
    assert_eq!(upper_row.note, "no culmination this day");

    // The day-edge maximum at 24:00 is higher than the transit, and must not be reported.
    let after = transit(date(2018, 8, 25)).expect("transit on the 25th");
    let expected = at(date(2018, 8, 25), "00:04:55");
    assert!(minutes_between(after.time, expected) < 2.0, "{}", after.time);
    assert!(after.is_above && after.converged);
}

#[test]
fn local_day_runs_from_local_midnight() {
    let observer = Observer::from_degrees(40.7127, -74.0059, -4.0);
    let day = LocalDay::new(date(2018, 8, 7), observer);
    // 04:00 UTC is local midnight.
    assert!((day.mjd_at(0.0) - (58_337.0 + 4.0 / 24.0)).abs() < 1e-9);
    assert!(day.jt_at(12.0) > day.anchor_jt());
    assert_eq!(day.local_datetime(6.5).expect("time"), at(date(2018, 8, 7), "06:30:00"));
}

#[test]
fn horizon_altitudes_per_object() {
    assert_eq!(ObjectType::Sun.horizon_altitude_deg(), -0.833);
    assert_eq!(ObjectType::Moon.horizon_altitude_deg(), 0.133);
    assert_eq!(ObjectType::Dot.horizon_altitude_deg(), -0.5667);
    assert_eq!("Nautical".parse::<TwilightKind>(), Ok(TwilightKind::Nautical));
    assert!("golden".parse::<TwilightKind>().is_err());
}
