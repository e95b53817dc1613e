use chrono::NaiveDateTime;
use sky_almanac::almanac::season_report;
use sky_almanac::core::mjd_from_jt;
use sky_almanac::core::time::mjd_from_datetime;
use sky_almanac::ephemeris::kepler::simon_j2000;
use sky_almanac::ephemeris::{Planet, PositionEphemeris};
use sky_almanac::events::{Season, SeasonSettings, find_equinox_solstice};
use sky_almanac::frames::PrecessionModel;

fn utc(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M").expect("timestamp")
}

#[test]
fn equinoxes_and_solstices_of_2018() {
    let events = season_report(2018, PrecessionModel::Iau1976, &SeasonSettings::default())
        .expect("season search");
    let expected = [
        (Season::MarchEquinox, "2018-03-20 16:15"),
        (Season::JuneSolstice, "2018-06-21 10:07"),
        (Season::SeptemberEquinox, "2018-09-23 01:54"),
        (Season::DecemberSolstice, "2018-12-21 22:22"),
    ];
    assert_eq!(events.len(), expected.len());
    for (event, (season, time)) in events.iter().zip(expected) {
        assert_eq!(event.season, season);
        assert!(event.converged, "{season} did not converge");
        let minutes = (event.time - utc(time)).num_seconds().abs() as f64 / 60.0;
        assert!(minutes < 10.0, "{season}: {} vs {time}", event.time);
    }
}

#[test]
fn single_search_leaves_session_near_the_event() {
    let mut session = PositionEphemeris::new(PrecessionModel::Iau2006, simon_j2000(Planet::Earth));
    let event = find_equinox_solstice(
        &mut session,
        2018,
        Season::JuneSolstice,
        &SeasonSettings::default(),
    )
    .expect("solstice");
    assert!(event.converged);
    assert!(event.iterations > 1);
    let jt0 = session.jt0().expect("anchored");
    // June 2018 lies about 0.185 Julian centuries after J2000.
    assert!((jt0 - 0.1847).abs() < 0.001, "anchor {jt0}");
    let drift = mjd_from_jt(jt0) - mjd_from_datetime(&event.time);
    assert!(drift.abs() < 1.0, "anchor {drift} d from the solstice");
}

#[test]
fn every_search_ends_anchored_within_a_day() {
    // Each search starts on the first of its month, weeks before the event.
    for season in Season::ALL {
        let mut session =
            PositionEphemeris::new(PrecessionModel::Iau1976, simon_j2000(Planet::Earth));
        let event = find_equinox_solstice(&mut session, 2018, season, &SeasonSettings::default())
            .expect("season");
        let anchor = mjd_from_jt(session.jt0().expect("anchored"));
        let drift = anchor - mjd_from_datetime(&event.time);
        assert!(drift.abs() < 1.0, "{season}: anchor {drift} d from the event");
    }
}

#[test]
fn exhausted_iterations_are_reported() {
    let settings = SeasonSettings {
        precision_seconds: 0.1,
        max_iterations: 1,
    };
    let events =
        season_report(2018, PrecessionModel::Iau1976, &settings).expect("season search");
    assert!(events.iter().all(|e| !e.converged && e.iterations == 1));
}

#[test]
fn season_targets() {
    assert_eq!(Season::MarchEquinox.month(), 3);
    assert_eq!(Season::DecemberSolstice.month(), 12);
    assert_eq!(Season::SeptemberEquinox.target_longitude(), std::f64::consts::PI);
    assert_eq!(Season::JuneSolstice.to_string(), "June solstice");
}
