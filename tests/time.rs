use chrono::NaiveDate;
use sky_almanac::core::time::{
    CalendarKind, TimeError, civil_date, datetime_from_mjd, delta_t_seconds, gmst, mjd_from_civil,
    mjd_from_date, mjd_from_datetime, mjd_from_unix_millis,
};
use sky_almanac::core::{jt_from_mjd, mjd_from_jt};

#[test]
fn mjd_of_civil_dates() {
    let date = NaiveDate::from_ymd_opt(2018, 10, 30).expect("date");
    assert_eq!(mjd_from_date(&date), 58_421.0);

    let cases = [
        (CalendarKind::Gregorian, 2218, 10, 5, 7, 23, 12.0, 131_444.307_777_777_78),
        (CalendarKind::Gregorian, 1918, 2, 5, 7, 21, 12.0, 21_629.306_388_888_89),
        (CalendarKind::Gregorian, 718, 2, 5, 7, 21, 12.0, -416_661.693_611_111_1),
        (CalendarKind::Julian, 718, 2, 5, 7, 21, 12.0, -416_657.693_611_111_1),
    ];
    for (kind, y, m, d, h, mi, s, expected) in cases {
        let mjd = mjd_from_civil(kind, y, m, d, h, mi, s);
        assert!(
            (mjd - expected).abs() < 1e-7,
            "{kind:?} {y}-{m}-{d}: {mjd} vs {expected}"
        );
    }
}

#[test]
fn dates_before_the_common_era() {
    // JD 0 is noon of -4712-01-01 Julian, which is -4713-11-24 proleptic Gregorian.
    let jd_zero = -2_400_000.5;
    assert_eq!(mjd_from_civil(CalendarKind::Julian, -4712, 1, 1, 12, 0, 0.0), jd_zero);
    assert_eq!(mjd_from_civil(CalendarKind::Gregorian, -4713, 11, 24, 12, 0, 0.0), jd_zero);

    let march = NaiveDate::from_ymd_opt(-1, 3, 1).expect("date");
    assert_eq!(mjd_from_date(&march), -679_247.0);

    for (y, m, d) in [(-1, 3, 1), (-100, 1, 15), (-500, 6, 30), (0, 2, 29), (1, 1, 1), (2018, 3, 1)] {
        let date = NaiveDate::from_ymd_opt(y, m, d).expect("date");
        let back = datetime_from_mjd(mjd_from_date(&date)).expect("in range");
        assert_eq!(back.date(), date, "{y}-{m}-{d}");
    }
}

#[test]
fn mjd_of_unix_millis() {
    let mjd = mjd_from_unix_millis(1_530_722_641_000);
    assert!((mjd - 58_303.697_233_796_294).abs() < 1e-9, "mjd {mjd}");
}

#[test]
fn datetime_round_trip_to_the_millisecond() {
    let dt = NaiveDate::from_ymd_opt(2018, 8, 7)
        .and_then(|d| d.and_hms_milli_opt(21, 14, 35, 250))
        .expect("datetime");
    let back = datetime_from_mjd(mjd_from_datetime(&dt)).expect("in range");
    assert_eq!(back, dt);
}

#[test]
fn datetime_out_of_range_is_an_error() {
    assert!(matches!(datetime_from_mjd(f64::NAN), Err(TimeError::OutOfRange(_))));
    assert!(matches!(datetime_from_mjd(1e15), Err(TimeError::OutOfRange(_))));
    assert!(matches!(
        civil_date(2018, 2, 30),
        Err(TimeError::InvalidDate { year: 2018, month: 2, day: 30 })
    ));
}

#[test]
fn julian_centuries_round_trip() {
    assert_eq!(jt_from_mjd(51_544.5), 0.0);
    let mjd = 58_421.25;
    assert!((mjd_from_jt(jt_from_mjd(mjd)) - mjd).abs() < 1e-9);
}

#[test]
fn delta_t_follows_historical_values() {
    let cases = [
        (2000, 1, 63.8, 0.1),
        (1950, 1, 29.0, 0.1),
        (2010, 1, 66.07, 1.0),
        (1800, 1, 14.0, 1.0),
        (1600, 1, 120.0, 20.0),
        (1000, 1, 1570.0, 55.0),
        (0, 1, 10_580.0, 260.0),
        (-500, 1, 17_190.0, 430.0),
    ];
    for (year, month, expected, tol) in cases {
        let dt = delta_t_seconds(year, month);
        assert!(
            (dt - expected).abs() <= tol,
            "ΔT({year}/{month}) = {dt}, expected {expected} ± {tol}"
        );
    }
}

#[test]
fn sidereal_time_at_j2000() {
    // 18h41m50.5484s at 2000-01-01 12:00 UT.
    let expected = 18.697_374_558 / 24.0 * std::f64::consts::TAU;
    let theta = gmst(51_544.5);
    assert!((theta - expected).abs() < 1e-6, "gmst {theta}");
    let next_day = gmst(51_545.5);
    assert!(
        (next_day - theta - 0.017_202_791).abs() < 1e-5,
        "sidereal gain per day {}",
        next_day - theta
    );
}
