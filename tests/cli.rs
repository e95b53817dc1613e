use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use sky_almanac::export::EventRow;

#[test]
fn riseset_writes_csv_for_catalog_observer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("ny.csv");

    Command::cargo_bin("riseset")
        .expect("riseset bin")
        .args([
            "--observers",
            "data/observers.yaml",
            "--observer",
            "new york",
            "--date",
            "2018-08-07",
            "--days",
            "2",
            "--output",
            out.to_str().expect("utf8 path"),
        ])
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(&out).expect("csv output");
    let rows: Vec<EventRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("rows");
    // Rise, set, twilight begin/end, and two culminations per day.
    assert_eq!(rows.len(), 12);
    assert!(rows.iter().all(|r| r.observer == "New York"));
    let rise = rows
        .iter()
        .find(|r| r.date == "2018-08-07" && r.event == "rise")
        .expect("rise row");
    assert!(rise.time_local.starts_with("05:5"), "rise at {}", rise.time_local);
    assert!(rows.iter().any(|r| r.event == "civil_twilight_end"));
    assert!(rows.iter().any(|r| r.date == "2018-08-08"));
}

#[test]
fn riseset_json_for_coordinates() {
    let output = Command::cargo_bin("riseset")
        .expect("riseset bin")
        .args([
            "--lat",
            "-33.865",
            "--lon",
            "151.209444",
            "--utc-offset",
            "10",
            "--date",
            "2018-08-24",
            "--body",
            "sun-fast",
            "--twilight",
            "astronomical",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json stdout");
    assert_eq!(value["count"], 6);
    assert_eq!(value["events"][0]["observer"], "-33.8650,151.2094");
    assert_eq!(value["events"][2]["event"], "astronomical_twilight_begin");
    let set = value["events"][1]["time_local"].as_str().expect("set time");
    assert!(set.starts_with("17:3"), "set at {set}");
}

#[test]
fn riseset_tabulates_the_moon() {
    let output = Command::cargo_bin("riseset")
        .expect("riseset bin")
        .args([
            "--observers",
            "data/observers.yaml",
            "--observer",
            "New York",
            "--date",
            "2018-08-07",
            "--body",
            "moon",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json stdout");
    // Rise, set, and both culminations; twilight belongs to the Sun.
    assert_eq!(value["count"], 4);
    assert_eq!(value["events"][0]["event"], "rise");
    let rise = value["events"][0]["time_local"].as_str().expect("rise time");
    assert!(rise.starts_with("01:4") || rise.starts_with("01:50"), "moonrise at {rise}");
    let set = value["events"][1]["time_local"].as_str().expect("set time");
    assert!(set.starts_with("16:4"), "moonset at {set}");
}

#[test]
fn riseset_rejects_unknown_observer() {
    Command::cargo_bin("riseset")
        .expect("riseset bin")
        .args([
            "--observers",
            "data/observers.yaml",
            "--observer",
            "Atlantis",
            "--date",
            "2018-08-07",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Atlantis"));
}

#[test]
fn riseset_requires_a_location() {
    Command::cargo_bin("riseset")
        .expect("riseset bin")
        .args(["--date", "2018-08-07", "--lat", "40.0"])
        .assert()
        .failure();
}

#[test]
fn riseset_honours_settings_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("settings.toml");
    fs::write(&settings, "twilight = \"nautical\"\n").expect("write settings");

    Command::cargo_bin("riseset")
        .expect("riseset bin")
        .args([
            "--lat",
            "40.7127",
            "--lon",
            "-74.0059",
            "--utc-offset",
            "-4",
            "--date",
            "2018-08-07",
            "--settings",
            settings.to_str().expect("utf8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("nautical_twilight_begin"));
}

#[test]
fn seasons_prints_four_events() {
    Command::cargo_bin("seasons")
        .expect("seasons bin")
        .args(["--year", "2018"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("March equinox")
                .and(predicate::str::contains("2018-06-21 10:"))
                .and(predicate::str::contains("December solstice"))
                .and(predicate::str::contains("not converged").not()),
        );
}

#[test]
fn seasons_reads_budget_from_settings_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("settings.toml");
    fs::write(
        &settings,
        "precession = \"VONDRAK2011\"\nequinox_max_iterations = 1\n",
    )
    .expect("write settings");
    let path = settings.to_str().expect("utf8 path");

    Command::cargo_bin("seasons")
        .expect("seasons bin")
        .args(["--year", "2018", "--settings", path])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not converged)"));

    fs::write(&settings, "precession = \"IAU1999\"\n").expect("write settings");
    Command::cargo_bin("seasons")
        .expect("seasons bin")
        .args(["--year", "2018", "--settings", path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IAU1999"));
}

#[test]
fn library_reports_version() {
    assert_eq!(sky_almanac::version(), env!("CARGO_PKG_VERSION"));
}
