//! Integration tests for the `holiday` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn holiday() -> Command {
    Command::cargo_bin("holiday").unwrap()
}

#[test]
fn resolve_prints_a_bare_date() {
    holiday()
        .args(["resolve", "3rd Monday in January", "2024"])
        .assert()
        .success()
        .stdout("2024-01-15\n");
}

#[test]
fn resolve_applies_observance_shifts() {
    holiday()
        .args(["resolve", "July 4th Observance", "2026"])
        .assert()
        .success()
        .stdout("2026-07-03\n");
}

#[test]
fn resolve_accepts_offsets_as_part_of_the_rule() {
    holiday()
        .args(["resolve", "4th Thursday in November -1", "2024"])
        .assert()
        .success()
        .stdout("2024-11-27\n");
}

#[test]
fn resolve_json_echoes_the_rule_and_year() {
    let output = holiday()
        .args(["resolve", "Last Monday in May", "2024", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["config"], "Last Monday in May");
    assert_eq!(value["year"], 2024);
    assert_eq!(value["date"], "2024-05-27");
}

#[test]
fn resolve_surfaces_engine_errors_on_stderr() {
    holiday()
        .args(["resolve", "not a holiday", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized holiday rule"));

    holiday()
        .args(["resolve", "July 4th", "1969"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid year: 1969"));

    holiday()
        .args(["resolve", "February 30th", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date: 2024-02-30"));
}

#[test]
fn federal_lists_the_calendar_in_date_order() {
    holiday()
        .args(["federal", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-07-03  Independence Day"))
        .stdout(predicate::str::contains("2026-11-26  Thanksgiving Day"))
        .stdout(predicate::str::contains("2026-12-25  Christmas Day"));
}

#[test]
fn federal_json_is_an_array_of_dated_entries() {
    let output = holiday()
        .args(["federal", "2024", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 11);
    assert_eq!(entries[0]["description"], "New Year's Day");
    assert_eq!(entries[0]["date"], "2024-01-01");
    assert_eq!(entries[10]["description"], "Christmas Day");
    assert_eq!(entries[10]["config"], "December 25th Observance");
}

#[test]
fn federal_rejects_out_of_range_years() {
    holiday()
        .args(["federal", "2500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid year: 2500"));
}
