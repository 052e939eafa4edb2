use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{cl, setup_test_db};

fn add_feed(db_path: &str, date: &str, ml: &str) {
    cl().args([
        "--db", db_path, "add", date, "09:00", "milk-feed", "--ml", ml, "--milk", "maternal",
    ])
    .assert()
    .success();
}

#[test]
fn test_trends_needs_a_full_week_for_the_average() {
    let db_path = setup_test_db("trends_week");

    cl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // 100 ml maternal per day for 8 days: 67 kcal/day, SMA settles at 67.0
    for day in 1..=8 {
        add_feed(&db_path, &format!("2024-01-{:02}", day), "100");
    }

    let assert = cl()
        .args(["--db", &db_path, "trends", "--at", "2024-01-08 23:00"])
        .assert()
        .success();

    let output = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let lines: Vec<&str> = output.lines().collect();

    // first data row (2024-01-01) has no average yet
    let first = lines
        .iter()
        .find(|l| l.contains("2024-01-01"))
        .expect("day 1 row");
    assert!(first.contains("--"));

    // from 2024-01-07 on the trailing week is complete
    let seventh = lines
        .iter()
        .find(|l| l.contains("2024-01-07"))
        .expect("day 7 row");
    assert!(seventh.contains("67.0"));
}

#[test]
fn test_trends_days_limit() {
    let db_path = setup_test_db("trends_days");

    cl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for day in 1..=5 {
        add_feed(&db_path, &format!("2024-01-{:02}", day), "100");
    }

    cl().args([
        "--db",
        &db_path,
        "trends",
        "--days",
        "2",
        "--at",
        "2024-01-05 23:00",
    ])
    .assert()
    .success()
    .stdout(contains("2024-01-05"))
    .stdout(contains("2024-01-01").not());
}

#[test]
fn test_trends_single_metric() {
    let db_path = setup_test_db("trends_metric");

    cl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_feed(&db_path, "2024-01-01", "100");

    cl().args([
        "--db",
        &db_path,
        "trends",
        "--metric",
        "pumped",
        "--at",
        "2024-01-01 23:00",
    ])
    .assert()
    .success()
    .stdout(contains("Pumped ml"))
    .stdout(contains("Kcal").not());
}

#[test]
fn test_trends_on_empty_database() {
    let db_path = setup_test_db("trends_empty");

    cl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cl().args(["--db", &db_path, "trends"])
        .assert()
        .success()
        .stdout(contains("No events recorded yet"));
}
