use predicates::str::contains;

mod common;
use common::{cl, init_db_with_data, setup_test_db};

#[test]
fn test_status_snapshot_last_24h() {
    let db_path = setup_test_db("status_24h");
    init_db_with_data(&db_path);

    cl().args(["--db", &db_path, "status", "--at", "2024-01-01 20:00"])
        .assert()
        .success()
        .stdout(contains("200 ml"))
        .stdout(contains("139 kcal"))
        .stdout(contains("(50% maternal)"))
        .stdout(contains("25 ml"))
        .stdout(contains("Bowel movements"));
}

#[test]
fn test_status_without_emptying_reports_none_recorded() {
    let db_path = setup_test_db("status_none");
    init_db_with_data(&db_path);

    cl().args(["--db", &db_path, "status", "--at", "2024-01-01 20:00"])
        .assert()
        .success()
        .stdout(contains("none recorded"));
}

#[test]
fn test_status_elapsed_since_last_emptying() {
    let db_path = setup_test_db("status_emptying");
    init_db_with_data(&db_path);

    // an emptying three days before "now": outside every window, still found
    cl().args([
        "--db",
        &db_path,
        "add",
        "2024-01-01",
        "07:30",
        "reservoir-empty",
    ])
    .assert()
    .success();

    cl().args(["--db", &db_path, "status", "--at", "2024-01-04 07:30"])
        .assert()
        .success()
        .stdout(contains("3d 0h ago"));
}

#[test]
fn test_status_today_mode_uses_calendar_day() {
    let db_path = setup_test_db("status_today");
    init_db_with_data(&db_path);

    // 2024-01-02 02:00 is within 24 h of the January 1st feeds, but they
    // belong to another calendar day.
    cl().args([
        "--db",
        &db_path,
        "status",
        "--today",
        "--at",
        "2024-01-02 02:00",
    ])
    .assert()
    .success()
    .stdout(contains("(0% maternal)"));
}

#[test]
fn test_status_future_event_warns_but_succeeds() {
    let db_path = setup_test_db("status_future");
    init_db_with_data(&db_path);

    // recorded ahead of time
    cl().args([
        "--db", &db_path, "add", "2024-03-01", "08:00", "milk-feed", "--ml", "500", "--milk",
        "maternal",
    ])
    .assert()
    .success();

    cl().args(["--db", &db_path, "status", "--at", "2024-01-01 20:00"])
        .assert()
        .success()
        .stdout(contains("is in the future"))
        // the 500 ml feed must not leak into the totals
        .stdout(contains("200 ml"));
}

#[test]
fn test_status_malformed_row_is_skipped_with_warning() {
    let db_path = setup_test_db("status_malformed");
    init_db_with_data(&db_path);

    // a hand-edit broke the volume of one row
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute(
        "INSERT INTO events (date, time, category, milk_volume_ml, milk_type, created_at)
         VALUES ('2024-01-01', '18:00', 'milk_feed', 'a lot', 'maternal', '2024-01-01T18:00:00')",
        [],
    )
    .expect("insert row");

    cl().args(["--db", &db_path, "status", "--at", "2024-01-01 20:00"])
        .assert()
        .success()
        .stdout(contains("skipped"))
        .stdout(contains("200 ml"));
}

#[test]
fn test_status_on_empty_database() {
    let db_path = setup_test_db("status_empty");

    cl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cl().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("No events recorded yet"));
}

#[test]
fn test_status_reads_comma_decimal_volumes() {
    let db_path = setup_test_db("status_comma");

    cl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cl().args([
        "--db", &db_path, "add", "2024-01-01", "08:00", "milk-feed", "--ml", "87,5", "--milk",
        "maternal",
    ])
    .assert()
    .success();

    cl().args(["--db", &db_path, "status", "--at", "2024-01-01 09:00"])
        .assert()
        .success()
        .stdout(contains("87.5 ml"));
}
