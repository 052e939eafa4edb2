use predicates::str::contains;
use std::fs;

mod common;
use common::{cl, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv_full_dataset() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv", "csv");

    cl().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let mut lines = content.lines();

    // header in store column order
    assert_eq!(
        lines.next().unwrap(),
        "id,date,time,category,milk_volume_ml,milk_type,bridged_volume_ml,bowel_movement,pumped_volume_ml,breastfeeding_min,source"
    );
    assert!(content.contains("milk_feed"));
    assert!(content.contains("stoma_bridge"));
    // 4 data rows from the fixture
    assert_eq!(content.lines().count(), 5);
}

#[test]
fn test_export_round_trips_appended_record() {
    let db_path = setup_test_db("export_roundtrip");

    cl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // comma decimal in, normalized dot decimal out
    cl().args([
        "--db", &db_path, "add", "2024-01-01", "08:00", "milk-feed", "--ml", "87,5", "--milk",
        "maternal",
    ])
    .assert()
    .success();

    let out = temp_out("export_roundtrip", "csv");

    cl().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("2024-01-01,08:00,milk_feed,87.5,maternal"));
}

#[test]
fn test_export_json_format() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_json", "json");

    cl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(4));
    assert_eq!(parsed[0]["category"], "milk_feed");
}

#[test]
fn test_export_with_range_filter() {
    let db_path = setup_test_db("export_range");
    init_db_with_data(&db_path);

    cl().args([
        "--db", &db_path, "add", "2024-02-05", "07:00", "bag-change",
    ])
    .assert()
    .success();

    let out = temp_out("export_range", "csv");

    cl().args([
        "--db", &db_path, "export", "--file", &out, "--range", "2024-02", "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("bag_change"));
    assert!(!content.contains("milk_feed"));
}

#[test]
fn test_export_empty_range_warns() {
    let db_path = setup_test_db("export_empty");
    init_db_with_data(&db_path);

    let out = temp_out("export_empty", "csv");

    cl().args([
        "--db", &db_path, "export", "--file", &out, "--range", "2023", "--force",
    ])
    .assert()
    .success()
    .stdout(contains("No events found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    cl().args([
        "--db",
        &db_path,
        "export",
        "--file",
        "relative_out.csv",
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}
