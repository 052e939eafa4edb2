#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cl() -> Command {
    cargo_bin_cmd!("carelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_carelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    cl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // a bottle of maternal milk and a formula one, plus some ostomy care
    cl().args([
        "--db", db_path, "add", "2024-01-01", "08:00", "milk-feed", "--ml", "100", "--milk",
        "maternal",
    ])
    .assert()
    .success();

    cl().args([
        "--db", db_path, "add", "2024-01-01", "14:00", "milk-feed", "--ml", "100", "--milk",
        "puramino",
    ])
    .assert()
    .success();

    cl().args([
        "--db",
        db_path,
        "add",
        "2024-01-01",
        "09:30",
        "stoma-bridge",
        "--ml",
        "25",
    ])
    .assert()
    .success();

    cl().args([
        "--db",
        db_path,
        "add",
        "2024-01-01",
        "10:15",
        "bowel-movement",
        "--bm",
        "yes",
    ])
    .assert()
    .success();
}
