#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheet::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
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

/// Fresh, migrated database opened through the library.
pub fn open_test_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    DbPool::open_initialized(&db_path).expect("open test db")
}

pub fn init_db(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_entry(db_path: &str, date: &str, contractor: &str, from: &str, to: &str) {
    rts()
        .args([
            "--db",
            db_path,
            "add",
            date,
            "--contractor",
            contractor,
            "--contract",
            "CTR-1",
            "--from",
            from,
            "--to",
            to,
            "--desc",
            "development",
        ])
        .assert()
        .success();
}

/// Initialize DB and log a small dataset useful for many tests:
/// - #1 alice, week of 2025-09-01: Mon 8.0 + Wed 8.5
/// - #2 bob, week of 2025-09-15: Tue 8.0
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_entry(db_path, "2025-09-01", "alice", "9:00 AM", "5:00 PM");
    add_entry(db_path, "2025-09-03", "alice", "9:00 AM", "5:30 PM");
    add_entry(db_path, "2025-09-16", "bob", "10:00 AM", "6:00 PM");
}
