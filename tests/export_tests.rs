use chrono::NaiveDate;
use predicates::str::contains;
use rtimesheet::export::parse_range;
use std::fs;
use std::io::Read;
use std::path::Path;

mod common;
use common::{init_db_with_data, rts, setup_test_db, temp_out};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_parse_range_forms() {
    assert_eq!(parse_range("2025").unwrap(), (d("2025-01-01"), d("2025-12-31")));
    assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
    assert_eq!(parse_range("2025-09-03").unwrap(), (d("2025-09-03"), d("2025-09-03")));
    assert_eq!(
        parse_range("2025-01:2025-03").unwrap(),
        (d("2025-01-01"), d("2025-03-31"))
    );
}

#[test]
fn test_parse_range_rejects_bad_forms() {
    assert!(parse_range("2025:2025-03").is_err());
    assert!(parse_range("2025-13").is_err());
    assert!(parse_range("2025-03-10:2025-03-01").is_err());
    assert!(parse_range("last week").is_err());
}

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    let out = temp_out("export_csv_all", "csv");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("id,contractor_id,contract_id,week_start_date"));
    assert!(header.contains("total_hours"));
    assert_eq!(lines.count(), 2);
    assert!(content.contains("alice,CTR-1,2025-09-01,2025-09-07,8.0,0.0,8.5"));
}

#[test]
fn test_export_json_with_range_and_status() {
    let db_path = setup_test_db("export_json_range");
    let out = temp_out("export_json_range", "json");
    init_db_with_data(&db_path);

    rts().args(["--db", &db_path, "submit", "2"]).assert().success();

    rts()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2025-09",
            "--status", "submitted",
        ])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["contractor_id"], "bob");
    assert_eq!(rows[0]["status"], "submitted");
    assert_eq!(rows[0]["total_hours"], 8.0);
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2020"])
        .assert()
        .success()
        .stdout(contains("No timesheets found"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db_with_data(&db_path);
    fs::write(&out, "old").unwrap();

    rts()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    rts()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("id,"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "sqlite");
    let zip = temp_out("backup_zip", "zip");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("compressed"));

    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&out).exists());

    rts()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("backup"));
}

#[test]
fn test_backup_to_zip_name_keeps_database() {
    let db_path = setup_test_db("backup_zip_name");
    let zip = temp_out("backup_zip_name", "zip");
    init_db_with_data(&db_path);
    let db_bytes = fs::read(&db_path).unwrap();

    rts()
        .args(["--db", &db_path, "backup", "--file", &zip, "--compress"])
        .assert()
        .success();

    let mut archive = zip::ZipArchive::new(fs::File::open(&zip).unwrap()).unwrap();
    assert_eq!(archive.len(), 1);
    let mut entry = archive.by_index(0).unwrap();
    assert_eq!(entry.name(), "backup_zip_name_rtimesheet.sqlite");
    assert_eq!(entry.size(), db_bytes.len() as u64);

    let mut restored = Vec::new();
    entry.read_to_end(&mut restored).unwrap();
    assert!(restored.starts_with(b"SQLite format 3"));
}
