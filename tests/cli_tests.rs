use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_entry, init_db, init_db_with_data, rts, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied"))
        .stdout(contains("initialization completed"));

    rts()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Migrations:"));
}

#[test]
fn test_add_reports_hours_and_week() {
    let db_path = setup_test_db("cli_add");
    init_db(&db_path);

    rts()
        .args([
            "--db", &db_path, "add", "2025-09-03", "--contractor", "alice", "--contract", "CTR-1",
            "--from", "9:00 AM", "--to", "5:30 PM",
        ])
        .assert()
        .success()
        .stdout(contains("Logged 8.5h on Wednesday 2025-09-03"))
        .stdout(contains("2025-09-01 → 2025-09-07"));
}

#[test]
fn test_add_rejects_bad_input() {
    let db_path = setup_test_db("cli_add_bad");
    init_db(&db_path);

    rts()
        .args([
            "--db", &db_path, "add", "2025-09-03", "--contractor", "alice", "--contract", "CTR-1",
            "--from", "9:00", "--to", "5:30 PM",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: '9:00'"));

    rts()
        .args([
            "--db", &db_path, "add", "2025-09-03", "--contractor", "alice", "--contract", "CTR-1",
            "--from", "9:00 AM", "--to", "9:00 AM",
        ])
        .assert()
        .failure()
        .stderr(contains("Zero-length time range"));

    rts()
        .args([
            "--db", &db_path, "add", "2025-13-03", "--contractor", "alice", "--contract", "CTR-1",
            "--from", "9:00 AM", "--to", "5:00 PM",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_calc_previews_without_db() {
    let db_path = setup_test_db("cli_calc");

    rts()
        .args(["--db", &db_path, "calc", "--from", "10:00 PM", "--to", "6:00 AM", "--date", "2025-09-05"])
        .assert()
        .success()
        .stdout(contains("8.0h"))
        .stdout(contains("Friday"))
        .stdout(contains("2025-09-01 → 2025-09-07"));

    assert!(!std::path::Path::new(&db_path).exists());
}

#[test]
fn test_list_filters_and_pending_footer() {
    let db_path = setup_test_db("cli_list");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("alice"))
        .stdout(contains("bob"))
        .stdout(contains("16.5"))
        .stdout(contains("2 timesheet(s)"));

    rts()
        .args(["--db", &db_path, "list", "--contractor", "bob"])
        .assert()
        .success()
        .stdout(contains("bob").and(contains("alice").not()));

    rts()
        .args(["--db", &db_path, "submit", "2"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "list", "--status", "submitted"])
        .assert()
        .success()
        .stdout(contains("1 timesheet(s)"))
        .stdout(contains("1 pending approval"));

    rts()
        .args(["--db", &db_path, "list", "--period", "2025-09-01:2025-09-07"])
        .assert()
        .success()
        .stdout(contains("alice").and(contains("bob").not()));

    rts()
        .args(["--db", &db_path, "list", "--status", "lost"])
        .assert()
        .failure()
        .stderr(contains("Invalid timesheet status"));
}

#[test]
fn test_review_commands() {
    let db_path = setup_test_db("cli_review");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "approve", "1", "--by", "manager"])
        .assert()
        .failure()
        .stderr(contains("from 'draft' to 'approved'"));

    rts()
        .args(["--db", &db_path, "submit", "1"])
        .assert()
        .success()
        .stdout(contains("submitted for approval"));

    rts()
        .args(["--db", &db_path, "reject", "1", "--reason", "missing Friday"])
        .assert()
        .success();

    // a rejected sheet is final
    rts()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-09-05",
            "--contractor",
            "alice",
            "--contract",
            "CTR-1",
            "--from",
            "9:00 AM",
            "--to",
            "1:00 PM",
        ])
        .assert()
        .failure()
        .stderr(contains("can no longer be edited"));

    rts()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Rejected"))
        .stdout(contains("16.5"))
        .stdout(contains("missing Friday"));

    rts()
        .args(["--db", &db_path, "submit", "1"])
        .assert()
        .failure()
        .stderr(contains("from 'rejected' to 'submitted'"));

    rts()
        .args(["--db", &db_path, "submit", "2"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "approve", "2", "--by", "manager"])
        .assert()
        .success()
        .stdout(contains("approved by manager"));

    rts()
        .args(["--db", &db_path, "show", "99"])
        .assert()
        .failure()
        .stderr(contains("Timesheet #99 not found"));

    rts()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("submit"))
        .stdout(contains("reject"))
        .stdout(contains("approve"));
}
