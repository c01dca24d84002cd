use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// A schema change applied at most once; applied versions are recorded in
/// the `log` table as `migration_applied` rows.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250901_0001_create_timesheets",
        description: "Created timesheets table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS timesheets (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            contractor_id    TEXT NOT NULL,
            contract_id      TEXT NOT NULL,
            week_start_date  TEXT NOT NULL,
            week_end_date    TEXT NOT NULL,
            monday_hours     REAL NOT NULL DEFAULT 0,
            tuesday_hours    REAL NOT NULL DEFAULT 0,
            wednesday_hours  REAL NOT NULL DEFAULT 0,
            thursday_hours   REAL NOT NULL DEFAULT 0,
            friday_hours     REAL NOT NULL DEFAULT 0,
            saturday_hours   REAL NOT NULL DEFAULT 0,
            sunday_hours     REAL NOT NULL DEFAULT 0,
            task_description TEXT NOT NULL DEFAULT '',
            status           TEXT NOT NULL DEFAULT 'draft'
                             CHECK(status IN ('draft','submitted','approved','rejected')),
            rejection_reason TEXT,
            approved_by      TEXT,
            created_at       TEXT NOT NULL,
            updated_at       TEXT,
            submitted_at     TEXT,
            approved_at      TEXT,
            UNIQUE(contractor_id, contract_id, week_start_date)
        );

        CREATE INDEX IF NOT EXISTS idx_timesheets_contractor ON timesheets(contractor_id, week_start_date);
        CREATE INDEX IF NOT EXISTS idx_timesheets_status ON timesheets(status);
        "#,
    },
    Migration {
        version: "20250915_0002_create_onboarding_submissions",
        description: "Created onboarding_submissions table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS onboarding_submissions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            flow        TEXT NOT NULL,
            payload     TEXT NOT NULL,
            status      TEXT NOT NULL DEFAULT 'pending',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_onboarding_flow ON onboarding_submissions(flow);
        "#,
    },
];

/// Ensure that the `log` table exists: migrations are tracked inside it.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Versions already recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;

    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}
