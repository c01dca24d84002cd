use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::timesheet_status::TimesheetStatus;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TIMESHEETS PER STATUS
    //
    let total: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM timesheets", [], |row| row.get(0))?;
    println!(
        "{}• Timesheets:{} {}{}{}",
        CYAN, RESET, GREEN, total, RESET
    );

    for status in [
        TimesheetStatus::Draft,
        TimesheetStatus::Submitted,
        TimesheetStatus::Approved,
        TimesheetStatus::Rejected,
    ] {
        let n = crate::db::queries::count_by_status(&pool.conn, status)?;
        println!("    {:<10} {}", status.to_db_str(), n);
    }

    //
    // 3) WEEK RANGE
    //
    let first_week: Option<String> = pool
        .conn
        .query_row("SELECT MIN(week_start_date) FROM timesheets", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    let last_week: Option<String> = pool
        .conn
        .query_row("SELECT MAX(week_start_date) FROM timesheets", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    let fmt = |w: Option<String>| w.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Weeks:{}", CYAN, RESET);
    println!("    from: {}", fmt(first_week));
    println!("    to:   {}", fmt(last_week));

    //
    // 4) ONBOARDING SUBMISSIONS
    //
    let submissions: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM onboarding_submissions",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Onboarding submissions:{} {}",
        CYAN, RESET, submissions
    );

    //
    // 5) SCHEMA VERSION
    //
    let versions = applied_versions(&pool.conn)?;
    let last = versions
        .last()
        .cloned()
        .unwrap_or_else(|| format!("{GREY}none{RESET}"));
    println!(
        "{}• Migrations:{} {} applied (latest: {})",
        CYAN,
        RESET,
        versions.len(),
        last
    );

    println!();
    Ok(())
}
