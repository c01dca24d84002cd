use crate::errors::{AppError, AppResult};
use crate::models::submission::Submission;
use crate::models::timesheet::{Timesheet, TimesheetFilter};
use crate::models::timesheet_status::TimesheetStatus;
use crate::models::week_hours::WeekHours;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params};

const TIMESHEET_COLUMNS: &str = "id, contractor_id, contract_id, week_start_date, week_end_date,
     monday_hours, tuesday_hours, wednesday_hours, thursday_hours,
     friday_hours, saturday_hours, sunday_hours,
     task_description, status, rejection_reason, approved_by,
     created_at, updated_at, submitted_at, approved_at";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn get_date(row: &Row, idx: usize) -> Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| conversion_error(idx, AppError::InvalidDate(raw)))
}

pub fn map_row(row: &Row) -> Result<Timesheet> {
    let status_str: String = row.get(13)?;
    let status = TimesheetStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(13, AppError::InvalidStatus(status_str.clone())))?;

    Ok(Timesheet {
        id: row.get(0)?,
        contractor_id: row.get(1)?,
        contract_id: row.get(2)?,
        week_start: get_date(row, 3)?,
        week_end: get_date(row, 4)?,
        hours: WeekHours {
            monday: row.get(5)?,
            tuesday: row.get(6)?,
            wednesday: row.get(7)?,
            thursday: row.get(8)?,
            friday: row.get(9)?,
            saturday: row.get(10)?,
            sunday: row.get(11)?,
        },
        task_description: row.get(12)?,
        status,
        rejection_reason: row.get(14)?,
        approved_by: row.get(15)?,
        created_at: row.get(16)?,
        updated_at: row.get(17)?,
        submitted_at: row.get(18)?,
        approved_at: row.get(19)?,
    })
}

pub fn load_timesheet(conn: &Connection, id: i64) -> AppResult<Option<Timesheet>> {
    let sql = format!("SELECT {TIMESHEET_COLUMNS} FROM timesheets WHERE id = ?1");
    let ts = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(ts)
}

/// Timesheet for the (contractor, contract, week) key, if one exists.
pub fn find_by_week(
    conn: &Connection,
    contractor_id: &str,
    contract_id: &str,
    week_start: &NaiveDate,
) -> AppResult<Option<Timesheet>> {
    let sql = format!(
        "SELECT {TIMESHEET_COLUMNS} FROM timesheets
         WHERE contractor_id = ?1 AND contract_id = ?2 AND week_start_date = ?3"
    );
    let ts = conn
        .query_row(
            &sql,
            params![contractor_id, contract_id, week_start.format("%Y-%m-%d").to_string()],
            map_row,
        )
        .optional()?;
    Ok(ts)
}

pub fn insert_timesheet(conn: &Connection, ts: &Timesheet) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO timesheets (
            contractor_id, contract_id, week_start_date, week_end_date,
            monday_hours, tuesday_hours, wednesday_hours, thursday_hours,
            friday_hours, saturday_hours, sunday_hours,
            task_description, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            ts.contractor_id,
            ts.contract_id,
            ts.week_start.format("%Y-%m-%d").to_string(),
            ts.week_end.format("%Y-%m-%d").to_string(),
            ts.hours.monday,
            ts.hours.tuesday,
            ts.hours.wednesday,
            ts.hours.thursday,
            ts.hours.friday,
            ts.hours.saturday,
            ts.hours.sunday,
            ts.task_description,
            ts.status.to_db_str(),
            ts.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update every mutable column of a timesheet (keys and created_at stay).
pub fn update_timesheet(conn: &Connection, ts: &Timesheet) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE timesheets
         SET monday_hours = ?1, tuesday_hours = ?2, wednesday_hours = ?3,
             thursday_hours = ?4, friday_hours = ?5, saturday_hours = ?6,
             sunday_hours = ?7, task_description = ?8, status = ?9,
             rejection_reason = ?10, approved_by = ?11, updated_at = ?12,
             submitted_at = ?13, approved_at = ?14
         WHERE id = ?15",
        params![
            ts.hours.monday,
            ts.hours.tuesday,
            ts.hours.wednesday,
            ts.hours.thursday,
            ts.hours.friday,
            ts.hours.saturday,
            ts.hours.sunday,
            ts.task_description,
            ts.status.to_db_str(),
            ts.rejection_reason,
            ts.approved_by,
            ts.updated_at,
            ts.submitted_at,
            ts.approved_at,
            ts.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::TimesheetNotFound(ts.id));
    }
    Ok(())
}

pub fn list_timesheets(conn: &Connection, filter: &TimesheetFilter) -> AppResult<Vec<Timesheet>> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(c) = &filter.contractor_id {
        clauses.push("contractor_id = ?");
        values.push(Box::new(c.clone()));
    }
    if let Some(s) = filter.status {
        clauses.push("status = ?");
        values.push(Box::new(s.to_db_str()));
    }
    if let Some((from, to)) = filter.week_bounds {
        clauses.push("week_start_date BETWEEN ? AND ?");
        values.push(Box::new(from.format("%Y-%m-%d").to_string()));
        values.push(Box::new(to.format("%Y-%m-%d").to_string()));
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", clauses.join(" AND "))
    };

    let sql = format!(
        "SELECT {TIMESHEET_COLUMNS} FROM timesheets {where_sql}
         ORDER BY week_start_date DESC, contractor_id ASC, id ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        rusqlite::params_from_iter(values.iter().map(|v| v.as_ref())),
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_by_status(conn: &Connection, status: TimesheetStatus) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM timesheets WHERE status = ?1",
        [status.to_db_str()],
        |row| row.get(0),
    )?;
    Ok(n)
}

pub fn insert_submission(
    conn: &Connection,
    flow: &str,
    payload: &serde_json::Value,
    created_at: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO onboarding_submissions (flow, payload, status, created_at)
         VALUES (?1, ?2, 'pending', ?3)",
        params![flow, payload.to_string(), created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

fn map_submission(row: &Row) -> Result<Submission> {
    let raw: String = row.get(2)?;
    let payload = serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(Submission {
        id: row.get(0)?,
        flow: row.get(1)?,
        payload,
        status: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn list_submissions(conn: &Connection, flow: Option<&str>) -> AppResult<Vec<Submission>> {
    let mut stmt = conn.prepare(
        "SELECT id, flow, payload, status, created_at
         FROM onboarding_submissions
         WHERE ?1 IS NULL OR flow = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([flow], map_submission)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
