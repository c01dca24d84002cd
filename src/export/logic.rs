// src/export/logic.rs

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::list_timesheets;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TimesheetExport;
use crate::export::range::parse_range;
use crate::models::timesheet::TimesheetFilter;
use crate::models::timesheet_status::TimesheetStatus;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export timesheets as flat rows.
    ///
    /// - `file` must be an absolute path
    /// - `range`: `None`, `"all"` or a period accepted by [`parse_range`],
    ///   matched against the week start date
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        status: Option<TimesheetStatus>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let week_bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let filter = TimesheetFilter {
            contractor_id: None,
            status,
            week_bounds,
        };

        let rows: Vec<TimesheetExport> = list_timesheets(&pool.conn, &filter)?
            .iter()
            .map(TimesheetExport::from)
            .collect();

        if rows.is_empty() {
            warning("No timesheets found for the selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        audit(
            &pool.conn,
            "export",
            file,
            &format!("{} rows as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
