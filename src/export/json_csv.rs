// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{TimesheetExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pretty-printed JSON array.
pub(crate) fn write_json<W: Write>(rows: &[TimesheetExport], mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// CSV with a header row taken from the serde field names.
pub(crate) fn write_csv<W: Write>(rows: &[TimesheetExport], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }
    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_json(rows: &[TimesheetExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));
    write_json(rows, BufWriter::new(File::create(path)?))?;
    notify_export_success("JSON", path, rows.len());
    Ok(())
}

pub(crate) fn export_csv(rows: &[TimesheetExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));
    write_csv(rows, BufWriter::new(File::create(path)?))?;
    notify_export_success("CSV", path, rows.len());
    Ok(())
}
