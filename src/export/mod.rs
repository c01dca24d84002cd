// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod range;

pub use fs_utils::ensure_writable;
pub use logic::ExportLogic;
pub use model::TimesheetExport;
pub use range::parse_range;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path, rows: usize) {
    success(format!("{label} export completed: {} ({rows} rows)", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
