// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check whether `path` may be created or overwritten.
///
/// A missing file, or `force`, is accepted straight away; otherwise the user
/// is asked to confirm on stdin.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let stdin = io::stdin();
    confirm_overwrite(path, &mut stdin.lock(), &mut io::stdout())
}

fn confirm_overwrite<R: BufRead, W: Write>(path: &Path, input: &mut R, out: &mut W) -> AppResult<()> {
    warning(format!("The file '{}' already exists.", path.display()));

    write!(out, "Overwrite? [y/N]: ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "cancelled: '{}' not overwritten",
            path.display()
        )))
    }
}

