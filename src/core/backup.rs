use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally replacing the copy with a zip.
    /// Returns the path of the file actually written.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Other(format!(
                "Database not found: {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_writable(&target, force)?;

        let final_path = if compress {
            compress_backup(src, dest, &target)?
        } else {
            fs::copy(src, dest)?;
            success(format!("Backup created: {}", dest.display()));
            target
        };

        // logged in the source database, not in the copy
        let pool = DbPool::new(&cfg.database)?;
        audit(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Zip the database straight into `zip_path`, no intermediate copy.
///
/// The archive entry takes the requested backup name, or the database's own
/// name when the request already ends in `.zip`.
fn compress_backup(src: &Path, dest: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let entry_name = if dest == zip_path {
        src.file_name()
    } else {
        dest.file_name()
    }
    .map(|n| n.to_string_lossy().to_string())
    .unwrap_or_else(|| "rtimesheet.sqlite".to_string());

    let mut db = fs::File::open(src)?;
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut db, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Backup created and compressed: {}", zip_path.display()));

    Ok(zip_path.to_path_buf())
}
