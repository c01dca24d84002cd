//! SQLite connection wrapper (one connection per CLI invocation).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// Open the database and make sure every migration has been applied.
    pub fn open_initialized(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Run `func` inside a transaction; commits on Ok, rolls back on Err.
    pub fn in_transaction<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&rusqlite::Transaction<'_>) -> AppResult<T>,
    {
        let tx = self.conn.transaction()?;
        let out = func(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}
