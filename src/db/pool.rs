//! Owner of the single SQLite connection used by the event store.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub struct DbPool {
    pub conn: Connection,
    path: PathBuf,
}

impl DbPool {
    /// Open (or create) the database file at `path`.
    pub fn new(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path).map_err(|e| {
            AppError::StorageUnavailable(format!("cannot open {}: {}", path.display(), e))
        })?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
