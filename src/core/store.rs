//! The event store: owns the journal database and its single connection.
//!
//! Every operation returns a structured [`AppResult`]. Callers that only want
//! the historical "degrade silently" behaviour use [`EventStore::count_or_zero`]
//! and [`EventStore::summary_at`].

use crate::db::pool::DbPool;
use crate::db::{queries, schema, stats};
use crate::errors::{AppError, AppResult};
use crate::models::event::EventRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tokio::sync::oneshot;

/// Returned by [`EventStore::summary_at`] when no row can be rendered.
pub const NOT_FOUND_SENTINEL: &str = "Error: no item found";

/// How a list position is mapped to a stored record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Addressing {
    /// Position `p` is the record with `eventID = p + 1`.
    /// Only correct while ids are dense, which holds as long as nothing is deleted.
    #[default]
    IdOffset,
    /// Position `p` is the `p`-th record ordered by id.
    InsertionOrder,
}

/// Outcome of an asynchronous administrative request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncReply {
    Succeeded,
    Failed(String),
}

pub struct EventStore {
    pool: DbPool,
    addressing: Addressing,
    async_busy: Arc<AtomicBool>,
}

impl EventStore {
    /// Open the store at `path`.
    ///
    /// A missing file is created together with its parent directories and the
    /// schema. An existing file is opened as-is, so a dropped table stays
    /// dropped until `create_table` is called.
    pub fn open(path: &Path, addressing: Addressing) -> AppResult<Self> {
        let is_new = !path.exists();

        if is_new
            && let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::StorageUnavailable(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        let pool = DbPool::new(path)?;

        if is_new {
            schema::init_db(&pool.conn)
                .map_err(|e| AppError::Schema(format!("create table error: {e}")))?;
        } else {
            schema::ensure_log_table(&pool.conn)
                .map_err(|e| AppError::Schema(format!("create log table error: {e}")))?;
        }

        Ok(Self {
            pool,
            addressing,
            async_busy: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn path(&self) -> &Path {
        self.pool.path()
    }

    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    /// Connection shared with the internal log writer.
    pub fn connection(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }

    // ------------------------------------------------
    // Steady-state read/write path
    // ------------------------------------------------

    /// Append a record and return its new id.
    pub fn append(&self, timestamp: &str, text: &str) -> AppResult<i64> {
        Ok(queries::insert_event(&self.pool.conn, timestamp, text)?)
    }

    /// Append a record after checking that the `events` table exists.
    pub fn create_record(&self, timestamp: &str, text: &str) -> AppResult<i64> {
        if !self.table_exists()? {
            return Err(AppError::Schema("events table does not exist".into()));
        }
        self.append(timestamp, text)
    }

    pub fn count(&self) -> AppResult<i64> {
        Ok(queries::count_events(&self.pool.conn)?)
    }

    /// Record count, with any failure read as an empty store.
    pub fn count_or_zero(&self) -> i64 {
        self.count().unwrap_or(0)
    }

    /// Record shown at list position `position`.
    pub fn fetch_by_position(&self, position: usize) -> AppResult<EventRecord> {
        let offset = i64::try_from(position).map_err(|_| AppError::NotFound(position))?;

        let found = match self.addressing {
            Addressing::IdOffset => {
                let id = offset.checked_add(1).ok_or(AppError::NotFound(position))?;
                queries::load_event_by_id(&self.pool.conn, id)?
            }
            Addressing::InsertionOrder => queries::load_event_by_offset(&self.pool.conn, offset)?,
        };

        found.ok_or(AppError::NotFound(position))
    }

    /// `"timestamp, text"` for `position`, or [`NOT_FOUND_SENTINEL`].
    pub fn summary_at(&self, position: usize) -> String {
        self.fetch_by_position(position)
            .map(|ev| ev.summary())
            .unwrap_or_else(|_| NOT_FOUND_SENTINEL.to_string())
    }

    // ------------------------------------------------
    // Administration
    // ------------------------------------------------

    pub fn create_table(&self) -> AppResult<()> {
        schema::create_events_table(&self.pool.conn)
            .map_err(|e| AppError::Schema(format!("create table error: {e}")))
    }

    pub fn drop_table(&self) -> AppResult<()> {
        schema::drop_events_table(&self.pool.conn)
            .map_err(|e| AppError::Schema(format!("drop table error: {e}")))
    }

    pub fn table_exists(&self) -> AppResult<bool> {
        Ok(schema::events_table_exists(&self.pool.conn)?)
    }

    /// Every record, in id order.
    pub fn query_table(&self) -> AppResult<Vec<EventRecord>> {
        if !self.table_exists()? {
            return Err(AppError::Schema("events table does not exist".into()));
        }
        Ok(queries::load_all_events(&self.pool.conn)?)
    }

    pub fn info(&self) -> AppResult<stats::DbInfo> {
        stats::collect_db_info(&self.pool)
    }

    /// `PRAGMA integrity_check`; `Ok(None)` when the database is healthy.
    pub fn integrity_check(&self) -> AppResult<Option<String>> {
        let integrity: String = self
            .pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
        Ok(if integrity == "ok" { None } else { Some(integrity) })
    }

    pub fn vacuum(&self) -> AppResult<()> {
        self.pool.conn.execute_batch("VACUUM;")?;
        Ok(())
    }

    /// Create the `events` table on a worker thread.
    ///
    /// The request runs on its own short-lived connection to the same file;
    /// its outcome arrives on the returned receiver. Only one request may be
    /// pending at a time.
    pub fn create_table_async(&self) -> AppResult<oneshot::Receiver<AsyncReply>> {
        if self
            .async_busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AppError::Busy);
        }

        let (tx, rx) = oneshot::channel();
        let path: PathBuf = self.path().to_path_buf();
        let busy = Arc::clone(&self.async_busy);

        let spawned = thread::Builder::new()
            .name("dwriter-create-table".into())
            .spawn(move || {
                let reply = match DbPool::new(&path)
                    .and_then(|pool| Ok(schema::create_events_table(&pool.conn)?))
                {
                    Ok(()) => AsyncReply::Succeeded,
                    Err(e) => AsyncReply::Failed(e.to_string()),
                };
                // cleared first: a caller holding the reply may ask again at once
                busy.store(false, Ordering::Release);
                // The caller may have stopped listening; nothing to deliver then.
                let _ = tx.send(reply);
            });

        if let Err(e) = spawned {
            self.async_busy.store(false, Ordering::Release);
            return Err(AppError::Other(format!("cannot start worker: {e}")));
        }

        Ok(rx)
    }

    /// True from the request until its worker has finished.
    ///
    /// The flag clears before the reply is sent, so once a reply has been
    /// received the next request is accepted.
    pub fn async_pending(&self) -> bool {
        self.async_busy.load(Ordering::Acquire)
    }
}
