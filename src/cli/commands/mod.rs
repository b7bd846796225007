pub mod add;
pub mod config;
pub mod count;
pub mod db;
pub mod init;
pub mod list;
pub mod log;
pub mod show;

use crate::config::Config;
use crate::core::store::EventStore;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Open the store configured in `cfg`.
pub(crate) fn open_store(cfg: &Config) -> AppResult<EventStore> {
    EventStore::open(&cfg.database_path(), cfg.addressing)
}

/// Write an internal log line; a failure is reported but never fatal.
pub(crate) fn audit(store: &EventStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(store.connection(), operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
