use crate::db::pool::DbPool;
use crate::db::queries::{count_events, timestamp_bounds};
use crate::db::schema::events_table_exists;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

/// Snapshot of the database state, shown by `db --info`.
#[derive(Debug, Clone)]
pub struct DbInfo {
    pub path: String,
    pub size_bytes: u64,
    pub has_events_table: bool,
    pub total_events: i64,
    pub first_timestamp: Option<String>,
    pub last_timestamp: Option<String>,
}

pub fn collect_db_info(pool: &DbPool) -> AppResult<DbInfo> {
    let path = pool.path().to_string_lossy().to_string();
    let size_bytes = fs::metadata(pool.path()).map(|m| m.len()).unwrap_or(0);
    let has_events_table = events_table_exists(&pool.conn)?;

    let (total_events, first_timestamp, last_timestamp) = if has_events_table {
        let (first, last) = timestamp_bounds(&pool.conn)?;
        (count_events(&pool.conn)?, first, last)
    } else {
        (0, None, None)
    };

    Ok(DbInfo {
        path,
        size_bytes,
        has_events_table,
        total_events,
        first_timestamp,
        last_timestamp,
    })
}

pub fn print_db_info(info: &DbInfo) {
    println!();

    let file_kb = (info.size_bytes as f64) / 1024.0;
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, info.path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    if !info.has_events_table {
        println!("{}• Events table:{} {}missing{}", CYAN, RESET, GREY, RESET);
        return;
    }

    println!(
        "{}• Total events:{} {}{}{}",
        CYAN, RESET, GREEN, info.total_events, RESET
    );

    let fmt_first = info
        .first_timestamp
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = info
        .last_timestamp
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Range:{}", CYAN, RESET);
    println!("    first: {}", fmt_first);
    println!("    last:  {}", fmt_last);
    println!();
}
