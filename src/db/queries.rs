use crate::models::event::EventRecord;
use rusqlite::{Connection, OptionalExtension, Result, params};

const SELECT_EVENT: &str = "SELECT eventID, timeStamp, textEvent FROM events";

pub fn insert_event(conn: &Connection, timestamp: &str, text: &str) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO events (timeStamp, textEvent)
         VALUES (:timeStamp, :textEvent)",
    )?;
    stmt.execute(rusqlite::named_params! {
        ":timeStamp": timestamp,
        ":textEvent": text,
    })?;
    Ok(conn.last_insert_rowid())
}

pub fn count_events(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
}

pub fn load_event_by_id(conn: &Connection, id: i64) -> Result<Option<EventRecord>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_EVENT} WHERE eventID = ?1"))?;
    stmt.query_row(params![id], EventRecord::from_row).optional()
}

/// nth record in insertion order (0-based).
pub fn load_event_by_offset(conn: &Connection, offset: i64) -> Result<Option<EventRecord>> {
    let mut stmt =
        conn.prepare_cached(&format!("{SELECT_EVENT} ORDER BY eventID ASC LIMIT 1 OFFSET ?1"))?;
    stmt.query_row(params![offset], EventRecord::from_row).optional()
}

pub fn load_all_events(conn: &Connection) -> Result<Vec<EventRecord>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_EVENT} ORDER BY eventID ASC"))?;
    let rows = stmt.query_map([], EventRecord::from_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Timestamps of the oldest and newest record, by id.
pub fn timestamp_bounds(conn: &Connection) -> Result<(Option<String>, Option<String>)> {
    let first: Option<String> = conn
        .query_row(
            "SELECT timeStamp FROM events ORDER BY eventID ASC LIMIT 1",
            [],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?
        .flatten();

    let last: Option<String> = conn
        .query_row(
            "SELECT timeStamp FROM events ORDER BY eventID DESC LIMIT 1",
            [],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?
        .flatten();

    Ok((first, last))
}
