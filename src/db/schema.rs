use rusqlite::{Connection, OptionalExtension, Result};

/// Schema of the journal table. Column names are kept as-is so databases
/// written by earlier versions stay readable.
pub const CREATE_EVENTS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS events (
        eventID   INTEGER PRIMARY KEY AUTOINCREMENT,
        timeStamp VARCHAR,
        textEvent VARCHAR
    );
"#;

/// Ensure that the internal `log` table exists.
pub fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `events` table. No-op when it already exists.
pub fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_EVENTS_SQL)
}

/// Drop the `events` table. No-op when it is already gone.
pub fn drop_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch("DROP TABLE IF EXISTS events;")
}

/// Check if the `events` table exists.
pub fn events_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='events'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create every table the application needs.
pub fn init_db(conn: &Connection) -> Result<()> {
    create_events_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
