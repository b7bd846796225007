use rusqlite::Row;
use serde::Serialize;

/// One journal entry as stored in the `events` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub id: i64,           // ⇔ events.eventID (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub timestamp: String, // ⇔ events.timeStamp (VARCHAR, client supplied)
    pub text: String,      // ⇔ events.textEvent (VARCHAR)
}

impl EventRecord {
    /// Row rendering used by the list: `"<timestamp>, <text>"`.
    pub fn summary(&self) -> String {
        format!("{}, {}", self.timestamp, self.text)
    }

    /// Map a `SELECT eventID, timeStamp, textEvent` row.
    ///
    /// NULL columns (possible with the legacy schema, which has no NOT NULL
    /// constraints) read back as empty strings.
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("eventID")?,
            timestamp: row
                .get::<_, Option<String>>("timeStamp")?
                .unwrap_or_default(),
            text: row
                .get::<_, Option<String>>("textEvent")?
                .unwrap_or_default(),
        })
    }
}
