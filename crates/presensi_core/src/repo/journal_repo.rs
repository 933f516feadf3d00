//! Teaching-journal persistence.

use rusqlite::{params, Connection, Row};

use crate::model::journal::{JournalEntry, JournalView, NewJournal};
use crate::repo::RepoResult;

/// SQLite-backed journal repository.
pub struct JournalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> JournalRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, journal: &NewJournal) -> RepoResult<i64> {
        self.conn.execute(
            "INSERT INTO journals (
                user_id,
                class_id,
                subject_id,
                content,
                selfie,
                latitude,
                longitude
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                journal.user_id,
                journal.class_id,
                journal.subject_id,
                journal.content.as_str(),
                journal.selfie.as_deref(),
                journal.latitude,
                journal.longitude,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Admin listing joined with user/class/subject names, newest first.
    pub fn list_all(&self) -> RepoResult<Vec<JournalView>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                j.id,
                j.user_id,
                j.class_id,
                j.subject_id,
                j.content,
                j.selfie,
                j.latitude,
                j.longitude,
                j.timestamp,
                u.name AS user_name,
                c.name AS class_name,
                s.name AS subject_name
             FROM journals j
             JOIN users u ON j.user_id = u.id
             JOIN classes c ON j.class_id = c.id
             JOIN subjects s ON j.subject_id = s.id
             ORDER BY j.timestamp DESC, j.id DESC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut views = Vec::new();
        while let Some(row) = rows.next()? {
            views.push(JournalView {
                entry: parse_journal_row(row)?,
                user_name: row.get("user_name")?,
                class_name: row.get("class_name")?,
                subject_name: row.get("subject_name")?,
            });
        }
        Ok(views)
    }
}

fn parse_journal_row(row: &Row<'_>) -> RepoResult<JournalEntry> {
    Ok(JournalEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        class_id: row.get("class_id")?,
        subject_id: row.get("subject_id")?,
        content: row.get("content")?,
        selfie: row.get("selfie")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        timestamp: row.get("timestamp")?,
    })
}
