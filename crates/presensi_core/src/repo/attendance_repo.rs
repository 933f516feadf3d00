//! Attendance repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist attendance submissions and expose history/admin listings.
//! - Enforce the one-action-per-kind-per-day rule at write time.
//!
//! # Invariants
//! - `create` is a single atomic insert; the UNIQUE(user_id, type, day)
//!   constraint is the uniqueness check, there is no pre-check query.
//! - The calendar day is computed by the storage engine
//!   (`date('now','localtime')`), never by the caller.

use log::info;
use rusqlite::{params, Connection, Row};

use crate::model::attendance::{
    AttendanceId, AttendanceKind, AttendanceRecord, AttendanceView, NewAttendance, UserId,
};
use crate::model::geo::Coordinate;
use crate::repo::{is_constraint_on, RepoError, RepoResult};

const ATTENDANCE_SELECT_SQL: &str = "SELECT
    id,
    user_id,
    type,
    day,
    timestamp,
    latitude,
    longitude,
    address,
    selfie
FROM attendance";

/// Repository interface for attendance persistence.
pub trait AttendanceRepository {
    /// Inserts a validated submission; fails with [`RepoError::DuplicateDaily`]
    /// when the same user already has this kind of action today.
    fn create(&self, submission: &NewAttendance) -> RepoResult<AttendanceId>;

    /// Returns whether an action of `kind` exists for `user_id` today.
    fn recorded_today(&self, user_id: UserId, kind: AttendanceKind) -> RepoResult<bool>;

    /// Per-user history, newest first, capped at `limit` rows.
    fn history_for_user(&self, user_id: UserId, limit: u32) -> RepoResult<Vec<AttendanceRecord>>;

    /// Admin listing joined with the submitting user's name, newest first.
    fn list_all(&self) -> RepoResult<Vec<AttendanceView>>;
}

/// SQLite-backed attendance repository.
pub struct SqliteAttendanceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAttendanceRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AttendanceRepository for SqliteAttendanceRepository<'_> {
    fn create(&self, submission: &NewAttendance) -> RepoResult<AttendanceId> {
        let inserted = self.conn.execute(
            "INSERT INTO attendance (
                user_id,
                type,
                latitude,
                longitude,
                address,
                selfie
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                submission.user_id,
                submission.kind.as_db(),
                submission.coordinate.latitude,
                submission.coordinate.longitude,
                submission.address.as_deref(),
                submission.selfie.as_str(),
            ],
        );

        match inserted {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                info!(
                    "event=attendance_create module=repo status=ok user_id={} kind={}",
                    submission.user_id,
                    submission.kind.as_db()
                );
                Ok(id)
            }
            Err(err) if is_constraint_on(&err, "attendance.user_id") => {
                info!(
                    "event=attendance_create module=repo status=conflict user_id={} kind={}",
                    submission.user_id,
                    submission.kind.as_db()
                );
                Err(RepoError::DuplicateDaily(submission.kind))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn recorded_today(&self, user_id: UserId, kind: AttendanceKind) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM attendance
                WHERE user_id = ?1
                  AND type = ?2
                  AND day = date('now', 'localtime')
            );",
            params![user_id, kind.as_db()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn history_for_user(&self, user_id: UserId, limit: u32) -> RepoResult<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ATTENDANCE_SELECT_SQL}
             WHERE user_id = ?1
             ORDER BY timestamp DESC, id DESC
             LIMIT ?2;"
        ))?;

        let mut rows = stmt.query(params![user_id, i64::from(limit)])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_attendance_row(row)?);
        }
        Ok(records)
    }

    fn list_all(&self) -> RepoResult<Vec<AttendanceView>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                a.id,
                a.user_id,
                a.type,
                a.day,
                a.timestamp,
                a.latitude,
                a.longitude,
                a.address,
                a.selfie,
                u.name AS user_name
             FROM attendance a
             JOIN users u ON a.user_id = u.id
             ORDER BY a.timestamp DESC, a.id DESC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut views = Vec::new();
        while let Some(row) = rows.next()? {
            views.push(AttendanceView {
                record: parse_attendance_row(row)?,
                user_name: row.get("user_name")?,
            });
        }
        Ok(views)
    }
}

fn parse_attendance_row(row: &Row<'_>) -> RepoResult<AttendanceRecord> {
    let kind_text: String = row.get("type")?;
    let kind = AttendanceKind::from_db(&kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid attendance kind `{kind_text}` in attendance.type"
        ))
    })?;

    Ok(AttendanceRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        day: row.get("day")?,
        timestamp: row.get("timestamp")?,
        coordinate: Coordinate::new(row.get("latitude")?, row.get("longitude")?),
        address: row.get("address")?,
        selfie: row.get("selfie")?,
    })
}
