//! Leave-request persistence.
//!
//! New requests always start as `pending`; resolution happens through
//! `update_status` from the admin screens.

use rusqlite::{params, Connection, Row};

use crate::model::permission::{
    NewPermission, PermissionRequest, PermissionStatus, PermissionView,
};
use crate::repo::{RepoError, RepoResult};

/// SQLite-backed leave-request repository.
pub struct PermissionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> PermissionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, permission: &NewPermission) -> RepoResult<i64> {
        self.conn.execute(
            "INSERT INTO permissions (user_id, type, reason, file_url)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                permission.user_id,
                permission.kind.as_str(),
                permission.reason.as_str(),
                permission.file_url.as_deref(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Admin listing joined with the requesting user's name, newest first.
    pub fn list_all(&self) -> RepoResult<Vec<PermissionView>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                p.id,
                p.user_id,
                p.type,
                p.reason,
                p.file_url,
                p.status,
                p.timestamp,
                u.name AS user_name
             FROM permissions p
             JOIN users u ON p.user_id = u.id
             ORDER BY p.timestamp DESC, p.id DESC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut views = Vec::new();
        while let Some(row) = rows.next()? {
            views.push(PermissionView {
                request: parse_permission_row(row)?,
                user_name: row.get("user_name")?,
            });
        }
        Ok(views)
    }

    pub fn count_pending(&self) -> RepoResult<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM permissions WHERE status = 'pending';",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    pub fn update_status(&self, id: i64, status: PermissionStatus) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE permissions SET status = ?1 WHERE id = ?2;",
            params![status.as_db(), id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "permission",
                id,
            });
        }
        Ok(())
    }
}

fn parse_permission_row(row: &Row<'_>) -> RepoResult<PermissionRequest> {
    let status_text: String = row.get("status")?;
    let status = PermissionStatus::from_db(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status `{status_text}` in permissions.status"
        ))
    })?;

    Ok(PermissionRequest {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind: row.get("type")?,
        reason: row.get("reason")?,
        file_url: row.get("file_url")?,
        status,
        timestamp: row.get("timestamp")?,
    })
}
