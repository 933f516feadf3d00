//! Dashboard aggregates for the admin home screen.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::repo::RepoResult;

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    /// Distinct users with at least one attendance action today.
    pub today_attendance: i64,
    pub pending_permissions: i64,
}

/// Computes the dashboard counters in three single-row queries.
pub fn dashboard_stats(conn: &Connection) -> RepoResult<DashboardStats> {
    let total_users: i64 = conn.query_row("SELECT COUNT(*) FROM users;", [], |row| row.get(0))?;

    let today_attendance: i64 = conn.query_row(
        "SELECT COUNT(DISTINCT user_id)
         FROM attendance
         WHERE day = date('now', 'localtime');",
        [],
        |row| row.get(0),
    )?;

    let pending_permissions: i64 = conn.query_row(
        "SELECT COUNT(*) FROM permissions WHERE status = 'pending';",
        [],
        |row| row.get(0),
    )?;

    Ok(DashboardStats {
        total_users,
        today_attendance,
        pending_permissions,
    })
}
