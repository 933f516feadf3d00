//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `presensi_core` linkage.
//! - Open (and migrate) a database file and print the dashboard counters.

use presensi_core::db::open_db;
use presensi_core::AdminService;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "presensi.db".to_string());

    println!("presensi_core version={}", presensi_core::core_version());

    match open_db(&path) {
        Ok(conn) => {
            let admin = AdminService::new(&conn);
            match admin.stats() {
                Ok(stats) => {
                    println!("database={path}");
                    println!("total_users={}", stats.total_users);
                    println!("today_attendance={}", stats.today_attendance);
                    println!("pending_permissions={}", stats.pending_permissions);
                }
                Err(err) => eprintln!("failed to read stats: {err}"),
            }
        }
        Err(err) => eprintln!("failed to open `{path}`: {err}"),
    }
}
