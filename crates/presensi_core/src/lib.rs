//! Core domain logic for the Presensi attendance application.
//! This crate is the single source of truth for the geofence eligibility
//! rules and the daily-uniqueness attendance policy.

pub mod db;
pub mod geofence;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use geofence::{evaluate, haversine_distance_m};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attendance::{
    AttendanceId, AttendanceKind, AttendanceRecord, AttendanceView, NewAttendance, UserId,
};
pub use model::geo::{Coordinate, GeoZone, ProximityResult, ZoneId};
pub use repo::attendance_repo::{AttendanceRepository, SqliteAttendanceRepository};
pub use repo::{RepoError, RepoResult};
pub use service::admin_service::AdminService;
pub use service::attendance_service::{
    AttendanceError, AttendanceService, GeofencePolicy, SubmitAttendance,
};
pub use service::checkin_wizard::{CheckinWizard, WizardError, WizardStep};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
