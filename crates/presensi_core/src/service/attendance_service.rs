//! Attendance submission use-case service: the server-side gate.
//!
//! # Responsibility
//! - Validate the presence of required submission fields.
//! - Optionally re-run the geofence evaluator before accepting.
//! - Delegate the atomic daily-unique insert to the repository.
//!
//! # Invariants
//! - Daily uniqueness is enforced by storage, not by a pre-check here.
//! - Every failure is local to one submission and maps to a dismissable
//!   user message; nothing here terminates the process.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::info;

use crate::geofence::evaluate;
use crate::model::attendance::{
    AttendanceId, AttendanceKind, AttendanceRecord, NewAttendance, UserId,
};
use crate::model::geo::{Coordinate, GeoZone};
use crate::repo::attendance_repo::AttendanceRepository;
use crate::repo::{RepoError, RepoResult};

/// Maximum rows returned by the per-user history view.
const HISTORY_LIMIT: u32 = 50;

/// Whether the server re-validates zone membership before accepting.
///
/// The reference deployment trusts the client gate (`Advisory`); `Enforced`
/// closes that gap by re-running the same evaluator server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeofencePolicy {
    Advisory,
    Enforced,
}

/// Raw submission payload as received from the client.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitAttendance {
    pub user_id: UserId,
    pub kind: AttendanceKind,
    pub coordinate: Option<Coordinate>,
    pub address: Option<String>,
    pub selfie: Option<String>,
}

/// Rejected or failed attendance submission.
#[derive(Debug)]
pub enum AttendanceError {
    MissingSelfie,
    MissingCoordinate,
    /// `Enforced` policy only: the submitted fix is outside every zone.
    OutsideZone {
        nearest_distance_m: Option<f64>,
    },
    /// Conflict with the one-action-per-kind-per-day rule.
    AlreadyRecorded(AttendanceKind),
    Repo(RepoError),
}

impl AttendanceError {
    /// User-facing message in the UI's wording (Indonesian).
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingSelfie => "Foto selfie wajib diambil sebelum mengirim.".to_string(),
            Self::MissingCoordinate => "Lokasi belum terdeteksi.".to_string(),
            Self::OutsideZone { .. } => "Anda berada di luar area sekolah.".to_string(),
            Self::AlreadyRecorded(kind) => format!(
                "Anda sudah melakukan absen {} hari ini.",
                kind.action_label()
            ),
            Self::Repo(_) => "Gagal mengirim absensi.".to_string(),
        }
    }
}

impl Display for AttendanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSelfie => write!(f, "submission has no selfie payload"),
            Self::MissingCoordinate => write!(f, "submission has no coordinate"),
            Self::OutsideZone {
                nearest_distance_m: Some(distance),
            } => write!(f, "fix outside every zone, nearest center {distance:.0} m away"),
            Self::OutsideZone {
                nearest_distance_m: None,
            } => write!(f, "fix outside every zone, no zone registered"),
            Self::AlreadyRecorded(kind) => write!(
                f,
                "attendance `{}` already recorded for today",
                kind.as_db()
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AttendanceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AttendanceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateDaily(kind) => Self::AlreadyRecorded(kind),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service for attendance submission and history.
pub struct AttendanceService<R: AttendanceRepository> {
    repo: R,
    policy: GeofencePolicy,
}

impl<R: AttendanceRepository> AttendanceService<R> {
    /// Creates a service with the reference behavior (`Advisory`).
    pub fn new(repo: R) -> Self {
        Self::with_policy(repo, GeofencePolicy::Advisory)
    }

    pub fn with_policy(repo: R, policy: GeofencePolicy) -> Self {
        Self { repo, policy }
    }

    /// Accepts or rejects one submission.
    ///
    /// # Contract
    /// - Missing selfie/coordinate fail before any storage access.
    /// - Under `Enforced`, the same haversine evaluator used by the client
    ///   decides membership against `zones`.
    /// - The insert itself is atomic; a same-day duplicate of the same kind
    ///   surfaces as [`AttendanceError::AlreadyRecorded`].
    pub fn submit(
        &self,
        submission: &SubmitAttendance,
        zones: &[GeoZone],
    ) -> Result<AttendanceId, AttendanceError> {
        let selfie = match submission.selfie.as_deref() {
            Some(selfie) if !selfie.is_empty() => selfie.to_string(),
            _ => return Err(AttendanceError::MissingSelfie),
        };
        let coordinate = submission
            .coordinate
            .ok_or(AttendanceError::MissingCoordinate)?;

        if self.policy == GeofencePolicy::Enforced {
            let proximity = evaluate(coordinate, zones);
            if !proximity.within_any_zone {
                info!(
                    "event=attendance_submit module=service status=rejected user_id={} kind={} reason=outside_zone",
                    submission.user_id,
                    submission.kind.as_db()
                );
                return Err(AttendanceError::OutsideZone {
                    nearest_distance_m: proximity.nearest_distance_m,
                });
            }
        }

        let id = self.repo.create(&NewAttendance {
            user_id: submission.user_id,
            kind: submission.kind,
            coordinate,
            address: submission.address.clone(),
            selfie,
        })?;
        Ok(id)
    }

    /// Returns which actions the user has already recorded today.
    pub fn today_status(&self, user_id: UserId) -> RepoResult<(bool, bool)> {
        let checked_in = self.repo.recorded_today(user_id, AttendanceKind::CheckIn)?;
        let checked_out = self.repo.recorded_today(user_id, AttendanceKind::CheckOut)?;
        Ok((checked_in, checked_out))
    }

    /// Per-user history, newest first, capped at 50 rows like the
    /// reference endpoint.
    pub fn history(&self, user_id: UserId) -> RepoResult<Vec<AttendanceRecord>> {
        self.repo.history_for_user(user_id, HISTORY_LIMIT)
    }
}
