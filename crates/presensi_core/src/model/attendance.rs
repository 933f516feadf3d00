//! Attendance domain model.
//!
//! # Responsibility
//! - Define the check-in/check-out action and its persisted record shape.
//!
//! # Invariants
//! - At most one record per (user, kind, calendar day); the storage schema
//!   enforces this with a unique constraint, not a pre-check query.
//! - Records are created once on submission and never mutated afterwards.

use crate::model::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// Stable identifier of a persisted attendance record.
pub type AttendanceId = i64;

/// Stable identifier of a user row.
pub type UserId = i64;

/// Tagged attendance action, stored as `in` / `out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceKind {
    #[serde(rename = "in")]
    CheckIn,
    #[serde(rename = "out")]
    CheckOut,
}

impl AttendanceKind {
    pub fn as_db(self) -> &'static str {
        match self {
            Self::CheckIn => "in",
            Self::CheckOut => "out",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "in" => Some(Self::CheckIn),
            "out" => Some(Self::CheckOut),
            _ => None,
        }
    }

    /// User-facing action label (the UI wording is Indonesian).
    pub fn action_label(self) -> &'static str {
        match self {
            Self::CheckIn => "masuk",
            Self::CheckOut => "pulang",
        }
    }
}

/// Persisted attendance record as read back from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: AttendanceKind,
    /// Server-local calendar day (`YYYY-MM-DD`) the uniqueness rule keys on.
    pub day: String,
    /// Server-local timestamp (`YYYY-MM-DD HH:MM:SS`).
    pub timestamp: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Free-text reverse-geocoded label captured by the client.
    pub address: Option<String>,
    /// Data-URL encoded selfie; treated as an opaque blob by the core.
    pub selfie: String,
}

/// Validated submission payload handed to the repository.
///
/// Field presence is checked by the submission service; by the time this
/// struct exists, evidence and coordinate are known.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendance {
    pub user_id: UserId,
    pub kind: AttendanceKind,
    pub coordinate: Coordinate,
    pub address: Option<String>,
    pub selfie: String,
}

/// Admin listing row: record joined with the submitting user's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceView {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    pub user_name: String,
}
