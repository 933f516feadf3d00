//! Leave-request (permission) model.
//!
//! Requests start as `pending` and are resolved by an administrator; the
//! request kind is free text (e.g. "izin", "sakit") as submitted by the
//! client form.

use crate::model::attendance::UserId;
use serde::{Deserialize, Serialize};

/// Review state of a leave request. New rows default to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl PermissionStatus {
    pub fn as_db(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Persisted leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRequest {
    pub id: i64,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: String,
    pub file_url: Option<String>,
    pub status: PermissionStatus,
    pub timestamp: String,
}

/// Submission payload for a new leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPermission {
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: String,
    pub file_url: Option<String>,
}

/// Admin listing row: request joined with the requesting user's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionView {
    #[serde(flatten)]
    pub request: PermissionRequest,
    pub user_name: String,
}
