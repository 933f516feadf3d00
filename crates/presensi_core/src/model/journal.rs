//! Teaching-journal model.
//!
//! Journal entries record where they were written but are never geofence
//! gated: an out-of-zone teacher can still file a journal, with the
//! location stored as-is.

use crate::model::attendance::UserId;
use serde::{Deserialize, Serialize};

/// Persisted journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: i64,
    pub user_id: UserId,
    pub class_id: i64,
    pub subject_id: i64,
    pub content: String,
    pub selfie: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: String,
}

/// Submission payload for a new journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJournal {
    pub user_id: UserId,
    pub class_id: i64,
    pub subject_id: i64,
    pub content: String,
    pub selfie: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Admin listing row: entry joined with user/class/subject display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalView {
    #[serde(flatten)]
    pub entry: JournalEntry,
    pub user_name: String,
    pub class_name: String,
    pub subject_name: String,
}
