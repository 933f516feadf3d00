//! School catalog records: classes and subjects.
//!
//! Both are plain named rows with unique display names, managed through the
//! admin CRUD screens and referenced by teaching-journal entries.

use serde::{Deserialize, Serialize};

/// A school class (e.g. "7A").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: i64,
    pub name: String,
}

/// A taught subject (e.g. "Matematika").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}
