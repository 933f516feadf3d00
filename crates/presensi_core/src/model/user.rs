//! User account model.
//!
//! # Responsibility
//! - Define the account record and role taxonomy used across the app.
//!
//! # Invariants
//! - `User` never carries the password column; read queries exclude it.
//! - Credentials are compared as plaintext by the storage collaborator, as
//!   the reference deployment does (authentication hardening is out of
//!   scope for this core).

use serde::{Deserialize, Serialize};

use crate::model::attendance::UserId;

/// Account role, stored lowercase. `pegawai` (staff) is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Guru,
    Pegawai,
}

impl Role {
    pub fn as_db(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Guru => "guru",
            Self::Pegawai => "pegawai",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "guru" => Some(Self::Guru),
            "pegawai" => Some(Self::Pegawai),
            _ => None,
        }
    }
}

/// Account record as exposed to callers (password excluded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub role: Role,
    /// Civil-servant registration number; optional free text.
    pub nip: Option<String>,
}

/// Payload for creating an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub nip: Option<String>,
}

/// Payload for updating an account.
///
/// `password: None` means "keep the stored password unchanged"; the update
/// statement skips the column entirely in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub username: String,
    pub password: Option<String>,
    pub name: String,
    pub role: Role,
    pub nip: Option<String>,
}
