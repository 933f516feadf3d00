//! Typed domain records for the attendance system.
//!
//! # Responsibility
//! - Define canonical data structures shared by repositories and services.
//! - Pin the JSON field naming used by the HTTP collaborator (`camelCase`).
//!
//! # Invariants
//! - Every persisted entity is identified by its SQLite integer row id.
//! - Rows are decoded into these records at the storage boundary; handlers
//!   never see untyped row maps.

pub mod attendance;
pub mod catalog;
pub mod geo;
pub mod journal;
pub mod permission;
pub mod user;
