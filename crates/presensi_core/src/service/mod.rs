//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Host the attendance eligibility gate: the client-side wizard state
//!   machine and the server-side submission policy.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - The wizard is advisory; only the submission service decision is
//!   authoritative.

pub mod admin_service;
pub mod attendance_service;
pub mod checkin_wizard;
