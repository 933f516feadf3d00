//! Geofence proximity evaluation entry points.
//!
//! # Responsibility
//! - Expose the pure distance/membership computation consumed by the
//!   attendance eligibility gate.
//!
//! # Invariants
//! - Evaluation has no side effects and is safe to run on every location
//!   fix the watcher emits.

mod evaluator;

pub use evaluator::{evaluate, haversine_distance_m};
