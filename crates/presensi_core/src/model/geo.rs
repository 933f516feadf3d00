//! Geographic primitives for geofenced attendance.
//!
//! # Responsibility
//! - Define the coordinate, zone and proximity shapes used by the evaluator.
//!
//! # Invariants
//! - `Coordinate` carries degrees; non-finite values are not rejected here
//!   and propagate through distance arithmetic (callers pre-validate).
//! - `ProximityResult` is derived state: recomputed per location fix and
//!   never persisted.

use serde::{Deserialize, Serialize};

/// Stable identifier for a registered geofence zone.
pub type ZoneId = i64;

/// A latitude/longitude pair in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// A circular region within which attendance is considered valid.
///
/// Membership is decided against this zone's own `radius_m`, independently
/// of any other registered zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoZone {
    pub id: ZoneId,
    /// Display name shown in the admin screens (e.g. "Sekolah").
    pub name: String,
    /// Serialized flat as `latitude`/`longitude` to match the API payload.
    #[serde(flatten)]
    pub center: Coordinate,
    /// Zone radius in meters.
    #[serde(rename = "radius")]
    pub radius_m: f64,
}

/// Outcome of evaluating one live fix against the registered zones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityResult {
    /// Distance to the nearest zone center in meters, or `None` when no
    /// zone is registered (no meaningful distance yet).
    pub nearest_distance_m: Option<f64>,
    /// True when the fix lies within at least one zone's own radius.
    pub within_any_zone: bool,
}

impl ProximityResult {
    /// Result used when the zone registry is empty.
    pub fn unknown() -> Self {
        Self {
            nearest_distance_m: None,
            within_any_zone: false,
        }
    }
}
