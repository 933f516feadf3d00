//! Great-circle distance and zone-membership evaluation.
//!
//! # Responsibility
//! - Compute haversine distance between two coordinates.
//! - Derive the union-of-zones proximity result for one live fix.
//!
//! # Invariants
//! - Membership is boundary inclusive: `distance <= radius` is within.
//! - Each zone is checked against its own radius; a fix can be within a
//!   distant large zone while outside a nearer small one.
//! - Non-finite inputs are not rejected; NaN/Infinity propagate through
//!   the arithmetic unchanged.

use crate::model::geo::{Coordinate, GeoZone, ProximityResult};

/// Mean Earth radius in meters, matching the client-side computation.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Returns the spherical-earth (haversine) distance between two points,
/// in meters.
pub fn haversine_distance_m(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_phi = (to.latitude - from.latitude).to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Evaluates one fix against every registered zone.
///
/// # Contract
/// - Empty `zones` yields `nearest_distance_m: None` and
///   `within_any_zone: false`; never an error.
/// - `nearest_distance_m` is the minimum center distance over all zones,
///   tracked independently of membership.
pub fn evaluate(point: Coordinate, zones: &[GeoZone]) -> ProximityResult {
    if zones.is_empty() {
        return ProximityResult::unknown();
    }

    let mut nearest = f64::INFINITY;
    let mut within = false;

    for zone in zones {
        let distance = haversine_distance_m(point, zone.center);
        if distance < nearest {
            nearest = distance;
        }
        if distance <= zone.radius_m {
            within = true;
        }
    }

    ProximityResult {
        nearest_distance_m: Some(nearest),
        within_any_zone: within,
    }
}
