use presensi_core::{evaluate, haversine_distance_m, Coordinate, GeoZone};

fn zone(id: i64, name: &str, latitude: f64, longitude: f64, radius_m: f64) -> GeoZone {
    GeoZone {
        id,
        name: name.to_string(),
        center: Coordinate::new(latitude, longitude),
        radius_m,
    }
}

#[test]
fn haversine_is_symmetric_and_zero_on_self() {
    let jakarta = Coordinate::new(-6.2000, 106.8166);
    let bandung = Coordinate::new(-6.9175, 107.6191);

    assert_eq!(
        haversine_distance_m(jakarta, bandung),
        haversine_distance_m(bandung, jakarta)
    );
    assert_eq!(haversine_distance_m(jakarta, jakarta), 0.0);
}

#[test]
fn membership_is_boundary_inclusive() {
    let center = Coordinate::new(-6.2000, 106.8166);
    let point = Coordinate::new(-6.2005, 106.8166);
    let exact_distance = haversine_distance_m(center, point);

    let result = evaluate(point, &[zone(1, "edge", -6.2000, 106.8166, exact_distance)]);
    assert!(result.within_any_zone, "a point at exactly radius distance is within");
}

#[test]
fn union_semantics_check_each_zone_against_its_own_radius() {
    // The nearest zone by absolute distance rejects the fix, but a farther
    // large-radius zone accepts it; the union must still be "within".
    let fix = Coordinate::new(-6.2000, 106.8166);
    let near_small = zone(1, "near small", -6.2010, 106.8166, 50.0); // ~111 m away
    let far_large = zone(2, "far large", -6.2036, 106.8166, 500.0); // ~400 m away

    let near_distance = haversine_distance_m(fix, near_small.center);
    let far_distance = haversine_distance_m(fix, far_large.center);
    assert!(near_distance > near_small.radius_m);
    assert!(far_distance <= far_large.radius_m);

    let result = evaluate(fix, &[near_small, far_large]);
    assert!(result.within_any_zone);
    // Nearest distance still reports the closest center, member or not.
    let nearest = result.nearest_distance_m.unwrap();
    assert!((nearest - near_distance).abs() < 1e-9);
}

#[test]
fn empty_zone_registry_yields_unknown_distance() {
    let result = evaluate(Coordinate::new(-6.2000, 106.8166), &[]);
    assert!(!result.within_any_zone);
    assert_eq!(result.nearest_distance_m, None);
}

#[test]
fn school_zone_scenario_matches_reference_distances() {
    let zones = [zone(1, "Sekolah", -6.2000, 106.8166, 100.0)];

    let inside = evaluate(Coordinate::new(-6.2005, 106.8166), &zones);
    let inside_distance = inside.nearest_distance_m.unwrap();
    assert!(
        (inside_distance - 55.6).abs() < 0.5,
        "expected ~55.5 m, got {inside_distance}"
    );
    assert!(inside.within_any_zone);

    let outside = evaluate(Coordinate::new(-6.2020, 106.8166), &zones);
    let outside_distance = outside.nearest_distance_m.unwrap();
    assert!(
        (outside_distance - 222.4).abs() < 1.0,
        "expected ~222 m, got {outside_distance}"
    );
    assert!(!outside.within_any_zone);
}

#[test]
fn non_finite_input_propagates_without_panicking() {
    let zones = [zone(1, "Sekolah", -6.2000, 106.8166, 100.0)];

    let result = evaluate(Coordinate::new(f64::NAN, 106.8166), &zones);
    assert!(!result.within_any_zone);

    let result = evaluate(Coordinate::new(f64::INFINITY, f64::INFINITY), &zones);
    assert!(!result.within_any_zone);
}
