//! Property-based tests for the position engine using proptest.
//!
//! These check the geometric invariants of the solver and the propagator
//! over a wide range of orbits and times.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::data::{CelestialBodyId, get_body_data};
use super::distance::distance;
use super::hierarchy::propagate;
use super::registry::Registry;
use super::scale::{moon_orbit_radius, scene_radius};
use super::solver::orbital_radius;
use super::PositionTable;
use bevy::math::DVec3;

fn finite_point() -> impl Strategy<Value = DVec3> {
    (-1.0e4f64..1.0e4, -1.0e4f64..1.0e4, -1.0e4f64..1.0e4)
        .prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A circular orbit has the same radius at every angle.
    #[test]
    fn prop_circular_radius_constant(
        a in 0.1f64..5000.0,
        theta in 0.0f64..TAU,
    ) {
        prop_assert_eq!(orbital_radius(a, 0.0, theta), a);
    }

    /// Sampled radii of an ellipse stay within [a(1-e), a(1+e)] and reach
    /// both bounds at perihelion and aphelion.
    #[test]
    fn prop_elliptical_radius_bounds(
        a in 0.1f64..5000.0,
        e in 0.001f64..0.95,
    ) {
        let peri = a * (1.0 - e);
        let aph = a * (1.0 + e);
        let tol = 1e-9 * aph;

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for i in 0..=360 {
            let r = orbital_radius(a, e, TAU * i as f64 / 360.0);
            min = min.min(r);
            max = max.max(r);
        }
        prop_assert!((min - peri).abs() < tol, "min {} vs perihelion {}", min, peri);
        prop_assert!((max - aph).abs() < tol, "max {} vs aphelion {}", max, aph);
    }

    /// Distance is zero to itself and symmetric.
    #[test]
    fn prop_distance_metric(p in finite_point(), q in finite_point()) {
        prop_assert_eq!(distance(p, p), 0.0);
        prop_assert_eq!(distance(p, q), distance(q, p));
        prop_assert!(distance(p, q) >= 0.0);
    }

    /// Distance from the origin to a point in the ecliptic is its planar norm.
    #[test]
    fn prop_distance_from_origin(x in -1.0e4f64..1.0e4, z in -1.0e4f64..1.0e4) {
        let d = distance(DVec3::ZERO, DVec3::new(x, 0.0, z));
        let expected = (x * x + z * z).sqrt();
        prop_assert!((d - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    /// Every moon sits exactly its scaled orbit radius from its parent's
    /// position in the same frame.
    #[test]
    fn prop_moon_parent_offset(time in 0.0f64..1.0e7, delta in 0.0f64..1.0) {
        let registry = Registry::solar_system();
        let mut table = PositionTable::default();
        let errors = propagate(&registry, time, delta, &mut table);
        prop_assert!(errors.is_empty());

        for body in registry.bodies().iter().filter(|b| b.is_moon()) {
            let Some(parent_id) = body.parent() else { continue };
            let parent = get_body_data(parent_id);
            let expected = moon_orbit_radius(body.orbit_radius_mkm, scene_radius(parent.diameter_km));
            let (Some(moon_pos), Some(parent_pos)) =
                (table.position(body.id), table.position(parent_id))
            else {
                return Err(TestCaseError::fail(format!("{} missing", body.id)));
            };
            let actual = distance(moon_pos, parent_pos);
            prop_assert!(
                (actual - expected).abs() < 1e-6,
                "{}: {} vs {}", body.id, actual, expected
            );
        }
    }

    /// Without time advancing, repeated propagation leaves every entry unchanged.
    #[test]
    fn prop_frozen_time_is_stationary(time in 0.0f64..1.0e7, frames in 1usize..5) {
        let registry = Registry::solar_system();
        let mut table = PositionTable::default();
        propagate(&registry, time, 0.0, &mut table);
        let first = table.clone();
        for _ in 0..frames {
            propagate(&registry, time, 0.0, &mut table);
        }
        prop_assert_eq!(first, table);
    }

    /// Planets stay between perihelion and aphelion at any time.
    #[test]
    fn prop_planet_within_extremes(time in -1.0e7f64..1.0e7) {
        let registry = Registry::solar_system();
        let mut table = PositionTable::default();
        propagate(&registry, time, 0.0, &mut table);

        for id in [CelestialBodyId::Mercury, CelestialBodyId::Mars, CelestialBodyId::Saturn] {
            let body = get_body_data(id);
            let a = super::scale::scene_distance(body.orbit_radius_mkm);
            let r = table.position(id).map(|p| p.length()).unwrap_or_default();
            prop_assert!(r >= a * (1.0 - body.eccentricity) - 1e-6);
            prop_assert!(r <= a * (1.0 + body.eccentricity) + 1e-6);
        }
    }
}
