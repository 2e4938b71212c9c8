//! Per-frame propagation through the star → planet → moon hierarchy.

use std::collections::HashSet;

use bevy::prelude::*;

use super::data::{BodyKind, CelestialBodyId};
use super::error::{ErrorKey, OrbitError};
use super::registry::Registry;
use super::scale::scene_radius;
use super::solver::{solve_moon, solve_primary, spin_increment};
use super::PositionTable;
use crate::types::SimulationClock;

/// Recompute every body's position and spin for one frame.
///
/// Primaries are solved first, then moons from their parent's position in
/// this same frame. A body whose computation fails keeps its previous entry
/// and does not advance its spin; a moon whose parent failed fails with
/// [`OrbitError::MissingParent`] instead of following a stale parent.
pub fn propagate(
    registry: &Registry,
    time: f64,
    scaled_delta: f64,
    table: &mut PositionTable,
) -> Vec<OrbitError> {
    let mut errors = Vec::new();
    let mut updated: HashSet<CelestialBodyId> = HashSet::with_capacity(registry.len());

    // Pass 1: star and planets
    for body in registry.bodies().iter().filter(|b| !b.is_moon()) {
        match solve_primary(body, time) {
            Ok(position) => {
                table.update(body.id, position, spin_increment(body, scaled_delta));
                updated.insert(body.id);
            }
            Err(err) => errors.push(err),
        }
    }

    // Pass 2: moons, against this frame's parent positions
    for body in registry.bodies() {
        let BodyKind::Moon { parent } = body.kind else {
            continue;
        };
        let parent_position = updated
            .contains(&parent)
            .then(|| table.position(parent))
            .flatten();
        let Some(parent_position) = parent_position else {
            errors.push(OrbitError::MissingParent {
                body: body.id,
                parent,
            });
            continue;
        };
        let parent_radius = registry
            .get(parent)
            .map(|p| scene_radius(p.diameter_km))
            .unwrap_or_default();

        match solve_moon(body, parent_position, parent_radius, time) {
            Ok(position) => {
                table.update(body.id, position, spin_increment(body, scaled_delta));
                updated.insert(body.id);
            }
            Err(err) => errors.push(err),
        }
    }

    errors
}

/// Fill the table once before the first frame so spawned entities start in place.
pub(crate) fn seed_positions(
    registry: Res<Registry>,
    clock: Res<SimulationClock>,
    mut table: ResMut<PositionTable>,
) {
    for err in propagate(&registry, clock.orbit_time(), 0.0, &mut table) {
        warn!("Initial position unavailable: {}", err);
    }
    info!("Seeded positions for {} bodies", table.len());
}

/// Errors whose key was not reported last frame. `reported` is replaced by
/// this frame's keys, so a fault that clears and returns is logged again.
pub(crate) fn newly_failed<'a>(
    reported: &mut HashSet<ErrorKey>,
    errors: &'a [OrbitError],
) -> Vec<&'a OrbitError> {
    let current: HashSet<ErrorKey> = errors.iter().map(OrbitError::log_key).collect();
    let fresh = errors
        .iter()
        .filter(|e| !reported.contains(&e.log_key()))
        .collect();
    *reported = current;
    fresh
}

/// Propagate positions each frame, logging each failure once until it clears.
pub(crate) fn propagate_positions(
    registry: Res<Registry>,
    clock: Res<SimulationClock>,
    mut table: ResMut<PositionTable>,
    mut reported: Local<HashSet<ErrorKey>>,
) {
    let errors = propagate(&registry, clock.orbit_time(), clock.delta, &mut table);

    for err in newly_failed(&mut reported, &errors) {
        warn!("Keeping previous position: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;
    use crate::orbit::data::get_body_data;
    use crate::orbit::distance::distance;
    use crate::orbit::scale::moon_orbit_radius;
    use crate::test_utils::fixtures;
    use approx::assert_relative_eq;

    #[test]
    fn test_solar_system_propagates_cleanly() {
        let registry = Registry::solar_system();
        let mut table = PositionTable::default();
        let errors = propagate(&registry, 1000.0, 0.016, &mut table);
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(table.len(), registry.len());
        assert_eq!(table.position(CelestialBodyId::Sun), Some(bevy::math::DVec3::ZERO));
    }

    #[test]
    fn test_moon_tracks_parent_in_same_frame() {
        let registry = fixtures::earth_system();
        let mut table = PositionTable::default();
        let earth = get_body_data(CelestialBodyId::Earth);
        let moon = get_body_data(CelestialBodyId::Moon);
        let expected = moon_orbit_radius(moon.orbit_radius_mkm, scene_radius(earth.diameter_km));

        for t in [0.0, 12.5, 400.0, 9_000.0] {
            propagate(&registry, t, 0.1, &mut table);
            let earth_pos = table.position(CelestialBodyId::Earth).expect("earth");
            let moon_pos = table.position(CelestialBodyId::Moon).expect("moon");
            assert_relative_eq!(distance(earth_pos, moon_pos), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_delta_changes_nothing() {
        let registry = Registry::solar_system();
        let mut table = PositionTable::default();
        propagate(&registry, 500.0, 0.0, &mut table);
        let before = table.clone();
        propagate(&registry, 500.0, 0.0, &mut table);
        assert_eq!(before, table);
    }

    #[test]
    fn test_degenerate_body_stays_stale() {
        let registry = fixtures::earth_system();
        let mut table = PositionTable::default();
        propagate(&registry, 0.0, 0.0, &mut table);
        let earth_before = table.get(CelestialBodyId::Earth).expect("earth");

        let broken = fixtures::with_eccentricity(&registry, CelestialBodyId::Earth, 1.5);
        let errors = propagate(&broken, 100.0, 1.0, &mut table);

        assert_eq!(table.get(CelestialBodyId::Earth), Some(earth_before));
        assert!(errors.contains(&OrbitError::InvalidEccentricity {
            body: CelestialBodyId::Earth,
            eccentricity: 1.5,
        }));
        // The moon refuses to follow a parent that did not update
        assert!(errors.contains(&OrbitError::MissingParent {
            body: CelestialBodyId::Moon,
            parent: CelestialBodyId::Earth,
        }));
        // The Sun still updated its spin
        assert!(table.get(CelestialBodyId::Sun).expect("sun").spin > 0.0);
    }

    #[test]
    fn test_spin_accumulates_and_wraps() {
        let registry = fixtures::earth_system();
        let mut table = PositionTable::default();
        for _ in 0..10_000 {
            propagate(&registry, 0.0, 1.0, &mut table);
        }
        let spin = table.get(CelestialBodyId::Earth).expect("earth").spin;
        assert!((0.0..TAU).contains(&spin));
    }

    #[test]
    fn test_nan_eccentricity_is_reported_once() {
        let registry =
            fixtures::with_eccentricity(&fixtures::earth_system(), CelestialBodyId::Earth, f64::NAN);
        let mut table = PositionTable::default();
        let mut reported = HashSet::new();

        let first = propagate(&registry, 10.0, 0.1, &mut table);
        let fresh = newly_failed(&mut reported, &first);
        // Earth's eccentricity and the Moon's missing parent
        assert_eq!(fresh.len(), 2);

        for t in [20.0, 30.0, 40.0] {
            let again = propagate(&registry, t, 0.1, &mut table);
            assert!(newly_failed(&mut reported, &again).is_empty());
        }
    }

    #[test]
    fn test_cleared_fault_is_reported_again() {
        let broken =
            fixtures::with_eccentricity(&fixtures::earth_system(), CelestialBodyId::Earth, 2.0);
        let healthy = fixtures::earth_system();
        let mut table = PositionTable::default();
        let mut reported = HashSet::new();

        let errors = propagate(&broken, 0.0, 0.0, &mut table);
        assert!(!newly_failed(&mut reported, &errors).is_empty());
        let errors = propagate(&healthy, 1.0, 0.0, &mut table);
        assert!(newly_failed(&mut reported, &errors).is_empty());
        assert!(reported.is_empty());
        let errors = propagate(&broken, 2.0, 0.0, &mut table);
        assert_eq!(newly_failed(&mut reported, &errors).len(), 2);
    }
}
