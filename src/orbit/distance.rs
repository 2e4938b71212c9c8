//! Distances between bodies, in scene units and in approximate real units.

use bevy::math::DVec3;

use super::data::CelestialBodyId;
use super::error::OrbitError;
use super::registry::Registry;

/// Euclidean distance between two scene positions.
pub fn distance(p1: DVec3, p2: DVec3) -> f64 {
    let d = p1 - p2;
    (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
}

/// Rough real separation in million km: the difference of the two bodies'
/// orbital radii.
///
/// This ignores where each body currently is on its orbit, so it is a lower
/// bound for planets and only indicative for moons, whose radii are measured
/// from their parent. The UI labels it as approximate.
pub fn real_distance_approx(
    registry: &Registry,
    a: CelestialBodyId,
    b: CelestialBodyId,
) -> Result<f64, OrbitError> {
    let ra = registry.require(a)?.orbit_radius_mkm;
    let rb = registry.require(b)?.orbit_radius_mkm;
    Ok((ra - rb).abs())
}

/// [`real_distance_approx`] with bodies looked up by display name.
pub fn real_distance_approx_by_name(
    registry: &Registry,
    a: &str,
    b: &str,
) -> Result<f64, OrbitError> {
    let a = registry.find(a)?.id;
    let b = registry.find(b)?.id;
    real_distance_approx(registry, a, b)
}
