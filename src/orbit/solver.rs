//! Closed-form position solver.
//!
//! Planets move on ellipses with the Sun at the focus, with the angle advancing
//! uniformly in time. Moons move on circles around their parent's position in
//! the same frame. Both lie in the `y = 0` plane of the scene.

use std::f64::consts::TAU;

use bevy::math::DVec3;

use super::data::{BodyKind, CelestialBodyData};
use super::error::OrbitError;
use super::scale::{
    SPIN_GAIN, angular_orbital_speed, angular_rotation_rate, moon_orbit_radius, scene_distance,
};
use crate::types::DEG_TO_RAD;

/// Orbital angle in radians at the given orbit time (scene seconds since J2000).
pub fn orbit_angle(body: &CelestialBodyData, time: f64) -> f64 {
    body.orbit_phase_deg * DEG_TO_RAD + time * angular_orbital_speed(body.orbital_period_days)
}

/// Distance from the focus of an ellipse with semi-major axis `a` and
/// eccentricity `e`, at angle `theta` measured from perihelion.
pub fn orbital_radius(a: f64, e: f64, theta: f64) -> f64 {
    if e == 0.0 {
        a
    } else {
        a * (1.0 - e * e) / (1.0 + e * theta.cos())
    }
}

/// Map polar coordinates in the orbital plane to scene space.
/// Counter-clockwise seen from +y.
pub fn polar_to_scene(r: f64, theta: f64, height: f64) -> DVec3 {
    DVec3::new(r * theta.cos(), height, -r * theta.sin())
}

fn check_eccentricity(body: &CelestialBodyData) -> Result<(), OrbitError> {
    if (0.0..1.0).contains(&body.eccentricity) {
        Ok(())
    } else {
        Err(OrbitError::InvalidEccentricity {
            body: body.id,
            eccentricity: body.eccentricity,
        })
    }
}

fn check_finite(body: &CelestialBodyData, position: DVec3) -> Result<DVec3, OrbitError> {
    if position.is_finite() {
        Ok(position)
    } else {
        Err(OrbitError::NonFiniteResult { body: body.id })
    }
}

/// Heliocentric scene position of the star or a planet.
pub fn solve_primary(body: &CelestialBodyData, time: f64) -> Result<DVec3, OrbitError> {
    match body.kind {
        BodyKind::Star => Ok(DVec3::ZERO),
        BodyKind::Planet => {
            check_eccentricity(body)?;
            let theta = orbit_angle(body, time);
            let a = scene_distance(body.orbit_radius_mkm);
            let r = orbital_radius(a, body.eccentricity, theta);
            check_finite(body, polar_to_scene(r, theta, 0.0))
        }
        BodyKind::Moon { parent } => Err(OrbitError::MissingParent {
            body: body.id,
            parent,
        }),
    }
}

/// Scene position of a moon, given its parent's position this frame.
///
/// Moon orbits are drawn circular; `parent_radius` is the parent's scene
/// radius so the orbit clears the inflated parent sphere.
pub fn solve_moon(
    body: &CelestialBodyData,
    parent_position: DVec3,
    parent_radius: f64,
    time: f64,
) -> Result<DVec3, OrbitError> {
    let theta = orbit_angle(body, time);
    let r = moon_orbit_radius(body.orbit_radius_mkm, parent_radius);
    check_finite(body, parent_position + polar_to_scene(r, theta, 0.0))
}

/// Axial rotation in radians for one frame of `scaled_delta` scene seconds.
pub fn spin_increment(body: &CelestialBodyData, scaled_delta: f64) -> f64 {
    angular_rotation_rate(body.rotation_period_hours) * scaled_delta * SPIN_GAIN
}

/// Perihelion and aphelion in million km, or `None` for the star.
pub fn orbital_extremes(body: &CelestialBodyData) -> Option<(f64, f64)> {
    if body.kind == BodyKind::Star {
        return None;
    }
    let a = body.orbit_radius_mkm;
    let e = body.eccentricity;
    Some((a * (1.0 - e), a * (1.0 + e)))
}

/// Points of a planet's heliocentric orbit in scene space, closed (the last
/// point repeats the first). Empty for the star and for moons.
pub fn orbit_path(body: &CelestialBodyData, segments: usize) -> Vec<DVec3> {
    if body.kind != BodyKind::Planet || segments == 0 {
        return Vec::new();
    }
    let a = scene_distance(body.orbit_radius_mkm);
    (0..=segments)
        .map(|i| {
            let theta = TAU * i as f64 / segments as f64;
            polar_to_scene(orbital_radius(a, body.eccentricity, theta), theta, 0.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::data::{CelestialBodyId, get_body_data};
    use crate::orbit::scale::{SCENE_SECONDS_PER_DAY, scene_radius};
    use approx::assert_relative_eq;

    #[test]
    fn test_sun_stays_at_origin() {
        let sun = get_body_data(CelestialBodyId::Sun);
        assert_eq!(solve_primary(&sun, 0.0), Ok(DVec3::ZERO));
        assert_eq!(solve_primary(&sun, 1.0e6), Ok(DVec3::ZERO));
    }

    #[test]
    fn test_circular_radius_is_constant() {
        for i in 0..16 {
            let theta = TAU * i as f64 / 16.0;
            assert_eq!(orbital_radius(42.0, 0.0, theta), 42.0);
        }
    }

    #[test]
    fn test_elliptical_extremes() {
        let a = 100.0;
        let e = 0.2;
        assert_relative_eq!(orbital_radius(a, e, 0.0), a * (1.0 - e), epsilon = 1e-9);
        assert_relative_eq!(
            orbital_radius(a, e, std::f64::consts::PI),
            a * (1.0 + e),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_polar_to_scene_axes() {
        let p = polar_to_scene(2.0, std::f64::consts::FRAC_PI_2, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, -2.0, epsilon = 1e-12);
        assert_eq!(polar_to_scene(1.0, 0.0, 3.0), DVec3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn test_planets_lie_in_ecliptic_plane() {
        for id in [CelestialBodyId::Mercury, CelestialBodyId::Earth, CelestialBodyId::Neptune] {
            let pos = solve_primary(&get_body_data(id), 1234.5).expect("valid planet");
            assert_eq!(pos.y, 0.0);
        }
    }

    #[test]
    fn test_planet_returns_after_one_period() {
        let earth = get_body_data(CelestialBodyId::Earth);
        let period = earth.orbital_period_days * SCENE_SECONDS_PER_DAY;
        let start = solve_primary(&earth, 10.0).expect("valid");
        let after = solve_primary(&earth, 10.0 + period).expect("valid");
        assert!(start.distance(after) < 1e-6, "{start} vs {after}");
    }

    #[test]
    fn test_invalid_eccentricity_is_rejected() {
        let mut earth = get_body_data(CelestialBodyId::Earth);
        earth.eccentricity = 1.0;
        assert!(matches!(
            solve_primary(&earth, 0.0),
            Err(OrbitError::InvalidEccentricity { body: CelestialBodyId::Earth, .. })
        ));
        earth.eccentricity = f64::NAN;
        assert!(solve_primary(&earth, 0.0).is_err());
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let mut mars = get_body_data(CelestialBodyId::Mars);
        mars.orbit_radius_mkm = f64::INFINITY;
        assert_eq!(
            solve_primary(&mars, 0.0),
            Err(OrbitError::NonFiniteResult { body: CelestialBodyId::Mars })
        );
    }

    #[test]
    fn test_moon_offset_from_parent() {
        let moon = get_body_data(CelestialBodyId::Moon);
        let parent_pos = DVec3::new(50.0, 0.0, -20.0);
        let parent_radius = scene_radius(12756.0);
        let pos = solve_moon(&moon, parent_pos, parent_radius, 77.0).expect("valid");
        let expected = moon_orbit_radius(moon.orbit_radius_mkm, parent_radius);
        assert_relative_eq!(pos.distance(parent_pos), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_moon_through_primary_solver_is_an_error() {
        let moon = get_body_data(CelestialBodyId::Moon);
        assert!(matches!(
            solve_primary(&moon, 0.0),
            Err(OrbitError::MissingParent { .. })
        ));
    }

    #[test]
    fn test_spin_direction() {
        let earth = get_body_data(CelestialBodyId::Earth);
        let venus = get_body_data(CelestialBodyId::Venus);
        assert!(spin_increment(&earth, 1.0) > 0.0);
        assert!(spin_increment(&venus, 1.0) < 0.0);
        assert_eq!(spin_increment(&earth, 0.0), 0.0);
    }

    #[test]
    fn test_earth_extremes() {
        let (peri, aph) = orbital_extremes(&get_body_data(CelestialBodyId::Earth))
            .expect("Earth has an orbit");
        assert_relative_eq!(peri, 147.1, epsilon = 0.05);
        assert_relative_eq!(aph, 152.1, epsilon = 0.05);
        assert!(orbital_extremes(&get_body_data(CelestialBodyId::Sun)).is_none());
    }

    #[test]
    fn test_orbit_path_is_closed() {
        let mercury = get_body_data(CelestialBodyId::Mercury);
        let path = orbit_path(&mercury, 64);
        assert_eq!(path.len(), 65);
        assert!(path[0].distance(path[64]) < 1e-9);
        assert!(orbit_path(&get_body_data(CelestialBodyId::Moon), 64).is_empty());
    }
}
