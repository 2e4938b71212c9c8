//! Conversion from real-world units to scene units.
//!
//! True proportions would make the Sun fill the inner system and leave moons
//! sub-pixel, so sizes and distances use independent factors with floor
//! clamps that keep every body visible and clickable.

use std::f64::consts::TAU;

/// Scene radius per km of real diameter.
pub const SIZE_SCALE_FACTOR: f64 = 0.00001;

/// Smallest scene radius any body is drawn with.
pub const MIN_VISIBLE_RADIUS: f64 = 0.2;

/// Scene units per million km of heliocentric distance.
pub const DISTANCE_SCALE: f64 = 0.5;

/// Scene units per million km of moon orbit radius.
pub const MOON_DISTANCE_SCALE: f64 = 40.0;

/// Gap between a parent's visual surface and its moons' orbits.
pub const MOON_CLEARANCE: f64 = 1.0;

/// Scene seconds per simulated day.
pub const SCENE_SECONDS_PER_DAY: f64 = 0.5;

/// Spin rate numerator: radians per scene second per hour of rotation period.
pub const ROTATION_CONSTANT: f64 = 0.005;

/// Gain applied to spin rates so slow rotators still visibly turn.
pub const SPIN_GAIN: f64 = 50.0;

/// Scene radius for a body of the given real diameter.
pub fn scene_radius(real_diameter_km: f64) -> f64 {
    (real_diameter_km * SIZE_SCALE_FACTOR).max(MIN_VISIBLE_RADIUS)
}

/// Axial spin rate in radians per scene second. Negative periods spin
/// backwards; a zero period gives a body that does not spin.
pub fn angular_rotation_rate(rotation_period_hours: f64) -> f64 {
    if rotation_period_hours == 0.0 || !rotation_period_hours.is_finite() {
        0.0
    } else {
        ROTATION_CONSTANT / rotation_period_hours
    }
}

/// Orbital angular speed in radians per scene second.
///
/// A zero, negative or non-finite period means the orbital data is missing
/// and the body stays put.
pub fn angular_orbital_speed(orbital_period_days: f64) -> f64 {
    if orbital_period_days > 0.0 && orbital_period_days.is_finite() {
        TAU / (orbital_period_days * SCENE_SECONDS_PER_DAY)
    } else {
        0.0
    }
}

/// Heliocentric distance in scene units.
pub fn scene_distance(real_mkm: f64) -> f64 {
    real_mkm * DISTANCE_SCALE
}

/// Inverse of [`scene_distance`], for display.
pub fn scene_to_mkm(scene: f64) -> f64 {
    scene / DISTANCE_SCALE
}

/// Moon orbit radius in scene units, measured from the parent's center.
pub fn moon_orbit_radius(real_mkm: f64, parent_scene_radius: f64) -> f64 {
    parent_scene_radius + MOON_CLEARANCE + real_mkm * MOON_DISTANCE_SCALE
}
