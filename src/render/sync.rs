//! Position synchronization between the engine and rendering.
//!
//! Copies each body's position and spin from the `PositionTable` into its
//! `Transform`. Rings and atmosphere shells are children and follow along.

use bevy::prelude::*;

use crate::orbit::PositionTable;
use crate::render::bodies::CelestialBody;

/// Orientation of a body: spin about its own axis, then the axial tilt.
pub fn body_rotation(tilt: f32, spin: f64) -> Quat {
    Quat::from_rotation_z(tilt) * Quat::from_rotation_y(spin as f32)
}

/// Sync celestial body transforms from the position table.
///
/// Bodies without an entry keep their last transform.
pub fn sync_celestial_positions(
    mut query: Query<(&mut Transform, &CelestialBody)>,
    table: Res<PositionTable>,
) {
    for (mut transform, body) in query.iter_mut() {
        let Some(frame) = table.get(body.id) else {
            continue;
        };
        transform.translation = frame.position.as_vec3();
        transform.rotation = body_rotation(body.tilt, frame.spin);
    }
}
