//! Orbit path rendering using Bevy Gizmos.
//!
//! Planet paths are the solver's ellipses, sampled once at startup. Moon
//! paths are circles around the parent's current position, so they are
//! drawn fresh every frame.

use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::orbit::data::BodyKind;
use crate::orbit::scale::{moon_orbit_radius, scene_radius};
use crate::orbit::solver::orbit_path;
use crate::orbit::{CelestialBodyId, PositionTable, Registry};
use crate::render::bodies::body_color;
use crate::selection::SelectionState;
use crate::settings::VisualSettings;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .init_resource::<OrbitPaths>()
            .add_systems(Startup, build_orbit_paths);
    }
}

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Number of segments for drawing the ellipse (higher = smoother).
    pub segments: usize,
    /// Alpha value for orbit path color.
    pub alpha: f32,
    /// Alpha for the selected body's path.
    pub selected_alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            segments: 256,
            alpha: 0.3,
            selected_alpha: 0.8,
        }
    }
}

/// Cached planet orbit polylines in scene space.
#[derive(Resource, Default)]
pub struct OrbitPaths(pub HashMap<CelestialBodyId, Vec<Vec3>>);

fn build_orbit_paths(
    registry: Res<Registry>,
    settings: Res<OrbitPathSettings>,
    mut paths: ResMut<OrbitPaths>,
) {
    paths.0 = registry
        .bodies()
        .iter()
        .filter(|b| b.kind == BodyKind::Planet)
        .map(|b| {
            let points = orbit_path(b, settings.segments);
            (b.id, points.into_iter().map(|p| p.as_vec3()).collect())
        })
        .collect();
}

fn path_color(id: CelestialBodyId, selected: bool, settings: &OrbitPathSettings) -> Color {
    let alpha = if selected { settings.selected_alpha } else { settings.alpha };
    body_color(id).with_alpha(alpha)
}

/// Draw planet orbits as cached ellipses.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    visual: Res<VisualSettings>,
    settings: Res<OrbitPathSettings>,
    selection: Res<SelectionState>,
    paths: Res<OrbitPaths>,
) {
    if !visual.show_orbits {
        return;
    }
    for (&id, points) in &paths.0 {
        let color = path_color(id, selection.selected() == Some(id), &settings);
        gizmos.linestrip(points.iter().copied(), color);
    }
}

/// Draw moon orbits around their parent's position this frame.
pub fn draw_moon_orbit_paths(
    mut gizmos: Gizmos,
    visual: Res<VisualSettings>,
    settings: Res<OrbitPathSettings>,
    selection: Res<SelectionState>,
    registry: Res<Registry>,
    table: Res<PositionTable>,
) {
    if !visual.show_orbits {
        return;
    }
    // Gizmo circles lie in the XY plane; rotate them onto the ecliptic
    let flat = Quat::from_rotation_x(FRAC_PI_2);

    for body in registry.bodies() {
        let BodyKind::Moon { parent } = body.kind else {
            continue;
        };
        let (Some(parent_data), Some(center)) = (registry.get(parent), table.position(parent))
        else {
            continue;
        };
        let radius = moon_orbit_radius(body.orbit_radius_mkm, scene_radius(parent_data.diameter_km));
        let color = path_color(body.id, selection.selected() == Some(body.id), &settings);
        gizmos
            .circle(Isometry3d::new(center.as_vec3(), flat), radius as f32, color)
            .resolution(64);
    }
}
