//! Hover and selection highlighting for celestial bodies.
//!
//! Picks the body under the pointer with a ray-sphere test and draws
//! wireframe spheres around hovered, selected and comparison bodies.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::MainCamera;
use crate::orbit::{CelestialBodyId, PositionTable};
use crate::render::bodies::CelestialBody;
use crate::selection::{HoveredBody, SelectionState};
use crate::types::SimulationSet;

/// Pick spheres are inflated so small bodies remain easy to hit.
pub const PICK_RADIUS_FACTOR: f32 = 1.5;

/// Smallest pick radius in scene units.
pub const MIN_PICK_RADIUS: f32 = 0.6;

/// Plugin providing hover highlighting.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        // Body transforms and the position table hold this frame's values
        // only after the sync step
        app.add_systems(
            Update,
            (detect_hover, draw_highlight)
                .chain()
                .after(SimulationSet::Sync),
        );
    }
}

/// Distance along the ray to the first intersection with a sphere, if any.
/// `direction` must be normalized.
pub fn ray_sphere_hit(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    let far = -b + sqrt_d;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // Ray starts inside the sphere
        Some(0.0)
    } else {
        None
    }
}

/// Nearest body along the ray. Candidates are `(id, center, visual radius)`.
pub fn pick_body(
    origin: Vec3,
    direction: Vec3,
    candidates: impl IntoIterator<Item = (CelestialBodyId, Vec3, f32)>,
) -> Option<CelestialBodyId> {
    candidates
        .into_iter()
        .filter_map(|(id, center, radius)| {
            let pick_radius = (radius * PICK_RADIUS_FACTOR).max(MIN_PICK_RADIUS);
            ray_sphere_hit(origin, direction, center, pick_radius).map(|t| (id, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Body under the cursor, or `None` when the cursor is outside the window.
///
/// Bodies are root entities, so their local `Transform` is already this
/// frame's world position; `GlobalTransform` is not refreshed until
/// `PostUpdate`.
pub fn body_under_cursor(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
    bodies: &Query<(&Transform, &CelestialBody)>,
) -> Option<CelestialBodyId> {
    let cursor_pos = window.cursor_position()?;
    let ray = camera.viewport_to_world(camera_transform, cursor_pos).ok()?;
    pick_body(
        ray.origin,
        *ray.direction,
        bodies
            .iter()
            .map(|(transform, body)| (body.id, transform.translation, body.radius)),
    )
}

/// Detect which celestial body the mouse is hovering over.
fn detect_hover(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(&Transform, &CelestialBody)>,
    mut hovered: ResMut<HoveredBody>,
    mut contexts: EguiContexts,
) {
    let over_ui = contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false);
    let (Ok(window), Ok((camera, camera_transform)), false) =
        (window_query.single(), camera_query.single(), over_ui)
    else {
        hovered.set_if_neq(HoveredBody(None));
        return;
    };

    hovered.set_if_neq(HoveredBody(body_under_cursor(
        window,
        camera,
        camera_transform,
        &bodies,
    )));
}

/// Wireframe sphere around a hovered, selected or target body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightSphere {
    pub id: CelestialBodyId,
    pub center: Vec3,
    pub radius: f32,
    pub color: Color,
}

/// Highlights for this frame, centered on the position table. Bodies are
/// `(id, visual radius)`; those without a position are skipped.
pub fn highlight_spheres(
    hovered: Option<CelestialBodyId>,
    selection: &SelectionState,
    table: &PositionTable,
    bodies: impl IntoIterator<Item = (CelestialBodyId, f32)>,
) -> Vec<HighlightSphere> {
    let marks = [
        (hovered, Color::srgba(0.0, 1.0, 1.0, 0.6), 1.3),
        (selection.selected(), Color::srgba(1.0, 1.0, 1.0, 0.9), 1.5),
        (selection.target(), Color::srgba(1.0, 0.6, 0.1, 0.9), 1.5),
    ];

    let mut spheres = Vec::new();
    for (id, radius) in bodies {
        let Some(center) = table.position(id) else {
            continue;
        };
        for (mark, color, factor) in marks {
            if mark == Some(id) {
                spheres.push(HighlightSphere {
                    id,
                    center: center.as_vec3(),
                    radius: (radius * factor).max(MIN_PICK_RADIUS),
                    color,
                });
            }
        }
    }
    spheres
}

/// Draw highlight spheres around the hovered, selected and target bodies.
fn draw_highlight(
    mut gizmos: Gizmos,
    hovered: Res<HoveredBody>,
    selection: Res<SelectionState>,
    table: Res<PositionTable>,
    bodies: Query<&CelestialBody>,
) {
    let spheres = highlight_spheres(
        hovered.0,
        &selection,
        &table,
        bodies.iter().map(|body| (body.id, body.radius)),
    );
    for sphere in spheres {
        gizmos
            .sphere(Isometry3d::from_translation(sphere.center), sphere.radius, sphere.color)
            .resolution(24);
    }
}
