//! Camera system for the solar-system viewer.
//!
//! Two modes share one perspective camera:
//! - orbit: drag to rotate around a focus point, scroll to zoom, right or
//!   middle drag to pan; the focus can track a body;
//! - free flight: the key bindings fly the camera in its local frame and a
//!   left drag turns it in place.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::orbit::{CelestialBodyId, PositionTable};
use crate::settings::{ControlSettings, KeyBindings, TARGET_PICK_MODIFIERS};
use crate::types::SimulationSet;

/// Initial eye position, looking at the Sun.
pub const INITIAL_EYE: Vec3 = Vec3::new(0.0, 70.0, 150.0);

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 45.0;

/// Closest orbit distance from the focus.
pub const MIN_DISTANCE: f32 = 15.0;

/// Furthest orbit distance from the focus.
pub const MAX_DISTANCE: f32 = 3000.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Radians of rotation per pixel of drag at sensitivity 1.
pub const ROTATE_SPEED: f32 = 0.005;

/// Fraction of the orbit distance panned per pixel of drag.
pub const PAN_SPEED: f32 = 0.0015;

/// Free-flight speed in scene units per second at movement speed 1.
pub const FREE_FLIGHT_SPEED: f32 = 50.0;

/// Speed multiplier while the boost key is held.
pub const BOOST_MULTIPLIER: f32 = 2.0;

/// Rate at which a tracked focus catches up with its body.
pub const TRACK_SMOOTHING: f32 = 5.0;

/// Pitch limit keeping the orbit camera off the poles.
const MAX_PITCH: f32 = 1.54;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Orbit camera parameters. The eye sits `distance` away from `focus` in the
/// direction given by `yaw` (around +y) and `pitch` (above the ecliptic).
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_eye(INITIAL_EYE, Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn from_eye(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let pitch = (offset.y / offset.length().max(f32::EPSILON))
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-MAX_PITCH, MAX_PITCH);
        let yaw = offset.x.atan2(offset.z);
        Self {
            focus,
            yaw,
            pitch,
            distance,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.focus + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }

    /// Logarithmic zoom; positive scroll moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        let factor = (1.0 - scroll * ZOOM_SPEED).max(0.0);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn rotate(&mut self, drag: Vec2, sensitivity: f32, invert_y: bool) {
        let dy = if invert_y { -drag.y } else { drag.y };
        self.yaw -= drag.x * ROTATE_SPEED * sensitivity;
        self.pitch = (self.pitch + dy * ROTATE_SPEED * sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Move the focus in the view plane.
    pub fn pan(&mut self, drag: Vec2) {
        let transform = self.transform();
        let scale = self.distance * PAN_SPEED;
        self.focus += (-drag.x * *transform.right() + drag.y * *transform.up()) * scale;
    }
}

/// Body the orbit camera follows, if any.
#[derive(Resource)]
pub struct CameraFocus {
    pub tracking: Option<CelestialBodyId>,
    pub smooth_speed: f32,
}

impl Default for CameraFocus {
    fn default() -> Self {
        Self {
            tracking: None,
            smooth_speed: TRACK_SMOOTHING,
        }
    }
}

/// Local movement direction from the held keys, normalized.
/// -z is forward, +x is right, +y is up.
///
/// While `picking` (left button held), keys that double as target-pick
/// modifiers do not move the camera.
pub fn flight_direction(
    bindings: &KeyBindings,
    keys: &ButtonInput<KeyCode>,
    picking: bool,
) -> Vec3 {
    let held =
        |key: KeyCode| keys.pressed(key) && !(picking && TARGET_PICK_MODIFIERS.contains(&key));
    let axis = |pos: KeyCode, neg: KeyCode| (held(pos) as i32 - held(neg) as i32) as f32;
    Vec3::new(
        axis(bindings.right, bindings.left),
        axis(bindings.up, bindings.down),
        axis(bindings.backward, bindings.forward),
    )
    .normalize_or_zero()
}

/// Free-flight speed in scene units per second.
pub fn flight_speed(movement_speed: f32, boost: bool) -> f32 {
    let multiplier = if boost { BOOST_MULTIPLIER } else { 1.0 };
    movement_speed * multiplier * FREE_FLIGHT_SPEED
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .init_resource::<CameraFocus>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    sync_camera_mode,
                    orbit_controls,
                    free_flight,
                    track_focus,
                    apply_orbit_camera,
                )
                    .chain()
                    .after(SimulationSet::Sync),
            );
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 20_000.0,
            ..default()
        }),
        orbit.transform(),
        MainCamera,
    ));
}

fn pointer_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
        .unwrap_or(false)
}

/// Re-derive the orbit parameters when leaving free flight, so the view does
/// not jump back to where the orbit camera was.
fn sync_camera_mode(
    settings: Res<ControlSettings>,
    mut was_free: Local<bool>,
    mut orbit: ResMut<OrbitCamera>,
    mut focus: ResMut<CameraFocus>,
    camera: Query<&Transform, With<MainCamera>>,
) {
    if settings.free_camera == *was_free {
        return;
    }
    *was_free = settings.free_camera;

    if settings.free_camera {
        focus.tracking = None;
        info!("Free-flight camera enabled");
    } else if let Ok(transform) = camera.single() {
        let target = transform.translation + *transform.forward() * orbit.distance;
        *orbit = OrbitCamera::from_eye(transform.translation, target);
        info!("Orbit camera enabled");
    }
}

/// Rotate, zoom and pan the orbit camera from mouse input.
fn orbit_controls(
    settings: Res<ControlSettings>,
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut orbit: ResMut<OrbitCamera>,
    mut focus: ResMut<CameraFocus>,
    mut contexts: EguiContexts,
) {
    if settings.free_camera || pointer_over_ui(&mut contexts) {
        return;
    }

    if scroll.delta.y != 0.0 {
        orbit.zoom(scroll.delta.y);
    }

    if motion.delta == Vec2::ZERO {
        return;
    }

    if buttons.pressed(MouseButton::Left) {
        orbit.rotate(motion.delta, settings.mouse_sensitivity(), settings.invert_y);
    } else if buttons.pressed(MouseButton::Right) || buttons.pressed(MouseButton::Middle) {
        // Panning hands control back from tracking
        focus.tracking = None;
        orbit.pan(motion.delta);
    }
}

/// Fly the camera with the bound keys and turn it with a left drag.
fn free_flight(
    settings: Res<ControlSettings>,
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    time: Res<Time>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    if !settings.free_camera {
        return;
    }
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    let wants_keyboard = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false);

    if !wants_keyboard {
        let bindings = settings.key_bindings();
        let direction = flight_direction(bindings, &keys, buttons.pressed(MouseButton::Left));
        if direction != Vec3::ZERO {
            let speed = flight_speed(settings.movement_speed(), keys.pressed(bindings.boost));
            let movement = transform.rotation * direction * speed * time.delta_secs();
            transform.translation += movement;
        }
    }

    if buttons.pressed(MouseButton::Left) && !pointer_over_ui(&mut contexts) {
        let sensitivity = settings.mouse_sensitivity() * ROTATE_SPEED;
        let dy = if settings.invert_y { motion.delta.y } else { -motion.delta.y };
        let (yaw, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);
        let yaw = yaw - motion.delta.x * sensitivity;
        let pitch = (pitch + dy * sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
        transform.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
    }
}

/// Ease the orbit focus towards the tracked body.
fn track_focus(
    settings: Res<ControlSettings>,
    table: Res<PositionTable>,
    time: Res<Time>,
    mut focus: ResMut<CameraFocus>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if settings.free_camera {
        return;
    }
    let Some(id) = focus.tracking else {
        return;
    };
    let Some(target) = table.position(id) else {
        warn!("Stopped tracking {}: no position", id);
        focus.tracking = None;
        return;
    };
    let t = 1.0 - (-focus.smooth_speed * time.delta_secs()).exp();
    orbit.focus = orbit.focus.lerp(target.as_vec3(), t);
}

fn apply_orbit_camera(
    settings: Res<ControlSettings>,
    orbit: Res<OrbitCamera>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    if settings.free_camera || !orbit.is_changed() {
        return;
    }
    if let Ok(mut transform) = camera.single_mut() {
        *transform = orbit.transform();
    }
}
