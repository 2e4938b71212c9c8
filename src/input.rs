//! Input handling for keyboard shortcuts and pointer picking.
//!
//! Keyboard: `+`/`=` speed up, `-` slow down, `0` reset speed, `P` pause,
//! `F` track the selected body, `Escape` clear the selection.
//! Pointer: a click selects the body under the cursor, Shift+click sets the
//! comparison target. Drags belong to the camera and never select.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::{CameraFocus, MainCamera};
use crate::orbit::CelestialBodyId;
use crate::render::CelestialBody;
use crate::render::highlight::body_under_cursor;
use crate::selection::{SelectionChanged, SelectionState};
use crate::settings::{ControlSettings, KeyCapture, TARGET_PICK_MODIFIERS};
use crate::types::{SimulationClock, SimulationSet};

/// Pointer travel in logical pixels above which a press is a drag.
pub const CLICK_DRAG_THRESHOLD: f32 = 5.0;

/// Keyboard command recognized by [`shortcut_for`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    SpeedUp,
    SlowDown,
    ResetSpeed,
    TogglePause,
    TrackSelected,
    ClearSelection,
}

/// Map a key to its shortcut.
pub fn shortcut_for(key: KeyCode) -> Option<Shortcut> {
    match key {
        KeyCode::Equal | KeyCode::NumpadAdd => Some(Shortcut::SpeedUp),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(Shortcut::SlowDown),
        KeyCode::Digit0 | KeyCode::Numpad0 => Some(Shortcut::ResetSpeed),
        KeyCode::KeyP => Some(Shortcut::TogglePause),
        KeyCode::KeyF => Some(Shortcut::TrackSelected),
        KeyCode::Escape => Some(Shortcut::ClearSelection),
        _ => None,
    }
}

/// Apply a shortcut to the simulation state.
pub fn apply_shortcut(
    shortcut: Shortcut,
    clock: &mut SimulationClock,
    selection: &mut SelectionState,
    focus: &mut CameraFocus,
) {
    match shortcut {
        Shortcut::SpeedUp => {
            clock.speed_up();
            info!("Time scale: {:.2}x", clock.time_scale);
        }
        Shortcut::SlowDown => {
            clock.slow_down();
            info!("Time scale: {:.2}x", clock.time_scale);
        }
        Shortcut::ResetSpeed => {
            clock.reset_time_scale();
            info!("Time scale: 1x");
        }
        Shortcut::TogglePause => {
            clock.paused = !clock.paused;
            info!("Simulation {}", if clock.paused { "paused" } else { "running" });
        }
        Shortcut::TrackSelected => {
            focus.tracking = selection.selected();
            if let Some(id) = focus.tracking {
                info!("Tracking {}", id);
            }
        }
        Shortcut::ClearSelection => {
            selection.clear();
            focus.tracking = None;
        }
    }
}

/// Whether a press/release pair is a click rather than a drag.
pub fn is_click(pressed_at: Vec2, released_at: Vec2) -> bool {
    pressed_at.distance(released_at) <= CLICK_DRAG_THRESHOLD
}

/// Apply a pick result. Shift-clicks set the comparison target; plain clicks
/// select. Clicking empty space changes nothing.
pub fn apply_pick(
    selection: &mut SelectionState,
    picked: Option<CelestialBodyId>,
    as_target: bool,
) -> Option<CelestialBodyId> {
    let id = picked?;
    if as_target {
        selection.set_target(Some(id));
        None
    } else {
        selection.select(Some(id));
        Some(id)
    }
}

/// Resource tracking where the current left press started.
#[derive(Resource, Default)]
pub struct ClickState {
    pub pressed_at: Option<Vec2>,
}

/// Plugin providing keyboard shortcuts and click picking.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClickState>()
            .add_systems(
                Update,
                (keyboard_shortcuts, click_to_select.after(SimulationSet::Sync)),
            );
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    capture: Res<KeyCapture>,
    settings: Res<ControlSettings>,
    mut clock: ResMut<SimulationClock>,
    mut selection: ResMut<SelectionState>,
    mut focus: ResMut<CameraFocus>,
    mut changes: MessageWriter<SelectionChanged>,
    mut contexts: EguiContexts,
) {
    // The settings panel is waiting for a key to bind
    if capture.0.is_some() {
        return;
    }
    let typing = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false);
    if typing {
        return;
    }

    for &key in keys.get_just_pressed() {
        // Keys bound for flight belong to the camera while flying
        if settings.free_camera && settings.key_bindings().action_for(key).is_some() {
            continue;
        }
        let Some(shortcut) = shortcut_for(key) else {
            continue;
        };
        let had_selection = selection.selected().is_some();
        apply_shortcut(shortcut, &mut clock, &mut selection, &mut focus);
        if shortcut == Shortcut::ClearSelection && had_selection {
            changes.write(SelectionChanged(None));
        }
    }
}

/// Select the body under the cursor on a left click.
#[allow(clippy::too_many_arguments)]
fn click_to_select(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(&Transform, &CelestialBody)>,
    mut click: ResMut<ClickState>,
    mut selection: ResMut<SelectionState>,
    mut changes: MessageWriter<SelectionChanged>,
    mut contexts: EguiContexts,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        let over_ui = contexts
            .ctx_mut()
            .map(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
            .unwrap_or(false);
        click.pressed_at = if over_ui { None } else { window.cursor_position() };
    }

    if !mouse.just_released(MouseButton::Left) {
        return;
    }
    let (Some(pressed_at), Some(released_at)) = (click.pressed_at.take(), window.cursor_position())
    else {
        return;
    };
    if !is_click(pressed_at, released_at) {
        return;
    }
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let picked = body_under_cursor(window, camera, camera_transform, &bodies);
    let as_target = keys.any_pressed(TARGET_PICK_MODIFIERS);
    if let Some(id) = apply_pick(&mut selection, picked, as_target) {
        changes.write(SelectionChanged(Some(id)));
    } else if as_target && let Some(target) = selection.target() {
        info!("Comparing with {}", target);
    }
}
