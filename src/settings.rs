//! User-tunable visual and control settings.
//!
//! Values are clamped by the setters; the UI only ever calls those.

use std::ops::RangeInclusive;

use bevy::prelude::*;

pub const SUN_INTENSITY_RANGE: RangeInclusive<f32> = 0.5..=3.0;
pub const AMBIENT_INTENSITY_RANGE: RangeInclusive<f32> = 0.02..=0.3;
pub const BLOOM_INTENSITY_RANGE: RangeInclusive<f32> = 0.5..=3.0;
pub const MOVEMENT_SPEED_RANGE: RangeInclusive<f32> = 0.1..=5.0;
pub const MOUSE_SENSITIVITY_RANGE: RangeInclusive<f32> = 0.1..=3.0;

/// Keys that keep their UI meaning and cannot be bound to movement.
pub const RESERVED_KEYS: [KeyCode; 3] = [KeyCode::Escape, KeyCode::Tab, KeyCode::Enter];

/// Modifiers that turn a body click into a comparison-target pick. Flight
/// bindings on these keys are ignored while the left button is held.
pub const TARGET_PICK_MODIFIERS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::ShiftRight];

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{0:?} is reserved and cannot be bound")]
    ReservedKey(KeyCode),
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

/// Lighting and overlay settings.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct VisualSettings {
    sun_intensity: f32,
    ambient_intensity: f32,
    bloom_intensity: f32,
    pub show_orbits: bool,
    pub show_labels: bool,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            sun_intensity: 1.5,
            ambient_intensity: 0.1,
            bloom_intensity: 1.5,
            show_orbits: true,
            show_labels: true,
        }
    }
}

impl VisualSettings {
    pub fn sun_intensity(&self) -> f32 {
        self.sun_intensity
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ambient_intensity
    }

    pub fn bloom_intensity(&self) -> f32 {
        self.bloom_intensity
    }

    pub fn set_sun_intensity(&mut self, value: f32) {
        self.sun_intensity = clamp_to(value, &SUN_INTENSITY_RANGE);
    }

    pub fn set_ambient_intensity(&mut self, value: f32) {
        self.ambient_intensity = clamp_to(value, &AMBIENT_INTENSITY_RANGE);
    }

    pub fn set_bloom_intensity(&mut self, value: f32) {
        self.bloom_intensity = clamp_to(value, &BLOOM_INTENSITY_RANGE);
    }
}

/// Free-flight actions that can be rebound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingAction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
    Boost,
}

impl BindingAction {
    pub const ALL: [BindingAction; 7] = [
        BindingAction::Forward,
        BindingAction::Backward,
        BindingAction::Left,
        BindingAction::Right,
        BindingAction::Up,
        BindingAction::Down,
        BindingAction::Boost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BindingAction::Forward => "Move forward",
            BindingAction::Backward => "Move backward",
            BindingAction::Left => "Move left",
            BindingAction::Right => "Move right",
            BindingAction::Up => "Move up",
            BindingAction::Down => "Move down",
            BindingAction::Boost => "Speed boost",
        }
    }
}

/// Key assigned to each free-flight action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub boost: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            up: KeyCode::Space,
            down: KeyCode::ShiftLeft,
            boost: KeyCode::ControlLeft,
        }
    }
}

impl KeyBindings {
    pub fn key(&self, action: BindingAction) -> KeyCode {
        match action {
            BindingAction::Forward => self.forward,
            BindingAction::Backward => self.backward,
            BindingAction::Left => self.left,
            BindingAction::Right => self.right,
            BindingAction::Up => self.up,
            BindingAction::Down => self.down,
            BindingAction::Boost => self.boost,
        }
    }

    fn slot(&mut self, action: BindingAction) -> &mut KeyCode {
        match action {
            BindingAction::Forward => &mut self.forward,
            BindingAction::Backward => &mut self.backward,
            BindingAction::Left => &mut self.left,
            BindingAction::Right => &mut self.right,
            BindingAction::Up => &mut self.up,
            BindingAction::Down => &mut self.down,
            BindingAction::Boost => &mut self.boost,
        }
    }

    /// Action currently bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<BindingAction> {
        BindingAction::ALL.into_iter().find(|&a| self.key(a) == key)
    }
}

/// Camera control settings.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ControlSettings {
    key_bindings: KeyBindings,
    movement_speed: f32,
    mouse_sensitivity: f32,
    pub invert_y: bool,
    pub free_camera: bool,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            key_bindings: KeyBindings::default(),
            movement_speed: 1.0,
            mouse_sensitivity: 1.0,
            invert_y: false,
            free_camera: false,
        }
    }
}

impl ControlSettings {
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Bind `key` to `action`. If another action already uses `key`, the two
    /// actions swap keys so no action is left unbound.
    pub fn rebind(&mut self, action: BindingAction, key: KeyCode) -> Result<(), SettingsError> {
        if RESERVED_KEYS.contains(&key) {
            return Err(SettingsError::ReservedKey(key));
        }
        let previous = self.key_bindings.key(action);
        if let Some(other) = self.key_bindings.action_for(key)
            && other != action
        {
            *self.key_bindings.slot(other) = previous;
        }
        *self.key_bindings.slot(action) = key;
        Ok(())
    }

    pub fn reset_key_bindings(&mut self) {
        self.key_bindings = KeyBindings::default();
    }

    pub fn toggle_invert_y(&mut self) {
        self.invert_y = !self.invert_y;
    }

    pub fn toggle_free_camera(&mut self) {
        self.free_camera = !self.free_camera;
    }

    pub fn set_movement_speed(&mut self, value: f32) {
        self.movement_speed = clamp_to(value, &MOVEMENT_SPEED_RANGE);
    }

    pub fn set_mouse_sensitivity(&mut self, value: f32) {
        self.mouse_sensitivity = clamp_to(value, &MOUSE_SENSITIVITY_RANGE);
    }
}

/// Action waiting for its next key press in the settings panel.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCapture(pub Option<BindingAction>);

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VisualSettings>()
            .init_resource::<ControlSettings>()
            .init_resource::<KeyCapture>();
    }
}
