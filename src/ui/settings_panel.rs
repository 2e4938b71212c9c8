//! Settings window with camera controls and key rebinding.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{UiState, colors, icons, panel_frame};
use crate::settings::{
    BindingAction, ControlSettings, KeyCapture, MOUSE_SENSITIVITY_RANGE, MOVEMENT_SPEED_RANGE,
    SettingsError,
};

/// Tabs of the settings window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    General,
    KeyBindings,
}

/// Display name for a key: `KeyW` -> "W", `Digit1` -> "1",
/// `ShiftLeft` -> "Left Shift".
pub fn key_label(key: KeyCode) -> String {
    match key {
        KeyCode::Space => return "Space".to_string(),
        KeyCode::ShiftLeft => return "Left Shift".to_string(),
        KeyCode::ShiftRight => return "Right Shift".to_string(),
        KeyCode::ControlLeft => return "Left Ctrl".to_string(),
        KeyCode::ControlRight => return "Right Ctrl".to_string(),
        KeyCode::AltLeft => return "Left Alt".to_string(),
        KeyCode::AltRight => return "Right Alt".to_string(),
        _ => {}
    }
    let name = format!("{key:?}");
    ["Key", "Digit", "Arrow"]
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .map(str::to_string)
        .unwrap_or(name)
}

/// Feed a captured key press into the pending rebind.
///
/// Escape cancels the capture. Either way the capture ends.
pub fn capture_key(
    controls: &mut ControlSettings,
    capture: &mut KeyCapture,
    key: KeyCode,
) -> Result<(), SettingsError> {
    let Some(action) = capture.0.take() else {
        return Ok(());
    };
    if key == KeyCode::Escape {
        return Ok(());
    }
    controls.rebind(action, key)?;
    info!("Bound {} to {}", action.label(), key_label(key));
    Ok(())
}

/// Renders the settings window and finishes pending key captures.
pub fn settings_panel_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut controls: ResMut<ControlSettings>,
    mut capture: ResMut<KeyCapture>,
    keys: Res<ButtonInput<KeyCode>>,
) -> Result {
    if capture.0.is_some()
        && let Some(&key) = keys.get_just_pressed().next()
    {
        ui_state.binding_error = match capture_key(&mut controls, &mut capture, key) {
            Ok(()) => None,
            Err(err) => {
                warn!("Key binding rejected: {}", err);
                Some(err.to_string())
            }
        };
    }

    if !ui_state.settings_open {
        capture.0 = None;
        return Ok(());
    }
    let ctx = contexts.ctx_mut()?;

    let mut open = true;
    egui::Window::new(format!("{} Settings", icons::SETTINGS))
        .id(egui::Id::new("settings_panel"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(300.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(panel_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut ui_state.settings_tab, SettingsTab::General, "General");
                ui.selectable_value(
                    &mut ui_state.settings_tab,
                    SettingsTab::KeyBindings,
                    format!("{} Keys", icons::KEYBOARD),
                );
            });
            ui.separator();

            let tab = ui_state.settings_tab;
            match tab {
                SettingsTab::General => render_general_tab(ui, &mut controls),
                SettingsTab::KeyBindings => {
                    render_bindings_tab(ui, &mut controls, &mut capture, &mut ui_state.binding_error)
                }
            }
        });

    if !open {
        ui_state.settings_open = false;
        capture.0 = None;
    }
    Ok(())
}

fn render_general_tab(ui: &mut egui::Ui, controls: &mut ControlSettings) {
    egui::Grid::new("general_settings").num_columns(2).show(ui, |ui| {
        let mut speed = controls.movement_speed();
        ui.label("Movement speed");
        if ui
            .add(egui::Slider::new(&mut speed, MOVEMENT_SPEED_RANGE).step_by(0.1).suffix("x"))
            .changed()
        {
            controls.set_movement_speed(speed);
        }
        ui.end_row();

        let mut sensitivity = controls.mouse_sensitivity();
        ui.label("Mouse sensitivity");
        if ui
            .add(egui::Slider::new(&mut sensitivity, MOUSE_SENSITIVITY_RANGE).step_by(0.1))
            .changed()
        {
            controls.set_mouse_sensitivity(sensitivity);
        }
        ui.end_row();
    });

    let mut invert_y = controls.invert_y;
    if ui.checkbox(&mut invert_y, "Invert Y axis").changed() {
        controls.toggle_invert_y();
    }
    let mut free_camera = controls.free_camera;
    if ui
        .checkbox(&mut free_camera, format!("{} Free flight camera", icons::FLIGHT))
        .changed()
    {
        controls.toggle_free_camera();
    }
}

fn render_bindings_tab(
    ui: &mut egui::Ui,
    controls: &mut ControlSettings,
    capture: &mut KeyCapture,
    binding_error: &mut Option<String>,
) {
    ui.label(
        egui::RichText::new("Click a binding, then press the new key. Esc cancels.")
            .small()
            .color(colors::MUTED),
    );
    ui.add_space(4.0);

    egui::Grid::new("key_bindings")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for action in BindingAction::ALL {
                ui.label(action.label());
                let waiting = capture.0 == Some(action);
                let text = if waiting {
                    egui::RichText::new("Press a key...").color(colors::ACCENT)
                } else {
                    egui::RichText::new(key_label(controls.key_bindings().key(action))).monospace()
                };
                if ui
                    .add(egui::Button::new(text).min_size(egui::vec2(110.0, 0.0)))
                    .clicked()
                {
                    capture.0 = if waiting { None } else { Some(action) };
                    *binding_error = None;
                }
                ui.end_row();
            }
        });

    if let Some(err) = binding_error {
        ui.colored_label(colors::ERROR, format!("{} {}", icons::WARNING, err));
    }

    ui.add_space(6.0);
    if ui.button(format!("{} Reset to defaults", icons::RESET)).clicked() {
        controls.reset_key_bindings();
        capture.0 = None;
        *binding_error = None;
        info!("Key bindings reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::KeyBindings;

    #[test]
    fn test_key_labels() {
        assert_eq!(key_label(KeyCode::KeyW), "W");
        assert_eq!(key_label(KeyCode::Digit3), "3");
        assert_eq!(key_label(KeyCode::ArrowUp), "Up");
        assert_eq!(key_label(KeyCode::ShiftLeft), "Left Shift");
        assert_eq!(key_label(KeyCode::Tab), "Tab");
    }

    #[test]
    fn test_capture_rebinds_and_ends() {
        let mut controls = ControlSettings::default();
        let mut capture = KeyCapture(Some(BindingAction::Up));
        capture_key(&mut controls, &mut capture, KeyCode::KeyE).expect("E is bindable");
        assert_eq!(controls.key_bindings().up, KeyCode::KeyE);
        assert_eq!(capture.0, None);
    }

    #[test]
    fn test_escape_cancels_capture() {
        let mut controls = ControlSettings::default();
        let mut capture = KeyCapture(Some(BindingAction::Forward));
        capture_key(&mut controls, &mut capture, KeyCode::Escape).expect("cancel is not an error");
        assert_eq!(capture.0, None);
        assert_eq!(controls.key_bindings(), &KeyBindings::default());
    }

    #[test]
    fn test_reserved_key_reported() {
        let mut controls = ControlSettings::default();
        let mut capture = KeyCapture(Some(BindingAction::Boost));
        assert_eq!(
            capture_key(&mut controls, &mut capture, KeyCode::Tab),
            Err(SettingsError::ReservedKey(KeyCode::Tab))
        );
        assert_eq!(capture.0, None);
    }

    #[test]
    fn test_no_capture_is_noop() {
        let mut controls = ControlSettings::default();
        let mut capture = KeyCapture::default();
        capture_key(&mut controls, &mut capture, KeyCode::KeyQ).expect("nothing pending");
        assert_eq!(controls.key_bindings(), &KeyBindings::default());
    }
}
