//! Control panel: time, lighting, view toggles and the body list.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{UiState, colors, icons, panel_frame};
use crate::camera::CameraFocus;
use crate::orbit::{BodyKind, CelestialBodyData, Registry};
use crate::selection::{SelectionChanged, SelectionState};
use crate::settings::{
    AMBIENT_INTENSITY_RANGE, BLOOM_INTENSITY_RANGE, ControlSettings, SUN_INTENSITY_RANGE,
    VisualSettings,
};
use crate::types::SimulationClock;

/// Preset speeds offered as buttons.
pub const SPEED_PRESETS: [f64; 5] = [0.5, 1.0, 2.0, 5.0, 10.0];

/// Whether `scale` matches a preset closely enough to highlight it.
fn is_preset_active(scale: f64, preset: f64) -> bool {
    (scale - preset).abs() < 0.01
}

/// Renders the control panel window.
pub fn control_panel_system(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    mut visual: ResMut<VisualSettings>,
    mut controls: ResMut<ControlSettings>,
    mut selection: ResMut<SelectionState>,
    mut focus: ResMut<CameraFocus>,
    mut ui_state: ResMut<UiState>,
    mut changes: MessageWriter<SelectionChanged>,
    registry: Res<Registry>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::Window::new("Solar System")
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .resizable(false)
        .collapsible(true)
        .default_width(240.0)
        .frame(panel_frame())
        .show(ctx, |ui| {
            render_time_controls(ui, &mut clock);
            ui.separator();
            render_light_sliders(ui, &mut visual);
            ui.separator();
            render_toggles(ui, &mut visual, &mut controls, &mut ui_state);
            ui.separator();

            egui::CollapsingHeader::new("Bodies")
                .default_open(true)
                .show(ui, |ui| {
                    egui::ScrollArea::vertical()
                        .max_height(320.0)
                        .show(ui, |ui| {
                            if let Some(id) = render_body_list(ui, &registry, &selection) {
                                selection.select(Some(id));
                                changes.write(SelectionChanged(Some(id)));
                            }
                        });
                });

            if let Some(id) = selection.selected() {
                ui.add_space(4.0);
                let tracking = focus.tracking == Some(id);
                let label = format!("{} Follow {}", icons::TRACK, id);
                if ui.selectable_label(tracking, label).on_hover_text("F").clicked() {
                    focus.tracking = if tracking { None } else { Some(id) };
                }
            }
        });

    Ok(())
}

fn render_time_controls(ui: &mut egui::Ui, clock: &mut SimulationClock) {
    ui.horizontal(|ui| {
        let (icon, color, tooltip) = if clock.paused {
            (icons::PLAY, colors::PLAY_ICON, "Play (P)")
        } else {
            (icons::PAUSE, colors::PAUSE_ICON, "Pause (P)")
        };
        let button = egui::Button::new(icons::icon_colored(icon, 20.0, color))
            .min_size(egui::vec2(36.0, 30.0));
        if ui.add(button).on_hover_text(tooltip).clicked() {
            clock.paused = !clock.paused;
        }

        if ui.button(icons::SLOWER).on_hover_text("Slower (-)").clicked() {
            clock.slow_down();
        }
        if ui.button(icons::FASTER).on_hover_text("Faster (+)").clicked() {
            clock.speed_up();
        }
        if ui.button(icons::RESET).on_hover_text("Normal speed (0)").clicked() {
            clock.reset_time_scale();
        }

        ui.label(
            egui::RichText::new(format!("{:.2}x", clock.time_scale))
                .monospace()
                .color(colors::ACCENT),
        );
    });

    ui.horizontal(|ui| {
        for preset in SPEED_PRESETS {
            let active = is_preset_active(clock.time_scale, preset);
            if ui.selectable_label(active, format!("{preset}x")).clicked() {
                clock.set_time_scale(preset);
            }
        }
    });

    ui.horizontal(|ui| {
        ui.label(icons::icon_colored(icons::CLOCK, 14.0, colors::MUTED));
        ui.label(egui::RichText::new(clock.date_string()).monospace().color(colors::TEXT));
    });
}

fn render_light_sliders(ui: &mut egui::Ui, visual: &mut VisualSettings) {
    egui::Grid::new("light_sliders").num_columns(2).show(ui, |ui| {
        let mut sun = visual.sun_intensity();
        ui.label(format!("{} Sun", icons::SUN));
        if ui.add(egui::Slider::new(&mut sun, SUN_INTENSITY_RANGE).step_by(0.1)).changed() {
            visual.set_sun_intensity(sun);
        }
        ui.end_row();

        let mut ambient = visual.ambient_intensity();
        ui.label("Ambient");
        if ui
            .add(egui::Slider::new(&mut ambient, AMBIENT_INTENSITY_RANGE).step_by(0.01))
            .changed()
        {
            visual.set_ambient_intensity(ambient);
        }
        ui.end_row();

        let mut bloom = visual.bloom_intensity();
        ui.label("Bloom");
        if ui.add(egui::Slider::new(&mut bloom, BLOOM_INTENSITY_RANGE).step_by(0.1)).changed() {
            visual.set_bloom_intensity(bloom);
        }
        ui.end_row();
    });
}

fn render_toggles(
    ui: &mut egui::Ui,
    visual: &mut VisualSettings,
    controls: &mut ControlSettings,
    ui_state: &mut UiState,
) {
    ui.checkbox(&mut visual.show_orbits, format!("{} Orbits", icons::ORBIT));
    ui.checkbox(&mut visual.show_labels, format!("{} Labels", icons::LABEL));
    ui.checkbox(&mut controls.free_camera, format!("{} Free flight", icons::FLIGHT))
        .on_hover_text("Fly with the movement keys; drag to look around");

    if ui.button(format!("{} Settings", icons::SETTINGS)).clicked() {
        ui_state.settings_open = !ui_state.settings_open;
    }
}

/// Lists every body with moons indented under their parent. Returns the
/// body the user clicked, if any.
fn render_body_list(
    ui: &mut egui::Ui,
    registry: &Registry,
    selection: &SelectionState,
) -> Option<crate::orbit::CelestialBodyId> {
    let mut clicked = None;

    let mut row = |ui: &mut egui::Ui, body: &CelestialBodyData| {
        let is_selected = selection.selected() == Some(body.id);
        let is_target = selection.target() == Some(body.id);
        let mut text = format!("{} {}", icons::body_icon(body.kind), body.id);
        if is_target {
            text.push_str(&format!("  {}", icons::RULER));
        }
        if ui.selectable_label(is_selected, text).clicked() {
            clicked = Some(body.id);
        }
    };

    for body in registry.bodies().iter().filter(|b| !b.is_moon()) {
        row(ui, body);
        if body.kind == BodyKind::Planet {
            for moon in registry.moons_of(body.id) {
                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    row(ui, moon);
                });
            }
        }
    }

    clicked
}
