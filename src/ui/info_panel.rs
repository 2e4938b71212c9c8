//! Info panel for the selected body: facts, physical data, orbit extremes
//! and the distance to a comparison target.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{colors, icons, panel_frame};
use crate::camera::CameraFocus;
use crate::orbit::distance::{distance, real_distance_approx};
use crate::orbit::scale::scene_to_mkm;
use crate::orbit::solver::{orbit_angle, orbital_extremes};
use crate::orbit::{
    BodyKind, CelestialBodyData, CelestialBodyId, OrbitError, PositionTable, Registry, get_facts,
};
use crate::selection::{SelectionChanged, SelectionState};
use crate::types::{RAD_TO_DEG, SimulationClock};

/// Distance readout between the selected body and its comparison target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    /// Current separation in scene units, once both bodies have a position
    pub scene_distance: Option<f64>,
    /// Difference of orbital radii in million km
    pub real_distance_mkm: f64,
}

/// Compare two bodies by their current scene positions and their orbits.
pub fn compare_bodies(
    registry: &Registry,
    positions: &PositionTable,
    a: CelestialBodyId,
    b: CelestialBodyId,
) -> Result<Comparison, OrbitError> {
    let real_distance_mkm = real_distance_approx(registry, a, b)?;
    let scene_distance = positions
        .position(a)
        .zip(positions.position(b))
        .map(|(pa, pb)| distance(pa, pb));
    Ok(Comparison {
        scene_distance,
        real_distance_mkm,
    })
}

/// A planet's current distance from the Sun in million km, read back from
/// its scene position. `None` for the star, moons and unplaced bodies.
fn sun_distance_mkm(body: &CelestialBodyData, positions: &PositionTable) -> Option<f64> {
    if body.kind != BodyKind::Planet {
        return None;
    }
    positions.position(body.id).map(|p| scene_to_mkm(p.length()))
}

/// Short description of where a body sits in the hierarchy.
fn kind_label(kind: BodyKind) -> String {
    match kind {
        BodyKind::Star => "Star".to_string(),
        BodyKind::Planet => "Planet".to_string(),
        BodyKind::Moon { parent } => format!("Moon of {parent}"),
    }
}

/// Group digits in thousands: 12742 -> "12,742".
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0.0 && digits != "0" {
        out.insert(0, '-');
    }
    out
}

/// Rotation period with its direction.
fn rotation_label(body: &CelestialBodyData) -> String {
    let hours = body.rotation_period_hours.abs();
    let period = if hours >= 48.0 {
        format!("{:.1} days", hours / 24.0)
    } else {
        format!("{hours:.1} h")
    };
    if body.is_retrograde() {
        format!("{period} (retrograde)")
    } else {
        period
    }
}

/// Renders the info panel for the selected body.
pub fn info_panel_system(
    mut contexts: EguiContexts,
    mut selection: ResMut<SelectionState>,
    mut focus: ResMut<CameraFocus>,
    mut changes: MessageWriter<SelectionChanged>,
    registry: Res<Registry>,
    positions: Res<PositionTable>,
    clock: Res<SimulationClock>,
) -> Result {
    let Some(id) = selection.selected() else {
        return Ok(());
    };
    let Some(body) = registry.get(id) else {
        return Ok(());
    };
    let ctx = contexts.ctx_mut()?;

    let mut close = false;
    egui::Window::new("Body info")
        .id(egui::Id::new("info_panel"))
        .title_bar(false)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .resizable(false)
        .default_width(280.0)
        .frame(panel_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(icons::icon_colored(icons::body_icon(body.kind), 20.0, colors::ACCENT));
                ui.heading(id.name());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(icons::CLOSE).on_hover_text("Close (Esc)").clicked() {
                        close = true;
                    }
                    let tracking = focus.tracking == Some(id);
                    if ui
                        .selectable_label(tracking, icons::TRACK)
                        .on_hover_text("Follow (F)")
                        .clicked()
                    {
                        focus.tracking = if tracking { None } else { Some(id) };
                    }
                });
            });
            ui.label(egui::RichText::new(kind_label(body.kind)).color(colors::MUTED));
            ui.add_space(4.0);

            egui::ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
                render_details(ui, body, &registry, &positions, &clock);
                ui.separator();
                render_comparison(ui, body, &registry, &positions, &mut selection);
            });
        });

    if close {
        selection.clear();
        focus.tracking = None;
        changes.write(SelectionChanged(None));
    }

    Ok(())
}

fn render_details(
    ui: &mut egui::Ui,
    body: &CelestialBodyData,
    registry: &Registry,
    positions: &PositionTable,
    clock: &SimulationClock,
) {
    let facts = get_facts(body.id);
    ui.label(facts.description);
    ui.add_space(6.0);

    egui::Grid::new("physical_data")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.label("Diameter");
            ui.label(format!("{} km", group_thousands(body.diameter_km)));
            ui.end_row();

            ui.label("Surface gravity");
            ui.label(format!("{:.2} g", facts.surface_gravity_g));
            ui.end_row();

            ui.label("Rotation");
            ui.label(rotation_label(body));
            ui.end_row();

            ui.label("Axial tilt");
            ui.label(format!("{:.1}°", body.axial_tilt_deg));
            ui.end_row();

            if body.kind != BodyKind::Star {
                let around = if body.is_moon() { "from parent" } else { "from Sun" };
                ui.label("Orbit radius");
                ui.label(format!("{:.3} million km {around}", body.orbit_radius_mkm));
                ui.end_row();

                ui.label("Orbital period");
                ui.label(format!("{:.1} days", body.orbital_period_days));
                ui.end_row();

                ui.label("Eccentricity");
                ui.label(format!("{:.4}", body.eccentricity));
                ui.end_row();

                let longitude =
                    (orbit_angle(body, clock.orbit_time()) * RAD_TO_DEG).rem_euclid(360.0);
                ui.label("Orbital longitude");
                ui.label(format!("{longitude:.1}°"));
                ui.end_row();
            }

            if let Some(current) = sun_distance_mkm(body, positions) {
                ui.label("Distance from Sun");
                ui.label(format!("{current:.1} million km"));
                ui.end_row();
            }

            if let Some((perihelion, aphelion)) = orbital_extremes(body) {
                let (near, far) = if body.is_moon() {
                    ("Periapsis", "Apoapsis")
                } else {
                    ("Perihelion", "Aphelion")
                };
                ui.label(near);
                ui.label(format!("{perihelion:.3} million km"));
                ui.end_row();
                ui.label(far);
                ui.label(format!("{aphelion:.3} million km"));
                ui.end_row();
            }

            if let Some(known) = facts.known_moons {
                ui.label("Known moons");
                ui.label(known.to_string());
                ui.end_row();
            }

            for (label, value) in facts.facts {
                ui.label(*label);
                ui.label(*value);
                ui.end_row();
            }
        });

    // Features drawn in the scene
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        if body.has_rings() {
            ui.label(format!("{} Rings", icons::RINGS));
        }
        if body.has_atmosphere() {
            ui.label(format!("{} Atmosphere", icons::ATMOSPHERE));
        }
        let moons: Vec<&str> = registry.moons_of(body.id).map(|m| m.id.name()).collect();
        if !moons.is_empty() {
            ui.label(format!("{} {}", icons::MOON, moons.join(", ")));
        }
    });

    if let Some(p) = positions.position(body.id) {
        ui.label(
            egui::RichText::new(format!("Scene position ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z))
                .small()
                .color(colors::MUTED),
        );
    }

    ui.add_space(4.0);
    ui.label(
        egui::RichText::new(format!("{} {}", icons::INFO, facts.fun_fact))
            .italics()
            .color(colors::TEXT),
    );
}

fn render_comparison(
    ui: &mut egui::Ui,
    body: &CelestialBodyData,
    registry: &Registry,
    positions: &PositionTable,
    selection: &mut SelectionState,
) {
    ui.label(egui::RichText::new(format!("{} Compare", icons::RULER)).strong());

    let mut target = selection.target();
    egui::ComboBox::from_id_salt("comparison_target")
        .selected_text(target.map_or("Shift+click a body", |t| t.name()))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut target, None, "None");
            for other in registry.bodies().iter().filter(|b| b.id != body.id) {
                ui.selectable_value(&mut target, Some(other.id), other.id.name());
            }
        });
    if target != selection.target() {
        selection.set_target(target);
    }

    let Some((a, b)) = selection.comparison() else {
        return;
    };
    match compare_bodies(registry, positions, a, b) {
        Ok(comparison) => {
            if let Some(scene) = comparison.scene_distance {
                ui.label(format!("Scene distance: {scene:.2} units"));
            }
            ui.label(format!(
                "Real distance: ≈ {} million km",
                group_thousands(comparison.real_distance_mkm)
            ))
            .on_hover_text(
                "Difference of the two orbital radii. Ignores where each body is on its orbit.",
            );
            ui.label(
                egui::RichText::new(format!("{} Approximate", icons::WARNING))
                    .small()
                    .color(colors::MUTED),
            );
        }
        Err(err) => {
            ui.colored_label(colors::ERROR, err.to_string());
        }
    }
}
