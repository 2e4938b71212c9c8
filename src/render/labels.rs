//! Body labels using egui for text rendering.
//!
//! Renders planet and moon names near each celestial body.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::MainCamera;
use crate::orbit::Registry;
use crate::render::bodies::CelestialBody;
use crate::selection::SelectionState;
use crate::settings::VisualSettings;

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Camera distance beyond which moon labels are hidden.
    pub max_moon_label_distance: f32,
    /// Offset from body center in screen pixels.
    pub offset: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            max_moon_label_distance: 150.0,
            offset: 12.0,
        }
    }
}

/// Draw labels for all celestial bodies.
pub fn draw_body_labels(
    mut egui_ctx: EguiContexts,
    bodies: Query<(&CelestialBody, &GlobalTransform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    registry: Res<Registry>,
    visual: Res<VisualSettings>,
    selection: Res<SelectionState>,
    settings: Res<LabelSettings>,
) -> Result {
    if !visual.show_labels {
        return Ok(());
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return Ok(());
    };
    let eye = camera_transform.translation();
    let ctx = egui_ctx.ctx_mut()?;

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("body_labels"),
    ));

    for (body, transform) in &bodies {
        let world_pos = transform.translation();
        let is_moon = registry.get(body.id).is_some_and(|b| b.is_moon());
        let is_selected = selection.selected() == Some(body.id);

        if is_moon && !is_selected && eye.distance(world_pos) > settings.max_moon_label_distance {
            continue;
        }

        // Project world position to screen; points behind the camera fail
        let Ok(screen_pos) = camera.world_to_viewport(camera_transform, world_pos) else {
            continue;
        };

        let label_pos = egui::pos2(screen_pos.x + settings.offset, screen_pos.y + settings.offset);
        let text = body.id.name();
        let font = egui::FontId::proportional(if is_moon { 12.0 } else { 14.0 });
        let color = if is_selected {
            egui::Color32::from_rgb(255, 255, 255)
        } else {
            egui::Color32::from_rgba_unmultiplied(220, 220, 220, 230)
        };

        // Shadow
        painter.text(
            label_pos + egui::vec2(1.0, 1.0),
            egui::Align2::LEFT_TOP,
            text,
            font.clone(),
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
        );
        painter.text(label_pos, egui::Align2::LEFT_TOP, text, font, color);
    }

    Ok(())
}
