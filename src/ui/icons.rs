//! Phosphor icon definitions for the UI.
//!
//! Icons come from the Phosphor icon font, installed by `setup_fonts` on the
//! first egui pass.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

/// Icon text at the given size and color.
pub fn icon_colored(icon: &str, size: f32, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(icon).size(size).color(color)
}

// Browse all icons at https://phosphoricons.com/

pub const PLAY: &str = egui_phosphor::regular::PLAY;
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
pub const FASTER: &str = egui_phosphor::regular::FAST_FORWARD;
pub const SLOWER: &str = egui_phosphor::regular::REWIND;
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
pub const SETTINGS: &str = egui_phosphor::regular::GEAR;
pub const CLOSE: &str = egui_phosphor::regular::X;
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
pub const KEYBOARD: &str = egui_phosphor::regular::KEYBOARD;

// Celestial bodies
pub const SUN: &str = egui_phosphor::regular::SUN;
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
pub const MOON: &str = egui_phosphor::regular::MOON;
/// Ringed planet
pub const RINGS: &str = egui_phosphor::regular::PLANET;
pub const ATMOSPHERE: &str = egui_phosphor::regular::CLOUD;

// View toggles
pub const ORBIT: &str = egui_phosphor::regular::PATH;
pub const LABEL: &str = egui_phosphor::regular::TAG;
pub const FLIGHT: &str = egui_phosphor::regular::AIRPLANE_TILT;
pub const TRACK: &str = egui_phosphor::regular::CROSSHAIR;
pub const RULER: &str = egui_phosphor::regular::RULER;
pub const INFO: &str = egui_phosphor::regular::INFO;
pub const WARNING: &str = egui_phosphor::regular::WARNING;

/// Icon for a body by its kind.
pub fn body_icon(kind: crate::orbit::BodyKind) -> &'static str {
    use crate::orbit::BodyKind;

    match kind {
        BodyKind::Star => SUN,
        BodyKind::Planet => PLANET,
        BodyKind::Moon { .. } => MOON,
    }
}
