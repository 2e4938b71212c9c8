//! Rendering systems for the solar-system viewer.
//!
//! This module provides the visual representation of celestial bodies,
//! their rings and atmospheres, orbit lines, highlights, labels, and the
//! background and lighting.

mod background;
pub mod bodies;
pub mod highlight;
mod labels;
mod orbits;
pub mod sync;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use self::background::BackgroundPlugin;
use self::bodies::CelestialBodyPlugin;
use self::highlight::HighlightPlugin;
use self::labels::{LabelSettings, draw_body_labels};
use self::orbits::{OrbitPathPlugin, draw_moon_orbit_paths, draw_orbit_paths};
use self::sync::sync_celestial_positions;
use crate::types::SimulationSet;

// Re-export for use in other modules
pub use self::bodies::{AtmosphereShell, CelestialBody, PlanetRing, Sun};
pub use self::highlight::pick_body;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CelestialBodyPlugin,
            BackgroundPlugin,
            OrbitPathPlugin,
            HighlightPlugin,
        ))
        .init_resource::<LabelSettings>()
        // Transforms must hold this frame's positions before orbits are drawn
        .add_systems(
            Update,
            (
                sync_celestial_positions.in_set(SimulationSet::Sync),
                (draw_orbit_paths, draw_moon_orbit_paths).after(SimulationSet::Sync),
            ),
        )
        .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}
