//! Common test utilities for integration tests.

use std::time::Duration;

use bevy::math::DVec3;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use orrery::orbit::{CelestialBodyId, OrbitPlugin, PositionTable};
use orrery::selection::SelectionPlugin;
use orrery::settings::SettingsPlugin;
use orrery::time::ClockPlugin;
use orrery::types::SimulationClock;

/// Real time that passes on every `app.update()`.
pub const FRAME: Duration = Duration::from_millis(100);

/// Headless app with the clock, the engine, selection and settings.
///
/// Time advances by [`FRAME`] per update and the session starts at J2000, so
/// runs are deterministic.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins((ClockPlugin, OrbitPlugin, SelectionPlugin, SettingsPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(SimulationClock::at_j2000_days(0.0));
    app
}

/// Run `frames` updates.
pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Current scene position of a body.
pub fn position(app: &App, id: CelestialBodyId) -> DVec3 {
    app.world()
        .resource::<PositionTable>()
        .position(id)
        .unwrap_or_else(|| panic!("{id} has no position"))
}

pub fn clock(app: &App) -> &SimulationClock {
    app.world().resource::<SimulationClock>()
}

pub fn clock_mut(app: &mut App) -> Mut<'_, SimulationClock> {
    app.world_mut().resource_mut::<SimulationClock>()
}
