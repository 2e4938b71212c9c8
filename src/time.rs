//! Clock advancement system for the visualizer.
//!
//! Handles progression of simulation time based on scale and pause state.

use bevy::prelude::*;

use crate::types::{SimulationClock, SimulationSet};

/// Plugin providing clock advancement and the per-frame system ordering.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .configure_sets(
                Update,
                (
                    SimulationSet::AdvanceClock,
                    SimulationSet::Propagate,
                    SimulationSet::Sync,
                )
                    .chain(),
            )
            .add_systems(Update, advance_clock.in_set(SimulationSet::AdvanceClock));
    }
}

/// Advance the simulation clock by the real frame delta times the time scale.
fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.advance(time.delta_secs_f64());
}
