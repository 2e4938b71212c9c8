//! Orbit and position engine.
//!
//! Every frame the propagator turns the simulation clock into a scene
//! position and an accumulated axial spin for each registered body:
//! - the star sits at the origin;
//! - planets follow closed-form ellipses around it;
//! - moons circle their parent's position from the same frame.
//!
//! The engine is plain Rust. [`OrbitPlugin`] wires it into the Bevy schedule.

pub mod data;
pub mod distance;
pub mod error;
pub mod facts;
pub mod hierarchy;
pub mod registry;
pub mod scale;
pub mod solver;

#[cfg(test)]
mod proptest_orbit;

pub use data::{BodyKind, CelestialBodyData, CelestialBodyId, all_bodies, get_body_data};
pub use error::{OrbitError, RegistryError};
pub use facts::{BodyFacts, get_facts};
pub use hierarchy::propagate;
pub use registry::Registry;

use std::collections::HashMap;
use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::types::SimulationSet;

/// Position and accumulated spin of one body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyFrame {
    /// Scene position
    pub position: DVec3,
    /// Axial rotation in radians, wrapped to [0, TAU)
    pub spin: f64,
}

/// Latest computed frame for every body. Written only by the propagator.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct PositionTable {
    frames: HashMap<CelestialBodyId, BodyFrame>,
}

impl PositionTable {
    pub fn get(&self, id: CelestialBodyId) -> Option<BodyFrame> {
        self.frames.get(&id).copied()
    }

    pub fn position(&self, id: CelestialBodyId) -> Option<DVec3> {
        self.frames.get(&id).map(|f| f.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CelestialBodyId, BodyFrame)> + '_ {
        self.frames.iter().map(|(&id, &frame)| (id, frame))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    fn update(&mut self, id: CelestialBodyId, position: DVec3, spin_delta: f64) {
        let frame = self.frames.entry(id).or_default();
        frame.position = position;
        frame.spin = (frame.spin + spin_delta).rem_euclid(TAU);
    }
}

/// Plugin owning the body registry and the position table.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Registry>()
            .init_resource::<PositionTable>()
            .add_systems(Startup, hierarchy::seed_positions)
            .add_systems(
                Update,
                hierarchy::propagate_positions.in_set(SimulationSet::Propagate),
            );
    }
}
