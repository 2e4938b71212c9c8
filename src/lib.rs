//! Orrery - Solar System Visualizer
//!
//! A library crate providing the orbit and position engine, its Bevy
//! plugins and the egui overlay, split out for testing and integration.

pub mod camera;
pub mod input;
pub mod orbit;
pub mod render;
pub mod selection;
pub mod settings;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
