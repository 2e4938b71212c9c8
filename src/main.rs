//! Orrery - Solar System Visualizer
//!
//! A desktop application showing the Sun, the planets and their major
//! moons moving on simplified orbits, with panels for inspecting and
//! comparing bodies.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::input::InputPlugin;
use orrery::orbit::OrbitPlugin;
use orrery::render::RenderPlugin;
use orrery::selection::SelectionPlugin;
use orrery::settings::SettingsPlugin;
use orrery::time::ClockPlugin;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Engine and state first; render, camera and UI read from them
        .add_plugins((ClockPlugin, OrbitPlugin, SelectionPlugin, SettingsPlugin))
        .add_plugins((CameraPlugin, InputPlugin, RenderPlugin, UiPlugin))
        .run();
}
