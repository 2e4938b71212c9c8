//! UI module providing the egui overlay.
//!
//! Three floating panels: controls on the left, information about the
//! selected body on the right, and a settings window opened from the
//! controls.

mod control_panel;
pub mod icons;
mod info_panel;
mod settings_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use info_panel::{Comparison, compare_bodies};
pub use settings_panel::{SettingsTab, key_label};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    control_panel::control_panel_system,
                    info_panel::info_panel_system,
                    settings_panel::settings_panel_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Panel visibility and transient UI state.
#[derive(Resource)]
pub struct UiState {
    pub settings_open: bool,
    pub settings_tab: SettingsTab,
    /// Last rejected rebind, shown until the next attempt
    pub binding_error: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            settings_open: false,
            settings_tab: SettingsTab::General,
            binding_error: None,
        }
    }
}

/// Shared panel styling.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 225);
    pub const ACCENT: Color32 = Color32::from_rgb(85, 170, 255);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const MUTED: Color32 = Color32::from_rgb(150, 150, 165);
    pub const ERROR: Color32 = Color32::from_rgb(235, 90, 90);
}

fn panel_frame() -> bevy_egui::egui::Frame {
    use bevy_egui::egui;

    egui::Frame::NONE
        .fill(colors::PANEL_BG)
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(8))
}
