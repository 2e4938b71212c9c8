//! Test utilities for the position engine and the Bevy host.
//!
//! Provides small registries for focused tests and a headless app builder.

/// Fixtures for building test registries.
pub mod fixtures {
    use crate::orbit::data::{CelestialBodyId, get_body_data};
    use crate::orbit::registry::Registry;

    /// Sun, Earth and the Moon.
    pub fn earth_system() -> Registry {
        Registry::new(vec![
            get_body_data(CelestialBodyId::Sun),
            get_body_data(CelestialBodyId::Earth),
            get_body_data(CelestialBodyId::Moon),
        ])
        .expect("earth system is a valid registry")
    }

    /// Copy of `registry` with one body's eccentricity replaced.
    ///
    /// Registry validation is structural, so degenerate values pass through
    /// and surface as solver errors.
    pub fn with_eccentricity(registry: &Registry, id: CelestialBodyId, eccentricity: f64) -> Registry {
        let bodies = registry
            .bodies()
            .iter()
            .cloned()
            .map(|mut body| {
                if body.id == id {
                    body.eccentricity = eccentricity;
                }
                body
            })
            .collect();
        Registry::new(bodies).expect("only eccentricity changed")
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    use crate::orbit::OrbitPlugin;
    use crate::selection::SelectionPlugin;
    use crate::settings::SettingsPlugin;
    use crate::time::ClockPlugin;

    /// Minimal app running the clock, the engine, selection and settings,
    /// without rendering or windowing.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins((ClockPlugin, OrbitPlugin, SelectionPlugin, SettingsPlugin));
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::{CelestialBodyId, PositionTable};

    #[test]
    fn test_earth_system_fixture() {
        let registry = fixtures::earth_system();
        assert_eq!(registry.len(), 3);
        assert!(registry.has_moons(CelestialBodyId::Earth));
    }

    #[test]
    fn test_with_eccentricity_only_touches_target() {
        let registry = fixtures::earth_system();
        let changed = fixtures::with_eccentricity(&registry, CelestialBodyId::Earth, 0.5);
        assert_eq!(changed.get(CelestialBodyId::Earth).map(|b| b.eccentricity), Some(0.5));
        assert_eq!(
            changed.get(CelestialBodyId::Moon).map(|b| b.eccentricity),
            registry.get(CelestialBodyId::Moon).map(|b| b.eccentricity)
        );
    }

    #[test]
    fn test_headless_app_seeds_positions() {
        let mut app = bevy_test::headless_app();
        app.update();
        let table = app.world().resource::<PositionTable>();
        assert!(!table.is_empty());
    }
}
