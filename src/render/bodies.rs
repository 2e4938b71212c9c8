//! Celestial body rendering and spawning.
//!
//! Each body is one entity carrying its sphere; rings and atmosphere shells
//! are children so they follow the body's tilt and spin.

use std::f32::consts::FRAC_PI_2;
use std::path::{Path, PathBuf};

use bevy::asset::io::file::FileAssetReader;
use bevy::light::NotShadowCaster;
use bevy::prelude::*;

use crate::orbit::data::{AtmosphereSpec, BodyKind, CelestialBodyData, RingSpec};
use crate::orbit::hierarchy::seed_positions;
use crate::orbit::scale::scene_radius;
use crate::orbit::{CelestialBodyId, PositionTable, Registry};
use crate::settings::VisualSettings;

/// Emissive gain applied to the Sun per unit of sun intensity.
pub const SUN_EMISSIVE_GAIN: f32 = 6.0;

/// Asset directory under the base path Bevy's file reader resolves.
const ASSET_ROOT: &str = "assets";

/// Component marking an entity as a renderable celestial body.
#[derive(Component)]
pub struct CelestialBody {
    /// Identifier for this body.
    pub id: CelestialBodyId,
    /// Scene radius of the sphere.
    pub radius: f32,
    /// Axial tilt in radians.
    pub tilt: f32,
}

/// Marker for the star, whose material glows with the sun intensity.
#[derive(Component)]
pub struct Sun;

/// Ring system child entity.
#[derive(Component)]
pub struct PlanetRing;

/// Atmosphere shell child entity.
#[derive(Component)]
pub struct AtmosphereShell;

/// Plugin providing celestial body spawning functionality.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        // Bodies spawn where the seeded position table puts them
        app.add_systems(Startup, spawn_solar_system.after(seed_positions))
            .add_systems(Update, update_sun_glow);
    }
}

/// Get the approximate visual color for a celestial body.
///
/// Used as the base color when no texture is available.
pub fn body_color(id: CelestialBodyId) -> Color {
    match id {
        CelestialBodyId::Sun => Color::srgb(1.0, 0.85, 0.4),
        CelestialBodyId::Mercury => Color::srgb(0.6, 0.6, 0.6),
        CelestialBodyId::Venus => Color::srgb(0.9, 0.85, 0.7),
        CelestialBodyId::Earth => Color::srgb(0.2, 0.5, 0.8),
        CelestialBodyId::Mars => Color::srgb(0.8, 0.4, 0.2),
        CelestialBodyId::Jupiter => Color::srgb(0.8, 0.7, 0.6),
        CelestialBodyId::Saturn => Color::srgb(0.9, 0.85, 0.6),
        CelestialBodyId::Uranus => Color::srgb(0.6, 0.8, 0.9),
        CelestialBodyId::Neptune => Color::srgb(0.3, 0.5, 0.9),
        CelestialBodyId::Moon => Color::srgb(0.7, 0.7, 0.7),
        CelestialBodyId::Phobos => Color::srgb(0.55, 0.5, 0.45),
        CelestialBodyId::Deimos => Color::srgb(0.6, 0.55, 0.5),
        CelestialBodyId::Io => Color::srgb(0.9, 0.8, 0.3),
        CelestialBodyId::Europa => Color::srgb(0.85, 0.85, 0.8),
        CelestialBodyId::Ganymede => Color::srgb(0.6, 0.55, 0.5),
        CelestialBodyId::Callisto => Color::srgb(0.4, 0.4, 0.4),
        CelestialBodyId::Titan => Color::srgb(0.8, 0.6, 0.3),
    }
}

/// On-disk location of an asset path, resolved the way the asset server's
/// file reader does rather than against the working directory.
fn asset_file(base: &Path, path: &str) -> PathBuf {
    base.join(ASSET_ROOT).join(path)
}

fn texture_available_in(base: &Path, path: &str) -> bool {
    !path.is_empty() && asset_file(base, path).is_file()
}

/// Whether a texture file exists under the asset root. Missing textures are
/// skipped so the body keeps its flat color instead of rendering blank.
fn texture_available(path: &str) -> bool {
    texture_available_in(&FileAssetReader::get_base_path(), path)
}

fn load_texture(asset_server: &AssetServer, path: &'static str) -> Option<Handle<Image>> {
    if texture_available(path) {
        Some(asset_server.load(path))
    } else {
        warn!("Texture {} not found, using flat color", path);
        None
    }
}

/// Spawn all celestial bodies in the registry.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    registry: Res<Registry>,
    table: Res<PositionTable>,
    visual: Res<VisualSettings>,
) {
    for body in registry.bodies() {
        let id = body.id;
        let radius = scene_radius(body.diameter_km) as f32;
        let tilt = (body.axial_tilt_deg as f32).to_radians();
        let position = table
            .position(id)
            .map(|p| p.as_vec3())
            .unwrap_or(Vec3::ZERO);

        let color = body_color(id);
        let texture = load_texture(&asset_server, body.texture);
        let is_sun = body.kind == BodyKind::Star;
        let material = materials.add(StandardMaterial {
            // Textures carry their own color
            base_color: if texture.is_some() { Color::WHITE } else { color },
            base_color_texture: texture,
            emissive: if is_sun {
                color.to_linear() * visual.sun_intensity() * SUN_EMISSIVE_GAIN
            } else {
                LinearRgba::BLACK
            },
            unlit: is_sun,
            perceptual_roughness: 1.0,
            ..default()
        });

        let mut entity = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(48, 24))),
            MeshMaterial3d(material),
            Transform::from_translation(position).with_rotation(Quat::from_rotation_z(tilt)),
            CelestialBody { id, radius, tilt },
            Name::new(id.name()),
        ));
        if is_sun {
            entity.insert((Sun, NotShadowCaster));
        }

        entity.with_children(|parent| {
            if let Some(ring) = body.capabilities.rings {
                spawn_ring(parent, &mut meshes, &mut materials, &asset_server, body, ring, radius);
            }
            if let Some(atmosphere) = body.capabilities.atmosphere {
                spawn_atmosphere(parent, &mut meshes, &mut materials, atmosphere, radius);
            }
        });
    }

    info!("Spawned {} celestial bodies", registry.len());
}

fn spawn_ring(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    body: &CelestialBodyData,
    ring: RingSpec,
    radius: f32,
) {
    let texture = load_texture(asset_server, ring.texture);
    let material = materials.add(StandardMaterial {
        base_color: if texture.is_some() {
            Color::WHITE
        } else {
            body_color(body.id).with_alpha(0.7)
        },
        base_color_texture: texture,
        alpha_mode: AlphaMode::Blend,
        cull_mode: None,
        double_sided: true,
        ..default()
    });

    // Annulus is built in the XY plane; lay it on the equator
    parent.spawn((
        Mesh3d(meshes.add(Annulus::new(radius * ring.inner_factor, radius * ring.outer_factor))),
        MeshMaterial3d(material),
        Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        PlanetRing,
        NotShadowCaster,
    ));
}

fn spawn_atmosphere(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    atmosphere: AtmosphereSpec,
    radius: f32,
) {
    let [r, g, b] = atmosphere.tint;
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(r, g, b, atmosphere.opacity),
        emissive: LinearRgba::rgb(r, g, b) * 0.05,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    parent.spawn((
        Mesh3d(meshes.add(Sphere::new(radius * atmosphere.scale))),
        MeshMaterial3d(material),
        Transform::default(),
        AtmosphereShell,
        NotShadowCaster,
    ));
}

/// Keep the Sun's glow in step with the sun intensity setting.
fn update_sun_glow(
    visual: Res<VisualSettings>,
    suns: Query<(&CelestialBody, &MeshMaterial3d<StandardMaterial>), With<Sun>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !visual.is_changed() {
        return;
    }
    for (body, material) in &suns {
        if let Some(material) = materials.get_mut(&material.0) {
            material.emissive =
                body_color(body.id).to_linear() * visual.sun_intensity() * SUN_EMISSIVE_GAIN;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_body_has_a_color() {
        for &id in CelestialBodyId::ALL {
            assert_ne!(body_color(id), Color::NONE, "{id}");
        }
    }

    #[test]
    fn test_missing_texture_is_unavailable() {
        assert!(!texture_available("textures/definitely_missing.png"));
        assert!(!texture_available(""));
    }

    #[test]
    fn test_asset_path_follows_asset_reader_base() {
        let base = FileAssetReader::get_base_path();
        let file = asset_file(&base, "textures/earth.jpg");
        assert!(file.starts_with(&base));
        assert!(file.ends_with("assets/textures/earth.jpg"));
    }

    #[test]
    fn test_texture_found_under_base_not_cwd() {
        let base = std::env::temp_dir().join(format!("orrery-assets-{}", std::process::id()));
        let textures = base.join(ASSET_ROOT).join("textures");
        std::fs::create_dir_all(&textures).expect("temp dir is writable");
        std::fs::write(textures.join("tiny_moon.png"), b"png").expect("temp file is writable");

        assert!(texture_available_in(&base, "textures/tiny_moon.png"));
        assert!(!texture_available_in(&base, "textures/other.png"));
        assert!(!texture_available_in(&base, ""));

        std::fs::remove_dir_all(&base).expect("cleanup");
    }
}
