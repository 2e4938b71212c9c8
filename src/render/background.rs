//! Background rendering for the solar system visualization.
//!
//! Provides the starfield and the lighting, both driven by `VisualSettings`.

use bevy::light::NotShadowCaster;
use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;
use rand::Rng;

use crate::camera::MainCamera;
use crate::settings::VisualSettings;

/// Number of background stars.
pub const STAR_COUNT: usize = 2000;

/// Radius of the shell the stars are scattered on.
pub const STARFIELD_RADIUS: f32 = 8000.0;

/// Point light luminous power per unit of sun intensity.
pub const SUN_LUMENS_PER_UNIT: f32 = 4.0e9;

/// Ambient brightness per unit of ambient intensity.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 1500.0;

/// Bevy bloom intensity per unit of bloom setting.
pub const BLOOM_PER_UNIT: f32 = 0.15;

/// Marker for the light placed at the Sun.
#[derive(Component)]
pub struct SunLight;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, (spawn_starfield, spawn_lighting))
            .add_systems(Update, (attach_bloom, apply_visual_settings).chain());
    }
}

/// Point on a sphere of the given radius from two uniform samples in [0, 1).
pub fn point_on_sphere(u: f32, v: f32, radius: f32) -> Vec3 {
    let theta = std::f32::consts::TAU * u;
    let z = 2.0 * v - 1.0;
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * theta.cos(), z, r * theta.sin()) * radius
}

/// Spawn a starfield on a distant shell around the solar system.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Material for stars - emissive white
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });

    // Low-poly spheres; stars are only a few pixels across
    let star_mesh = meshes.add(Sphere::new(4.0).mesh().uv(8, 6));

    let mut rng = rand::thread_rng();

    for _ in 0..STAR_COUNT {
        let position = point_on_sphere(rng.r#gen(), rng.r#gen(), STARFIELD_RADIUS);
        let scale = rng.gen_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(position).with_scale(Vec3::splat(scale)),
            NotShadowCaster,
        ));
    }

    info!("Spawned {} background stars", STAR_COUNT);
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands, visual: Res<VisualSettings>) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: visual.ambient_intensity() * AMBIENT_BRIGHTNESS_PER_UNIT,
        ..default()
    });

    // Light radiating from the Sun at the origin
    commands.spawn((
        PointLight {
            intensity: visual.sun_intensity() * SUN_LUMENS_PER_UNIT,
            range: STARFIELD_RADIUS,
            radius: 5.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
        SunLight,
    ));

    info!("Scene lighting initialized");
}

/// Give the main camera its bloom once it exists.
fn attach_bloom(
    mut commands: Commands,
    visual: Res<VisualSettings>,
    cameras: Query<Entity, (With<MainCamera>, Without<Bloom>)>,
) {
    for entity in &cameras {
        commands.entity(entity).insert(Bloom {
            intensity: visual.bloom_intensity() * BLOOM_PER_UNIT,
            ..Bloom::NATURAL
        });
    }
}

/// Push slider changes into the lights and bloom.
fn apply_visual_settings(
    visual: Res<VisualSettings>,
    mut ambient: ResMut<GlobalAmbientLight>,
    mut lights: Query<&mut PointLight, With<SunLight>>,
    mut blooms: Query<&mut Bloom, With<MainCamera>>,
) {
    if !visual.is_changed() {
        return;
    }
    ambient.brightness = visual.ambient_intensity() * AMBIENT_BRIGHTNESS_PER_UNIT;
    for mut light in &mut lights {
        light.intensity = visual.sun_intensity() * SUN_LUMENS_PER_UNIT;
    }
    for mut bloom in &mut blooms {
        bloom.intensity = visual.bloom_intensity() * BLOOM_PER_UNIT;
    }
}
