use crate::core::config::SceneSettings;
use crate::creatures::resources::SceneSeed;
use crate::environment::components::{AmbientParticles, GlowLight, OceanSurface};
use crate::helpers::mesh::{point_cloud_mesh, point_positions};
use bevy::color::{Alpha, ColorToComponents};
use bevy::log::info;
use bevy::prelude::*;
use bevy_ocean::{OceanConfig, OceanMeshBuilder, animate_mesh};
use marinelife::Tick;
use marinelife::constants::OCEAN_PLANE_Y;
use marinelife::lighting::{self, glow_lights, rgb};
use marinelife::particles::ParticleField;
use marinelife::tools::seeded_rng;

// Relative intensities are scaled into physical units
const AMBIENT_BRIGHTNESS: f32 = 1000.0;
const SUN_ILLUMINANCE: f32 = 10_000.0;
const GLOW_LUMENS: f32 = 4_000_000.0;

pub fn spawn_lights(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: packed_color(lighting::AMBIENT_COLOR),
        brightness: lighting::AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            color: packed_color(lighting::SUN_COLOR),
            illuminance: lighting::SUN_INTENSITY * SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(lighting::SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    for (index, glow) in glow_lights(0.0).into_iter().enumerate() {
        commands.spawn((
            PointLight {
                color: packed_color(lighting::GLOW_COLORS[index]),
                intensity: glow.intensity * GLOW_LUMENS,
                range: lighting::GLOW_RANGE,
                ..default()
            },
            Transform::from_translation(glow.position),
            GlowLight { index },
        ));
    }

    info!("Lights spawned");
}

pub fn spawn_ocean(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let config = OceanConfig::default();
    let ocean = OceanMeshBuilder::new(config).with_time(0.0).build();

    commands.spawn((
        Mesh3d(meshes.add(ocean.mesh)),
        MeshMaterial3d(materials.add(ocean.material)),
        Transform::from_xyz(0.0, OCEAN_PLANE_Y, 0.0),
        OceanSurface { config },
    ));
}

pub fn spawn_particles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
    seed: Res<SceneSeed>,
) {
    let config = &settings.inner.particles;
    // separate stream so particle count never shifts the creature layout
    let mut rng = seeded_rng(seed.0.wrapping_add(1));
    let field = ParticleField::scatter(config, &mut rng);

    let colors = field
        .tints
        .iter()
        .map(|tint| {
            Color::hsl(tint.hue * 360.0, tint.saturation, tint.lightness)
                .to_linear()
                .to_f32_array()
        })
        .collect();
    let mesh = point_cloud_mesh(&field.positions, colors);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE.with_alpha(config.opacity),
            alpha_mode: AlphaMode::Add,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        AmbientParticles { field },
    ));

    info!("Spawned {} ambient particles", config.count);
}

pub fn animate_ocean(
    time: Res<Time>,
    mut meshes: ResMut<Assets<Mesh>>,
    surfaces: Query<(&OceanSurface, &Mesh3d)>,
) {
    for (surface, mesh) in surfaces.iter() {
        if let Some(mesh) = meshes.get_mut(&mesh.0) {
            animate_mesh(mesh, &surface.config, time.elapsed_secs());
        }
    }
}

pub fn drift_particles(
    time: Res<Time>,
    settings: Res<SceneSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut particles: Query<(&mut AmbientParticles, &Mesh3d)>,
) {
    let config = &settings.inner;
    let tick = Tick::from_timing(&config.timing, time.elapsed_secs(), time.delta_secs());

    for (mut particles, mesh) in particles.iter_mut() {
        particles.field.advance(tick, &config.particles);
        if let Some(mesh) = meshes.get_mut(&mesh.0) {
            mesh.insert_attribute(
                Mesh::ATTRIBUTE_POSITION,
                point_positions(&particles.field.positions),
            );
        }
    }
}

pub fn orbit_glow_lights(
    time: Res<Time>,
    mut lights: Query<(&GlowLight, &mut PointLight, &mut Transform)>,
) {
    let glows = glow_lights(time.elapsed_secs());
    for (glow, mut light, mut transform) in lights.iter_mut() {
        if let Some(state) = glows.get(glow.index) {
            transform.translation = state.position;
            light.intensity = state.intensity * GLOW_LUMENS;
        }
    }
}

fn packed_color(color: u32) -> Color {
    let [r, g, b] = rgb(color);
    Color::srgb_u8(r, g, b)
}
