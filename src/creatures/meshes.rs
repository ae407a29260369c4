//! Procedural models, one small hierarchy of primitives per creature.
//!
//! All swimmers are modelled nose-first along +X; the transform sync turns
//! that axis onto the heading.

use bevy::color::Alpha;
use bevy::prelude::*;
use marinelife::config::{SchoolConfig, SeaweedConfig};
use marinelife::constants::FLIPPER_COUNT;
use marinelife::lighting::rgb;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

const SHARK_SKIN: u32 = 0x4a4a4a;
const SHARK_FIN: u32 = 0x3a3a3a;
const SHELL: u32 = 0x2d5016;
const TURTLE_SKIN: u32 = 0x4a6b2a;
const BELL: u32 = 0x4a90e2;
const BELL_GLOW: u32 = 0x001122;
const TENTACLE: u32 = 0x6bb6ff;
const KELP: u32 = 0x2d5016;

const TENTACLE_COUNT: usize = 6;

/// A single rendered primitive in creature-local space
pub struct Part {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub transform: Transform,
    pub flipper: Option<usize>,
}

impl Part {
    fn new(
        mesh: Handle<Mesh>,
        material: Handle<StandardMaterial>,
        transform: Transform,
    ) -> Self {
        Self {
            mesh,
            material,
            transform,
            flipper: None,
        }
    }
}

/// Shared part lists, built once and cloned per spawned creature
pub struct CreatureModels {
    pub shark: Vec<Part>,
    pub schools: Vec<Vec<Part>>,
    pub turtle: Vec<Part>,
    pub jellyfish: Vec<Part>,
    kelp: Handle<StandardMaterial>,
}

impl CreatureModels {
    pub fn build(
        schools: &[SchoolConfig],
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) -> Self {
        Self {
            shark: shark(meshes, materials),
            schools: schools
                .iter()
                .map(|school| fish(school, meshes, materials))
                .collect(),
            turtle: turtle(meshes, materials),
            jellyfish: jellyfish(meshes, materials),
            kelp: materials.add(tinted(KELP, 0.8)),
        }
    }

    /// Seaweed stalks are unique: their segment radii are rolled per stalk
    pub fn seaweed(
        &self,
        height: f32,
        config: &SeaweedConfig,
        meshes: &mut Assets<Mesh>,
        rng: &mut impl Rng,
    ) -> Vec<Part> {
        let segments = config.segments.max(1);
        let segment_height = height / segments as f32;

        (0..segments)
            .map(|j| {
                let j = j as f32;
                let segment = ConicalFrustum {
                    radius_top: 1.0 + rng.random::<f32>() * 0.5,
                    radius_bottom: 1.5 + rng.random::<f32>() * 0.5,
                    height: segment_height,
                };
                // a slight twist that builds up along the stalk
                let twist = j * 0.2 + (j * 0.5).sin() * 0.3;
                Part::new(
                    meshes.add(segment),
                    self.kelp.clone(),
                    Transform::from_xyz(0.0, j * segment_height - height / 2.0, 0.0)
                        .with_rotation(Quat::from_rotation_y(twist)),
                )
            })
            .collect()
    }
}

fn shark(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Vec<Part> {
    let skin = materials.add(StandardMaterial {
        perceptual_roughness: 0.6,
        ..tinted(SHARK_SKIN, 0.9)
    });
    let fin = materials.add(opaque(SHARK_FIN));
    let eye = materials.add(opaque(0x000000));

    let body = meshes.add(
        Sphere::new(12.0)
            .mesh()
            .uv(16, 8)
            .scaled_by(Vec3::new(2.5, 1.0, 1.0)),
    );
    let snout = meshes.add(cone(8.0, 20.0, 8));
    let tail = meshes.add(cone(10.0, 25.0, 8));
    let dorsal = meshes.add(cone(6.0, 15.0, 6));
    let pectoral = meshes.add(cone(4.0, 12.0, 6));
    let eye_mesh = meshes.add(Sphere::new(2.0).mesh().uv(8, 8));

    vec![
        Part::new(body, skin.clone(), Transform::IDENTITY),
        Part::new(
            snout,
            skin.clone(),
            Transform::from_xyz(25.0, 0.0, 0.0).with_rotation(Quat::from_rotation_z(-FRAC_PI_2)),
        ),
        Part::new(
            tail,
            skin,
            Transform::from_xyz(-35.0, 0.0, 0.0).with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
        ),
        Part::new(
            dorsal,
            fin.clone(),
            Transform::from_xyz(0.0, 12.0, 0.0).with_rotation(Quat::from_rotation_x(PI)),
        ),
        Part::new(
            pectoral.clone(),
            fin.clone(),
            Transform::from_xyz(5.0, -5.0, -10.0).with_rotation(Quat::from_rotation_z(FRAC_PI_4)),
        ),
        Part::new(
            pectoral,
            fin,
            Transform::from_xyz(5.0, -5.0, 10.0).with_rotation(Quat::from_rotation_z(-FRAC_PI_4)),
        ),
        Part::new(eye_mesh.clone(), eye.clone(), Transform::from_xyz(15.0, 5.0, -6.0)),
        Part::new(eye_mesh, eye, Transform::from_xyz(15.0, 5.0, 6.0)),
    ]
}

fn fish(
    school: &SchoolConfig,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Vec<Part> {
    let size = school.body_size;
    let scales = materials.add(StandardMaterial {
        perceptual_roughness: 0.4,
        ..tinted(school.color, 0.8)
    });

    let body = meshes.add(
        Sphere::new(size)
            .mesh()
            .uv(8, 6)
            .scaled_by(Vec3::new(1.5, 1.0, 1.0)),
    );
    let tail = meshes.add(cone(size * 0.6, size * 1.2, 6));
    let fin = meshes.add(cone(size * 0.3, size * 0.8, 4));

    vec![
        Part::new(body, scales.clone(), Transform::IDENTITY),
        Part::new(
            tail,
            scales.clone(),
            Transform::from_xyz(-size * 1.2, 0.0, 0.0)
                .with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
        ),
        Part::new(
            fin,
            scales,
            Transform::from_xyz(0.0, size * 0.8, 0.0).with_rotation(Quat::from_rotation_x(PI)),
        ),
    ]
}

fn turtle(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Vec<Part> {
    let shell_material = materials.add(tinted(SHELL, 0.9));
    let skin = materials.add(opaque(TURTLE_SKIN));

    let shell = meshes.add(
        Sphere::new(15.0)
            .mesh()
            .uv(12, 8)
            .scaled_by(Vec3::new(1.0, 0.6, 1.2)),
    );
    let head = meshes.add(Sphere::new(6.0).mesh().uv(8, 8));
    let flipper = meshes.add(
        Sphere::new(4.0)
            .mesh()
            .uv(6, 6)
            .scaled_by(Vec3::new(2.0, 0.5, 1.0)),
    );

    let mut parts = vec![
        Part::new(shell, shell_material, Transform::IDENTITY),
        Part::new(head, skin.clone(), Transform::from_xyz(18.0, 0.0, 0.0)),
    ];
    for index in 0..FLIPPER_COUNT {
        let angle = index as f32 / FLIPPER_COUNT as f32 * TAU;
        parts.push(Part {
            flipper: Some(index),
            ..Part::new(
                flipper.clone(),
                skin.clone(),
                Transform::from_xyz(angle.cos() * 12.0, -5.0, angle.sin() * 15.0),
            )
        });
    }
    parts
}

fn jellyfish(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Vec<Part> {
    let [r, g, b] = rgb(BELL_GLOW);
    let bell_material = materials.add(StandardMaterial {
        emissive: Color::srgb_u8(r, g, b).into(),
        ..tinted(BELL, 0.3)
    });
    let tentacle_material = materials.add(tinted(TENTACLE, 0.6));

    let bell = meshes.add(
        Sphere::new(8.0)
            .mesh()
            .uv(12, 8)
            .scaled_by(Vec3::new(1.0, 0.7, 1.0)),
    );
    let tentacle = meshes.add(ConicalFrustum {
        radius_top: 0.2,
        radius_bottom: 0.5,
        height: 20.0,
    });

    let mut parts = vec![Part::new(bell, bell_material, Transform::IDENTITY)];
    for j in 0..TENTACLE_COUNT {
        let angle = j as f32 / TENTACLE_COUNT as f32 * TAU;
        parts.push(Part::new(
            tentacle.clone(),
            tentacle_material.clone(),
            Transform::from_xyz(angle.cos() * 4.0, -15.0, angle.sin() * 4.0),
        ));
    }
    parts
}

fn cone(radius: f32, height: f32, resolution: u32) -> Mesh {
    Mesh::from(Cone { radius, height }.mesh().resolution(resolution))
}

fn opaque(color: u32) -> StandardMaterial {
    let [r, g, b] = rgb(color);
    StandardMaterial {
        base_color: Color::srgb_u8(r, g, b),
        ..default()
    }
}

fn tinted(color: u32, alpha: f32) -> StandardMaterial {
    let [r, g, b] = rgb(color);
    StandardMaterial {
        base_color: Color::srgb_u8(r, g, b).with_alpha(alpha),
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}
