//! # Bevy Ocean Crate
//!
//! A stateless wave-plane renderer for Bevy 0.17.
//!
//! ## Usage
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_ocean::*;
//!
//! fn setup(
//!     mut commands: Commands,
//!     mut meshes: ResMut<Assets<Mesh>>,
//!     mut materials: ResMut<Assets<StandardMaterial>>,
//! ) {
//!     let ocean = OceanMeshBuilder::new(OceanConfig::default())
//!         .with_time(0.0)
//!         .build();
//!
//!     commands.spawn((
//!         Mesh3d(meshes.add(ocean.mesh)),
//!         MeshMaterial3d(materials.add(ocean.material)),
//!         Transform::from_xyz(0.0, -50.0, 0.0),
//!     ));
//! }
//! ```
//!
//! Call [`animate_mesh`] every frame on the spawned mesh to keep the
//! surface rolling.

use bevy::asset::RenderAssetUsages;
use bevy::color::{Alpha, Color, ColorToComponents, LinearRgba, Mix};
use bevy::math::Vec3;
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};
use bevy::pbr::StandardMaterial;
use bevy::prelude::AlphaMode;

/// Configuration for the ocean surface - your game provides this
#[derive(Debug, Clone, Copy)]
pub struct OceanConfig {
    /// Edge length of the square plane
    pub size: f32,
    /// Number of grid subdivisions along each edge
    pub subdivisions: u32,
    /// Peak height of the primary wave
    pub wave_height: f32,
    pub deep_color: Color,
    pub shallow_color: Color,
    pub opacity: f32,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            size: 2000.0,
            subdivisions: 100,
            wave_height: 20.0,
            deep_color: Color::srgb_u8(0x00, 0x11, 0x22),
            shallow_color: Color::srgb_u8(0x00, 0x33, 0x66),
            opacity: 0.8,
        }
    }
}

/// The output of ocean generation - ready to render
pub struct OceanOutput {
    pub mesh: Mesh,
    pub material: StandardMaterial,
}

/// Builder for creating ocean meshes from external state
pub struct OceanMeshBuilder {
    config: OceanConfig,
    time: f32,
}

impl OceanMeshBuilder {
    pub fn new(config: OceanConfig) -> Self {
        Self { config, time: 0.0 }
    }

    /// Set the current time for wave animation
    pub fn with_time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    pub fn build(self) -> OceanOutput {
        let mesh = self.generate_mesh();
        let material = self.generate_material();

        OceanOutput { mesh, material }
    }

    fn generate_mesh(&self) -> Mesh {
        let size = self.config.subdivisions;

        let mut uvs = Vec::new();
        let mut indices = Vec::new();

        for row in 0..=size {
            for col in 0..=size {
                uvs.push([col as f32 / size as f32, row as f32 / size as f32]);
            }
        }

        for row in 0..size {
            for col in 0..size {
                let i0 = row * (size + 1) + col;
                let i1 = i0 + 1;
                let i2 = i0 + (size + 1);
                let i3 = i2 + 1;

                indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
            }
        }

        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_indices(Indices::U32(indices));
        animate_mesh(&mut mesh, &self.config, self.time);

        mesh
    }

    fn generate_material(&self) -> StandardMaterial {
        StandardMaterial {
            base_color: Color::WHITE.with_alpha(self.config.opacity),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            ..Default::default()
        }
    }
}

/// Height of the surface above its rest plane.
///
/// `(u, v)` are plane coordinates: `u` runs along world X and `v` against
/// world Z.
pub fn wave_height(config: &OceanConfig, u: f32, v: f32, time: f32) -> f32 {
    let h = config.wave_height;
    let primary = (u * 0.01 + time * 0.5).sin() * h;
    let cross = (v * 0.01 + time * 0.3).cos() * h * 0.5;
    let diagonal = ((u + v) * 0.005 + time * 0.7).sin() * h * 0.3;
    primary + cross + diagonal
}

/// Surface colour at rest-plane coordinates, already dimmed by the slow
/// global glow
pub fn surface_tint(config: &OceanConfig, u: f32, v: f32, time: f32) -> LinearRgba {
    let mix = (u * 0.01 + v * 0.01 + time * 0.2).sin() * 0.5 + 0.5;
    let glow = (time * 0.5).sin() * 0.1 + 0.9;
    let deep = config.deep_color.to_linear();
    let shallow = config.shallow_color.to_linear();
    let color = deep.mix(&shallow, mix);
    LinearRgba::new(color.red * glow, color.green * glow, color.blue * glow, 1.0)
}

/// Rewrites positions, normals and vertex colours of a mesh made by
/// [`OceanMeshBuilder`] for the given time
pub fn animate_mesh(mesh: &mut Mesh, config: &OceanConfig, time: f32) {
    let size = config.subdivisions;
    let step = config.size / size as f32;
    let half = config.size / 2.0;
    let vertex_count = ((size + 1) * (size + 1)) as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut colors = Vec::with_capacity(vertex_count);

    for row in 0..=size {
        for col in 0..=size {
            let x = col as f32 * step - half;
            let z = row as f32 * step - half;
            let (u, v) = (x, -z);

            let y = wave_height(config, u, v, time);
            positions.push([x, y, z]);

            // slope by central differences, v grows towards -z
            let du =
                wave_height(config, u + step, v, time) - wave_height(config, u - step, v, time);
            let dv =
                wave_height(config, u, v + step, time) - wave_height(config, u, v - step, time);
            let normal = Vec3::new(-du, 2.0 * step, dv).normalize_or(Vec3::Y);
            normals.push(normal.to_array());

            colors.push(surface_tint(config, u, v, time).to_f32_array());
        }
    }

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_full_grid() {
        let config = OceanConfig {
            subdivisions: 10,
            ..Default::default()
        };
        let ocean = OceanMeshBuilder::new(config).build();

        assert_eq!(ocean.mesh.count_vertices(), 11 * 11);
        assert_eq!(ocean.mesh.indices().map(|i| i.len()), Some(10 * 10 * 6));
        assert!(ocean.material.double_sided);
        assert_eq!(ocean.material.base_color.alpha(), 0.8);
    }

    #[test]
    fn waves_stay_within_their_summed_amplitude() {
        let config = OceanConfig::default();
        let limit = config.wave_height * 1.8;
        for i in 0..200 {
            let t = i as f32 * 0.37;
            let u = i as f32 * 13.0 - 1000.0;
            let v = 1000.0 - i as f32 * 7.0;
            assert!(wave_height(&config, u, v, t).abs() <= limit + 1e-3);
        }
        assert!((wave_height(&config, 0.0, 0.0, 0.0) - 10.0).abs() < 1e-5);
    }

    #[test]
    fn tint_stays_between_the_two_blues() {
        let config = OceanConfig::default();
        let shallow = config.shallow_color.to_linear();
        for i in 0..100 {
            let tint = surface_tint(&config, i as f32 * 31.0, i as f32 * -17.0, i as f32 * 0.5);
            assert!(tint.red.abs() < 1e-6);
            assert!(tint.blue <= shallow.blue + 1e-6);
            assert!(tint.blue > 0.0);
        }
    }

    #[test]
    fn animation_moves_the_surface() {
        let config = OceanConfig {
            subdivisions: 4,
            ..Default::default()
        };
        let mut mesh = OceanMeshBuilder::new(config).build().mesh;
        let before = mesh.attribute(Mesh::ATTRIBUTE_POSITION).cloned();

        animate_mesh(&mut mesh, &config, 3.0);

        let after = mesh.attribute(Mesh::ATTRIBUTE_POSITION).cloned();
        assert_eq!(mesh.count_vertices(), 25);
        assert_ne!(
            before.and_then(|b| b.as_float3().map(|p| p.to_vec())),
            after.and_then(|a| a.as_float3().map(|p| p.to_vec()))
        );
    }
}
