use bevy::asset::RenderAssetUsages;
use bevy::math::Vec3;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::Mesh;

/// Unconnected points with per-vertex colours, rendered one pixel each
pub fn point_cloud_mesh(positions: &[Vec3], colors: Vec<[f32; 4]>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, point_positions(positions));
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh
}

pub fn point_positions(positions: &[Vec3]) -> Vec<[f32; 3]> {
    positions.iter().map(|p| p.to_array()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_vertex_per_point() {
        let positions = [Vec3::ZERO, Vec3::ONE, Vec3::NEG_Y];
        let mesh = point_cloud_mesh(&positions, vec![[1.0; 4]; 3]);

        assert_eq!(mesh.count_vertices(), 3);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::PointList);
        assert!(mesh.indices().is_none());
    }
}
