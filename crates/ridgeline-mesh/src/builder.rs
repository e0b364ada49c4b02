//! Heightfield triangulation: two triangles per grid quad, row-major.

use glam::Vec3;
use ridgeline_terrain::HeightGrid;

use crate::triangle::{Triangle, TriangleMesh};

/// Per-axis scale factors applied to grid coordinates and elevations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshScale {
    /// Scale along the column (x) axis.
    pub x: f32,
    /// Scale applied to elevations.
    pub y: f32,
    /// Scale along the row (z) axis.
    pub z: f32,
}

impl Default for MeshScale {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
}

/// Triangulate a heightfield into an ordered triangle list.
///
/// Every quad of adjacent cells `(x, z)`, `(x+1, z)`, `(x, z+1)`,
/// `(x+1, z+1)` emits two triangles:
///
/// - "left": `(x, z)`, `(x+1, z)`, `(x+1, z+1)`
/// - "right": `(x, z)`, `(x+1, z+1)`, `(x, z+1)`
///
/// appended left then right, traversing quads row-major (`x` fastest).
/// Each vertex sits at `(x * scale.x, elevation * scale.y, z * scale.z)`.
/// Grids smaller than 2x2 have no quads and yield an empty mesh.
pub fn build_terrain_mesh(grid: &HeightGrid, scale: MeshScale) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    let size = grid.size();
    if size < 2 {
        return mesh;
    }

    for z in 0..size - 1 {
        for x in 0..size - 1 {
            let left = Triangle {
                first: vertex(grid, scale, x, z),
                second: vertex(grid, scale, x + 1, z),
                third: vertex(grid, scale, x + 1, z + 1),
            };
            let right = Triangle {
                first: vertex(grid, scale, x, z),
                second: vertex(grid, scale, x + 1, z + 1),
                third: vertex(grid, scale, x, z + 1),
            };
            mesh.push(left);
            mesh.push(right);
        }
    }
    mesh
}

fn vertex(grid: &HeightGrid, scale: MeshScale, x: usize, z: usize) -> Vec3 {
    Vec3::new(
        x as f32 * scale.x,
        grid.height(z, x) * scale.y,
        z as f32 * scale.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_count() {
        // A size x size grid has (size-1)^2 quads, two triangles each.
        let grid = HeightGrid::flat(4);
        let mesh = build_terrain_mesh(&grid, MeshScale::default());
        assert_eq!(mesh.triangle_count(), 2 * 3 * 3);
    }

    #[test]
    fn test_tiny_grids_yield_empty_mesh() {
        for size in [0, 1] {
            let grid = HeightGrid::flat(size);
            let mesh = build_terrain_mesh(&grid, MeshScale::default());
            assert!(mesh.is_empty(), "size {size} grid has no quads");
        }
    }

    #[test]
    fn test_vertex_positions_scaled() {
        let grid = HeightGrid::from_heights(2, vec![1.0, 2.0, 3.0, 4.0]);
        let scale = MeshScale {
            x: 2.0,
            y: 3.0,
            z: 4.0,
        };
        let mesh = build_terrain_mesh(&grid, scale);
        assert_eq!(mesh.triangle_count(), 2);

        let left = &mesh.triangles[0];
        assert_eq!(left.first, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(left.second, Vec3::new(2.0, 6.0, 0.0));
        assert_eq!(left.third, Vec3::new(2.0, 12.0, 4.0));

        let right = &mesh.triangles[1];
        assert_eq!(right.first, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(right.second, Vec3::new(2.0, 12.0, 4.0));
        assert_eq!(right.third, Vec3::new(0.0, 9.0, 4.0));
    }

    #[test]
    fn test_row_major_left_then_right_order() {
        let grid = HeightGrid::flat(3);
        let mesh = build_terrain_mesh(&grid, MeshScale::default());
        assert_eq!(mesh.triangle_count(), 8);

        // Quad (x, z) owns triangles 2 * (z * (size-1) + x) and the next.
        for z in 0..2 {
            for x in 0..2 {
                let base = 2 * (z * 2 + x);
                let left = &mesh.triangles[base];
                let right = &mesh.triangles[base + 1];
                assert_eq!(left.first, Vec3::new(x as f32, 0.0, z as f32));
                // Left and right halves share the quad diagonal.
                assert_eq!(left.second.z, z as f32, "left second stays on row z");
                assert_eq!(left.third, right.second);
                assert_eq!(right.third.z, (z + 1) as f32, "right third is on row z+1");
            }
        }
    }

    #[test]
    fn test_flat_mesh_normals_point_up() {
        let grid = HeightGrid::flat(3);
        let mesh = build_terrain_mesh(&grid, MeshScale::default());
        for (i, triangle) in mesh.iter().enumerate() {
            assert_eq!(triangle.normal(), Vec3::Y, "triangle {i} not facing up");
        }
    }

    #[test]
    fn test_unit_scale_spans_grid_extent() {
        let grid = HeightGrid::flat(5);
        let mesh = build_terrain_mesh(&grid, MeshScale::default());
        let max_x = mesh
            .iter()
            .flat_map(|t| [t.first.x, t.second.x, t.third.x])
            .fold(f32::MIN, f32::max);
        assert_eq!(max_x, 4.0);
    }
}
