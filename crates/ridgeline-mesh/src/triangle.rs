//! Triangle list data structures produced by heightfield triangulation.

use glam::Vec3;

/// One renderable face: three positions in winding order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub first: Vec3,
    /// Second vertex.
    pub second: Vec3,
    /// Third vertex.
    pub third: Vec3,
}

impl Triangle {
    /// Unit face normal, oriented upward (+Y) for a flat terrain quad.
    ///
    /// Degenerate triangles yield the zero vector.
    pub fn normal(&self) -> Vec3 {
        (self.third - self.first)
            .cross(self.second - self.first)
            .normalize_or_zero()
    }
}

/// An ordered triangle list.
///
/// Insertion order is the grid traversal order and is preserved exactly:
/// consumers rely on triangle parity (even = "left" half of a quad,
/// odd = "right" half) to orient texture coordinates. The mesh is rebuilt
/// wholesale on regeneration, never edited in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    /// The triangles, in emission order.
    pub triangles: Vec<Triangle>,
}

impl TriangleMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Append a triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if the mesh holds no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterate the triangles in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter()
    }

    /// Drop all triangles, keeping the allocation for the next build.
    pub fn clear(&mut self) {
        self.triangles.clear();
    }
}
