//! Heightfield triangulation: converts a height grid into an ordered, renderable triangle list.

mod builder;
mod triangle;

pub use builder::{MeshScale, build_terrain_mesh};
pub use triangle::{Triangle, TriangleMesh};
