//! Procedural heightfield terrain: fault-formation synthesis, erosion smoothing, normalization, and raw heightfield IO.

mod error;
mod fault_formation;
mod height_grid;
mod normalize;
mod preview;
mod smoothing;

pub use error::TerrainError;
pub use fault_formation::{FaultFormationParams, generate_fault_formation};
pub use height_grid::HeightGrid;
pub use normalize::normalize_heights;
pub use preview::{HeightfieldImage, render_height_preview};
pub use smoothing::{filter_pass, smooth};
