//! Square grid of scalar elevations with raw heightfield file loading.

use std::path::Path;

use crate::error::TerrainError;

/// A square grid of `f32` elevations, stored row-major.
///
/// The grid is addressed by `(row, col)` with `index = row * size + col`.
/// Its dimensions are fixed at construction; regenerating terrain produces
/// a fresh grid rather than resizing an existing one.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    size: usize,
    heights: Vec<f32>,
}

impl HeightGrid {
    /// Create a flat `size x size` grid with every elevation at `0.0`.
    ///
    /// `size == 0` yields an empty grid.
    pub fn flat(size: usize) -> Self {
        Self {
            size,
            heights: vec![0.0; size * size],
        }
    }

    /// Build a grid from a row-major elevation buffer.
    ///
    /// # Panics
    ///
    /// Panics if `heights.len() != size * size`.
    pub fn from_heights(size: usize, heights: Vec<f32>) -> Self {
        assert_eq!(
            heights.len(),
            size * size,
            "elevation buffer holds {} values, a {size}x{size} grid needs {}",
            heights.len(),
            size * size
        );
        Self { size, heights }
    }

    /// Load a raw heightfield: `size * size` unsigned 8-bit samples,
    /// row-major, no header. Each byte is rebiased by subtracting 128,
    /// giving elevations in `[-128, 127]`.
    ///
    /// The loader fails closed: a file whose length is not a multiple of
    /// `size` is rejected as [`TerrainError::MisalignedHeightfield`], and
    /// an aligned but partial or oversized file as
    /// [`TerrainError::HeightfieldSizeMismatch`]. On any error nothing is
    /// constructed, so a grid the caller already holds is never touched.
    pub fn load_raw(path: &Path, size: usize) -> Result<Self, TerrainError> {
        if size == 0 {
            return Err(TerrainError::InvalidGridSize);
        }

        let bytes = std::fs::read(path).map_err(TerrainError::Io)?;
        let length = bytes.len() as u64;

        if length % size as u64 != 0 {
            return Err(TerrainError::MisalignedHeightfield { length, size });
        }
        let expected = (size * size) as u64;
        if length != expected {
            return Err(TerrainError::HeightfieldSizeMismatch { length, expected });
        }

        let heights = bytes
            .iter()
            .map(|&sample| f32::from(i16::from(sample) - 128))
            .collect();
        log::debug!("loaded {size}x{size} heightfield from {}", path.display());
        Ok(Self { size, heights })
    }

    /// Grid edge length; the grid holds `size * size` elevations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the grid holds no elevations.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Elevation at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    pub fn height(&self, row: usize, col: usize) -> f32 {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of bounds for {0}x{0} grid",
            self.size
        );
        self.heights[row * self.size + col]
    }

    /// Set the elevation at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    pub fn set_height(&mut self, row: usize, col: usize, height: f32) {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of bounds for {0}x{0} grid",
            self.size
        );
        self.heights[row * self.size + col] = height;
    }

    /// The raw row-major elevation buffer.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Mutable access to the raw row-major elevation buffer, for filtering.
    pub fn heights_mut(&mut self) -> &mut [f32] {
        &mut self.heights
    }

    /// Minimum and maximum elevation, or `None` for an empty grid.
    pub fn height_range(&self) -> Option<(f32, f32)> {
        let first = *self.heights.first()?;
        let mut min = first;
        let mut max = first;
        for &h in &self.heights[1..] {
            if h > max {
                max = h;
            } else if h < min {
                min = h;
            }
        }
        Some((min, max))
    }
}
