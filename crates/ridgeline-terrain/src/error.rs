//! Terrain error types.

/// Errors that can occur when generating or loading a heightfield.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// Failed to read the heightfield file from disk.
    #[error("failed to read heightfield: {0}")]
    Io(#[source] std::io::Error),

    /// The file's byte length is not an exact multiple of the grid size.
    ///
    /// Kept as its own variant so callers that want to accept files with
    /// trailing padding can match and relax exactly this check.
    #[error("heightfield file is {length} bytes, not a multiple of grid size {size}")]
    MisalignedHeightfield {
        /// Byte length of the file.
        length: u64,
        /// Declared grid size.
        size: usize,
    },

    /// The file is aligned to the grid size but does not hold exactly
    /// `size * size` samples.
    #[error("heightfield file is {length} bytes, expected exactly {expected}")]
    HeightfieldSizeMismatch {
        /// Byte length of the file.
        length: u64,
        /// Expected byte length (`size * size`).
        expected: u64,
    },

    /// A non-positive grid size was requested.
    #[error("grid size must be positive")]
    InvalidGridSize,
}
