//! Fault-formation heightfield synthesis.
//!
//! Repeatedly splits the height plane with a line through two random grid
//! points and raises one side by a displacement that steps down linearly
//! across iterations, smoothing after every fault. The result is a
//! fractal-looking ridge field normalized into `[0, 255]`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::TerrainError;
use crate::height_grid::HeightGrid;
use crate::normalize::normalize_heights;
use crate::smoothing::smooth;

/// Parameters for fault-formation generation.
#[derive(Clone, Debug)]
pub struct FaultFormationParams {
    /// Number of fault lines to apply.
    pub iterations: u32,
    /// Grid edge length; the output grid is `size x size`.
    pub size: usize,
    /// Displacement applied by the final iteration.
    pub min_height: i32,
    /// Displacement applied by the first iteration.
    pub max_height: i32,
    /// Smoothing filter weight in `[0, 1]`. Higher values erode harder.
    pub filter_weight: f32,
    /// Extra smoothing passes applied after the fault loop.
    pub post_smoothing_passes: u32,
    /// `Some(n)` for reproducible output; `None` seeds from the system
    /// clock for a fresh terrain on every run.
    pub seed: Option<u64>,
}

impl Default for FaultFormationParams {
    fn default() -> Self {
        Self {
            iterations: 64,
            size: 128,
            min_height: 0,
            max_height: 255,
            filter_weight: 0.4,
            post_smoothing_passes: 2,
            seed: Some(0),
        }
    }
}

/// Synthesize a heightfield by fault formation.
///
/// Fails with [`TerrainError::InvalidGridSize`] if `params.size` is zero;
/// nothing is allocated or mutated on the error path. With a fixed seed
/// the output is fully deterministic.
pub fn generate_fault_formation(params: &FaultFormationParams) -> Result<HeightGrid, TerrainError> {
    if params.size == 0 {
        return Err(TerrainError::InvalidGridSize);
    }
    let size = params.size;
    let mut rng = match params.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::seed_from_u64(clock_seed()),
    };

    let mut heights = vec![0.0_f32; size * size];

    // A 1x1 grid holds no pair of distinct fault points; it stays flat.
    if size > 1 {
        for j in 0..params.iterations {
            let displacement = displacement_for_iteration(
                j,
                params.iterations,
                params.min_height,
                params.max_height,
            );
            let (p1, p2) = pick_fault_points(&mut rng, size);
            raise_side(&mut heights, size, p1, p2, displacement as f32);
            smooth(&mut heights, size, params.filter_weight);
        }
    }

    for _ in 0..params.post_smoothing_passes {
        smooth(&mut heights, size, params.filter_weight);
    }

    normalize_heights(&mut heights);

    log::debug!(
        "generated {size}x{size} heightfield: {} fault iterations, {} post-smoothing passes",
        params.iterations,
        params.post_smoothing_passes
    );
    Ok(HeightGrid::from_heights(size, heights))
}

/// Displacement for fault `j`: a stepped linear ramp from `max_height`
/// toward `min_height`. Integer division keeps the steps, deliberately.
fn displacement_for_iteration(j: u32, iterations: u32, min_height: i32, max_height: i32) -> i32 {
    max_height - ((max_height - min_height) * j as i32) / iterations as i32
}

/// Pick two distinct random grid points. Only exact point equality is
/// rejected; collinear picks are allowed.
fn pick_fault_points(rng: &mut ChaCha8Rng, size: usize) -> ((usize, usize), (usize, usize)) {
    let p1 = (rng.random_range(0..size), rng.random_range(0..size));
    loop {
        let p2 = (rng.random_range(0..size), rng.random_range(0..size));
        if p2 != p1 {
            return (p1, p2);
        }
    }
}

/// Add `displacement` to every cell strictly on the positive side of the
/// line through `p1` and `p2`, judged by the signed cross-product
/// `(x - x1)(z2 - z1) - (x2 - x1)(z - z1)`. Cells on the line are left
/// unchanged.
fn raise_side(
    heights: &mut [f32],
    size: usize,
    p1: (usize, usize),
    p2: (usize, usize),
    displacement: f32,
) {
    let (x1, z1) = (p1.0 as i64, p1.1 as i64);
    let (x2, z2) = (p2.0 as i64, p2.1 as i64);

    for z in 0..size {
        for x in 0..size {
            let cross = (x as i64 - x1) * (z2 - z1) - (x2 - x1) * (z as i64 - z1);
            if cross > 0 {
                heights[z * size + x] += displacement;
            }
        }
    }
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement_steps_down_with_truncation() {
        // 100 at the first fault, 100 - 90 = 10 at the last.
        assert_eq!(displacement_for_iteration(0, 10, 0, 100), 100);
        assert_eq!(displacement_for_iteration(5, 10, 0, 100), 50);
        assert_eq!(displacement_for_iteration(9, 10, 0, 100), 10);
        // Truncation, not rounding: (100 * 1) / 3 = 33.
        assert_eq!(displacement_for_iteration(1, 3, 0, 100), 67);
    }

    #[test]
    fn test_raise_side_partitions_plane() {
        // Vertical line through (0, 0) and (0, 3): cross = 3x, so every
        // cell with x >= 1 is raised and the x == 0 column is untouched.
        let size = 4;
        let mut heights = vec![0.0; size * size];
        raise_side(&mut heights, size, (0, 0), (0, 3), 10.0);

        for z in 0..size {
            for x in 0..size {
                let expected = if x >= 1 { 10.0 } else { 0.0 };
                assert_eq!(
                    heights[z * size + x],
                    expected,
                    "cell ({x}, {z}) on the wrong side of the fault"
                );
            }
        }
    }

    #[test]
    fn test_raise_side_cells_on_line_unchanged() {
        // Diagonal through (0, 0) and (3, 3): the diagonal itself stays.
        let size = 4;
        let mut heights = vec![0.0; size * size];
        raise_side(&mut heights, size, (0, 0), (3, 3), 5.0);
        for i in 0..size {
            assert_eq!(heights[i * size + i], 0.0);
        }
    }

    #[test]
    fn test_pick_fault_points_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let (p1, p2) = pick_fault_points(&mut rng, 2);
            assert_ne!(p1, p2);
        }
    }

    #[test]
    fn test_generate_zero_iterations_is_flat() {
        let params = FaultFormationParams {
            iterations: 0,
            size: 4,
            min_height: 0,
            max_height: 100,
            filter_weight: 0.5,
            post_smoothing_passes: 0,
            seed: Some(42),
        };
        let grid = generate_fault_formation(&params).unwrap();
        assert_eq!(grid.size(), 4);
        // No displacement was ever applied, and normalization leaves a
        // flat field alone, so every cell is still zero.
        assert!(grid.heights().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_generate_single_cell_grid_is_flat() {
        let params = FaultFormationParams {
            iterations: 5,
            size: 1,
            ..Default::default()
        };
        let grid = generate_fault_formation(&params).unwrap();
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.heights(), &[0.0]);
    }

    #[test]
    fn test_generate_zero_size_fails() {
        let params = FaultFormationParams {
            size: 0,
            ..Default::default()
        };
        assert!(matches!(
            generate_fault_formation(&params),
            Err(TerrainError::InvalidGridSize)
        ));
    }

    #[test]
    fn test_generate_deterministic_with_seed() {
        let params = FaultFormationParams {
            iterations: 16,
            size: 16,
            seed: Some(1234),
            ..Default::default()
        };
        let a = generate_fault_formation(&params).unwrap();
        let b = generate_fault_formation(&params).unwrap();
        assert_eq!(
            a.heights(),
            b.heights(),
            "same seed must produce an identical grid"
        );
    }

    #[test]
    fn test_generate_different_seeds_differ() {
        let base = FaultFormationParams {
            iterations: 16,
            size: 16,
            ..Default::default()
        };
        let a = generate_fault_formation(&FaultFormationParams {
            seed: Some(1),
            ..base.clone()
        })
        .unwrap();
        let b = generate_fault_formation(&FaultFormationParams {
            seed: Some(2),
            ..base
        })
        .unwrap();
        assert_ne!(a.heights(), b.heights());
    }

    #[test]
    fn test_generate_output_is_normalized() {
        let params = FaultFormationParams {
            iterations: 32,
            size: 16,
            seed: Some(99),
            ..Default::default()
        };
        let grid = generate_fault_formation(&params).unwrap();
        let (min, max) = grid.height_range().unwrap();
        assert!(min >= 0.0 && max <= 255.0, "range [{min}, {max}] escaped [0, 255]");
        if max > min {
            // Any variance at all means the field was rescaled end to end.
            assert_eq!(min, 0.0);
            assert_eq!(max, 255.0);
        }
    }

    #[test]
    fn test_generate_single_iteration_without_smoothing() {
        // weight 0 makes smoothing the identity, so the grid holds at
        // most two distinct values: 0 and the first displacement (100),
        // rescaled by normalization if both sides are populated.
        let params = FaultFormationParams {
            iterations: 1,
            size: 8,
            min_height: 0,
            max_height: 100,
            filter_weight: 0.0,
            post_smoothing_passes: 0,
            seed: Some(5),
        };
        let grid = generate_fault_formation(&params).unwrap();
        let mut distinct: Vec<f32> = grid.heights().to_vec();
        distinct.sort_by(f32::total_cmp);
        distinct.dedup();
        assert!(
            distinct.len() <= 2,
            "one fault with no smoothing must yield at most two levels, got {distinct:?}"
        );
    }
}
