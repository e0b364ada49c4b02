//! Directional exponential smoothing over a raw elevation buffer.
//!
//! Simulates erosion by running a causal single-pole low-pass filter along
//! rows and columns: `y_i = w * y_{i-1} + (1 - w) * x_i`. A single sweep
//! blends asymmetrically toward its starting corner, so the full pass runs
//! four sweeps (both row directions, then both column directions) to avoid
//! directional streaking.

/// Run one causal IIR filter sweep along a line of `count` elements.
///
/// The sweep starts at `heights[start]` and steps by `increment` (`±1` for
/// a row, `±size` for a column). The first element is left unchanged; each
/// subsequent element is replaced by `weight * prev + (1 - weight) * cur`,
/// where `prev` is the value just written.
///
/// # Panics
///
/// Panics if the sweep would leave the buffer.
pub fn filter_pass(heights: &mut [f32], start: usize, increment: isize, count: usize, weight: f32) {
    if count == 0 {
        return;
    }
    let last = start as isize + (count as isize - 1) * increment;
    assert!(
        start < heights.len() && last >= 0 && (last as usize) < heights.len(),
        "sweep start {start} increment {increment} count {count} leaves buffer of {}",
        heights.len()
    );

    let mut prev = heights[start];
    let mut index = start as isize;
    for _ in 1..count {
        index += increment;
        let smoothed = weight * prev + (1.0 - weight) * heights[index as usize];
        heights[index as usize] = smoothed;
        prev = smoothed;
    }
}

/// Apply one full smoothing pass over a `size x size` row-major buffer.
///
/// Sweep order is fixed: left→right along each row, right→left along each
/// row, then top→bottom and bottom→top along each column.
///
/// # Panics
///
/// Panics if `heights.len() != size * size`.
pub fn smooth(heights: &mut [f32], size: usize, weight: f32) {
    assert_eq!(
        heights.len(),
        size * size,
        "elevation buffer holds {} values, a {size}x{size} grid needs {}",
        heights.len(),
        size * size
    );
    if size == 0 {
        return;
    }

    for row in 0..size {
        filter_pass(heights, row * size, 1, size, weight);
    }
    for row in 0..size {
        filter_pass(heights, row * size + size - 1, -1, size, weight);
    }
    for col in 0..size {
        filter_pass(heights, col, size as isize, size, weight);
    }
    for col in 0..size {
        filter_pass(heights, size * (size - 1) + col, -(size as isize), size, weight);
    }
}
