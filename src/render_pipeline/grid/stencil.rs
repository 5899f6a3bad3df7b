//! Neighborhood extraction for the cubic interpolation kernel.
//!
//! Gathers the samples at relative offsets -1, 0, +1, +2 around a target
//! coordinate. Every slot goes through the clamped read on [`ThermalFrame`],
//! so coordinates near the grid edges replicate the boundary value instead of
//! reading out of bounds, and the result is always fully populated.

use crate::render_pipeline::grid::ThermalFrame;

/// Four horizontally adjacent samples at fixed `y`.
pub fn adjacents_1d(frame: &ThermalFrame, x: i32, y: i32) -> [f32; 4] {
    [
        frame.get(x - 1, y),
        frame.get(x, y),
        frame.get(x + 1, y),
        frame.get(x + 2, y),
    ]
}

/// The 4x4 neighborhood around `(x, y)`, row index = y-offset + 1 and column
/// index = x-offset + 1.
pub fn adjacents_2d(frame: &ThermalFrame, x: i32, y: i32) -> [[f32; 4]; 4] {
    let mut adjacents = [[0.0f32; 4]; 4];
    for delta_y in -1..3 {
        let row = &mut adjacents[(delta_y + 1) as usize];
        for delta_x in -1..3 {
            row[(delta_x + 1) as usize] = frame.get(x + delta_x, y + delta_y);
        }
    }
    adjacents
}
