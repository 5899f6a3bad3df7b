//! Destination-driven bicubic magnification of a thermal frame.

use tracing::debug;

use crate::render_pipeline::common::error::{RenderError, Result};
use crate::render_pipeline::grid::stencil::adjacents_2d;
use crate::render_pipeline::grid::ThermalFrame;
use crate::render_pipeline::resample::kernel::bicubic_interpolate;

/// Resamples `src` into `dest`, filling every destination cell.
///
/// Each destination index maps back to a continuous source coordinate through
/// the per-axis ratios `(src_dim - 1) / (dest_dim - 1)`; the integer part
/// anchors a 4x4 neighborhood and the fractional part drives the kernel.
/// When the dimensions match, every destination cell lands on an exact source
/// grid point and the output equals the input.
///
/// Both destination dimensions must be at least 2, otherwise the ratio is
/// undefined; the check happens before any cell is written, so a failed call
/// leaves `dest` untouched.
pub fn resample(src: &ThermalFrame, dest: &mut ThermalFrame) -> Result<()> {
    src.validate()?;
    dest.validate()?;
    if dest.rows < 2 || dest.cols < 2 {
        return Err(RenderError::DestinationTooSmall(dest.rows, dest.cols));
    }

    let mu_x = (src.cols as f32 - 1.0) / (dest.cols as f32 - 1.0);
    let mu_y = (src.rows as f32 - 1.0) / (dest.rows as f32 - 1.0);

    debug!(
        "Resampling {}x{} -> {}x{} (mu_x={mu_x:.4}, mu_y={mu_y:.4})",
        src.rows, src.cols, dest.rows, dest.cols
    );

    for y_idx in 0..dest.rows as i32 {
        for x_idx in 0..dest.cols as i32 {
            let x = x_idx as f32 * mu_x;
            let y = y_idx as f32 * mu_y;
            let x0 = x.floor();
            let y0 = y.floor();
            let adjacents = adjacents_2d(src, x0 as i32, y0 as i32);
            let out = bicubic_interpolate(&adjacents, x - x0, y - y0);
            dest.set(x_idx, y_idx, out);
        }
    }

    Ok(())
}

/// Convenience wrapper that allocates the destination frame.
pub fn resampled(src: &ThermalFrame, rows: u8, cols: u8) -> Result<ThermalFrame> {
    let mut dest = ThermalFrame::filled(rows, cols, 0.0);
    resample(src, &mut dest)?;
    Ok(dest)
}

/// Bicubic point query at a continuous source coordinate.
///
/// Uses the same neighborhood and kernel as [`resample`], so sampling an
/// exact grid point returns that sample.
pub fn sample_at(frame: &ThermalFrame, x: f32, y: f32) -> f32 {
    let x0 = x.floor();
    let y0 = y.floor();
    let adjacents = adjacents_2d(frame, x0 as i32, y0 as i32);
    bicubic_interpolate(&adjacents, x - x0, y - y0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn gradient_frame(rows: u8, cols: u8) -> ThermalFrame {
        let data = (0..rows as usize)
            .flat_map(|y| (0..cols as usize).map(move |x| 20.0 + (x + y) as f32 * 0.5))
            .collect();
        ThermalFrame::new(rows, cols, data).unwrap()
    }

    #[test]
    fn test_identity_resample() {
        let src = gradient_frame(5, 7);
        let dest = resampled(&src, 5, 7).unwrap();
        for (a, b) in src.data.iter().zip(dest.data.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_constant_input_stays_constant() {
        let src = ThermalFrame::filled(8, 8, 30.0);
        let mid = resampled(&src, 24, 24).unwrap();
        let out = resampled(&mid, 220, 176).unwrap();
        for &value in &out.data {
            assert_relative_eq!(value, 30.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_hot_pixel_stays_local_maximum() {
        // single 40.0 sample at (3, 3) in a 25.0 field; 8x8 -> 15x15 maps it
        // exactly onto destination cell (6, 6)
        let mut src = ThermalFrame::filled(8, 8, 25.0);
        src.set(3, 3, 40.0);
        let dest = resampled(&src, 15, 15).unwrap();

        assert_relative_eq!(dest.get(6, 6), 40.0, epsilon = 1e-4);
        assert!(dest.get(5, 6) < dest.get(6, 6));
        assert!(dest.get(7, 6) < dest.get(6, 6));
        assert!(dest.get(6, 5) < dest.get(6, 6));
        assert!(dest.get(6, 7) < dest.get(6, 6));

        // overshoot is bounded by a small multiple of the input range
        let max = dest.data.iter().cloned().fold(f32::MIN, f32::max);
        let min = dest.data.iter().cloned().fold(f32::MAX, f32::min);
        assert!(max <= 40.0 + (40.0 - 25.0));
        assert!(min >= 25.0 - (40.0 - 25.0));
    }

    #[test]
    fn test_degenerate_destination_fails_before_writing() {
        let src = gradient_frame(4, 4);
        let mut dest = ThermalFrame::filled(1, 10, -99.0);
        let result = resample(&src, &mut dest);
        assert!(matches!(
            result,
            Err(RenderError::DestinationTooSmall(1, 10))
        ));
        assert!(dest.data.iter().all(|&v| v == -99.0));
    }

    #[test]
    fn test_invalid_source_rejected() {
        let src = ThermalFrame {
            rows: 4,
            cols: 4,
            data: vec![0.0; 3],
        };
        let mut dest = ThermalFrame::filled(8, 8, 0.0);
        assert!(matches!(
            resample(&src, &mut dest),
            Err(RenderError::InvalidDimensions(4, 4))
        ));
    }

    #[test]
    fn test_sample_at_grid_points() {
        let frame = gradient_frame(6, 6);
        assert_relative_eq!(sample_at(&frame, 2.0, 3.0), frame.get(2, 3), epsilon = 1e-5);
        assert_relative_eq!(sample_at(&frame, 0.0, 0.0), frame.get(0, 0), epsilon = 1e-5);
    }
}
