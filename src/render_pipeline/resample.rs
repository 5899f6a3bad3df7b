//! Bicubic resampling module
//!
//! This module provides the one- and two-dimensional cubic convolution
//! kernels and the destination-driven loop that magnifies a thermal frame to
//! a higher resolution.

mod kernel;
mod upscaler;

pub use kernel::{bicubic_interpolate, cubic_interpolate};
pub use upscaler::{resample, resampled, sample_at};
