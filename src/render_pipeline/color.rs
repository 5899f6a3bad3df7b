//! Scalar-to-color mapping module
//!
//! This module converts temperature samples into display or storage colors
//! under one of two mutually exclusive policies: a linear grayscale byte
//! mapping for the bitmap encoder, or a threshold-banded RGB565 mapping for a
//! color-capable display.

mod map;
pub mod types;

pub use map::{map_to_gray, map_to_rgb565, temperature_to_gray, temperature_to_rgb565};
pub use types::{ColorPolicy, GrayImage, Rgb565Image};
