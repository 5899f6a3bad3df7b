//! Render orchestration module
//!
//! This module contains the configuration and the pipeline that chains
//! resampling, color mapping and BMP encoding.

mod grid_to_bmp;
pub mod types;

pub use grid_to_bmp::GridToBmpPipeline;
pub use types::{RenderConfig, RenderConfigBuilder};
