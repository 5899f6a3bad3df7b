//! Thermal grid storage module
//!
//! This module provides the dimension-tagged frame buffer used throughout the
//! pipeline, together with boundary-clamped addressing and neighborhood
//! extraction for the resampling kernel.

pub mod stencil;
mod types;

pub use types::ThermalFrame;
