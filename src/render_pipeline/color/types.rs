//! Color mapping configuration and output image types

/// How temperature samples are turned into color values.
///
/// The two policies are alternative configurations, not composable stages:
/// grayscale feeds the bitmap encoder, RGB565 feeds a color display.
#[derive(Debug, Clone, Copy)]
pub enum ColorPolicy {
    /// Linear map of the temperature range onto 0-255.
    ///
    /// With `clamp` set, input temperatures are clamped to the range before
    /// mapping, so the output byte is always in range. Without it the raw
    /// linear map is used as-is and out-of-range temperatures wrap when
    /// truncated to 8 bits.
    Grayscale { clamp: bool },
    /// Threshold-banded map onto packed 5-6-5 colors.
    Rgb565,
}

/// Grayscale image data produced by the color mapper
#[derive(Debug, Clone)]
pub struct GrayImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Row-major grayscale bytes, one per pixel
    pub data: Vec<u8>,
}

/// RGB565 image data produced by the color mapper
#[derive(Debug, Clone)]
pub struct Rgb565Image {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Row-major packed 5-6-5 color values
    pub data: Vec<u16>,
}
