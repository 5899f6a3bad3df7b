use crate::render_pipeline::color::types::{GrayImage, Rgb565Image};
use crate::render_pipeline::grid::ThermalFrame;

/// Cold-to-hot color bands as (upper bound on the normalized temperature,
/// packed 5-6-5 color). The last band also covers everything above the range.
const RGB565_BANDS: [(f32, u16); 6] = [
    (0.20, 0x001F), // blue
    (0.35, 0x07FF), // cyan
    (0.50, 0x07E0), // green
    (0.65, 0xFFE0), // yellow
    (0.80, 0xFD20), // orange
    (1.00, 0xF800), // red
];

/// Linear map of `temp` from `[min_temp, max_temp]` onto 0-255, truncating
/// toward zero.
///
/// The primitive does not clamp: a temperature outside the range scales to a
/// value outside 0-255 and wraps when truncated to 8 bits. Callers that need
/// a bounded byte must clamp the temperature first (the bitmap encoder
/// assumes valid byte-range grayscale); see
/// [`ColorPolicy::Grayscale`](crate::render_pipeline::ColorPolicy).
pub fn temperature_to_gray(temp: f32, min_temp: f32, max_temp: f32) -> u8 {
    let scaled = (temp - min_temp) / (max_temp - min_temp) * 255.0;
    (scaled as i64) as u8
}

/// Banded map of `temp` onto a packed 5-6-5 color.
///
/// The normalized temperature selects the first band whose upper bound
/// exceeds it; below-range input lands in the coldest band and above-range
/// input in the hottest.
pub fn temperature_to_rgb565(temp: f32, min_temp: f32, max_temp: f32) -> u16 {
    let t = (temp - min_temp) / (max_temp - min_temp);
    for (upper, color) in RGB565_BANDS {
        if t < upper {
            return color;
        }
    }
    RGB565_BANDS[RGB565_BANDS.len() - 1].1
}

/// Maps a whole frame to grayscale bytes.
pub fn map_to_gray(frame: &ThermalFrame, min_temp: f32, max_temp: f32, clamp: bool) -> GrayImage {
    let data = frame
        .data
        .iter()
        .map(|&temp| {
            let temp = if clamp {
                temp.clamp(min_temp, max_temp)
            } else {
                temp
            };
            temperature_to_gray(temp, min_temp, max_temp)
        })
        .collect();
    GrayImage {
        width: frame.cols as usize,
        height: frame.rows as usize,
        data,
    }
}

/// Maps a whole frame to packed RGB565 colors.
pub fn map_to_rgb565(frame: &ThermalFrame, min_temp: f32, max_temp: f32) -> Rgb565Image {
    let data = frame
        .data
        .iter()
        .map(|&temp| temperature_to_rgb565(temp, min_temp, max_temp))
        .collect();
    Rgb565Image {
        width: frame.cols as usize,
        height: frame.rows as usize,
        data,
    }
}
