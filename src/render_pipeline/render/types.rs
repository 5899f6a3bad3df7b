//! Render configuration types

use crate::render_pipeline::color::types::ColorPolicy;

/// Configuration for rendering a thermal frame to a bitmap
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Rows of the upscaled output image
    pub output_rows: u8,
    /// Columns of the upscaled output image
    pub output_cols: u8,
    /// Scalar-to-color mapping policy
    pub palette: ColorPolicy,
    /// Temperature mapped to the coldest color
    pub min_temp: f32,
    /// Temperature mapped to the hottest color
    pub max_temp: f32,
    /// Whether to validate frame dimensions before rendering
    pub validate_dimensions: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_rows: 220,
            output_cols: 176,
            palette: ColorPolicy::Grayscale { clamp: true },
            min_temp: 19.0,
            max_temp: 35.0,
            validate_dimensions: true,
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

/// Builder for RenderConfig
#[derive(Default)]
pub struct RenderConfigBuilder {
    output_rows: Option<u8>,
    output_cols: Option<u8>,
    palette: Option<ColorPolicy>,
    min_temp: Option<f32>,
    max_temp: Option<f32>,
    validate_dimensions: Option<bool>,
}

impl RenderConfigBuilder {
    pub fn output_dimensions(mut self, rows: u8, cols: u8) -> Self {
        self.output_rows = Some(rows);
        self.output_cols = Some(cols);
        self
    }

    pub fn palette(mut self, palette: ColorPolicy) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn temperature_range(mut self, min_temp: f32, max_temp: f32) -> Self {
        self.min_temp = Some(min_temp);
        self.max_temp = Some(max_temp);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> RenderConfig {
        let default = RenderConfig::default();
        RenderConfig {
            output_rows: self.output_rows.unwrap_or(default.output_rows),
            output_cols: self.output_cols.unwrap_or(default.output_cols),
            palette: self.palette.unwrap_or(default.palette),
            min_temp: self.min_temp.unwrap_or(default.min_temp),
            max_temp: self.max_temp.unwrap_or(default.max_temp),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
        }
    }
}
