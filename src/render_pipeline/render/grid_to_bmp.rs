use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::render_pipeline::{
    bmp::{BmpWriter, StandardBmpWriter},
    color::{self, ColorPolicy, GrayImage},
    common::error::{RenderError, Result},
    grid::ThermalFrame,
    render::types::RenderConfig,
    resample,
};

pub struct GridToBmpPipeline<W: BmpWriter> {
    writer: W,
    config: RenderConfig,
}

impl GridToBmpPipeline<StandardBmpWriter> {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            writer: StandardBmpWriter,
            config,
        }
    }
}

impl<W: BmpWriter> GridToBmpPipeline<W> {
    pub fn with_custom(writer: W, config: RenderConfig) -> Self {
        Self { writer, config }
    }

    fn validate_frame(&self, frame: &ThermalFrame) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }
        frame.validate()
    }

    fn map_colors(&self, upscaled: &ThermalFrame) -> Result<GrayImage> {
        match self.config.palette {
            ColorPolicy::Grayscale { clamp } => Ok(color::map_to_gray(
                upscaled,
                self.config.min_temp,
                self.config.max_temp,
                clamp,
            )),
            ColorPolicy::Rgb565 => Err(RenderError::UnsupportedPolicy(
                "RGB565 output feeds the display path and cannot be encoded as 24-bit BMP"
                    .to_string(),
            )),
        }
    }

    #[instrument(skip(self, frame, output), fields(rows = frame.rows, cols = frame.cols))]
    pub fn render(&self, frame: &ThermalFrame, output: &mut dyn Write) -> Result<()> {
        info!("Starting thermal frame render");

        {
            let _span = tracing::info_span!(
                "validate_frame",
                rows = frame.rows,
                cols = frame.cols
            )
            .entered();
            self.validate_frame(frame)?;
        }

        let upscaled = {
            let _span = tracing::info_span!(
                "resample",
                rows = self.config.output_rows,
                cols = self.config.output_cols
            )
            .entered();
            resample::resampled(frame, self.config.output_rows, self.config.output_cols)?
        };

        let gray = {
            let _span = tracing::info_span!("map_colors").entered();
            self.map_colors(&upscaled)?
        };

        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_bmp(&gray, output)?;
        }

        info!(
            rows = self.config.output_rows,
            cols = self.config.output_cols,
            "Render complete"
        );
        Ok(())
    }

    #[instrument(skip(self, frame, output_path))]
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        frame: &ThermalFrame,
        output_path: P,
    ) -> Result<()> {
        let output_path = output_path.as_ref();

        info!(output = %output_path.display(), "Rendering frame to file");

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                RenderError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.render(frame, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }
}
