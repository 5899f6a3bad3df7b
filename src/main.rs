use thermavis_rs::logger;
use thermavis_rs::render_pipeline::{
    ColorPolicy, GridToBmpPipeline, RenderConfig, ThermalFrame, resampled,
};

use tracing::{debug, error, info};

/// Native resolution of the infrared sensor array.
const SENSOR_ROWS: u8 = 8;
const SENSOR_COLS: u8 = 8;

/// Intermediate resolution fed to the display collaborator.
const PREVIEW_ROWS: u8 = 24;
const PREVIEW_COLS: u8 = 24;

/// Synthetic capture standing in for the sensor collaborator: a warm spot
/// over an ambient background.
fn capture_frame() -> ThermalFrame {
    let mut frame = ThermalFrame::filled(SENSOR_ROWS, SENSOR_COLS, 21.0);
    for y in 0..SENSOR_ROWS as i32 {
        for x in 0..SENSOR_COLS as i32 {
            let dx = x as f32 - 4.0;
            let dy = y as f32 - 3.0;
            let temp = 21.0 + 12.0 * (-(dx * dx + dy * dy) / 6.0).exp();
            frame.set(x, y, temp);
        }
    }
    frame
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting thermavis...");

    let config = RenderConfig::builder()
        .output_dimensions(220, 176)
        .palette(ColorPolicy::Grayscale { clamp: true })
        .temperature_range(19.0, 35.0)
        .build();
    let pipeline = GridToBmpPipeline::new(config);

    info!("Thermal render pipeline initialized");
    info!(
        "Output: {}x{}, range {:.1}..{:.1} C",
        pipeline.config().output_rows,
        pipeline.config().output_cols,
        pipeline.config().min_temp,
        pipeline.config().max_temp,
    );

    let frame = capture_frame();
    debug!("Sensor readings:\n{frame}");

    let preview = resampled(&frame, PREVIEW_ROWS, PREVIEW_COLS)?;

    match pipeline.render_to_file(&preview, "thermal.bmp") {
        Ok(_) => info!("Render successful!"),
        Err(e) => error!("Render failed: {}", e),
    }

    Ok(())
}
