use std::io::Write;

use crate::render_pipeline::color::types::GrayImage;
use crate::render_pipeline::common::error::Result;

pub trait BmpWriter {
    fn write_bmp(&self, image: &GrayImage, output: &mut dyn Write) -> Result<()>;
}
