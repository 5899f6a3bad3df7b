//! Uncompressed 24-bit BMP encoder.
//!
//! File layout: 14-byte file header, 40-byte DIB header, then pixel rows in
//! bottom-up order. Each pixel stores the grayscale value replicated into the
//! blue, green and red channels, and each row is zero-padded to a multiple of
//! four bytes.

use std::io::Write;

use tracing::debug;

use crate::render_pipeline::bmp::writer::BmpWriter;
use crate::render_pipeline::color::types::GrayImage;
use crate::render_pipeline::common::error::{RenderError, Result};

/// Combined size of the file and DIB headers; also the pixel data offset.
pub const BMP_HEADER_SIZE: u32 = 54;

const DIB_HEADER_SIZE: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

/// Horizontal and vertical resolution in pixels per meter (72 DPI).
const RESOLUTION_PPM: i32 = 2835;

/// Byte size of one pixel row including padding.
pub fn row_size(width: usize) -> usize {
    ((width * 3) + 3) & !3
}

pub struct StandardBmpWriter;

impl BmpWriter for StandardBmpWriter {
    fn write_bmp(&self, image: &GrayImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding BMP image: {}x{}", image.width, image.height);

        if image.data.len() != image.width * image.height {
            return Err(RenderError::EncodeError(format!(
                "pixel buffer holds {} bytes for a {}x{} image",
                image.data.len(),
                image.width,
                image.height
            )));
        }

        let row = row_size(image.width);
        let file_size = BMP_HEADER_SIZE as usize + row * image.height;
        let padding = row - image.width * 3;

        let mut buffer = Vec::with_capacity(file_size);

        // file header
        buffer.extend_from_slice(b"BM");
        buffer.extend_from_slice(&(file_size as u32).to_le_bytes());
        buffer.extend_from_slice(&0u32.to_le_bytes()); // reserved
        buffer.extend_from_slice(&BMP_HEADER_SIZE.to_le_bytes()); // pixel data offset

        // DIB header
        buffer.extend_from_slice(&DIB_HEADER_SIZE.to_le_bytes());
        buffer.extend_from_slice(&(image.width as i32).to_le_bytes());
        buffer.extend_from_slice(&(image.height as i32).to_le_bytes());
        buffer.extend_from_slice(&1u16.to_le_bytes()); // planes
        buffer.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        buffer.extend_from_slice(&0u32.to_le_bytes()); // compression
        buffer.extend_from_slice(&0u32.to_le_bytes()); // image size, 0 for uncompressed
        buffer.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
        buffer.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
        buffer.extend_from_slice(&0u32.to_le_bytes()); // palette colors
        buffer.extend_from_slice(&0u32.to_le_bytes()); // important colors

        // pixel rows, bottom-up, BGR order
        for y in (0..image.height).rev() {
            let start = y * image.width;
            for &gray in &image.data[start..start + image.width] {
                buffer.extend_from_slice(&[gray, gray, gray]);
            }
            buffer.extend_from_slice(&[0u8; 3][..padding]);
        }

        output.write_all(&buffer)?;
        output.flush()?;

        debug!("BMP encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(image: &GrayImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        StandardBmpWriter.write_bmp(image, &mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_row_size_rounds_up_to_four_bytes() {
        assert_eq!(row_size(1), 4);
        assert_eq!(row_size(2), 8);
        assert_eq!(row_size(4), 12);
        assert_eq!(row_size(176), 528);
    }

    #[test]
    fn test_header_layout_for_176x220() {
        let image = GrayImage {
            width: 176,
            height: 220,
            data: vec![0u8; 176 * 220],
        };
        let bytes = encode(&image);

        assert_eq!(&bytes[0..2], b"BM");
        let expected_size = 54 + ((176 * 3 + 3) & !3) * 220;
        assert_eq!(&bytes[2..6], &(expected_size as u32).to_le_bytes());
        assert_eq!(&bytes[10..14], &54u32.to_le_bytes());
        assert_eq!(&bytes[14..18], &40u32.to_le_bytes());
        assert_eq!(&bytes[18..22], &[0xB0, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[22..26], &[0xDC, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[26..28], &1u16.to_le_bytes());
        assert_eq!(&bytes[28..30], &24u16.to_le_bytes());
        assert_eq!(&bytes[30..34], &0u32.to_le_bytes());
        assert_eq!(&bytes[38..42], &2835i32.to_le_bytes());
        assert_eq!(&bytes[42..46], &2835i32.to_le_bytes());
        assert_eq!(bytes.len(), expected_size);
    }

    #[test]
    fn test_rows_written_bottom_up_with_padding() {
        // 2x2: top row 10, 20; bottom row 30, 40
        let image = GrayImage {
            width: 2,
            height: 2,
            data: vec![10, 20, 30, 40],
        };
        let bytes = encode(&image);

        assert_eq!(bytes.len(), 54 + 8 * 2);
        // bottom row comes first, each gray byte replicated into B, G, R
        assert_eq!(&bytes[54..60], &[30, 30, 30, 40, 40, 40]);
        assert_eq!(&bytes[60..62], &[0, 0]); // row padding
        assert_eq!(&bytes[62..68], &[10, 10, 10, 20, 20, 20]);
        assert_eq!(&bytes[68..70], &[0, 0]);
    }

    #[test]
    fn test_mismatched_buffer_rejected() {
        let image = GrayImage {
            width: 4,
            height: 4,
            data: vec![0u8; 7],
        };
        let mut sink = Vec::new();
        let result = StandardBmpWriter.write_bmp(&image, &mut sink);
        assert!(matches!(result, Err(RenderError::EncodeError(_))));
        assert!(sink.is_empty());
    }
}
