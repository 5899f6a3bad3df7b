//! BMP writing module
//!
//! This module serializes a grayscale image into an uncompressed 24-bit
//! bitmap with a byte-exact header layout.

mod standard_bmp_writer;
mod writer;

pub use standard_bmp_writer::{row_size, StandardBmpWriter, BMP_HEADER_SIZE};
pub use writer::BmpWriter;
