use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid grid dimensions: rows={0}, cols={1}")]
    InvalidDimensions(usize, usize),

    #[error("Destination grid {0}x{1} is too small to resample: both dimensions must be at least 2")]
    DestinationTooSmall(u8, u8),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode BMP image: {0}")]
    EncodeError(String),

    #[error("Unsupported color policy: {0}")]
    UnsupportedPolicy(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
