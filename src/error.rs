use thiserror::Error;

/// Errors that can occur while loading the canvas configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Errors that can occur while exporting the canvas to an image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cannot export an empty canvas ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Failed to encode image: {0}")]
    EncodeError(#[from] image::ImageError),
}
