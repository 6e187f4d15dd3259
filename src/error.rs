use thiserror::Error;

/// Errors that can occur while exporting the signature image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Cannot export an empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while loading or storing pad settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize config: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;
