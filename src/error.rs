use thiserror::Error;

/// Errors that can occur while producing an exported image
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Invalid export dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Errors that can occur while loading the sketchpad configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level error type surfaced to the app shell
#[derive(Error, Debug)]
pub enum SketchpadError {
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Download failed: {0}")]
    Download(String),
}
