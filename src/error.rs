use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Errors {
    /// An error occurred while making an API request to Telegram
    #[error("Telegram API request error: {0}")]
    Request(#[from] teloxide::RequestError),

    /// An I/O error occurred during local file setup (creating the dest file)
    #[error("File setup I/O error: {0}")]
    FileSetup(#[from] std::io::Error),

    // A error occurred during the file download itself.
    #[error("File download error: {0}")]
    Download(#[from] teloxide::DownloadError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Cannot identify config file type of {0}. Must be .toml, .json or .yaml")]
    UnknownFormat(PathBuf),

    #[error("{0}")]
    Extract(#[from] figment::Error),

    #[error("Telegram token is not set")]
    MissingToken,

    #[error("SauceNAO API key is not set")]
    MissingApiKey,

    #[error("Threshold must be a number between 0 and 100, got {0}")]
    InvalidThreshold(f32),

    #[error("Limit must be between 1 and 10, got {0}")]
    InvalidLimit(u8),

    #[error("Timeout must be at least one second")]
    InvalidTimeout,
}
