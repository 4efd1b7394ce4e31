// Error types for the reviewbud application.
// Covers the generation endpoint, business selection, clipboard, and config errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed response from generation endpoint: {0}")]
    MalformedResponse(String),

    #[error("Please select a valid business (missing {})", missing.join(", "))]
    InvalidSelection { missing: Vec<&'static str> },

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Config parsing error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
