use std::path::PathBuf;
use thiserror::Error;

/// Textquest error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Failed to read source '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unknown text encoding: {0}")]
    Encoding(String),

    #[error("Invalid hostname '{hostname}': {source}")]
    Hostname {
        hostname: String,
        source: url::ParseError,
    },

    #[error("Failed to write '{path}': {source}")]
    SectionWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Art asset '{path}' is unreadable: {source}")]
    ArtRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Textquest operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create a source-read error
    pub fn source_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::SourceRead {
            path: path.into(),
            source,
        }
    }

    /// Create a section-write error
    pub fn section_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::SectionWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
