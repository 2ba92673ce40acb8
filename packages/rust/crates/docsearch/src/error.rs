//! Error types for configuration and topic loading.
//!
//! Library code uses `thiserror` enums; the binary wraps them with `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration failures, raised before any search work starts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `DOCSEARCH_PATH` is unset or empty.
    #[error("You need to declare DOCSEARCH_PATH environment variable.")]
    MissingPath,
}

/// Per-topic failures. These are reported and the search moves on.
#[derive(Error, Debug)]
pub enum TopicError {
    /// The topic file could not be read.
    #[error("Cannot read topic file {}: {source}", .path.display())]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The topic file is not valid YAML.
    #[error("{0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document parsed to nothing (empty file, null, empty mapping).
    #[error("No data received from YAML file.")]
    NoData,

    /// The top-level value is something other than a mapping.
    #[error("Topic document is not a mapping of categories.")]
    NotAMapping,

    /// An entry could not be encoded as JSON.
    #[error("Cannot encode entry as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}
