//! Error types for the parser.
//!
//! Building a tree never fails: malformed input ends up in the diagnostics
//! list instead. `ParserError` covers the layers around the core, loading
//! block lists and style rule files and writing output.

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON (de)serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A style rule in a configuration file is unusable.
    #[error("Invalid style rule '{prefix}': {reason}")]
    InvalidStyleRule { prefix: String, reason: String },

    /// Input or output format could not be determined.
    #[error("Unsupported format: '{0}'. Expected yaml, yml or json")]
    UnsupportedFormat(String),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
