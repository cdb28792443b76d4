//! Error types for the Trisect library.
//!
//! All errors are represented by the [`TrisectError`] enum. Tokenizers return
//! these errors; [`TextTokenizer`](crate::text_tokenizer::TextTokenizer)
//! absorbs them into diagnostic results so that none of them escape a
//! tokenization call.
//!
//! # Examples
//!
//! ```
//! use trisect::error::{Result, TrisectError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TrisectError::invalid_input("input text must be a non-empty string."))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Trisect operations.
#[derive(Error, Debug)]
pub enum TrisectError {
    /// I/O errors (configuration files, dictionaries on disk)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The text handed to a tokenizer was empty or missing
    #[error("Error: {0}")]
    InvalidInput(String),

    /// An optional tokenization capability was not compiled in
    #[error("{capability} is not enabled. Install: {install}")]
    CapabilityUnavailable { capability: String, install: String },

    /// A capability is present but a resource it needs could not be loaded
    #[error("{resource} not found. Install it with: {command}")]
    ResourceMissing { resource: String, command: String },

    /// Analysis-related errors (tokenization, segmentation, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with TrisectError.
pub type Result<T> = std::result::Result<T, TrisectError>;

impl TrisectError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        TrisectError::InvalidInput(msg.into())
    }

    /// Create a new capability unavailable error.
    pub fn unavailable<C: Into<String>, I: Into<String>>(capability: C, install: I) -> Self {
        TrisectError::CapabilityUnavailable {
            capability: capability.into(),
            install: install.into(),
        }
    }

    /// Create a new resource missing error.
    pub fn resource_missing<R: Into<String>, C: Into<String>>(resource: R, command: C) -> Self {
        TrisectError::ResourceMissing {
            resource: resource.into(),
            command: command.into(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TrisectError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TrisectError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TrisectError::Other(msg.into())
    }

    /// The failure text without the variant prefix.
    ///
    /// Diagnostics embed this text after their own prefix, so an analysis
    /// error reads "Lindera tokenization error: segmenter broke" rather than
    /// repeating "Analysis error:".
    pub fn detail(&self) -> String {
        match self {
            TrisectError::InvalidInput(msg)
            | TrisectError::Analysis(msg)
            | TrisectError::Config(msg)
            | TrisectError::Other(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
