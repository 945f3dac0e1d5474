//! Error types for the Spellrank library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpellrankError`] enum. Setup failures (configuration, vocabulary source)
//! are meant to abort a run, while per-call failures such as
//! [`SpellrankError::EmptyVocabulary`] can be handled by the caller.
//!
//! # Examples
//!
//! ```
//! use spellrank::error::{Result, SpellrankError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellrankError::configuration("n_suggestions must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Spellrank operations.
#[derive(Error, Debug)]
pub enum SpellrankError {
    /// I/O errors (file operations, terminal, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Missing or invalid configuration (weights, counts, source selection).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The vocabulary provider was unreachable or returned unusable data.
    #[error("Source fetch error: {0}")]
    SourceFetch(String),

    /// A search was attempted against zero candidate words.
    #[error("Empty vocabulary: {0}")]
    EmptyVocabulary(String),

    /// A parallel worker failed while computing distances.
    #[error("Compute error: {0}")]
    Compute(String),

    /// Malformed arguments to an operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for operations that may fail with SpellrankError.
pub type Result<T> = std::result::Result<T, SpellrankError>;

impl SpellrankError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        SpellrankError::Configuration(msg.into())
    }

    /// Create a new source fetch error.
    pub fn source_fetch<S: Into<String>>(msg: S) -> Self {
        SpellrankError::SourceFetch(msg.into())
    }

    /// Create a new empty vocabulary error.
    pub fn empty_vocabulary<S: Into<String>>(msg: S) -> Self {
        SpellrankError::EmptyVocabulary(msg.into())
    }

    /// Create a new compute error.
    pub fn compute<S: Into<String>>(msg: S) -> Self {
        SpellrankError::Compute(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellrankError::InvalidArgument(msg.into())
    }

    /// Whether the error happened during setup and should abort the run.
    pub fn is_fatal_setup(&self) -> bool {
        matches!(
            self,
            SpellrankError::Configuration(_)
                | SpellrankError::SourceFetch(_)
                | SpellrankError::Yaml(_)
        )
    }
}
