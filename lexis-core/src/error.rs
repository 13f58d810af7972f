//! Error types for the metrics engine

use thiserror::Error;

use crate::types::ConnectorCategory;

/// Errors raised while loading or validating lexicon tables
#[derive(Debug, Error)]
pub enum LexiconError {
    /// TOML could not be read or parsed
    #[error("Failed to parse lexicon '{source_name}': {reason}")]
    Parse {
        /// File path or embedded lexicon code
        source_name: String,
        /// Parser message
        reason: String,
    },

    /// No embedded lexicon with this code
    #[error("Unknown lexicon: {0}")]
    UnknownLexicon(String),

    /// A surface form occurs in more than one category table
    #[error("Ambiguous surface form '{form}': listed as both {first} and {second}")]
    AmbiguousSurfaceForm {
        /// The offending surface form
        form: String,
        /// Category it was first seen in
        first: ConnectorCategory,
        /// Category it was seen in again
        second: ConnectorCategory,
    },

    /// Surface form is empty or not lowercase
    #[error("Invalid surface form '{0}': connector forms must be non-empty and lowercase")]
    InvalidSurfaceForm(String),

    /// No connector entries at all
    #[error("Lexicon '{0}' defines no connectors")]
    Empty(String),
}

/// Errors returned by the metrics engine
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid metric parameters
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Lexicon loading or validation failed
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// The preprocessed document breaks the input contract
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;
