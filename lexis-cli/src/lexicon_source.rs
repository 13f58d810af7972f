//! Lexicon source management for CLI

use anyhow::{Context, Result};
use lexis_core::{get_lexicon, Lexicon};
use std::path::PathBuf;
use std::sync::Arc;

/// Source of the connector lexicon
#[derive(Debug, Clone, PartialEq)]
pub enum LexiconSource {
    /// Lexicon embedded in the binary
    BuiltIn(String),
    /// External lexicon TOML file
    External(PathBuf),
}

impl LexiconSource {
    /// Pick the source from command-line arguments
    ///
    /// An explicit file wins over a lexicon code.
    pub fn from_args(code: &str, file: Option<&PathBuf>) -> Self {
        match file {
            Some(path) => LexiconSource::External(path.clone()),
            None => LexiconSource::BuiltIn(code.to_string()),
        }
    }

    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::BuiltIn(code) => format!("Built-in: {code}"),
            LexiconSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the lexicon
    pub fn load(&self) -> Result<Arc<Lexicon>> {
        match self {
            LexiconSource::BuiltIn(code) => {
                get_lexicon(code).with_context(|| format!("Failed to load lexicon '{code}'"))
            }
            LexiconSource::External(path) => {
                let lexicon = Lexicon::from_file(path).with_context(|| {
                    format!("Failed to load lexicon file: {}", path.display())
                })?;
                Ok(Arc::new(lexicon))
            }
        }
    }
}
