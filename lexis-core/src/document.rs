//! Preprocessed document input
//!
//! A document arrives already normalized, split into sentences, tokenized
//! and tagged. The engine only checks that the pieces fit together.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Token;

/// Output of the external NLP preprocessing for one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreprocessedDocument {
    /// Caller-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whitespace-normalized text
    #[serde(default)]
    pub text: String,
    /// Sentence strings in order
    #[serde(default)]
    pub sentences: Vec<String>,
    /// Alphabetic surface words in order
    #[serde(default)]
    pub words: Vec<String>,
    /// One `(lemma, POS)` token per word
    #[serde(default)]
    pub tokens: Vec<Token>,
}

impl PreprocessedDocument {
    pub fn new(
        sentences: Vec<String>,
        words: Vec<String>,
        tokens: Vec<Token>,
    ) -> Self {
        Self {
            id: None,
            text: sentences.join(" "),
            sentences,
            words,
            tokens,
        }
    }

    /// Attach an identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Check the input contract
    ///
    /// Words and tokens must be position-aligned, and every lemma must be a
    /// non-empty lowercase string.
    pub fn validate(&self) -> Result<()> {
        if self.words.len() != self.tokens.len() {
            return Err(Error::InvalidDocument(format!(
                "{} words but {} tokens; words and tokens must be aligned",
                self.words.len(),
                self.tokens.len()
            )));
        }

        for (index, token) in self.tokens.iter().enumerate() {
            if token.lemma.is_empty() {
                return Err(Error::InvalidDocument(format!(
                    "empty lemma at token {index}"
                )));
            }
            if token.lemma.to_lowercase() != token.lemma {
                return Err(Error::InvalidDocument(format!(
                    "lemma '{}' at token {index} is not lowercased",
                    token.lemma
                )));
            }
        }

        Ok(())
    }

    /// Identifier for log messages
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("<unnamed>")
    }
}
