//! Unified connector lexicon
//!
//! All three category tables are merged into a single map keyed by surface
//! form, so classification needs exactly one lookup per token. Merging is
//! where cross-category ambiguity is detected.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::LexiconError;
use crate::lexicon::config::LexiconConfig;
use crate::types::{CefrLevel, ConnectorCategory};

/// Category and level of one connector surface form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorEntry {
    pub category: ConnectorCategory,
    pub level: CefrLevel,
}

/// Immutable connector lexicon with optional basic vocabulary
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    connectors: HashMap<String, ConnectorEntry>,
    basic_vocabulary: Option<HashSet<String>>,
}

impl Lexicon {
    /// Build a lexicon from `(surface form, category, level)` entries
    ///
    /// Fails if a form is empty, not lowercase, or listed under two
    /// categories. Listing the same form twice in one category keeps the
    /// last level.
    pub fn from_entries<'a, I>(
        code: impl Into<String>,
        name: impl Into<String>,
        entries: I,
    ) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (&'a str, ConnectorCategory, CefrLevel)>,
    {
        let code = code.into();
        let mut connectors: HashMap<String, ConnectorEntry> = HashMap::new();

        for (form, category, level) in entries {
            if form.is_empty() || form.to_lowercase() != form {
                return Err(LexiconError::InvalidSurfaceForm(form.to_string()));
            }

            if let Some(existing) = connectors.get(form) {
                if existing.category != category {
                    return Err(LexiconError::AmbiguousSurfaceForm {
                        form: form.to_string(),
                        first: existing.category,
                        second: category,
                    });
                }
            }

            connectors.insert(form.to_string(), ConnectorEntry { category, level });
        }

        if connectors.is_empty() {
            return Err(LexiconError::Empty(code));
        }

        Ok(Self {
            code,
            name: name.into(),
            connectors,
            basic_vocabulary: None,
        })
    }

    /// Attach a basic vocabulary, matched case-insensitively
    pub fn with_basic_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.basic_vocabulary = Some(
            words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        );
        self
    }

    /// Build from a parsed TOML configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, LexiconError> {
        let entries = ConnectorCategory::ALL.into_iter().flat_map(|category| {
            config
                .connectors
                .table(category)
                .iter()
                .map(move |(form, level)| (form.as_str(), category, *level))
        });

        let lexicon = Self::from_entries(&config.metadata.code, &config.metadata.name, entries)?;

        Ok(match &config.basic_vocabulary {
            Some(vocabulary) => lexicon.with_basic_vocabulary(&vocabulary.words),
            None => lexicon,
        })
    }

    /// Parse and validate a lexicon from TOML text
    pub fn from_toml_str(source_name: &str, content: &str) -> Result<Self, LexiconError> {
        let config: LexiconConfig = toml::from_str(content).map_err(|e| LexiconError::Parse {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;

        Self::from_config(&config)
    }

    /// Load a lexicon from an external TOML file
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|e| LexiconError::Parse {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let lexicon = Self::from_toml_str(&path.display().to_string(), &content)?;
        tracing::info!(
            code = %lexicon.code,
            connectors = lexicon.len(),
            "loaded lexicon from {}",
            path.display()
        );
        Ok(lexicon)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a surface form
    pub fn lookup(&self, form: &str) -> Option<ConnectorEntry> {
        self.connectors.get(form).copied()
    }

    /// Number of connector surface forms
    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    /// Surface forms of one category with their levels, sorted by level then form
    pub fn entries(&self, category: ConnectorCategory) -> Vec<(&str, CefrLevel)> {
        let mut entries: Vec<(&str, CefrLevel)> = self
            .connectors
            .iter()
            .filter(|(_, entry)| entry.category == category)
            .map(|(form, entry)| (form.as_str(), entry.level))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn has_basic_vocabulary(&self) -> bool {
        self.basic_vocabulary.is_some()
    }

    /// Size of the basic vocabulary (0 if none is loaded)
    pub fn basic_vocabulary_len(&self) -> usize {
        self.basic_vocabulary.as_ref().map_or(0, HashSet::len)
    }

    /// Whether a lemma belongs to the basic vocabulary
    pub fn is_basic_word(&self, lemma: &str) -> bool {
        match &self.basic_vocabulary {
            Some(words) => words.contains(lemma) || words.contains(&lemma.to_lowercase()),
            None => false,
        }
    }
}
