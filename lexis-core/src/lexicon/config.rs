//! TOML schema for lexicon files

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{CefrLevel, ConnectorCategory};

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: MetadataConfig,
    pub connectors: ConnectorTables,
    #[serde(default)]
    pub basic_vocabulary: Option<BasicVocabularyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

/// One surface-form → level table per category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectorTables {
    #[serde(default)]
    pub coordinating: BTreeMap<String, CefrLevel>,
    #[serde(default)]
    pub subordinating: BTreeMap<String, CefrLevel>,
    #[serde(default)]
    pub adverbial: BTreeMap<String, CefrLevel>,
}

impl ConnectorTables {
    /// Table for a single category
    pub fn table(&self, category: ConnectorCategory) -> &BTreeMap<String, CefrLevel> {
        match category {
            ConnectorCategory::Coordinating => &self.coordinating,
            ConnectorCategory::Subordinating => &self.subordinating,
            ConnectorCategory::Adverbial => &self.adverbial,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicVocabularyConfig {
    pub words: Vec<String>,
}
