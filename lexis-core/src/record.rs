//! Per-document result record

use serde::Serialize;
use std::collections::BTreeMap;

use crate::connectors::ConnectorUsage;
use crate::sentence_stats::SentenceStats;
use crate::types::CefrLevel;

/// All metrics computed for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Alphabetic words
    pub word_count: usize,
    /// Distinct `(lemma, POS)` tokens
    pub distinct_word_count: usize,
    pub sentence_count: usize,
    /// Words per sentence, 0.0 without sentences
    pub sentence_length: f64,
    pub mtld: f64,
    pub mattr: f64,
    /// Share of tokens from the basic vocabulary, `None` if the lexicon has none
    pub basic_vocabulary_share: Option<f64>,
    pub sentences: SentenceStats,
    pub connectors: ConnectorMetrics,
}

/// Connector counts, proficiency and usage for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorMetrics {
    pub connector_count: usize,
    pub distinct_connector_count: usize,
    pub coordinating_count: usize,
    pub subordinating_count: usize,
    pub adverbial_count: usize,
    /// Matched surface forms in text order
    pub connectors: Vec<String>,
    /// Mean CEFR ordinal (A1 = 0 .. C2 = 5), `None` without connectors
    pub proficiency_score: Option<f64>,
    pub level_counts: BTreeMap<CefrLevel, usize>,
    pub usage: ConnectorUsage,
    /// Connectors per sentence, 0.0 without sentences
    pub connectors_per_sentence: f64,
}
