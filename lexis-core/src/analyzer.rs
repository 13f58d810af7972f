//! Document metrics aggregation

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::MetricsConfig;
use crate::connectors::{ConnectorClassifier, ConnectorUsage};
use crate::diversity::{mattr, mtld};
use crate::document::PreprocessedDocument;
use crate::error::Result;
use crate::lexicon::{get_lexicon, Lexicon};
use crate::record::{ConnectorMetrics, DocumentMetrics};
use crate::sentence_stats::SentenceStats;
use crate::types::{round_to, ConnectorCategory};

/// Computes [`DocumentMetrics`] for preprocessed documents
///
/// The analyzer holds no per-document state, so one instance can serve any
/// number of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct DocumentAnalyzer {
    lexicon: Arc<Lexicon>,
    config: MetricsConfig,
}

impl DocumentAnalyzer {
    /// Create an analyzer with custom parameters
    pub fn new(lexicon: Arc<Lexicon>, config: MetricsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { lexicon, config })
    }

    /// Create an analyzer with default parameters
    pub fn with_defaults(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            config: MetricsConfig::default(),
        }
    }

    /// Create an analyzer for an embedded lexicon
    pub fn for_lexicon(code: &str, config: MetricsConfig) -> Result<Self> {
        Self::new(get_lexicon(code)?, config)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Analyze one document
    ///
    /// Fails only if the document breaks the input contract; empty
    /// documents produce zero-valued metrics.
    pub fn analyze(&self, document: &PreprocessedDocument) -> Result<DocumentMetrics> {
        document.validate()?;

        let tokens = &document.tokens;
        let word_count = document.words.len();
        let sentence_count = document.sentences.len();
        let distinct_word_count = tokens.iter().collect::<HashSet<_>>().len();

        let per_sentence = |value: usize| {
            if sentence_count == 0 {
                0.0
            } else {
                round_to(value as f64 / sentence_count as f64, 2)
            }
        };

        let sentences = SentenceStats::from_sentences(
            &document.sentences,
            self.config.short_sentence_lt,
            self.config.long_sentence_gt,
        );

        let matches = ConnectorClassifier::new(&self.lexicon).classify(tokens);
        let connectors = ConnectorMetrics {
            connector_count: matches.len(),
            distinct_connector_count: matches.distinct_count(),
            coordinating_count: matches.count(ConnectorCategory::Coordinating),
            subordinating_count: matches.count(ConnectorCategory::Subordinating),
            adverbial_count: matches.count(ConnectorCategory::Adverbial),
            connectors: matches.forms().map(str::to_string).collect(),
            proficiency_score: matches.proficiency_score(),
            level_counts: matches.level_counts(),
            usage: ConnectorUsage::from_forms(matches.forms()),
            connectors_per_sentence: per_sentence(matches.len()),
        };

        let metrics = DocumentMetrics {
            id: document.id.clone(),
            word_count,
            distinct_word_count,
            sentence_count,
            sentence_length: per_sentence(word_count),
            mtld: mtld(tokens, self.config.mtld_threshold),
            mattr: mattr(tokens, self.config.mattr_window),
            basic_vocabulary_share: self.basic_vocabulary_share(document),
            sentences,
            connectors,
        };

        tracing::debug!(
            document = document.display_id(),
            words = metrics.word_count,
            sentences = metrics.sentence_count,
            connectors = metrics.connectors.connector_count,
            "analyzed document"
        );

        Ok(metrics)
    }

    /// Analyze documents independently, preserving input order
    ///
    /// A rejected document does not affect the others.
    pub fn analyze_batch(&self, documents: &[PreprocessedDocument]) -> Vec<Result<DocumentMetrics>> {
        #[cfg(feature = "parallel")]
        let results: Vec<Result<DocumentMetrics>> = {
            use rayon::prelude::*;
            documents.par_iter().map(|doc| self.analyze(doc)).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<Result<DocumentMetrics>> =
            documents.iter().map(|doc| self.analyze(doc)).collect();

        results
    }

    fn basic_vocabulary_share(&self, document: &PreprocessedDocument) -> Option<f64> {
        if !self.lexicon.has_basic_vocabulary() {
            return None;
        }
        if document.tokens.is_empty() {
            return Some(0.0);
        }
        let basic = document
            .tokens
            .iter()
            .filter(|token| self.lexicon.is_basic_word(&token.lemma))
            .count();
        Some(round_to(basic as f64 / document.tokens.len() as f64, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{CefrLevel, PosTag, Token};

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(
            Lexicon::from_entries(
                "test",
                "Test",
                [
                    ("und", ConnectorCategory::Coordinating, CefrLevel::A1),
                    ("dass", ConnectorCategory::Subordinating, CefrLevel::A2),
                    ("außerdem", ConnectorCategory::Adverbial, CefrLevel::A2),
                ],
            )
            .unwrap(),
        )
    }

    fn reference_document() -> PreprocessedDocument {
        PreprocessedDocument::new(
            vec!["Und dass.".to_string(), "Außerdem und.".to_string()],
            ["Und", "dass", "Außerdem", "und"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            vec![
                Token::new("und", PosTag::Cconj),
                Token::new("dass", PosTag::Sconj),
                Token::new("außerdem", PosTag::Adv),
                Token::new("und", PosTag::Cconj),
            ],
        )
    }

    #[test]
    fn test_reference_connectors() {
        let analyzer = DocumentAnalyzer::with_defaults(lexicon());
        let metrics = analyzer.analyze(&reference_document()).unwrap();
        let c = &metrics.connectors;

        assert_eq!(c.connector_count, 4);
        assert_eq!(c.distinct_connector_count, 3);
        assert_eq!(c.coordinating_count, 2);
        assert_eq!(c.subordinating_count, 1);
        assert_eq!(c.adverbial_count, 1);
        assert_eq!(c.proficiency_score, Some(0.5));
        assert_eq!(c.usage.unique_connectors_used, 3);
        assert_eq!(c.usage.pct_used_once, 66.67);
        assert_eq!(c.usage.pct_used_more_than_3, 0.0);
        assert_eq!(c.connectors_per_sentence, 2.0);
        assert_eq!(c.level_counts[&CefrLevel::A1], 2);
        assert_eq!(c.level_counts[&CefrLevel::A2], 2);
    }

    #[test]
    fn test_counts_and_ratios() {
        let analyzer = DocumentAnalyzer::with_defaults(lexicon());
        let metrics = analyzer.analyze(&reference_document()).unwrap();

        assert_eq!(metrics.word_count, 4);
        assert_eq!(metrics.distinct_word_count, 3);
        assert_eq!(metrics.sentence_count, 2);
        assert_eq!(metrics.sentence_length, 2.0);
        assert_eq!(metrics.mattr, 0.75);
        assert_eq!(metrics.basic_vocabulary_share, None);
    }

    #[test]
    fn test_empty_document() {
        let analyzer = DocumentAnalyzer::with_defaults(lexicon());
        let metrics = analyzer
            .analyze(&PreprocessedDocument::default())
            .unwrap();

        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.sentence_length, 0.0);
        assert_eq!(metrics.mtld, 0.0);
        assert_eq!(metrics.mattr, 0.0);
        assert_eq!(metrics.sentences, SentenceStats::default());
        assert_eq!(metrics.connectors.connector_count, 0);
        assert_eq!(metrics.connectors.proficiency_score, None);
        assert_eq!(metrics.connectors.connectors_per_sentence, 0.0);
        assert_eq!(metrics.connectors.usage, ConnectorUsage::default());
    }

    #[test]
    fn test_malformed_document_rejected() {
        let analyzer = DocumentAnalyzer::with_defaults(lexicon());
        let mut document = reference_document();
        document.tokens.pop();

        assert!(matches!(
            analyzer.analyze(&document),
            Err(Error::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_basic_vocabulary_share() {
        let lexicon = Arc::new(
            Lexicon::from_entries(
                "test",
                "Test",
                [("und", ConnectorCategory::Coordinating, CefrLevel::A1)],
            )
            .unwrap()
            .with_basic_vocabulary(["und", "Haus"]),
        );
        let analyzer = DocumentAnalyzer::with_defaults(lexicon);

        let document = PreprocessedDocument::new(
            vec!["Haus und Garten.".to_string()],
            vec!["Haus".into(), "und".into(), "Garten".into()],
            vec![
                Token::new("haus", PosTag::Noun),
                Token::new("und", PosTag::Cconj),
                Token::new("garten", PosTag::Noun),
            ],
        );

        let metrics = analyzer.analyze(&document).unwrap();
        assert_eq!(metrics.basic_vocabulary_share, Some(0.667));

        let empty = analyzer.analyze(&PreprocessedDocument::default()).unwrap();
        assert_eq!(empty.basic_vocabulary_share, Some(0.0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MetricsConfig {
            mattr_window: 0,
            ..MetricsConfig::default()
        };
        assert!(matches!(
            DocumentAnalyzer::new(lexicon(), config),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let analyzer = DocumentAnalyzer::with_defaults(lexicon());
        let mut broken = reference_document().with_id("broken");
        broken.words.clear();

        let documents = vec![
            reference_document().with_id("first"),
            broken,
            PreprocessedDocument::default().with_id("third"),
        ];

        let results = analyzer.analyze_batch(&documents);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().id.as_deref(), Some("first"));
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().id.as_deref(), Some("third"));
    }

    #[test]
    fn test_for_lexicon_german() {
        let analyzer = DocumentAnalyzer::for_lexicon("de", MetricsConfig::default()).unwrap();
        assert_eq!(analyzer.lexicon().code(), "de");
        assert!(DocumentAnalyzer::for_lexicon("xx", MetricsConfig::default()).is_err());
    }
}
