//! Linguistic metrics for preprocessed documents
//!
//! This crate turns the output of an external NLP pipeline (sentences,
//! words and lemma/POS tokens) into quantitative metrics:
//!
//! - **Lexical diversity**: bidirectional MTLD and moving-average TTR
//! - **Sentence statistics**: length distribution and short/long shares
//! - **Connectors**: POS-gated classification of coordinating, subordinating
//!   and adverbial connectors, scored on the CEFR scale, plus a usage
//!   frequency profile
//!
//! All computation is deterministic and free of I/O. Lexicons are loaded
//! once, validated, and shared read-only between documents and threads.
//!
//! # Example
//!
//! ```rust
//! use lexis_core::{DocumentAnalyzer, MetricsConfig, PosTag, PreprocessedDocument, Token};
//!
//! let analyzer = DocumentAnalyzer::for_lexicon("de", MetricsConfig::default()).unwrap();
//!
//! let document = PreprocessedDocument::new(
//!     vec!["Ich bleibe zu Hause, weil es regnet.".to_string()],
//!     ["Ich", "bleibe", "zu", "Hause", "weil", "es", "regnet"]
//!         .iter()
//!         .map(|w| w.to_string())
//!         .collect(),
//!     vec![
//!         Token::new("ich", PosTag::Pron),
//!         Token::new("bleiben", PosTag::Verb),
//!         Token::new("zu", PosTag::Adp),
//!         Token::new("haus", PosTag::Noun),
//!         Token::new("weil", PosTag::Sconj),
//!         Token::new("es", PosTag::Pron),
//!         Token::new("regnen", PosTag::Verb),
//!     ],
//! );
//!
//! let metrics = analyzer.analyze(&document).unwrap();
//! assert_eq!(metrics.connectors.subordinating_count, 1);
//! assert_eq!(metrics.connectors.proficiency_score, Some(1.0));
//! ```

pub mod analyzer;
pub mod config;
pub mod connectors;
pub mod diversity;
pub mod document;
pub mod error;
pub mod lexicon;
pub mod record;
pub mod sentence_stats;
pub mod types;

pub use analyzer::DocumentAnalyzer;
pub use config::{ConfigBuilder, MetricsConfig};
pub use connectors::{ConnectorClassifier, ConnectorMatch, ConnectorMatches, ConnectorUsage};
pub use document::PreprocessedDocument;
pub use error::{Error, LexiconError, Result};
pub use lexicon::{get_lexicon, list_available_lexicons, ConnectorEntry, Lexicon};
pub use record::{ConnectorMetrics, DocumentMetrics};
pub use sentence_stats::SentenceStats;
pub use types::{CefrLevel, ConnectorCategory, PosTag, Token};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_thread_safety_bounds() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Lexicon>();
        assert_send_sync::<DocumentAnalyzer>();
        assert_send_sync::<Arc<Lexicon>>();
        assert_send_sync::<DocumentMetrics>();
    }
}
