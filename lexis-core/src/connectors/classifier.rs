//! POS-gated connector classification

use std::collections::{BTreeMap, HashSet};

use crate::lexicon::{ConnectorEntry, Lexicon};
use crate::types::{CefrLevel, ConnectorCategory, Token};

/// A token recognised as a connector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorMatch {
    pub form: String,
    pub category: ConnectorCategory,
    pub level: CefrLevel,
}

/// Classifies tokens against a lexicon
#[derive(Debug, Clone, Copy)]
pub struct ConnectorClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> ConnectorClassifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Classify a single token
    ///
    /// A lexicon hit only counts when the token carries the tag its
    /// category requires, which separates e.g. the subordinator "während"
    /// from the preposition.
    pub fn classify_token(&self, token: &Token) -> Option<ConnectorEntry> {
        self.lexicon
            .lookup(&token.lemma)
            .filter(|entry| entry.category.required_pos() == token.pos)
    }

    /// Classify a token sequence, keeping matches in text order
    pub fn classify(&self, tokens: &[Token]) -> ConnectorMatches {
        let matches = tokens
            .iter()
            .filter_map(|token| {
                self.classify_token(token).map(|entry| ConnectorMatch {
                    form: token.lemma.clone(),
                    category: entry.category,
                    level: entry.level,
                })
            })
            .collect();

        ConnectorMatches { matches }
    }
}

/// Ordered connector matches of one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectorMatches {
    matches: Vec<ConnectorMatch>,
}

impl ConnectorMatches {
    /// Surface forms in text order, with repetition
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.form.as_str())
    }

    /// Matches of one category in text order
    pub fn by_category(
        &self,
        category: ConnectorCategory,
    ) -> impl Iterator<Item = &ConnectorMatch> {
        self.matches.iter().filter(move |m| m.category == category)
    }

    pub fn count(&self, category: ConnectorCategory) -> usize {
        self.by_category(category).count()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of distinct surface forms
    pub fn distinct_count(&self) -> usize {
        self.forms().collect::<HashSet<_>>().len()
    }

    /// Mean level ordinal (A1 = 0 .. C2 = 5), `None` without matches
    pub fn proficiency_score(&self) -> Option<f64> {
        if self.matches.is_empty() {
            return None;
        }
        let total: u32 = self.matches.iter().map(|m| u32::from(m.level.ordinal())).sum();
        Some(f64::from(total) / self.matches.len() as f64)
    }

    /// Number of matches per level; every level is present, A1 first
    pub fn level_counts(&self) -> BTreeMap<CefrLevel, usize> {
        let mut counts: BTreeMap<CefrLevel, usize> =
            CefrLevel::ALL.iter().map(|&level| (level, 0)).collect();
        for m in &self.matches {
            *counts.entry(m.level).or_insert(0) += 1;
        }
        counts
    }
}
