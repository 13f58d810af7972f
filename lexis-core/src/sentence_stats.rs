//! Sentence length distribution

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::types::round_to;

/// Sentences with fewer words than this count as short
pub const DEFAULT_SHORT_LT: usize = 6;

/// Sentences with more words than this count as long
pub const DEFAULT_LONG_GT: usize = 25;

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\w+(?:[-'’.]\w+)*").expect("word pattern is valid"))
}

/// Number of purely alphabetic words in a sentence
///
/// Punctuation is ignored; numbers, abbreviations with inner dots and
/// hyphenated compounds are not counted as words.
pub fn alphabetic_word_count(sentence: &str) -> usize {
    word_pattern()
        .find_iter(sentence)
        .filter(|m| m.as_str().chars().all(char::is_alphabetic))
        .count()
}

/// Descriptive statistics over per-sentence word counts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentenceStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
    /// Fraction of sentences below the short threshold
    pub share_short: f64,
    /// Fraction of sentences above the long threshold
    pub share_long: f64,
}

impl SentenceStats {
    /// Compute statistics from word counts
    ///
    /// An empty slice yields the all-zero record.
    pub fn from_lengths(lengths: &[usize], short_lt: usize, long_gt: usize) -> Self {
        if lengths.is_empty() {
            return Self::default();
        }

        let count = lengths.len();
        let n = count as f64;
        let mean = lengths.iter().sum::<usize>() as f64 / n;

        let variance = lengths
            .iter()
            .map(|&len| {
                let diff = len as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / n;

        let mut sorted = lengths.to_vec();
        sorted.sort_unstable();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
        } else {
            sorted[mid] as f64
        };

        let short = lengths.iter().filter(|&&len| len < short_lt).count();
        let long = lengths.iter().filter(|&&len| len > long_gt).count();

        Self {
            count,
            mean: round_to(mean, 2),
            median: round_to(median, 2),
            std_dev: round_to(variance.sqrt(), 2),
            min: sorted[0],
            max: sorted[count - 1],
            share_short: round_to(short as f64 / n, 3),
            share_long: round_to(long as f64 / n, 3),
        }
    }

    /// Compute statistics directly from sentence strings
    pub fn from_sentences<S: AsRef<str>>(sentences: &[S], short_lt: usize, long_gt: usize) -> Self {
        let lengths: Vec<usize> = sentences
            .iter()
            .map(|s| alphabetic_word_count(s.as_ref()))
            .collect();
        Self::from_lengths(&lengths, short_lt, long_gt)
    }
}
