//! Connector frequency distribution

use serde::Serialize;
use std::collections::HashMap;

use crate::types::round_to;

/// How evenly a document spreads its connector repertoire
///
/// Percentages are shares of the distinct forms used, rounded to 2 decimals.
/// The three bands partition the forms, so they add up to 100 up to rounding
/// (and are all 0.0 when no connector was used).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConnectorUsage {
    pub unique_connectors_used: usize,
    pub pct_used_once: f64,
    pub pct_used_two_to_three: f64,
    pub pct_used_more_than_3: f64,
}

impl ConnectorUsage {
    /// Summarize a sequence of connector surface forms
    pub fn from_forms<'a, I>(forms: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut frequencies: HashMap<&str, usize> = HashMap::new();
        for form in forms {
            *frequencies.entry(form).or_insert(0) += 1;
        }

        let unique = frequencies.len();
        if unique == 0 {
            return Self::default();
        }

        let once = frequencies.values().filter(|&&f| f == 1).count();
        let more_than_3 = frequencies.values().filter(|&&f| f > 3).count();
        let two_to_three = unique - once - more_than_3;

        let pct = |n: usize| round_to(n as f64 / unique as f64 * 100.0, 2);

        Self {
            unique_connectors_used: unique,
            pct_used_once: pct(once),
            pct_used_two_to_three: pct(two_to_three),
            pct_used_more_than_3: pct(more_than_3),
        }
    }
}
