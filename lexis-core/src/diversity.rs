//! Lexical diversity measures
//!
//! Implements MTLD and MATTR as described by McCarthy & Jarvis (2010),
//! "MTLD, vocd-D, and HD-D: A validation study of sophisticated approaches
//! to lexical diversity assessment", Behavior Research Methods 42(2).
//!
//! Both measures are generic over the token type; the analyzer feeds them
//! `(lemma, POS)` tokens so that homographs with different tags count as
//! distinct types.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::types::round_to;

/// Standard MTLD type-token ratio cutoff
pub const DEFAULT_MTLD_THRESHOLD: f64 = 0.72;

/// Standard MATTR window length
pub const DEFAULT_MATTR_WINDOW: usize = 50;

/// Distinct types divided by tokens, 0.0 for an empty slice
pub fn type_token_ratio<T: Eq + Hash>(tokens: &[T]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let types: HashSet<&T> = tokens.iter().collect();
    types.len() as f64 / tokens.len() as f64
}

/// One directional MTLD pass over an iterator of tokens
///
/// Segments close when their TTR drops to `threshold` or below; an unclosed
/// tail contributes `(1 - ttr) / (1 - threshold)` of a factor. Returns
/// `tokens / factors`, or 0.0 when no factor accumulated.
///
/// `threshold` must lie strictly between 0 and 1; debug builds panic
/// otherwise.
pub fn mtld_forward<'a, T, I>(tokens: I, threshold: f64) -> f64
where
    T: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    debug_assert!(
        threshold > 0.0 && threshold < 1.0,
        "MTLD threshold must be in (0, 1), got {threshold}"
    );

    let mut factors = 0.0;
    let mut types: HashSet<&T> = HashSet::new();
    let mut segment_len = 0usize;
    let mut total = 0usize;

    for token in tokens {
        total += 1;
        segment_len += 1;
        types.insert(token);

        let ttr = types.len() as f64 / segment_len as f64;
        if ttr <= threshold {
            factors += 1.0;
            types.clear();
            segment_len = 0;
        }
    }

    if segment_len > 0 {
        let ttr = types.len() as f64 / segment_len as f64;
        factors += (1.0 - ttr) / (1.0 - threshold);
    }

    if factors > 0.0 {
        total as f64 / factors
    } else {
        0.0
    }
}

/// Bidirectional MTLD, rounded to 2 decimals
///
/// Mean of a forward pass and a pass over the reversed sequence.
pub fn mtld<T: Eq + Hash>(tokens: &[T], threshold: f64) -> f64 {
    debug_assert!(
        threshold > 0.0 && threshold < 1.0,
        "MTLD threshold must be in (0, 1), got {threshold}"
    );
    if tokens.is_empty() {
        return 0.0;
    }
    let forward = mtld_forward(tokens.iter(), threshold);
    let reverse = mtld_forward(tokens.iter().rev(), threshold);
    round_to((forward + reverse) / 2.0, 2)
}

/// Moving-average type-token ratio
///
/// Texts shorter than `window_size` fall back to the plain (unrounded) TTR.
/// Otherwise the mean TTR over all windows is returned, rounded to 2
/// decimals. The window is maintained incrementally, so this is O(n).
///
/// `window_size` must be positive; debug builds panic on 0 and release
/// builds fall back to the plain TTR.
pub fn mattr<T: Eq + Hash>(tokens: &[T], window_size: usize) -> f64 {
    debug_assert!(window_size > 0, "MATTR window must be positive");
    let n = tokens.len();
    if n == 0 {
        return 0.0;
    }
    if window_size == 0 || n < window_size {
        return type_token_ratio(tokens);
    }

    let mut counts: HashMap<&T, usize> = HashMap::with_capacity(window_size);
    for token in &tokens[..window_size] {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ttr_sum = counts.len() as f64 / window_size as f64;
    let windows = n - window_size + 1;

    for i in window_size..n {
        let outgoing = &tokens[i - window_size];
        if let Some(count) = counts.get_mut(outgoing) {
            *count -= 1;
            if *count == 0 {
                counts.remove(outgoing);
            }
        }
        *counts.entry(&tokens[i]).or_insert(0) += 1;

        ttr_sum += counts.len() as f64 / window_size as f64;
    }

    round_to(ttr_sum / windows as f64, 2)
}
