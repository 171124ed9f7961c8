//! Sparse term vectors: max-normalized term frequency and smoothed IDF weighting.

use std::collections::BTreeMap;

/// Sparse weighted vector keyed by token, iterated in token order.
pub type TermVector = BTreeMap<String, f64>;

/// Term frequency of each distinct token, scaled so the most frequent token is `1.0`.
///
/// An empty token sequence yields an empty vector.
pub fn term_frequency(tokens: &[String]) -> TermVector {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let max = counts.values().copied().max().unwrap_or(0);
    if max == 0 {
        return TermVector::new();
    }

    counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count as f64 / max as f64))
        .collect()
}

/// Smoothed inverse document frequency: `ln((n + 1) / (df + 1)) + 1`.
///
/// Positive and finite for every `0 <= df <= n`, including an empty corpus.
pub fn idf(doc_count: usize, doc_freq: usize) -> f64 {
    ((doc_count as f64 + 1.0) / (doc_freq as f64 + 1.0)).ln() + 1.0
}

/// Weight a term-frequency vector by an IDF table. Tokens missing from the
/// table keep weight `1.0`.
pub fn weigh(tf: &TermVector, idf_table: &BTreeMap<String, f64>) -> TermVector {
    tf.iter()
        .map(|(token, freq)| {
            let weight = idf_table.get(token).copied().unwrap_or(1.0);
            (token.clone(), freq * weight)
        })
        .collect()
}
