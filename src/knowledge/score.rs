//! Cosine similarity and the recency/usefulness ranking adjustments.

use chrono::{DateTime, Duration, Utc};

use super::types::Entry;
use super::vectorize::TermVector;
use crate::config::RetrievalConfig;

/// Cosine similarity of two sparse vectors. `0.0` if either has zero magnitude.
///
/// Sums run in token order, so the result is the same bits for any argument order.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(token, wa)| b.get(token).map(|wb| wa * wb))
        .sum();
    let mag_a: f64 = a.values().map(|w| w * w).sum();
    let mag_b: f64 = b.values().map(|w| w * w).sum();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a.sqrt() * mag_b.sqrt())
}

/// Linear post-similarity adjustments applied during recall.
///
/// The adjusted score is not clamped: a fresh entry can exceed `1.0` and a
/// disliked one can drop below `0.0`.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub recency_window: Duration,
    pub recency_bonus: f64,
    pub usefulness_weight: f64,
}

impl Default for Ranking {
    fn default() -> Self {
        Self::from_config(&RetrievalConfig::default())
    }
}

impl Ranking {
    /// Build from retrieval settings. A window too large for a `Duration`
    /// saturates to the maximum, so every entry counts as recent.
    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self {
            recency_window: Duration::try_hours(config.recency_window_hours)
                .unwrap_or(Duration::MAX),
            recency_bonus: config.recency_bonus,
            usefulness_weight: config.usefulness_weight,
        }
    }

    /// Whether `entry` was created within the recency window before `now`.
    pub fn is_recent(&self, entry: &Entry, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(entry.timestamp) < self.recency_window
    }

    /// Apply the recency bonus and usefulness weight to a raw similarity.
    pub fn adjust(&self, similarity: f64, entry: &Entry, now: DateTime<Utc>) -> f64 {
        let mut score = similarity;
        if self.is_recent(entry, now) {
            score += self.recency_bonus;
        }
        score + entry.usefulness as f64 * self.usefulness_weight
    }
}
