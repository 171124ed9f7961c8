use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::KnowledgeError;
use super::index::searchable_text;
use super::score::{cosine_similarity, Ranking};
use super::tokenizer::tokenize;
use super::types::{Entry, Feedback, Index, KnowledgeBase};
use super::vectorize::{term_frequency, weigh};

// ── Public types ──────────────────────────────────────────────────────────────

/// A recall request.
#[derive(Debug, Clone)]
pub struct RecallQuery<'a> {
    pub text: &'a str,
    pub limit: usize,
    /// Exact category match, when set.
    pub category: Option<&'a str>,
    pub min_score: f64,
}

/// A single ranked result.
#[derive(Debug, Clone, Serialize)]
pub struct RecallHit {
    pub id: u64,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    /// Adjusted score rounded to three decimals.
    pub score: f64,
    pub access_count: u64,
    pub usefulness: i64,
}

/// Full view of one entry, as returned by inspection.
///
/// Field names follow the other tool responses rather than the persisted layout.
#[derive(Debug, Clone, Serialize)]
pub struct EntryDetail {
    pub id: u64,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub access_count: u64,
    pub usefulness: i64,
    pub feedback: Vec<Feedback>,
}

impl From<&Entry> for EntryDetail {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            content: entry.content.clone(),
            category: entry.category.clone(),
            tags: entry.tags.clone(),
            source: entry.source.clone(),
            timestamp: entry.timestamp,
            access_count: entry.access_count,
            usefulness: entry.usefulness,
            feedback: entry.feedback.clone(),
        }
    }
}

/// Response from [`recall`].
#[derive(Debug, Serialize)]
pub struct RecallResponse {
    pub results: Vec<RecallHit>,
    /// Corpus size before any filtering.
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecallResponse {
    /// Whether access counters were bumped and the collection needs saving.
    pub fn touched_entries(&self) -> bool {
        !self.results.is_empty()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Rank entries against a query: weigh → cosine → adjust → filter → sort → truncate → track.
///
/// Entries sharing no token with the query are never matches, whatever their
/// recency or usefulness. Every returned entry has its `access_count` bumped.
pub fn recall(
    kb: &mut KnowledgeBase,
    index: &Index,
    query: &RecallQuery<'_>,
    ranking: &Ranking,
    now: DateTime<Utc>,
) -> RecallResponse {
    let total = kb.len();
    if kb.is_empty() {
        return RecallResponse {
            results: Vec::new(),
            total,
            message: Some("No knowledge stored yet. Use memory_learn to add entries.".into()),
        };
    }

    // 1. Query vector, weighted by the (possibly stale) index
    let query_vector = weigh(&term_frequency(&tokenize(query.text)), &index.idf);

    // 2. Score every candidate from its freshly tokenized text
    let mut scored: Vec<(usize, f64)> = kb
        .entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| query.category.is_none_or(|c| entry.category == c))
        .filter_map(|(pos, entry)| {
            let entry_vector =
                weigh(&term_frequency(&tokenize(&searchable_text(entry))), &index.idf);
            let similarity = cosine_similarity(&query_vector, &entry_vector);
            if similarity <= 0.0 {
                return None;
            }
            let score = ranking.adjust(similarity, entry, now);
            (score >= query.min_score).then_some((pos, score))
        })
        .collect();

    // 3. Rank (stable, so ties keep id order) and truncate
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(query.limit);

    // 4. Access tracking + response
    let results: Vec<RecallHit> = scored
        .into_iter()
        .map(|(pos, score)| {
            let entry = &mut kb.entries[pos];
            entry.access_count += 1;
            RecallHit::from_entry(entry, round_score(score))
        })
        .collect();

    tracing::debug!(query = %query.text, matched = results.len(), total, "recall ranked");

    let message = results
        .is_empty()
        .then(|| "No relevant entries found.".to_string());

    RecallResponse {
        results,
        total,
        message,
    }
}

/// Look up a single entry by id.
pub fn inspect_entry(kb: &KnowledgeBase, id: u64) -> Result<&Entry> {
    kb.get(id)
        .ok_or_else(|| KnowledgeError::EntryNotFound(id).into())
}

impl RecallHit {
    fn from_entry(entry: &Entry, score: f64) -> Self {
        Self {
            id: entry.id,
            content: entry.content.clone(),
            category: entry.category.clone(),
            tags: entry.tags.clone(),
            source: entry.source.clone(),
            timestamp: entry.timestamp,
            score,
            access_count: entry.access_count,
            usefulness: entry.usefulness,
        }
    }
}

fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

/// Truncate content to `max_chars` characters, appending "..." if truncated.
pub fn truncate_preview(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &content[..end]),
        None => content.to_string(),
    }
}
