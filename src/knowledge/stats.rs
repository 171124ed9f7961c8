use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::types::{Index, KnowledgeBase};

/// Response from memory_stats.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_entries: usize,
    /// Keyed by category name, serialized in name order.
    pub categories: BTreeMap<String, u64>,
    pub total_accesses: u64,
    pub average_usefulness: f64,
    /// Distinct tokens in the persisted index, `0` if none has been built.
    pub indexed_terms: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_entry: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest_entry: Option<DateTime<Utc>>,
    pub storage_bytes: u64,
}

/// Compute knowledge store statistics.
///
/// `storage_bytes` is supplied by the caller since only the storage layer knows the files.
pub fn memory_stats(kb: &KnowledgeBase, index: Option<&Index>, storage_bytes: u64) -> StatsResponse {
    let mut categories = BTreeMap::new();
    for entry in &kb.entries {
        *categories.entry(entry.category.clone()).or_insert(0) += 1;
    }

    let total_accesses = kb.entries.iter().map(|e| e.access_count).sum();
    let average_usefulness = if kb.is_empty() {
        0.0
    } else {
        let sum: i64 = kb.entries.iter().map(|e| e.usefulness).sum();
        sum as f64 / kb.len() as f64
    };

    StatsResponse {
        total_entries: kb.len(),
        categories,
        total_accesses,
        average_usefulness,
        indexed_terms: index.map_or(0, |i| i.terms.len()),
        oldest_entry: kb.entries.iter().map(|e| e.timestamp).min(),
        newest_entry: kb.entries.iter().map(|e| e.timestamp).max(),
        storage_bytes,
    }
}
