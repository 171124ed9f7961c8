//! Aggregate pattern analysis over the whole collection: category and tag
//! histograms, tag co-occurrence, and the most frequently recalled entries.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use super::search::truncate_preview;
use super::types::KnowledgeBase;
use crate::config::PatternsConfig;

/// Separator between the two tags of a co-occurring pair.
pub const PAIR_SEPARATOR: &str = " + ";

/// A label with how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub name: String,
    pub count: u64,
}

/// One of the most frequently recalled entries.
#[derive(Debug, Clone, Serialize)]
pub struct AccessedEntry {
    pub id: u64,
    pub content: String,
    pub category: String,
    pub access_count: u64,
}

/// Full analysis, available once the collection is large enough.
#[derive(Debug, Serialize)]
pub struct PatternAnalysis {
    pub total_entries: usize,
    pub categories: Vec<Count>,
    pub top_tags: Vec<Count>,
    pub tag_pairs: Vec<Count>,
    pub most_accessed: Vec<AccessedEntry>,
}

/// Response from memory_patterns.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PatternsResponse {
    /// Too few entries to say anything meaningful.
    Insufficient { message: String, total_entries: usize },
    Analysis(PatternAnalysis),
}

/// Analyze the collection, or report that it is too small.
pub fn memory_patterns(kb: &KnowledgeBase, config: &PatternsConfig) -> PatternsResponse {
    if kb.len() < config.min_entries {
        return PatternsResponse::Insufficient {
            message: format!(
                "Need at least {} entries for pattern analysis (have {}).",
                config.min_entries,
                kb.len()
            ),
            total_entries: kb.len(),
        };
    }

    let mut categories: HashMap<&str, u64> = HashMap::new();
    let mut tags: HashMap<&str, u64> = HashMap::new();
    let mut pairs: HashMap<String, u64> = HashMap::new();

    for entry in &kb.entries {
        *categories.entry(entry.category.as_str()).or_insert(0) += 1;
        for tag in &entry.tags {
            *tags.entry(tag.as_str()).or_insert(0) += 1;
        }

        // distinct + sorted, so each pair is keyed lexicographically once per entry
        let distinct: Vec<&str> = entry
            .tags
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        for (i, first) in distinct.iter().enumerate() {
            for second in &distinct[i + 1..] {
                *pairs
                    .entry(format!("{first}{PAIR_SEPARATOR}{second}"))
                    .or_insert(0) += 1;
            }
        }
    }

    let mut most_accessed: Vec<&_> = kb.entries.iter().collect();
    most_accessed.sort_by(|a, b| b.access_count.cmp(&a.access_count));
    let most_accessed = most_accessed
        .into_iter()
        .take(config.top_accessed)
        .map(|e| AccessedEntry {
            id: e.id,
            content: truncate_preview(&e.content, config.preview_chars),
            category: e.category.clone(),
            access_count: e.access_count,
        })
        .collect();

    PatternsResponse::Analysis(PatternAnalysis {
        total_entries: kb.len(),
        categories: ranked(categories.into_iter().map(|(k, v)| (k.to_string(), v)), usize::MAX),
        top_tags: ranked(tags.into_iter().map(|(k, v)| (k.to_string(), v)), config.top_tags),
        tag_pairs: ranked(pairs, config.top_pairs),
        most_accessed,
    })
}

/// Sort by count descending (name ascending on ties) and keep the first `limit`.
fn ranked(counts: impl IntoIterator<Item = (String, u64)>, limit: usize) -> Vec<Count> {
    let mut counts: Vec<Count> = counts
        .into_iter()
        .map(|(name, count)| Count { name, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    counts.truncate(limit);
    counts
}
