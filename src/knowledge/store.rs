//! Write path: id allocation, field defaults, and rebuilding the index.
//!
//! [`learn`] is the single entry point for new knowledge. It appends to the
//! collection and returns the index rebuilt over the whole collection, which
//! the caller persists alongside it.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::KnowledgeError;
use super::index::build_index;
use super::types::{Entry, Index, KnowledgeBase, DEFAULT_CATEGORY, DEFAULT_SOURCE};

/// Caller-supplied fields for a new entry.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub content: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub source: Option<String>,
}

/// Result returned from a learn operation.
#[derive(Debug, Serialize)]
pub struct LearnResult {
    pub id: u64,
    pub category: String,
    pub tags: Vec<String>,
    /// Distinct tokens in the rebuilt index.
    pub indexed_terms: usize,
    pub total_entries: usize,
}

/// Append a new entry and rebuild the index over the full collection.
///
/// Blank category or source fall back to the defaults; blank tags are dropped.
pub fn learn(
    kb: &mut KnowledgeBase,
    new_entry: NewEntry,
    now: DateTime<Utc>,
) -> Result<(LearnResult, Index)> {
    if new_entry.content.trim().is_empty() {
        return Err(KnowledgeError::EmptyContent.into());
    }

    let id = allocate_id(kb);
    let entry = Entry {
        id,
        content: new_entry.content,
        category: non_blank(new_entry.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        tags: new_entry
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        source: non_blank(new_entry.source).unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        timestamp: now,
        access_count: 0,
        usefulness: 0,
        feedback: Vec::new(),
    };

    let (category, tags) = (entry.category.clone(), entry.tags.clone());
    kb.entries.push(entry);

    let index = build_index(&kb.entries);
    tracing::debug!(id, terms = index.terms.len(), "index rebuilt");

    let result = LearnResult {
        id,
        category,
        tags,
        indexed_terms: index.terms.len(),
        total_entries: kb.entries.len(),
    };
    Ok((result, index))
}

/// Append previously exported entries under freshly allocated ids.
///
/// Everything except the id is kept as exported. Returns the number appended
/// and the rebuilt index.
pub fn import_entries(kb: &mut KnowledgeBase, entries: Vec<Entry>) -> (usize, Index) {
    let mut imported = 0;
    for mut entry in entries {
        if entry.content.trim().is_empty() {
            continue;
        }
        entry.id = allocate_id(kb);
        kb.entries.push(entry);
        imported += 1;
    }
    (imported, build_index(&kb.entries))
}

/// Take the next id, skipping past any id already present in the collection.
fn allocate_id(kb: &mut KnowledgeBase) -> u64 {
    let floor = kb.entries.iter().map(|e| e.id + 1).max().unwrap_or(1);
    let id = kb.next_id.max(floor);
    kb.next_id = id + 1;
    id
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(content: &str) -> NewEntry {
        NewEntry {
            content: content.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_learn_assigns_sequential_ids() {
        let mut kb = KnowledgeBase::default();
        let now = Utc::now();
        let (first, _) = learn(&mut kb, new_entry("first entry"), now).unwrap();
        let (second, _) = learn(&mut kb, new_entry("second entry"), now).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(kb.next_id, 3);
        assert_eq!(second.total_entries, 2);
    }

    #[test]
    fn test_learn_applies_defaults() {
        let mut kb = KnowledgeBase::default();
        let now = Utc::now();
        learn(
            &mut kb,
            NewEntry {
                content: "Default fields".into(),
                category: Some("   ".into()),
                tags: vec!["rust".into(), " ".into(), "rust".into()],
                source: None,
            },
            now,
        )
        .unwrap();

        let entry = &kb.entries[0];
        assert_eq!(entry.category, "general");
        assert_eq!(entry.source, "manual");
        assert_eq!(entry.tags, vec!["rust", "rust"]);
        assert_eq!(entry.timestamp, now);
        assert_eq!(entry.access_count, 0);
        assert_eq!(entry.usefulness, 0);
    }

    #[test]
    fn test_learn_rejects_empty_content() {
        let mut kb = KnowledgeBase::default();
        let err = learn(&mut kb, new_entry("  \n"), Utc::now()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<KnowledgeError>(),
            Some(&KnowledgeError::EmptyContent)
        );
        assert!(kb.is_empty());
        assert_eq!(kb.next_id, 1);
    }

    #[test]
    fn test_learn_rebuilds_index_over_all_entries() {
        let mut kb = KnowledgeBase::default();
        let now = Utc::now();
        learn(&mut kb, new_entry("tokio runtime"), now).unwrap();
        let (result, index) = learn(&mut kb, new_entry("tokio channels"), now).unwrap();

        assert_eq!(index.doc_count, 2);
        assert_eq!(index.terms["tokio"], vec![1, 2]);
        assert_eq!(result.indexed_terms, index.terms.len());
    }

    #[test]
    fn test_ids_never_reused_after_stale_counter() {
        let mut kb = KnowledgeBase::default();
        let now = Utc::now();
        learn(&mut kb, new_entry("one"), now).unwrap();
        learn(&mut kb, new_entry("two"), now).unwrap();
        kb.next_id = 1;

        let (third, _) = learn(&mut kb, new_entry("three"), now).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_import_reallocates_ids() {
        let mut source = KnowledgeBase::default();
        let now = Utc::now();
        learn(&mut source, new_entry("exported one"), now).unwrap();
        learn(&mut source, new_entry("exported two"), now).unwrap();

        let mut target = KnowledgeBase::default();
        learn(&mut target, new_entry("already here"), now).unwrap();

        let (imported, index) = import_entries(&mut target, source.entries.clone());
        assert_eq!(imported, 2);
        let ids: Vec<u64> = target.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(target.entries[2].content, "exported two");
        assert_eq!(index.doc_count, 3);
    }
}
