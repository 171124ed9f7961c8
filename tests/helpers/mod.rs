#![allow(dead_code)]

use cairn::knowledge::score::Ranking;
use cairn::knowledge::search::{recall, RecallQuery, RecallResponse};
use cairn::knowledge::store::{learn, NewEntry};
use cairn::storage::Storage;
use chrono::{DateTime, Utc};
use tempfile::TempDir;

/// Open a fresh storage in a temp directory. Keep the `TempDir` alive for the test.
pub fn test_storage() -> (TempDir, Storage) {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::open_at(tmp.path(), "knowledge").unwrap();
    (tmp, storage)
}

/// Learn an entry through the full load → learn → save cycle. Returns the new id.
pub fn learn_entry(
    storage: &Storage,
    content: &str,
    category: Option<&str>,
    tags: &[&str],
) -> u64 {
    learn_entry_at(storage, content, category, tags, Utc::now())
}

/// Same as [`learn_entry`], with an explicit creation time.
pub fn learn_entry_at(
    storage: &Storage,
    content: &str,
    category: Option<&str>,
    tags: &[&str],
    at: DateTime<Utc>,
) -> u64 {
    let mut kb = storage.load_knowledge();
    let (result, index) = learn(
        &mut kb,
        NewEntry {
            content: content.to_string(),
            category: category.map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            source: None,
        },
        at,
    )
    .unwrap();
    storage.save_knowledge(&kb).unwrap();
    storage.save_index(&index).unwrap();
    result.id
}

/// Recall with default limit and threshold, persisting access counts.
pub fn recall_default(storage: &Storage, text: &str) -> RecallResponse {
    recall_with(
        storage,
        &RecallQuery {
            text,
            limit: 10,
            category: None,
            min_score: 0.1,
        },
        Utc::now(),
    )
}

/// Recall through the full load → index → recall → save cycle.
pub fn recall_with(storage: &Storage, query: &RecallQuery<'_>, now: DateTime<Utc>) -> RecallResponse {
    let mut kb = storage.load_knowledge();
    let index = storage.index_or_rebuild(&kb);
    let response = recall(&mut kb, &index, query, &Ranking::default(), now);
    if response.touched_entries() {
        storage.save_knowledge(&kb).unwrap();
    }
    response
}
