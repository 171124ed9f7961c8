use cairn::knowledge::types::KnowledgeBase;
use cairn::storage::Storage;
use tempfile::TempDir;

mod helpers;

use helpers::{learn_entry, recall_default};

#[test]
fn open_creates_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("nested").join("store");
    assert!(!dir.exists());

    let storage = Storage::open_at(&dir, "knowledge").unwrap();
    assert!(dir.is_dir());
    assert_eq!(storage.load_knowledge(), KnowledgeBase::default());
}

#[test]
fn open_fails_when_directory_cannot_be_created() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, "file in the way").unwrap();

    let result = Storage::open_at(blocker.join("store"), "knowledge");
    assert!(result.is_err());
}

#[test]
fn corrupt_knowledge_file_loads_as_empty() {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::open_at(tmp.path(), "knowledge").unwrap();
    std::fs::write(storage.knowledge_path(), "{ this is not json").unwrap();

    let kb = storage.load_knowledge();
    assert!(kb.is_empty());
    assert_eq!(kb.next_id, 1);

    // a learn after corruption starts over instead of failing
    let id = learn_entry(&storage, "Fresh start after corruption", None, &[]);
    assert_eq!(id, 1);
}

#[test]
fn corrupt_index_is_rebuilt_on_recall() {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::open_at(tmp.path(), "knowledge").unwrap();
    let id = learn_entry(&storage, "Vector clocks order concurrent events", None, &[]);
    std::fs::write(storage.index_path(), "{ truncated").unwrap();

    assert!(storage.load_index().is_none());
    let response = recall_default(&storage, "vector clocks");
    assert_eq!(response.results[0].id, id);
}

#[test]
fn separate_databases_do_not_share_entries() {
    let tmp = TempDir::new().unwrap();
    let work = Storage::open_at(tmp.path(), "work").unwrap();
    let home = Storage::open_at(tmp.path(), "home").unwrap();

    learn_entry(&work, "Quarterly planning notes", None, &[]);

    assert_eq!(work.load_knowledge().len(), 1);
    assert!(home.load_knowledge().is_empty());
}
