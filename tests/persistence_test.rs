mod helpers;

use cairn::knowledge::types::KnowledgeBase;
use helpers::{learn_entry, recall_default, test_storage};

#[test]
fn knowledge_document_uses_compatible_layout() {
    let (_tmp, storage) = test_storage();
    learn_entry(&storage, "Keep migrations reversible", Some("database"), &["migrations"]);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(storage.knowledge_path()).unwrap()).unwrap();
    assert_eq!(raw["nextId"], 2);
    let entry = &raw["entries"][0];
    assert_eq!(entry["id"], 1);
    assert_eq!(entry["category"], "database");
    assert_eq!(entry["tags"][0], "migrations");
    assert_eq!(entry["source"], "manual");
    assert_eq!(entry["accessCount"], 0);
    assert_eq!(entry["usefulness"], 0);
    assert!(entry["feedback"].as_array().unwrap().is_empty());
    assert!(entry["timestamp"].is_string());
}

#[test]
fn index_document_uses_compatible_layout() {
    let (_tmp, storage) = test_storage();
    learn_entry(&storage, "Keep migrations reversible", Some("database"), &[]);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(storage.index_path()).unwrap()).unwrap();
    assert_eq!(raw["docCount"], 1);
    assert_eq!(raw["terms"]["migrations"][0], 1);
    assert_eq!(raw["idf"]["migrations"], 1.0);
}

#[test]
fn reads_existing_store_written_elsewhere() {
    let (_tmp, storage) = test_storage();
    let existing = r#"{
        "entries": [
            {
                "id": 4,
                "content": "Rate limit login attempts",
                "category": "security",
                "tags": ["auth", "success"],
                "source": "incident-review",
                "timestamp": "2023-11-02T08:15:30.123Z",
                "accessCount": 7,
                "usefulness": 2,
                "feedback": [{"text": "applied to admin panel", "timestamp": "2023-11-03T09:00:00.000Z"}]
            }
        ],
        "nextId": 5
    }"#;
    std::fs::write(storage.knowledge_path(), existing).unwrap();

    let kb: KnowledgeBase = storage.load_knowledge();
    assert_eq!(kb.next_id, 5);
    assert_eq!(kb.entries[0].access_count, 7);
    assert_eq!(kb.entries[0].feedback.len(), 1);

    // no index on disk yet: recall rebuilds one and still finds the entry
    let response = recall_default(&storage, "login rate limit");
    assert_eq!(response.results[0].id, 4);
    assert_eq!(storage.load_knowledge().entries[0].access_count, 8);

    let id = learn_entry(&storage, "Rotate signing keys yearly", Some("security"), &[]);
    assert_eq!(id, 5);
}
