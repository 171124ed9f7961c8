mod helpers;

use cairn::knowledge::stats::memory_stats;
use chrono::{Duration, Utc};
use helpers::{learn_entry, learn_entry_at, recall_default, test_storage};

#[test]
fn learn_then_recall_returns_entry_first() {
    let (_tmp, storage) = test_storage();
    let id = learn_entry(
        &storage,
        "React useEffect cleanup runs before re-render",
        Some("pattern"),
        &["react", "hooks"],
    );
    learn_entry(&storage, "Postgres connection pool sizing", Some("database"), &["postgres"]);

    let response = recall_default(&storage, "cleanup effects react");
    assert!(!response.results.is_empty());
    assert_eq!(response.results[0].id, id);
    assert!(response.results[0].score >= 0.1);
    assert_eq!(response.total, 2);
}

#[test]
fn unrelated_query_returns_nothing() {
    let (_tmp, storage) = test_storage();
    learn_entry(&storage, "Kafka consumer group rebalancing", Some("streaming"), &["kafka"]);

    let response = recall_default(&storage, "chocolate cake recipe");
    assert!(response.results.is_empty());
    assert_eq!(response.total, 1);
}

#[test]
fn recall_on_empty_store_is_informational() {
    let (_tmp, storage) = test_storage();
    let response = recall_default(&storage, "anything at all");
    assert!(response.results.is_empty());
    assert_eq!(response.total, 0);
    assert!(response.message.is_some());
}

#[test]
fn recent_entry_scores_higher_than_old_twin() {
    let (_tmp, storage) = test_storage();
    let now = Utc::now();
    let old = learn_entry_at(&storage, "Circuit breaker half-open state", None, &[], now - Duration::hours(48));
    let fresh = learn_entry_at(&storage, "Circuit breaker half-open state", None, &[], now - Duration::minutes(5));

    let response = recall_default(&storage, "circuit breaker");
    let score_of = |id| response.results.iter().find(|h| h.id == id).unwrap().score;
    assert!(score_of(fresh) > score_of(old));
}

#[test]
fn repeated_query_keeps_relative_order() {
    let (_tmp, storage) = test_storage();
    let t = Utc::now() - Duration::days(2);
    learn_entry_at(&storage, "HTTP retry budget per client", None, &["http"], t);
    learn_entry_at(&storage, "Retry storms amplify outages", None, &["retry"], t);
    learn_entry_at(&storage, "HTTP keep-alive tuning", None, &["http"], t);

    let first: Vec<u64> = recall_default(&storage, "http retry").results.iter().map(|h| h.id).collect();
    let second: Vec<u64> = recall_default(&storage, "http retry").results.iter().map(|h| h.id).collect();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn recall_bumps_access_count_visible_in_stats() {
    let (_tmp, storage) = test_storage();
    let id = learn_entry(&storage, "Feature flags need an owner", Some("process"), &[]);

    let before = memory_stats(&storage.load_knowledge(), storage.load_index().as_ref(), 0);
    assert_eq!(before.total_accesses, 0);

    let response = recall_default(&storage, "feature flags owner");
    assert_eq!(response.results[0].id, id);

    let kb = storage.load_knowledge();
    assert_eq!(kb.get(id).unwrap().access_count, 1);
    let after = memory_stats(&kb, storage.load_index().as_ref(), 0);
    assert_eq!(after.total_accesses, 1);
}

#[test]
fn learn_persists_index_alongside_entries() {
    let (_tmp, storage) = test_storage();
    learn_entry(&storage, "Document every public API", Some("docs"), &[]);
    learn_entry(&storage, "Public API changes need a changelog entry", Some("docs"), &[]);

    let index = storage.load_index().unwrap();
    assert_eq!(index.doc_count, 2);
    assert_eq!(index.terms["public"], vec![1, 2]);
    assert_eq!(index.terms["changelog"], vec![2]);
}
