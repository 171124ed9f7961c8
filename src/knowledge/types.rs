//! Core knowledge type definitions.
//!
//! Defines [`Entry`] (one stored unit of knowledge), [`Feedback`] (an evaluation
//! note), [`KnowledgeBase`] (the persisted collection), and [`Index`] (the derived
//! inverted index + IDF table). Field names serialize in camelCase so the JSON
//! documents stay compatible with existing stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category assigned when a caller does not provide one.
pub const DEFAULT_CATEGORY: &str = "general";

/// Source label assigned when a caller does not provide one.
pub const DEFAULT_SOURCE: &str = "manual";

/// A single stored knowledge record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Positive, monotonically assigned, never reused.
    pub id: u64,
    /// The text content of the entry.
    pub content: String,
    /// Short label, `"general"` when absent.
    #[serde(default = "default_category")]
    pub category: String,
    /// Free-form tags. Duplicates are kept as given.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Provenance label, `"manual"` when absent.
    #[serde(default = "default_source")]
    pub source: String,
    /// Creation instant. Never modified after `learn`.
    pub timestamp: DateTime<Utc>,
    /// Number of recall result sets this entry has appeared in.
    #[serde(default)]
    pub access_count: u64,
    /// Signed evaluation counter.
    #[serde(default)]
    pub usefulness: i64,
    /// Append-only evaluation notes.
    #[serde(default)]
    pub feedback: Vec<Feedback>,
}

/// A timestamped evaluation note attached to an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// The full entry collection plus the next-id counter.
///
/// Entries are kept in insertion order, which is also id order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default = "first_id")]
    pub next_id: u64,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: first_id(),
        }
    }
}

impl KnowledgeBase {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Find an entry by id.
    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Find an entry by id for mutation.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }
}

/// Derived inverted index, rebuilt wholesale from a [`KnowledgeBase`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    /// token → ids of entries whose searchable text contains it.
    #[serde(default)]
    pub terms: BTreeMap<String, Vec<u64>>,
    /// token → smoothed inverse document frequency.
    #[serde(default)]
    pub idf: BTreeMap<String, f64>,
    /// Number of entries the index was built from.
    #[serde(default)]
    pub doc_count: usize,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn first_id() -> u64 {
    1
}
