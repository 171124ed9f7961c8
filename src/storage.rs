//! JSON persistence for the knowledge base and its derived index.
//!
//! Each logical database is two independent documents in the data directory:
//! `<database>.json` holding `{entries, nextId}` and `<database>.index.json`
//! holding `{terms, idf, docCount}`. Unreadable or corrupt documents load as
//! empty defaults; writes go through a temp file and rename.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::CairnConfig;
use crate::knowledge::index::build_index;
use crate::knowledge::types::{Index, KnowledgeBase};

/// Handle on the file pair of one logical database.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
    knowledge_path: PathBuf,
    index_path: PathBuf,
}

impl Storage {
    /// Open the configured storage location, creating the directory if needed.
    pub fn open(config: &CairnConfig) -> Result<Self> {
        Self::open_at(config.resolved_data_dir(), &config.storage.database)
    }

    /// Open a named database inside `dir`, creating the directory if needed.
    pub fn open_at(dir: impl AsRef<Path>, database: &str) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;

        let storage = Self {
            knowledge_path: dir.join(format!("{database}.json")),
            index_path: dir.join(format!("{database}.index.json")),
            dir,
        };
        tracing::info!(path = %storage.knowledge_path.display(), "storage initialized");
        Ok(storage)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn knowledge_path(&self) -> &Path {
        &self.knowledge_path
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Load the collection, or an empty one if missing or unreadable.
    pub fn load_knowledge(&self) -> KnowledgeBase {
        read_json(&self.knowledge_path).unwrap_or_default()
    }

    /// Persist the full collection, overwriting prior content.
    pub fn save_knowledge(&self, kb: &KnowledgeBase) -> Result<()> {
        write_json(&self.knowledge_path, kb)
    }

    /// Load the persisted index, if one exists and parses.
    pub fn load_index(&self) -> Option<Index> {
        read_json(&self.index_path)
    }

    pub fn save_index(&self, index: &Index) -> Result<()> {
        write_json(&self.index_path, index)
    }

    /// The persisted index as-is, or one built fresh from `kb` when absent.
    ///
    /// No staleness check is made against the collection.
    pub fn index_or_rebuild(&self, kb: &KnowledgeBase) -> Index {
        self.load_index().unwrap_or_else(|| {
            tracing::debug!(entries = kb.len(), "no persisted index, rebuilding");
            build_index(&kb.entries)
        })
    }

    /// Combined size in bytes of both documents. Missing files count as zero.
    pub fn size_bytes(&self) -> u64 {
        [&self.knowledge_path, &self.index_path]
            .iter()
            .filter_map(|p| std::fs::metadata(p).ok())
            .map(|m| m.len())
            .sum()
    }

    /// Delete both documents. Missing files are not an error.
    pub fn reset(&self) -> Result<()> {
        for path in [&self.knowledge_path, &self.index_path] {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(e).with_context(|| format!("failed to remove {}", path.display()))
                }
            }
        }
        Ok(())
    }
}

/// Read and parse a JSON document. `None` if it is missing or does not parse.
fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable document, using empty default");
            None
        }
    }
}

/// Serialize to pretty JSON and replace `path` atomically (tmp + rename).
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(value).context("failed to serialize document")?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json)
        .with_context(|| format!("failed to write temp file: {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("failed to rename temp file to {}", path.display()))?;
    Ok(())
}
