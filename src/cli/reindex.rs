//! CLI `reindex` command: rebuild the persisted index from the current entries.

use anyhow::Result;

use cairn::config::CairnConfig;
use cairn::knowledge::index::build_index;

/// Rebuild and persist the index over every stored entry.
pub fn reindex(config: &CairnConfig) -> Result<()> {
    let storage = super::open_storage(config)?;
    let kb = storage.load_knowledge();

    let index = build_index(&kb.entries);
    storage.save_index(&index)?;

    println!(
        "Rebuilt index over {} entries ({} terms).",
        index.doc_count,
        index.terms.len()
    );
    Ok(())
}
