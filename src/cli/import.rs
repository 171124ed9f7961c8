use anyhow::{Context, Result};
use std::path::Path;

use cairn::config::CairnConfig;
use cairn::knowledge::store::import_entries;
use cairn::knowledge::types::KnowledgeBase;

/// Import entries from a JSON export.
///
/// Entries are appended under fresh ids so they never collide with existing
/// ones; the index is rebuilt afterwards.
pub fn import(config: &CairnConfig, file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read import file: {}", file.display()))?;

    let data: KnowledgeBase =
        serde_json::from_str(&json).context("failed to parse import JSON")?;

    let storage = super::open_storage(config)?;
    let mut kb = storage.load_knowledge();

    println!("Importing {} entries...", data.len());
    let offered = data.len();
    let (imported, index) = import_entries(&mut kb, data.entries);

    storage.save_knowledge(&kb)?;
    storage.save_index(&index)?;

    println!("Import complete:");
    println!("  Entries imported: {imported}");
    if imported < offered {
        println!("  Entries skipped:  {} (empty content)", offered - imported);
    }
    println!("  Total entries:    {}", kb.len());

    Ok(())
}
