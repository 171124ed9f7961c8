use anyhow::Result;
use chrono::Utc;

use cairn::config::CairnConfig;
use cairn::knowledge::store::{learn as learn_entry, NewEntry};

/// Store a new entry from the terminal.
pub fn learn(config: &CairnConfig, new_entry: NewEntry) -> Result<()> {
    let storage = super::open_storage(config)?;
    let mut kb = storage.load_knowledge();

    let (result, index) = learn_entry(&mut kb, new_entry, Utc::now())?;
    storage.save_knowledge(&kb)?;
    storage.save_index(&index)?;

    println!(
        "Stored entry #{} [{}] ({} entries, {} indexed terms)",
        result.id, result.category, result.total_entries, result.indexed_terms
    );
    Ok(())
}
