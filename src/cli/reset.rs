//! CLI `reset` command: delete all entries after user confirmation.

use anyhow::{bail, Result};
use std::io::Write;

use cairn::config::CairnConfig;

/// Delete the knowledge base and index after user confirmation.
pub fn reset(config: &CairnConfig, assume_yes: bool) -> Result<()> {
    let storage = super::open_storage(config)?;

    if !assume_yes {
        println!("WARNING: This will permanently delete ALL entries and the search index.");
        println!("Knowledge: {}", storage.knowledge_path().display());
        print!("\nType YES to confirm: ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if input.trim() != "YES" {
            bail!("reset cancelled");
        }
    }

    storage.reset()?;

    println!("All entries deleted. Reset complete.");
    Ok(())
}
