//! CLI `inspect` command: display full details for a single entry.

use anyhow::Result;

use cairn::config::CairnConfig;
use cairn::knowledge::search::inspect_entry;

/// Inspect a single entry by ID and display full details.
pub fn inspect(config: &CairnConfig, id: u64) -> Result<()> {
    let storage = super::open_storage(config)?;
    let kb = storage.load_knowledge();

    let e = inspect_entry(&kb, id)?;
    println!("Entry: #{}", e.id);
    println!("{}", "=".repeat(50));
    println!("  Category:       {}", e.category);
    println!("  Source:         {}", e.source);
    if !e.tags.is_empty() {
        println!("  Tags:           {}", e.tags.join(", "));
    }
    println!("  Created:        {}", e.timestamp.to_rfc3339());
    println!("  Access count:   {}", e.access_count);
    println!("  Usefulness:     {}", e.usefulness);
    println!();
    println!("Content:");
    println!("  {}", e.content);

    if !e.feedback.is_empty() {
        println!();
        println!("Feedback:");
        for note in &e.feedback {
            println!("  {} {}", note.timestamp.to_rfc3339(), note.text);
        }
    }

    Ok(())
}
