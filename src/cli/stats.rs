use anyhow::Result;

use cairn::config::CairnConfig;
use cairn::knowledge::stats::memory_stats;

/// Display knowledge store statistics in the terminal.
pub fn stats(config: &CairnConfig) -> Result<()> {
    let storage = super::open_storage(config)?;
    let kb = storage.load_knowledge();
    let index = storage.load_index();

    let response = memory_stats(&kb, index.as_ref(), storage.size_bytes());

    println!("Knowledge Statistics");
    println!("{}", "=".repeat(40));
    println!("  Total entries:       {}", response.total_entries);
    println!("  Total accesses:      {}", response.total_accesses);
    println!("  Avg usefulness:      {:.2}", response.average_usefulness);
    println!("  Indexed terms:       {}", response.indexed_terms);
    println!();

    println!("By Category:");
    let mut categories: Vec<_> = response.categories.iter().collect();
    categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (category, count) in categories {
        println!("  {:<16} {}", category, count);
    }
    println!();

    println!("Storage size:          {} bytes", response.storage_bytes);
    if let Some(ref oldest) = response.oldest_entry {
        println!("Oldest entry:          {}", oldest.to_rfc3339());
    }
    if let Some(ref newest) = response.newest_entry {
        println!("Newest entry:          {}", newest.to_rfc3339());
    }

    Ok(())
}
