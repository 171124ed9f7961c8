use anyhow::Result;

use cairn::config::CairnConfig;
use cairn::knowledge::patterns::{memory_patterns, Count, PatternsResponse};

/// Print pattern analysis in the terminal.
pub fn patterns(config: &CairnConfig) -> Result<()> {
    let storage = super::open_storage(config)?;
    let kb = storage.load_knowledge();

    let analysis = match memory_patterns(&kb, &config.patterns) {
        PatternsResponse::Insufficient { message, .. } => {
            println!("{message}");
            return Ok(());
        }
        PatternsResponse::Analysis(analysis) => analysis,
    };

    println!("Knowledge Patterns ({} entries)", analysis.total_entries);
    println!("{}", "=".repeat(40));
    print_counts("Categories:", &analysis.categories);
    print_counts("Top tags:", &analysis.top_tags);
    print_counts("Tag pairs:", &analysis.tag_pairs);

    println!("Most accessed:");
    for entry in &analysis.most_accessed {
        println!("  #{:<5} {:>4}x  {}", entry.id, entry.access_count, entry.content);
    }

    Ok(())
}

fn print_counts(title: &str, counts: &[Count]) {
    println!("{title}");
    if counts.is_empty() {
        println!("  (none)");
    }
    for c in counts {
        println!("  {:<24} {}", c.name, c.count);
    }
    println!();
}
