use anyhow::Result;
use chrono::Utc;

use cairn::config::CairnConfig;
use cairn::knowledge::score::Ranking;
use cairn::knowledge::search::{recall, truncate_preview, RecallQuery};

/// Run a recall from the terminal. Like the MCP tool, this bumps access counts.
pub fn search(
    config: &CairnConfig,
    query: &str,
    limit: Option<usize>,
    category: Option<&str>,
    min_score: Option<f64>,
) -> Result<()> {
    let storage = super::open_storage(config)?;
    let mut kb = storage.load_knowledge();
    let index = storage.index_or_rebuild(&kb);

    let recall_query = RecallQuery {
        text: query,
        limit: limit.unwrap_or(config.retrieval.default_limit),
        category,
        min_score: min_score.unwrap_or(config.retrieval.min_score),
    };
    let ranking = Ranking::from_config(&config.retrieval);

    let response = recall(&mut kb, &index, &recall_query, &ranking, Utc::now());
    if response.touched_entries() {
        storage.save_knowledge(&kb)?;
    }

    if response.results.is_empty() {
        println!(
            "{}",
            response.message.as_deref().unwrap_or("No results found.")
        );
        return Ok(());
    }

    println!(
        "Found {} result(s) among {} entries\n",
        response.results.len(),
        response.total
    );

    for (i, hit) in response.results.iter().enumerate() {
        println!(
            "  {}. #{} [{}] (score: {:.3}, accessed: {}, usefulness: {})",
            i + 1,
            hit.id,
            hit.category,
            hit.score,
            hit.access_count,
            hit.usefulness,
        );
        println!("     {}", truncate_preview(&hit.content, 120));
        if !hit.tags.is_empty() {
            println!("     tags: {}", hit.tags.join(", "));
        }
        println!();
    }

    Ok(())
}
