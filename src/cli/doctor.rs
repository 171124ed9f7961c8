//! CLI `doctor` command: check the storage files and print a health report.

use anyhow::Result;
use std::path::Path;

use cairn::config::CairnConfig;
use cairn::knowledge::types::{Index, KnowledgeBase};

/// Outcome of reading one stored document.
enum FileHealth<T> {
    Missing,
    Corrupt(String),
    Ok(T),
}

/// Check both storage documents and print a health report.
pub fn doctor(config: &CairnConfig) -> Result<()> {
    let storage = super::open_storage(config)?;

    println!("Cairn Health Report");
    println!("===================");
    println!();
    println!("Directory:         {}", storage.dir().display());
    println!("Database:          {}", config.storage.database);
    println!("Total size:        {}", format_bytes(storage.size_bytes()));
    println!();

    let knowledge = check::<KnowledgeBase>(storage.knowledge_path());
    let index = check::<Index>(storage.index_path());

    match &knowledge {
        FileHealth::Missing => println!("Knowledge file:    not found (empty store)"),
        FileHealth::Corrupt(e) => println!("Knowledge file:    CORRUPT ({e}), loads as empty"),
        FileHealth::Ok(kb) => println!(
            "Knowledge file:    OK ({} entries, next id {})",
            kb.len(),
            kb.next_id
        ),
    }

    match &index {
        FileHealth::Missing => println!("Index file:        not found (rebuilt on recall)"),
        FileHealth::Corrupt(e) => println!("Index file:        CORRUPT ({e}), rebuilt on recall"),
        FileHealth::Ok(idx) => println!(
            "Index file:        OK ({} documents, {} terms)",
            idx.doc_count,
            idx.terms.len()
        ),
    }

    if let (FileHealth::Ok(kb), FileHealth::Ok(idx)) = (&knowledge, &index) {
        if idx.doc_count != kb.len() {
            println!();
            println!(
                "WARNING: index covers {} entries but {} are stored. Run `cairn reindex`.",
                idx.doc_count,
                kb.len()
            );
        }
    }

    if matches!(knowledge, FileHealth::Corrupt(_)) {
        println!();
        println!("Recovery steps:");
        println!("  1. Restore from a backup: cp backup.json {}", storage.knowledge_path().display());
        println!("  2. Or reset and reimport a good export:");
        println!("     cairn reset && cairn import backup.json");
    }

    Ok(())
}

fn check<T: serde::de::DeserializeOwned>(path: &Path) -> FileHealth<T> {
    match std::fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileHealth::Missing,
        Err(e) => FileHealth::Corrupt(e.to_string()),
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(value) => FileHealth::Ok(value),
            Err(e) => FileHealth::Corrupt(e.to_string()),
        },
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
