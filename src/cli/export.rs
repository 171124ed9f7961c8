use anyhow::Result;

use cairn::config::CairnConfig;

/// Export the full knowledge base as JSON to stdout.
pub fn export(config: &CairnConfig) -> Result<()> {
    let storage = super::open_storage(config)?;
    let kb = storage.load_knowledge();

    let json = serde_json::to_string_pretty(&kb)?;
    println!("{json}");

    eprintln!("Exported {} entries.", kb.len());
    Ok(())
}
