pub mod doctor;
pub mod export;
pub mod import;
pub mod inspect;
pub mod learn;
pub mod patterns;
pub mod reindex;
pub mod reset;
pub mod search;
pub mod stats;

use anyhow::Result;
use cairn::config::CairnConfig;
use cairn::storage::Storage;

/// Open the configured storage for a terminal command.
fn open_storage(config: &CairnConfig) -> Result<Storage> {
    Storage::open(config)
}
