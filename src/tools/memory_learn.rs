//! MCP `memory_learn` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `memory_learn` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MemoryLearnParams {
    #[schemars(description = "The knowledge to store, as natural language text")]
    pub content: String,

    #[schemars(description = "Short category label, e.g. 'pattern', 'bug', 'decision'. Defaults to 'general'.")]
    pub category: Option<String>,

    #[schemars(
        description = "Tags for the entry. Tags 'error'/'failure', 'success'/'solution' and 'pattern'/'best-practice' drive memory_suggest classification."
    )]
    pub tags: Option<Vec<String>>,

    #[schemars(description = "Where this knowledge came from. Defaults to 'manual'.")]
    pub source: Option<String>,
}
