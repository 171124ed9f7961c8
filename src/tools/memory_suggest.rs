//! MCP `memory_suggest` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `memory_suggest` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MemorySuggestParams {
    #[schemars(
        description = "Description of the current task or situation; related warnings, recommendations and best practices are returned"
    )]
    pub context: String,
}
